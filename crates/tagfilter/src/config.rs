//! Markup conventions the filter looks for.

use serde::{Deserialize, Serialize};

pub const DEFAULT_POST_CLASS: &str = "post";
pub const DEFAULT_TAG_CLASS: &str = "tag";
pub const DEFAULT_TAGS_ATTRIBUTE: &str = "data-tags";
pub const DEFAULT_SELECTED_CLASS: &str = "selected";

/// Class and attribute names identifying posts and tag elements.
///
/// Every field is optional when deserializing; missing keys fall back to
/// the conventions of the stock blog theme (`.post[data-tags]`, `.tag`,
/// `.tag.selected`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub post_class: String,
    pub tag_class: String,
    pub tags_attribute: String,
    pub selected_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            post_class: DEFAULT_POST_CLASS.to_string(),
            tag_class: DEFAULT_TAG_CLASS.to_string(),
            tags_attribute: DEFAULT_TAGS_ATTRIBUTE.to_string(),
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
        }
    }
}

impl FilterConfig {
    /// Full class attribute for a tag element. Any other class the element
    /// carried is dropped.
    pub fn tag_class_name(&self, selected: bool) -> String {
        if selected {
            format!("{} {}", self.tag_class, self.selected_class)
        } else {
            self.tag_class.clone()
        }
    }

    pub fn post_selector(&self) -> String {
        format!(".{}", self.post_class)
    }

    pub fn tag_selector(&self) -> String {
        format!(".{}", self.tag_class)
    }
}
