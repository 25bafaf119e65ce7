//! The active tag set and its fragment encoding.
//!
//! Fragment format: `#tag1,tag2`. No escaping, no percent-decoding.
//! The set is never cached; callers re-parse the fragment on every pass.

use serde::{Deserialize, Serialize};

use super::tag::{Tag, TagList, TAG_SEPARATOR};

/// Leading delimiter of a navigation fragment.
pub const FRAGMENT_DELIMITER: char = '#';

/// Ordered selection of filter tags, in toggle order.
///
/// Uniqueness is not enforced: a hand-edited `#a,a` keeps both entries and
/// `toggle("a")` removes only the first one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveTags(Vec<Tag>);

impl ActiveTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the active set from a fragment, with or without the leading `#`.
    ///
    /// The body is split on commas. When the first element is empty, the
    /// last element is dropped: an absent or empty fragment yields an empty
    /// set, and a malformed `#,a` degrades to `[""]`.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        let raw = fragment.unwrap_or_default();
        let body = raw.strip_prefix(FRAGMENT_DELIMITER).unwrap_or(raw);
        let mut tags: Vec<Tag> = body.split(TAG_SEPARATOR).map(Tag::from).collect();
        if tags.first().is_some_and(|tag| tag.as_str().is_empty()) {
            tags.pop();
        }
        ActiveTags(tags)
    }

    /// Encode as a fragment: `#a,b`, or the empty string when nothing is active.
    pub fn to_fragment(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        format!("{}{}", FRAGMENT_DELIMITER, self)
    }

    /// Remove the first occurrence of `label`, or append it when absent.
    pub fn toggle(&mut self, label: &str) {
        match self.position(label) {
            Some(index) => {
                self.0.remove(index);
            }
            None => self.0.push(Tag::from(label)),
        }
    }

    pub fn toggled(mut self, label: &str) -> Self {
        self.toggle(label);
        self
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Whether a post declaring `declared` passes the filter.
    /// Vacuously true for an empty set.
    pub fn is_matched_by(&self, declared: &TagList) -> bool {
        self.0.iter().all(|tag| declared.contains(tag.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|tag| tag == label)
    }
}

impl std::fmt::Display for ActiveTags {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (index, tag) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "{TAG_SEPARATOR}")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

impl FromIterator<Tag> for ActiveTags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        ActiveTags(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(active: &ActiveTags) -> Vec<&str> {
        active.iter().map(Tag::as_str).collect()
    }

    #[test]
    fn absent_and_empty_fragments_parse_to_nothing() {
        assert!(ActiveTags::from_fragment(None).is_empty());
        assert!(ActiveTags::from_fragment(Some("")).is_empty());
        assert!(ActiveTags::from_fragment(Some("#")).is_empty());
    }

    #[test]
    fn leading_delimiter_is_optional() {
        let with = ActiveTags::from_fragment(Some("#a,b"));
        let without = ActiveTags::from_fragment(Some("a,b"));
        assert_eq!(with, without);
        assert_eq!(labels(&with), ["a", "b"]);
    }

    #[test]
    fn leading_empty_tag_drops_the_last_one() {
        let active = ActiveTags::from_fragment(Some("#,a"));
        assert_eq!(labels(&active), [""]);
        assert_eq!(active.clone().toggled("b").to_fragment(), "#,b");
        assert_eq!(labels(&ActiveTags::from_fragment(Some(",a,b"))), ["", "a"]);
    }

    #[test]
    fn only_first_delimiter_is_stripped() {
        let active = ActiveTags::from_fragment(Some("##a"));
        assert_eq!(labels(&active), ["#a"]);
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut active = ActiveTags::from_fragment(Some("#a"));
        active.toggle("b");
        assert_eq!(active.to_fragment(), "#a,b");
        active.toggle("a");
        assert_eq!(active.to_fragment(), "#b");
        active.toggle("b");
        assert_eq!(active.to_fragment(), "");
    }

    #[test]
    fn toggle_twice_is_identity() {
        let before = ActiveTags::from_fragment(Some("#x,y"));
        for label in ["x", "y", "z", ""] {
            let after = before.clone().toggled(label).toggled(label);
            assert_eq!(after.iter().count(), before.len(), "label {label:?}");
        }
        // Absent tags come back in place; present tags move to the end.
        assert_eq!(before.clone().toggled("z").toggled("z"), before);
        assert_eq!(labels(&before.clone().toggled("x").toggled("x")), ["y", "x"]);
    }

    #[test]
    fn duplicate_fragment_loses_one_occurrence_per_toggle() {
        let active = ActiveTags::from_fragment(Some("#a,b,a")).toggled("a");
        assert_eq!(labels(&active), ["b", "a"]);
        assert!(active.contains("a"));
    }

    #[test]
    fn empty_set_matches_every_post() {
        let active = ActiveTags::new();
        assert!(active.is_matched_by(&TagList::parse("anything")));
        assert!(active.is_matched_by(&TagList::default()));
    }

    #[test]
    fn match_requires_every_active_tag() {
        let active = ActiveTags::from_fragment(Some("#a,b"));
        assert!(active.is_matched_by(&TagList::parse("a,b,c")));
        assert!(active.is_matched_by(&TagList::parse("b,a")));
        assert!(!active.is_matched_by(&TagList::parse("a,c")));
        assert!(!active.is_matched_by(&TagList::default()));
    }
}
