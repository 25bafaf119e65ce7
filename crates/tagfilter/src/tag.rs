//! Tag values and parsed tag lists.
//! No browser dependencies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Separator used in both the fragment and the post attribute.
pub const TAG_SEPARATOR: char = ',';

/// A single tag label. Compared case-sensitively, byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Arc<str>);

impl Tag {
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Tag(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Tag::new(label)
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

/// Tags a post declares, parsed once from its comma-separated attribute.
///
/// The attribute is split verbatim: no trimming, no dedup. An empty
/// attribute yields a single empty tag, which can only match an empty
/// active tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<Tag>);

impl TagList {
    pub fn parse(attribute: &str) -> Self {
        TagList(attribute.split(TAG_SEPARATOR).map(Tag::from).collect())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|tag| tag == label)
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
}

impl FromIterator<Tag> for TagList {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        TagList(iter.into_iter().collect())
    }
}
