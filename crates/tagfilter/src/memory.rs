//! In-memory page host.
//!
//! Mirrors the browser's single-threaded event loop: writing a different
//! fragment queues a `FragmentChange`, and `run_until_quiescent` drains the
//! queue one event at a time. Used by the CLI preview and by tests.

use std::collections::VecDeque;

use serde::Serialize;

use super::page::{handle_event, Location, Page, PageEvent, PassSummary, PostElement, TagElement};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryPost {
    /// Display handle only (element id, heading). Not used for filtering.
    pub name: Option<String>,
    pub tags: Option<String>,
    pub visible: bool,
}

impl MemoryPost {
    pub fn new(tags: impl Into<String>) -> Self {
        Self {
            name: None,
            tags: Some(tags.into()),
            visible: true,
        }
    }

    pub fn untagged() -> Self {
        Self {
            name: None,
            tags: None,
            visible: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl PostElement for MemoryPost {
    fn declared_tags(&self) -> Option<String> {
        self.tags.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryTag {
    pub label: String,
    pub selected: bool,
}

impl MemoryTag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
        }
    }
}

impl TagElement for MemoryTag {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    fragment: String,
    posts: Vec<MemoryPost>,
    tags: Vec<MemoryTag>,
    pending: VecDeque<PageEvent>,
}

impl MemoryPage {
    pub fn new(posts: Vec<MemoryPost>, tags: Vec<MemoryTag>) -> Self {
        Self {
            fragment: String::new(),
            posts,
            tags,
            pending: VecDeque::new(),
        }
    }

    /// Set the fragment the page is opened with. Queues no event.
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = fragment.into();
        self
    }

    pub fn posts(&self) -> &[MemoryPost] {
        &self.posts
    }

    pub fn tags(&self) -> &[MemoryTag] {
        &self.tags
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Queue the page-load event.
    pub fn load(&mut self) {
        self.pending.push_back(PageEvent::Load);
    }

    /// Simulate the user editing the address bar or navigating history.
    pub fn navigate(&mut self, fragment: &str) {
        self.set_fragment(fragment);
    }

    /// Handle queued events in order until none remain.
    pub fn run_until_quiescent(&mut self) -> Vec<PassSummary> {
        let mut passes = Vec::new();
        while let Some(event) = self.pending.pop_front() {
            passes.push(handle_event(self, event));
        }
        passes
    }
}

impl Location for MemoryPage {
    fn fragment(&self) -> Option<String> {
        Some(self.fragment.clone())
    }

    fn set_fragment(&mut self, fragment: &str) {
        let normalized = fragment.strip_prefix('#').unwrap_or(fragment);
        let current = self.fragment.strip_prefix('#').unwrap_or(&self.fragment);
        if normalized == current {
            return;
        }
        self.fragment = if normalized.is_empty() {
            String::new()
        } else {
            format!("#{normalized}")
        };
        self.pending.push_back(PageEvent::FragmentChange);
    }
}

impl Page for MemoryPage {
    fn for_each_post(&mut self, visit: &mut dyn FnMut(&mut dyn PostElement)) {
        for post in &mut self.posts {
            visit(post);
        }
    }

    fn for_each_tag(&mut self, visit: &mut dyn FnMut(&mut dyn TagElement)) {
        for tag in &mut self.tags {
            visit(tag);
        }
    }
}
