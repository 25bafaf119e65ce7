//! Host abstraction and the filter operations.
//!
//! A host (browser DOM, in-memory page) exposes its navigation fragment,
//! its posts and its tag elements through these traits. The filter never
//! creates or removes elements; it only reads declared tags and labels and
//! writes visibility and selection.
//!
//! `filter_tag` writes the fragment and nothing else. Hosts are expected to
//! deliver a `PageEvent::FragmentChange` afterwards, which runs `apply`.

use serde::Serialize;

use super::active::ActiveTags;
use super::tag::TagList;

/// Read/write access to the page's navigation fragment.
pub trait Location {
    /// Current fragment including the leading `#`, if any.
    fn fragment(&self) -> Option<String>;

    /// Replace the fragment. An empty string clears it.
    fn set_fragment(&mut self, fragment: &str);
}

pub trait PostElement {
    /// Raw comma-separated tags attribute, `None` when the attribute is missing.
    fn declared_tags(&self) -> Option<String>;

    fn set_visible(&mut self, visible: bool);
}

pub trait TagElement {
    fn label(&self) -> String;

    /// Set or clear the selected flag, resetting any other visual state.
    fn set_selected(&mut self, selected: bool);
}

/// A document holding posts and tag elements.
pub trait Page: Location {
    fn for_each_post(&mut self, visit: &mut dyn FnMut(&mut dyn PostElement));

    fn for_each_tag(&mut self, visit: &mut dyn FnMut(&mut dyn TagElement));
}

/// Host events that trigger an evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PageEvent {
    Load,
    FragmentChange,
}

impl PageEvent {
    /// DOM event name the browser host listens for.
    pub fn dom_name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::FragmentChange => "hashchange",
        }
    }
}

/// Outcome of one evaluation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub active: ActiveTags,
    pub visible: usize,
    pub hidden: usize,
    pub selected: usize,
    pub unselected: usize,
    /// Posts without a tags attribute. Treated as declaring no tags.
    pub untagged: usize,
}

impl PassSummary {
    pub fn posts(&self) -> usize {
        self.visible + self.hidden
    }

    pub fn tags(&self) -> usize {
        self.selected + self.unselected
    }
}

impl std::fmt::Display for PassSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] posts {}/{} visible, tags {}/{} selected",
            self.active,
            self.visible,
            self.posts(),
            self.selected,
            self.tags()
        )?;
        if self.untagged > 0 {
            write!(f, ", {} untagged", self.untagged)?;
        }
        Ok(())
    }
}

/// Evaluate the current fragment and apply it to every post and tag element.
pub fn apply<P: Page + ?Sized>(page: &mut P) -> PassSummary {
    let active = ActiveTags::from_fragment(page.fragment().as_deref());

    let (mut visible, mut hidden, mut untagged) = (0, 0, 0);
    page.for_each_post(&mut |post| {
        let declared = match post.declared_tags() {
            Some(attribute) => TagList::parse(&attribute),
            None => {
                untagged += 1;
                TagList::default()
            }
        };
        let is_visible = active.is_matched_by(&declared);
        post.set_visible(is_visible);
        if is_visible {
            visible += 1;
        } else {
            hidden += 1;
        }
    });

    let (mut selected, mut unselected) = (0, 0);
    page.for_each_tag(&mut |tag| {
        let is_selected = active.contains(&tag.label());
        tag.set_selected(is_selected);
        if is_selected {
            selected += 1;
        } else {
            unselected += 1;
        }
    });

    PassSummary {
        active,
        visible,
        hidden,
        selected,
        unselected,
        untagged,
    }
}

/// Toggle `tag` in the fragment-encoded active set.
///
/// Returns the fragment that was written (empty when the set became empty).
/// Does not touch posts or tag elements.
pub fn filter_tag<L: Location + ?Sized>(location: &mut L, tag: &str) -> String {
    let fragment = ActiveTags::from_fragment(location.fragment().as_deref())
        .toggled(tag)
        .to_fragment();
    location.set_fragment(&fragment);
    fragment
}

/// Handle a host event. Both events run the same pass.
pub fn handle_event<P: Page + ?Sized>(page: &mut P, event: PageEvent) -> PassSummary {
    match event {
        PageEvent::Load | PageEvent::FragmentChange => apply(page),
    }
}
