//! Fragment-driven tag filtering for static post listings.
//!
//! The active tag set lives in the page's navigation fragment (`#a,b`).
//! Every pass parses it fresh, shows posts declaring all active tags and
//! marks tag elements whose label is active. Toggling a tag only rewrites
//! the fragment; the host's fragment-change event triggers the next pass.
//!
//! # Layout
//!
//! - `tag`, `active`: pure value types. No host access.
//! - `page`: host traits and the two operations (`apply`, `filter_tag`).
//! - `memory`: in-memory host with a FIFO event queue.

pub mod active;
pub mod config;
pub mod memory;
pub mod page;
pub mod tag;

pub use active::ActiveTags;
pub use config::FilterConfig;
pub use memory::{MemoryPage, MemoryPost, MemoryTag};
pub use page::{
    apply, filter_tag, handle_event, Location, Page, PageEvent, PassSummary, PostElement,
    TagElement,
};
pub use tag::{Tag, TagList};
