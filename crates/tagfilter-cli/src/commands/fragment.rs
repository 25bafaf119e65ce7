//! `parse` and `toggle`: fragment arithmetic without a page.

use anyhow::Result;
use tagfilter::{filter_tag, ActiveTags, MemoryPage};

pub fn parse(fragment: &str) -> Result<()> {
    let active = ActiveTags::from_fragment(Some(fragment));
    println!("{}", serde_json::to_string(&active)?);
    Ok(())
}

/// The fragment written after toggling `tag`. Empty means cleared.
pub fn toggled_fragment(fragment: &str, tag: &str) -> String {
    let mut page = MemoryPage::default().with_fragment(fragment);
    filter_tag(&mut page, tag)
}

/// Print the fragment after toggling `tag`. An empty line means cleared.
pub fn toggle(fragment: &str, tag: &str) -> Result<()> {
    let toggled = toggled_fragment(fragment, tag);
    log::debug!("{:?} -> {:?}", fragment, toggled);
    println!("{toggled}");
    Ok(())
}
