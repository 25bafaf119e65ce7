//! `tags`: every declared tag on a page with its post count.

use anyhow::Result;
use std::path::Path;
use tagfilter::TagList;

use crate::html;

/// Count posts per declared tag, in first-seen order. A tag repeated
/// within one post counts once for that post.
pub fn tally<'a>(attributes: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for attribute in attributes {
        let declared = TagList::parse(attribute);
        let mut seen: Vec<&str> = Vec::new();
        for tag in declared.iter().map(|tag| tag.as_str()) {
            if tag.is_empty() || seen.contains(&tag) {
                continue;
            }
            seen.push(tag);
            match counts.iter_mut().find(|(label, _)| label == tag) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag.to_string(), 1)),
            }
        }
    }
    counts
}

pub fn run(page_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = html::load_config(config_path)?;
    let page = html::load_page(page_path, &config)?;
    let counts = tally(page.posts().iter().filter_map(|post| post.tags.as_deref()));
    if counts.is_empty() {
        log::warn!("No tagged posts found in {}", page_path.display());
    }
    for (tag, count) in counts {
        println!("{count:>4}  {tag}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_seen_order() {
        let counts = tally(["b,a", "a", "c,a,a", ""]);
        assert_eq!(
            counts,
            [("b".to_string(), 1), ("a".to_string(), 3), ("c".to_string(), 1)]
        );
    }
}
