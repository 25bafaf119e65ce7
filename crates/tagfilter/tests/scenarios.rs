//! End-to-end filtering scenarios on the in-memory page.
//!
//! Each test opens a page, delivers the load event and then drives it the
//! way a reader would: clicking tags (`filter_tag`) or editing the address.

use tagfilter::{filter_tag, ActiveTags, Location, MemoryPage, MemoryPost, MemoryTag, TagList};

fn blog() -> MemoryPage {
    MemoryPage::new(
        vec![
            MemoryPost::new("a,b,c").named("first"),
            MemoryPost::new("a,c").named("second"),
            MemoryPost::new("b").named("third"),
        ],
        vec![MemoryTag::new("a"), MemoryTag::new("b"), MemoryTag::new("c")],
    )
}

fn visible_names(page: &MemoryPage) -> Vec<&str> {
    page.posts()
        .iter()
        .filter(|post| post.visible)
        .filter_map(|post| post.name.as_deref())
        .collect()
}

fn selected_labels(page: &MemoryPage) -> Vec<&str> {
    page.tags()
        .iter()
        .filter(|tag| tag.selected)
        .map(|tag| tag.label.as_str())
        .collect()
}

#[test]
fn empty_fragment_shows_everything() {
    let mut page = blog();
    page.load();
    let passes = page.run_until_quiescent();

    assert_eq!(passes.len(), 1);
    assert_eq!(visible_names(&page), ["first", "second", "third"]);
    assert!(selected_labels(&page).is_empty());
}

#[test]
fn fragment_requires_all_tags() {
    let mut page = blog().with_fragment("#a,b");
    page.load();
    page.run_until_quiescent();

    assert_eq!(visible_names(&page), ["first"]);
    assert_eq!(selected_labels(&page), ["a", "b"]);
}

#[test]
fn click_round_trip_goes_through_fragment_change() {
    let mut page = blog();
    page.load();
    page.run_until_quiescent();

    assert_eq!(filter_tag(&mut page, "c"), "#c");
    // Nothing re-rendered until the change event is handled.
    assert_eq!(visible_names(&page), ["first", "second", "third"]);
    assert!(page.has_pending_events());

    let passes = page.run_until_quiescent();
    assert_eq!(passes.len(), 1);
    assert_eq!(visible_names(&page), ["first", "second"]);
    assert_eq!(selected_labels(&page), ["c"]);

    filter_tag(&mut page, "b");
    page.run_until_quiescent();
    assert_eq!(page.fragment().as_deref(), Some("#c,b"));
    assert_eq!(visible_names(&page), ["first"]);

    filter_tag(&mut page, "c");
    filter_tag(&mut page, "b");
    page.run_until_quiescent();
    assert_eq!(page.fragment().as_deref(), Some(""));
    assert_eq!(visible_names(&page), ["first", "second", "third"]);
    assert!(selected_labels(&page).is_empty());
}

#[test]
fn unknown_tag_hides_everything() {
    let mut page = blog();
    page.load();
    page.navigate("#missing");
    let passes = page.run_until_quiescent();

    let last = passes.last().unwrap();
    assert_eq!(last.visible, 0);
    assert_eq!(last.hidden, 3);
    assert_eq!(last.selected, 0);
    assert!(visible_names(&page).is_empty());
}

#[test]
fn untagged_post_only_survives_empty_filter() {
    let mut page = MemoryPage::new(
        vec![MemoryPost::untagged().named("bare"), MemoryPost::new("a").named("tagged")],
        vec![MemoryTag::new("a")],
    );
    page.load();
    let passes = page.run_until_quiescent();
    assert_eq!(passes[0].untagged, 1);
    assert_eq!(visible_names(&page), ["bare", "tagged"]);

    filter_tag(&mut page, "a");
    page.run_until_quiescent();
    assert_eq!(visible_names(&page), ["tagged"]);
}

#[test]
fn duplicate_fragment_is_preserved() {
    let mut page = blog().with_fragment("#a,a");
    page.load();
    page.run_until_quiescent();
    assert_eq!(visible_names(&page), ["first", "second"]);

    filter_tag(&mut page, "a");
    page.run_until_quiescent();
    assert_eq!(page.fragment().as_deref(), Some("#a"));
    assert_eq!(selected_labels(&page), ["a"]);
}

#[test]
fn visibility_is_subset_check() {
    let declared = ["", "a", "b", "a,b", "b,a,c", "c"];
    let fragments = ["", "#a", "#b", "#a,b", "#c,a", "#a,b,c"];
    for fragment in fragments {
        let active = ActiveTags::from_fragment(Some(fragment));
        for attribute in declared {
            let list = TagList::parse(attribute);
            let subset = active.iter().all(|tag| attribute.split(',').any(|t| t == tag.as_str()));
            assert_eq!(
                active.is_matched_by(&list),
                subset,
                "fragment {fragment:?} attribute {attribute:?}"
            );
        }
    }
}
