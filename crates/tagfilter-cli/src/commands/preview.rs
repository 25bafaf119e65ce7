//! `preview`: what a reader would see for a given fragment.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tagfilter::{filter_tag, Location, MemoryPage, MemoryPost, MemoryTag, PassSummary};

use crate::html;

#[derive(Serialize)]
struct PreviewReport<'a> {
    fragment: String,
    summary: &'a PassSummary,
    posts: &'a [MemoryPost],
    tags: &'a [MemoryTag],
}

/// Deliver `load`, then replay `clicks` through `filterTag` and the
/// fragment changes they cause. Returns every pass in order.
pub fn replay(page: &mut MemoryPage, clicks: &[String]) -> Vec<PassSummary> {
    page.load();
    let mut passes = page.run_until_quiescent();
    for tag in clicks {
        let written = filter_tag(page, tag);
        log::info!("Clicked {:?}: fragment {:?}", tag, written);
        passes.extend(page.run_until_quiescent());
    }
    for (index, pass) in passes.iter().enumerate() {
        log::debug!("Pass {}: {}", index + 1, pass);
    }
    passes
}

/// Open the page with `fragment` and print the state after `replay`.
pub fn run(
    page_path: &Path,
    fragment: &str,
    clicks: &[String],
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = html::load_config(config_path)?;
    let mut page = html::load_page(page_path, &config)?.with_fragment(fragment);

    let passes = replay(&mut page, clicks);
    let summary = passes.last().context("No evaluation pass ran")?;
    if summary.untagged > 0 {
        log::warn!(
            "{} post(s) without `{}` attribute",
            summary.untagged,
            config.tags_attribute
        );
    }

    let report = PreviewReport {
        fragment: page.fragment().unwrap_or_default(),
        summary,
        posts: page.posts(),
        tags: page.tags(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report_lines(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

fn report_lines(report: &PreviewReport) -> Vec<String> {
    let mut lines = vec![report.summary.to_string()];
    for (index, post) in report.posts.iter().enumerate() {
        let state = if post.visible { "shown" } else { "hidden" };
        let name = post
            .name
            .clone()
            .unwrap_or_else(|| format!("post {}", index + 1));
        let tags = post.tags.as_deref().unwrap_or("-");
        lines.push(format!("  {state:<7} {name:<24} {tags}"));
    }
    let labels: Vec<String> = report
        .tags
        .iter()
        .map(|tag| {
            if tag.selected {
                format!("[{}]", tag.label)
            } else {
                tag.label.clone()
            }
        })
        .collect();
    lines.push(format!("tags: {}", labels.join(" ")));
    lines
}
