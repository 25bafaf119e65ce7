//! Load posts and tag elements from a static HTML page.

use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use tagfilter::{FilterConfig, MemoryPage, MemoryPost, MemoryTag};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|error| anyhow!("invalid selector `{css}`: {error:?}"))
}

/// Post display name: its `id`, else its first heading's text.
fn post_name(element: &ElementRef, headings: &Selector) -> Option<String> {
    if let Some(id) = element.value().attr("id") {
        return Some(id.to_string());
    }
    element
        .select(headings)
        .next()
        .map(|heading| heading.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Build an in-memory page from HTML source. All posts start visible and
/// all tags unselected, as served.
pub fn parse_page(source: &str, config: &FilterConfig) -> Result<MemoryPage> {
    let document = Html::parse_document(source);
    let headings = selector(HEADING_SELECTOR)?;

    let posts: Vec<MemoryPost> = document
        .select(&selector(&config.post_selector())?)
        .map(|element| MemoryPost {
            name: post_name(&element, &headings),
            tags: element.value().attr(&config.tags_attribute).map(str::to_string),
            visible: true,
        })
        .collect();

    // Label is the raw text content, untrimmed, as the browser reads it.
    let tags: Vec<MemoryTag> = document
        .select(&selector(&config.tag_selector())?)
        .map(|element| MemoryTag::new(element.text().collect::<String>()))
        .collect();

    log::debug!("Loaded {} posts and {} tag elements", posts.len(), tags.len());
    Ok(MemoryPage::new(posts, tags))
}

pub fn load_page(path: &Path, config: &FilterConfig) -> Result<MemoryPage> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_page(&source, config)
}

/// Read a TOML filter config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FilterConfig> {
    let Some(path) = path else {
        return Ok(FilterConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Invalid filter config {}", path.display()))?;
    log::info!("Using filter config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <nav>
            <span class="tag" onclick="filterTag('rust')">rust</span>
            <span class="tag">web</span>
          </nav>
          <article class="post" id="intro" data-tags="rust,web"><h2>Intro</h2></article>
          <article class="post" data-tags="web"><h2> Second post </h2></article>
          <article class="post"><p>no tags, no heading</p></article>
        </body></html>
    "#;

    #[test]
    fn reads_posts_and_tags() {
        let page = parse_page(PAGE, &FilterConfig::default()).unwrap();

        let names: Vec<_> = page.posts().iter().map(|post| post.name.as_deref()).collect();
        assert_eq!(names, [Some("intro"), Some("Second post"), None]);
        assert_eq!(page.posts()[0].tags.as_deref(), Some("rust,web"));
        assert_eq!(page.posts()[2].tags, None);

        let labels: Vec<_> = page.tags().iter().map(|tag| tag.label.as_str()).collect();
        assert_eq!(labels, ["rust", "web"]);
    }

    #[test]
    fn custom_classes() {
        let html = r#"<div class="entry" data-labels="x"></div><a class="chip">x</a>"#;
        let config = FilterConfig {
            post_class: "entry".into(),
            tag_class: "chip".into(),
            tags_attribute: "data-labels".into(),
            ..FilterConfig::default()
        };
        let page = parse_page(html, &config).unwrap();
        assert_eq!(page.posts()[0].tags.as_deref(), Some("x"));
        assert_eq!(page.tags()[0].label, "x");
    }

    #[test]
    fn invalid_class_is_an_error() {
        let config = FilterConfig {
            post_class: "1bad".into(),
            ..FilterConfig::default()
        };
        assert!(parse_page(PAGE, &config).is_err());
    }

    #[test]
    fn missing_config_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), FilterConfig::default());
    }
}
