//! Browser bindings for `tagfilter`.
//!
//! Loading the module binds the filter to `load` and `hashchange` and
//! exports `filterTag` for tag click handlers:
//!
//! ```html
//! <span class="tag" onclick="filterTag(this.textContent)">rust</span>
//! <div class="post" data-tags="rust,wasm">…</div>
//! ```

pub mod dom;
pub mod listeners;

use tagfilter::{ActiveTags, FilterConfig, Location};
use wasm_bindgen::prelude::*;

pub use dom::{DomLocation, DomPage, HostError};
pub use listeners::{install, is_installed, run_pass, uninstall};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install(FilterConfig::default())?;
    Ok(())
}

/// Toggle `tag` in the location hash. The resulting `hashchange` re-filters.
#[wasm_bindgen(js_name = filterTag)]
pub fn filter_tag(tag: &str) -> Result<(), JsValue> {
    let mut location = DomLocation::current()?;
    tagfilter::filter_tag(&mut location, tag);
    Ok(())
}

/// The active tags parsed from the current location hash.
#[wasm_bindgen(js_name = activeTags)]
pub fn active_tags() -> Result<Vec<String>, JsValue> {
    let location = DomLocation::current()?;
    Ok(ActiveTags::from_fragment(location.fragment().as_deref())
        .iter()
        .map(|tag| tag.to_string())
        .collect())
}
