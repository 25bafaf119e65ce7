//! DOM-backed page host.
//!
//! Posts are elements with the configured post class (`.post`) under
//! `document.body`, their tags in `data-tags`. Tag elements carry the tag
//! class (`.tag`) and their label as text content.

use std::fmt;

use tagfilter::{FilterConfig, Location, Page, PostElement, TagElement};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCollection, HtmlElement, Window};

/// Failures reaching the browser globals this host needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    NoWindow,
    NoDocument,
    Js(String),
}

impl HostError {
    pub fn js(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global `window`"),
            Self::NoDocument => write!(f, "window has no `document`"),
            Self::Js(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for HostError {}

impl From<HostError> for JsValue {
    fn from(error: HostError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

/// `window.location.hash` as a fragment channel.
pub struct DomLocation {
    window: Window,
}

impl DomLocation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn current() -> Result<Self, HostError> {
        window().map(Self::new)
    }
}

impl Location for DomLocation {
    fn fragment(&self) -> Option<String> {
        self.window.location().hash().ok()
    }

    fn set_fragment(&mut self, fragment: &str) {
        // Assigning the hash fires `hashchange` when the value differs.
        if let Err(error) = self.window.location().set_hash(fragment) {
            zoon::eprintln!("[tagfilter] Failed to set location hash: {}", HostError::js(error));
        }
    }
}

pub struct DomPage<'a> {
    location: DomLocation,
    document: Document,
    config: &'a FilterConfig,
}

impl<'a> DomPage<'a> {
    pub fn current(config: &'a FilterConfig) -> Result<Self, HostError> {
        let window = window()?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self {
            location: DomLocation::new(window),
            document,
            config,
        })
    }

    /// Live collection of elements with `class_name`, scoped to the body
    /// when there is one.
    fn elements_by_class(&self, class_name: &str) -> HtmlCollection {
        match self.document.body() {
            Some(body) => body.get_elements_by_class_name(class_name),
            None => self.document.get_elements_by_class_name(class_name),
        }
    }
}

impl Location for DomPage<'_> {
    fn fragment(&self) -> Option<String> {
        self.location.fragment()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.location.set_fragment(fragment);
    }
}

impl Page for DomPage<'_> {
    fn for_each_post(&mut self, visit: &mut dyn FnMut(&mut dyn PostElement)) {
        let posts = self.elements_by_class(&self.config.post_class);
        for index in 0..posts.length() {
            let Some(element) = posts.item(index) else {
                continue;
            };
            match element.dyn_into::<HtmlElement>() {
                Ok(element) => visit(&mut DomPost {
                    element,
                    tags_attribute: &self.config.tags_attribute,
                }),
                Err(element) => {
                    zoon::eprintln!(
                        "[tagfilter] Skipping non-HTML post element <{}>",
                        element.tag_name()
                    );
                }
            }
        }
    }

    fn for_each_tag(&mut self, visit: &mut dyn FnMut(&mut dyn TagElement)) {
        let tags = self.elements_by_class(&self.config.tag_class);
        // Class rewrites keep the tag class, so the live collection is stable.
        for index in 0..tags.length() {
            if let Some(element) = tags.item(index) {
                visit(&mut DomTag {
                    element,
                    config: self.config,
                });
            }
        }
    }
}

/// CSS `display` value for a post.
pub fn display_value(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

struct DomPost<'a> {
    element: HtmlElement,
    tags_attribute: &'a str,
}

impl PostElement for DomPost<'_> {
    fn declared_tags(&self) -> Option<String> {
        self.element.get_attribute(self.tags_attribute)
    }

    fn set_visible(&mut self, visible: bool) {
        if let Err(error) = self
            .element
            .style()
            .set_property("display", display_value(visible))
        {
            zoon::eprintln!("[tagfilter] Failed to set post display: {}", HostError::js(error));
        }
    }
}

struct DomTag<'a> {
    element: Element,
    config: &'a FilterConfig,
}

impl TagElement for DomTag<'_> {
    fn label(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_selected(&mut self, selected: bool) {
        self.element.set_class_name(&self.config.tag_class_name(selected));
    }
}
