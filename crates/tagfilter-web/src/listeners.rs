//! `load` / `hashchange` wiring.
//!
//! Both events run the same pass. Handles live in thread-local storage
//! (the browser is single-threaded) and detach their listener on drop.

use std::cell::RefCell;
use std::rc::Rc;

use tagfilter::{handle_event, FilterConfig, PageEvent, PassSummary};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::dom::{window, DomPage, HostError};

thread_local! {
    static LISTENERS: RefCell<Vec<ListenerHandle>> = const { RefCell::new(Vec::new()) };
}

struct ListenerHandle {
    window: Window,
    event: PageEvent,
    closure: Closure<dyn FnMut()>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Err(error) = self.window.remove_event_listener_with_callback(
            self.event.dom_name(),
            self.closure.as_ref().unchecked_ref(),
        ) {
            zoon::eprintln!(
                "[tagfilter] Failed to remove {} listener: {}",
                self.event.dom_name(),
                HostError::js(error)
            );
        }
    }
}

/// Run one pass against the live document.
pub fn run_pass(config: &FilterConfig, event: PageEvent) -> Result<PassSummary, HostError> {
    let mut page = DomPage::current(config)?;
    let summary = handle_event(&mut page, event);
    #[cfg(feature = "debug-passes")]
    zoon::println!("[tagfilter] {:?}: {}", event, summary);
    if summary.untagged > 0 {
        zoon::eprintln!(
            "[tagfilter] {} post(s) without `{}` attribute",
            summary.untagged,
            config.tags_attribute
        );
    }
    Ok(summary)
}

/// Bind the filter to `load` and `hashchange`, replacing earlier bindings.
///
/// When the document has already finished loading (the usual case for an
/// async wasm module) the initial pass runs immediately instead.
pub fn install(config: FilterConfig) -> Result<(), HostError> {
    uninstall();
    let window = window()?;
    let config = Rc::new(config);

    let mut handles = Vec::new();
    for event in [PageEvent::Load, PageEvent::FragmentChange] {
        let closure: Closure<dyn FnMut()> = Closure::new({
            let config = Rc::clone(&config);
            move || {
                if let Err(error) = run_pass(&config, event) {
                    zoon::eprintln!("[tagfilter] {:?} pass failed: {}", event, error);
                }
            }
        });
        window
            .add_event_listener_with_callback(event.dom_name(), closure.as_ref().unchecked_ref())
            .map_err(HostError::js)?;
        handles.push(ListenerHandle {
            window: window.clone(),
            event,
            closure,
        });
    }
    LISTENERS.with(|cell| cell.borrow_mut().extend(handles));

    let document = window.document().ok_or(HostError::NoDocument)?;
    if document.ready_state() == "complete" {
        run_pass(&config, PageEvent::Load)?;
    }
    Ok(())
}

/// Detach all listeners installed by `install`.
pub fn uninstall() {
    let handles = LISTENERS.with(|cell| std::mem::take(&mut *cell.borrow_mut()));
    drop(handles);
}

pub fn is_installed() -> bool {
    LISTENERS.with(|cell| !cell.borrow().is_empty())
}
