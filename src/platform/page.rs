//! Page setup
//!
//! The invitation owns the whole viewport: native scrolling is locked and every
//! transition goes through the deck.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Window};

use super::device::{self, ScrollWatch};
use super::dom::{Listen, listen};

/// Stop the document from scrolling natively
pub fn lock_scroll(document: &Document) {
    if let Some(root) = document.document_element() {
        if let Ok(root) = root.dyn_into::<HtmlElement>() {
            let _ = root.style().set_property("overflow", "hidden");
        }
    }
    if let Some(body) = document.body() {
        let style = body.style();
        for (name, value) in [
            ("overflow", "hidden"),
            ("position", "fixed"),
            ("width", "100%"),
            ("height", "100%"),
        ] {
            let _ = style.set_property(name, value);
        }
    }
}

/// Nudge mobile browsers into collapsing the address bar
pub fn hide_address_bar(window: &Window) {
    window.scroll_to_with_x_and_y(0.0, 1.0);
}

/// Collapse the address bar again whenever the page scrolls down
pub fn keep_address_bar_hidden(window: &Window) {
    let watch = Cell::new(ScrollWatch::default());
    let window_clone = window.clone();
    listen(window, "scroll", Listen::default(), move |_event| {
        let Ok(top) = window_clone.page_y_offset() else {
            return;
        };
        let mut w = watch.get();
        let down = w.moved_down(top);
        watch.set(w);
        if down {
            hide_address_bar(&window_clone);
        }
    });
}

/// Go fullscreen on the first touch or click
pub fn fullscreen_on_first_interaction(document: &Document) {
    let requested = Rc::new(Cell::new(false));
    for kind in ["touchstart", "click"] {
        let requested = requested.clone();
        let document_clone = document.clone();
        listen(
            document,
            kind,
            Listen {
                blocking: false,
                once: true,
            },
            move |_event| {
                if requested.replace(true) {
                    return;
                }
                if let Some(root) = document_clone.document_element() {
                    request_fullscreen(&root);
                }
            },
        );
    }
}

/// Call the first fullscreen method the engine exposes, prefixed ones included
fn request_fullscreen(root: &Element) {
    for name in device::FULLSCREEN_METHODS {
        let Ok(method) = Reflect::get(root, &JsValue::from_str(name)) else {
            continue;
        };
        let Ok(method) = method.dyn_into::<Function>() else {
            continue;
        };
        match method.call0(root) {
            // The standard method reports refusal through a promise
            Ok(result) => {
                if let Ok(promise) = result.dyn_into::<Promise>() {
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::warn!("Fullscreen request failed: {:?}", e);
                        }
                    });
                }
            }
            Err(e) => log::warn!("{} failed: {:?}", name, e),
        }
        return;
    }
    log::debug!("Fullscreen not supported");
}
