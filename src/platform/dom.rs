//! DOM rendering
//!
//! Applies deck frames to the overlay elements. Elements are resolved once at
//! startup; sections missing from the page are skipped on every frame.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement};

use super::selectors::{self, StateClass};
use crate::deck::{Frame, Section, SectionVisual};

/// How an event listener is registered
#[derive(Debug, Clone, Copy, Default)]
pub struct Listen {
    /// Register as non-passive so the handler may call `preventDefault`
    pub blocking: bool,
    /// Remove the listener after its first call
    pub once: bool,
}

/// Attach `handler` to `target` for `kind` events for the lifetime of the page
pub fn listen(
    target: &EventTarget,
    kind: &str,
    options: Listen,
    handler: impl FnMut(Event) + 'static,
) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(!options.blocking);
    opts.set_once(options.once);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("Failed to listen for {}: {:?}", kind, e);
    }
    closure.forget();
}

/// Writes [`Frame`]s into the page
pub struct DomRenderer {
    sections: Vec<(Section, Option<HtmlElement>)>,
    story_items: Vec<HtmlElement>,
}

impl std::fmt::Debug for DomRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let found = self.sections.iter().filter(|(_, el)| el.is_some()).count();
        f.debug_struct("DomRenderer")
            .field("sections_found", &found)
            .field("story_items", &self.story_items.len())
            .finish()
    }
}

impl DomRenderer {
    /// Resolve every overlay element in `document`
    pub fn find(document: &Document) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let el = query(document, selectors::selector(section));
                if el.is_none() {
                    log::warn!("No element for section '{}'", section.id());
                }
                (section, el)
            })
            .collect();

        let mut story_items = Vec::new();
        if let Ok(nodes) = document.query_selector_all(selectors::STORY_ITEMS) {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    story_items.push(el);
                }
            }
        }
        log::info!("Found {} story items", story_items.len());

        Self {
            sections,
            story_items,
        }
    }

    /// Apply the visual state of every overlay
    pub fn apply(&self, frame: &Frame) {
        for (section, el) in &self.sections {
            if let Some(el) = el {
                apply_section(el, *section, frame.get(*section));
            }
        }

        for (el, item) in self.story_items.iter().zip(frame.story_items()) {
            let _ = el.style().set_property("opacity", &item.opacity.to_string());
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn apply_section(el: &HtmlElement, section: Section, visual: &SectionVisual) {
    let style = el.style();
    let _ = style.set_property("opacity", &visual.opacity.to_string());
    let _ = style.set_property(
        "visibility",
        if visual.visible { "visible" } else { "hidden" },
    );
    if let Some(transform) = selectors::transform(section, visual.shift_y) {
        let _ = style.set_property("transform", &transform);
    }

    let Some(class) = selectors::state_class(section) else {
        return;
    };
    let classes = el.class_list();
    let _ = match class {
        StateClass::Active => classes.toggle_with_force("active", visual.active),
        StateClass::Hidden => classes.toggle_with_force("hidden", !visual.visible),
    };
}
