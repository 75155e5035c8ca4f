//! Platform abstraction layer
//!
//! Handles browser differences for:
//! - Device quirks (Android media attributes)
//! - DOM rendering of deck frames
//! - Page setup (scroll lock, address bar, fullscreen)

pub mod device;
pub mod selectors;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod page;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomRenderer, Listen, listen};
