//! Checkpoint deck
//!
//! All navigation and presentation logic lives here. This module must stay pure:
//! - No DOM or platform dependencies
//! - Rendering is a total function of progress
//! - One animation loop at a time

pub mod animator;
pub mod checkpoint;
pub mod controller;
pub mod input;
pub mod navigator;
pub mod presenter;
pub mod progress;

pub use animator::{Animator, StepOutcome};
pub use checkpoint::Checkpoint;
pub use controller::{Deck, FrameRequest};
pub use input::{GestureSession, InputNormalizer, Intent, Swipe};
pub use navigator::{advance, nearest};
pub use presenter::{Frame, Section, SectionVisual, render};
pub use progress::ProgressState;
