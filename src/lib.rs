//! Non-blocking modal dialogs for egui applications.
//!
//! Replaces blocking alert/confirm primitives with styled in-app overlays:
//! a categorized alert dialog and a confirm dialog whose outcome is
//! delivered asynchronously through a oneshot channel.

pub mod dialog;
pub mod gui;
pub mod theme;

pub use dialog::{CategoryConfig, DialogCategory, ModalOverlay, ModalOverlayHandle};
pub use theme::{Theme, ThemeError};
