//! Folio UI Widgets
//!
//! Small Dioxus building blocks shared by the portfolio page: buttons,
//! category chips, text inputs and the consent checkbox.
//!
//! Class names match the global stylesheet in the desktop crate
//! (`.btn`, `.btn-ghost`, `.chip`, `.chip.active`, `.field`, ...).

pub mod components;

pub use components::*;
