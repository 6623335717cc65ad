//! Reusable UI widgets

mod button;
mod category_chips;
mod input;

pub use button::*;
pub use category_chips::*;
pub use input::*;
