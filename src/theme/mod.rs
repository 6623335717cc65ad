//! Global stylesheet injected by the App component.

mod styles;

pub use styles::GLOBAL_STYLES;
