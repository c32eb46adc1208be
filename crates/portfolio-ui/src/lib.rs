//! Portfolio Gallery UI Components
//!
//! Small Dioxus primitives shared by the gallery views.
//!
//! ## Look
//!
//! Dark, low-contrast surfaces with white as the only accent:
//! - **Primary** buttons are solid white with black text
//! - **Secondary** buttons are dark with a hairline border
//! - Tags are rounded pills (grid cards) or square chips (detail view)

pub mod components;

pub use components::*;
