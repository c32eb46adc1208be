//! Reusable UI components.
//!
//! Class names match the global stylesheet in the desktop app.

mod button;
mod tag_list;

pub use button::*;
pub use tag_list::*;
