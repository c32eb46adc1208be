//! Theme for the portfolio gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
