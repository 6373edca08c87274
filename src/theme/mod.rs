//! Visual theme for the form app.

mod styles;

pub use styles::GLOBAL_STYLES;
