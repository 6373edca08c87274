//! Reusable UI components

mod button;
mod input;
mod spinner;

pub use button::*;
pub use input::*;
pub use spinner::*;
