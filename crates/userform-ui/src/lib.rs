//! User Form UI Components
//!
//! Dioxus primitives for the "Post API Call" screen. Colours follow the
//! screen palette:
//! - **Blue (#3498db)**: input borders, the primary action
//! - **Sky blue (#2196F3)**: confirm buttons in dialogs
//! - **Green (#4CAF50)**: progress and success

pub mod components;

pub use components::*;
