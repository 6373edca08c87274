//! Page components for the form app.

mod post_form;

pub use post_form::PostForm;
