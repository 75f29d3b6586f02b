//! Lead-capture contact form: validation rules, submission state machine,
//! endpoint client and the Dioxus view wiring them together.

pub mod rules;
pub mod state;
pub mod submit;

mod view;
pub use view::ContactForm;
