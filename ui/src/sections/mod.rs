//! The landing page, section by section. Every component here is purely
//! presentational: copy comes from `t!`/[`crate::content`], interaction
//! lives in [`crate::form`].

use dioxus::prelude::*;

mod advantages;
mod contact;
mod cta;
mod footer;
mod hero;
mod process;
mod services;
mod stats;
mod testimonials;

pub use advantages::Advantages;
pub use contact::ContactSection;
pub use cta::CtaBanner;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use process::ProcessSteps;
pub use services::Services;
pub use stats::Stats;
pub use testimonials::Testimonials;

/// Read (and thereby subscribe to) the global language code, so the calling
/// component re-renders with fresh strings when the switcher fires.
pub(crate) fn use_lang_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|signal| signal())
        .unwrap_or_default()
}
