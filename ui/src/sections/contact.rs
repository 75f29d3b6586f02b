use dioxus::prelude::*;

use super::use_lang_marker;
use crate::form::ContactForm;

#[component]
pub fn ContactSection() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        section { id: "contatti", class: "contact",
            div { class: "section-heading",
                h2 { {crate::t!("contact-title")} }
                p { {crate::t!("contact-description")} }
            }
            ContactForm {}
        }
    }
}
