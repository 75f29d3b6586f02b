use dioxus::prelude::*;

use super::use_lang_marker;

#[component]
pub fn CtaBanner() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        section { class: "cta",
            h2 { {crate::t!("cta-title")} }
            p { {crate::t!("cta-description")} }
            div { class: "cta__actions",
                a { class: "button button--accent", href: "#contatti", {crate::t!("cta-primary")} }
                a { class: "button button--ghost", href: "#contatti", {crate::t!("cta-secondary")} }
            }
        }
    }
}
