use dioxus::prelude::*;

use super::use_lang_marker;
use crate::content;

#[component]
pub fn SiteFooter() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    p { class: "footer__mark", "YM Formation" }
                    p { {crate::t!("footer-company-description")} }
                }
                div {
                    h4 { {crate::t!("footer-services-title")} }
                    ul {
                        {
                            content::footer_service_items().iter().map(|item| {
                                rsx! { li { key: "{item}", "{item}" } }
                            })
                        }
                    }
                }
                div {
                    h4 { {crate::t!("footer-links-title")} }
                    ul {
                        {
                            content::footer_link_items().iter().map(|item| {
                                rsx! { li { key: "{item}", "{item}" } }
                            })
                        }
                    }
                }
                div {
                    h4 { {crate::t!("footer-contact-title")} }
                    ul {
                        li { {crate::t!("footer-contact-email")} }
                        li { {crate::t!("footer-contact-phone")} }
                        li { {crate::t!("footer-contact-address")} }
                    }
                }
            }
            div { class: "footer__bottom",
                p { {crate::t!("footer-copyright")} }
            }
        }
    }
}
