use dioxus::prelude::*;

use super::use_lang_marker;
use crate::content;

#[component]
pub fn Services() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        section { id: "servizi", class: "services",
            div { class: "section-heading",
                h2 { {crate::t!("services-title")} }
                p { {crate::t!("services-description")} }
            }

            div { class: "services__grid",
                {
                    content::service_cards().into_iter().map(|card| {
                        rsx! {
                            div { key: "{card.title}", class: "services__card",
                                div { class: "services__icon",
                                    svg {
                                        view_box: "0 0 24 24",
                                        fill: "none",
                                        stroke: "currentColor",
                                        path {
                                            stroke_linecap: "round",
                                            stroke_linejoin: "round",
                                            stroke_width: "2",
                                            d: card.icon,
                                        }
                                    }
                                }
                                h3 { "{card.title}" }
                                ul {
                                    {
                                        card.items.iter().map(|item| {
                                            rsx! {
                                                li { key: "{item}",
                                                    span { class: "services__bullet" }
                                                    "{item}"
                                                }
                                            }
                                        })
                                    }
                                }
                            }
                        }
                    })
                }
            }
        }
    }
}
