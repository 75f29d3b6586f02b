use dioxus::prelude::*;

use super::use_lang_marker;
use crate::content;

const CHECK_PATH: &str = "M5 13l4 4L19 7";

#[component]
pub fn Advantages() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        section { id: "vantaggi", class: "advantages",
            div { class: "section-heading",
                h2 { {crate::t!("advantages-title")} }
                p { {crate::t!("advantages-description")} }
            }

            div { class: "advantages__list",
                {
                    content::advantages().into_iter().map(|advantage| {
                        rsx! {
                            div { key: "{advantage.title}", class: "advantages__item",
                                div { class: "advantages__check",
                                    svg {
                                        view_box: "0 0 24 24",
                                        fill: "none",
                                        stroke: "currentColor",
                                        path {
                                            stroke_linecap: "round",
                                            stroke_linejoin: "round",
                                            stroke_width: "2",
                                            d: CHECK_PATH,
                                        }
                                    }
                                }
                                div {
                                    h4 { "{advantage.title}" }
                                    p { "{advantage.description}" }
                                }
                            }
                        }
                    })
                }
            }
        }
    }
}
