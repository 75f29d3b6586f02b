use dioxus::prelude::*;

use super::use_lang_marker;
use crate::content;

#[component]
pub fn ProcessSteps() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        section { id: "processo", class: "process",
            div { class: "section-heading",
                h2 { {crate::t!("process-title")} }
                p { {crate::t!("process-description")} }
            }

            div { class: "process__grid",
                {
                    content::process_steps().into_iter().map(|step| {
                        rsx! {
                            div { key: "{step.title}", class: "process__step",
                                div { class: "process__icon",
                                    svg {
                                        view_box: "0 0 24 24",
                                        fill: "none",
                                        stroke: "currentColor",
                                        path {
                                            stroke_linecap: "round",
                                            stroke_linejoin: "round",
                                            stroke_width: "2",
                                            d: step.icon,
                                        }
                                    }
                                }
                                h3 { "{step.title}" }
                                p { "{step.description}" }
                            }
                        }
                    })
                }
            }
        }
    }
}
