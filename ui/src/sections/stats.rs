use dioxus::prelude::*;

use super::use_lang_marker;
use crate::content;

#[component]
pub fn Stats() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        section { class: "stats",
            div { class: "stats__grid",
                {
                    content::stats().into_iter().map(|stat| {
                        rsx! {
                            div { key: "{stat.value}", class: "stats__item",
                                div { class: "stats__value", "{stat.value}" }
                                div { class: "stats__label", "{stat.label}" }
                            }
                        }
                    })
                }
            }
        }
    }
}
