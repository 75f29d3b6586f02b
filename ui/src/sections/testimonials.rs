use dioxus::prelude::*;

use super::use_lang_marker;
use crate::content;

#[component]
pub fn Testimonials() -> Element {
    let _lang_marker = use_lang_marker();

    rsx! {
        section { class: "testimonials",
            div { class: "section-heading",
                h2 { {crate::t!("testimonials-title")} }
                p { {crate::t!("testimonials-description")} }
            }

            div { class: "testimonials__grid",
                {
                    content::testimonials().into_iter().map(|testimonial| {
                        rsx! {
                            figure { key: "{testimonial.author}", class: "testimonials__card",
                                blockquote { "{testimonial.quote}" }
                                figcaption {
                                    p { class: "testimonials__author", "{testimonial.author}" }
                                    p { class: "testimonials__role", "{testimonial.role}" }
                                    p { class: "testimonials__company", "{testimonial.company}" }
                                }
                            }
                        }
                    })
                }
            }
        }
    }
}
