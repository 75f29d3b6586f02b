use dioxus::prelude::*;

use super::use_lang_marker;
use crate::core::timing;

/// Rotation period of the background carousel.
const CAROUSEL_INTERVAL_MS: u64 = 5_000;

struct CarouselImage {
    url: &'static str,
    alt: &'static str,
}

const CAROUSEL_IMAGES: [CarouselImage; 3] = [
    CarouselImage {
        url: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?auto=format&fit=crop&w=2000",
        alt: "Team professionale in formazione",
    },
    CarouselImage {
        url: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&w=2000",
        alt: "Workshop aziendale",
    },
    CarouselImage {
        url: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=2000",
        alt: "Presentazione business",
    },
];

#[component]
pub fn Hero() -> Element {
    let _lang_marker = use_lang_marker();
    let mut current_image = use_signal(|| 0usize);

    // Advance the carousel on a fixed cadence. The task belongs to this
    // scope, so unmounting the hero cancels the timer with it.
    use_future(move || async move {
        loop {
            timing::sleep_ms(CAROUSEL_INTERVAL_MS).await;
            let next = (*current_image.peek() + 1) % CAROUSEL_IMAGES.len();
            current_image.set(next);
        }
    });

    let active = current_image();

    rsx! {
        section { class: "hero",
            div { class: "hero__slides", aria_hidden: "true",
                {
                    CAROUSEL_IMAGES.iter().enumerate().map(|(index, image)| {
                        let slide_class = if index == active {
                            "hero__slide hero__slide--active"
                        } else {
                            "hero__slide"
                        };
                        rsx! {
                            div { key: "{image.url}", class: slide_class,
                                img { src: image.url, alt: image.alt }
                                div { class: "hero__overlay" }
                            }
                        }
                    })
                }
            }

            div { class: "hero__indicators",
                {
                    (0..CAROUSEL_IMAGES.len()).map(|index| {
                        let indicator_class = if index == active {
                            "hero__indicator hero__indicator--active"
                        } else {
                            "hero__indicator"
                        };
                        let slide_number = index + 1;
                        rsx! {
                            button {
                                key: "{index}",
                                r#type: "button",
                                class: indicator_class,
                                aria_label: "Slide {slide_number}",
                                onclick: move |_| current_image.set(index),
                            }
                        }
                    })
                }
            }

            div { class: "hero__content",
                h1 { {crate::t!("hero-title")} }
                p { class: "hero__description", {crate::t!("hero-description")} }
                div { class: "hero__actions",
                    a { class: "button button--accent", href: "#contatti", {crate::t!("hero-cta-primary")} }
                    a { class: "button button--ghost", href: "#servizi", {crate::t!("hero-cta-secondary")} }
                }
            }
        }
    }
}
