use dioxus::prelude::*;

use crate::core::storage;
use crate::i18n::{self, Locale};
use crate::t;

// Navbar stylesheet, shared by every platform shell.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed localized header: brand, anchor links into the page sections and
/// the IT/EN switcher.
///
/// The platform crate provides a global `Signal<String>` holding the active
/// language code. Switching does three things in order: select the new
/// bundle on the shared loader, persist the preference, then write the
/// signal so every subscribed view re-renders with fresh strings.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided).
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    let current = Locale::from_tag(&_lang_marker).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        println!("[i18n] AppNavbar render lang={}", current.as_tag());
    }

    let switch_language = move |locale: Locale| {
        let tag = locale.as_tag();
        if i18n::set_language(tag).is_ok() {
            if let Err(err) = storage::save_language(tag) {
                eprintln!("[i18n] Failed persisting language preference: {err}");
            }
            if let Some(mut code) = lang_code_ctx {
                code.set(tag.to_string());
            }
        }
    };

    let subtitle = t!("brand-subtitle");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "YM Formation" }
                    span { class: "navbar__brand-subtitle", "{subtitle}" }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "#servizi", {t!("nav-services")} }
                    a { class: "navbar__link", href: "#processo", {t!("nav-process")} }
                    a { class: "navbar__link", href: "#vantaggi", {t!("nav-advantages")} }
                    a { class: "navbar__link", href: "#contatti", {t!("nav-contact")} }
                }

                // Locale switcher
                div { class: "navbar__locale", role: "group", aria_label: t!("nav-language-label"),
                    {
                        Locale::ALL.iter().map(|&locale| {
                            let active = locale == current;
                            let class = if active {
                                "navbar__locale-button navbar__locale-button--active"
                            } else {
                                "navbar__locale-button"
                            };
                            let label = locale.as_tag().to_uppercase();
                            rsx! {
                                button {
                                    key: "{locale.as_tag()}",
                                    r#type: "button",
                                    class: class,
                                    onclick: move |_| switch_language(locale),
                                    "{label}"
                                }
                            }
                        })
                    }
                }

                a { class: "button button--accent navbar__cta", href: "#contatti", {t!("nav-cta")} }
            }
        }
    }
}
