use dioxus::prelude::*;

use crate::sections::{
    Advantages, ContactSection, CtaBanner, Hero, ProcessSteps, Services, SiteFooter, Stats,
    Testimonials,
};

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code so the whole page re-renders on
    // a switch.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "it".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        main { class: "page page-home",
            // Hidden marker ensures the reactive dependency survives optimizations.
            div { style: "display:none", "{_lang_current}" }
            Hero {}
            Stats {}
            Services {}
            ProcessSteps {}
            Advantages {}
            Testimonials {}
            CtaBanner {}
            ContactSection {}
            SiteFooter {}
        }
    }
}
