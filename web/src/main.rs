use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::storage;
use ui::i18n::Locale;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code: read once from the persisted preference (default
    // Italian), written by the navbar switcher, subscribed to by every view.
    use_context_provider(|| {
        let initial = storage::load_language()
            .as_deref()
            .and_then(Locale::from_tag)
            .unwrap_or_default();
        Signal::new(initial.as_tag().to_string())
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell: fixed navbar above the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
