//! Internationalization (i18n) support for `ymf-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   it/ymf-ui.ftl   (fallback/reference)
//!   en/ymf-ui.ftl   (additional locale)
//! ```
//!
//! The site ships exactly two locales, Italian being the default. The
//! visitor's last choice is persisted (see [`crate::core::storage`]) and
//! restored by `init()`; there is no OS/browser language negotiation.
//!
//! Public API surface:
//! - `Locale` – the closed set of supported languages.
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `available_languages()` – discover embedded language tags.
//! - `fl` macro re-export plus the `t!` wrapper.
//! - `LOADER` – global `FluentLanguageLoader` consumed by `t!`/`fl!`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::storage;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-services")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/it/{DOMAIN}.ftl`
const DOMAIN: &str = "ymf-ui";

/// Display languages the site ships. Italian is the house language and the
/// fallback for any key a locale forgets to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    It,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::It, Locale::En];

    pub fn as_tag(self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    /// Parse a stored or user-supplied tag. Matches on the primary language
    /// subtag so `"en-GB"` still lands on [`Locale::En`]; anything outside
    /// the supported set is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "it" => Some(Locale::It),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "it".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Selects the persisted preference when one
/// exists, the Italian fallback otherwise.
pub fn init() {
    INIT.call_once(|| {
        let requested = initial_language();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[requested]) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The language to select at startup: persisted preference, else fallback.
fn initial_language() -> LanguageIdentifier {
    storage::load_language()
        .as_deref()
        .and_then(Locale::from_tag)
        .unwrap_or_default()
        .as_tag()
        .parse()
        .expect("supported locale tags always parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "it"));
        assert!(langs.iter().any(|l| l == "en"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let _ = set_language("it");
        let s = fl!(&*LOADER, "nav-services");
        assert_eq!(s, "Servizi");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let _ = set_language("it");
        let before = fl!(&*LOADER, "nav-services");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-services");
        assert_eq!(before, after);
    }

    #[test]
    fn locale_tags_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.as_tag()), Some(locale));
        }
        assert_eq!(Locale::from_tag("en-GB"), Some(Locale::En));
        assert_eq!(Locale::from_tag("IT"), Some(Locale::It));
        assert_eq!(Locale::from_tag("de"), None);
        assert_eq!(Locale::default(), Locale::It);
    }
}
