//! Display-locale state and translated string lookup.
//!
//! DESIGN
//! ======
//! The active locale is an enumerated value, never a free-form string: only
//! recognized variants can be applied or persisted, so a corrupted stored
//! preference degrades to the default instead of poisoning lookups.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use leptos::prelude::*;

use crate::i18n::catalog;
use crate::util::storage;

/// localStorage key for the persisted locale preference.
pub const LOCALE_KEY: &str = "linguaclub_locale";

/// Supported display locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Locale {
    /// Canonical string persisted to storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Native-language label for the locale switcher.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Parse a stored value; anything unrecognized is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

/// Pick the startup locale: a recognized persisted value wins, anything
/// else leaves `default` in place.
fn resolve_initial(stored: Option<String>, default: Locale) -> Locale {
    stored
        .as_deref()
        .and_then(Locale::parse)
        .unwrap_or(default)
}

/// Render the catalog template for `key` in `locale`.
///
/// Each `(name, value)` pair replaces the first occurrence of the literal
/// `{name}` token, in params order. Only the first occurrence is replaced;
/// templates that repeat a placeholder keep the later occurrences verbatim.
/// That is the established template contract — do not widen it here without
/// auditing every catalog entry.
pub fn translate(locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
    let mut text = catalog::lookup(locale, key).map_or_else(|| key.to_owned(), str::to_owned);
    for (name, value) in params {
        let token = format!("{{{name}}}");
        if let Some(pos) = text.find(&token) {
            text.replace_range(pos..pos + token.len(), value);
        }
    }
    text
}

/// Handle to the locale context.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    locale: RwSignal<Locale>,
}

/// Install the locale context, seeding it from storage.
///
/// The persisted preference is read once, synchronously, before the first
/// paint; an unrecognized or missing value leaves `default` in place.
pub fn provide_locale(default: Option<Locale>) -> LocaleContext {
    let initial = resolve_initial(
        storage::get_item(LOCALE_KEY),
        default.unwrap_or_default(),
    );
    let ctx = LocaleContext {
        locale: RwSignal::new(initial),
    };
    provide_context(ctx);
    ctx
}

/// Access the locale context.
///
/// # Panics
///
/// Panics when called outside the provider scope; that is a wiring defect,
/// not a runtime condition to recover from.
pub fn use_locale() -> LocaleContext {
    expect_context::<LocaleContext>()
}

impl LocaleContext {
    /// The active locale (reactive read).
    pub fn get(self) -> Locale {
        self.locale.get()
    }

    /// Apply `locale` and persist it. The state update lands first; the
    /// storage write is best-effort.
    pub fn set(self, locale: Locale) {
        self.locale.set(locale);
        storage::set_item(LOCALE_KEY, locale.as_str());
    }

    /// Translated string for `key` in the active locale.
    pub fn t(self, key: &str) -> String {
        translate(self.locale.get(), key, &[])
    }

    /// Translated string for `key` with `{name}` placeholder substitution.
    pub fn t_with(self, key: &str, params: &[(&str, &str)]) -> String {
        translate(self.locale.get(), key, params)
    }
}
