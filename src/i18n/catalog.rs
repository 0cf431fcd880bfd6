//! Static translation catalog for admin-facing strings.
//!
//! DESIGN
//! ======
//! One table per locale, keyed by dotted message ids. Templates may contain
//! `{name}`-style placeholders that `state::locale::translate` fills in.
//! A missing key falls back to the key itself at the lookup site, so a typo
//! shows up literally in the UI instead of crashing.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::state::locale::Locale;

const EN: &[(&str, &str)] = &[
    ("login.title", "LinguaClub Admin"),
    ("login.subtitle", "Sign in to manage plans and members"),
    ("login.email", "Email"),
    ("login.password", "Password"),
    ("login.submit", "Sign in"),
    ("login.missing_fields", "Enter both email and password."),
    ("dashboard.title", "Dashboard"),
    ("dashboard.loading", "Checking your session..."),
    ("dashboard.welcome", "Welcome back, {name}."),
    ("dashboard.signed_in_as", "Signed in as {name} ({email})"),
    ("dashboard.sign_out", "Sign out"),
];

const ES: &[(&str, &str)] = &[
    ("login.title", "Administración de LinguaClub"),
    ("login.subtitle", "Inicia sesión para gestionar planes y miembros"),
    ("login.email", "Correo electrónico"),
    ("login.password", "Contraseña"),
    ("login.submit", "Iniciar sesión"),
    ("login.missing_fields", "Introduce el correo y la contraseña."),
    ("dashboard.title", "Panel"),
    ("dashboard.loading", "Comprobando tu sesión..."),
    ("dashboard.welcome", "Bienvenido de nuevo, {name}."),
    ("dashboard.signed_in_as", "Sesión iniciada como {name} ({email})"),
    ("dashboard.sign_out", "Cerrar sesión"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Es => ES,
    }
}

/// The template registered for `key` in `locale`, if any.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, template)| *template)
}
