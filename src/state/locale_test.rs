use super::*;

// =============================================================
// Locale parsing and canonical forms
// =============================================================

#[test]
fn parse_accepts_only_recognized_values() {
    assert_eq!(Locale::parse("en"), Some(Locale::En));
    assert_eq!(Locale::parse("es"), Some(Locale::Es));
    assert_eq!(Locale::parse("fr"), None);
    assert_eq!(Locale::parse("EN"), None);
    assert_eq!(Locale::parse(""), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for locale in [Locale::En, Locale::Es] {
        assert_eq!(Locale::parse(locale.as_str()), Some(locale));
    }
}

#[test]
fn default_locale_is_english() {
    assert_eq!(Locale::default(), Locale::En);
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn resolve_initial_prefers_a_recognized_stored_value() {
    assert_eq!(
        resolve_initial(Some("es".to_owned()), Locale::En),
        Locale::Es
    );
}

#[test]
fn resolve_initial_ignores_unrecognized_stored_values() {
    assert_eq!(
        resolve_initial(Some("klingon".to_owned()), Locale::En),
        Locale::En
    );
}

#[test]
fn resolve_initial_keeps_default_when_nothing_is_stored() {
    assert_eq!(resolve_initial(None, Locale::Es), Locale::Es);
}

// =============================================================
// Translation + substitution
// =============================================================

#[test]
fn translate_fills_catalog_placeholders() {
    assert_eq!(
        translate(Locale::En, "dashboard.welcome", &[("name", "Ana")]),
        "Welcome back, Ana."
    );
    assert_eq!(
        translate(Locale::Es, "dashboard.welcome", &[("name", "Ana")]),
        "Bienvenido de nuevo, Ana."
    );
}

#[test]
fn translate_substitutes_multiple_params_in_order() {
    assert_eq!(
        translate(
            Locale::En,
            "dashboard.signed_in_as",
            &[("name", "Ana"), ("email", "ana@linguaclub.example")]
        ),
        "Signed in as Ana (ana@linguaclub.example)"
    );
}

#[test]
fn translate_falls_back_to_the_key_itself() {
    assert_eq!(translate(Locale::En, "no.such.key", &[]), "no.such.key");
}

#[test]
fn translate_replaces_only_the_first_occurrence_per_param() {
    // Identity fallback lets the key act as the template here. The second
    // {name} staying literal documents the single-substitution contract.
    assert_eq!(
        translate(
            Locale::En,
            "Hello {name}, you have {name} messages",
            &[("name", "Al")]
        ),
        "Hello Al, you have {name} messages"
    );
}

#[test]
fn translate_leaves_unmatched_placeholders_alone() {
    assert_eq!(
        translate(Locale::En, "dashboard.welcome", &[("nope", "x")]),
        "Welcome back, {name}."
    );
}
