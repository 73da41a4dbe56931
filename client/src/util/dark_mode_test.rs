use super::*;

#[test]
fn missing_or_unknown_theme_defaults_to_dark() {
    assert!(parse_theme(None));
    assert!(parse_theme(Some("dark")));
    assert!(parse_theme(Some("sepia")));
}

#[test]
fn light_theme_disables_dark_mode() {
    assert!(!parse_theme(Some("light")));
}

#[test]
fn theme_name_matches_stored_values() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_dark_in_non_hydrate_tests() {
    assert!(read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
