use super::*;

#[test]
fn backend_url_joins_origin_and_path() {
    let config = ConsoleConfig { backend_url: "https://api.example.test".to_owned(), ..ConsoleConfig::default() };
    let state = AppState::new(config).unwrap();
    assert_eq!(
        state.backend_url("/api/tenant/t-1/dashboard?from=2024-01-01"),
        "https://api.example.test/api/tenant/t-1/dashboard?from=2024-01-01"
    );
}

#[test]
fn new_keeps_config_shared() {
    let state = AppState::new(ConsoleConfig::default()).unwrap();
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.config, &clone.config));
}
