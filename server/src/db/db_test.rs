use super::*;

#[test]
fn pool_size_defaults_when_unset() {
    assert_eq!(max_connections(None), DEFAULT_MAX_CONNECTIONS);
}

#[test]
fn pool_size_parses_a_numeric_value() {
    assert_eq!(max_connections(Some("12".to_owned())), 12);
}

#[test]
fn pool_size_falls_back_on_garbage() {
    assert_eq!(max_connections(Some("lots".to_owned())), DEFAULT_MAX_CONNECTIONS);
    assert_eq!(max_connections(Some(String::new())), DEFAULT_MAX_CONNECTIONS);
}
