use super::*;

// =============================================================
// normalize_identifier
// =============================================================

#[test]
fn normalize_identifier_lowercases_and_trims() {
    assert_eq!(
        normalize_identifier("  Alice@Example.COM  "),
        Some("alice@example.com".to_owned())
    );
}

#[test]
fn normalize_identifier_rejects_empty() {
    assert_eq!(normalize_identifier(""), None);
    assert_eq!(normalize_identifier("   "), None);
}

#[test]
fn normalize_identifier_requires_single_at() {
    assert_eq!(normalize_identifier("no-at-sign"), None);
    assert_eq!(normalize_identifier("a@b@c"), None);
}

#[test]
fn normalize_identifier_rejects_empty_parts() {
    assert_eq!(normalize_identifier("@example.com"), None);
    assert_eq!(normalize_identifier("user@"), None);
}

// =============================================================
// hash_secret
// =============================================================

#[test]
fn hash_secret_is_deterministic() {
    assert_eq!(hash_secret("salt", "burger1244"), hash_secret("salt", "burger1244"));
}

#[test]
fn hash_secret_differs_by_salt() {
    assert_ne!(hash_secret("salt-a", "burger1244"), hash_secret("salt-b", "burger1244"));
}

#[test]
fn hash_secret_differs_by_secret() {
    assert_ne!(hash_secret("salt", "burger1244"), hash_secret("salt", "burger1245"));
}

#[test]
fn hash_secret_is_64_hex_chars() {
    let hash = hash_secret("salt", "secret");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generated_salts_are_unique_hex() {
    let a = generate_salt();
    let b = generate_salt();
    assert_ne!(a, b);
    assert_eq!(a.len(), 32);
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_round_trips_through_str() {
    assert_eq!(Role::from_str(Role::Student.as_str()), Some(Role::Student));
    assert_eq!(Role::from_str(Role::Instructor.as_str()), Some(Role::Instructor));
}

#[test]
fn role_from_str_rejects_unknown() {
    assert_eq!(Role::from_str("admin"), None);
    assert_eq!(Role::from_str(""), None);
}

#[test]
fn role_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    let parsed: Role = serde_json::from_str("\"instructor\"").unwrap();
    assert_eq!(parsed, Role::Instructor);
}
