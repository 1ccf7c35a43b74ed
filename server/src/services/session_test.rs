use super::*;

// =============================================================
// Token generation
// =============================================================

#[test]
fn generated_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generated_tokens_are_unique() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
}

// =============================================================
// bytes_to_hex
// =============================================================

#[test]
fn bytes_to_hex_known_values() {
    assert_eq!(bytes_to_hex(&[]), "");
    assert_eq!(bytes_to_hex(&[0x00]), "00");
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn bytes_to_hex_pads_single_digit_bytes() {
    assert_eq!(bytes_to_hex(&[0x01, 0x0a]), "010a");
}
