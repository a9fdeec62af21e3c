use crate::ConfigError;
use alto_auction::instruction::Address;

/// Length of a signing key in bytes.
pub const SECRET_KEY_LEN: usize = 32;

fn strip_hex_prefix(input: &str) -> &str {
    let input = input.trim();
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Parses a `0x`-prefixed 20-byte address. Checksum casing is not verified.
pub fn parse_address(input: &str) -> Result<Address, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidAddress {
        address: input.to_owned(),
        reason,
    };
    let trimmed = input.trim();
    if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
        return Err(invalid("missing 0x prefix".to_owned()));
    }
    let bytes = hex::decode(strip_hex_prefix(trimmed)).map_err(|e| invalid(e.to_string()))?;
    Address::try_from(bytes.as_slice())
        .map_err(|_| invalid(format!("expected 20 bytes, got {}", bytes.len())))
}

/// Parses a hex signing key, with or without `0x`.
pub fn parse_secret_key(input: &str) -> Result<[u8; SECRET_KEY_LEN], String> {
    let bytes = hex::decode(strip_hex_prefix(input)).map_err(|e| e.to_string())?;
    <[u8; SECRET_KEY_LEN]>::try_from(bytes.as_slice())
        .map_err(|_| format!("expected {} bytes, got {}", SECRET_KEY_LEN, bytes.len()))
}

pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

#[test]
fn parse_address_test() {
    let address = parse_address("0xB9e76f90838CaaFEcb601754fbd2B112D513869a").unwrap();
    assert_eq!(address[0], 0xb9);
    assert_eq!(address[19], 0x9a);
    assert_eq!(
        format_address(&address),
        "0xb9e76f90838caafecb601754fbd2b112d513869a"
    );
    assert!(parse_address("B9e76f90838CaaFEcb601754fbd2B112D513869a").is_err());
    assert!(parse_address("0xB9e7").is_err());
    assert!(parse_address("0xZZe76f90838CaaFEcb601754fbd2B112D513869a").is_err());
}

#[test]
fn parse_secret_key_test() {
    let key = "5e11b9947afb7979d17b149f0ca9b7d209733defeb683a4973dd6fe4841ecd62";
    assert_eq!(parse_secret_key(key).unwrap()[0], 0x5e);
    assert_eq!(parse_secret_key(&format!("0x{}", key)).unwrap()[31], 0x62);
    assert!(parse_secret_key("5e11").is_err());
    assert!(parse_secret_key("not hex").is_err());
}
