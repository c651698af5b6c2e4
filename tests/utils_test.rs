use omnivox::utils::*;
use serde_json::json;

#[test]
fn test_mime_type() {
    assert_eq!(mime_type("piano.wav"), Some("audio/wav"));
    assert_eq!(mime_type("nimoy_spock.mp3"), Some("audio/mpeg"));

    // Extension match is case-insensitive
    assert_eq!(mime_type("SHOUT.WAV"), Some("audio/wav"));
    assert_eq!(mime_type("Track.Mp3"), Some("audio/mpeg"));

    // Anything else is rejected
    assert_eq!(mime_type("notes.txt"), None);
    assert_eq!(mime_type("audio.ogg"), None);
    assert_eq!(mime_type("wav"), None);
    assert_eq!(mime_type("archive.wav.zip"), None);
}

#[test]
fn test_basic_authorization() {
    // RFC 7617 example credentials
    assert_eq!(
        basic_authorization("Aladdin", "open sesame"),
        "QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
    );

    // Empty values still produce the separator
    assert_eq!(basic_authorization("", ""), "Og==");
}

#[test]
fn test_api_base_adds_trailing_slash() {
    let base = api_base("https://api.omnigage.io/api/v1").unwrap();
    assert_eq!(base.as_str(), "https://api.omnigage.io/api/v1/");

    // Joining keeps the version segment
    let url = base.join("voice-templates").unwrap();
    assert_eq!(url.as_str(), "https://api.omnigage.io/api/v1/voice-templates");
}

#[test]
fn test_api_base_keeps_existing_slash() {
    let base = api_base("  http://127.0.0.1:8080/api/v1/ ").unwrap();
    assert_eq!(base.as_str(), "http://127.0.0.1:8080/api/v1/");
}

#[test]
fn test_api_base_rejects_invalid_hosts() {
    assert!(api_base("").is_err());
    assert!(api_base("api.omnigage.io/api/v1").is_err());
    assert!(api_base("ftp://api.omnigage.io/").is_err());
}

#[test]
fn test_parse_envelope_with_meta() {
    let spec = parse_envelope("+15551234567, first-name = Ada ,last-name=Lovelace").unwrap();

    assert_eq!(spec.phone_number, "+15551234567");
    assert_eq!(spec.meta.len(), 2);
    assert_eq!(spec.meta["first-name"], "Ada");
    assert_eq!(spec.meta["last-name"], "Lovelace");
}

#[test]
fn test_parse_envelope_without_meta() {
    let spec = parse_envelope("+442071838750").unwrap();
    assert_eq!(spec.phone_number, "+442071838750");
    assert!(spec.meta.is_empty());

    // Trailing separators are ignored
    let spec = parse_envelope("+442071838750,").unwrap();
    assert!(spec.meta.is_empty());
}

#[test]
fn test_parse_envelope_allows_empty_value() {
    let spec = parse_envelope("+15551234567,last-name=").unwrap();
    assert_eq!(spec.meta["last-name"], "");
}

#[test]
fn test_parse_envelope_errors() {
    // Not E.164
    assert!(parse_envelope("5551234567").is_err());
    assert!(parse_envelope("+1555-123-4567").is_err());
    assert!(parse_envelope("+1234").is_err());
    assert!(parse_envelope("").is_err());

    // Malformed meta
    assert!(parse_envelope("+15551234567,first-name").is_err());
    assert!(parse_envelope("+15551234567,=Ada").is_err());
}

#[test]
fn test_validate_phone_number() {
    assert!(validate_phone_number("+15551234567").is_ok());
    assert!(validate_phone_number("+123456789012345").is_ok());
    assert!(validate_phone_number("+1234567890123456").is_err());
    assert!(validate_phone_number("+").is_err());
    assert!(validate_phone_number("15551234567").is_err());
}

#[test]
fn test_value_to_string() {
    assert_eq!(value_to_string(&json!("private")), "private");
    assert_eq!(value_to_string(&json!(42)), "42");
    assert_eq!(value_to_string(&json!(true)), "true");
    assert_eq!(value_to_string(&json!(null)), "");
}
