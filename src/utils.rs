use std::{collections::BTreeMap, path::Path, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;
use serde_json::Value;

use crate::types::EnvelopeSpec;

/// Determines the MIME type of a recording from its file extension.
///
/// Only WAV and MP3 files are accepted by the voice template endpoint.
pub fn mime_type(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase();

    match extension.as_str() {
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        _ => None,
    }
}

/// Builds the value for an HTTP Basic `Authorization` header (RFC 2617),
/// without the `Basic ` prefix.
pub fn basic_authorization(token_key: &str, token_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", token_key, token_secret))
}

/// Parses the API host path and makes sure relative endpoints are joined
/// below it rather than replacing its last segment.
pub fn api_base(host: &str) -> Result<Url, String> {
    let mut host = host.trim().to_string();
    if !host.ends_with('/') {
        host.push('/');
    }

    let url = Url::parse(&host).map_err(|e| format!("Invalid API host {}: {}", host, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("Unsupported API host scheme: {}", other)),
    }
}

/// Parses an envelope given as `PHONE[,key=value...]`.
///
/// The phone number must be in E.164 format (`+` followed by 8 to 15 digits).
///
/// # Example
///
/// ```
/// let spec = parse_envelope("+15551234567,first-name=Ada,last-name=Lovelace")?;
/// assert_eq!(spec.meta["first-name"], "Ada");
/// ```
pub fn parse_envelope(s: &str) -> Result<EnvelopeSpec, String> {
    let mut parts = s.split(',');
    let phone_number = parts.next().unwrap_or_default().trim().to_string();
    validate_phone_number(&phone_number)?;

    let mut meta = BTreeMap::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let Some((key, value)) = part.split_once('=') else {
            return Err(format!("Invalid meta entry '{}', expected key=value", part));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(format!("Invalid meta entry '{}', key is empty", part));
        }
        meta.insert(key.to_string(), value.trim().to_string());
    }

    Ok(EnvelopeSpec { phone_number, meta })
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), String> {
    let Some(digits) = phone_number.strip_prefix('+') else {
        return Err(format!(
            "Phone number '{}' must be in E.164 format (+1xxxxxxxxxx)",
            phone_number
        ));
    };

    if digits.len() < 8 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!(
            "Phone number '{}' must be in E.164 format (+1xxxxxxxxxx)",
            phone_number
        ));
    }

    Ok(())
}

/// Renders a JSON value the way it should appear in a header or form field.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
