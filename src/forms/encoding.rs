//! Image payload encoding
//!
//! Image payloads travel inside JSON bodies as bare base64, without the
//! `data:*;base64,` prefix a file picker produces. Producing the bare
//! form is the form model's responsibility, before transmission.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::utils::errors::{Result, UmmahError};

/// Strip a `data:<mime>;base64,` prefix if present
pub fn strip_data_url_prefix(input: &str) -> &str {
    if input.starts_with("data:") {
        match input.find(',') {
            Some(idx) => &input[idx + 1..],
            None => input,
        }
    } else {
        input
    }
}

/// Normalize a picker-produced value to bare, verified base64
pub fn to_bare_base64(input: &str) -> Result<String> {
    let bare = strip_data_url_prefix(input.trim());

    STANDARD
        .decode(bare)
        .map_err(|e| UmmahError::InvalidInput(format!("Invalid base64 image payload: {}", e)))?;

    Ok(bare.to_string())
}

/// Encode raw image bytes for embedding in a JSON payload
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_data_url_prefix() {
        assert_eq!(strip_data_url_prefix("data:image/png;base64,aGVsbG8="), "aGVsbG8=");
        assert_eq!(strip_data_url_prefix("aGVsbG8="), "aGVsbG8=");
    }

    #[test]
    fn test_to_bare_base64_roundtrip() {
        let encoded = encode_image(b"hello");
        let with_prefix = format!("data:image/jpeg;base64,{}", encoded);

        assert_eq!(to_bare_base64(&with_prefix).unwrap(), encoded);
        assert_eq!(to_bare_base64(&encoded).unwrap(), encoded);
    }

    #[test]
    fn test_invalid_payload_rejected() {
        assert!(to_bare_base64("data:image/png;base64,not base64!!!").is_err());
    }
}
