//! Base64 file payload inspection
//!
//! Decode failures are non-fatal: the report simply marks the file invalid.

use crate::mime;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[derive(Debug, PartialEq)]
pub struct FileReport {
    pub valid: bool,
    pub mime_type: Option<&'static str>,
    pub size_kb: Option<f64>,
}

impl FileReport {
    const fn invalid() -> Self {
        Self {
            valid: false,
            mime_type: None,
            size_kb: None,
        }
    }
}

/// Decode a base64 payload and report its MIME type and size in KB.
///
/// Embedded ASCII whitespace is ignored, so line-wrapped payloads decode.
pub fn inspect(file_b64: &str) -> FileReport {
    let cleaned: String = file_b64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let Ok(bytes) = STANDARD.decode(cleaned) else {
        return FileReport::invalid();
    };

    FileReport {
        valid: true,
        mime_type: Some(mime::detect_mime_type(&bytes)),
        size_kb: Some(size_in_kb(bytes.len())),
    }
}

/// Size in kilobytes, rounded to two decimal places with ties going to the
/// even digit.
#[allow(clippy::cast_precision_loss)]
fn size_in_kb(len: usize) -> f64 {
    let scaled = len as f64 * 100.0 / 1024.0;
    let floor = scaled.floor();
    let rounded = if (scaled - floor - 0.5).abs() < f64::EPSILON {
        if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        scaled.round()
    };
    rounded / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text_payload() {
        // "hello world" in base64
        let report = inspect("aGVsbG8gd29ybGQ=");
        assert!(report.valid);
        assert_eq!(report.mime_type, Some("text/plain"));
        assert_eq!(report.size_kb, Some(0.01));
    }

    #[test]
    fn test_invalid_base64_is_non_fatal() {
        let report = inspect("not-valid-base64!!!");
        assert_eq!(report, FileReport::invalid());
    }

    #[test]
    fn test_png_header_detected() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        let report = inspect(&STANDARD.encode(png));
        assert!(report.valid);
        assert_eq!(report.mime_type, Some("image/png"));
    }

    #[test]
    fn test_size_rounding() {
        assert_eq!(size_in_kb(1024), 1.0);
        assert_eq!(size_in_kb(1536), 1.5);
        assert_eq!(size_in_kb(1), 0.0);
        assert_eq!(size_in_kb(2500), 2.44);
    }

    #[test]
    fn test_size_rounding_ties_to_even() {
        // 128 bytes is exactly 0.125 KB, 384 bytes exactly 0.375 KB
        assert_eq!(size_in_kb(128), 0.12);
        assert_eq!(size_in_kb(384), 0.38);
    }

    #[test]
    fn test_wrapped_base64_accepted() {
        // "hello world", line-wrapped
        let report = inspect("aGVsbG8g\nd29ybGQ=\n");
        assert!(report.valid);
        assert_eq!(report.mime_type, Some("text/plain"));
    }

    #[test]
    fn test_whitespace_only_payload_decodes_empty() {
        let report = inspect("\n");
        assert!(report.valid);
        assert_eq!(report.mime_type, Some("application/octet-stream"));
        assert_eq!(report.size_kb, Some(0.0));
    }
}
