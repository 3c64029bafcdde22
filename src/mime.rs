//! MIME type detection module
//!
//! Sniffs the media type from the leading bytes of a decoded payload.

/// Detect the MIME type of a byte buffer from its magic numbers.
///
/// Falls back to `text/plain` for valid UTF-8 and `application/octet-stream`
/// for everything else.
pub fn detect_mime_type(data: &[u8]) -> &'static str {
    if data.is_empty() {
        return "application/octet-stream";
    }

    // Images
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "image/png";
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return "image/gif";
    }
    if data.starts_with(b"BM") {
        return "image/bmp";
    }

    // RIFF containers share a four-byte prefix; the format tag is at offset 8
    if data.starts_with(b"RIFF") && data.len() >= 12 {
        return match &data[8..12] {
            b"WEBP" => "image/webp",
            b"WAVE" => "audio/wav",
            b"AVI " => "video/x-msvideo",
            _ => "application/octet-stream",
        };
    }

    // Documents and archives
    if data.starts_with(b"%PDF-") {
        return "application/pdf";
    }
    if data.starts_with(&[b'P', b'K', 0x03, 0x04])
        || data.starts_with(&[b'P', b'K', 0x05, 0x06])
    {
        return "application/zip";
    }
    if data.starts_with(&[0x1F, 0x8B]) {
        return "application/gzip";
    }

    // Audio/video
    if data.starts_with(b"ID3") || data.starts_with(&[0xFF, 0xFB]) {
        return "audio/mpeg";
    }
    if data.starts_with(b"OggS") {
        return "audio/ogg";
    }
    if data.starts_with(b"fLaC") {
        return "audio/flac";
    }
    if data.len() >= 12 && &data[4..8] == b"ftyp" {
        return "video/mp4";
    }

    // Default: printable text or opaque bytes
    if std::str::from_utf8(data).is_ok() {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}
