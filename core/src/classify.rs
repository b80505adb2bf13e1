//! Translate a failed HTTP response into the message shown to the user.
//!
//! # Design
//! Each status code owns an ordered list of matchers. A matcher inspects the
//! body (raw text plus the envelope, if the body parsed as one) and either
//! produces a message or passes. The first hit wins; every list ends with an
//! unconditional matcher, and codes without a list get a templated message
//! that embeds the code and the raw body. Nothing here can fail.

use serde_json::Value;

use crate::messages::{self, markers};
use crate::wire::{ApiEnvelope, ValidationError};

/// The body of a failed response, parsed as far as it will go.
struct ErrorBody<'a> {
    raw: &'a str,
    raw_lower: String,
    envelope: Option<ApiEnvelope<Value>>,
}

impl<'a> ErrorBody<'a> {
    fn new(raw: &'a str) -> Self {
        let envelope = if raw.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<ApiEnvelope<Value>>(raw).ok()
        };
        Self {
            raw,
            raw_lower: raw.to_lowercase(),
            envelope,
        }
    }

    fn contains(&self, marker: &str) -> bool {
        self.raw_lower.contains(&marker.to_lowercase())
    }

    /// The envelope's `data` as a list of validation errors, if it is one.
    fn validation_errors(&self) -> Option<Vec<ValidationError>> {
        let data = self.envelope.as_ref()?.data.clone()?;
        serde_json::from_value(data).ok()
    }

    /// The envelope's `data` when the server put a plain string there.
    fn data_text(&self) -> Option<String> {
        match self.envelope.as_ref()?.data.as_ref()? {
            Value::String(s) => Some(s.to_lowercase()),
            _ => None,
        }
    }

    fn envelope_message(&self) -> Option<String> {
        self.envelope
            .as_ref()
            .map(|env| env.message.trim())
            .filter(|msg| !msg.is_empty())
            .map(str::to_string)
    }
}

type Matcher = fn(&ErrorBody<'_>) -> Option<String>;

fn fixed(message: &str) -> Option<String> {
    Some(message.to_string())
}

fn file_type_marker(body: &ErrorBody<'_>) -> Option<String> {
    body.contains(markers::FILE_TYPE_NOT_ALLOWED)
        .then(|| messages::FILE_TYPE_NOT_ALLOWED.to_string())
}

fn photo_required_marker(body: &ErrorBody<'_>) -> Option<String> {
    body.contains(markers::PHOTO_REQUIRED)
        .then(|| messages::PHOTO_REQUIRED.to_string())
}

fn keyword_required_marker(body: &ErrorBody<'_>) -> Option<String> {
    body.contains(markers::KEYWORD_REQUIRED)
        .then(|| messages::KEYWORD_REQUIRED.to_string())
}

fn first_validation_message(body: &ErrorBody<'_>) -> Option<String> {
    body.validation_errors()?
        .into_iter()
        .map(|e| e.msg)
        .find(|msg| !msg.trim().is_empty())
}

fn envelope_message(body: &ErrorBody<'_>) -> Option<String> {
    body.envelope_message()
}

fn invalid_request(_: &ErrorBody<'_>) -> Option<String> {
    fixed(messages::INVALID_REQUEST)
}

fn validation_failed(body: &ErrorBody<'_>) -> Option<String> {
    let errors = body.validation_errors()?;
    let first = errors
        .into_iter()
        .map(|e| e.msg)
        .find(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| messages::VALIDATION.to_string());
    Some(format!("{}: {first}", messages::VALIDATION_FAILED_PREFIX))
}

fn validation_generic(_: &ErrorBody<'_>) -> Option<String> {
    fixed(messages::VALIDATION)
}

fn upload_file_type(body: &ErrorBody<'_>) -> Option<String> {
    body.data_text()
        .filter(|data| data.contains(&markers::FILE_TYPE_NOT_ALLOWED.to_lowercase()))
        .map(|_| messages::FILE_TYPE_NOT_ALLOWED.to_string())
}

fn upload_failed(body: &ErrorBody<'_>) -> Option<String> {
    body.data_text()
        .filter(|data| data.contains(&markers::UPLOAD_FAILED.to_lowercase()))
        .map(|_| messages::UPLOAD_FAILED.to_string())
}

fn server_envelope(body: &ErrorBody<'_>) -> Option<String> {
    body.envelope.as_ref()?;
    Some(body.envelope_message().unwrap_or_else(|| messages::UNKNOWN.to_string()))
}

fn server_error(_: &ErrorBody<'_>) -> Option<String> {
    fixed(messages::SERVER_ERROR)
}

fn unauthorized(_: &ErrorBody<'_>) -> Option<String> {
    fixed(messages::UNAUTHORIZED)
}

fn forbidden(_: &ErrorBody<'_>) -> Option<String> {
    fixed(messages::FORBIDDEN)
}

fn not_found(_: &ErrorBody<'_>) -> Option<String> {
    fixed(messages::NOT_FOUND)
}

fn payload_too_large(_: &ErrorBody<'_>) -> Option<String> {
    fixed(messages::PAYLOAD_TOO_LARGE)
}

const BAD_REQUEST: &[Matcher] = &[
    file_type_marker,
    first_validation_message,
    photo_required_marker,
    keyword_required_marker,
    envelope_message,
    invalid_request,
];
const UNAUTHORIZED: &[Matcher] = &[unauthorized];
const FORBIDDEN: &[Matcher] = &[forbidden];
const NOT_FOUND: &[Matcher] = &[not_found];
const PAYLOAD_TOO_LARGE: &[Matcher] = &[payload_too_large];
const UNPROCESSABLE: &[Matcher] = &[validation_failed, validation_generic];
const SERVER: &[Matcher] = &[upload_file_type, upload_failed, server_envelope, server_error];

fn rules_for(status: u16) -> Option<&'static [Matcher]> {
    match status {
        400 => Some(BAD_REQUEST),
        401 => Some(UNAUTHORIZED),
        403 => Some(FORBIDDEN),
        404 => Some(NOT_FOUND),
        413 => Some(PAYLOAD_TOO_LARGE),
        422 => Some(UNPROCESSABLE),
        500 => Some(SERVER),
        _ => None,
    }
}

/// Classify a non-2xx response into a user-facing message.
///
/// Deterministic and total: any status and any body (including empty or
/// non-JSON) produce a message.
pub fn classify(status: u16, body: &str) -> String {
    let parsed = ErrorBody::new(body);
    rules_for(status)
        .and_then(|rules| rules.iter().find_map(|rule| rule(&parsed)))
        .unwrap_or_else(|| fallback(status, &parsed))
}

fn fallback(status: u16, body: &ErrorBody<'_>) -> String {
    let detail = if body.raw.trim().is_empty() {
        messages::NO_DETAIL
    } else {
        body.raw
    };
    format!("Terjadi kesalahan: HTTP {status}. Pesan: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_status_embeds_code_and_body() {
        let msg = classify(418, "short and stout");
        assert!(msg.contains("418"));
        assert!(msg.contains("short and stout"));
    }

    #[test]
    fn unlisted_status_with_empty_body_says_no_detail() {
        let msg = classify(502, "");
        assert_eq!(msg, "Terjadi kesalahan: HTTP 502. Pesan: Tidak ada detail.");
    }

    #[test]
    fn bad_request_surfaces_first_validation_message() {
        let body = r#"{"success":false,"message":"Validation error","data":[{"msg":"Judul wajib diisi","path":"title"},{"msg":"Konten wajib diisi"}]}"#;
        assert_eq!(classify(400, body), "Judul wajib diisi");
    }

    #[test]
    fn bad_request_file_type_marker_wins() {
        let body = r#"{"success":false,"message":"x","data":[{"msg":"Something else"}],"detail":"file TYPE NOT ALLOWED"}"#;
        assert_eq!(classify(400, body), messages::FILE_TYPE_NOT_ALLOWED);
    }

    #[test]
    fn bad_request_photo_marker_on_plain_text() {
        assert_eq!(classify(400, "Error: photo wajib diisi"), messages::PHOTO_REQUIRED);
    }

    #[test]
    fn bad_request_keyword_marker() {
        let body = r#"{"success":false,"message":"Keyword pencarian wajib diisi","data":null}"#;
        assert_eq!(classify(400, body), messages::KEYWORD_REQUIRED);
    }

    #[test]
    fn bad_request_uses_envelope_message_without_list() {
        let body = r#"{"success":false,"message":"Kategori tidak ada","data":null}"#;
        assert_eq!(classify(400, body), "Kategori tidak ada");
    }

    #[test]
    fn bad_request_unparseable_is_generic() {
        assert_eq!(classify(400, "<html>oops</html>"), messages::INVALID_REQUEST);
        assert_eq!(classify(400, ""), messages::INVALID_REQUEST);
    }

    #[test]
    fn fixed_codes() {
        assert_eq!(classify(401, "whatever"), messages::UNAUTHORIZED);
        assert_eq!(classify(403, ""), messages::FORBIDDEN);
        assert_eq!(classify(404, "{}"), messages::NOT_FOUND);
        assert_eq!(classify(413, "too big"), messages::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn unprocessable_prefixes_first_message() {
        let body = r#"{"success":false,"message":"Validation error","data":[{"msg":"Email sudah digunakan"}]}"#;
        assert_eq!(classify(422, body), "Validasi gagal: Email sudah digunakan");
    }

    #[test]
    fn unprocessable_with_empty_list_uses_generic_detail() {
        let body = r#"{"success":false,"message":"Validation error","data":[]}"#;
        assert_eq!(
            classify(422, body),
            format!("Validasi gagal: {}", messages::VALIDATION)
        );
    }

    #[test]
    fn unprocessable_unparseable_is_generic() {
        assert_eq!(classify(422, "nope"), messages::VALIDATION);
        assert_eq!(classify(422, ""), messages::VALIDATION);
    }

    #[test]
    fn server_error_upload_markers() {
        let body = r#"{"success":false,"message":"Internal","data":"Failed to upload file: bucket down"}"#;
        assert_eq!(classify(500, body), messages::UPLOAD_FAILED);
        let body = r#"{"success":false,"message":"Internal","data":"File type not allowed"}"#;
        assert_eq!(classify(500, body), messages::FILE_TYPE_NOT_ALLOWED);
    }

    #[test]
    fn server_error_falls_back_to_envelope_message() {
        let body = r#"{"success":false,"message":"Database sedang sibuk","data":null}"#;
        assert_eq!(classify(500, body), "Database sedang sibuk");
    }

    #[test]
    fn server_error_unparseable() {
        assert_eq!(classify(500, "Internal Server Error"), messages::SERVER_ERROR);
        assert_eq!(classify(500, ""), messages::SERVER_ERROR);
    }
}
