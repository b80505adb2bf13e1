//! Image attachments and the multipart form that carries them.
//!
//! Posts are created and updated with `multipart/form-data`: plain text parts
//! for the fields plus an optional `photo` file part. The photo is checked
//! locally (non-empty, size cap, JPG/JPEG/PNG) so obviously bad uploads never
//! leave the device.

use std::fs;
use std::path::Path;

use uuid::Uuid;

use crate::error::ApiError;
use crate::messages;

pub const PHOTO_FIELD: &str = "photo";
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// An image selected for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read an image from disk. A missing or unreadable file is reported the
    /// same way as an empty one.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| {
            tracing::debug!(path = %path.display(), error = %err, "failed to read photo");
            ApiError::InvalidInput(messages::INVALID_IMAGE.to_string())
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { file_name, bytes })
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Why this image may not be uploaded, if anything.
    pub fn check(&self, max_bytes: u64) -> Result<(), PhotoRejection> {
        if self.bytes.is_empty() {
            return Err(PhotoRejection::Empty);
        }
        if self.bytes.len() as u64 > max_bytes {
            return Err(PhotoRejection::TooLarge);
        }
        match self.extension() {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(PhotoRejection::WrongType),
        }
    }

    /// Reject empty, oversized or non-JPG/PNG images for a new post.
    pub fn validate(&self, max_bytes: u64) -> Result<(), ApiError> {
        self.check(max_bytes)
            .map_err(|r| ApiError::InvalidInput(r.message().to_string()))
    }

    /// Same checks as `validate`, worded for replacing an existing image.
    pub fn validate_replacement(&self, max_bytes: u64) -> Result<(), ApiError> {
        self.check(max_bytes)
            .map_err(|r| ApiError::InvalidInput(r.replacement_message().to_string()))
    }

    pub fn content_type(&self) -> String {
        self.extension()
            .and_then(|ext| mime_guess::from_ext(&ext).first())
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoRejection {
    Empty,
    TooLarge,
    WrongType,
}

impl PhotoRejection {
    pub fn message(self) -> &'static str {
        match self {
            PhotoRejection::Empty => messages::INVALID_IMAGE,
            PhotoRejection::TooLarge => messages::IMAGE_TOO_LARGE,
            PhotoRejection::WrongType => messages::FILE_TYPE_NOT_ALLOWED,
        }
    }

    pub fn replacement_message(self) -> &'static str {
        match self {
            PhotoRejection::Empty => messages::REPLACEMENT_IMAGE_INVALID,
            PhotoRejection::TooLarge => messages::REPLACEMENT_IMAGE_TOO_LARGE,
            PhotoRejection::WrongType => messages::REPLACEMENT_IMAGE_TYPE,
        }
    }
}

/// A `multipart/form-data` body under construction.
#[derive(Debug)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::with_boundary(format!("blogcore-{}", Uuid::new_v4().simple()))
    }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.open_part(&format!("Content-Disposition: form-data; name=\"{name}\""));
        self.body.extend_from_slice(b"Content-Type: text/plain; charset=utf-8\r\n\r\n");
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn file(mut self, name: &str, photo: &PhotoUpload) -> Self {
        let file_name = photo.file_name.replace('"', "");
        self.open_part(&format!(
            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\""
        ));
        self.body
            .extend_from_slice(format!("Content-Type: {}\r\n\r\n", photo.content_type()).as_bytes());
        self.body.extend_from_slice(&photo.bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn open_part(&mut self, disposition: &str) {
        self.body
            .extend_from_slice(format!("--{}\r\n{disposition}\r\n", self.boundary).as_bytes());
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Close the form and return `(content-type, body)`.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (self.content_type(), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_MB: u64 = 10 * 1024 * 1024;

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        for name in ["a.jpg", "b.JPEG", "c.Png"] {
            PhotoUpload::new(name, vec![1, 2, 3]).validate(TEN_MB).unwrap();
        }
    }

    #[test]
    fn rejects_empty_photo() {
        let err = PhotoUpload::new("a.png", Vec::new()).validate(TEN_MB).unwrap_err();
        assert_eq!(err.to_string(), messages::INVALID_IMAGE);
    }

    #[test]
    fn rejects_oversized_photo() {
        let err = PhotoUpload::new("a.png", vec![0; 11]).validate(10).unwrap_err();
        assert_eq!(err.to_string(), messages::IMAGE_TOO_LARGE);
    }

    #[test]
    fn rejects_other_types() {
        for name in ["a.gif", "noext", "a.png.exe"] {
            let err = PhotoUpload::new(name, vec![1]).validate(TEN_MB).unwrap_err();
            assert_eq!(err.to_string(), messages::FILE_TYPE_NOT_ALLOWED);
        }
    }

    #[test]
    fn replacement_checks_use_their_own_wording() {
        let cases = [
            (PhotoUpload::new("a.png", Vec::new()), messages::REPLACEMENT_IMAGE_INVALID),
            (PhotoUpload::new("a.png", vec![0; 11]), messages::REPLACEMENT_IMAGE_TOO_LARGE),
            (PhotoUpload::new("a.gif", vec![1]), messages::REPLACEMENT_IMAGE_TYPE),
        ];
        for (photo, expected) in cases {
            let err = photo.validate_replacement(10).unwrap_err();
            assert_eq!(err.to_string(), expected, "{}", photo.file_name);
        }
        assert_eq!(
            PhotoUpload::new("a.gif", vec![1]).check(10),
            Err(PhotoRejection::WrongType)
        );
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(PhotoUpload::new("a.jpg", vec![1]).content_type(), "image/jpeg");
        assert_eq!(PhotoUpload::new("a.jpeg", vec![1]).content_type(), "image/jpeg");
        assert_eq!(PhotoUpload::new("a.png", vec![1]).content_type(), "image/png");
    }

    #[test]
    fn from_path_reads_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        fs::write(&path, b"\x89PNG").unwrap();
        let photo = PhotoUpload::from_path(&path).unwrap();
        assert_eq!(photo.file_name, "cover.png");
        assert_eq!(photo.bytes, b"\x89PNG");
    }

    #[test]
    fn from_missing_path_is_invalid_image() {
        let err = PhotoUpload::from_path("/definitely/not/here.png").unwrap_err();
        assert_eq!(err.to_string(), messages::INVALID_IMAGE);
    }

    #[test]
    fn multipart_layout() {
        let photo = PhotoUpload::new("cat.png", b"PNGDATA".to_vec());
        let (content_type, body) = MultipartForm::with_boundary("XYZ")
            .text("title", "Halo")
            .file(PHOTO_FIELD, &photo)
            .finish();

        assert_eq!(content_type, "multipart/form-data; boundary=XYZ");
        let expected = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"title\"\r\n\
            Content-Type: text/plain; charset=utf-8\r\n\r\n\
            Halo\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"photo\"; filename=\"cat.png\"\r\n\
            Content-Type: image/png\r\n\r\n\
            PNGDATA\r\n\
            --XYZ--\r\n";
        assert_eq!(String::from_utf8(body).unwrap(), expected);
    }
}
