//! Local input validation
//!
//! Every check here runs before anything is sent to the analysis service.
//! A rejected input produces [`Error::Validation`] with the exact message
//! shown to the user.

use std::path::Path;

use crate::error::{Error, Result};

/// Upper bound on an uploaded file, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Minimum trimmed text length, in characters.
pub const MIN_TEXT_CHARS: usize = 10;

pub const MSG_UNSUPPORTED_TYPE: &str = "Please upload a PDF, DOCX, or TXT file";
pub const MSG_FILE_TOO_LARGE: &str = "File size must be less than 10MB";
pub const MSG_TEXT_TOO_SHORT: &str = "Please enter at least 10 characters of text to analyze";

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
    PlainText,
}

impl MediaType {
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            MediaType::PlainText => "text/plain",
        }
    }

    /// Match a declared MIME type exactly (parameters such as `charset` are ignored).
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        [MediaType::Pdf, MediaType::Docx, MediaType::PlainText]
            .into_iter()
            .find(|m| m.mime().eq_ignore_ascii_case(essence))
    }

    /// Declared type for a local file, derived from its extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(MediaType::Pdf),
            "docx" => Some(MediaType::Docx),
            "txt" => Some(MediaType::PlainText),
            _ => None,
        }
    }
}

/// A validated file ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Check a file's declared type and size.
///
/// The type check runs first, so an oversized file of the wrong type
/// reports the type error.
pub fn validate_declared(mime: Option<&str>, size: u64) -> Result<MediaType> {
    let media_type = mime
        .and_then(MediaType::from_mime)
        .ok_or_else(|| Error::validation(MSG_UNSUPPORTED_TYPE))?;

    if size > MAX_UPLOAD_BYTES {
        return Err(Error::validation(MSG_FILE_TOO_LARGE));
    }

    Ok(media_type)
}

/// Check pasted text. Length is measured on the trimmed text, in characters.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return Err(Error::validation(MSG_TEXT_TOO_SHORT));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn validation_message(err: Error) -> String {
        match err {
            Error::Validation { message } => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_each_supported_type() {
        for media in [MediaType::Pdf, MediaType::Docx, MediaType::PlainText] {
            assert_eq!(validate_declared(Some(media.mime()), 1024).unwrap(), media);
        }
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let err = validate_declared(Some("image/png"), 10).unwrap_err();
        assert_eq!(validation_message(err), MSG_UNSUPPORTED_TYPE);

        let err = validate_declared(None, 10).unwrap_err();
        assert_eq!(validation_message(err), MSG_UNSUPPORTED_TYPE);
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_declared(Some("application/pdf"), MAX_UPLOAD_BYTES).is_ok());

        let err = validate_declared(Some("application/pdf"), MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(validation_message(err), MSG_FILE_TOO_LARGE);
    }

    #[test]
    fn test_type_error_wins_over_size_error() {
        let err = validate_declared(Some("image/png"), MAX_UPLOAD_BYTES * 2).unwrap_err();
        assert_eq!(validation_message(err), MSG_UNSUPPORTED_TYPE);
    }

    #[test]
    fn test_mime_parameters_ignored() {
        assert_eq!(
            MediaType::from_mime("text/plain; charset=utf-8"),
            Some(MediaType::PlainText)
        );
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(
            MediaType::from_extension(&PathBuf::from("/tmp/Lease.PDF")),
            Some(MediaType::Pdf)
        );
        assert_eq!(
            MediaType::from_extension(&PathBuf::from("contract.docx")),
            Some(MediaType::Docx)
        );
        assert_eq!(
            MediaType::from_extension(&PathBuf::from("notes.txt")),
            Some(MediaType::PlainText)
        );
        assert_eq!(MediaType::from_extension(&PathBuf::from("scan.png")), None);
        assert_eq!(MediaType::from_extension(&PathBuf::from("README")), None);
    }

    #[test]
    fn test_text_length_uses_trimmed_chars() {
        assert!(validate_text("0123456789").is_ok());

        let err = validate_text("   short    ").unwrap_err();
        assert_eq!(validation_message(err), MSG_TEXT_TOO_SHORT);

        // Ten multi-byte characters still count as ten
        assert!(validate_text("éééééééééé").is_ok());
        assert!(validate_text("").is_err());
    }
}
