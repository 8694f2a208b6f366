//! Input acquisition
//!
//! Turns a local path or pasted text into something the analysis service
//! accepts, applying the checks from [`lexguard_core::intake`] before any
//! bytes leave the machine.

use std::io::Read;
use std::path::Path;

use lexguard_core::intake::{
    validate_declared, validate_text, FileUpload, MediaType, MAX_UPLOAD_BYTES, MSG_FILE_TOO_LARGE,
};
use lexguard_core::prelude::*;

/// Validate and read a local file.
///
/// The declared type comes from the extension and the size from metadata,
/// so rejected files are never read.
pub fn acquire_file(path: &Path) -> Result<FileUpload> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        debug!("Cannot stat {}: {}", path.display(), e);
        Error::validation(format!("Cannot read file: {}", path.display()))
    })?;
    if !metadata.is_file() {
        return Err(Error::validation(format!(
            "Not a file: {}",
            path.display()
        )));
    }

    let declared = MediaType::from_extension(path).map(|m| m.mime());
    let media_type = validate_declared(declared, metadata.len())?;

    // The file may have grown since it was stat'ed
    let bytes = read_capped(std::fs::File::open(path)?, MAX_UPLOAD_BYTES)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    info!(
        "Accepted {} ({} bytes, {})",
        file_name,
        bytes.len(),
        media_type.mime()
    );
    Ok(FileUpload {
        file_name,
        media_type,
        bytes,
    })
}

/// Read at most `limit` bytes; anything longer is rejected as too large.
fn read_capped(reader: impl Read, limit: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.take(limit + 1).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        return Err(Error::validation(MSG_FILE_TOO_LARGE));
    }
    Ok(bytes)
}

/// Validate pasted text. Accepted text is returned exactly as typed.
pub fn acquire_text(text: &str) -> Result<String> {
    validate_text(text)?;
    Ok(text.to_string())
}
