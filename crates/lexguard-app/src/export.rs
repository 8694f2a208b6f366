//! Plain-text export of the edited document

use std::path::{Path, PathBuf};

use lexguard_core::prelude::*;

pub const EXPORT_FILE_NAME: &str = "edited-document.txt";
pub const EXPORT_MIME: &str = "text/plain";

/// Write `text` to `<directory>/edited-document.txt`, replacing any
/// previous export.
pub async fn export_text(directory: &Path, text: &str) -> Result<PathBuf> {
    if !directory.as_os_str().is_empty() {
        tokio::fs::create_dir_all(directory)
            .await
            .with_context(|| format!("Failed to create {}", directory.display()))?;
    }
    let path = directory.join(EXPORT_FILE_NAME);
    tokio::fs::write(&path, text.as_bytes())
        .await
        .context("Failed to write export")?;
    info!("Exported {} bytes ({}) to {}", text.len(), EXPORT_MIME, path.display());
    Ok(path)
}
