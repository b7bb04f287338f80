//! OS file-browser integration.
//!
//! After a successful conversion the destination folder is shown to the user
//! in the platform's native file browser. The capability is compiled per
//! target: Windows spawns `explorer`, macOS spawns `open`, and every other
//! OS gets a typed [`Pdf2PptxError::UnsupportedPlatform`] — a job error even
//! when the conversion itself succeeded.
//!
//! The spawned process is not waited on; the browser outlives the job.

use crate::error::Pdf2PptxError;
use std::path::Path;
#[cfg(any(target_os = "windows", target_os = "macos"))]
use tracing::info;

/// Open `dir` in the platform's native file browser.
#[cfg(target_os = "windows")]
pub fn open_in_file_browser(dir: &Path) -> Result<(), Pdf2PptxError> {
    info!("Opening file browser at {}", dir.display());
    std::process::Command::new("explorer")
        .arg(dir)
        .spawn()
        .map_err(|e| Pdf2PptxError::FolderOpenFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
    Ok(())
}

/// Open `dir` in the platform's native file browser.
#[cfg(target_os = "macos")]
pub fn open_in_file_browser(dir: &Path) -> Result<(), Pdf2PptxError> {
    info!("Opening file browser at {}", dir.display());
    std::process::Command::new("open")
        .arg(dir)
        .spawn()
        .map_err(|e| Pdf2PptxError::FolderOpenFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
    Ok(())
}

/// Open `dir` in the platform's native file browser.
///
/// No integration exists for this OS; always fails.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn open_in_file_browser(dir: &Path) -> Result<(), Pdf2PptxError> {
    let _ = dir;
    Err(Pdf2PptxError::UnsupportedPlatform {
        os: std::env::consts::OS.to_string(),
    })
}
