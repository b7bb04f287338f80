//! Input validation: the source PDF path and the destination folder.
//!
//! Validation runs twice by design: the shell checks synchronously before
//! dispatching a worker (so a missing field is reported without any busy
//! state), and [`crate::convert`] re-checks inside the worker so the library
//! holds the same preconditions when called headlessly. We validate the PDF
//! magic bytes (`%PDF`) in addition to the extension so callers get a
//! meaningful error rather than a pdfium crash on a renamed file.

use crate::error::Pdf2PptxError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check that a source path is set and carries a `.pdf` extension
/// (case-insensitive).
///
/// This is the shell's synchronous pre-flight check; it does not touch the
/// file system.
pub fn validate_source_path(source: Option<&Path>) -> Result<&Path, Pdf2PptxError> {
    let path = source.ok_or(Pdf2PptxError::MissingSource)?;
    if !has_pdf_extension(path) {
        return Err(Pdf2PptxError::InvalidExtension {
            path: path.to_path_buf(),
        });
    }
    Ok(path)
}

/// Check that a destination path is set and is an existing directory.
pub fn validate_destination_path(dest: Option<&Path>) -> Result<&Path, Pdf2PptxError> {
    let path = dest.ok_or(Pdf2PptxError::MissingDestination)?;
    if path.exists() && !path.is_dir() {
        return Err(Pdf2PptxError::DestinationNotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(path)
}

/// True when the path ends in `.pdf`, compared case-insensitively.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Resolve a source path to a readable PDF file, validating existence and
/// the `%PDF` magic bytes.
pub fn resolve_source(path: &Path) -> Result<PathBuf, Pdf2PptxError> {
    validate_source_path(Some(path))?;

    if !path.exists() {
        return Err(Pdf2PptxError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Check read permission by attempting to open
    match std::fs::File::open(path) {
        Ok(mut f) => {
            use std::io::Read;
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2PptxError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2PptxError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Pdf2PptxError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Resolved source PDF: {}", path.display());
    Ok(path.to_path_buf())
}

/// Compute the output file path: `<dest>/<source-base-name>.pptx`.
///
/// The base name is the source file name without its extension. An existing
/// file at the resulting path is overwritten silently.
pub fn output_path_for(source: &Path, dest_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    dest_dir.join(format!("{stem}.pptx"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_pdf_extension(Path::new("deck.pdf")));
        assert!(has_pdf_extension(Path::new("deck.PDF")));
        assert!(has_pdf_extension(Path::new("deck.Pdf")));
        assert!(!has_pdf_extension(Path::new("deck.txt")));
        assert!(!has_pdf_extension(Path::new("deck")));
        assert!(!has_pdf_extension(Path::new("deck.pdf.txt")));
    }

    #[test]
    fn missing_source_is_a_precondition_error() {
        let err = validate_source_path(None).unwrap_err();
        assert!(matches!(err, Pdf2PptxError::MissingSource));
    }

    #[test]
    fn wrong_extension_is_a_precondition_error() {
        let err = validate_source_path(Some(Path::new("notes.txt"))).unwrap_err();
        assert!(matches!(err, Pdf2PptxError::InvalidExtension { .. }));
    }

    #[test]
    fn missing_destination_is_a_precondition_error() {
        let err = validate_destination_path(None).unwrap_err();
        assert!(matches!(err, Pdf2PptxError::MissingDestination));
    }

    #[test]
    fn destination_must_be_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = validate_destination_path(Some(file.path())).unwrap_err();
        assert!(matches!(
            err,
            Pdf2PptxError::DestinationNotADirectory { .. }
        ));
    }

    #[test]
    fn resolve_rejects_non_pdf_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();

        let err = resolve_source(&path).unwrap_err();
        assert!(matches!(err, Pdf2PptxError::NotAPdf { .. }));
    }

    #[test]
    fn resolve_accepts_pdf_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("real.pdf");
        std::fs::write(&path, b"%PDF-1.7\n%...").unwrap();

        assert_eq!(resolve_source(&path).unwrap(), path);
    }

    #[test]
    fn resolve_reports_missing_file() {
        let err = resolve_source(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, Pdf2PptxError::FileNotFound { .. }));
    }

    #[test]
    fn output_path_uses_source_base_name() {
        assert_eq!(
            output_path_for(Path::new("/tmp/deck.pdf"), Path::new("/out")),
            PathBuf::from("/out/deck.pptx")
        );
        assert_eq!(
            output_path_for(Path::new("report.PDF"), Path::new(".")),
            PathBuf::from("./report.pptx")
        );
    }
}
