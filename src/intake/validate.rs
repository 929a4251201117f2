// Client-side validation for resume uploads.
// Rejects non-PDF and oversized files before a request is built.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MatchError, Result};

/// Largest resume the service accepts: 50 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// A resume file that passed local validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    /// File name as sent in the multipart form.
    pub name: String,
    pub size: u64,
}

impl ResumeFile {
    /// Validate a path on disk and capture its name and size.
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(MatchError::validation("Provide a file path"));
        }

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MatchError::validation(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
            Err(e) => return Err(MatchError::Io(e)),
        };

        if !metadata.is_file() {
            return Err(MatchError::validation(format!(
                "{} is not a file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        validate_file_name(&name)?;

        let size = metadata.len();
        if size == 0 {
            return Err(MatchError::validation(format!(
                "{} is empty",
                path.display()
            )));
        }
        validate_file_size(size, max_bytes)?;

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size,
        })
    }
}

/// The extension must be `.pdf`, in any letter case.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.to_lowercase().ends_with(".pdf") {
        Ok(())
    } else {
        Err(MatchError::validation("File must be a PDF"))
    }
}

pub fn validate_file_size(size: u64, max_bytes: u64) -> Result<()> {
    if size > max_bytes {
        Err(MatchError::validation(format!(
            "File size exceeds {}MB limit",
            max_bytes / (1024 * 1024)
        )))
    } else {
        Ok(())
    }
}

pub fn validate_job_description(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Err(MatchError::validation("Please enter a job description"))
    } else {
        Ok(())
    }
}

/// Format a byte count for display (e.g., "1.5 MB").
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_pdf_extension_is_case_insensitive() {
        assert!(validate_file_name("resume.pdf").is_ok());
        assert!(validate_file_name("Resume.PDF").is_ok());
        assert!(validate_file_name("resume.docx").is_err());
        assert!(validate_file_name("pdf").is_err());
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_file_size(MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES).is_ok());

        let err = validate_file_size(MAX_UPLOAD_BYTES + 1, MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(err.to_string(), "File size exceeds 50MB limit");
    }

    #[test]
    fn test_job_description_must_not_be_blank() {
        assert!(validate_job_description("Rust engineer").is_ok());

        let err = validate_job_description("  \n\t ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a job description");
        assert!(err.is_local());
    }

    #[test]
    fn test_from_path_accepts_pdf() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cv.pdf", b"%PDF-1.4 test");

        let file = ResumeFile::from_path(&path, MAX_UPLOAD_BYTES).unwrap();
        assert_eq!(file.name, "cv.pdf");
        assert_eq!(file.size, 13);
    }

    #[test]
    fn test_from_path_rejects_non_pdf() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cv.txt", b"hello");

        let err = ResumeFile::from_path(&path, MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(err.to_string(), "File must be a PDF");
    }

    #[test]
    fn test_from_path_rejects_oversized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.pdf");
        let file = fs::File::create(&path).unwrap();
        // Sparse file; no 50MB actually written.
        file.set_len(MAX_UPLOAD_BYTES + 1).unwrap();

        let err = ResumeFile::from_path(&path, MAX_UPLOAD_BYTES).unwrap_err();
        assert!(err.to_string().contains("exceeds 50MB"));
    }

    #[test]
    fn test_from_path_rejects_missing_and_empty() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("nope.pdf");
        let err = ResumeFile::from_path(&missing, MAX_UPLOAD_BYTES).unwrap_err();
        assert!(err.to_string().ends_with("does not exist"));

        let empty = write_file(&dir, "empty.pdf", b"");
        let err = ResumeFile::from_path(&empty, MAX_UPLOAD_BYTES).unwrap_err();
        assert!(err.to_string().ends_with("is empty"));

        let err = ResumeFile::from_path(Path::new(""), MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(err.to_string(), "Provide a file path");
    }

    #[test]
    fn test_from_path_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("folder.pdf");
        fs::create_dir(&sub).unwrap();

        let err = ResumeFile::from_path(&sub, MAX_UPLOAD_BYTES).unwrap_err();
        assert!(err.to_string().ends_with("is not a file"));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
