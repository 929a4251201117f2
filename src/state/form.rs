// Form state management.
// Holds the job description being edited and the selected resume file.

use std::path::Path;

use crate::error::{MatchError, Result};
use crate::intake::{self, MAX_UPLOAD_BYTES, ResumeFile};

/// A validated request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub job_desc: String,
    pub file: ResumeFile,
}

/// Input state for the analysis form.
#[derive(Debug)]
pub struct FormState {
    /// Job description text.
    pub job_desc: String,
    /// Path typed into the drop zone.
    pub path_input: String,
    /// Selected resume (at most one).
    file: Option<ResumeFile>,
    /// Upload size limit in bytes.
    max_bytes: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(MAX_UPLOAD_BYTES)
    }
}

impl FormState {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            job_desc: String::new(),
            path_input: String::new(),
            file: None,
            max_bytes,
        }
    }

    /// Number of characters in the job description.
    pub fn char_count(&self) -> usize {
        self.job_desc.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        self.job_desc.push(c);
    }

    /// Append pasted text, normalizing line endings.
    pub fn insert_str(&mut self, text: &str) {
        self.job_desc.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn newline(&mut self) {
        self.job_desc.push('\n');
    }

    pub fn backspace(&mut self) {
        self.job_desc.pop();
    }

    pub fn path_push(&mut self, c: char) {
        self.path_input.push(c);
    }

    pub fn path_backspace(&mut self) {
        self.path_input.pop();
    }

    pub fn selected_file(&self) -> Option<&ResumeFile> {
        self.file.as_ref()
    }

    /// Validate and select a file. On failure the previous selection is kept.
    pub fn select_path(&mut self, path: &Path) -> Result<&ResumeFile> {
        let file = ResumeFile::from_path(path, self.max_bytes)?;
        self.path_input.clear();
        Ok(&*self.file.insert(file))
    }

    /// Select the path currently typed into the drop zone.
    pub fn select_typed_path(&mut self) -> Result<&ResumeFile> {
        let typed = self.path_input.clone();
        let path = intake::parse_dropped_path(&typed)
            .ok_or_else(|| MatchError::validation("Provide a file path"))?;
        self.select_path(&path)
    }

    /// Handle text delivered by a terminal drag-and-drop.
    pub fn drop_text(&mut self, text: &str) -> Result<&ResumeFile> {
        let path = intake::parse_dropped_path(text)
            .ok_or_else(|| MatchError::validation("Dropped item is not a file path"))?;
        self.select_path(&path)
    }

    pub fn clear_file(&mut self) {
        self.file = None;
        self.path_input.clear();
    }

    /// Validate the form locally. No network access happens here.
    ///
    /// The selected file is checked again on disk, since it may have been
    /// replaced or grown after it was selected.
    pub fn submission(&self) -> Result<Submission> {
        intake::validate_job_description(&self.job_desc)?;
        let selected = self
            .file
            .as_ref()
            .ok_or_else(|| MatchError::validation("Please upload a resume PDF"))?;
        let file = ResumeFile::from_path(&selected.path, self.max_bytes)?;

        Ok(Submission {
            job_desc: self.job_desc.clone(),
            file,
        })
    }
}
