// Match report rendering and export.
// Produces the plain-text report and writes it to disk atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::api::AnalysisResult;
use crate::error::Result;

/// File name used when saving a report.
pub const REPORT_FILE_NAME: &str = "resume_match_report.txt";

/// Render the plain-text match report.
pub fn render_report(result: &AnalysisResult) -> String {
    format!(
        "RESUME MATCH REPORT\n\
         {rule}\n\
         Match Score: {score}%\n\
         Matched Skills: {n_matched}\n\
         Missing Keywords: {n_missing}\n\
         \n\
         MATCHED SKILLS ({n_matched}):\n\
         {matched}\n\
         \n\
         MISSING KEYWORDS ({n_missing}):\n\
         {missing}\n",
        rule = "=".repeat(50),
        score = result.score,
        n_matched = result.matched.len(),
        n_missing = result.missing.len(),
        matched = result.matched.join(", "),
        missing = result.missing.join(", "),
    )
}

/// Render the result as pretty-printed JSON in the service's wire format.
pub fn render_report_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Save the text report into `dir`, returning the written path.
pub fn save_report(dir: &Path, result: &AnalysisResult) -> Result<PathBuf> {
    let path = dir.join(REPORT_FILE_NAME);
    write_text(&path, &render_report(result))?;
    info!(path = %path.display(), "Saved match report");
    Ok(path)
}

/// Write text to a file atomically via a temp file.
fn write_text(path: &Path, text: &str) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
