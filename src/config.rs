// Runtime configuration and filesystem locations.
// Values come from command-line flags and environment variables.

use std::path::PathBuf;
use std::time::Duration;

use directories::{ProjectDirs, UserDirs};

use crate::intake::MAX_UPLOAD_BYTES;
use crate::state::DEFAULT_NOTICE_TTL;

/// Default analysis service location (the Flask dev server port).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default request timeout. PDF extraction and scoring can be slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service.
    pub server_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// How long an error stays on screen.
    pub notice_ttl: Duration,
    /// Upload size limit in bytes.
    pub max_upload_bytes: u64,
    /// Directory reports are saved into.
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            notice_ttl: DEFAULT_NOTICE_TTL,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            report_dir: default_report_dir(),
        }
    }
}

/// Get the base cache directory (~/.cache/resume-match on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "resume-match").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the log file written while the TUI owns the terminal.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("resume-match.log"))
}

/// The user's download directory, falling back to the working directory.
pub fn default_report_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
