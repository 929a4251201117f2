//! resume-match: terminal client for a resume/job-description matching service.
//!
//! The service behind `POST /api/analyze` does all extraction and scoring;
//! this crate validates input, submits it, and presents the result.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod intake;
pub mod report;
pub mod state;
pub mod ui;

pub use error::{MatchError, Result};
