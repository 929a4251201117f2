// Resume intake module.
// Validates the resume file and job description before anything is sent.

pub mod drop;
pub mod validate;

pub use drop::parse_dropped_path;
pub use validate::{
    MAX_UPLOAD_BYTES, ResumeFile, format_file_size, validate_file_name, validate_file_size,
    validate_job_description,
};
