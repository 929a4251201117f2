// State management module.
// Handles form input, the request lifecycle, results, and error notices.

pub mod form;
pub mod notice;
pub mod request;
pub mod results;

pub use form::{FormState, Submission};
pub use notice::{DEFAULT_NOTICE_TTL, Notice, NoticeMessage};
pub use request::{LoadingState, RequestState};
pub use results::{KeywordTab, ResultsState};
