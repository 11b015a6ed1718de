//! Export functionality for session results
//!
//! Currently supports CSV export of the per-game history of a session.

mod session_csv;

pub use session_csv::{SessionCsvExporter, SessionCsvRecord};
