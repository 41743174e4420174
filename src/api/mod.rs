//! HTTP API module for the timesheet summary service.
//!
//! Upload one or more timesheet documents, get back the consolidated
//! per-employee table as JSON or as a downloadable spreadsheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DocumentRequest, ExportQuery, PdfQuery, SummarizeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
