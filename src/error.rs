//! Error types for the timesheet summary engine.
//!
//! The classification and aggregation core never fails: malformed dates and
//! missing identity labels are recovered locally. These errors belong to the
//! layers around it (configuration, PDF extraction, batching, export and the
//! HTTP front-end).

use thiserror::Error;

/// The main error type for the timesheet summary engine.
///
/// # Example
///
/// ```
/// use ponto_summary::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A PDF document could not be opened or read.
    #[error("Failed to extract text from '{source_name}': {message}")]
    PdfExtraction {
        /// Name of the uploaded document.
        source_name: String,
        /// A description of the extraction failure.
        message: String,
    },

    /// Processing a single document exceeded its time budget.
    #[error("Processing '{source_name}' exceeded {seconds}s")]
    DocumentTimeout {
        /// Name of the document that timed out.
        source_name: String,
        /// The budget that was exceeded.
        seconds: u64,
    },

    /// An upload request was structurally invalid.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of what was wrong.
        message: String,
    },

    /// No document in a batch produced a single employee row.
    #[error("None of the {documents} document(s) produced employee rows")]
    EmptyBatch {
        /// How many documents were submitted.
        documents: usize,
    },

    /// The spreadsheet could not be serialized.
    #[error("Export error: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/service.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/service.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_pdf_extraction_displays_source() {
        let error = EngineError::PdfExtraction {
            source_name: "escola_azul.pdf".to_string(),
            message: "invalid file header".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to extract text from 'escola_azul.pdf': invalid file header"
        );
    }

    #[test]
    fn test_document_timeout_displays_budget() {
        let error = EngineError::DocumentTimeout {
            source_name: "escola_azul.pdf".to_string(),
            seconds: 30,
        };
        assert_eq!(error.to_string(), "Processing 'escola_azul.pdf' exceeded 30s");
    }

    #[test]
    fn test_empty_batch_displays_document_count() {
        let error = EngineError::EmptyBatch { documents: 3 };
        assert_eq!(
            error.to_string(),
            "None of the 3 document(s) produced employee rows"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_request() -> EngineResult<()> {
            Err(EngineError::InvalidRequest {
                message: "no documents".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_request()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
