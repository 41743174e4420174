//! Request types for the summary API.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::batch::DocumentInput;
use crate::config::ExportFormat;
use crate::error::{EngineError, EngineResult};

/// Request body for the `/summarize` and `/export` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Documents in submission order.
    pub documents: Vec<DocumentRequest>,
}

/// One document in a summarize request.
///
/// Exactly one of `pages` and `pdf_base64` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// Name used to tag the rows, usually the uploaded file name.
    pub source_name: String,
    /// Page texts already extracted by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,
    /// Base64-encoded PDF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_base64: Option<String>,
}

/// Query string for the `/summarize/pdf` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdfQuery {
    /// Name used to tag the rows. Defaults to `upload.pdf`.
    #[serde(default)]
    pub source_name: Option<String>,
}

impl PdfQuery {
    /// The source name, or `upload.pdf` when none was given.
    pub fn source_name(&self) -> String {
        self.source_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("upload.pdf")
            .to_string()
    }
}

/// Query string for the `/export` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    /// Overrides the configured export format.
    #[serde(default)]
    pub format: Option<ExportFormat>,
}

impl TryFrom<DocumentRequest> for DocumentInput {
    type Error = EngineError;

    fn try_from(req: DocumentRequest) -> EngineResult<Self> {
        match (req.pages, req.pdf_base64) {
            (Some(pages), None) => Ok(DocumentInput::from_pages(req.source_name, pages)),
            (None, Some(encoded)) => {
                let bytes = STANDARD
                    .decode(encoded.trim())
                    .map_err(|e| EngineError::InvalidRequest {
                        message: format!("document '{}': invalid base64: {}", req.source_name, e),
                    })?;
                Ok(DocumentInput::from_pdf(req.source_name, bytes))
            }
            (Some(_), Some(_)) => Err(EngineError::InvalidRequest {
                message: format!(
                    "document '{}': provide either pages or pdf_base64, not both",
                    req.source_name
                ),
            }),
            (None, None) => Err(EngineError::InvalidRequest {
                message: format!(
                    "document '{}': one of pages or pdf_base64 is required",
                    req.source_name
                ),
            }),
        }
    }
}

impl SummarizeRequest {
    /// Validates the request and converts it to batch inputs.
    pub fn into_inputs(self) -> EngineResult<Vec<DocumentInput>> {
        if self.documents.is_empty() {
            return Err(EngineError::InvalidRequest {
                message: "at least one document is required".to_string(),
            });
        }
        self.documents.into_iter().map(DocumentInput::try_from).collect()
    }
}
