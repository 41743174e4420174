//! Configuration types for the summary service.
//!
//! These structures are deserialized from the YAML files in the
//! configuration directory. Every field has a default so partial files work.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_address: String,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Multi-document processing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of documents processed at once.
    pub max_workers: usize,
    /// Time budget for extracting and aggregating one document.
    pub document_timeout_secs: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_workers: 4,
            document_timeout_secs: 120,
        }
    }
}

/// service.yaml file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceFile {
    /// Server section.
    pub server: ServerConfig,
    /// Batch section.
    pub batch: BatchConfig,
}

/// Spreadsheet file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited text.
    Csv,
    /// Excel workbook with a single sheet.
    #[default]
    Xlsx,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Spreadsheet export settings, from export.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when the request does not name one.
    pub format: ExportFormat,
    /// Download file name without extension.
    pub file_stem: String,
    /// Worksheet name in workbook exports. At most 31 characters.
    pub sheet_name: String,
    /// CSV field delimiter. Must be a single ASCII character.
    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            file_stem: "planilha_mae_ponto".to_string(),
            sheet_name: "Detalhado".to_string(),
            delimiter: ';',
        }
    }
}

impl ExportConfig {
    /// Download file name for the given format.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Batch settings.
    pub batch: BatchConfig,
    /// Export settings.
    pub export: ExportConfig,
}
