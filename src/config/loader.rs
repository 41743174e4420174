//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! configuration from YAML files.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{EngineError, EngineResult};

use super::types::{BatchConfig, ExportConfig, ServerConfig, ServiceConfig, ServiceFile};

/// Excel's limit on worksheet names.
const MAX_SHEET_NAME_CHARS: usize = 31;

/// Loads and provides access to service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── service.yaml   # server and batch settings
/// └── export.yaml    # spreadsheet export settings
/// ```
///
/// # Example
///
/// ```no_run
/// use ponto_summary::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Listening on {}", loader.server().bind_address);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceFile>(&path.join("service.yaml"))?;
        let export = Self::load_yaml::<ExportConfig>(&path.join("export.yaml"))?;

        Self::from_config(ServiceConfig {
            server: service.server,
            batch: service.batch,
            export,
        })
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: ServiceConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &ServiceConfig) -> EngineResult<()> {
        if config.batch.max_workers == 0 {
            return Err(EngineError::InvalidConfig {
                field: "batch.max_workers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.batch.document_timeout_secs == 0 {
            return Err(EngineError::InvalidConfig {
                field: "batch.document_timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !config.export.delimiter.is_ascii() {
            return Err(EngineError::InvalidConfig {
                field: "export.delimiter".to_string(),
                message: format!("'{}' is not an ASCII character", config.export.delimiter),
            });
        }
        if config.export.file_stem.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "export.file_stem".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let sheet_chars = config.export.sheet_name.chars().count();
        if sheet_chars == 0 || sheet_chars > MAX_SHEET_NAME_CHARS {
            return Err(EngineError::InvalidConfig {
                field: "export.sheet_name".to_string(),
                message: format!("must be 1 to {} characters", MAX_SHEET_NAME_CHARS),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the batch settings.
    pub fn batch(&self) -> &BatchConfig {
        &self.config.batch
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportConfig {
        &self.config.export
    }

    /// Per-document time budget.
    pub fn document_timeout(&self) -> Duration {
        Duration::from_secs(self.config.batch.document_timeout_secs)
    }
}
