//! Configuration loading and management for the summary service.
//!
//! # Example
//!
//! ```no_run
//! use ponto_summary::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Export sheet: {}", config.export().sheet_name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BatchConfig, ExportConfig, ExportFormat, ServerConfig, ServiceConfig, ServiceFile};
