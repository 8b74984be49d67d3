//! Import functionality
//!
//! Provides translators from external formats into the internal model:
//! - EnergyPlus IDF

pub mod energyplus;

use crate::log::LogMessage;
use crate::model::Model;
use crate::workspace::ParseError;

/// Result of an import operation
#[derive(Debug)]
pub struct ImportResult {
    /// Reconstructed model
    pub model: Model,
    /// Translation warnings
    pub warnings: Vec<LogMessage>,
    /// Translation errors; the model is still usable
    pub errors: Vec<LogMessage>,
}

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Re-export for convenience
pub use energyplus::ReverseTranslator;
