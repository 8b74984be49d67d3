//! Export functionality
//!
//! Provides translators from the internal model to external formats:
//! - EnergyPlus IDF

pub mod energyplus;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Re-export for convenience
pub use energyplus::ForwardTranslator;
