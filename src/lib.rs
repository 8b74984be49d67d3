//! Energy Modelling SDK - Building energy object model and translators
//!
//! Provides unified interfaces for:
//! - Schema definitions for the OpenStudio and EnergyPlus dialects
//! - Field records, workspaces and the IDF/OSM text codec
//! - Typed domain objects over a model workspace
//! - Forward (model to IDF) and reverse (IDF to model) translation
//! - Reference validation
//! - Translator configuration and diagnostics

pub mod config;
pub mod export;
pub mod idd;
pub mod import;
pub mod log;
pub mod model;
pub mod validation;
pub mod workspace;

// Re-export commonly used types
pub use config::{ConfigError, ForwardTranslatorOptions, ReverseTranslatorOptions, TranslatorConfig};
pub use export::{ExportError, ExportResult, ForwardTranslator};
pub use idd::{Dialect, IddFile, IddObjectType};
pub use import::{ImportError, ImportResult, ReverseTranslator};
pub use log::{LogLevel, LogMessage, LogSink};
pub use model::{
    AnyModelObject, ConcreteModelObject, Model, ModelError, ModelObject, ModelObjectList, ObjectCast, ObjectHandle,
    UniqueModelObject,
};
pub use validation::{ReferenceValidationResult, ReferenceValidator};

// Re-export workspace types
pub use workspace::{read_workspace, write_workspace, FieldValue, Handle, ParseError, Workspace, WorkspaceObject};
