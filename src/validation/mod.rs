//! Validation functionality
//!
//! Provides validation logic for:
//! - Reference validation (dangling pointers, unresolved names, ownership cycles)

pub mod references;

pub use references::{
    DanglingReference, OwnershipCycle, ReferenceValidationResult, ReferenceValidator, UnresolvedReference,
};
