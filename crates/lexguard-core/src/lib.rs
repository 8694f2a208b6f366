//! # lexguard-core - Core Domain Types
//!
//! Foundation crate for LexGuard. Provides the domain types exchanged with
//! the analysis service, local input validation, error handling and logging.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`DocumentId`] - Server-assigned document identifier
//! - [`Risk`] / [`Severity`] - A flagged clause and its severity
//! - [`AnalysisResult`] - Payload returned by both analysis endpoints
//! - [`DocumentRecord`] / [`DocumentSummary`] - Stored documents
//! - [`AnalysisPhase`], [`InputMode`], [`ResultTab`] - Workflow enums
//!
//! ### Input Validation (`intake`)
//! - [`validate_declared()`] - File type and size checks
//! - [`validate_text()`] - Minimum length check for pasted text
//! - [`FileUpload`], [`MediaType`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use lexguard_core::prelude::*;
//! ```

pub mod error;
pub mod intake;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use intake::{validate_declared, validate_text, FileUpload, MediaType};
pub use types::{
    assign_missing_ids, AnalysisPhase, AnalysisResult, DocumentId, DocumentRecord,
    DocumentSummary, InputMode, ResultTab, Risk, Severity,
};
