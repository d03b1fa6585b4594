//! Error handling for japflix.
//!
//! This module provides:
//! - [`JfError`]: The main error enum for all japflix operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error with code, category and hint
//!
//! Most failure paths in japflix degrade instead of erroring: a catalog that
//! cannot be loaded becomes an empty catalog, a missing field becomes `N/A`.
//! The variants below cover what is left at the outer layers.

mod codes;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for japflix operations.
#[derive(Error, Debug)]
pub enum JfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Catalog is not a JSON array (found {found})")]
    CatalogShape { found: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl JfError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::HttpStatus { .. } => ErrorCode::HttpStatus,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::CatalogShape { .. } => ErrorCode::CatalogMalformed,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Terminal(_) => ErrorCode::TerminalUnavailable,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::HttpStatus { url, status } => {
                Some(serde_json::json!({ "url": url, "status": status }))
            }
            Self::CatalogShape { found } => Some(serde_json::json!({ "found": found })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_jf_error(self)
    }
}

/// A structured error with machine-readable code and context.
///
/// Printed on stdout in machine mode so scripts can branch on `code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Always `true`; lets consumers tell errors from regular payloads.
    pub error: bool,

    /// The error code (e.g., "CONFIG_INVALID")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 302)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable hint for recovery
    pub suggestion: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Error category (e.g., "config", "network")
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: true,
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`JfError`].
    #[must_use]
    pub fn from_jf_error(err: &JfError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&JfError> for StructuredError {
    fn from(err: &JfError) -> Self {
        Self::from_jf_error(err)
    }
}

/// Result type alias using JfError.
pub type Result<T> = std::result::Result<T, JfError>;
