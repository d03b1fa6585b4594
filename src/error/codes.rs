//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Catalog errors
//! - 3xx: Config errors
//! - 5xx: Network errors
//! - 6xx: Storage errors
//! - 7xx: Terminal errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine mode output.
///
/// Each variant maps to a numeric code (e.g., `ConfigInvalid` -> E302).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Catalog errors (1xx)
    // ========================================
    /// E101: Catalog document is valid JSON but not an array of movies
    CatalogMalformed,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E501: Request could not be sent or the body could not be read
    NetworkError,
    /// E502: Server answered with a non-success status
    HttpStatus,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Local file could not be read
    IoError,
    /// E605: JSON could not be parsed or written
    SerializationError,

    // ========================================
    // Terminal errors (7xx)
    // ========================================
    /// E701: Interactive UI needs a terminal
    TerminalUnavailable,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Requested item does not exist
    NotFound,
}

impl ErrorCode {
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::CatalogMalformed => 101,
            Self::ConfigInvalid => 302,
            Self::NetworkError => 501,
            Self::HttpStatus => 502,
            Self::IoError => 601,
            Self::SerializationError => 605,
            Self::TerminalUnavailable => 701,
            Self::NotFound => 901,
        }
    }

    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::CatalogMalformed => "The catalog must be a JSON array of movie objects",
            Self::ConfigInvalid => "Check TOML syntax in the config file and JAPFLIX_* environment variables",
            Self::NetworkError => "Check your network connection, or point --catalog-file at a local copy",
            Self::HttpStatus => "Verify the catalog URL with --catalog-url or JAPFLIX_CATALOG_URL",
            Self::IoError => "Check the path exists and is readable",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::TerminalUnavailable => "Run `japflix browse` from an interactive terminal, or use `japflix search`",
            Self::NotFound => "Run `japflix search <query>` to list the available results",
        }
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "catalog",
            3 => "config",
            5 => "network",
            6 => "storage",
            7 => "terminal",
            9 => "internal",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
