//! Surface error types

use std::io;
use thiserror::Error;

/// Errors raised while loading or validating surface configuration
///
/// Runtime setters never fail; out-of-range values there are sanitized.
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// IO error when reading a config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("Config parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Malformed color literal
    #[error("Invalid color '{0}': expected #rrggbb, #rrggbbaa or \"none\"")]
    InvalidColor(String),

    /// Numeric value outside its valid range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
