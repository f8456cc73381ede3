//! Error types for the ETHOS core library.
//!
//! Simulation queries never fail — absent agents and out-of-range inputs
//! produce neutral defaults. Errors exist only at the configuration
//! boundary.

use thiserror::Error;

/// Top-level error type for all ETHOS operations.
#[derive(Error, Debug)]
pub enum EthosError {
    /// Configuration error (invalid TOML or out-of-range tunable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error (reading a configuration file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, EthosError>;
