//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The description document could not be parsed.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The description document failed the structural preflight check.
    #[from(ignore)]
    #[display("Validation Error: {_0}")]
    Validation(String),

    /// A curl preview could not build its target URL.
    #[from(ignore)]
    #[display("Invalid URL: {_0}")]
    InvalidUrl(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
