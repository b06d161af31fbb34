use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Pipelines use these to tell a rejected invocation apart from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - SBOM generated or test run submitted
    Success = 0,
    /// Application error (missing input, API error, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation and submission.
///
/// Structural anomalies inside the Bazel query (missing tag lists, malformed
/// coordinates) are not errors; they only cause a rule to be skipped.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    InputFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    InputReadError { path: PathBuf, details: String },

    #[error("Failed to parse Bazel query XML: {path}\nDetails: {details}\n\n💡 Hint: Generate the input with `bazel query --output=xml`")]
    BazelQueryParseError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Pass a JSON file produced by the generate command")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Environment variable {variable} is not set\n\n💡 Hint: Export your Snyk API token as {variable}")]
    MissingApiToken { variable: String },

    #[error("Environment variable {variable} does not contain a valid API token\n\n💡 Hint: Snyk API tokens look like xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx")]
    InvalidApiToken { variable: String },

    #[error("{method} {url} failed after {attempts} attempt(s)\nDetails: {details}")]
    ApiRequestFailed {
        method: String,
        url: String,
        attempts: u32,
        details: String,
    },

    #[error("Unexpected API response: {details}")]
    MalformedApiResponse { details: String },

    /// Validation error for configuration values and request parameters
    #[error("Validation error: {message}")]
    Validation { message: String },
}
