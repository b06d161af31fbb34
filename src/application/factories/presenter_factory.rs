use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Output argument value that selects stdout
pub const STDOUT_MARKER: &str = "-";

/// Where the generated document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Interprets the `--output` argument; `-` means stdout
    pub fn from_output_arg(output: &str) -> Self {
        if output == STDOUT_MARKER {
            PresenterType::Stdout
        } else {
            PresenterType::File(PathBuf::from(output))
        }
    }
}

/// Factory for creating output presenters
///
/// Keeps the choice of filesystem adapter out of the CLI layer.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use bazel_sbom::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
