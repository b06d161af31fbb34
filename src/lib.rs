//! bazel-sbom - SBOM generation tool for Bazel JVM projects
//!
//! This library turns the XML output of `bazel query --output=xml` into a
//! CycloneDX 1.4, 1.5 or 1.6 document and can submit that document to the
//! Snyk SBOM test API. It follows hexagonal architecture: the domain never
//! performs I/O.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): Bazel rule model, component
//!   extraction and CycloneDX projection
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, console, formatter and Snyk API
//!   implementations of the ports
//! - **Shared** (`shared`): Error types, result alias and the API token
//!
//! # Example
//!
//! ```no_run
//! use bazel_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = GenerateSbomRequest::new(PathBuf::from("deps.xml"), SpecVersion::V1_5);
//! let response = use_case.execute(request)?;
//!
//! let output = CycloneDxFormatter::new().format(&response.bom)?;
//! FileSystemWriter::new(PathBuf::from("sbom.json")).present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::network::{RetryPolicy, SnykClient};
    pub use crate::application::dto::{
        GenerateSbomRequest, GenerateSbomResponse, TestSbomRequest, TestSbomResponse,
    };
    pub use crate::application::use_cases::{GenerateSbomUseCase, TestSbomUseCase};
    pub use crate::ports::outbound::{
        BazelQueryReader, OutputPresenter, ProgressReporter, SbomDocumentReader, SbomFormatter,
        SbomTestRepository,
    };
    pub use crate::sbom_generation::domain::{
        BazelDependencyGraph, BazelRule, Component, CycloneDxBom, MavenCoordinates, SpecVersion,
    };
    pub use crate::sbom_generation::services::{ComponentExtractor, SbomProjector};
    pub use crate::shared::{ApiToken, Result};
}
