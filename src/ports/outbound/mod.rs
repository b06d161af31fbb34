/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod bazel_query_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_document_reader;
pub mod sbom_test_repository;

pub use bazel_query_reader::BazelQueryReader;
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_document_reader::SbomDocumentReader;
pub use sbom_test_repository::SbomTestRepository;
