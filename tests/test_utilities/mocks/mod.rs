/// Mock implementations for testing
mod mock_bazel_query_reader;
mod mock_progress_reporter;
mod mock_sbom_document_reader;
mod mock_sbom_test_repository;

pub use mock_bazel_query_reader::MockBazelQueryReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_document_reader::MockSbomDocumentReader;
pub use mock_sbom_test_repository::{MockSbomTestRepository, RecordedCall};
