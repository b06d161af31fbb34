use crate::application::dto::{GenerateSbomRequest, GenerateSbomResponse};
use crate::ports::outbound::{BazelQueryReader, ProgressReporter};
use crate::sbom_generation::services::{ComponentExtractor, SbomProjector};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Reads a Bazel query export, extracts Maven components and their edges,
/// and projects them onto the requested CycloneDX version.
///
/// # Type Parameters
/// * `R` - BazelQueryReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<R, PR> {
    query_reader: R,
    progress_reporter: PR,
    extractor: ComponentExtractor,
}

impl<R, PR> GenerateSbomUseCase<R, PR>
where
    R: BazelQueryReader,
    PR: ProgressReporter,
{
    pub fn new(query_reader: R, progress_reporter: PR) -> Self {
        Self {
            query_reader,
            progress_reporter,
            extractor: ComponentExtractor::new(),
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Errors
    /// Fails if the input cannot be read or is not well-formed XML. Rules
    /// that are not usable Maven imports are skipped, never reported as
    /// errors.
    pub fn execute(&self, request: GenerateSbomRequest) -> Result<GenerateSbomResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading Bazel query output from: {}",
            request.input_path.display()
        ));

        let xml = self.query_reader.read_bazel_query(&request.input_path)?;

        let graph = self
            .extractor
            .extract(&xml)
            .map_err(|e| SbomError::BazelQueryParseError {
                path: request.input_path.clone(),
                details: e.to_string(),
            })?;

        if graph.component_count() == 0 {
            self.progress_reporter
                .report_warning("No jvm_import rules with Maven coordinates were found");
        }

        self.progress_reporter.report(&format!(
            "✅ Extracted {} component(s) and {} dependency edge(s)",
            graph.component_count(),
            graph.dependency_count()
        ));

        let bom = SbomProjector::generate(&graph, request.spec_version);
        tracing::debug!(spec_version = %request.spec_version, "CycloneDX document projected");

        Ok(GenerateSbomResponse::new(bom))
    }
}
