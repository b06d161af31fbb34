use crate::application::dto::{TestSbomRequest, TestSbomResponse};
use crate::ports::outbound::{ProgressReporter, SbomDocumentReader, SbomTestRepository};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde_json::Value;

/// Number of remote calls made per submission
const SUBMISSION_STEPS: usize = 2;

/// TestSbomUseCase - Submits a generated SBOM to the remote test service
///
/// Creates a test run, then fetches its status exactly once. There is no
/// polling; the status document is returned as-is.
///
/// # Type Parameters
/// * `R` - SbomDocumentReader implementation
/// * `T` - SbomTestRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct TestSbomUseCase<R, T, PR> {
    sbom_reader: R,
    test_repository: T,
    progress_reporter: PR,
}

impl<R, T, PR> TestSbomUseCase<R, T, PR>
where
    R: SbomDocumentReader,
    T: SbomTestRepository,
    PR: ProgressReporter,
{
    pub fn new(sbom_reader: R, test_repository: T, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            test_repository,
            progress_reporter,
        }
    }

    /// Executes the submission
    ///
    /// # Errors
    /// Fails if the SBOM cannot be read, a request exhausts its retries, or
    /// the creation response has no `data.id`
    pub async fn execute(&self, request: TestSbomRequest) -> Result<TestSbomResponse> {
        self.progress_reporter.report(&format!(
            "🧪 Testing SBOM: {}",
            request.sbom_path.display()
        ));

        let sbom = self.sbom_reader.read_sbom(&request.sbom_path)?;

        self.progress_reporter
            .report_progress(1, SUBMISSION_STEPS, Some("Creating SBOM test run"));
        let created = self
            .test_repository
            .create_test_run(&request.org_id, &sbom)
            .await?;

        let test_run_id = Self::extract_test_run_id(&created)?;
        tracing::debug!(test_run_id = %test_run_id, "SBOM test run created");

        self.progress_reporter
            .report_progress(2, SUBMISSION_STEPS, Some("Fetching test run status"));
        let status = self
            .test_repository
            .get_test_run_status(&request.org_id, &test_run_id)
            .await?;

        self.progress_reporter
            .report_completion("✅ SBOM test run submitted");

        Ok(TestSbomResponse::new(test_run_id, status))
    }

    fn extract_test_run_id(response: &Value) -> Result<String> {
        let data = response.get("data").ok_or_else(|| SbomError::MalformedApiResponse {
            details: format!("missing `data` in test run response: {}", response),
        })?;

        data.get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                SbomError::MalformedApiResponse {
                    details: "Could not find test run ID in response".to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests;
