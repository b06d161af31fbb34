use super::*;
use async_trait::async_trait;
use serde_json::json;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

struct MockSbomReader {
    document: Value,
}

impl SbomDocumentReader for MockSbomReader {
    fn read_sbom(&self, _path: &Path) -> Result<Value> {
        Ok(self.document.clone())
    }
}

/// Records calls and answers with canned documents
struct MockTestRepository {
    create_response: Value,
    status_response: Value,
    calls: Mutex<Vec<String>>,
}

impl MockTestRepository {
    fn new(create_response: Value, status_response: Value) -> Self {
        Self {
            create_response,
            status_response,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SbomTestRepository for MockTestRepository {
    async fn create_test_run(&self, org_id: &str, sbom: &Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("create {} {}", org_id, sbom["bomFormat"]));
        Ok(self.create_response.clone())
    }

    async fn get_test_run_status(&self, org_id: &str, test_run_id: &str) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("status {} {}", org_id, test_run_id));
        Ok(self.status_response.clone())
    }
}

struct FailingTestRepository;

#[async_trait]
impl SbomTestRepository for FailingTestRepository {
    async fn create_test_run(&self, _org_id: &str, _sbom: &Value) -> Result<Value> {
        Err(SbomError::ApiRequestFailed {
            method: "POST".to_string(),
            url: "https://api.snyk.io/rest/orgs/org-1/sbom_tests".to_string(),
            attempts: 3,
            details: "API returned status code 500".to_string(),
        }
        .into())
    }

    async fn get_test_run_status(&self, _org_id: &str, _test_run_id: &str) -> Result<Value> {
        unreachable!("status must not be fetched after a failed creation")
    }
}

#[derive(Clone, Default)]
struct RecordingProgressReporter {
    steps: Rc<RefCell<Vec<(usize, usize)>>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.steps.borrow_mut().push((current, total));
    }

    fn report_warning(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}

fn reader() -> MockSbomReader {
    MockSbomReader {
        document: json!({"bomFormat": "CycloneDX", "specVersion": "1.4"}),
    }
}

fn request() -> TestSbomRequest {
    TestSbomRequest::new(PathBuf::from("sbom.json"), "org-1")
}

#[tokio::test]
async fn test_submission_success() {
    let repository = MockTestRepository::new(
        json!({"data": {"id": "run-42", "type": "sbom_test"}}),
        json!({"data": {"attributes": {"status": "processing"}}}),
    );
    let reporter = RecordingProgressReporter::default();
    let use_case = TestSbomUseCase::new(reader(), repository, reporter.clone());

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.test_run_id, "run-42");
    assert_eq!(response.status["data"]["attributes"]["status"], "processing");
    assert_eq!(
        use_case.test_repository.calls(),
        vec![
            "create org-1 \"CycloneDX\"".to_string(),
            "status org-1 run-42".to_string()
        ]
    );
    assert_eq!(*reporter.steps.borrow(), vec![(1, 2), (2, 2)]);
}

#[tokio::test]
async fn test_submission_without_test_run_id() {
    let repository = MockTestRepository::new(json!({"data": {"type": "sbom_test"}}), json!({}));
    let use_case =
        TestSbomUseCase::new(reader(), repository, RecordingProgressReporter::default());

    let err = use_case.execute(request()).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::MalformedApiResponse { .. })
    ));
    assert!(err.to_string().contains("Could not find test run ID"));
    assert_eq!(use_case.test_repository.calls().len(), 1);
}

#[tokio::test]
async fn test_submission_without_data() {
    let repository = MockTestRepository::new(json!({"errors": [{"status": "400"}]}), json!({}));
    let use_case =
        TestSbomUseCase::new(reader(), repository, RecordingProgressReporter::default());

    let err = use_case.execute(request()).await.unwrap_err();

    assert!(err.to_string().contains("missing `data`"));
}

#[tokio::test]
async fn test_submission_creation_failure_propagates() {
    let use_case = TestSbomUseCase::new(
        reader(),
        FailingTestRepository,
        RecordingProgressReporter::default(),
    );

    let err = use_case.execute(request()).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::ApiRequestFailed { attempts: 3, .. })
    ));
}

#[test]
fn test_extract_test_run_id_rejects_non_string() {
    let result = TestSbomUseCase::<MockSbomReader, MockTestRepository, RecordingProgressReporter>::extract_test_run_id(
        &json!({"data": {"id": 7}}),
    );
    assert!(result.is_err());
}
