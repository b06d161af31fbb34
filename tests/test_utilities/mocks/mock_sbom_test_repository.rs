use async_trait::async_trait;
use bazel_sbom::prelude::*;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request seen by the mock repository
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Create { org_id: String, sbom: Value },
    Status { org_id: String, test_run_id: String },
}

/// Mock SbomTestRepository answering from queued responses
///
/// Each call pops the next response; an empty queue is an error, the same
/// way an exhausted retry loop would surface.
#[derive(Default, Clone)]
pub struct MockSbomTestRepository {
    responses: Arc<Mutex<VecDeque<Value>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockSbomTestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: Value) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<Value> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Mock repository has no queued response"))
    }
}

#[async_trait]
impl SbomTestRepository for MockSbomTestRepository {
    async fn create_test_run(&self, org_id: &str, sbom: &Value) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall::Create {
            org_id: org_id.to_string(),
            sbom: sbom.clone(),
        });
        self.next_response()
    }

    async fn get_test_run_status(&self, org_id: &str, test_run_id: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall::Status {
            org_id: org_id.to_string(),
            test_run_id: test_run_id.to_string(),
        });
        self.next_response()
    }
}
