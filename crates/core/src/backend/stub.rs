use crate::backend::{BackendApi, BackendError, Endpoint, FetchPolicy};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned backend keyed by the endpoint's display path (`/api/contents/NVDA`).
/// Unregistered endpoints answer HTTP 404.
#[derive(Debug, Default)]
pub struct StubBackend {
    responses: HashMap<String, Result<Value, BackendError>>,
    calls: Mutex<Vec<(String, FetchPolicy)>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), Ok(body));
        self
    }

    pub fn with_error(mut self, path: &str, err: BackendError) -> Self {
        self.responses.insert(path.to_string(), Err(err));
        self
    }

    /// Every request seen so far, in arrival order.
    pub fn calls(&self) -> Vec<(String, FetchPolicy)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl BackendApi for StubBackend {
    async fn get_json(
        &self,
        endpoint: &Endpoint,
        policy: FetchPolicy,
    ) -> Result<Value, BackendError> {
        let key = endpoint.to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((key.clone(), policy));
        }
        self.responses
            .get(&key)
            .cloned()
            .unwrap_or(Err(BackendError::Status(404)))
    }
}
