//! HTTP client for the users endpoint.
//!
//! [`UserGateway`] is the seam the submission flow depends on;
//! [`HttpUserGateway`] is the reqwest implementation.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::{SubmitError, SubmitResult};
use crate::types::{ApiResult, SubmissionPayload};

/// Creates user records on a remote service.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn create_user(&self, payload: &SubmissionPayload) -> SubmitResult<ApiResult>;
}

/// Error body some servers send with a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// Thin wrapper around reqwest that posts to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    http: Client,
    endpoint: Url,
}

impl HttpUserGateway {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    async fn create_user(&self, payload: &SubmissionPayload) -> SubmitResult<ApiResult> {
        tracing::debug!(endpoint = %self.endpoint, "Posting new user");

        // `.json()` sets Content-Type: application/json.
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(SubmitError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = res.json::<ErrorBody>().await.ok().map(|body| body.message);
            return Err(SubmitError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // Read the body first so a transport failure mid-body is not reported as a decode error.
        let bytes = res.bytes().await.map_err(SubmitError::Transport)?;
        serde_json::from_slice::<ApiResult>(&bytes).map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
