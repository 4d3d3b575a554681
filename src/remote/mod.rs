//! Client for the remote answer-generation service.
//!
//! The service is an opaque collaborator: it takes a question payload and
//! returns a JSON body whose only interesting field is `output`. Transport
//! failures and non-success statuses map to distinct error variants so the
//! ask flow can choose the right fallback message.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::progress::ProgressState;
use crate::error::{NovaError, Result};

/// Question payload. Field names are the service's wire contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub question: String,
    pub timestamp: DateTime<Utc>,
    pub user_level: u32,
    pub user_streak: u32,
    /// The count this question will bring the total to, not the current
    /// total: the service sees `searches + 1`.
    pub search_count: u64,
}

impl AskRequest {
    pub fn new(question: &str, state: &ProgressState, now: DateTime<Utc>) -> Self {
        Self {
            question: question.to_string(),
            timestamp: now,
            user_level: state.level,
            user_streak: state.streak,
            search_count: state.searches + 1,
        }
    }
}

/// Success-status response body. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerReply {
    #[serde(default)]
    pub output: Option<String>,
}

impl AnswerReply {
    /// The answer text, if the service provided a non-empty one.
    pub fn text(&self) -> Option<&str> {
        self.output.as_deref().filter(|text| !text.trim().is_empty())
    }
}

pub struct AnswerClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl AnswerClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout.max(Duration::from_secs(1)))
            .build()
            .map_err(|err| NovaError::Config(format!("answer service http client: {err}")))?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    /// POST the question and parse the reply.
    ///
    /// Errors: transport problems and unparseable success bodies become
    /// `RemoteUnavailable`; a non-success status becomes `RemoteStatus`.
    pub fn ask(&self, request: &AskRequest) -> Result<AnswerReply> {
        debug!(endpoint = %self.endpoint, "sending question to answer service");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|err| NovaError::RemoteUnavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "answer service rejected request");
            return Err(NovaError::RemoteStatus(status.as_u16()));
        }

        response
            .json::<AnswerReply>()
            .map_err(|err| NovaError::RemoteUnavailable(format!("response parse: {err}")))
    }
}
