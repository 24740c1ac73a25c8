//! Blocking JSON transport shared by the completion providers.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::builder::InspectorConfig;
use super::error::LlmError;

/// What to do with a response whose HTTP status is not 2xx.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Parse the body like any other. Error bodies usually carry no
    /// `choices` and come back as an empty completion.
    #[default]
    Ignore,
    /// Fail with [`LlmError::Api`] before parsing.
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Total time allowed for one request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub status_policy: StatusPolicy,
}

/// Issues one POST per call. No retries and no connection reuse between calls.
pub struct HttpClient {
    config: HttpClientConfig,
    user_agent: String,
    inspector_config: InspectorConfig,
}

impl HttpClient {
    pub fn new(
        config: HttpClientConfig,
        user_agent: Option<&str>,
        inspector_config: InspectorConfig,
    ) -> Self {
        let user_agent = user_agent
            .map(str::to_string)
            .unwrap_or_else(|| format!("gptclient/{}", env!("CARGO_PKG_VERSION")));

        Self {
            config,
            user_agent,
            inspector_config,
        }
    }

    fn build_client(&self) -> Result<reqwest::blocking::Client, LlmError> {
        reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| LlmError::Transport {
                message: "Failed to build HTTP client".to_string(),
                source: Box::new(e),
            })
    }

    /// POST `body` as JSON with a bearer token and decode the reply.
    ///
    /// The whole body is buffered before decoding. The raw text is logged at
    /// debug level and handed to the response inspector, if any.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, bearer_token, body),
        fields(url = %url),
        err
    )]
    pub fn post_json<Req, Res>(
        &self,
        url: &str,
        bearer_token: &str,
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let body_value = serde_json::to_value(body).map_err(|e| LlmError::Serialization {
            message: "Failed to serialize request body".to_string(),
            source: Box::new(e),
        })?;

        if let Some(ref inspector) = self.inspector_config.request_inspector {
            inspector(&body_value);
        }

        let payload = serde_json::to_vec(&body_value).map_err(|e| LlmError::Serialization {
            message: "Failed to encode request body".to_string(),
            source: Box::new(e),
        })?;

        let client = self.build_client()?;
        let res = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(bearer_token)
            .body(payload)
            .send()
            .map_err(|e| {
                warn!(error = %e, "HTTP request failed");
                LlmError::Transport {
                    message: "Failed to send request".to_string(),
                    source: Box::new(e),
                }
            })?;

        let status = res.status();
        let response_text = res.text().map_err(|e| {
            warn!(status = %status, error = %e, "Failed to read response body");
            LlmError::Transport {
                message: "Failed to read response body".to_string(),
                source: Box::new(e),
            }
        })?;

        debug!(status = %status, body = %response_text, "Received response");

        if let Some(ref inspector) = self.inspector_config.response_inspector {
            inspector(&response_text);
        }

        if !status.is_success() {
            match self.config.status_policy {
                StatusPolicy::Reject => {
                    warn!(status = %status, "API returned error status");
                    return Err(LlmError::Api {
                        message: format!("HTTP {status}: {response_text}"),
                        status_code: Some(status.as_u16()),
                    });
                }
                StatusPolicy::Ignore => {
                    debug!(status = %status, "Parsing body of non-success response");
                }
            }
        }

        serde_json::from_str(&response_text).map_err(|e| {
            warn!(error = %e, "Failed to parse response body");
            LlmError::Deserialization {
                message: "Failed to parse API response".to_string(),
                source: Box::new(e),
            }
        })
    }
}
