use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::provider::constants::openai::API_KEY_ENV_VAR;
use crate::provider::openai::{OpenAiClient, OpenAiConfig};

use super::error::LlmError;
use super::http::{HttpClientConfig, StatusPolicy};

pub type RequestInspector = Arc<dyn Fn(&serde_json::Value) + Send + Sync>;
pub type ResponseInspector = Arc<dyn Fn(&str) + Send + Sync>;

/// Hooks that observe traffic without changing it.
///
/// The request inspector sees the JSON body before it is sent. The response
/// inspector sees the raw body text before it is parsed, for every status.
#[derive(Clone, Default)]
pub struct InspectorConfig {
    pub request_inspector: Option<RequestInspector>,
    pub response_inspector: Option<ResponseInspector>,
}

impl fmt::Debug for InspectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorConfig")
            .field("request_inspector", &self.request_inspector.is_some())
            .field("response_inspector", &self.response_inspector.is_some())
            .finish()
    }
}

/// Where the API key comes from.
#[derive(Clone, PartialEq)]
pub enum ApiKey {
    /// Read `OPENAI_API_KEY` from the environment.
    Default,
    Custom(String),
}

impl ApiKey {
    pub fn resolve(self) -> Result<String, LlmError> {
        match self {
            ApiKey::Default => std::env::var(API_KEY_ENV_VAR)
                .map_err(|_| LlmError::ProviderConfiguration(format!("{API_KEY_ENV_VAR} not set."))),
            ApiKey::Custom(key) => Ok(key),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Default => f.write_str("ApiKey::Default"),
            ApiKey::Custom(_) => f.write_str("ApiKey::Custom([REDACTED])"),
        }
    }
}

#[derive(Debug)]
pub struct CompletionClientBuilder {
    config: OpenAiConfig,
}

impl CompletionClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.generation.model = model.into();
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.generation.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.generation.temperature = temperature;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = Some(timeout);
        self
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config.http.status_policy = policy;
        self
    }

    pub fn http_client_config(mut self, config: HttpClientConfig) -> Self {
        self.config.http = config;
        self
    }

    pub fn inspect_request<F>(mut self, inspector: F) -> Self
    where
        F: Fn(&serde_json::Value) + Send + Sync + 'static,
    {
        self.config.inspector.request_inspector = Some(Arc::new(inspector));
        self
    }

    pub fn inspect_response<F>(mut self, inspector: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.inspector.response_inspector = Some(Arc::new(inspector));
        self
    }

    pub fn build(self) -> Result<OpenAiClient, LlmError> {
        validate_config(&self.config)?;
        Ok(OpenAiClient::from_config(self.config))
    }
}

fn validate_config(config: &OpenAiConfig) -> Result<(), LlmError> {
    if config.base_url.trim().is_empty() {
        return Err(LlmError::Builder(
            "Missing base URL. Make sure to set a non-empty base URL.".to_string(),
        ));
    }

    if config.generation.model.trim().is_empty() {
        return Err(LlmError::Builder(
            "Missing model. Make sure to set a model identifier.".to_string(),
        ));
    }

    if config.generation.max_tokens == 0 {
        return Err(LlmError::Builder(
            "max_tokens must be greater than zero.".to_string(),
        ));
    }

    let temperature = config.generation.temperature;
    if !(0.0..=1.0).contains(&temperature) {
        return Err(LlmError::Builder(format!(
            "temperature must be between 0.0 and 1.0, got {temperature}."
        )));
    }

    Ok(())
}

pub mod completion {
    use super::*;

    /// Start configuring a client. Fails only if the key cannot be resolved.
    pub fn with(api_key: ApiKey) -> Result<CompletionClientBuilder, LlmError> {
        let api_key = api_key.resolve()?;
        Ok(CompletionClientBuilder {
            config: OpenAiConfig::new(api_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CompletionClientBuilder {
        completion::with(ApiKey::Custom("sk-test".to_string())).expect("custom key resolves")
    }

    #[test]
    fn defaults_build() {
        let client = builder().build().expect("default config is valid");
        assert_eq!(client.config().generation.max_tokens, 1024);
        assert_eq!(client.config().generation.temperature, 0.5);
        assert_eq!(client.config().url(), "https://api.openai.com/v1/completions");
    }

    #[test]
    fn setters_reach_the_config() {
        let client = builder()
            .base_url("http://localhost:8080/")
            .endpoint("/v1/completions")
            .model("gpt-3.5-turbo-instruct")
            .max_tokens(64)
            .temperature(0.0)
            .timeout(Duration::from_secs(3))
            .status_policy(StatusPolicy::Reject)
            .build()
            .unwrap();

        let config = client.config();
        assert_eq!(config.url(), "http://localhost:8080/v1/completions");
        assert_eq!(config.generation.model, "gpt-3.5-turbo-instruct");
        assert_eq!(config.generation.max_tokens, 64);
        assert_eq!(config.generation.temperature, 0.0);
        assert_eq!(config.http.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.http.status_policy, StatusPolicy::Reject);
    }

    #[test]
    fn http_client_config_replaces_transport_settings() {
        let client = builder()
            .http_client_config(HttpClientConfig {
                timeout: Some(Duration::from_secs(9)),
                status_policy: StatusPolicy::Reject,
            })
            .user_agent("my-app/2.0")
            .build()
            .unwrap();

        let config = client.config();
        assert_eq!(config.http.timeout, Some(Duration::from_secs(9)));
        assert_eq!(config.http.status_policy, StatusPolicy::Reject);
        assert_eq!(config.user_agent.as_deref(), Some("my-app/2.0"));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        for temperature in [-0.1, 1.5, f32::NAN] {
            let err = builder().temperature(temperature).build().unwrap_err();
            assert!(matches!(err, LlmError::Builder(_)), "{temperature}: {err}");
        }
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let err = builder().max_tokens(0).build().unwrap_err();
        assert!(matches!(err, LlmError::Builder(_)));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = builder().base_url("  ").build().unwrap_err();
        assert!(matches!(err, LlmError::Builder(_)));
    }

    #[test]
    fn custom_key_is_redacted_in_debug() {
        let rendered = format!("{:?}", ApiKey::Custom("sk-secret".to_string()));
        assert!(!rendered.contains("sk-secret"));
    }
}
