use std::fmt;

use tracing::debug;

use crate::core::{
    CompletionProvider, CompletionRequest, CompletionResponse, GenerationConfig, HttpClient,
    HttpClientConfig, InspectorConfig, LlmError,
};

use super::constants::openai;

/// Everything an [`OpenAiClient`] needs. Defaults target the public
/// completions endpoint.
#[derive(Clone)]
pub struct OpenAiConfig {
    api_key: String,
    pub base_url: String,
    pub endpoint: String,
    /// Overrides the default `gptclient/<version>` user agent.
    pub user_agent: Option<String>,
    pub generation: GenerationConfig,
    pub http: HttpClientConfig,
    pub inspector: InspectorConfig,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: openai::API_BASE.to_string(),
            endpoint: openai::COMPLETIONS_ENDPOINT.to_string(),
            user_agent: None,
            generation: GenerationConfig::default(),
            http: HttpClientConfig::default(),
            inspector: InspectorConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_http_config(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    pub fn with_inspector(mut self, inspector: InspectorConfig) -> Self {
        self.inspector = inspector;
        self
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .field("generation", &self.generation)
            .field("http", &self.http)
            .field("inspector", &self.inspector)
            .finish()
    }
}

/// Blocking client for the text completions API.
///
/// The key is accepted as given. An empty or wrong key only shows up once
/// the service answers.
pub struct OpenAiClient {
    config: OpenAiConfig,
    http: HttpClient,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(OpenAiConfig::new(api_key))
    }

    pub fn from_config(config: OpenAiConfig) -> Self {
        let http = HttpClient::new(
            config.http.clone(),
            config.user_agent.as_deref(),
            config.inspector.clone(),
        );
        Self { config, http }
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CompletionProvider for OpenAiClient {
    #[tracing::instrument(
        name = "send_request",
        skip(self, prompt),
        fields(
            model = %self.config.generation.model,
            prompt_len = prompt.len()
        ),
        err
    )]
    fn send_request(&self, prompt: &str) -> Result<String, LlmError> {
        let request = CompletionRequest::new(prompt, &self.config.generation);

        let response: CompletionResponse =
            self.http.post_json(&self.config.url(), &self.config.api_key, &request)?;

        debug!(
            id = %response.id,
            choices = response.choices.len(),
            "Parsed completion response"
        );

        Ok(response.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_any_key_without_validation() {
        let client = OpenAiClient::new("");
        assert_eq!(client.config().url(), "https://api.openai.com/v1/completions");
        assert_eq!(client.config().generation, GenerationConfig::default());
    }

    #[test]
    fn debug_output_never_contains_the_key() {
        let client = OpenAiClient::new("sk-very-secret");
        let rendered = format!("{client:?}");

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("sk-very-secret"));
    }

    #[test]
    fn url_joins_base_and_endpoint_without_double_slash() {
        let config = OpenAiConfig::new("k")
            .with_base_url("http://127.0.0.1:9000/")
            .with_endpoint("/v1/completions");
        assert_eq!(config.url(), "http://127.0.0.1:9000/v1/completions");
    }

    #[test]
    fn from_config_keeps_every_setting() {
        let generation = GenerationConfig {
            model: "davinci-002".to_string(),
            max_tokens: 16,
            temperature: 1.0,
        };
        let config = OpenAiConfig::new("k")
            .with_generation(generation.clone())
            .with_http_config(HttpClientConfig {
                status_policy: crate::core::StatusPolicy::Reject,
                ..Default::default()
            })
            .with_inspector(InspectorConfig {
                response_inspector: Some(std::sync::Arc::new(|_: &str| {})),
                ..Default::default()
            });

        let client = OpenAiClient::from_config(config);

        assert_eq!(client.config().generation, generation);
        assert_eq!(
            client.config().http.status_policy,
            crate::core::StatusPolicy::Reject
        );
        assert!(client.config().inspector.response_inspector.is_some());
    }

    #[test]
    fn non_finite_temperature_fails_before_any_io() {
        let config = OpenAiConfig::new("k")
            .with_base_url("http://127.0.0.1:1")
            .with_generation(GenerationConfig {
                temperature: f32::NAN,
                ..Default::default()
            });

        let err = OpenAiClient::from_config(config)
            .send_request("hi")
            .unwrap_err();

        assert!(err.is_serialization(), "unexpected error: {err}");
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenAiClient>();
    }
}
