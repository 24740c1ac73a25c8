use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LlmError {
    /// The request body could not be encoded. Nothing was sent.
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: BoxError,
    },

    /// Connecting, sending, or reading the response body failed.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: BoxError,
    },

    /// The response body was not JSON of the expected shape.
    #[error("Deserialization error: {message}")]
    Deserialization {
        message: String,
        #[source]
        source: BoxError,
    },

    /// Only produced under [`StatusPolicy::Reject`](crate::core::StatusPolicy::Reject).
    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("LLM-Builder error: {0}")]
    Builder(String),
}

impl LlmError {
    pub fn is_transport(&self) -> bool {
        matches!(self, LlmError::Transport { .. })
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self, LlmError::Deserialization { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, LlmError::Serialization { .. })
    }
}
