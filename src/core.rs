pub mod builder;
pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use builder::{ApiKey, CompletionClientBuilder, InspectorConfig, completion};
pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig, StatusPolicy};
pub use traits::CompletionProvider;
pub use types::{Choice, CompletionRequest, CompletionResponse, GenerationConfig};
