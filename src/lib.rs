//! # gptclient
//!
//! A small blocking client for text-completion APIs: one prompt in, one POST
//! out, the returned choices joined into a string.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gptclient::{CompletionProvider, OpenAiClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(std::env::var("OPENAI_API_KEY")?);
//!     let text = client.send_request("Write a haiku about the borrow checker.")?;
//!     print!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! Every choice in the response is followed by a newline, so a single choice
//! `"hello"` comes back as `"hello\n"` and an empty choice list as `""`.
//!
//! ## Configuration
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use gptclient::{ApiKey, CompletionProvider, StatusPolicy, completion};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = completion::with(ApiKey::Default)?
//!         .model("gpt-3.5-turbo-instruct")
//!         .max_tokens(256)
//!         .temperature(0.2)
//!         .timeout(Duration::from_secs(30))
//!         .status_policy(StatusPolicy::Reject)
//!         .inspect_response(|body| eprintln!("raw: {body}"))
//!         .build()?;
//!
//!     println!("{}", client.send_request("Say hi")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Known Issues
//!
//! With the default [`StatusPolicy::Ignore`], an HTTP error response whose body
//! has no `choices` is indistinguishable from an empty completion. Use
//! [`StatusPolicy::Reject`] when that difference matters.

pub mod core;
pub mod provider;

pub use crate::core::{
    ApiKey, Choice, CompletionClientBuilder, CompletionProvider, CompletionRequest,
    CompletionResponse, GenerationConfig, HttpClientConfig, InspectorConfig, LlmError,
    StatusPolicy, completion,
};
pub use provider::{MockProvider, OpenAiClient, OpenAiConfig};
