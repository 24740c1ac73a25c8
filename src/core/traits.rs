use std::sync::Arc;

use super::error::LlmError;

/// Something that can turn a prompt into completion text.
///
/// Calls block until the provider answers or fails.
pub trait CompletionProvider: Send + Sync {
    fn send_request(&self, prompt: &str) -> Result<String, LlmError>;
}

impl<T: CompletionProvider + ?Sized> CompletionProvider for &T {
    fn send_request(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).send_request(prompt)
    }
}

impl<T: CompletionProvider + ?Sized> CompletionProvider for Box<T> {
    fn send_request(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).send_request(prompt)
    }
}

impl<T: CompletionProvider + ?Sized> CompletionProvider for Arc<T> {
    fn send_request(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).send_request(prompt)
    }
}
