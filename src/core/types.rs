use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

use crate::provider::constants::openai;

/// Fixed generation parameters applied to every request a client sends.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub model: String,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,

    /// Sampling temperature (0.0 to 1.0)
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: openai::DEFAULT_MODEL.to_string(),
            max_tokens: openai::DEFAULT_MAX_TOKENS,
            temperature: openai::DEFAULT_TEMPERATURE,
        }
    }
}

/// Body of a POST to the completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
    /// NaN and infinities fail serialization instead of being sent as `null`.
    #[serde(serialize_with = "finite_f32")]
    pub temperature: f32,
}

fn finite_f32<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(format!("non-finite float {value}")));
    }
    serializer.serialize_f32(*value)
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, config: &GenerationConfig) -> Self {
        Self {
            prompt: prompt.into(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompletionResponse {
    /// Not used for anything beyond logging.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl CompletionResponse {
    /// Joins every choice in server order, each followed by a newline.
    ///
    /// An empty `choices` list yields an empty string.
    pub fn into_text(self) -> String {
        self.choices.into_iter().fold(String::new(), |mut out, choice| {
            out.push_str(&choice.text);
            out.push('\n');
            out
        })
    }
}
