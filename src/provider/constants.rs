pub mod openai {
    pub const DEFAULT_MODEL: &str = "text-davinci-002";
    pub const API_BASE: &str = "https://api.openai.com/v1";
    pub const COMPLETIONS_ENDPOINT: &str = "/completions";
    pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
    pub const DEFAULT_MAX_TOKENS: u32 = 1024;
    pub const DEFAULT_TEMPERATURE: f32 = 0.5;
}
