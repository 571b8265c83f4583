#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub hotpepper_api_key: String,
    pub openai_api_key: String,
    pub directory_base_url: String,
    pub model_base_url: String,
    pub model_name: String,
    pub model_temperature: f32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub directory_max_records: usize,
    pub prompt_max_candidates: usize,
    pub min_candidates: usize,
    pub fallback_count: usize,
    pub empty_selection_fallback_count: usize,
    pub selection_count: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("hotpepper_api_key", &"[redacted]")
            .field("openai_api_key", &"[redacted]")
            .field("directory_base_url", &self.directory_base_url)
            .field("model_base_url", &self.model_base_url)
            .field("model_name", &self.model_name)
            .field("model_temperature", &self.model_temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("directory_max_records", &self.directory_max_records)
            .field("prompt_max_candidates", &self.prompt_max_candidates)
            .field("min_candidates", &self.min_candidates)
            .field("fallback_count", &self.fallback_count)
            .field(
                "empty_selection_fallback_count",
                &self.empty_selection_fallback_count,
            )
            .field("selection_count", &self.selection_count)
            .finish()
    }
}
