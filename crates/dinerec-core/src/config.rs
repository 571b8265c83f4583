use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Hot Pepper Gourmet search API, the default venue directory.
const DEFAULT_DIRECTORY_BASE_URL: &str = "https://webservice.recruit.co.jp/hotpepper/gourmet/v1/";
const DEFAULT_MODEL_BASE_URL: &str = "https://api.openai.com/v1";

/// The directory refuses `count` values above this.
const MAX_DIRECTORY_RECORDS: usize = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here, decoupled from the process environment,
/// so tests can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str, min: usize| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value < min {
            return Err(invalid(var, format!("must be at least {min}, got {value}")));
        }
        Ok(value)
    };

    let hotpepper_api_key = require("HOTPEPPER_API_KEY")?;
    let openai_api_key = require("OPENAI_API_KEY")?;

    let env = parse_environment(&or_default("DINEREC_ENV", "development"))?;
    let log_level = or_default("DINEREC_LOG_LEVEL", "info");

    let directory_base_url = or_default("DINEREC_DIRECTORY_BASE_URL", DEFAULT_DIRECTORY_BASE_URL);
    let model_base_url = or_default("DINEREC_MODEL_BASE_URL", DEFAULT_MODEL_BASE_URL);
    let model_name = or_default("DINEREC_MODEL_NAME", "gpt-4-turbo");
    let model_temperature = parse_temperature(&or_default("DINEREC_MODEL_TEMPERATURE", "0.7"))?;

    let request_timeout_secs = parse_u64("DINEREC_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "DINEREC_USER_AGENT",
        "dinerec/0.1 (restaurant-recommendation)",
    );

    let directory_max_records = parse_usize("DINEREC_DIRECTORY_MAX_RECORDS", "20", 1)?;
    if directory_max_records > MAX_DIRECTORY_RECORDS {
        return Err(invalid(
            "DINEREC_DIRECTORY_MAX_RECORDS",
            format!("must be at most {MAX_DIRECTORY_RECORDS}, got {directory_max_records}"),
        ));
    }
    let prompt_max_candidates = parse_usize("DINEREC_PROMPT_MAX_CANDIDATES", "15", 1)?;
    let min_candidates = parse_usize("DINEREC_MIN_CANDIDATES", "3", 1)?;
    let fallback_count = parse_usize("DINEREC_FALLBACK_COUNT", "5", 1)?;
    let empty_selection_fallback_count =
        parse_usize("DINEREC_EMPTY_SELECTION_FALLBACK_COUNT", "3", 1)?;
    let selection_count = parse_usize("DINEREC_SELECTION_COUNT", "3", 1)?;

    Ok(AppConfig {
        env,
        log_level,
        hotpepper_api_key,
        openai_api_key,
        directory_base_url,
        model_base_url,
        model_name,
        model_temperature,
        request_timeout_secs,
        user_agent,
        directory_max_records,
        prompt_max_candidates,
        min_candidates,
        fallback_count,
        empty_selection_fallback_count,
        selection_count,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DINEREC_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// Sampling temperature accepted by OpenAI-compatible endpoints: `0.0..=2.0`.
fn parse_temperature(raw: &str) -> Result<f32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "DINEREC_MODEL_TEMPERATURE".to_string(),
        reason,
    };
    let value = raw.parse::<f32>().map_err(|e| invalid(e.to_string()))?;
    if !(0.0..=2.0).contains(&value) {
        return Err(invalid(format!("must be within 0.0..=2.0, got {value}")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
