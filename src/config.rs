//! Startup configuration resolved from CLI flags and the environment.
//!
//! The API key is mandatory and read exactly once; everything downstream
//! receives an owned [`Config`] rather than reaching into the environment.

use anyhow::{Result, bail};

/// Environment variable holding the mandatory API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Optional endpoint override.
pub const ENDPOINT_ENV: &str = "LINGO_ENDPOINT";

/// Optional model override.
pub const MODEL_ENV: &str = "LINGO_MODEL";

/// Gemini's OpenAI-compatible base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Model used unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Resolved configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

/// CLI overrides that take precedence over environment values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

/// Resolves the configuration: CLI flag over environment over built-in default.
///
/// # Errors
///
/// Returns an error if the API key variable is unset or empty. There is no
/// default and no prompt for it; the caller halts before any UI is shown.
pub fn resolve_config(options: &ResolveOptions) -> Result<Config> {
    let Some(api_key) = non_empty_var(API_KEY_ENV) else {
        bail!(
            "{API_KEY_ENV} is not set\n\n\
             Set it before running lingo:\n  \
             export {API_KEY_ENV}=\"your-api-key\""
        );
    };

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| non_empty_var(ENDPOINT_ENV))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .clone()
        .or_else(|| non_empty_var(MODEL_ENV))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    Ok(Config {
        api_key,
        endpoint,
        model,
    })
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_var(name: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(name, value) };
    }

    fn remove_var(name: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(name) };
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_fatal() {
        remove_var(API_KEY_ENV);

        let result = resolve_config(&ResolveOptions::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(API_KEY_ENV));
    }

    #[test]
    #[serial]
    fn test_empty_api_key_is_fatal() {
        set_var(API_KEY_ENV, "");

        let result = resolve_config(&ResolveOptions::default());

        assert!(result.is_err());
        remove_var(API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_defaults_apply_without_overrides() {
        set_var(API_KEY_ENV, "test-key");
        remove_var(ENDPOINT_ENV);
        remove_var(MODEL_ENV);

        let config = resolve_config(&ResolveOptions::default()).unwrap();

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        remove_var(API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_env_overrides_defaults() {
        set_var(API_KEY_ENV, "test-key");
        set_var(ENDPOINT_ENV, "http://localhost:11434/v1");
        set_var(MODEL_ENV, "gemma3:12b");

        let config = resolve_config(&ResolveOptions::default()).unwrap();

        assert_eq!(config.endpoint, "http://localhost:11434/v1");
        assert_eq!(config.model, "gemma3:12b");

        remove_var(API_KEY_ENV);
        remove_var(ENDPOINT_ENV);
        remove_var(MODEL_ENV);
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        set_var(API_KEY_ENV, "test-key");
        set_var(ENDPOINT_ENV, "http://env.local");
        set_var(MODEL_ENV, "env-model");

        let options = ResolveOptions {
            endpoint: Some("http://cli.local".to_string()),
            model: Some("cli-model".to_string()),
        };
        let config = resolve_config(&options).unwrap();

        assert_eq!(config.endpoint, "http://cli.local");
        assert_eq!(config.model, "cli-model");

        remove_var(API_KEY_ENV);
        remove_var(ENDPOINT_ENV);
        remove_var(MODEL_ENV);
    }
}
