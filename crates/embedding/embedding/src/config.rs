//! Embedding configuration loaded from environment variables.

use std::env;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Embedding config loaded from environment variables.
///
/// A missing credential is a disabled-feature state, not an error, so
/// construction never fails.
#[derive(Debug, Clone)]
pub struct EnvEmbeddingConfig {
    openai_api_key: String,
}

impl EnvEmbeddingConfig {
    /// Reads the current environment. An empty or whitespace-only
    /// `OPENAI_API_KEY` counts as absent.
    pub fn from_env() -> Self {
        let openai_api_key = env::var(OPENAI_API_KEY_VAR)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Self { openai_api_key }
    }

    /// API key for the OpenAI embedding API (`OPENAI_API_KEY`).
    pub fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }

    /// True when a credential is present.
    pub fn is_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test mutating OPENAI_API_KEY so unit tests in this binary
    // never race on the process environment.
    #[test]
    fn config_tracks_environment_at_read_time() {
        env::set_var(OPENAI_API_KEY_VAR, "sk-test");
        let config = EnvEmbeddingConfig::from_env();
        assert!(config.is_configured());
        assert_eq!(config.openai_api_key(), "sk-test");

        env::set_var(OPENAI_API_KEY_VAR, "   ");
        assert!(!EnvEmbeddingConfig::from_env().is_configured());

        env::remove_var(OPENAI_API_KEY_VAR);
        assert!(!EnvEmbeddingConfig::from_env().is_configured());

        // A config read earlier keeps the value it saw.
        assert!(config.is_configured());
    }
}
