//! Runtime configuration.

use std::path::PathBuf;

use crate::error::{LlmError, LlmResult};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_MAX_TOKENS: u32 = 8192;

/// Process configuration, read once at startup and passed explicitly into
/// constructors. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub output_dir: PathBuf,
}

impl ForgeConfig {
    /// Build configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL`, `GEMINI_MAX_TOKENS`
    /// and `FORGE_OUTPUT_DIR` fall back to defaults.
    pub fn from_env() -> LlmResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = std::env::var("GEMINI_MAX_TOKENS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let output_dir = std::env::var("FORGE_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./output"));

        Ok(Self {
            api_key,
            model,
            max_tokens,
            output_dir,
        })
    }
}
