use anyhow::{bail, Result};

use super::client::{LlmClient, MockLlmClient};
use super::client_impl::{AnthropicClient, OpenAIClient};
use crate::config::Config;

/// Create an LLM client based on configuration.
///
/// The API key is passed in explicitly; resolving it from the environment
/// is the caller's job (see `Config::get_api_key`).
pub fn create_client(config: &Config, api_key: String, dry_run: bool) -> Result<Box<dyn LlmClient>> {
    if dry_run {
        return Ok(Box::new(MockLlmClient::new()));
    }

    let max_tokens = config.llm.get_max_tokens();
    let timeout_secs = config.llm.timeout_secs;

    match config.llm.provider.as_str() {
        "openai" => Ok(Box::new(OpenAIClient::new(
            api_key,
            config.llm.model.clone(),
            max_tokens,
            timeout_secs,
        )?)),

        "openai-compatible" => {
            let base_url = config
                .llm
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434/v1".to_string());

            Ok(Box::new(OpenAIClient::with_base_url(
                api_key,
                config.llm.model.clone(),
                base_url,
                max_tokens,
                timeout_secs,
            )?))
        }

        "anthropic" => Ok(Box::new(AnthropicClient::new(
            api_key,
            config.llm.model.clone(),
            max_tokens,
            timeout_secs,
        )?)),

        unknown => bail!("Unknown LLM provider: {}", unknown),
    }
}
