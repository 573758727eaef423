use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Offline client used by `--dry-run`. Echoes the file back as a fenced
/// block so the full resolve path can run without a network.
pub struct MockLlmClient;

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // The prompt's first fenced block is the file under repair;
        // echoing it back keeps the dry-run response realistic. The
        // resolver never writes in dry-run mode.
        let original = crate::extract::extract_code_block(prompt);
        Ok(format!("```cpp\n{}\n```", original.trim_end_matches('\n')))
    }
}
