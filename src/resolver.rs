//! Per-file issue resolution and batch orchestration.
//!
//! One prompt per warned file, asked of the model strictly sequentially.
//! I/O failures on the files themselves abort the run; completion
//! failures degrade to a skipped file and flip the aggregate result.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use crate::companion::find_companion_file;
use crate::extract::extract_code_block;
use crate::llm::LlmClient;
use crate::prompt::build_resolution_prompt;
use crate::warnings::{Warning, WarningGroups};

pub struct IssueResolver {
    groups: WarningGroups,
    client: Box<dyn LlmClient>,
    dry_run: bool,
}

impl IssueResolver {
    pub fn new(groups: WarningGroups, client: Box<dyn LlmClient>) -> Self {
        Self {
            groups,
            client,
            dry_run: false,
        }
    }

    /// Skip all file writes. Resolution still runs end to end, so a dry
    /// run exercises prompt construction and response extraction without
    /// touching a single byte on disk.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Read the warned file and its companion and build the prompt.
    ///
    /// Unreadable files are an error here, before any request is sent.
    fn build_prompt_for(&self, file: &str, warnings: &[Warning]) -> Result<String> {
        info!("Constructing prompt for file {}", file);

        let path = Path::new(file);
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", file))?;

        let companion_contents = match find_companion_file(path) {
            Some(companion) => Some(fs::read_to_string(&companion).with_context(|| {
                format!("failed to read companion file {}", companion.display())
            })?),
            None => None,
        };

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file);

        Ok(build_resolution_prompt(
            file_name,
            &contents,
            warnings,
            companion_contents.as_deref(),
        ))
    }

    /// Send the prompt and extract the replacement file content.
    async fn request_fixed_file(&self, file: &str, prompt: &str) -> Result<String> {
        let response = self.client.complete(prompt).await?;
        let cleaned = extract_code_block(&response);
        if cleaned.trim().is_empty() {
            bail!("model returned no usable content for {}", file);
        }
        Ok(cleaned)
    }

    /// Resolve a single file: build the prompt, call the model, return the
    /// cleaned replacement content. Does not write anything.
    pub async fn resolve_file(&self, file: &str) -> Result<String> {
        let warnings = self
            .groups
            .get(file)
            .with_context(|| format!("no warnings recorded for {}", file))?;
        let prompt = self.build_prompt_for(file, warnings)?;
        self.request_fixed_file(file, &prompt).await
    }

    /// Resolve every warned file in grouping order, overwriting each file
    /// that produced usable content.
    ///
    /// Returns `Ok(true)` only if every file resolved. A completion
    /// failure is logged and skips that file; file I/O errors abort.
    pub async fn resolve(&self) -> Result<bool> {
        let mut all_resolved = true;

        for (file, warnings) in self.groups.iter() {
            let prompt = self.build_prompt_for(file, warnings)?;

            match self.request_fixed_file(file, &prompt).await {
                Ok(content) => {
                    if self.dry_run {
                        info!("Dry run: would write {} ({} warnings)", file, warnings.len());
                    } else {
                        fs::write(file, &content)
                            .with_context(|| format!("failed to write {}", file))?;
                        info!("Resolved {} ({} warnings)", file, warnings.len());
                    }
                }
                Err(e) => {
                    error!("Error resolving issues in {}. {:#}", file, e);
                    all_resolved = false;
                }
            }
        }

        Ok(all_resolved)
    }
}
