use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::Config;
use crate::llm::factory;
use crate::resolver::IssueResolver;
use crate::warnings::WarningGroups;

pub async fn run(
    warnings_path: String,
    config_path: Option<String>,
    provider_override: Option<String>,
    model_override: Option<String>,
    base_url_override: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let raw = read_warning_lines(&warnings_path)?;

    let groups = WarningGroups::parse(raw.lines())
        .context("failed to parse warning lines")?;
    if groups.is_empty() {
        info!("No warnings to resolve");
        return Ok(());
    }
    info!(
        "Resolving {} file(s) from {}",
        groups.len(),
        if warnings_path == "-" {
            "stdin"
        } else {
            warnings_path.as_str()
        }
    );

    // Load config (explicit path, repo root, or user config dir)
    let mut config = Config::load_with_path(config_path)?;

    // Apply CLI overrides
    if let Some(ref provider) = provider_override {
        info!("CLI override: provider = {}", provider);
        config.llm.provider = provider.clone();
    }
    if let Some(ref model) = model_override {
        info!("CLI override: model = {}", model);
        config.llm.model = model.clone();
    }
    if let Some(ref base_url) = base_url_override {
        info!("CLI override: base_url = {}", base_url);
        config.llm.base_url = Some(base_url.clone());
    }

    let api_key = if dry_run {
        String::new()
    } else {
        config.get_api_key()?
    };
    let client = factory::create_client(&config, api_key, dry_run)?;

    let resolver = IssueResolver::new(groups, client).with_dry_run(dry_run);
    let all_resolved = resolver.resolve().await?;

    if !all_resolved {
        bail!("some files could not be resolved");
    }
    Ok(())
}

/// Read raw linter output from a file, or stdin when the path is `-`.
fn read_warning_lines(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read warnings from stdin")?;
        return Ok(buffer);
    }

    let file = Path::new(path);
    if !file.exists() {
        bail!("Warnings file not found: {}", path);
    }
    if !file.is_file() {
        bail!("Path is not a file: {}", path);
    }
    fs::read_to_string(file).with_context(|| format!("failed to read {}", path))
}
