use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;
mod companion;
mod config;
mod extract;
mod llm;
mod prompt;
mod resolver;
mod util;
mod warnings;

#[derive(Parser)]
#[command(name = "doxyfix", version)]
#[command(about = "Fix doxygen documentation warnings with an LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve documentation warnings listed in a doxygen output file
    Resolve {
        /// File of warning lines ('file:line:severity:message'), or '-' for stdin
        warnings: String,

        /// Path to config file (defaults to ~/.config/doxyfix/config.toml or ./doxyfix.toml)
        #[arg(long)]
        config: Option<String>,

        /// Override LLM provider (openai, anthropic, openai-compatible)
        #[arg(long)]
        provider: Option<String>,

        /// Override LLM model (e.g., "gpt-4o", "claude-sonnet-4-20250514")
        #[arg(long)]
        model: Option<String>,

        /// Override base URL for OpenAI-compatible APIs
        #[arg(long)]
        base_url: Option<String>,

        /// Use mock LLM client and skip all file writes (no network, no changes)
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            warnings,
            config,
            provider,
            model,
            base_url,
            dry_run,
        } => {
            cli::resolve::run(warnings, config, provider, model, base_url, dry_run).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_resolve_defaults() {
        let cli = Cli::try_parse_from(["doxyfix", "resolve", "warnings.txt"]).unwrap();
        match cli.command {
            Commands::Resolve {
                warnings,
                config,
                dry_run,
                ..
            } => {
                assert_eq!(warnings, "warnings.txt");
                assert!(config.is_none());
                assert!(!dry_run);
            }
        }
    }

    #[test]
    fn test_parse_resolve_with_all_args() {
        let cli = Cli::try_parse_from([
            "doxyfix",
            "resolve",
            "-",
            "--config",
            "custom.toml",
            "--provider",
            "anthropic",
            "--model",
            "claude-sonnet-4-20250514",
            "--base-url",
            "http://localhost:11434/v1",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve {
                warnings,
                config,
                provider,
                model,
                base_url,
                dry_run,
            } => {
                assert_eq!(warnings, "-");
                assert_eq!(config.unwrap(), "custom.toml");
                assert_eq!(provider.unwrap(), "anthropic");
                assert_eq!(model.unwrap(), "claude-sonnet-4-20250514");
                assert_eq!(base_url.unwrap(), "http://localhost:11434/v1");
                assert!(dry_run);
            }
        }
    }

    #[test]
    fn test_parse_missing_warnings_file() {
        let result = Cli::try_parse_from(["doxyfix", "resolve"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_subcommand() {
        let result = Cli::try_parse_from(["doxyfix"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_subcommand() {
        let result = Cli::try_parse_from(["doxyfix", "foobar"]);
        assert!(result.is_err());
    }
}
