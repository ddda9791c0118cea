//! CLI for the Youwee link and retry core.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use youwee_core::config::{self, YouweeConfig};
use youwee_core::deep_link::DeepLinkParser;

use commands::{
    run_argv, run_check_url, run_classify, run_parse, run_retry_settings, run_wait,
};

/// Top-level CLI for Youwee deep links and retry policy.
#[derive(Debug, Parser)]
#[command(name = "youwee")]
#[command(about = "Youwee: validate deep links and classify download errors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a youwee://download link and print the resulting request.
    Parse {
        /// Raw deep link as received from the OS.
        link: String,
    },

    /// Extract deep links from launch arguments and parse each of them.
    Argv {
        /// Arguments as the OS passed them (quoted links are fine).
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Check whether a URL is a public HTTP(S) URL that may be fetched.
    CheckUrl {
        /// Candidate download URL.
        url: String,
    },

    /// Classify a download error message as retryable or not.
    Classify {
        /// Error message from the download subprocess.
        message: String,
    },

    /// Count down before a retry; Ctrl+C cancels.
    Wait {
        /// Delay in milliseconds (rounded up to whole seconds).
        #[arg(value_name = "MS")]
        duration_ms: Option<u64>,
    },

    /// Print the effective (clamped) retry settings from config.
    RetrySettings,
}

impl CliCommand {
    /// Parses argv, runs the command, and returns the process exit code.
    ///
    /// Config is only loaded by commands that read it, so `check-url` and
    /// `classify` keep working when the config dir is unusable.
    pub async fn run_from_args() -> Result<i32> {
        Cli::parse().command.run().await
    }

    pub async fn run(self) -> Result<i32> {
        let code = match self {
            CliCommand::Parse { link } => run_parse(&link_parser()?, &link)?,
            CliCommand::Argv { args } => run_argv(&link_parser()?, &args)?,
            CliCommand::CheckUrl { url } => run_check_url(&url),
            CliCommand::Classify { message } => run_classify(&message),
            CliCommand::Wait { duration_ms } => {
                run_wait(&load_config()?.retry, duration_ms).await?
            }
            CliCommand::RetrySettings => run_retry_settings(&load_config()?.retry)?,
        };

        Ok(code)
    }
}

fn load_config() -> Result<YouweeConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

fn link_parser() -> Result<DeepLinkParser> {
    Ok(DeepLinkParser::new(load_config()?.links.policy()))
}

#[cfg(test)]
mod tests;
