//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pitchlens_core::config::{API_TIMEOUT_ENV, API_URL_ENV};
use pitchlens_core::{ApiClient, ApiConfig, PitchError, PitchResult};

pub mod analyze;
pub mod compare;
pub mod health;
pub mod serve;
pub mod upload;

/// PitchLens - Pitch deck analysis client
#[derive(Parser)]
#[command(name = "pitchlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the analysis backend [default: http://localhost:8000]
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, global = true, env = API_TIMEOUT_ENV)]
    pub timeout: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a pitch deck and show its report
    Upload(upload::UploadArgs),

    /// Show the report for a pitch
    Analyze(analyze::AnalyzeArgs),

    /// Compare several pitches side by side
    Compare(compare::CompareArgs),

    /// Check that the backend is reachable
    Health,

    /// Start the web front end
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Resolve the backend settings. Flags and env values go through the
    /// same rules as any other lookup: blank means unset.
    pub fn api_config(&self) -> PitchResult<ApiConfig> {
        ApiConfig::from_lookup(|key| match key {
            API_URL_ENV => self.api_url.clone(),
            API_TIMEOUT_ENV => self.timeout.clone(),
            _ => None,
        })
    }

    pub async fn execute(self) -> Result<()> {
        let client = ApiClient::new(&self.api_config()?)?;

        match self.command {
            Commands::Upload(args) => upload::execute(args, &client).await,
            Commands::Analyze(args) => analyze::execute(args, &client).await,
            Commands::Compare(args) => compare::execute(args, &client).await,
            Commands::Health => health::execute(&client).await,
            Commands::Serve(args) => serve::execute(args, client).await,
        }
    }
}

/// Turn a failed operation into the message the user sees.
pub(crate) fn failure(err: PitchError, fallback: &str) -> anyhow::Error {
    tracing::debug!(error = %err, "Operation failed");
    anyhow::anyhow!(err.user_message(fallback))
}
