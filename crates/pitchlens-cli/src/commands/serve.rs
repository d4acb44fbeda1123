//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pitchlens_core::ApiClient;
use pitchlens_web::state::{DEFAULT_MAX_UPLOAD_MB, DEFAULT_PORT};
use pitchlens_web::ServerConfig;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Largest accepted upload, in megabytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_MB)]
    pub max_upload_mb: usize,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "pitchlens-serve.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, client: ApiClient) -> Result<()> {
    let config = ServerConfig::new(args.host.clone(), args.port)
        .with_max_upload_mb(args.max_upload_mb)
        .with_backend_url(client.base_url());

    println!();
    println!("  {} {}", "PitchLens".cyan().bold(), "Web Front End".bold());
    println!();
    println!("  {}     http://{}:{}", "Upload".green(), args.host, args.port);
    println!("  {}    http://{}:{}/compare", "Compare".green(), args.host, args.port);
    println!("  {}    {}", "Backend".green(), client.base_url());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    pitchlens_web::run_server(config, Arc::new(client)).await?;

    Ok(())
}
