//! Upload command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pitchlens_core::error::UPLOAD_FAILED;
use pitchlens_core::{PitchApi, UploadFile};
use std::path::PathBuf;

use super::{analyze, failure};
use crate::output;

#[derive(Args)]
pub struct UploadArgs {
    /// Pitch deck to upload (PDF)
    pub file: PathBuf,

    /// Print the upload response as JSON instead of the report
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: UploadArgs, api: &dyn PitchApi) -> Result<()> {
    let file = UploadFile::from_path(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let file_name = file.file_name.clone();

    let spinner = output::spinner("Uploading...");
    let result = api.upload(file).await;
    spinner.finish_and_clear();

    let created = result.map_err(|e| failure(e, UPLOAD_FAILED))?;

    if args.json {
        return output::print_json(&created);
    }

    println!(
        "{} Uploaded {} ({})",
        "✓".green().bold(),
        file_name.cyan(),
        created.pitch_id.dimmed()
    );
    println!();

    analyze::show(api, &created.pitch_id, false).await
}
