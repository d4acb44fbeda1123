//! Report command.

use anyhow::Result;
use clap::Args;
use pitchlens_core::error::ANALYSIS_FAILED;
use pitchlens_core::report::Report;
use pitchlens_core::PitchApi;

use super::failure;
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Pitch ID returned by the upload
    pub pitch_id: String,

    /// Print the raw record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, api: &dyn PitchApi) -> Result<()> {
    show(api, &args.pitch_id, args.json).await
}

/// Fetch one record and print it.
pub(crate) async fn show(api: &dyn PitchApi, pitch_id: &str, json: bool) -> Result<()> {
    let spinner = output::spinner("Loading...");
    let result = api.get_analysis(pitch_id).await;
    spinner.finish_and_clear();

    let record = result.map_err(|e| failure(e, ANALYSIS_FAILED))?;

    if json {
        output::print_json(&record)?;
    } else {
        output::print_report(&Report::from_record(&record));
    }

    Ok(())
}
