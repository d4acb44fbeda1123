//! Compare command.

use anyhow::Result;
use clap::Args;
use dialoguer::Input;
use pitchlens_core::error::COMPARE_FAILED;
use pitchlens_core::report::compare_rows;
use pitchlens_core::{form, PitchApi};

use super::failure;
use crate::output;

#[derive(Args)]
pub struct CompareArgs {
    /// Comma-separated pitch IDs (prompted for when omitted)
    pub pitch_ids: Option<String>,

    /// Print the raw records as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: CompareArgs, api: &dyn PitchApi) -> Result<()> {
    let input = match args.pitch_ids {
        Some(ids) => ids,
        None => Input::<String>::new()
            .with_prompt("Enter pitch IDs (comma-separated)")
            .allow_empty(true)
            .interact_text()?,
    };

    let pitch_ids = form::require_pitch_ids(&input).map_err(|e| failure(e, COMPARE_FAILED))?;

    let spinner = output::spinner("Comparing...");
    let result = api.compare(pitch_ids).await;
    spinner.finish_and_clear();

    let records = result.map_err(|e| failure(e, COMPARE_FAILED))?;

    if args.json {
        return output::print_json(&records);
    }

    output::print_compare_table(&compare_rows(&records));
    Ok(())
}
