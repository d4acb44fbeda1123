//! View models for rendering pitch records.
//!
//! Both front ends render from these so the fallback text and the table
//! truncation live in one place.

pub mod format;

use serde::Serialize;

use crate::pitch::model::{PitchRecord, Swot};

/// Shown when the analysis has no summary.
pub const NO_SUMMARY: &str = "No summary available";

/// Shown when the analysis has no SWOT block.
pub const NO_SWOT: &str = "No SWOT analysis available";

/// Shown when the analysis lists no risks.
pub const NO_RISKS: &str = "No risks identified";

/// Characters kept from each free-text column in the comparison table.
pub const COMPARE_EXCERPT_CHARS: usize = 50;

/// Detail view of a single pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub pitch_id: String,
    pub company_name: String,
    pub team: String,
    pub market: String,
    pub product_traction: String,
    pub funding_raised: String,
    pub team_size: String,
    pub location: String,
    pub industry: String,
    pub uploaded: String,
    /// Summary text, or [`NO_SUMMARY`].
    pub summary: String,
    pub swot: Option<SwotView>,
    pub risks: Vec<String>,
}

/// SWOT quadrants with missing entries rendered as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwotView {
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
}

impl SwotView {
    fn from_swot(swot: &Swot) -> Self {
        Self {
            strengths: swot.strengths.clone().unwrap_or_default(),
            weaknesses: swot.weaknesses.clone().unwrap_or_default(),
            opportunities: swot.opportunities.clone().unwrap_or_default(),
            threats: swot.threats.clone().unwrap_or_default(),
        }
    }
}

impl Report {
    pub fn from_record(record: &PitchRecord) -> Self {
        let enriched = &record.enriched_data;
        Self {
            pitch_id: record.pitch_id.clone(),
            company_name: enriched.company_name.to_string(),
            team: record.sections.team.clone(),
            market: record.sections.market.clone(),
            product_traction: record.sections.product_traction.clone(),
            funding_raised: enriched.funding_raised.to_string(),
            team_size: enriched.team_size.to_string(),
            location: enriched.location.to_string(),
            industry: enriched.industry.to_string(),
            uploaded: format::format_timestamp(&record.created_at),
            summary: record.summary().unwrap_or(NO_SUMMARY).to_string(),
            swot: record.swot().map(SwotView::from_swot),
            risks: record.risks().to_vec(),
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareRow {
    pub pitch_id: String,
    pub company: String,
    pub team: String,
    pub market: String,
    pub product_traction: String,
    pub funding: String,
    pub team_size: String,
    pub location: String,
    pub industry: String,
}

impl CompareRow {
    pub fn from_record(record: &PitchRecord) -> Self {
        let enriched = &record.enriched_data;
        Self {
            pitch_id: record.pitch_id.clone(),
            company: enriched.company_name.to_string(),
            team: format::excerpt(&record.sections.team, COMPARE_EXCERPT_CHARS),
            market: format::excerpt(&record.sections.market, COMPARE_EXCERPT_CHARS),
            product_traction: format::excerpt(
                &record.sections.product_traction,
                COMPARE_EXCERPT_CHARS,
            ),
            funding: enriched.funding_raised.to_string(),
            team_size: enriched.team_size.to_string(),
            location: enriched.location.to_string(),
            industry: enriched.industry.to_string(),
        }
    }
}

/// Table rows for a comparison, one per record, in response order.
pub fn compare_rows(records: &[PitchRecord]) -> Vec<CompareRow> {
    records.iter().map(CompareRow::from_record).collect()
}
