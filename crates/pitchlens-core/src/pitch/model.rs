//! Pitch record domain models.
//!
//! Records are owned by the backend. The client deserializes them, renders
//! them and drops them; nothing here is ever written back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pitch deck record produced by the backend on upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    pub pitch_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub sections: Sections,
    #[serde(default)]
    pub enriched_data: EnrichedData,
    #[serde(default)]
    pub analysis: Option<Analysis>,
}

/// Free-text sections extracted from the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub product_traction: String,
}

/// Metadata attached by the backend, shown as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedData {
    #[serde(default)]
    pub company_name: DisplayValue,
    #[serde(default)]
    pub funding_raised: DisplayValue,
    #[serde(default)]
    pub team_size: DisplayValue,
    #[serde(default)]
    pub location: DisplayValue,
    #[serde(default)]
    pub industry: DisplayValue,
}

/// AI-derived analysis. Every part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub swot: Option<Swot>,
    #[serde(default)]
    pub risks: Option<Vec<String>>,
}

/// Strengths / weaknesses / opportunities / threats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swot {
    #[serde(default)]
    pub strengths: Option<String>,
    #[serde(default)]
    pub weaknesses: Option<String>,
    #[serde(default)]
    pub opportunities: Option<String>,
    #[serde(default)]
    pub threats: Option<String>,
}

impl Swot {
    /// True when none of the four quadrants is present (the backend sends
    /// `{}` when its analysis step fails).
    pub fn is_empty(&self) -> bool {
        self.strengths.is_none()
            && self.weaknesses.is_none()
            && self.opportunities.is_none()
            && self.threats.is_none()
    }
}

/// A JSON scalar rendered for display without validation.
///
/// Strings print without quotes, `null` prints as nothing, numbers and
/// booleans print as JSON does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(serde_json::Value);

impl DisplayValue {
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        Self(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for DisplayValue {
    fn from(s: String) -> Self {
        Self(serde_json::Value::String(s))
    }
}

impl From<i64> for DisplayValue {
    fn from(n: i64) -> Self {
        Self(serde_json::Value::from(n))
    }
}

impl PitchRecord {
    /// Risks listed by the analysis, empty when there are none.
    pub fn risks(&self) -> &[String] {
        self.analysis
            .as_ref()
            .and_then(|a| a.risks.as_deref())
            .unwrap_or(&[])
    }

    /// Summary text, if the analysis produced a non-empty one.
    pub fn summary(&self) -> Option<&str> {
        self.analysis
            .as_ref()
            .and_then(|a| a.summary.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// SWOT block, if the analysis produced at least one quadrant.
    pub fn swot(&self) -> Option<&Swot> {
        self.analysis
            .as_ref()
            .and_then(|a| a.swot.as_ref())
            .filter(|s| !s.is_empty())
    }
}
