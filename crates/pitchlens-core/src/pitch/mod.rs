//! Pitch records as returned by the analysis backend.

pub mod model;

pub use model::{Analysis, DisplayValue, EnrichedData, PitchRecord, Sections, Swot};
