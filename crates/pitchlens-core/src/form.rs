//! Client-side checks run before any request is sent.

use crate::error::{PitchError, PitchResult};

/// Shown when the upload form is submitted without a file.
pub const NO_FILE_SELECTED: &str = "Please select a PDF file";

/// Shown when the compare form is submitted without identifiers.
pub const NO_PITCH_IDS: &str = "Please enter pitch IDs";

/// Require a selected file.
pub fn require_file<T>(file: Option<T>) -> PitchResult<T> {
    file.ok_or_else(|| PitchError::validation(NO_FILE_SELECTED))
}

/// Require a non-blank identifier list.
///
/// The input is returned untouched: no trimming, splitting or
/// deduplication happens on the client.
pub fn require_pitch_ids(input: &str) -> PitchResult<&str> {
    if input.trim().is_empty() {
        return Err(PitchError::validation(NO_PITCH_IDS));
    }
    Ok(input)
}
