//! PitchLens Core Library
//!
//! Pitch record model, backend API client, client-side validation and the
//! pure render helpers shared by the web front end and the CLI.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod pitch;
pub mod report;

pub use client::{ApiClient, BackendHealth, PitchApi, UploadFile};
pub use config::ApiConfig;
pub use error::{PitchError, PitchResult};
pub use pitch::model::PitchRecord;
