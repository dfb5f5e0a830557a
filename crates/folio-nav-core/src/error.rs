//! Error types for folio-nav-core
//!
//! Runtime DOM problems never surface as errors (missing targets are no-ops).
//! Only configuration can be rejected.

use thiserror::Error;

/// Core error type for navigation configuration
#[derive(Error, Debug)]
pub enum NavError {
    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse navigation config: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Link Errors
    // ===================
    #[error("Nav link '{name}' must point to an in-page anchor, got '{href}'")]
    NotAnAnchor { name: String, href: String },

    #[error("Nav link '{name}' has an empty section id")]
    EmptySectionId { name: String },

    #[error("Section '{section_id}' is referenced by more than one nav link")]
    DuplicateSection { section_id: String },

    #[error("Social link '{name}' must be an http(s) URL, got '{href}'")]
    NotExternal { name: String, href: String },

    // ===================
    // Band Errors
    // ===================
    #[error("Invalid visibility band: {message}")]
    InvalidBand { message: String },
}

pub type Result<T> = std::result::Result<T, NavError>;
