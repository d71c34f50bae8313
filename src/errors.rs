//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The material core (color resolution, fingerprinting, variant selection,
//! uniform description) is total and never returns an error. [`WorkbenchError`]
//! covers the surfaces around it:
//! - Shading configuration parsing and raw enum decoding
//! - Shader variant index decoding
//! - Library linking reported by the scene converter collaborator
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, WorkbenchError>`.
//!
//! ```rust,ignore
//! use workbench::errors::Result;
//! use workbench::ShadingConfig;
//!
//! fn load(json: &str) -> Result<ShadingConfig> {
//!     ShadingConfig::from_json_str(json)
//! }
//! ```

use thiserror::Error;

/// The main error type for the workbench shading crate.
#[derive(Error, Debug)]
pub enum WorkbenchError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// JSON parsing error while reading a shading configuration.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Raw color type value has no matching [`ColorType`](crate::ColorType).
    #[error("Invalid color type: {0}")]
    InvalidColorType(u8),

    /// Raw lighting value has no matching [`Lighting`](crate::Lighting).
    #[error("Invalid lighting mode: {0}")]
    InvalidLighting(u8),

    /// Raw cavity type value has no matching [`CavityType`](crate::CavityType).
    #[error("Invalid cavity type: {0}")]
    InvalidCavityType(u8),

    // ========================================================================
    // Shader Variant Errors
    // ========================================================================
    /// A packed variant index does not fit in the variant table.
    #[error("Shader variant index out of range: {index} (max: {max})")]
    VariantIndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of variant slots
        max: usize,
    },

    // ========================================================================
    // Library Linking Errors
    // ========================================================================
    /// Linking an external asset file failed.
    #[error("Failed to link library '{path}': {reason}")]
    LibraryLink {
        /// Path (or virtual name) of the library
        path: String,
        /// Message reported by the loader
        reason: String,
    },

    /// The requested library is not loaded.
    #[error("Library not loaded: {0}")]
    LibraryNotLoaded(String),
}

/// Alias for `Result<T, WorkbenchError>`.
pub type Result<T> = std::result::Result<T, WorkbenchError>;
