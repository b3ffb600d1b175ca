//! Error types for the layered layout solver

use thiserror::Error;

/// Errors that can occur while solving a layout
#[derive(Error, Debug)]
pub enum LayeredError {
    /// A node was registered with a non-finite or negative footprint
    #[error("Invalid footprint for node '{0}': {1} x {2}")]
    InvalidFootprint(String, f64, f64),

    /// The layout options contain a non-finite or negative value
    #[error("Invalid layout option: {0}")]
    InvalidOptions(String),
}
