//! Error types for the stackfit engine.

use thiserror::Error;

/// Errors reported by sizing and configuration.
///
/// Placement never fails: every arrangement has an unconditional fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Bounded height {height} is not supported; pass an unbounded height")]
    BoundedHeight { height: f64 },

    #[error("Spacing between items must be a finite, non-negative length, got {spacing}")]
    NegativeSpacing { spacing: f64 },

    #[error("Display scale must be finite and positive, got {scale}")]
    InvalidScale { scale: f64 },
}
