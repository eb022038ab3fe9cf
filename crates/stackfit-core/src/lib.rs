//! Core types and utilities for the stackfit layout engine.
//!
//! This crate provides the foundational types used by `stackfit-layout`:
//! - Geometry value types (sizes, frames, edge insets)
//! - Layout direction and arrangement descriptors
//! - Pixel-grid rounding
//! - Error types

pub mod errors;
pub mod pixel;
pub mod types;

pub use errors::*;
pub use pixel::*;
pub use types::*;
