//! # U-Coverage Core
//!
//! Shared abstractions for the U-Coverage planning engine.
//!
//! This crate holds the pieces that every other crate in the workspace relies on
//! and that carry no dependency on a particular geometry backend:
//!
//! - **Errors**: [`Error`] and the [`Result`] alias
//! - **Region trait**: [`Region2D`], the containment/bounds capability consumed by
//!   grid construction
//! - **Bounds**: [`AABB2D`]
//! - **Robust predicates**: [`robust`] orientation, signed area and
//!   simple-polygon checks used to validate input polygons
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod robust;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Region2D, AABB2D};
