//! # usm-core
//!
//! Core types for spatial image filtering.
//!
//! This crate provides the foundational types used throughout the USM-RS
//! workspace:
//!
//! - [`Plane`] - Single-channel f32 sample grid, the unit every filter
//!   operates on
//! - [`PlaneView`], [`PlaneViewMut`] - Borrowed rectangular windows for
//!   region copies
//! - [`Rect`] - Pixel-space rectangle
//! - [`Error`], [`Result`] - Shared error type
//!
//! ## Design Philosophy
//!
//! A [`Plane`] owns its samples outright: cloning is a deep copy and there
//! is no hidden sharing. Filtering stages consume references and return
//! freshly allocated planes, so intermediate results never alias their
//! inputs:
//!
//! ```
//! use usm_core::Plane;
//!
//! let src = Plane::filled(8, 8, 0.5);
//! let copy = src.clone();          // Independent buffer
//! assert_eq!(copy.sample(3, 3), 0.5);
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of USM-RS and has no internal dependencies.
//! All other USM-RS crates depend on `usm-core`:
//!
//! ```text
//! usm-core (this crate)
//!    ^
//!    |
//!    +-- usm-ops (kernels, expansion, correlation, enhancement)
//!    +-- usm-io (image file I/O, channel split/merge)
//!    +-- usm-cli (command-line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod plane;
pub mod rect;

// Re-exports for convenience
pub use error::*;
pub use plane::*;
pub use rect::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use usm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::plane::{Plane, PlaneView, PlaneViewMut};
    pub use crate::rect::Rect;
}
