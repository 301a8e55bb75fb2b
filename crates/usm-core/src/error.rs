//! Error types for usm-core operations.
//!
//! This module provides the shared error handling system for plane and
//! region operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes that can occur during:
//! - Plane construction (dimension validation)
//! - Sample and region access (bounds checking)
//! - Region copies between planes (shape agreement)
//!
//! # Usage
//!
//! ```rust
//! use usm_core::{Error, Result};
//!
//! fn check_sample(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Used By
//!
//! - [`crate::plane::Plane`] - Buffer construction
//! - [`crate::plane::PlaneViewMut`] - Region copy shape checking
//! - `usm-ops` - Wrapped transparently into `OpsError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during plane and region operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds), [`InvalidRegion`](Error::InvalidRegion)
/// - **Dimension errors**: [`DimensionMismatch`](Error::DimensionMismatch), [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error)]
pub enum Error {
    /// Sample coordinates are outside plane bounds.
    ///
    /// Returned when attempting to access a sample at (x, y) where
    /// `x >= width` or `y >= height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("sample ({x}, {y}) out of bounds for plane {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Plane width
        width: u32,
        /// Plane height
        height: u32,
    },

    /// Region extends beyond plane bounds.
    ///
    /// Returned when a [`crate::rect::Rect`] doesn't fit within the plane
    /// dimensions.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds plane bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Plane width
        width: u32,
        /// Plane height
        height: u32,
    },

    /// Plane dimensions don't match for the operation.
    ///
    /// Returned when an operation requires planes or views of the same
    /// size (e.g. region copies, weighted sums).
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First plane width
        a_width: u32,
        /// First plane height
        a_height: u32,
        /// Second plane width
        b_width: u32,
        /// Second plane height
        b_height: u32,
    },

    /// Invalid plane dimensions.
    ///
    /// Returned when a supplied buffer doesn't match the requested width
    /// and height, or dimensions would overflow the sample count.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(region: crate::Rect, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx: region.x,
            ry: region.y,
            rw: region.width,
            rh: region.height,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidRegion { .. })
    }
}
