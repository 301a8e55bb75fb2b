//! # usm-ops
//!
//! Spatial filtering operations for single-channel f32 planes.
//!
//! This crate implements the classic unsharp-mask sharpening pipeline
//! from first principles: kernel construction, border expansion, direct
//! valid-mode correlation, and weighted recombination.
//!
//! # Modules
//!
//! - [`kernel`] - Box, Gaussian, Laplacian, and DoG kernel builders
//! - [`expand`] - Zero-fill and circular border expansion
//! - [`filter`] - Valid-mode correlation and same-size convolution
//! - [`combine`] - Weighted elementwise combination
//! - [`enhance`] - The unsharp-mask pipeline
//! - [`parallel`] - Row-parallel correlation (feature `parallel`)
//!
//! # Pipeline
//!
//! ```text
//! input --> expand(border) --> correlate(flipped kernel) --> mask
//!
//! enhanced = (1 + gain) * input - gain * mask
//! ```
//!
//! # Example
//!
//! ```rust
//! use usm_core::Plane;
//! use usm_ops::{usm_enhance, Border, FilterKind};
//!
//! let src = Plane::filled(32, 32, 0.5);
//! let out = usm_enhance(&src, 1.0, 2, FilterKind::Box, Border::Circular).unwrap();
//! assert_eq!(out.enhanced.dimensions(), src.dimensions());
//! ```
//!
//! # Common Operations
//!
//! ## Blur
//!
//! ```rust,ignore
//! use usm_ops::{convolve, Border, Kernel};
//!
//! let k = Kernel::gaussian(3)?;
//! let blurred = convolve(&plane, &k, Border::Fill)?;
//! ```
//!
//! ## Sharpen
//!
//! ```rust,ignore
//! use usm_ops::{convolve, Border, Kernel};
//!
//! let k = Kernel::sharpen8(0.5);
//! let crisp = convolve(&plane, &k, Border::Circular)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod combine;
pub mod enhance;
pub mod expand;
pub mod filter;
pub mod kernel;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use combine::combine;
pub use enhance::{usm_enhance, FilterKind, UsmOutput};
pub use error::{OpsError, OpsResult};
pub use expand::{circular_expand, expand, fill_expand, Border};
pub use filter::{convolve, correlate};
pub use kernel::Kernel;
