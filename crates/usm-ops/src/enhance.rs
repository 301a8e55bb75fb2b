//! Unsharp masking.
//!
//! Sharpens an image by subtracting a low-pass copy of it:
//!
//! ```text
//! enhanced = (1 + g) * input - g * blurred
//! ```
//!
//! The blurred copy is the "unsharp mask". Subtracting it removes the
//! low frequencies, so scaling the difference back in boosts edges and
//! fine detail while flat regions stay put (the weights sum to 1).
//!
//! # Example
//!
//! ```rust
//! use usm_core::Plane;
//! use usm_ops::{usm_enhance, Border, FilterKind};
//!
//! let src = Plane::filled(16, 16, 0.5);
//! let out = usm_enhance(&src, 1.0, 2, FilterKind::Gaussian, Border::Circular).unwrap();
//! assert_eq!(out.enhanced.dimensions(), src.dimensions());
//! assert_eq!(out.mask.dimensions(), src.dimensions());
//! ```

use usm_core::Plane;

#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::combine::combine;
use crate::expand::{expand, Border};
use crate::filter::correlate_dispatch;
use crate::kernel::Kernel;
use crate::{OpsError, OpsResult};

/// Low-pass filter used to build the unsharp mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// Uniform box average.
    #[default]
    Box,
    /// Gaussian low-pass.
    Gaussian,
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKind::Box => write!(f, "box"),
            FilterKind::Gaussian => write!(f, "gaussian"),
        }
    }
}

/// Result of an unsharp-mask enhancement.
///
/// Carries the sharpened plane together with the low-pass mask that was
/// subtracted, so callers can inspect or save the intermediate.
#[derive(Debug, Clone, PartialEq)]
pub struct UsmOutput {
    /// The sharpened plane, same size as the input.
    pub enhanced: Plane,
    /// The low-pass filtered input the enhancement subtracted.
    pub mask: Plane,
}

/// Sharpens a plane by unsharp masking.
///
/// Builds a `(2r+1)` low-pass kernel of the requested kind, blurs the
/// input under the given border policy, and combines the original with
/// the blur as `(1 + gain) * input - gain * blurred`. Both the result
/// and the mask have the input's dimensions.
///
/// A gain of 0 returns the input unchanged, bit for bit. Values are not
/// clamped; overshoot near strong edges is part of the effect and is up
/// to the caller to quantize.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `gain` is negative (or NaN)
/// or `radius` is 0, and propagates expansion errors such as a circular
/// radius exceeding the plane.
///
/// # Example
///
/// ```rust
/// use usm_core::Plane;
/// use usm_ops::{usm_enhance, Border, FilterKind};
///
/// let src = Plane::filled(8, 8, 0.25);
/// let out = usm_enhance(&src, 0.0, 1, FilterKind::Box, Border::Fill).unwrap();
/// assert_eq!(out.enhanced, src);
/// ```
pub fn usm_enhance(
    src: &Plane,
    gain: f32,
    radius: u32,
    filter: FilterKind,
    border: Border,
) -> OpsResult<UsmOutput> {
    if !(gain >= 0.0) {
        return Err(OpsError::InvalidParameter(format!(
            "gain must be non-negative, got {}",
            gain
        )));
    }
    debug!(gain, radius, %filter, %border, "unsharp enhance");

    let kernel = match filter {
        FilterKind::Box => Kernel::box_filter(radius)?,
        FilterKind::Gaussian => Kernel::gaussian(radius)?,
    };

    let expanded = expand(src, radius, border)?;
    let mask = correlate_dispatch(&expanded, &kernel.flipped())?;
    let enhanced = combine(src, &mask, gain + 1.0, -gain)?;

    Ok(UsmOutput { enhanced, mask })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::convolve;

    fn impulse(size: u32) -> Plane {
        let mut p = Plane::new(size, size);
        p.set_sample(size / 2, size / 2, 1.0);
        p
    }

    #[test]
    fn test_usm_shape_invariance() {
        let src = Plane::filled(7, 5, 0.5);
        let out = usm_enhance(&src, 1.5, 2, FilterKind::Box, Border::Circular).unwrap();
        assert_eq!(out.enhanced.dimensions(), (7, 5));
        assert_eq!(out.mask.dimensions(), (7, 5));
    }

    #[test]
    fn test_usm_zero_gain_is_identity() {
        let data = (0..20).map(|i| i as f32 / 19.0).collect();
        let src = Plane::from_data(5, 4, data).unwrap();
        let out = usm_enhance(&src, 0.0, 1, FilterKind::Gaussian, Border::Circular).unwrap();
        assert_eq!(out.enhanced, src);
    }

    #[test]
    fn test_usm_constant_field() {
        // A constant plane has no detail to enhance.
        let src = Plane::filled(6, 6, 0.4);
        let out = usm_enhance(&src, 2.0, 1, FilterKind::Box, Border::Circular).unwrap();
        for &v in out.mask.data() {
            assert!((v - 0.4).abs() < 1e-5);
        }
        for &v in out.enhanced.data() {
            assert!((v - 0.4).abs() < 1e-5);
        }
    }

    #[test]
    fn test_usm_impulse_box() {
        // Box radius 1 spreads the impulse to 1/9 over a 3x3 block.
        let src = impulse(5);
        let out = usm_enhance(&src, 1.0, 1, FilterKind::Box, Border::Fill).unwrap();

        let ninth = 1.0 / 9.0;
        for y in 1..4 {
            for x in 1..4 {
                assert!((out.mask.get_sample(x, y).unwrap() - ninth).abs() < 1e-6);
            }
        }
        assert_eq!(out.mask.get_sample(0, 0), Some(0.0));

        // enhanced = 2 * src - mask
        let center = out.enhanced.get_sample(2, 2).unwrap();
        assert!((center - (2.0 - ninth)).abs() < 1e-6);
        let neighbour = out.enhanced.get_sample(1, 2).unwrap();
        assert!((neighbour + ninth).abs() < 1e-6);
    }

    #[test]
    fn test_usm_mask_matches_convolve() {
        let data = (0..48).map(|i| (i as f32 * 0.37).sin()).collect();
        let src = Plane::from_data(8, 6, data).unwrap();
        let k = Kernel::gaussian(2).unwrap();

        let out = usm_enhance(&src, 1.0, 2, FilterKind::Gaussian, Border::Circular).unwrap();
        let blurred = convolve(&src, &k, Border::Circular).unwrap();
        assert_eq!(out.mask, blurred);
    }

    #[test]
    fn test_usm_sharpens_an_edge() {
        // A step edge gets overshoot on both sides.
        let mut src = Plane::new(8, 4);
        for y in 0..4 {
            for x in 4..8 {
                src.set_sample(x, y, 1.0);
            }
        }
        let out = usm_enhance(&src, 1.0, 1, FilterKind::Box, Border::Circular).unwrap();

        // Dark side of the edge dips below 0, bright side rises above 1.
        assert!(out.enhanced.get_sample(3, 1).unwrap() < 0.0);
        assert!(out.enhanced.get_sample(4, 1).unwrap() > 1.0);
    }

    #[test]
    fn test_usm_rejects_bad_gain() {
        let src = Plane::filled(4, 4, 0.5);
        assert!(usm_enhance(&src, -0.5, 1, FilterKind::Box, Border::Fill).is_err());
        assert!(usm_enhance(&src, f32::NAN, 1, FilterKind::Box, Border::Fill).is_err());
    }

    #[test]
    fn test_usm_rejects_zero_radius() {
        let src = Plane::filled(4, 4, 0.5);
        assert!(usm_enhance(&src, 1.0, 0, FilterKind::Box, Border::Fill).is_err());
    }

    #[test]
    fn test_usm_fill_allows_large_radius() {
        // Fill padding has no wrap, so the radius may exceed the plane.
        let src = Plane::filled(2, 2, 1.0);
        assert!(usm_enhance(&src, 1.0, 3, FilterKind::Box, Border::Fill).is_ok());
        assert!(usm_enhance(&src, 1.0, 3, FilterKind::Box, Border::Circular).is_err());
    }
}
