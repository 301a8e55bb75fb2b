//! Border expansion for valid-mode correlation.
//!
//! Correlating a `W x H` plane with a `(2r+1)` kernel shrinks it by `r`
//! on every side. Expanding the plane by `r` first makes the result the
//! same size as the input.
//!
//! Two border policies are provided:
//!
//! - [`Border::Fill`] - the margin is zero
//! - [`Border::Circular`] - the margin wraps around, tiling the source:
//!
//! ```text
//!   +----+----------+----+
//!   | BR |  bottom  | BL |
//!   +----+----------+----+
//!   | R  |  source  | L  |
//!   +----+----------+----+
//!   | TR |   top    | TL |
//!   +----+----------+----+
//! ```
//!
//! # Example
//!
//! ```rust
//! use usm_core::Plane;
//! use usm_ops::{expand, Border};
//!
//! let src = Plane::filled(4, 4, 0.5);
//! let out = expand(&src, 1, Border::Circular).unwrap();
//! assert_eq!(out.dimensions(), (6, 6));
//! ```

use usm_core::{Plane, Rect};

#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Border policy for expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    /// Pad the margin with zeros.
    #[default]
    Fill,
    /// Wrap the margin around, treating the plane as a torus.
    Circular,
}

impl std::fmt::Display for Border {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Border::Fill => write!(f, "fill"),
            Border::Circular => write!(f, "circular"),
        }
    }
}

/// Expands a plane by `radius` on every side, padding with zeros.
///
/// The output is `(W + 2r) x (H + 2r)` with the source copied at offset
/// `(r, r)` and a zero margin around it.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] for an empty plane and
/// [`OpsError::InvalidParameter`] if `radius` is 0.
///
/// # Example
///
/// ```rust
/// use usm_core::Plane;
/// use usm_ops::fill_expand;
///
/// let src = Plane::filled(3, 3, 1.0);
/// let out = fill_expand(&src, 1).unwrap();
/// assert_eq!(out.dimensions(), (5, 5));
/// assert_eq!(out.get_sample(0, 0), Some(0.0));
/// assert_eq!(out.get_sample(1, 1), Some(1.0));
/// ```
pub fn fill_expand(src: &Plane, radius: u32) -> OpsResult<Plane> {
    check_expansion(src, radius)?;
    trace!(
        width = src.width(),
        height = src.height(),
        radius,
        "fill expansion"
    );

    let mut out = Plane::new(src.width() + 2 * radius, src.height() + 2 * radius);
    out.view_mut(Rect::new(radius, radius, src.width(), src.height()))
        .copy_from(&src.view(src.bounds()))?;
    Ok(out)
}

/// Expands a plane by `radius` on every side with circular wrap-around.
///
/// The margin repeats the opposite edge of the source, so the expanded
/// plane reads as if the source tiled the plane in both directions. A
/// correlation over it behaves as if the image were periodic.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] for an empty plane and
/// [`OpsError::InvalidParameter`] if `radius` is 0 or exceeds either
/// source dimension (the wrapped margin would need to repeat the source
/// more than once).
///
/// # Example
///
/// ```rust
/// use usm_core::Plane;
/// use usm_ops::circular_expand;
///
/// let src = Plane::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let out = circular_expand(&src, 1).unwrap();
/// // The top-left corner wraps to the bottom-right source sample.
/// assert_eq!(out.get_sample(0, 0), Some(4.0));
/// ```
pub fn circular_expand(src: &Plane, radius: u32) -> OpsResult<Plane> {
    check_expansion(src, radius)?;
    let (w, h) = src.dimensions();
    if radius > w.min(h) {
        return Err(OpsError::InvalidParameter(format!(
            "circular radius {} exceeds the {}x{} source",
            radius, w, h
        )));
    }
    trace!(width = w, height = h, radius, "circular expansion");

    let r = radius;
    let mut out = fill_expand(src, radius)?;

    // Wrap each edge and corner of the source to the opposite margin.
    let copies = [
        // Corners
        (Rect::new(0, 0, r, r), Rect::new(w + r, h + r, r, r)),
        (Rect::new(w - r, 0, r, r), Rect::new(0, h + r, r, r)),
        (Rect::new(0, h - r, r, r), Rect::new(w + r, 0, r, r)),
        (Rect::new(w - r, h - r, r, r), Rect::new(0, 0, r, r)),
        // Edges
        (Rect::new(0, 0, w, r), Rect::new(r, h + r, w, r)),
        (Rect::new(0, h - r, w, r), Rect::new(r, 0, w, r)),
        (Rect::new(0, 0, r, h), Rect::new(w + r, r, r, h)),
        (Rect::new(w - r, 0, r, h), Rect::new(0, r, r, h)),
    ];
    for (from, to) in copies {
        out.view_mut(to).copy_from(&src.view(from))?;
    }
    Ok(out)
}

/// Expands a plane by `radius` on every side with the given border policy.
///
/// Dispatches to [`fill_expand`] or [`circular_expand`].
///
/// # Errors
///
/// Propagates the policy's validation errors.
pub fn expand(src: &Plane, radius: u32, border: Border) -> OpsResult<Plane> {
    match border {
        Border::Fill => fill_expand(src, radius),
        Border::Circular => circular_expand(src, radius),
    }
}

fn check_expansion(src: &Plane, radius: u32) -> OpsResult<()> {
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions(
            "cannot expand an empty plane".into(),
        ));
    }
    if radius == 0 {
        return Err(OpsError::InvalidParameter(
            "expansion radius must be at least 1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> Plane {
        let data = (0..width * height).map(|i| i as f32).collect();
        Plane::from_data(width, height, data).unwrap()
    }

    #[test]
    fn test_fill_expand_dimensions() {
        let src = Plane::filled(4, 3, 1.0);
        let out = fill_expand(&src, 2).unwrap();
        assert_eq!(out.dimensions(), (8, 7));
    }

    #[test]
    fn test_fill_expand_margin_is_zero() {
        let src = Plane::filled(3, 3, 7.0);
        let out = fill_expand(&src, 1).unwrap();

        for y in 0..5 {
            for x in 0..5 {
                let expected = if (1..4).contains(&x) && (1..4).contains(&y) {
                    7.0
                } else {
                    0.0
                };
                assert_eq!(out.get_sample(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_fill_expand_preserves_interior() {
        let src = ramp(3, 2);
        let out = fill_expand(&src, 2).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(out.get_sample(x + 2, y + 2), src.get_sample(x, y));
            }
        }
    }

    #[test]
    fn test_expand_rejects_zero_radius() {
        let src = Plane::filled(3, 3, 1.0);
        assert!(fill_expand(&src, 0).is_err());
        assert!(circular_expand(&src, 0).is_err());
    }

    #[test]
    fn test_expand_rejects_empty_plane() {
        let src = Plane::new(0, 0);
        assert!(fill_expand(&src, 1).is_err());
        assert!(circular_expand(&src, 1).is_err());
    }

    #[test]
    fn test_circular_expand_wraps() {
        let src = ramp(4, 3);
        let r = 2u32;
        let out = circular_expand(&src, r).unwrap();
        assert_eq!(out.dimensions(), (8, 7));

        // Every sample matches the source taken modulo its dimensions.
        let (w, h) = (4i64, 3i64);
        for y in 0..out.height() {
            for x in 0..out.width() {
                let sx = (x as i64 - r as i64).rem_euclid(w) as u32;
                let sy = (y as i64 - r as i64).rem_euclid(h) as u32;
                assert_eq!(out.get_sample(x, y), src.get_sample(sx, sy));
            }
        }
    }

    #[test]
    fn test_circular_expand_corners() {
        let src = ramp(3, 3);
        let out = circular_expand(&src, 1).unwrap();

        // Opposite corners wrap into the margin.
        assert_eq!(out.get_sample(0, 0), src.get_sample(2, 2));
        assert_eq!(out.get_sample(4, 0), src.get_sample(0, 2));
        assert_eq!(out.get_sample(0, 4), src.get_sample(2, 0));
        assert_eq!(out.get_sample(4, 4), src.get_sample(0, 0));
    }

    #[test]
    fn test_circular_expand_constant_stays_constant() {
        let src = Plane::filled(5, 4, 0.25);
        let out = circular_expand(&src, 3).unwrap();
        for &v in out.data() {
            assert_eq!(v, 0.25);
        }
    }

    #[test]
    fn test_circular_expand_radius_limit() {
        let src = Plane::filled(5, 3, 1.0);
        // At most min(width, height)
        assert!(circular_expand(&src, 3).is_ok());
        assert!(circular_expand(&src, 4).is_err());
    }

    #[test]
    fn test_expand_dispatch() {
        let src = ramp(3, 3);
        let fill = expand(&src, 1, Border::Fill).unwrap();
        let circ = expand(&src, 1, Border::Circular).unwrap();
        assert_eq!(fill.get_sample(0, 0), Some(0.0));
        assert_eq!(circ.get_sample(0, 0), src.get_sample(2, 2));
    }

    #[test]
    fn test_border_default_and_display() {
        assert_eq!(Border::default(), Border::Fill);
        assert_eq!(Border::Circular.to_string(), "circular");
    }
}
