//! Weighted plane combination.

use usm_core::Plane;

#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Combines two planes elementwise as `wa * a + wb * b`.
///
/// Values are not clamped; out-of-range results pass through so callers
/// can chain further arithmetic before quantizing for display.
///
/// # Errors
///
/// Returns [`OpsError::ShapeMismatch`] when the planes differ in size.
///
/// # Example
///
/// ```rust
/// use usm_core::Plane;
/// use usm_ops::combine;
///
/// let a = Plane::filled(2, 2, 1.0);
/// let b = Plane::filled(2, 2, 0.5);
/// let out = combine(&a, &b, 2.0, -1.0).unwrap();
/// assert_eq!(out.get_sample(0, 0), Some(1.5));
/// ```
pub fn combine(a: &Plane, b: &Plane, wa: f32, wb: f32) -> OpsResult<Plane> {
    if a.dimensions() != b.dimensions() {
        return Err(OpsError::ShapeMismatch(format!(
            "cannot combine {}x{} with {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }
    trace!(width = a.width(), height = a.height(), wa, wb, "combine");

    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| wa * x + wb * y)
        .collect();
    Ok(Plane::from_data(a.width(), a.height(), data)?)
}
