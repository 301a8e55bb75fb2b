//! Spatial correlation and convolution.
//!
//! [`correlate`] is the workhorse: a direct nested-sum correlation in
//! "valid" mode, producing only the samples where the kernel fits
//! entirely inside the plane. [`convolve`] wraps it into a same-size
//! true convolution by expanding the borders first and flipping the
//! kernel.
//!
//! # Example
//!
//! ```rust
//! use usm_core::Plane;
//! use usm_ops::{convolve, Border, Kernel};
//!
//! let src = Plane::filled(8, 8, 0.5);
//! let k = Kernel::box_filter(1).unwrap();
//! let out = convolve(&src, &k, Border::Circular).unwrap();
//! assert_eq!(out.dimensions(), src.dimensions());
//! ```

use usm_core::Plane;

#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::expand::{expand, Border};
use crate::kernel::Kernel;
use crate::{OpsError, OpsResult};

/// Correlates a plane with a kernel in "valid" mode.
///
/// Each output sample is the weighted sum of the kernel window anchored
/// at the corresponding source position, so the output shrinks to
/// `(W - kw + 1) x (H - kh + 1)`. No border handling happens here;
/// expand the plane first if same-size output is needed.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if the kernel is larger than
/// the plane in either dimension.
///
/// # Example
///
/// ```rust
/// use usm_core::Plane;
/// use usm_ops::{correlate, Kernel};
///
/// let src = Plane::filled(5, 5, 1.0);
/// let k = Kernel::box_filter(1).unwrap();
/// let out = correlate(&src, &k).unwrap();
/// assert_eq!(out.dimensions(), (3, 3));
/// assert!((out.get_sample(0, 0).unwrap() - 1.0).abs() < 1e-6);
/// ```
pub fn correlate(src: &Plane, kernel: &Kernel) -> OpsResult<Plane> {
    let (out_w, out_h) = check_correlation(src, kernel)?;
    trace!(
        width = src.width(),
        height = src.height(),
        kernel_w = kernel.width,
        kernel_h = kernel.height,
        "correlate"
    );

    let mut out = Plane::new(out_w, out_h);
    for y in 0..out_h {
        correlate_row(src, kernel, y, out.row_mut(y));
    }
    Ok(out)
}

/// Convolves a plane with a square kernel, same-size output.
///
/// Expands the plane by the kernel radius under the given border policy,
/// rotates the kernel by 180 degrees, and correlates. For symmetric
/// kernels this equals a plain border-aware correlation; for asymmetric
/// kernels it is the mathematically correct convolution.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for a non-square kernel and
/// propagates expansion errors (empty plane, circular radius larger than
/// the plane).
pub fn convolve(src: &Plane, kernel: &Kernel, border: Border) -> OpsResult<Plane> {
    if kernel.width != kernel.height {
        return Err(OpsError::InvalidParameter(format!(
            "same-size convolution needs a square kernel, got {}x{}",
            kernel.width, kernel.height
        )));
    }
    let (radius, _) = kernel.radius();
    if radius == 0 {
        // 1x1 kernel: valid mode is already same-size.
        return correlate_dispatch(src, &kernel.flipped());
    }
    let expanded = expand(src, radius as u32, border)?;
    correlate_dispatch(&expanded, &kernel.flipped())
}

/// Routes correlation through the parallel path when available.
#[cfg(feature = "parallel")]
pub(crate) fn correlate_dispatch(src: &Plane, kernel: &Kernel) -> OpsResult<Plane> {
    crate::parallel::correlate(src, kernel)
}

/// Routes correlation through the parallel path when available.
#[cfg(not(feature = "parallel"))]
pub(crate) fn correlate_dispatch(src: &Plane, kernel: &Kernel) -> OpsResult<Plane> {
    correlate(src, kernel)
}

/// Validates a correlation and returns the valid-mode output dimensions.
pub(crate) fn check_correlation(src: &Plane, kernel: &Kernel) -> OpsResult<(u32, u32)> {
    let (w, h) = src.dimensions();
    let (kw, kh) = (kernel.width as u32, kernel.height as u32);
    if w < kw || h < kh {
        return Err(OpsError::InvalidDimensions(format!(
            "kernel {}x{} exceeds the {}x{} plane",
            kw, kh, w, h
        )));
    }
    Ok((w - kw + 1, h - kh + 1))
}

/// Computes one output row of a valid-mode correlation.
pub(crate) fn correlate_row(src: &Plane, kernel: &Kernel, y: u32, row: &mut [f32]) {
    let kw = kernel.width;
    for (x, dst) in row.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for ky in 0..kernel.height {
            let src_row = &src.row(y + ky as u32)[x..x + kw];
            let k_row = &kernel.data[ky * kw..(ky + 1) * kw];
            for (s, k) in src_row.iter().zip(k_row) {
                sum += s * k;
            }
        }
        *dst = sum;
    }
}
