//! Parallel correlation built on Rayon.
//!
//! Output rows are independent, so the plane is split into row chunks
//! and each worker fills its own. Results are bit-identical to the
//! serial path; only the scheduling differs.
//!
//! # Example
//!
//! ```rust
//! use usm_core::Plane;
//! use usm_ops::{parallel, Kernel};
//!
//! let src = Plane::filled(64, 64, 0.5);
//! let k = Kernel::gaussian(2).unwrap();
//! let out = parallel::correlate(&src, &k).unwrap();
//! assert_eq!(out.dimensions(), (60, 60));
//! ```

use rayon::prelude::*;
use usm_core::Plane;

use crate::filter::{check_correlation, correlate_row};
use crate::kernel::Kernel;
use crate::OpsResult;

/// Correlates a plane with a kernel in "valid" mode, row-parallel.
///
/// Same contract as [`correlate`](crate::correlate); rows are computed
/// across the Rayon thread pool.
///
/// # Errors
///
/// Returns [`OpsError`](crate::OpsError) when the kernel is larger than
/// the plane in either dimension.
pub fn correlate(src: &Plane, kernel: &Kernel) -> OpsResult<Plane> {
    let (out_w, out_h) = check_correlation(src, kernel)?;

    let mut out = Plane::new(out_w, out_h);
    out.data_mut()
        .par_chunks_mut(out_w as usize)
        .enumerate()
        .for_each(|(y, row)| correlate_row(src, kernel, y as u32, row));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_matches_serial() {
        let data = (0..32 * 24).map(|i| (i as f32 * 0.13).cos()).collect();
        let src = Plane::from_data(32, 24, data).unwrap();
        let k = Kernel::gaussian(3).unwrap();

        let serial = crate::filter::correlate(&src, &k).unwrap();
        let par = correlate(&src, &k).unwrap();
        assert_eq!(serial, par);
    }

    #[test]
    fn test_parallel_kernel_too_large() {
        let src = Plane::filled(3, 3, 1.0);
        let k = Kernel::box_filter(4).unwrap();
        assert!(correlate(&src, &k).is_err());
    }
}
