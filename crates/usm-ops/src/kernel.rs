//! Convolution kernel construction.
//!
//! All kernels are square with odd side length `2r + 1` for radius `r`,
//! so every output sample has a well-defined center tap.
//!
//! # Kernels
//!
//! - [`Kernel::box_filter`] - Uniform average
//! - [`Kernel::gaussian`] - Gaussian low-pass
//! - [`Kernel::identity`] - Centered impulse
//! - [`Kernel::sharpen4`] / [`Kernel::sharpen8`] - Laplacian sharpening
//! - [`Kernel::dog_sharpen`] - Difference-of-Gaussians sharpening
//!
//! # Example
//!
//! ```rust
//! use usm_ops::Kernel;
//!
//! let k = Kernel::box_filter(1).unwrap();
//! assert_eq!(k.width, 3);
//! assert!((k.sum() - 1.0).abs() < 1e-6);
//! ```

use crate::{OpsError, OpsResult};

/// Convolution kernel of f32 weights.
///
/// Weights are stored row-major. Smoothing kernels are L1-normalized so
/// they preserve the mean level of the image; sharpening kernels sum to 1
/// so flat regions pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Kernel weights.
    pub data: Vec<f32>,
    /// Kernel width (must be odd).
    pub width: usize,
    /// Kernel height (must be odd).
    pub height: usize,
}

impl Kernel {
    /// Creates a new kernel from data.
    ///
    /// Width and height must be odd numbers.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] for even dimensions or a
    /// data length that doesn't match them.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> OpsResult<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(OpsError::InvalidParameter(
                "kernel dimensions must be odd".into(),
            ));
        }
        if data.len() != width * height {
            return Err(OpsError::InvalidParameter(format!(
                "kernel data size {} doesn't match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a box averaging kernel of the given radius.
    ///
    /// Every weight is `1 / (2r+1)^2`, so the kernel sums to 1.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `radius` is 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_ops::Kernel;
    ///
    /// let k = Kernel::box_filter(2).unwrap();
    /// assert_eq!(k.width, 5);
    /// assert_eq!(k.height, 5);
    /// ```
    pub fn box_filter(radius: u32) -> OpsResult<Self> {
        let size = Self::side(radius)?;
        let count = size * size;
        let weight = 1.0 / count as f32;
        Ok(Self {
            data: vec![weight; count],
            width: size,
            height: size,
        })
    }

    /// Creates a Gaussian low-pass kernel of the given radius.
    ///
    /// The standard deviation is derived from the radius as
    /// `sigma = (2r+1) / 6`, placing three sigmas inside the kernel on
    /// each side of the center (99.7% of the distribution). Weights are
    /// `exp(-(i^2 + j^2) / (2 sigma^2))`, L1-normalized to sum to 1.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `radius` is 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_ops::Kernel;
    ///
    /// let k = Kernel::gaussian(2).unwrap();
    /// assert_eq!(k.width, 5);
    /// assert!((k.sum() - 1.0).abs() < 1e-6);
    /// ```
    pub fn gaussian(radius: u32) -> OpsResult<Self> {
        let size = Self::side(radius)?;
        let r = radius as i64;
        let sigma = size as f32 / 6.0;
        let denom = 2.0 * sigma * sigma;

        let mut data = Vec::with_capacity(size * size);
        let mut sum = 0.0f32;
        for i in -r..=r {
            for j in -r..=r {
                let d = (i * i + j * j) as f32;
                let w = (-d / denom).exp();
                data.push(w);
                sum += w;
            }
        }

        // Normalize
        for w in &mut data {
            *w /= sum;
        }

        Ok(Self {
            data,
            width: size,
            height: size,
        })
    }

    /// Creates a centered impulse kernel of the given radius.
    ///
    /// The center weight is 1 and every other weight is 0, so correlation
    /// with it reproduces the input. Used as the pass-through term when
    /// assembling sharpening kernels.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `radius` is 0.
    pub fn identity(radius: u32) -> OpsResult<Self> {
        let size = Self::side(radius)?;
        let mut data = vec![0.0; size * size];
        data[(size / 2) * size + size / 2] = 1.0;
        Ok(Self {
            data,
            width: size,
            height: size,
        })
    }

    /// Creates a 4-neighbour Laplacian sharpening kernel.
    ///
    /// The kernel is `impulse - amount * lap4`: center `1 + 4a`, cross
    /// neighbours `-a`. Sums to 1 for any amount, so flat regions are
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_ops::Kernel;
    ///
    /// let k = Kernel::sharpen4(1.0);
    /// assert_eq!(k.width, 3);
    /// assert!((k.sum() - 1.0).abs() < 1e-6);
    /// ```
    pub fn sharpen4(amount: f32) -> Self {
        let center = 1.0 + 4.0 * amount;
        Self {
            data: vec![
                0.0, -amount, 0.0,
                -amount, center, -amount,
                0.0, -amount, 0.0,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Creates an 8-neighbour Laplacian sharpening kernel.
    ///
    /// Like [`sharpen4`](Self::sharpen4) but weighting the diagonal
    /// neighbours too: center `1 + 8a`, all eight neighbours `-a`.
    pub fn sharpen8(amount: f32) -> Self {
        let center = 1.0 + 8.0 * amount;
        Self {
            data: vec![
                -amount, -amount, -amount,
                -amount, center, -amount,
                -amount, -amount, -amount,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Creates a difference-of-Gaussians sharpening kernel.
    ///
    /// Builds `impulse - (G(outer) - G(inner))` where the inner Gaussian
    /// is zero-padded to the outer kernel size. The result has side
    /// `2 * outer + 1` and sums to 1.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] unless `0 < inner < outer`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_ops::Kernel;
    ///
    /// let k = Kernel::dog_sharpen(1, 2).unwrap();
    /// assert_eq!(k.width, 5);
    /// assert!((k.sum() - 1.0).abs() < 1e-5);
    /// ```
    pub fn dog_sharpen(inner: u32, outer: u32) -> OpsResult<Self> {
        if inner == 0 || inner >= outer {
            return Err(OpsError::InvalidParameter(format!(
                "difference-of-gaussians radii must satisfy 0 < inner < outer, got {} and {}",
                inner, outer
            )));
        }
        let g_inner = Self::gaussian(inner)?;
        let g_outer = Self::gaussian(outer)?;

        let size = g_outer.width;
        let offset = (outer - inner) as usize;

        let mut data = vec![0.0f32; size * size];
        data[(size / 2) * size + size / 2] = 1.0;
        for (dst, &w) in data.iter_mut().zip(g_outer.data.iter()) {
            *dst -= w;
        }
        for ky in 0..g_inner.height {
            for kx in 0..g_inner.width {
                data[(ky + offset) * size + (kx + offset)] += g_inner.data[ky * g_inner.width + kx];
            }
        }

        Ok(Self {
            data,
            width: size,
            height: size,
        })
    }

    /// Returns this kernel rotated by 180 degrees.
    ///
    /// Correlating with the flipped kernel computes a true convolution.
    /// Flipping is a no-op numerically for symmetric kernels but is still
    /// applied so asymmetric kernels behave correctly.
    pub fn flipped(&self) -> Self {
        Self {
            data: self.data.iter().rev().copied().collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the kernel radius (half-size).
    #[inline]
    pub fn radius(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Returns the sum of all weights.
    #[inline]
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Validates a radius and returns the odd side length `2r + 1`.
    fn side(radius: u32) -> OpsResult<usize> {
        if radius == 0 {
            return Err(OpsError::InvalidParameter(
                "kernel radius must be at least 1".into(),
            ));
        }
        Ok(2 * radius as usize + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_new_rejects_even() {
        assert!(Kernel::new(vec![0.0; 6], 2, 3).is_err());
        assert!(Kernel::new(vec![0.0; 6], 3, 2).is_err());
        assert!(Kernel::new(vec![0.0; 8], 3, 3).is_err());
        assert!(Kernel::new(vec![0.0; 9], 3, 3).is_ok());
    }

    #[test]
    fn test_kernel_box() {
        let k = Kernel::box_filter(1).unwrap();
        assert_eq!(k.width, 3);
        assert_eq!(k.height, 3);
        assert_eq!(k.data.len(), 9);

        // All weights equal, summing to 1
        let w = 1.0 / 9.0;
        for v in &k.data {
            assert!((*v - w).abs() < 1e-7);
        }
        assert!((k.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_kernel_box_zero_radius() {
        assert!(Kernel::box_filter(0).is_err());
        assert!(Kernel::gaussian(0).is_err());
        assert!(Kernel::identity(0).is_err());
    }

    #[test]
    fn test_kernel_gaussian() {
        let k = Kernel::gaussian(2).unwrap();
        assert_eq!(k.width, 5);
        assert_eq!(k.height, 5);

        // Sum is 1 within the normalization tolerance
        assert!((k.sum() - 1.0).abs() < 1e-6);

        // Center is the largest weight
        let center = k.data[12];
        assert!(center > k.data[0]);
        assert!(center > k.data[2]);

        // Symmetric in both axes
        assert!((k.data[0] - k.data[24]).abs() < 1e-7);
        assert!((k.data[2] - k.data[22]).abs() < 1e-7);
        assert!((k.data[10] - k.data[14]).abs() < 1e-7);
    }

    #[test]
    fn test_kernel_gaussian_sigma() {
        // sigma = (2r+1)/6, so for radius 1 the off-center/center weight
        // ratio is exp(-1 / (2 * 0.25)) = exp(-2)
        let k = Kernel::gaussian(1).unwrap();
        let ratio = k.data[1] / k.data[4];
        assert!((ratio - (-2.0f32).exp()).abs() < 1e-5);
    }

    #[test]
    fn test_kernel_identity() {
        let k = Kernel::identity(2).unwrap();
        assert_eq!(k.width, 5);
        assert_eq!(k.data[12], 1.0);
        assert!((k.sum() - 1.0).abs() < 1e-7);
    }

    #[test]
    fn test_kernel_sharpen4() {
        let k = Kernel::sharpen4(1.0);
        assert_eq!(k.width, 3);
        assert_eq!(k.data[4], 5.0);
        assert_eq!(k.data[1], -1.0);
        assert_eq!(k.data[0], 0.0);
        assert!((k.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_kernel_sharpen8() {
        let k = Kernel::sharpen8(1.0);
        assert_eq!(k.data[4], 9.0);
        assert_eq!(k.data[0], -1.0);
        assert!((k.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_kernel_dog() {
        let k = Kernel::dog_sharpen(1, 2).unwrap();
        assert_eq!(k.width, 5);
        assert_eq!(k.height, 5);
        // impulse - G(outer) + G(inner) sums to 1
        assert!((k.sum() - 1.0).abs() < 1e-5);
        // Ring between the Gaussians is negative
        assert!(k.data[0] < 0.0);
    }

    #[test]
    fn test_kernel_dog_invalid_radii() {
        assert!(Kernel::dog_sharpen(0, 2).is_err());
        assert!(Kernel::dog_sharpen(2, 2).is_err());
        assert!(Kernel::dog_sharpen(3, 2).is_err());
    }

    #[test]
    fn test_kernel_flipped() {
        let k = Kernel::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            3,
            3,
        )
        .unwrap();
        let f = k.flipped();
        assert_eq!(f.data, vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        // Flipping twice restores the original
        assert_eq!(f.flipped().data, k.data);
    }

    #[test]
    fn test_kernel_flipped_symmetric_is_identity() {
        let k = Kernel::gaussian(1).unwrap();
        assert_eq!(k.flipped().data, k.data);
    }

    #[test]
    fn test_kernel_radius() {
        let k = Kernel::box_filter(3).unwrap();
        assert_eq!(k.radius(), (3, 3));
    }
}
