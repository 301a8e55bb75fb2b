//! Plane buffer types for spatial filtering.
//!
//! This module provides the core sample container types:
//! - [`Plane`] - Owned single-channel f32 buffer
//! - [`PlaneView`] - Immutable borrowed view into a plane region
//! - [`PlaneViewMut`] - Mutable borrowed view into a plane region
//!
//! # Memory Layout
//!
//! Planes store samples in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [s s s s ...]  ← Row 0
//!         [s s s s ...]  ← Row 1
//!         ...
//! ```
//!
//! Every sample is a single `f32`. Multi-channel images are handled
//! upstream by splitting into one plane per channel.
//!
//! # Ownership
//!
//! A plane owns its `Vec<f32>` directly. Cloning performs a deep copy,
//! and filter stages return freshly allocated planes, so results never
//! alias their inputs.
//!
//! # Usage
//!
//! ```rust
//! use usm_core::Plane;
//!
//! let mut plane = Plane::new(640, 480);
//! plane.set_sample(100, 100, 0.75);
//! assert_eq!(plane.sample(100, 100), 0.75);
//! ```
//!
//! # Views
//!
//! Views give windowed access to a rectangular region, used by border
//! expansion to move blocks of samples between planes:
//!
//! ```rust
//! use usm_core::{Plane, Rect};
//!
//! let src = Plane::filled(8, 8, 1.0);
//! let mut dst = Plane::new(12, 12);
//!
//! let mut window = dst.view_mut(Rect::new(2, 2, 8, 8));
//! window.copy_from(&src.view(src.bounds())).unwrap();
//! assert_eq!(dst.sample(2, 2), 1.0);
//! assert_eq!(dst.sample(0, 0), 0.0);
//! ```

use crate::{Error, Rect, Result};

/// Owned single-channel plane of f32 samples.
///
/// The unit of work for every filtering stage: kernels correlate planes,
/// border expansion produces larger planes, and weighted combination sums
/// planes sample by sample.
///
/// # Example
///
/// ```rust
/// use usm_core::Plane;
///
/// // Create an empty plane
/// let mut plane = Plane::new(320, 240);
///
/// // Fill with a constant
/// plane.fill(0.5);
/// assert_eq!(plane.sample(0, 0), 0.5);
/// ```
#[derive(Clone, PartialEq)]
pub struct Plane {
    /// Sample buffer
    data: Vec<f32>,
    /// Plane width in samples
    width: u32,
    /// Plane height in samples
    height: u32,
}

impl Plane {
    /// Creates a new plane filled with zeros.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Plane;
    ///
    /// let plane = Plane::new(640, 480);
    /// assert_eq!(plane.width(), 640);
    /// assert_eq!(plane.height(), 480);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let count = width as usize * height as usize;
        Self {
            data: vec![0.0; count],
            width,
            height,
        }
    }

    /// Creates a plane from existing sample data.
    ///
    /// # Arguments
    ///
    /// * `width` - Plane width
    /// * `height` - Plane height
    /// * `data` - Samples (must have exactly width * height elements)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if data length doesn't match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Plane;
    ///
    /// let samples = vec![0.0f32; 100 * 100];
    /// let plane = Plane::from_data(100, 100, samples).unwrap();
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a plane filled with a specific value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Plane;
    ///
    /// let white = Plane::filled(100, 100, 1.0);
    /// assert_eq!(white.sample(50, 50), 1.0);
    /// ```
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        let count = width as usize * height as usize;
        Self {
            data: vec![value; count],
            width,
            height,
        }
    }

    /// Returns the plane width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the plane height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the plane dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a rectangle covering the entire plane.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the plane has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw sample data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns the buffer offset for the sample at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Plane;
    ///
    /// let plane = Plane::filled(10, 10, 0.25);
    /// assert_eq!(plane.sample(5, 5), 0.25);
    /// ```
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[self.offset(x, y)]
    }

    /// Returns the sample at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.sample(x, y))
        } else {
            None
        }
    }

    /// Sets the sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_sample(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }

    /// Fills the entire plane with a value.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Returns a row of samples as a slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        &self.data[start..end]
    }

    /// Returns a mutable row of samples.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Creates an immutable view into a region of this plane.
    ///
    /// The region is clamped to the plane bounds; a region entirely
    /// outside yields an empty view.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::{Plane, Rect};
    ///
    /// let plane = Plane::new(640, 480);
    /// let view = plane.view(Rect::new(100, 100, 200, 200));
    /// assert_eq!(view.dimensions(), (200, 200));
    /// ```
    pub fn view(&self, region: Rect) -> PlaneView<'_> {
        let region = region
            .clamp_to(self.width, self.height)
            .unwrap_or_default();
        PlaneView {
            plane: self,
            region,
        }
    }

    /// Creates a mutable view into a region of this plane.
    ///
    /// The region is clamped to the plane bounds like [`view`](Self::view).
    pub fn view_mut(&mut self, region: Rect) -> PlaneViewMut<'_> {
        let region = region
            .clamp_to(self.width, self.height)
            .unwrap_or_default();
        PlaneViewMut {
            plane: self,
            region,
        }
    }
}

impl std::fmt::Debug for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plane")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Immutable view into a region of a plane.
///
/// A view borrows the plane data and exposes a window of it with
/// coordinates relative to the window origin.
///
/// # Example
///
/// ```rust
/// use usm_core::{Plane, Rect};
///
/// let plane = Plane::filled(100, 100, 0.5);
/// let view = plane.view(Rect::new(10, 10, 50, 50));
/// assert_eq!(view.sample(0, 0), 0.5);
/// ```
pub struct PlaneView<'a> {
    plane: &'a Plane,
    region: Rect,
}

impl<'a> PlaneView<'a> {
    /// Returns the view width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.region.width
    }

    /// Returns the view height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.region.height
    }

    /// Returns the view dimensions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.region.width, self.region.height)
    }

    /// Returns the region this view covers.
    #[inline]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Returns the sample at (x, y) relative to the view origin.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are outside the view bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.region.width && y < self.region.height);
        self.plane.sample(self.region.x + x, self.region.y + y)
    }

    /// Returns a row of the view as a slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= view height.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [f32] {
        debug_assert!(y < self.region.height, "row out of bounds");
        let full = self.plane.row(self.region.y + y);
        let x0 = self.region.x as usize;
        &full[x0..x0 + self.region.width as usize]
    }
}

impl std::fmt::Debug for PlaneView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaneView")
            .field("region", &self.region)
            .finish()
    }
}

/// Mutable view into a region of a plane.
///
/// Like [`PlaneView`], but allows modifying samples. Mutably borrows the
/// plane.
pub struct PlaneViewMut<'a> {
    plane: &'a mut Plane,
    region: Rect,
}

impl PlaneViewMut<'_> {
    /// Returns the view width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.region.width
    }

    /// Returns the view height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.region.height
    }

    /// Returns the view dimensions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.region.width, self.region.height)
    }

    /// Returns the region this view covers.
    #[inline]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Returns the sample at (x, y) relative to the view origin.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.region.width && y < self.region.height);
        self.plane.sample(self.region.x + x, self.region.y + y)
    }

    /// Sets the sample at (x, y) relative to the view origin.
    #[inline]
    pub fn set_sample(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.region.width && y < self.region.height);
        self.plane
            .set_sample(self.region.x + x, self.region.y + y, value);
    }

    /// Returns a mutable row of the view.
    ///
    /// # Panics
    ///
    /// Panics if y >= view height.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        debug_assert!(y < self.region.height, "row out of bounds");
        let x0 = self.region.x as usize;
        let width = self.region.width as usize;
        let full = self.plane.row_mut(self.region.y + y);
        &mut full[x0..x0 + width]
    }

    /// Fills the entire view with a value.
    pub fn fill(&mut self, value: f32) {
        for y in 0..self.region.height {
            self.row_mut(y).fill(value);
        }
    }

    /// Copies samples from a source view.
    ///
    /// Both views must have the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the shapes disagree.
    pub fn copy_from(&mut self, src: &PlaneView<'_>) -> Result<()> {
        if self.dimensions() != src.dimensions() {
            return Err(Error::dimension_mismatch(
                self.dimensions(),
                src.dimensions(),
            ));
        }
        for y in 0..self.region.height {
            self.row_mut(y).copy_from_slice(src.row(y));
        }
        Ok(())
    }
}

impl std::fmt::Debug for PlaneViewMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaneViewMut")
            .field("region", &self.region)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_new() {
        let plane = Plane::new(100, 50);
        assert_eq!(plane.width(), 100);
        assert_eq!(plane.height(), 50);
        assert_eq!(plane.sample_count(), 5000);
        assert_eq!(plane.sample(0, 0), 0.0);
        assert_eq!(plane.sample(99, 49), 0.0);
    }

    #[test]
    fn test_plane_filled() {
        let plane = Plane::filled(10, 10, 0.25);
        assert_eq!(plane.sample(0, 0), 0.25);
        assert_eq!(plane.sample(9, 9), 0.25);
    }

    #[test]
    fn test_plane_set_get_sample() {
        let mut plane = Plane::new(10, 10);
        plane.set_sample(5, 5, 1.0);
        assert_eq!(plane.sample(5, 5), 1.0);
        assert_eq!(plane.sample(0, 0), 0.0);
        assert_eq!(plane.get_sample(5, 5), Some(1.0));
        assert_eq!(plane.get_sample(10, 5), None);
    }

    #[test]
    fn test_plane_fill() {
        let mut plane = Plane::new(10, 10);
        plane.fill(0.5);
        assert!(plane.data().iter().all(|&v| v == 0.5));
    }

    #[test]
    fn test_plane_from_data() {
        let data: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let plane = Plane::from_data(4, 3, data).unwrap();
        assert_eq!(plane.sample(0, 0), 0.0);
        assert_eq!(plane.sample(3, 0), 3.0);
        assert_eq!(plane.sample(0, 1), 4.0);
        assert_eq!(plane.sample(3, 2), 11.0);
    }

    #[test]
    fn test_plane_from_data_wrong_size() {
        let data = vec![0.0f32; 100];
        assert!(Plane::from_data(100, 100, data).is_err());
    }

    #[test]
    fn test_plane_row() {
        let data: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let plane = Plane::from_data(4, 3, data).unwrap();
        assert_eq!(plane.row(1), &[4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_plane_clone_is_deep() {
        let plane = Plane::filled(10, 10, 1.0);
        let mut copy = plane.clone();
        copy.set_sample(0, 0, 0.0);
        assert_eq!(plane.sample(0, 0), 1.0);
        assert_eq!(copy.sample(0, 0), 0.0);
    }

    #[test]
    fn test_view_sample() {
        let mut plane = Plane::new(100, 100);
        plane.set_sample(15, 25, 0.75);
        let view = plane.view(Rect::new(10, 20, 50, 50));
        assert_eq!(view.dimensions(), (50, 50));
        assert_eq!(view.sample(5, 5), 0.75);
    }

    #[test]
    fn test_view_row() {
        let data: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let plane = Plane::from_data(4, 4, data).unwrap();
        let view = plane.view(Rect::new(1, 1, 2, 2));
        assert_eq!(view.row(0), &[5.0, 6.0]);
        assert_eq!(view.row(1), &[9.0, 10.0]);
    }

    #[test]
    fn test_view_clamped_to_bounds() {
        let plane = Plane::new(10, 10);
        let view = plane.view(Rect::new(5, 5, 20, 20));
        assert_eq!(view.dimensions(), (5, 5));

        let outside = plane.view(Rect::new(50, 50, 5, 5));
        assert_eq!(outside.dimensions(), (0, 0));
    }

    #[test]
    fn test_view_mut_fill() {
        let mut plane = Plane::new(100, 100);
        {
            let mut view = plane.view_mut(Rect::new(10, 10, 50, 50));
            view.fill(1.0);
        }
        // Inside the view region
        assert_eq!(plane.sample(10, 10), 1.0);
        assert_eq!(plane.sample(59, 59), 1.0);
        // Outside the view region
        assert_eq!(plane.sample(0, 0), 0.0);
        assert_eq!(plane.sample(60, 60), 0.0);
    }

    #[test]
    fn test_view_mut_copy_from() {
        let src = Plane::filled(4, 4, 2.0);
        let mut dst = Plane::new(10, 10);
        dst.view_mut(Rect::new(3, 3, 4, 4))
            .copy_from(&src.view(src.bounds()))
            .unwrap();
        assert_eq!(dst.sample(3, 3), 2.0);
        assert_eq!(dst.sample(6, 6), 2.0);
        assert_eq!(dst.sample(2, 2), 0.0);
        assert_eq!(dst.sample(7, 7), 0.0);
    }

    #[test]
    fn test_view_mut_copy_from_shape_mismatch() {
        let src = Plane::new(4, 4);
        let mut dst = Plane::new(10, 10);
        let result = dst
            .view_mut(Rect::new(0, 0, 5, 5))
            .copy_from(&src.view(src.bounds()));
        assert!(result.is_err());
    }
}
