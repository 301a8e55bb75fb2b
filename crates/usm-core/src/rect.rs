//! Rectangle type for addressing plane regions.
//!
//! Border expansion moves blocks of samples between planes; [`Rect`] names
//! those blocks. It is also used for view creation and bounds reporting.
//!
//! # Coordinate System
//!
//! All coordinates use the standard image convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Plane   │
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use usm_core::Rect;
//!
//! // Create a rectangle at (10, 20) with size 100x50
//! let rect = Rect::new(10, 20, 100, 50);
//!
//! // Check if a point is inside
//! assert!(rect.contains(15, 25));
//! assert!(!rect.contains(5, 25));
//!
//! // Get intersection with another rectangle
//! let other = Rect::new(50, 40, 100, 50);
//! if let Some(intersection) = rect.intersect(&other) {
//!     println!("Overlap: {}x{}", intersection.width, intersection.height);
//! }
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// Represents a rectangular region in 2D plane space. All values are
/// in samples, with (0, 0) at the top-left corner.
///
/// # Invariants
///
/// - `width` and `height` should be > 0 for a valid rectangle
/// - A rectangle with zero width or height is considered empty
///
/// # Example
///
/// ```rust
/// use usm_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in samples
    pub width: u32,
    /// Height in samples
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Rect;
    ///
    /// let rect = Rect::new(10, 20, 100, 50);
    /// ```
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    ///
    /// Convenience constructor for full-plane rectangles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Rect;
    ///
    /// let rect = Rect::from_size(640, 480);
    /// assert_eq!(rect.x, 0);
    /// assert_eq!(rect.y, 0);
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    ///
    /// This is `x + width`, the first column NOT in the rectangle.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    ///
    /// This is `y + height`, the first row NOT in the rectangle.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the area of the rectangle in samples.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    ///
    /// A rectangle is empty if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// The rectangle is inclusive on the left/top edges and exclusive
    /// on the right/bottom edges.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Rect;
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(10, 10));   // Top-left corner included
    /// assert!(rect.contains(109, 109)); // Just inside
    /// assert!(!rect.contains(110, 110)); // On right/bottom edge, excluded
    /// ```
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if this rectangle fully contains another.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Rect;
    ///
    /// let outer = Rect::new(0, 0, 100, 100);
    /// let inner = Rect::new(10, 10, 50, 50);
    /// assert!(outer.contains_rect(&inner));
    /// ```
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles don't overlap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, 50, 100, 100);
    /// let intersection = a.intersect(&b).unwrap();
    /// assert_eq!(intersection, Rect::new(50, 50, 50, 50));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Returns this rectangle translated by (dx, dy).
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Rect;
    ///
    /// let rect = Rect::new(10, 20, 100, 50);
    /// let moved = rect.translate(5, 10);
    /// assert_eq!(moved, Rect::new(15, 30, 100, 50));
    /// ```
    #[inline]
    pub const fn translate(&self, dx: u32, dy: u32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Clamps this rectangle to fit within bounds.
    ///
    /// Returns the portion of this rectangle that fits within the given
    /// bounds, or `None` if there's no overlap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usm_core::Rect;
    ///
    /// let rect = Rect::new(500, 300, 200, 200);
    /// let clamped = rect.clamp_to(640, 480).unwrap();
    /// assert!(clamped.right() <= 640);
    /// assert!(clamped.bottom() <= 480);
    /// ```
    #[inline]
    pub fn clamp_to(&self, max_width: u32, max_height: u32) -> Option<Rect> {
        let bounds = Rect::from_size(max_width, max_height);
        self.intersect(&bounds)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}
