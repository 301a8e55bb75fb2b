//! Colorspace conversions.
//!
//! Sharpening a colour image channel by channel shifts hues near edges,
//! so the usual approach is to convert to HSV, enhance only the value
//! channel, and convert back. This module provides the per-pixel
//! conversions plus the Rec. 709 luminance weighting used for grayscale
//! reduction.

/// Converts an RGB pixel to HSV.
///
/// Inputs are expected in `[0, 1]`. Hue is returned in degrees
/// `[0, 360)`, saturation and value in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use usm_io::color::rgb_to_hsv;
///
/// let (h, s, v) = rgb_to_hsv(0.0, 1.0, 0.0);
/// assert_eq!(h, 120.0);
/// assert_eq!(s, 1.0);
/// assert_eq!(v, 1.0);
/// ```
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max > 0.0 { delta / max } else { 0.0 };

    (h, s, max)
}

/// Converts an HSV pixel back to RGB.
///
/// Hue is in degrees (any value; wrapped into `[0, 360)`), saturation
/// and value in `[0, 1]`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = v - c;
    (r1 + m, g1 + m, b1 + m)
}

/// Rec. 709 luminance of an RGB pixel.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}
