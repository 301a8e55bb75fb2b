//! CLI command implementations

pub mod batch;
pub mod blur;
pub mod enhance;
pub mod info;
pub mod sharpen;

use anyhow::{bail, Context, Result};
use std::path::Path;
use usm_core::Plane;
use usm_io::{color, ImageData};
use usm_ops::{Border, FilterKind};

/// Load image from path
pub fn load_image(path: &Path) -> Result<ImageData> {
    usm_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &ImageData) -> Result<()> {
    usm_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parses a low-pass filter name.
pub fn parse_filter(name: &str) -> Result<FilterKind> {
    match name.to_lowercase().as_str() {
        "box" => Ok(FilterKind::Box),
        "gaussian" | "gauss" => Ok(FilterKind::Gaussian),
        other => bail!("Unknown filter '{}' (expected box or gaussian)", other),
    }
}

/// Maps the --circular flag to a border policy.
pub fn border_from(circular: bool) -> Border {
    if circular {
        Border::Circular
    } else {
        Border::Fill
    }
}

/// Splits a color image into HSV planes; alpha is carried separately.
///
/// Only the first three channels are converted. Returns hue, saturation,
/// value, and the alpha plane when the image has one.
pub fn to_hsv_planes(image: &ImageData) -> (Plane, Plane, Plane, Option<Plane>) {
    let ch = image.channels as usize;
    let mut h = Plane::new(image.width, image.height);
    let mut s = Plane::new(image.width, image.height);
    let mut v = Plane::new(image.width, image.height);

    for (i, px) in image.data.chunks_exact(ch).enumerate() {
        let (ph, ps, pv) = color::rgb_to_hsv(px[0], px[1], px[2]);
        h.data_mut()[i] = ph;
        s.data_mut()[i] = ps;
        v.data_mut()[i] = pv;
    }

    let alpha = if ch >= 4 { image.plane(3) } else { None };
    (h, s, v, alpha)
}

/// Rebuilds an interleaved RGB(A) image from HSV planes.
pub fn from_hsv_planes(
    h: &Plane,
    s: &Plane,
    v: &Plane,
    alpha: Option<&Plane>,
) -> Result<ImageData> {
    if s.dimensions() != h.dimensions() || v.dimensions() != h.dimensions() {
        bail!("HSV planes disagree in size");
    }
    let ch = if alpha.is_some() { 4 } else { 3 };
    let mut image = ImageData::new(h.width(), h.height(), ch);

    for (i, px) in image.data.chunks_exact_mut(ch as usize).enumerate() {
        let (r, g, b) = color::hsv_to_rgb(h.data()[i], s.data()[i], v.data()[i]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
        if let Some(a) = alpha {
            px[3] = a.data()[i];
        }
    }
    Ok(image)
}

/// Wraps a single plane into a grayscale image for saving.
pub fn gray_image(plane: &Plane) -> Result<ImageData> {
    ImageData::from_planes(std::slice::from_ref(plane)).map_err(Into::into)
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
