//! Image info command.
//!
//! Displays dimensions, channels, sample range, and file size.

use crate::InfoArgs;
use anyhow::Result;
use std::fs;
use usm_io::Format;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let metadata = fs::metadata(path)?;
        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let image = super::load_image(path)?;

        println!("{}", path.display());
        println!("  Format:     {:?}", format);
        println!("  Resolution: {}x{}", image.width, image.height);
        println!("  Channels:   {}", image.channels);
        println!("  Pixels:     {}", image.pixel_count());
        println!("  File size:  {}", super::format_size(metadata.len()));

        if verbose {
            let (min, max) = sample_range(&image.data);
            println!("  Range:      [{:.4}, {:.4}]", min, max);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Min/max over all samples, ignoring NaN.
fn sample_range(data: &[f32]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in data {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}
