//! Batch processing command

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::BatchArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use anyhow::{bail, Result};
use rayon::prelude::*;
use usm_io::ImageData;
use usm_ops::{convolve, usm_enhance, Border, FilterKind, Kernel};

pub fn run(args: BatchArgs, verbose: bool) -> Result<()> {
    trace!(pattern = %args.input, op = %args.op, "batch::run");

    // Find matching files
    let files: Vec<PathBuf> = glob::glob(&args.input)?
        .filter_map(|r| r.ok())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, op = %args.op, "Starting batch processing");

    if verbose {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    // Create output directory
    std::fs::create_dir_all(&args.output_dir)?;

    // Parse operation args
    let op_args: HashMap<String, String> = args
        .args
        .iter()
        .filter_map(|s| {
            let parts: Vec<&str> = s.splitn(2, '=').collect();
            if parts.len() == 2 {
                Some((parts[0].to_string(), parts[1].to_string()))
            } else {
                None
            }
        })
        .collect();

    // Process files in parallel
    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|input| {
            process_file(
                input,
                &args.output_dir,
                &args.op,
                &op_args,
                args.format.as_deref(),
                verbose,
            )
        })
        .collect();

    // Report results
    let mut success = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(_) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    info!(success, failed, "Batch processing complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

fn process_file(
    input: &Path,
    output_dir: &Path,
    op: &str,
    args: &HashMap<String, String>,
    format: Option<&str>,
    verbose: bool,
) -> Result<()> {
    // Determine output path
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let ext = format.unwrap_or_else(|| {
        input
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png")
    });

    let output = output_dir.join(format!("{}.{}", stem, ext));

    if verbose {
        println!("Processing {} -> {}", input.display(), output.display());
    }

    let image = super::load_image(input)?;

    let radius: u32 = parse_arg(args, "radius", 1);
    let border = if parse_arg(args, "circular", false) {
        Border::Circular
    } else {
        Border::Fill
    };
    let filter = super::parse_filter(args.get("filter").map_or("box", |s| s.as_str()))?;

    let result = match op.to_lowercase().as_str() {
        "enhance" => {
            let gain: f32 = parse_arg(args, "gain", 1.0);
            apply(&image, false, |p| {
                usm_enhance(p, gain, radius, filter, border).map(|out| out.enhanced)
            })?
        }
        "blur" => {
            let kernel = match filter {
                FilterKind::Box => Kernel::box_filter(radius.max(1))?,
                FilterKind::Gaussian => Kernel::gaussian(radius.max(1))?,
            };
            apply(&image, true, |p| convolve(p, &kernel, border))?
        }
        "sharpen" => {
            let amount: f32 = parse_arg(args, "amount", 1.0);
            let kernel = Kernel::sharpen4(amount);
            apply(&image, false, |p| convolve(p, &kernel, border))?
        }
        _ => bail!("Unknown operation: {}", op),
    };

    super::save_image(&output, &result)?;

    Ok(())
}

/// Runs a plane operation over the channels of an image.
///
/// Sharpening an alpha channel is rarely wanted, so alpha only goes
/// through the operation when `include_alpha` is set.
fn apply<F>(image: &ImageData, include_alpha: bool, op: F) -> Result<ImageData>
where
    F: Fn(&usm_core::Plane) -> usm_ops::OpsResult<usm_core::Plane>,
{
    let alpha = match image.channels {
        2 | 4 => Some(image.channels as usize - 1),
        _ => None,
    };
    let planes: Vec<_> = image
        .to_planes()
        .iter()
        .enumerate()
        .map(|(c, p)| {
            if !include_alpha && Some(c) == alpha {
                Ok(p.clone())
            } else {
                op(p)
            }
        })
        .collect::<Result<_, _>>()?;
    ImageData::from_planes(&planes).map_err(Into::into)
}

/// Reads a typed key=value argument with a default.
fn parse_arg<T: std::str::FromStr>(args: &HashMap<String, String>, key: &str, default: T) -> T {
    args.get(key).and_then(|s| s.parse().ok()).unwrap_or(default)
}
