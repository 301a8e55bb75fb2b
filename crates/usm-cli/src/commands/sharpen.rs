//! Sharpening command.
//!
//! Applies a Laplacian or difference-of-Gaussians kernel directly,
//! without the unsharp-mask gain parameter.

use crate::SharpenArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use anyhow::{bail, Result};
use usm_core::Plane;
use usm_io::ImageData;
use usm_ops::{convolve, Kernel};

pub fn run(args: SharpenArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), kernel = %args.kernel, "sharpen::run");

    let image = super::load_image(&args.input)?;
    let border = super::border_from(args.circular);

    let kernel = match args.kernel.to_lowercase().as_str() {
        "lap4" => Kernel::sharpen4(args.amount),
        "lap8" => Kernel::sharpen8(args.amount),
        "dog" => Kernel::dog_sharpen(args.r1, args.r2)?,
        other => bail!("Unknown kernel '{}' (expected lap4, lap8, or dog)", other),
    };

    if verbose {
        println!(
            "Sharpening {} ({}x{}): {} kernel, {}x{}",
            args.input.display(),
            image.width,
            image.height,
            args.kernel,
            kernel.width,
            kernel.height
        );
    }

    let sharpen = |p: &Plane| convolve(p, &kernel, border);

    let result = if image.channels < 3 {
        // Grayscale, with or without alpha.
        let mut planes = image.to_planes();
        planes[0] = sharpen(&planes[0])?;
        ImageData::from_planes(&planes)?
    } else if args.rgb {
        let planes: Vec<_> = image
            .to_planes()
            .iter()
            .enumerate()
            .map(|(c, p)| if c < 3 { sharpen(p) } else { Ok(p.clone()) })
            .collect::<Result<_, _>>()?;
        ImageData::from_planes(&planes)?
    } else {
        let (h, s, v, alpha) = super::to_hsv_planes(&image);
        super::from_hsv_planes(&h, &s, &sharpen(&v)?, alpha.as_ref())?
    };

    super::save_image(&args.output, &result)?;
    info!(output = %args.output.display(), "sharpened image written");
    Ok(())
}
