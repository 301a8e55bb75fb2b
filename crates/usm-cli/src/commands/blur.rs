//! Blur command.

use crate::BlurArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use anyhow::Result;
use usm_io::ImageData;
use usm_ops::{convolve, FilterKind, Kernel};

pub fn run(args: BlurArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), radius = args.radius, "blur::run");

    let image = super::load_image(&args.input)?;
    let kind = super::parse_filter(&args.blur_type)?;
    let border = super::border_from(args.circular);

    let kernel = match kind {
        FilterKind::Box => Kernel::box_filter(args.radius)?,
        FilterKind::Gaussian => Kernel::gaussian(args.radius)?,
    };

    if verbose {
        println!(
            "Blurring {} ({}x{}): radius {}, {} filter",
            args.input.display(),
            image.width,
            image.height,
            args.radius,
            kind
        );
    }

    // All channels blurred independently, alpha included.
    let blurred: Vec<_> = image
        .to_planes()
        .iter()
        .map(|p| convolve(p, &kernel, border))
        .collect::<Result<_, _>>()?;
    let result = ImageData::from_planes(&blurred)?;

    super::save_image(&args.output, &result)?;
    info!(output = %args.output.display(), "blurred image written");
    Ok(())
}
