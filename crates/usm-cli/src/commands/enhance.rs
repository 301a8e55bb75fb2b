//! Unsharp-mask enhancement command.

use crate::EnhanceArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use anyhow::Result;
use usm_io::ImageData;
use usm_ops::usm_enhance;

pub fn run(args: EnhanceArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), "enhance::run");

    let image = super::load_image(&args.input)?;
    let filter = super::parse_filter(&args.filter)?;
    let border = super::border_from(args.circular);

    if verbose {
        println!(
            "Enhancing {} ({}x{}, {} channels): gain {}, radius {}, {} filter",
            args.input.display(),
            image.width,
            image.height,
            image.channels,
            args.gain,
            args.radius,
            filter
        );
    }

    let (result, mask) = if image.channels < 3 {
        // Grayscale, with or without alpha.
        let mut planes = image.to_planes();
        let out = usm_enhance(&planes[0], args.gain, args.radius, filter, border)?;
        planes[0] = out.enhanced;
        (ImageData::from_planes(&planes)?, super::gray_image(&out.mask)?)
    } else if args.rgb {
        // Every color channel sharpened on its own; alpha passes through.
        let planes = image.to_planes();
        let mut enhanced = Vec::with_capacity(planes.len());
        let mut masks = Vec::new();
        for (c, plane) in planes.iter().enumerate() {
            if c < 3 {
                let out = usm_enhance(plane, args.gain, args.radius, filter, border)?;
                enhanced.push(out.enhanced);
                masks.push(out.mask);
            } else {
                enhanced.push(plane.clone());
            }
        }
        (
            ImageData::from_planes(&enhanced)?,
            ImageData::from_planes(&masks)?,
        )
    } else {
        // Default color path: sharpen the HSV value channel only.
        let (h, s, v, alpha) = super::to_hsv_planes(&image);
        let out = usm_enhance(&v, args.gain, args.radius, filter, border)?;
        let merged = super::from_hsv_planes(&h, &s, &out.enhanced, alpha.as_ref())?;
        (merged, super::gray_image(&out.mask)?)
    };

    super::save_image(&args.output, &result)?;
    info!(output = %args.output.display(), "enhanced image written");

    if let Some(mask_path) = &args.save_mask {
        super::save_image(mask_path, &mask)?;
        if verbose {
            println!("Mask written to {}", mask_path.display());
        }
    }

    Ok(())
}
