//! usm - Spatial filtering and unsharp-mask sharpening CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "usm")]
#[command(author, version, about = "Spatial filtering and unsharp-mask sharpening CLI")]
#[command(long_about = "
Spatial filtering tools built around unsharp masking.

Reads PNG and PGM/PPM images, runs the filters on normalized f32
planes, and writes the result back clamped to the output bit depth.
Color images are enhanced through the HSV value channel by default
so hues survive the sharpening.

Examples:
  usm enhance photo.png -o crisp.png              # Default unsharp mask
  usm enhance photo.png -o crisp.png -g 1.5 -r 2 -f gaussian -c
  usm enhance scan.pgm -o out.pgm --save-mask mask.pgm
  usm blur noisy.png -o smooth.png -r 3
  usm sharpen flat.ppm -o out.ppm -k lap8 --amount 0.5
  usm sharpen flat.png -o out.png -k dog --r1 1 --r2 3
  usm batch -i 'frames/*.png' -o done --op enhance -a gain=1.2 -a radius=2
  usm info photo.png scan.pgm
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Sharpen by unsharp masking
    #[command(visible_alias = "e")]
    Enhance(EnhanceArgs),

    /// Apply a smoothing filter
    Blur(BlurArgs),

    /// Apply a sharpening kernel
    Sharpen(SharpenArgs),

    /// Batch process multiple images
    Batch(BatchArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct EnhanceArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Enhancement gain (0 = no effect)
    #[arg(short, long, default_value = "1.0")]
    gain: f32,

    /// Filter radius in pixels
    #[arg(short, long, default_value = "1")]
    radius: u32,

    /// Low-pass filter: box, gaussian
    #[arg(short, long, default_value = "box")]
    filter: String,

    /// Wrap borders circularly instead of zero padding
    #[arg(short, long)]
    circular: bool,

    /// Enhance RGB channels independently instead of the HSV value channel
    #[arg(long)]
    rgb: bool,

    /// Also write the low-pass mask image
    #[arg(long)]
    save_mask: Option<PathBuf>,
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blur radius in pixels
    #[arg(short, long, default_value = "3")]
    radius: u32,

    /// Blur type: box, gaussian
    #[arg(short = 't', long, default_value = "gaussian")]
    blur_type: String,

    /// Wrap borders circularly instead of zero padding
    #[arg(short, long)]
    circular: bool,
}

#[derive(Args)]
struct SharpenArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel: lap4, lap8, dog
    #[arg(short, long, default_value = "lap4")]
    kernel: String,

    /// Sharpening strength (lap4/lap8)
    #[arg(short, long, default_value = "1.0")]
    amount: f32,

    /// Inner Gaussian radius (dog)
    #[arg(long, default_value = "1")]
    r1: u32,

    /// Outer Gaussian radius (dog)
    #[arg(long, default_value = "2")]
    r2: u32,

    /// Wrap borders circularly instead of zero padding
    #[arg(short, long)]
    circular: bool,

    /// Sharpen RGB channels independently instead of the HSV value channel
    #[arg(long)]
    rgb: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    #[arg(short, long)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Operation to apply: enhance, blur, sharpen
    #[arg(long, default_value = "enhance")]
    op: String,

    /// Operation arguments (key=value)
    #[arg(short, long)]
    args: Vec<String>,

    /// Output format extension
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Enhance(args) => commands::enhance::run(args, cli.verbose),
        Commands::Blur(args) => commands::blur::run(args, cli.verbose),
        Commands::Sharpen(args) => commands::sharpen::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}

/// Routes tracing output to stderr, honoring RUST_LOG when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
