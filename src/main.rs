use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use frequency_resample::config::AppConfig;

/// Resample images in the frequency domain.
///
/// The tile geometry layer feeds padded pixel blocks to a pluggable
/// spectral resampling engine; this binary wires it to images on disk.
/// Memory usage during processing is proportional to input resolution and
/// tile size.
#[derive(Parser, Debug)]
#[command(name = "fresample")]
#[command(about = "Resample images in the frequency domain")]
struct Args {
    /// Input image
    input: PathBuf,

    /// Output image
    output: PathBuf,

    /// Resampling ratio as input:output; `I` is shorthand for `I:1`
    #[arg(short, long, default_value = "1:1")]
    ratio: String,

    /// Do not decompose the input image (default: periodic plus smooth
    /// image decomposition)
    #[arg(long)]
    no_image_decomposition: bool,

    /// Force periodization as the upsampling algorithm (default algorithm
    /// if a filter is provided); a filter is required to use it
    #[arg(long, conflicts_with = "zero_padding")]
    periodization: bool,

    /// Force zero padding as the upsampling algorithm (default algorithm if
    /// no filter is provided)
    #[arg(long)]
    zero_padding: bool,

    /// Path to the filter image to apply to the zoomed image
    #[arg(long)]
    filter: Option<PathBuf>,

    /// Normalize filter coefficients (default: no normalization)
    #[arg(long)]
    normalize: bool,

    /// Force zero padding on real input edges (default: mirror padding)
    #[arg(long)]
    zero_pad_real_edges: bool,

    /// Filter hot point x coordinate (default: kernel center)
    #[arg(long, requires = "hot_point_y")]
    hot_point_x: Option<usize>,

    /// Filter hot point y coordinate (default: kernel center)
    #[arg(long, requires = "hot_point_x")]
    hot_point_y: Option<usize>,

    /// Output tile size hint, pixels per side
    #[arg(long, default_value_t = 256)]
    tile_size: usize,

    /// Verbosity: trace, debug, info, warn, err, critical, off
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    TermLogger::init(
        parse_verbosity(&args.verbosity)?,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = AppConfig {
        ratio: args.ratio,
        no_image_decomposition: args.no_image_decomposition,
        force_periodization: args.periodization,
        force_zero_padding: args.zero_padding,
        filter_path: args.filter,
        normalize: args.normalize,
        zero_pad_real_edges: args.zero_pad_real_edges,
        hot_point: args.hot_point_x.zip(args.hot_point_y),
        tile_size: args.tile_size,
    };

    frequency_resample::run(&config, &args.input, &args.output)
}

fn parse_verbosity(level: &str) -> Result<LevelFilter> {
    match level {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "err" | "critical" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(anyhow::anyhow!(
            "invalid verbosity {level:?}: use trace, debug, info, warn, err, critical or off"
        )),
    }
}
