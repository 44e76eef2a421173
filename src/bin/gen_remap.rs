//! Coordinate Remap-Map Generator
//!
//! Produces the x/y coordinate rasters consumed by ffmpeg's `remap` filter
//! to warp a source image or video into a target projection.
//!
//! Usage:
//!   gen_remap -x test_x.pgm -y test_y.pgm -H 400 -w 400 -r 400 -c 400 -m equirectangular --verbose
//!   gen_remap -x fly360_x.pgm -y fly360_y.pgm -H 1504 -w 1504 -r 752 -c 1504 -m equirectangular
//!
//! Then:
//!   ffmpeg -i input.jpg -i test_x.pgm -i test_y.pgm -lavfi remap out.png
//!   ffmpeg -i fly360.mp4 -i fly360_x.pgm -i fly360_y.pgm -lavfi remap out.mp4

use std::path::PathBuf;

use clap::Parser;
use remapgen::{mapgen, pgm, MapConfig, ProjectionMode};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Coordinate remap-map generator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generates x/y coordinate remap rasters (ASCII PGM) for spherical reprojection",
    long_about = None
)]
struct Args {
    /// Output path for the x-coordinate map
    #[arg(short = 'x', long)]
    xmap: PathBuf,

    /// Output path for the y-coordinate map
    #[arg(short = 'y', long)]
    ymap: PathBuf,

    /// Target map height in rows
    #[arg(short = 'r', long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: u32,

    /// Target map width in columns
    #[arg(short = 'c', long, value_parser = clap::value_parser!(u32).range(1..))]
    cols: u32,

    /// Source image height in pixels
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Source image width in pixels
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Projection model mapping output pixels to source pixels
    #[arg(short = 'm', long, value_enum, default_value_t = ProjectionMode::Front)]
    mode: ProjectionMode,

    /// Azimuthal offset for the equirectangular mode, as a fraction of a full turn
    #[arg(short = 't', long, default_value_t = 0.0)]
    theta_adj: f64,

    /// Report the selected mode and output targets before generating
    #[arg(long)]
    verbose: bool,
}

/// Write one map and report the sample count against the expected total
fn write_map(path: &PathBuf, map: &ndarray::Array2<i32>) -> Result<()> {
    let label = path.display().to_string();
    let written = pgm::write_ascii(path, map, &label)?;

    let (rows, cols) = map.dim();
    println!("Samples expected (rows * cols): {}", rows * cols);
    println!("Samples written to {}: {}", label, written);

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = MapConfig::new(
        args.width,
        args.height,
        args.rows as usize,
        args.cols as usize,
        args.mode,
    )?
    .with_theta_adj(args.theta_adj)
    .with_verbose(args.verbose);

    if cfg.verbose {
        println!("Mode: {} projection", cfg.mode);
        println!("xmap file: {}", args.xmap.display());
        println!("ymap file: {}", args.ymap.display());
    }

    println!("Generating maps");
    let maps = mapgen::generate(&cfg);

    println!("Writing files");
    write_map(&args.ymap, &maps.y)?;
    write_map(&args.xmap, &maps.x)?;

    Ok(())
}
