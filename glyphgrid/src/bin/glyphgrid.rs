//! Convert an image into an HTML page of edge-aware glyphs.
//!
//! ```text
//! glyphgrid photo.jpg --colors -o photo.html
//! ```
//!
//! Set `RUST_LOG=debug` for per-stage timings.

use anyhow::{Context, Result};
use clap::Parser;
use glyphgrid::filter::{difference_of_gaussians, sobel_classify, sobel_hue};
use glyphgrid::io::{DEFAULT_OUTPUT, read_image, write_html, write_image};
use glyphgrid::quant::LuminanceRamp;
use glyphgrid::{Pipeline, PipelineOptions, Raster};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Edge-aware glyph art from raster images
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image (PNG, JPEG, GIF, BMP, TIFF, WebP or PNM)
    image: PathBuf,

    /// Wrap every glyph with the color of its block
    #[arg(short, long)]
    colors: bool,

    /// Output HTML file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Block size in pixels
    #[arg(long, default_value_t = 8)]
    block_size: u32,

    /// Spread of the narrow edge-mask blur
    #[arg(long, default_value_t = 0.5)]
    sigma: f64,

    /// Ratio of the wide blur's spread to the narrow one
    #[arg(long, default_value_t = 6.0)]
    k: f64,

    /// Channel threshold for the edge mask
    #[arg(long, default_value_t = 120)]
    dog_threshold: i32,

    /// Gradient magnitude threshold for edge directions
    #[arg(long, default_value_t = 1200.0)]
    sobel_threshold: f64,

    /// Edge pixels a block needs before it gets a directional glyph
    #[arg(long, default_value_t = 4)]
    dominance: u32,

    /// Ten luminance glyphs, sparse to dense
    #[arg(long)]
    ramp: Option<String>,

    /// Worker threads (defaults to one per CPU)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Also write the edge mask and gradient hue images into this directory
    #[arg(long)]
    dump_stages: Option<PathBuf>,
}

fn dump_stages(raster: &Raster, options: &PipelineOptions, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mask = difference_of_gaussians(raster, &options.dog)?;
    let hue = sobel_hue(&mask, options.sobel_threshold)?;
    let edges = sobel_classify(&mask, options.sobel_threshold)?.to_raster()?;
    for (name, img) in [("dog.png", &mask), ("sobel-hue.png", &hue), ("edges.png", &edges)] {
        let path = dir.join(name);
        write_image(img, &path).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let raster = read_image(&args.image)
        .with_context(|| format!("reading {}", args.image.display()))?;
    info!(
        "loaded {} ({}x{})",
        args.image.display(),
        raster.width(),
        raster.height()
    );

    let mut options = PipelineOptions::default()
        .with_colors(args.colors)
        .with_sigma(args.sigma)
        .with_k(args.k)
        .with_dog_threshold(args.dog_threshold)
        .with_sobel_threshold(args.sobel_threshold)
        .with_dominance_threshold(args.dominance)
        .with_block_size(args.block_size);
    if let Some(ramp) = &args.ramp {
        options = options.with_ramp(ramp.parse::<LuminanceRamp>()?);
    }
    if let Some(n) = args.threads {
        options = options.with_threads(n);
    }

    let pipeline = Pipeline::new(options)?;
    if let Some(dir) = &args.dump_stages {
        dump_stages(&raster, pipeline.options(), dir)?;
    }

    let start = Instant::now();
    let grid = pipeline.build_grid(&raster)?;
    info!(
        "built {}x{} glyph grid in {:?}",
        grid.rows(),
        grid.glyph_cols(),
        start.elapsed()
    );

    write_html(&args.output, &grid.flatten())
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(())
}
