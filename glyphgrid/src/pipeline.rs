//! Pipeline orchestration
//!
//! Stages run strictly in sequence on a rayon pool:
//!
//! ```text
//! raster ─┬─ difference_of_gaussians ── sobel_classify ─┐
//!         └─ desaturate ────────────────────────────────┴─ quantize_blocks
//!                                                           └─ annotate_colors (optional)
//! ```
//!
//! The edge branch and the desaturation branch are joined before
//! quantization starts. A pipeline with an explicit thread count owns a
//! pool of that size; otherwise it runs on rayon's global pool.

use crate::{PipelineError, PipelineResult};
use glyphgrid_color::desaturate;
use glyphgrid_core::Raster;
use glyphgrid_filter::{DogOptions, difference_of_gaussians, sobel_classify};
use glyphgrid_quant::{GlyphGrid, LuminanceRamp, QuantizeOptions, annotate_colors, quantize_blocks};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::Instant;

/// Options for [`Pipeline`]
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    /// Difference-of-Gaussians parameters (sigma 0.5, k 6, threshold 120)
    pub dog: DogOptions,
    /// Sobel magnitude threshold in the 16-bit scale
    pub sobel_threshold: f64,
    /// Block size, dominance threshold and glyph sets
    pub quantize: QuantizeOptions,
    /// Wrap every glyph with its block color
    pub colors: bool,
    /// Worker threads; `None` runs on rayon's global pool
    pub threads: Option<usize>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            dog: DogOptions::default(),
            sobel_threshold: 1200.0,
            quantize: QuantizeOptions::default(),
            colors: false,
            threads: None,
        }
    }
}

impl PipelineOptions {
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.dog.sigma = sigma;
        self
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.dog.k = k;
        self
    }

    pub fn with_dog_threshold(mut self, threshold: i32) -> Self {
        self.dog.threshold = threshold;
        self
    }

    pub fn with_sobel_threshold(mut self, threshold: f64) -> Self {
        self.sobel_threshold = threshold;
        self
    }

    pub fn with_dominance_threshold(mut self, threshold: u32) -> Self {
        self.quantize.dominance_threshold = threshold;
        self
    }

    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.quantize.block_size = block_size;
        self
    }

    pub fn with_ramp(mut self, ramp: LuminanceRamp) -> Self {
        self.quantize.ramp = ramp;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Check every stage's parameters.
    pub fn validate(&self) -> PipelineResult<()> {
        self.dog.validate()?;
        if !self.sobel_threshold.is_finite() || self.sobel_threshold < 0.0 {
            return Err(PipelineError::InvalidParameters(format!(
                "sobel threshold must be a non-negative number, got {}",
                self.sobel_threshold
            )));
        }
        self.quantize.validate()?;
        if self.threads == Some(0) {
            return Err(PipelineError::InvalidParameters(
                "thread count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configured glyph pipeline
pub struct Pipeline {
    options: PipelineOptions,
    /// Dedicated pool, present only when a thread count was requested
    pool: Option<ThreadPool>,
}

impl Pipeline {
    /// Validate `options` and, if a thread count is set, build the pool.
    pub fn new(options: PipelineOptions) -> PipelineResult<Self> {
        options.validate()?;
        let pool = match options.threads {
            Some(n) => Some(
                ThreadPoolBuilder::new()
                    .thread_name(|i| format!("glyphgrid-{i}"))
                    .num_threads(n)
                    .build()?,
            ),
            None => None,
        };
        let pipeline = Self { options, pool };
        log::debug!("pipeline: {} worker threads", pipeline.worker_threads());
        Ok(pipeline)
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Number of threads the stages run on.
    pub fn worker_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Whether this pipeline owns a dedicated pool.
    pub fn has_dedicated_pool(&self) -> bool {
        self.pool.is_some()
    }

    /// Run every stage and return the structured grid.
    pub fn build_grid(&self, raster: &Raster) -> PipelineResult<GlyphGrid> {
        match &self.pool {
            Some(pool) => pool.install(|| self.run(raster)),
            None => self.run(raster),
        }
    }

    /// Run every stage and flatten the grid row by row.
    pub fn render(&self, raster: &Raster) -> PipelineResult<String> {
        Ok(self.build_grid(raster)?.flatten())
    }

    fn run(&self, raster: &Raster) -> PipelineResult<GlyphGrid> {
        let opts = &self.options;
        let (w, h) = raster.dimensions();
        let t0 = Instant::now();

        let (edges, gray) = rayon::join(
            || -> PipelineResult<_> {
                let mask = difference_of_gaussians(raster, &opts.dog)?;
                log::debug!("pipeline: dog done in {:?}", t0.elapsed());
                let edges = sobel_classify(&mask, opts.sobel_threshold)?;
                log::debug!("pipeline: sobel done in {:?}", t0.elapsed());
                Ok(edges)
            },
            || desaturate(raster),
        );
        let (edges, gray) = (edges?, gray?);

        let mut grid = quantize_blocks(&edges, &gray, &opts.quantize)?;
        log::debug!(
            "pipeline: {w}x{h} -> {}x{} grid in {:?}",
            grid.rows(),
            grid.cols(),
            t0.elapsed()
        );

        if opts.colors {
            annotate_colors(&mut grid, raster, opts.quantize.block_size)?;
        }
        Ok(grid)
    }
}

/// Build a glyph grid with default options on rayon's global pool.
pub fn generate_glyph_grid(raster: &Raster, colors: bool) -> PipelineResult<GlyphGrid> {
    Pipeline::new(PipelineOptions::default().with_colors(colors))?.build_grid(raster)
}

/// Render an image to flattened glyph text with default options on rayon's
/// global pool.
pub fn render_glyphs(raster: &Raster) -> PipelineResult<String> {
    Pipeline::new(PipelineOptions::default())?.render(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphgrid_core::color;

    #[test]
    fn test_defaults() {
        let opts = PipelineOptions::default();
        assert_eq!(opts.dog, DogOptions::default());
        assert_eq!(opts.sobel_threshold, 1200.0);
        assert_eq!(opts.quantize.block_size, 8);
        assert_eq!(opts.quantize.dominance_threshold, 4);
        assert!(!opts.colors);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_invalid_options() {
        let zero_threads = PipelineOptions::default().with_threads(0);
        assert!(matches!(
            Pipeline::new(zero_threads),
            Err(PipelineError::InvalidParameters(_))
        ));
        let zero_block = PipelineOptions::default().with_block_size(0);
        assert!(matches!(
            Pipeline::new(zero_block),
            Err(PipelineError::Quant(_))
        ));
        let bad_sobel = PipelineOptions {
            sobel_threshold: -3.0,
            ..Default::default()
        };
        assert!(bad_sobel.validate().is_err());
    }

    #[test]
    fn test_setters_cover_every_stage() {
        let opts = PipelineOptions::default()
            .with_sigma(1.5)
            .with_k(3.0)
            .with_dog_threshold(90)
            .with_sobel_threshold(800.0)
            .with_dominance_threshold(2)
            .with_block_size(4)
            .with_colors(true)
            .with_threads(2);
        assert_eq!(opts.dog.sigma, 1.5);
        assert_eq!(opts.dog.k, 3.0);
        assert_eq!(opts.dog.threshold, 90);
        assert_eq!(opts.sobel_threshold, 800.0);
        assert_eq!(opts.quantize.dominance_threshold, 2);
        assert_eq!(opts.quantize.block_size, 4);
        assert!(opts.colors);
        assert_eq!(opts.threads, Some(2));
        assert!(opts.validate().is_ok());

        let huge_sigma = PipelineOptions::default().with_sigma(1e9);
        assert!(matches!(
            Pipeline::new(huge_sigma),
            Err(PipelineError::Filter(_))
        ));
    }

    #[test]
    fn test_pool_only_when_threads_requested() {
        let shared = Pipeline::new(PipelineOptions::default()).unwrap();
        assert!(!shared.has_dedicated_pool());
        assert_eq!(shared.worker_threads(), rayon::current_num_threads());

        let owned = Pipeline::new(PipelineOptions::default().with_threads(3)).unwrap();
        assert!(owned.has_dedicated_pool());
        assert_eq!(owned.worker_threads(), 3);
    }

    #[test]
    fn test_uniform_black_is_blank() {
        let pipeline = Pipeline::new(PipelineOptions::default().with_threads(2)).unwrap();
        let img = Raster::new_filled(20, 9, color::BLACK).unwrap();
        assert_eq!(pipeline.render(&img).unwrap(), "   \n   \n");
    }
}
