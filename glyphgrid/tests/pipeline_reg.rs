//! End-to-end pipeline regression test
//!
//! Synthetic images through every stage down to the flattened glyph text.

use glyphgrid::quant::GlyphCell;
use glyphgrid::{Pipeline, PipelineError, PipelineOptions, generate_glyph_grid, render_glyphs};
use glyphgrid_test::{RegParams, synthetic};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // --- Test 1: hard vertical boundary at the middle column ---
    let split = synthetic::vertical_split(16, 16, 8);
    let grid = generate_glyph_grid(&split, false).expect("glyph grid");
    rp.compare_values(2.0, f64::from(grid.rows()), 0.0);
    rp.compare_values(3.0, f64::from(grid.cols()), 0.0);
    for row in 0..2 {
        rp.check(
            grid.get(row, 0) == Some(GlyphCell::Directional('|'))
                && grid.get(row, 1) == Some(GlyphCell::Directional('|')),
            "both blocks are vertical",
        );
        rp.check(
            grid.get(row, 2) == Some(GlyphCell::RowEnd),
            "terminator in the last column",
        );
    }
    rp.compare_strings("||\n||\n", &grid.flatten());

    // --- Test 2: horizontal boundary ---
    let split = synthetic::horizontal_split(16, 16, 8);
    rp.compare_strings("__\n__\n", &render_glyphs(&split).expect("render"));

    // --- Test 3: partial blocks mix edges and luminance ---
    let split = synthetic::vertical_split(20, 12, 10);
    rp.compare_strings(" |@\n |@\n", &render_glyphs(&split).expect("render"));

    // --- Test 4: uniform images are pure luminance ---
    let black = synthetic::uniform(16, 16, 0);
    rp.compare_strings("  \n  \n", &render_glyphs(&black).expect("render"));
    let white = synthetic::uniform(16, 8, 255);
    rp.compare_strings("@@\n", &render_glyphs(&white).expect("render"));

    // --- Test 5: color annotation samples the original image ---
    let split = synthetic::vertical_split(16, 16, 8);
    let grid = generate_glyph_grid(&split, true).expect("colored grid");
    let row = "<span style='color: rgb(0, 0, 0);'>|</span>\
               <span style='color: rgb(255, 255, 255);'>|</span>\n";
    rp.compare_strings(&format!("{row}{row}"), &grid.flatten());

    // --- Test 6: output does not depend on the worker count ---
    let img = synthetic::checkerboard(45, 37, 6);
    let single = Pipeline::new(PipelineOptions::default().with_threads(1))
        .expect("pipeline")
        .render(&img)
        .expect("render");
    let many = Pipeline::new(PipelineOptions::default().with_threads(4))
        .expect("pipeline")
        .render(&img)
        .expect("render");
    rp.compare_strings(&single, &many);
    rp.compare_values(5.0, single.lines().count() as f64, 0.0);

    // --- Test 7: invalid options are rejected up front ---
    let bad = PipelineOptions::default().with_block_size(0);
    rp.check(
        matches!(Pipeline::new(bad), Err(PipelineError::Quant(_))),
        "zero block size rejected",
    );

    assert!(rp.cleanup(), "pipeline regression test failed");
}

#[test]
fn facade_reexports_reg() {
    let mut rp = RegParams::new("facade_reexports");

    // core's error module stays reachable through the facade
    let err: glyphgrid::error::Error = glyphgrid::Raster::new(0, 4).expect_err("zero width");
    let core: glyphgrid::Error = err;
    rp.check(
        matches!(PipelineError::from(core), PipelineError::Core(_)),
        "core error converts into pipeline error",
    );

    // default options share rayon's global pool
    let pipeline = Pipeline::new(PipelineOptions::default()).expect("default pipeline");
    rp.check(!pipeline.has_dedicated_pool(), "no pool without a thread count");
    let split = synthetic::vertical_split(16, 16, 8);
    rp.compare_strings("||\n||\n", &pipeline.render(&split).expect("render"));

    assert!(rp.cleanup(), "facade re-export regression test failed");
}
