//! Block quantization regression test
//!
//! Hand-built edge maps against known glyph grids.

use glyphgrid_core::{EdgeDirection, EdgeMap, Raster, color};
use glyphgrid_quant::{
    GlyphCell, QuantError, QuantizeOptions, annotate_colors, quantize_blocks,
};
use glyphgrid_test::{RegParams, synthetic};

/// Fill `count` pixels of the block at (bx, by) with `dir`, row by row.
fn paint(edges: &mut EdgeMap, bx: u32, by: u32, dir: EdgeDirection, count: u32) {
    for i in 0..count {
        edges
            .set(bx * 8 + i % 8, by * 8 + i / 8, dir)
            .expect("pixel in range");
    }
}

#[test]
fn quantize_reg() {
    let mut rp = RegParams::new("quantize");
    let opts = QuantizeOptions::default();

    // --- Test 1: dominance and tie-break ---
    let mut edges = EdgeMap::new(32, 8).expect("edge map");
    // block 0: vertical 5, horizontal 3
    paint(&mut edges, 0, 0, EdgeDirection::Vertical, 5);
    for x in 5..8 {
        edges.set(x, 0, EdgeDirection::Horizontal).expect("set");
    }
    // block 1: vertical 5, horizontal 5
    paint(&mut edges, 1, 0, EdgeDirection::Horizontal, 5);
    for x in 8..13 {
        edges.set(x, 7, EdgeDirection::Vertical).expect("set");
    }
    // block 2: diagonal-backward 3, below the threshold
    paint(&mut edges, 2, 0, EdgeDirection::DiagonalBackward, 3);
    // block 3: diagonal-forward 4 against diagonal-backward 4
    paint(&mut edges, 3, 0, EdgeDirection::DiagonalForward, 4);
    for x in 24..28 {
        edges.set(x, 5, EdgeDirection::DiagonalBackward).expect("set");
    }

    let gray = synthetic::uniform(32, 8, 0);
    let grid = quantize_blocks(&edges, &gray, &opts).expect("quantize");
    rp.compare_strings("|| \\\n", &grid.flatten());
    rp.check(
        grid.get(0, 2) == Some(GlyphCell::Luminance(' ')),
        "weak block falls back to luminance",
    );

    // --- Test 2: luminance ramp ends ---
    let empty = EdgeMap::new(16, 8).expect("edge map");
    let lum = Raster::from_fn(16, 8, |x, _| {
        if x < 8 { color::gray(0) } else { color::gray(255) }
    })
    .expect("luminance");
    let grid = quantize_blocks(&empty, &lum, &opts).expect("quantize");
    rp.compare_strings(" @\n", &grid.flatten());

    // mid grays: 128 -> level 5 -> index 4, 26 -> level 1 -> index 0
    let lum = Raster::from_fn(16, 8, |x, _| {
        if x < 8 { color::gray(128) } else { color::gray(26) }
    })
    .expect("luminance");
    let grid = quantize_blocks(&empty, &lum, &opts).expect("quantize");
    rp.compare_strings("= \n", &grid.flatten());

    // --- Test 3: partial blocks at the right and bottom edges ---
    let edges = EdgeMap::new(17, 9).expect("edge map");
    let gray = synthetic::uniform(17, 9, 255);
    let grid = quantize_blocks(&edges, &gray, &opts).expect("quantize");
    rp.compare_values(2.0, f64::from(grid.rows()), 0.0);
    rp.compare_values(4.0, f64::from(grid.cols()), 0.0);
    rp.compare_strings("@@@\n@@@\n", &grid.flatten());

    // --- Test 4: custom block size and ramp ---
    let custom = QuantizeOptions {
        block_size: 4,
        ramp: "0123456789".parse().expect("ramp"),
        ..QuantizeOptions::default()
    };
    let grid = quantize_blocks(&edges, &gray, &custom).expect("quantize");
    rp.compare_values(3.0, f64::from(grid.rows()), 0.0);
    rp.compare_strings("99999\n99999\n99999\n", &grid.flatten());

    // --- Test 5: size mismatch ---
    let small = synthetic::uniform(8, 8, 0);
    rp.check(
        matches!(
            quantize_blocks(&edges, &small, &opts),
            Err(QuantError::Core(glyphgrid_core::Error::DimensionMismatch { .. }))
        ),
        "mismatched luminance rejected",
    );

    // --- Test 6: color annotation keeps terminators ---
    let src = synthetic::uniform_rgb(16, 8, 10, 20, 30);
    let empty = EdgeMap::new(16, 8).expect("edge map");
    let mut grid = quantize_blocks(&empty, &synthetic::uniform(16, 8, 0), &opts).expect("quantize");
    annotate_colors(&mut grid, &src, 8).expect("annotate");
    rp.compare_strings(
        "<span style='color: rgb(10, 20, 30);'> </span>\
         <span style='color: rgb(10, 20, 30);'> </span>\n",
        &grid.flatten(),
    );

    assert!(rp.cleanup(), "quantize regression test failed");
}
