//! Desaturation and luminance regression test

use glyphgrid_color::{Hsv, desaturate, hsv_to_rgb, luminance_level};
use glyphgrid_core::{Raster, color};
use glyphgrid_test::{RegParams, synthetic};

/// Red, green and blue thirds.
fn make_tricolor(w: u32, h: u32) -> Raster {
    let third = w / 3;
    Raster::from_fn(w, h, |x, _| {
        if x < third {
            color::compose_rgb(255, 0, 0)
        } else if x < 2 * third {
            color::compose_rgb(0, 200, 0)
        } else {
            color::compose_rgba(0, 0, 40, 128)
        }
    })
    .unwrap()
}

#[test]
fn desaturate_reg() {
    let mut rp = RegParams::new("desaturate");

    // --- Test 1: gray images are unchanged ---
    let ramp = synthetic::horizontal_ramp(64, 3);
    let gray = desaturate(&ramp).expect("desaturate ramp");
    rp.compare_raster(&ramp, &gray);

    // --- Test 2: lightness of saturated primaries ---
    let tri = make_tricolor(30, 2);
    let gray = desaturate(&tri).expect("desaturate tricolor");
    rp.check(gray.get_rgba(0, 0) == Some((128, 128, 128, 255)), "red -> 128");
    rp.check(gray.get_rgba(10, 1) == Some((100, 100, 100, 255)), "green 200 -> 100");
    rp.check(gray.get_rgba(29, 0) == Some((20, 20, 20, 128)), "alpha kept");

    // --- Test 3: luminance levels over the whole byte range ---
    let levels: Vec<u8> = (0..=255u8).map(luminance_level).collect();
    rp.check(levels.windows(2).all(|w| w[0] <= w[1]), "levels are monotone");
    rp.compare_values(0.0, f64::from(levels[0]), 0.0);
    rp.compare_values(10.0, f64::from(levels[255]), 0.0);
    rp.compare_values(
        1.0,
        levels.iter().filter(|&&l| l == 10).count() as f64,
        0.0,
    );

    // --- Test 4: hue circle at full saturation and value ---
    let expected = [
        (0.0, (255, 0, 0)),
        (45.0, (255, 191, 0)),
        (150.0, (0, 255, 127)),
        (210.0, (0, 127, 255)),
        (330.0, (255, 0, 127)),
    ];
    for (h, rgb) in expected {
        rp.check(hsv_to_rgb(Hsv::new(h, 100.0, 100.0)) == rgb, &format!("hue {h}"));
    }

    assert!(rp.cleanup(), "desaturate regression test failed");
}
