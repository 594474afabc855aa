//! Integration tests for the image-to-palette pipeline over the public API.

use dominance::{
    image::{Rgb, RgbImage},
    Palette, QuantizeError,
};

fn two_color_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([10, 20, 30])
        } else {
            Rgb([200, 210, 220])
        }
    })
}

#[test]
fn palette_from_two_color_image() {
    let palette = Palette::from_image(two_color_image(200, 100))
        .cluster_count(2)
        .max_iterations(5)
        .seed(7)
        .generate()
        .unwrap();

    assert_eq!(palette.swatches().len(), 2);

    let total: f64 = palette.swatches().iter().map(|swatch| swatch.percentage()).sum();
    assert!((total - 100.0).abs() < 1e-6 * 2.0);

    for swatch in palette.swatches() {
        let hex = swatch.hex();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
    }

    assert!(palette.dominant_swatch().is_some());
}

#[test]
fn identical_seeds_produce_identical_palettes() {
    let first = Palette::from_image(two_color_image(64, 64))
        .seed(1234)
        .generate()
        .unwrap();
    let second = Palette::from_image(two_color_image(64, 64))
        .seed(1234)
        .generate()
        .unwrap();

    assert_eq!(first.swatches(), second.swatches());
}

#[test]
fn wide_images_are_downsampled_before_clustering() {
    // 1000px wide with the default 200px bound; the pipeline still produces a
    // full palette and the halves keep their even split
    let palette = Palette::from_image(two_color_image(1000, 10))
        .cluster_count(2)
        .seed(99)
        .generate()
        .unwrap();

    assert_eq!(palette.swatches().len(), 2);

    let total: f64 = palette.swatches().iter().map(|swatch| swatch.percentage()).sum();
    assert!((total - 100.0).abs() < 1e-6 * 2.0);
}

#[test]
fn empty_image_is_rejected() {
    let result = Palette::from_image(RgbImage::new(0, 0)).generate();

    assert!(matches!(result, Err(QuantizeError::InvalidInput { .. })));
}
