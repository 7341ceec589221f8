use chroma_core::{
    clamp, grayscale, hsv_to_rgb, lch_to_rgb, rgb_to_hsv, rgb_to_lch, shift, Image, Lch,
    ReferenceWhite, Srgb,
};

const EPSILON: f32 = 1e-4;

/// Every RGB triple on a 0.1 grid over `[0, 1]³`.
fn grid() -> Vec<[f32; 3]> {
    let steps = || (0..=10).map(|i| i as f32 / 10.0);
    steps()
        .flat_map(|r| steps().flat_map(move |g| steps().map(move |b| [r, g, b])))
        .collect()
}

/// Lay the grid out as an 11 × 121 image.
fn grid_image() -> Image {
    let mut image = Image::new(11, 121, 3);
    for (i, rgb) in grid().into_iter().enumerate() {
        image.set_pixel((i % 11) as isize, (i / 11) as isize, rgb);
    }
    image
}

fn assert_images_close(actual: &Image, expected: &Image) {
    for y in 0..expected.height() as isize {
        for x in 0..expected.width() as isize {
            let (a, e) = (actual.pixel(x, y), expected.pixel(x, y));
            for c in 0..3 {
                assert!(
                    (a[c] - e[c]).abs() < EPSILON,
                    "pixel ({x}, {y}) channel {c}: {a:?} vs {e:?}"
                );
            }
        }
    }
}

#[test]
fn test_hsv_grid_roundtrip_within_tolerance() {
    let original = grid_image();
    let mut image = original.clone();
    rgb_to_hsv(&mut image).unwrap();
    hsv_to_rgb(&mut image).unwrap();
    assert_images_close(&image, &original);
}

#[test]
fn test_lch_grid_roundtrip_within_tolerance() {
    let original = grid_image();
    let mut image = original.clone();
    rgb_to_lch(&mut image).unwrap();
    lch_to_rgb(&mut image).unwrap();
    assert_images_close(&image, &original);
}

#[test]
fn test_lch_grid_roundtrip_per_color() {
    let white = ReferenceWhite::default();
    for [r, g, b] in grid() {
        let rgb = Srgb::new(r, g, b);
        let lch = rgb.to_lch(white);
        let back = lch.to_srgb(white);
        let err = (back.r - r).abs() + (back.g - g).abs() + (back.b - b).abs();
        assert!(err < 3.0 * EPSILON, "{rgb:?} -> {lch:?} -> {back:?}");
    }
}

#[test]
fn test_black_and_zero_lch_map_exactly() {
    let white = ReferenceWhite::default();
    assert_eq!(Srgb::new(0.0, 0.0, 0.0).to_lch(white), Lch::new(0.0, 0.0, 0.0));
    assert_eq!(Lch::new(0.0, 0.0, 0.0).to_srgb(white), Srgb::new(0.0, 0.0, 0.0));
}

#[test]
fn test_white_has_lightness_100() {
    let lch = Srgb::new(1.0, 1.0, 1.0).to_lch(ReferenceWhite::default());
    assert!((lch.l - 100.0).abs() < 0.01, "L = {}", lch.l);
}

#[test]
fn test_mid_gray_image_grayscales_to_half() {
    let mut image = Image::new(2, 2, 3);
    for c in 0..3 {
        shift(&mut image, c, 0.5).unwrap();
    }
    let gray = grayscale(&image).unwrap();
    assert_eq!(gray.channels(), 1);
    for y in 0..2 {
        for x in 0..2 {
            assert!((gray.get(x, y, 0) - 0.5).abs() < 1e-6);
        }
    }
}

#[test]
fn test_shift_then_unshift_restores_channel() {
    let original = grid_image();
    let mut image = original.clone();
    shift(&mut image, 2, 0.37).unwrap();
    shift(&mut image, 2, -0.37).unwrap();
    assert_images_close(&image, &original);
}

#[test]
fn test_clamp_bounds_and_is_idempotent() {
    let mut image = grid_image();
    shift(&mut image, 0, 0.4).unwrap();
    shift(&mut image, 1, -0.4).unwrap();

    clamp(&mut image);
    assert!(image.data().iter().all(|v| (0.0..=1.0).contains(v)));

    let once = image.clone();
    clamp(&mut image);
    assert_eq!(image, once);
}

#[test]
fn test_out_of_bounds_reads_clamp_and_writes_drop() {
    let mut image = grid_image();
    let (w, h) = (image.width() as isize, image.height() as isize);

    assert_eq!(image.get(-3, -3, -1), image.get(0, 0, 0));
    assert_eq!(image.get(w + 5, h + 5, 7), image.get(w - 1, h - 1, 2));
    assert_eq!(image.get(w, 4, 1), image.get(w - 1, 4, 1));

    let before = image.clone();
    image.set(w, 0, 0, -1.0);
    image.set(0, h, 0, -1.0);
    image.set(0, 0, 3, -1.0);
    image.set(-1, 0, 0, -1.0);
    assert_eq!(image, before);
}
