//! Domain-critical regression tests for epd-frame.
//!
//! These tests guard end-to-end properties of the pipeline rather than single
//! functions. Each test documents the regression it catches.

use image::{imageops, DynamicImage, Rgb as Px, RgbImage};

use crate::api::{ErrorKind, FrameError, FramePipeline};
use crate::color::Rgb;
use crate::frame::pack_codes;
use crate::geometry::{normalize, FitPolicy, GeometryOptions};
use crate::palette::Palette;
use crate::panel::PanelSpec;
use crate::quantize::quantize;

/// Deterministic noisy test image (xorshift, no external RNG).
fn noise_image(width: u32, height: u32, seed: u32) -> RgbImage {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    RgbImage::from_fn(width, height, |_, _| {
        let v = next();
        Px([v as u8, (v >> 8) as u8, (v >> 16) as u8])
    })
}

/// Smooth gradient covering the full RGB cube diagonal.
fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Px([
            (x * 255 / (width - 1).max(1)) as u8,
            (y * 255 / (height - 1).max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
}

fn palette_codes(palette: &Palette) -> Vec<u8> {
    palette.entries().iter().map(|e| e.code()).collect()
}

// ============================================================================
// Frame shape
// ============================================================================

/// If this breaks, it means: a frame came out with padding, a header, or a
/// partial last row. The panel driver streams exactly W*H/2 bytes.
#[test]
fn test_frame_size_for_every_policy_and_mode() {
    let pipeline = FramePipeline::new(PanelSpec::EPD_7IN3, Palette::six_color()).unwrap();
    let sources = [
        DynamicImage::ImageRgb8(gradient_image(1600, 1200)),
        DynamicImage::ImageRgb8(gradient_image(480, 800)),
        DynamicImage::ImageRgb8(gradient_image(37, 11)),
    ];
    for src in &sources {
        for fit in FitPolicy::ALL {
            for dither in [true, false] {
                let frame = pipeline.render(src, fit, dither).unwrap();
                assert_eq!(
                    frame.len(),
                    192_000,
                    "REGRESSION: {}x{} {fit} dither={dither} produced {} bytes",
                    src.width(),
                    src.height(),
                    frame.len()
                );
            }
        }
    }
}

/// If this breaks, it means: a nibble outside the palette's code set was
/// written, e.g. a palette index leaked into the frame instead of its code.
/// The six-color palette skips 0x4, which makes the two easy to tell apart.
#[test]
fn test_palette_closure() {
    let palette = Palette::six_color();
    let allowed = palette_codes(&palette);
    let pipeline = FramePipeline::new(PanelSpec::new(120, 72), palette).unwrap();
    let src = DynamicImage::ImageRgb8(noise_image(300, 180, 7));

    for dither in [true, false] {
        let frame = pipeline.render(&src, FitPolicy::CropFill, dither).unwrap();
        for (i, code) in frame.codes().enumerate() {
            assert!(
                allowed.contains(&code),
                "REGRESSION: pixel {i} has code {code:#x}, palette codes are {allowed:?}"
            );
        }
    }
}

/// If this breaks, it means: some state (RNG, global buffer, hash order)
/// leaks into rendering and frames are no longer reproducible.
#[test]
fn test_render_is_deterministic() {
    let pipeline = FramePipeline::new(PanelSpec::new(200, 120), Palette::seven_color()).unwrap();
    let src = DynamicImage::ImageRgb8(noise_image(640, 400, 42));

    for fit in FitPolicy::ALL {
        for dither in [true, false] {
            let a = pipeline.render(&src, fit, dither).unwrap();
            let b = pipeline.render(&src, fit, dither).unwrap();
            assert_eq!(a, b, "REGRESSION: {fit} dither={dither} not deterministic");
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

/// If this breaks, it means: crop-fill lost the top-left content, or the
/// high nibble no longer holds the left pixel.
#[test]
fn test_landscape_crop_fill_top_left_code() {
    // 1600x1200, top-left quadrant exactly palette red
    let red = Px([200, 80, 50]);
    let src = RgbImage::from_fn(1600, 1200, |x, y| {
        if x < 800 && y < 600 {
            red
        } else {
            Px([20, 20, 20])
        }
    });
    let src = DynamicImage::ImageRgb8(src);
    let pipeline = FramePipeline::new(PanelSpec::EPD_7IN3, Palette::six_color()).unwrap();

    for dither in [true, false] {
        let frame = pipeline.render(&src, FitPolicy::CropFill, dither).unwrap();
        assert_eq!(frame.len(), 192_000);
        assert_eq!(
            frame.as_bytes()[0] >> 4,
            0x3,
            "REGRESSION: top-left pixel should be red (0x3), dither={dither}"
        );
        assert_eq!(frame.as_bytes()[0], 0x33);
    }
}

/// If this breaks, it means: portrait sources are no longer rotated, or are
/// rotated the wrong way round.
#[test]
fn test_portrait_equals_pre_rotated_landscape() {
    let portrait = gradient_image(480, 800);
    let landscape = imageops::rotate270(&portrait);
    assert_eq!(landscape.dimensions(), (800, 480));

    let pipeline = FramePipeline::new(PanelSpec::EPD_7IN3, Palette::six_color()).unwrap();
    for fit in FitPolicy::ALL {
        let a = pipeline
            .render(&DynamicImage::ImageRgb8(portrait.clone()), fit, true)
            .unwrap();
        let b = pipeline
            .render(&DynamicImage::ImageRgb8(landscape.clone()), fit, true)
            .unwrap();
        assert_eq!(a, b, "REGRESSION: portrait handling differs for {fit}");
    }
}

/// If this breaks, it means: an odd-width panel got through and would
/// produce a frame whose pixel pairs straddle rows.
#[test]
fn test_odd_width_panel_is_configuration_error() {
    let err = FramePipeline::new(PanelSpec::new(801, 480), Palette::six_color()).unwrap_err();
    assert!(matches!(err, FrameError::OddWidth { width: 801 }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// If this breaks, it means: a palette with a code that cannot fit in a
/// nibble was accepted and would corrupt the neighboring pixel.
#[test]
fn test_code_sixteen_is_configuration_error() {
    let result = Palette::from_hex(&[("black", "#000000", 0x0), ("white", "#FFFFFF", 16)]);
    let err: FrameError = result.unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = pack_codes(&[0x0, 0x10], 2, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

// ============================================================================
// Geometry
// ============================================================================

/// If this breaks, it means: crop-fill added borders (the white fill shows
/// up as white codes).
#[test]
fn test_crop_fill_never_adds_borders() {
    let palette = Palette::six_color();
    let pipeline = FramePipeline::new(PanelSpec::new(100, 60), palette).unwrap();
    for (w, h) in [(400, 400), (1000, 100), (90, 300)] {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Px([0, 0, 0])));
        let frame = pipeline.render(&src, FitPolicy::CropFill, true).unwrap();
        assert!(
            frame.as_bytes().iter().all(|&b| b == 0x00),
            "REGRESSION: {w}x{h} black source shows non-black pixels after crop-fill"
        );
    }
}

/// If this breaks, it means: letterbox cropped the source. Corner markers of
/// a wide source must all survive.
#[test]
fn test_letterbox_never_crops() {
    let mut src = RgbImage::from_pixel(1600, 400, Px([255, 255, 255]));
    for (cx, cy) in [(0u32, 0u32), (1520, 0), (0, 320), (1520, 320)] {
        for y in cy..cy + 80 {
            for x in cx..cx + 80 {
                src.put_pixel(x, y, Px([0, 0, 0]));
            }
        }
    }
    let options = GeometryOptions::new(800, 480, FitPolicy::LetterboxFit);
    let canvas = normalize(&DynamicImage::ImageRgb8(src), &options).unwrap();

    // Halved to 800x200, centered vertically at y = 140
    for (x, y) in [(10, 150), (789, 150), (10, 329), (789, 329)] {
        let p = canvas.get_pixel(x, y).0;
        assert!(
            p.iter().all(|&c| c < 10),
            "REGRESSION: corner marker near ({x}, {y}) lost, got {p:?}"
        );
    }
    // Borders are background
    assert_eq!(canvas.get_pixel(400, 10).0, [255, 255, 255]);
    assert_eq!(canvas.get_pixel(400, 470).0, [255, 255, 255]);
}

/// If this breaks, it means: letterbox enlarged a source that already fits.
/// Small images stay at native size with background all around.
#[test]
fn test_letterbox_keeps_small_sources_native() {
    let pipeline = FramePipeline::new(PanelSpec::EPD_7IN3, Palette::six_color()).unwrap();
    let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 120, Px([0, 0, 0])));
    let frame = pipeline.render(&src, FitPolicy::LetterboxFit, true).unwrap();

    // Centered at (300, 180)..(500, 300); white is 0x1, black 0x0
    assert_eq!(frame.code_at(0, 0), 0x1, "REGRESSION: small source was enlarged");
    assert_eq!(frame.code_at(299, 240), 0x1);
    assert_eq!(frame.code_at(500, 240), 0x1);
    assert_eq!(frame.code_at(300, 180), 0x0);
    assert_eq!(frame.code_at(499, 299), 0x0);
}

// ============================================================================
// Quantization
// ============================================================================

/// If this breaks, it means: error diffusion disturbs regions that already
/// match the palette exactly. An exact color must produce zero error.
#[test]
fn test_exact_palette_regions_stay_uniform() {
    let palette = Palette::seven_color();
    for entry in palette.entries() {
        let img = RgbImage::from_pixel(64, 32, entry.color().into());
        let q = quantize(&img, &palette, true);
        assert!(
            q.codes().all(|c| c == entry.code()),
            "REGRESSION: uniform {} region is not uniform after dithering",
            entry.name()
        );
    }
}

/// If this breaks, it means: accumulated error is unbounded. Debug builds
/// assert the bound inside the diffusion loop; this input drives the error
/// hard against it.
#[test]
fn test_error_stays_bounded_on_adversarial_input() {
    let palette = Palette::from_hex(&[("red", "#FF0000", 0x4), ("blue", "#0000FF", 0x3)]).unwrap();
    let mut img = noise_image(256, 128, 99);
    for (x, _, p) in img.enumerate_pixels_mut() {
        if x % 3 == 0 {
            *p = Px([0, 255, 0]);
        }
    }
    let q = quantize(&img, &palette, true);
    assert_eq!(q.indices().len(), 256 * 128);
    assert!(q.codes().all(|c| c == 0x4 || c == 0x3));
}

/// If this breaks, it means: the background policy changed. Palettes with a
/// "white" entry letterbox with it; others use the entry closest to white.
#[test]
fn test_letterbox_background_follows_palette() {
    let paper = Palette::from_hex(&[
        ("black", "#000000", 0x0),
        ("paper", "#E6E6DC", 0x1),
        ("red", "#FF0000", 0x2),
    ])
    .unwrap();
    let pipeline = FramePipeline::new(PanelSpec::new(40, 24), paper).unwrap();
    assert_eq!(
        pipeline.geometry(FitPolicy::LetterboxFit).background,
        Rgb::new(0xE6, 0xE6, 0xDC)
    );

    let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(24, 24, Px([0, 0, 0])));
    let frame = pipeline.render(&src, FitPolicy::LetterboxFit, false).unwrap();
    // Left border is paper (0x1), center is black (0x0)
    assert_eq!(frame.code_at(0, 12), 0x1);
    assert_eq!(frame.code_at(20, 12), 0x0);
}
