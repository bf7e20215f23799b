//! Full booth flow: capture, filter, gallery, strip, save.

use image::{Rgba, RgbaImage};
use photostrip::codec::{self, Quality};
use photostrip::config::BoothConfig;
use photostrip::filters::{self, FilterKind};
use photostrip::session::Session;
use photostrip::strip::{Orientation, StripLayout};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(px))
}

#[test]
fn two_photo_booth_flow() {
    let mut session = Session::with_rng(&mut StdRng::seed_from_u64(7));

    // Photo 1: solid red, grayscaled on capture
    session
        .add_photo(solid(100, 100, [255, 0, 0, 255]), FilterKind::BlackAndWhite)
        .unwrap();
    assert_eq!(
        session.gallery()[0].image().get_pixel(50, 50).0,
        [76, 76, 76, 255]
    );

    // Photo 2: solid blue, no filter
    session
        .add_photo(solid(100, 100, [0, 0, 255, 255]), FilterKind::None)
        .unwrap();

    let config = BoothConfig::default();
    let strip = session
        .compose_strip(&config.strip.layout(), config.strip.min_photos)
        .unwrap();
    assert_eq!(strip.dimensions(), (800, 200));

    // Two slots of 400px each. Solid colors survive stretch-fit exactly.
    for y in [0, 100, 199] {
        for x in [0, 200, 399] {
            assert_eq!(strip.get_pixel(x, y).0, [76, 76, 76, 255], "at {x},{y}");
        }
        for x in [400, 600, 799] {
            assert_eq!(strip.get_pixel(x, y).0, [0, 0, 255, 255], "at {x},{y}");
        }
    }

    let stats = session.stats();
    assert_eq!(stats.photos, 2);
    assert_eq!(stats.filters, 1);
    assert_eq!(stats.strips, 1);
}

#[test]
fn four_photo_vertical_strip_with_padding() {
    let mut session = Session::with_rng(&mut StdRng::seed_from_u64(11));
    let colors = [
        [255, 0, 0, 255],
        [0, 255, 0, 255],
        [0, 0, 255, 255],
        [255, 255, 0, 255],
    ];
    for px in colors {
        session.add_photo(solid(60, 80, px), FilterKind::None).unwrap();
    }

    let layout = StripLayout {
        width: 200,
        height: 820,
        padding: 4,
        orientation: Orientation::Vertical,
        ..StripLayout::default()
    };
    let strip = session.compose_strip(&layout, 2).unwrap();
    assert_eq!(strip.dimensions(), (200, 820));

    // Main-axis span: 820 - 5*4 = 800, so each slot is 200 tall. Sample the
    // center of each slot; slot i starts at y = 4 + i*204.
    for (i, px) in colors.iter().enumerate() {
        let y = 4 + i as u32 * 204 + 100;
        assert_eq!(strip.get_pixel(100, y).0, *px, "slot {i}");
    }
    // Gutters stay background white
    assert_eq!(strip.get_pixel(100, 0).0, [255, 255, 255, 255]);
    assert_eq!(strip.get_pixel(100, 206).0, [255, 255, 255, 255]);
    assert_eq!(strip.get_pixel(1, 100).0, [255, 255, 255, 255]);
}

#[test]
fn six_captures_strip_uses_most_recent_four() {
    let mut session = Session::with_rng(&mut StdRng::seed_from_u64(3));
    for i in 0u8..6 {
        session
            .add_photo(solid(50, 50, [i * 40, 10, 10, 255]), FilterKind::None)
            .unwrap();
    }

    let strip = session.compose_strip(&StripLayout::default(), 2).unwrap();
    // Slot centers: 800 / 4 = 200px wide each
    for (slot, expected_r) in [(0u32, 80u8), (1, 120), (2, 160), (3, 200)] {
        let px = strip.get_pixel(slot * 200 + 100, 100).0;
        assert_eq!(px, [expected_r, 10, 10, 255], "slot {slot}");
    }
}

#[test]
fn filter_then_save_then_reload_png() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("retro.png");

    let processed = filters::apply(&solid(32, 32, [100, 150, 200, 255]), FilterKind::Retro).unwrap();
    codec::save_photo(&processed, &path, Quality::default()).unwrap();

    let back = codec::load_photo(&path).unwrap();
    assert_eq!(back.get_pixel(16, 16).0, [140, 175, 180, 255]);
}

#[test]
fn strip_saved_as_jpeg_keeps_geometry() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("strip.jpg");

    let mut session = Session::with_rng(&mut StdRng::seed_from_u64(5));
    session
        .add_photo(solid(100, 100, [200, 50, 50, 255]), FilterKind::Vintage)
        .unwrap();
    session
        .add_photo(solid(100, 100, [50, 50, 200, 255]), FilterKind::Soften)
        .unwrap();

    let strip = session.compose_strip(&StripLayout::default(), 2).unwrap();
    codec::save_photo(&strip, &path, Quality::new(90)).unwrap();

    let back = codec::load_photo(&path).unwrap();
    assert_eq!(back.dimensions(), (800, 200));
}
