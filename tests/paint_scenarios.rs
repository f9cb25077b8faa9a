// tests/paint_scenarios.rs
//! End-to-end frames through the public API.

use spectrum_paint::{
    Color, PaintError, compute_gradient,
    config::SpectrumSettings,
    mix_colors, paint_spectrum,
    render::{PEAK_BRIGHTNESS, threshold_row},
    view::SpectrumView,
};

fn distinct(len: usize, seed: u8) -> Vec<Color> {
    (0..len)
        .map(|i| Color::new(seed, 40 + i as u8, 90 - i as u8, 128 + i as u8))
        .collect()
}

fn marked(image: &[Color]) -> Vec<usize> {
    image
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_grey(PEAK_BRIGHTNESS))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn single_column_half_scale() {
    let (width, height) = (1, 4);
    let fg = distinct(height, 10);
    let bg = distinct(height, 20);
    let mut image = vec![Color::default(); width * height];

    paint_spectrum(width, height, &mut image, &[32768], &fg, &bg).unwrap();

    assert_eq!(threshold_row(32768, height), 2);
    assert_eq!(image[0], bg[0]);
    assert_eq!(image[1], bg[1]);
    assert_eq!(image[2], fg[2].with_brightness(PEAK_BRIGHTNESS));
    assert_eq!(image[3], fg[3]);
    assert_eq!(marked(&image), vec![2]);
}

#[test]
fn every_pixel_is_written() {
    let (width, height) = (7, 11);
    let fg = distinct(height, 10);
    let bg = distinct(height, 20);
    let data = [0u16, 65535, 1, 30000, 30001, 65000, 12];
    let mut image = vec![Color::default(); width * height];

    paint_spectrum(width, height, &mut image, &data, &fg, &bg).unwrap();

    assert!(image.iter().all(|c| *c != Color::default()));
}

#[test]
fn trace_length_matches_threshold_jump() {
    let (width, height) = (4, 32);
    let fg = distinct(height, 10);
    let bg = distinct(height, 20);
    let data = [4096u16, 61440, 61440, 0];
    let mut image = vec![Color::default(); width * height];

    paint_spectrum(width, height, &mut image, &data, &fg, &bg).unwrap();

    let rows: Vec<usize> = data.iter().map(|&m| threshold_row(m, height)).collect();
    assert_eq!(rows, vec![2, 30, 30, 0]);

    for x in 0..width {
        let column: Vec<Color> = image.iter().skip(x).step_by(width).copied().collect();
        let count = marked(&column).len();
        let delta = if x == 0 { 0 } else { rows[x].abs_diff(rows[x - 1]) };
        assert_eq!(count, delta + 1, "column {x}");
    }
}

#[test]
fn gradient_scenario_from_black_to_white() {
    let src = [Color::new(0, 0, 0, 255), Color::new(255, 255, 255, 255)];
    let mut dst = [Color::default(); 2];

    compute_gradient(&mut dst, &src).unwrap();

    assert_eq!(dst[0], src[0]);
    assert_eq!(dst[1], Color::new(127, 127, 127, 255));
}

#[test]
fn long_gradient_ends_near_last_stop() {
    let src = [Color::rgb(0, 0, 0), Color::rgb(200, 100, 50)];
    let mut dst = vec![Color::default(); 1000];

    compute_gradient(&mut dst, &src).unwrap();

    let last = dst[999];
    assert!(src[1].r - last.r <= 1);
    assert!(src[1].g - last.g <= 1);
    assert!(src[1].b - last.b <= 1);
}

#[test]
fn mix_identity() {
    let a = Color::new(3, 30, 130, 230);
    let b = Color::new(250, 150, 50, 5);
    assert_eq!(mix_colors(a, b, 1.0), a);
    assert_eq!(mix_colors(a, b, 0.0), b);
}

#[test]
fn view_matches_direct_painting() {
    let settings = SpectrumSettings::default();
    let mut view = SpectrumView::new(&settings).unwrap();
    view.resize(3, 5).unwrap();
    let data = [100u16, 40000, 20000];
    view.render(&data).unwrap();

    let mut fg = vec![Color::default(); 5];
    let mut bg = vec![Color::default(); 5];
    compute_gradient(&mut fg, &settings.foreground_colors).unwrap();
    compute_gradient(&mut bg, &settings.background_colors).unwrap();
    let mut image = vec![Color::default(); 15];
    paint_spectrum(3, 5, &mut image, &data, &fg, &bg).unwrap();

    assert_eq!(view.canvas().pixels(), &image[..]);
}

#[test]
fn precondition_failures_are_reported() {
    let mut dst = [Color::default(); 3];
    assert!(matches!(
        compute_gradient(&mut dst, &[]),
        Err(PaintError::TooFewStops { got: 0 })
    ));

    let mut image = vec![Color::default(); 4];
    assert!(matches!(
        paint_spectrum(2, 2, &mut image, &[0, 0], &distinct(2, 1), &distinct(1, 1)),
        Err(PaintError::BufferSize { what: "background gradient", .. })
    ));
}
