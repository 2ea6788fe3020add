extern crate image as image_rs;

use image_rs::{Rgb, RgbImage};
use epipolar_plotter::Float;
use epipolar_plotter::error::EpipolarError;
use epipolar_plotter::image::Image;
use epipolar_plotter::image::geometry::point::Point;
use epipolar_plotter::sfm::epipolar::EpipolarLine;
use epipolar_plotter::visualize::palette_color;
use epipolar_plotter::visualize::plot::{render_epipolar_figure, save_figure};

const FIGURE_SIZE: (u32, u32) = (600, 300);

fn gray_image(name: &str) -> Image {
    Image::from_rgb_image(RgbImage::from_pixel(200, 100, Rgb([128u8, 128, 128])), Some(name.to_string()))
}

/**
 * (column, row) of every figure pixel with exactly the palette color, restricted to columns [x_min, x_max).
 */
fn pixels_with_color(figure: &RgbImage, color: [u8; 3], x_min: u32, x_max: u32) -> Vec<(u32, u32)> {
    figure.enumerate_pixels()
        .filter(|(x, _, p)| *x >= x_min && *x < x_max && p.0 == color)
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn test_figure_has_requested_size() {
    let figure = render_epipolar_figure(&gray_image("one"), &gray_image("two"), &[], &[], FIGURE_SIZE).unwrap();
    assert_eq!(figure.dimensions(), FIGURE_SIZE);
}

#[test]
fn test_no_points_draw_no_palette_colors() {
    let figure = render_epipolar_figure(&gray_image("one"), &gray_image("two"), &[], &[], FIGURE_SIZE).unwrap();
    for i in 0..2 {
        assert!(pixels_with_color(&figure, palette_color(i), 0, FIGURE_SIZE.0).is_empty());
    }
}

#[test]
fn test_point_and_line_colors_appear_in_their_panels() {
    let points = vec!(Point::<Float>::new(50.0, 25.0), Point::new(150.0, 60.0));
    let lines = vec!(EpipolarLine::new(0.0, 1.0, -30.0), EpipolarLine::new(0.2, 1.0, -60.0));
    let figure = render_epipolar_figure(&gray_image("one"), &gray_image("two"), &points, &lines, FIGURE_SIZE).unwrap();

    let half = FIGURE_SIZE.0/2;
    for i in 0..2 {
        assert!(!pixels_with_color(&figure, palette_color(i), 0, half).is_empty(), "point {} missing", i+1);
        assert!(!pixels_with_color(&figure, palette_color(i), half, FIGURE_SIZE.0).is_empty(), "line {} missing", i+1);
    }
}

#[test]
fn test_line_keeps_image_row_orientation() {
    // y = 75 on a 100 px high image lies in the lower quarter
    let lines = vec!(EpipolarLine::new(0.0, 1.0, -75.0));
    let points = vec!(Point::<Float>::new(10.0, 10.0));
    let figure = render_epipolar_figure(&gray_image("one"), &gray_image("two"), &points, &lines, FIGURE_SIZE).unwrap();

    // a strip on the left of the second panel, clear of the legend
    let strip = pixels_with_color(&figure, palette_color(0), 370, 420);
    assert!(!strip.is_empty());
    assert!(strip.iter().all(|&(_, y)| y > FIGURE_SIZE.1/2), "line drawn in the upper half: {:?}", strip);
}

#[test]
fn test_line_outside_image_keeps_legend_entry() {
    let lines = vec!(EpipolarLine::new(0.0, 1.0, 500.0));
    let points = vec!(Point::<Float>::new(10.0, 10.0));
    let figure = render_epipolar_figure(&gray_image("one"), &gray_image("two"), &points, &lines, FIGURE_SIZE).unwrap();

    let half = FIGURE_SIZE.0/2;
    assert!(pixels_with_color(&figure, palette_color(0), 370, 420).is_empty());
    assert!(!pixels_with_color(&figure, palette_color(0), half, FIGURE_SIZE.0).is_empty());
}

#[test]
fn test_save_figure() {
    let dir = tempfile::tempdir().unwrap();
    let figure = RgbImage::from_pixel(4, 2, Rgb([1u8, 2, 3]));

    let path = dir.path().join("figure.png");
    save_figure(&figure, &path).unwrap();
    assert_eq!(image_rs::open(&path).unwrap().to_rgb8(), figure);

    let missing_dir = dir.path().join("missing").join("figure.png");
    match save_figure(&figure, &missing_dir) {
        Err(EpipolarError::FigureSave{path, ..}) => assert_eq!(path, missing_dir),
        other => panic!("expected FigureSave, got {:?}", other)
    }
}
