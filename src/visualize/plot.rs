extern crate plotters;
extern crate image as image_rs;

use std::path::Path;
use plotters::prelude::*;
use plotters::element::BitMapElement;
use plotters::coord::{Shift, types::RangedCoordf64};
use image_rs::{RgbImage, imageops::{self, FilterType}};

use crate::Float;
use crate::error::EpipolarError;
use crate::image::Image;
use crate::image::geometry::point::Point;
use crate::sfm::epipolar::EpipolarLine;
use crate::visualize::{Annotation, LineOverlay, marker_annotations, line_overlays};

type ImageChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const MARKER_RADIUS: i32 = 5;
const LINE_WIDTH: u32 = 2;

fn plot_error<E: std::fmt::Display>(e: E) -> EpipolarError {
    EpipolarError::Plot(e.to_string())
}

fn to_rgb(color: [u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

/**
 * Image rows grow downwards while chart y grows upwards.
 */
fn to_chart(point: &Point<Float>, image_height: Float) -> (Float, Float) {
    (point.x, image_height - point.y)
}

/**
 * Renders the two panel figure: image_one with the numbered points, image_two with the epipolar lines.
 * Point i and line i share the palette color i.
 */
pub fn render_epipolar_figure(image_one: &Image, image_two: &Image, points: &[Point<Float>], lines: &[EpipolarLine], (width, height): (u32, u32)) -> Result<RgbImage, EpipolarError> {
    let mut buffer = vec![0u8; (width as usize)*(height as usize)*3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;
        let panels = root.split_evenly((1, 2));

        draw_points_panel(&panels[0], image_one, &marker_annotations(points))?;
        draw_lines_panel(&panels[1], image_two, &line_overlays(lines, image_two.width() as Float, image_two.height() as Float))?;

        root.present().map_err(plot_error)?;
    }

    RgbImage::from_raw(width, height, buffer).ok_or_else(|| EpipolarError::Plot(format!("figure buffer does not match {}x{}", width, height)))
}

pub fn save_figure(figure: &RgbImage, path: &Path) -> Result<(), EpipolarError> {
    figure.save(path).map_err(|source| EpipolarError::FigureSave{path: path.to_path_buf(), source})?;
    log::info!("Saved figure to {}", path.display());
    Ok(())
}

/**
 * Caption of a panel, e.g. "Image 1 (florence2)".
 */
pub fn panel_title(title: &str, image: &Image) -> String {
    match &image.name {
        Some(name) => format!("{} ({})", title, name),
        None => title.to_string()
    }
}

fn image_chart<'a, DB: DrawingBackend>(area: &'a DrawingArea<DB, Shift>, image: &Image, title: &str) -> Result<ImageChart<'a, DB>, EpipolarError> {
    let image_width = image.width() as Float;
    let image_height = image.height() as Float;

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption(panel_title(title, image), ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 30)
        .build_cartesian_2d(0.0..image_width, 0.0..image_height).map_err(plot_error)?;

    let (plot_width, plot_height) = chart.plotting_area().dim_in_pixel();
    let scaled = imageops::resize(&image.buffer, plot_width.max(1), plot_height.max(1), FilterType::Triangle);
    let (scaled_width, scaled_height) = scaled.dimensions();
    let bitmap: BitMapElement<(Float, Float)> = BitMapElement::with_owned_buffer((0.0, image_height), (scaled_width, scaled_height), scaled.into_raw())
        .ok_or_else(|| EpipolarError::Plot(format!("could not place {} on the chart", title)))?;
    chart.draw_series(std::iter::once(bitmap)).map_err(plot_error)?;

    let flip_y = move |y: &Float| format!("{:.0}", image_height - y);
    chart
        .configure_mesh()
        .light_line_style(&WHITE.mix(0.2))
        .bold_line_style(&WHITE.mix(0.5))
        .y_label_formatter(&flip_y)
        .draw().map_err(plot_error)?;

    Ok(chart)
}

fn draw_points_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, image: &Image, annotations: &[Annotation]) -> Result<(), EpipolarError> {
    let image_height = image.height() as Float;
    let mut chart = image_chart(area, image, "Image 1")?;

    for annotation in annotations {
        let color = to_rgb(annotation.color);
        let position = to_chart(&annotation.position, image_height);
        let label_style = ("sans-serif", 15).into_font().color(&color);
        chart.draw_series(std::iter::once(
            EmptyElement::at(position)
            + Circle::new((0, 0), MARKER_RADIUS, color.filled())
            + Text::new(annotation.label.clone(), (MARKER_RADIUS + 2, -3*MARKER_RADIUS), label_style)
        )).map_err(plot_error)?
        .label(annotation.legend.as_str())
        .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, color.filled()));
    }

    if !annotations.is_empty() {
        chart.configure_series_labels().position(SeriesLabelPosition::UpperRight).background_style(&WHITE.mix(0.8)).border_style(&BLACK).draw().map_err(plot_error)?;
    }

    Ok(())
}

fn draw_lines_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, image: &Image, overlays: &[LineOverlay]) -> Result<(), EpipolarError> {
    let image_height = image.height() as Float;
    let mut chart = image_chart(area, image, "Image 2")?;

    for overlay in overlays {
        let color = to_rgb(overlay.color);
        let path = match overlay.segment {
            Some(segment) => vec!(to_chart(&segment.start, image_height), to_chart(&segment.end, image_height)),
            None => Vec::new()
        };
        chart.draw_series(LineSeries::new(path, color.stroke_width(LINE_WIDTH))).map_err(plot_error)?
        .label(overlay.legend.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH)));
    }

    if !overlays.is_empty() {
        chart.configure_series_labels().position(SeriesLabelPosition::UpperRight).background_style(&WHITE.mix(0.8)).border_style(&BLACK).draw().map_err(plot_error)?;
    }

    Ok(())
}
