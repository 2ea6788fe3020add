use crate::Float;
use crate::image::geometry::{point::Point, line::LineSegment};
use crate::sfm::epipolar::EpipolarLine;

pub mod plot;
pub mod window;

/// tab10, the default color cycle C0..C9.
pub const PALETTE: [[u8; 3]; 10] = [
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
    [148, 103, 189],
    [140, 86, 75],
    [227, 119, 194],
    [127, 127, 127],
    [188, 189, 34],
    [23, 190, 207]
];

pub fn palette_color(index: usize) -> [u8; 3] {
    PALETTE[index % PALETTE.len()]
}

/**
 * A selected point as it appears in the first panel.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct Annotation {
    pub label: String,
    pub legend: String,
    pub position: Point<Float>,
    pub color: [u8; 3]
}

/**
 * An epipolar line as it appears in the second panel, clipped to the image.
 * The segment is None if the line has no finite endpoints or does not cross the image; the legend is kept either way.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct LineOverlay {
    pub legend: String,
    pub segment: Option<LineSegment>,
    pub color: [u8; 3]
}

pub fn marker_annotations(points: &[Point<Float>]) -> Vec<Annotation> {
    points.iter().enumerate().map(|(i, p)| Annotation {
        label: format!("{}", i+1),
        legend: format!("Point {}", i+1),
        position: *p,
        color: palette_color(i)
    }).collect()
}

/**
 * Evaluates every line at x = 0 and x = image_width and clips the segment to the image.
 */
pub fn line_overlays(lines: &[EpipolarLine], image_width: Float, image_height: Float) -> Vec<LineOverlay> {
    lines.iter().enumerate().map(|(i, line)| {
        let segment = line.segment_across(0.0, image_width);
        let segment = match (segment.is_finite(), segment.clip_to_box(image_width, image_height)) {
            (false, _) => {
                log::warn!("Epipolar line {} ({}, {}, {}) is vertical and is not drawn", i+1, line.a, line.b, line.c);
                None
            },
            (true, None) => {
                log::warn!("Epipolar line {} ({}, {}, {}) does not cross image 2", i+1, line.a, line.b, line.c);
                None
            },
            (true, clipped) => clipped
        };
        LineOverlay {
            legend: format!("Epipolar Line {}", i+1),
            segment,
            color: palette_color(i)
        }
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_after_ten() {
        assert_eq!(palette_color(0), palette_color(10));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn vertical_line_has_no_segment_but_keeps_its_index() {
        let lines = vec!(EpipolarLine::new(1.0, 0.0, -3.0), EpipolarLine::new(0.0, 1.0, -3.0));
        let overlays = line_overlays(&lines, 20.0, 10.0);
        assert_eq!(overlays.len(), 2);
        assert!(overlays[0].segment.is_none());
        assert_eq!(overlays[1].legend, "Epipolar Line 2");
        assert_eq!(overlays[1].color, palette_color(1));
        let segment = overlays[1].segment.unwrap();
        assert_eq!(segment.start, Point::new(0.0, 3.0));
        assert_eq!(segment.end, Point::new(20.0, 3.0));
    }

    #[test]
    fn line_outside_the_image_keeps_its_legend() {
        let lines = vec!(EpipolarLine::new(0.0, 1.0, 500.0));
        let overlays = line_overlays(&lines, 200.0, 100.0);
        assert_eq!(overlays.len(), 1);
        assert!(overlays[0].segment.is_none());
        assert_eq!(overlays[0].legend, "Epipolar Line 1");
        assert_eq!(overlays[0].color, palette_color(0));
    }

    #[test]
    fn steep_line_is_clipped_to_the_image() {
        // y = 2x
        let lines = vec!(EpipolarLine::new(2.0, -1.0, 0.0));
        let segment = line_overlays(&lines, 100.0, 50.0)[0].segment.unwrap();
        assert_eq!(segment.start, Point::new(0.0, 0.0));
        assert_eq!(segment.end, Point::new(25.0, 50.0));
    }
}
