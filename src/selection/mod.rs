use std::path::PathBuf;

use crate::Float;
use crate::error::EpipolarError;
use crate::image::geometry::point::Point;
use crate::io::load_points;

/**
 * Produces the ordered points of the first image. Order is the click order and pairs point i with line i.
 */
pub trait PointSource {
    fn points(&mut self) -> Result<Vec<Point<Float>>, EpipolarError>;
}

/**
 * Collects clicked points that fall inside a width x height image.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct PointAccumulator {
    width: Float,
    height: Float,
    points: Vec<Point<Float>>
}

impl PointAccumulator {
    pub fn new(width: u32, height: u32) -> PointAccumulator {
        PointAccumulator{width: width as Float, height: height as Float, points: Vec::new()}
    }

    /// Returns false and leaves the accumulator untouched if (x,y) is off the image.
    pub fn push(&mut self, x: Float, y: Float) -> bool {
        let inside = x >= 0.0 && y >= 0.0 && x < self.width && y < self.height;
        if inside {
            log::debug!("Point {}: ({:.2},{:.2})", self.points.len()+1, x, y);
            self.points.push(Point::new(x, y));
        } else {
            log::debug!("Ignoring click outside of image at ({:.2},{:.2})", x, y);
        }
        inside
    }

    pub fn points(&self) -> &[Point<Float>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point<Float>> {
        self.points
    }
}

#[derive(Debug,Clone)]
pub struct FixedPoints {
    pub points: Vec<Point<Float>>
}

impl FixedPoints {
    pub fn new(points: Vec<Point<Float>>) -> FixedPoints {
        FixedPoints{points}
    }
}

impl PointSource for FixedPoints {
    fn points(&mut self) -> Result<Vec<Point<Float>>, EpipolarError> {
        Ok(self.points.clone())
    }
}

/**
 * Points stored as a yaml list of {x, y}.
 */
#[derive(Debug,Clone)]
pub struct PointFile {
    pub path: PathBuf
}

impl PointFile {
    pub fn new(path: PathBuf) -> PointFile {
        PointFile{path}
    }
}

impl PointSource for PointFile {
    fn points(&mut self) -> Result<Vec<Point<Float>>, EpipolarError> {
        load_points(&self.path)
    }
}
