extern crate nalgebra as na;

use na::{DMatrix, Matrix3, Vector3};

use crate::Float;
use crate::error::EpipolarError;
use crate::image::geometry::{point::Point, line::LineSegment};

pub type Fundamental = Matrix3<Float>;

/**
 * The line a*x + b*y + c = 0 in the second image.
 */
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct EpipolarLine {
    pub a: Float,
    pub b: Float,
    pub c: Float
}

impl EpipolarLine {
    pub fn new(a: Float, b: Float, c: Float) -> EpipolarLine {
        EpipolarLine{a, b, c}
    }

    pub fn from_vector(v: &Vector3<Float>) -> EpipolarLine {
        EpipolarLine::new(v[0], v[1], v[2])
    }

    pub fn as_vector(&self) -> Vector3<Float> {
        Vector3::<Float>::new(self.a, self.b, self.c)
    }

    pub fn evaluate(&self, x: Float, y: Float) -> Float {
        self.a*x + self.b*y + self.c
    }

    /// y = -(a*x + c)/b. Not finite for vertical lines.
    pub fn y_at(&self, x: Float) -> Float {
        -(self.a*x + self.c)/self.b
    }

    pub fn is_vertical(&self) -> bool {
        self.b == 0.0
    }

    pub fn segment_across(&self, x_min: Float, x_max: Float) -> LineSegment {
        LineSegment::new(Point::new(x_min, self.y_at(x_min)), Point::new(x_max, self.y_at(x_max)))
    }
}

pub fn fundamental_from_rows(rows: &[Vec<Float>]) -> Result<Fundamental, EpipolarError> {
    let cols = rows.iter().map(|r| r.len()).find(|&len| len != 3).unwrap_or(3);
    if rows.len() != 3 || cols != 3 {
        return Err(EpipolarError::MatrixDimension{rows: rows.len(), cols});
    }
    Ok(Fundamental::from_fn(|r, c| rows[r][c]))
}

pub fn fundamental_from_matrix(matrix: &DMatrix<Float>) -> Result<Fundamental, EpipolarError> {
    match matrix.shape() {
        (3, 3) => Ok(matrix.fixed_view::<3, 3>(0, 0).into_owned()),
        (rows, cols) => Err(EpipolarError::MatrixDimension{rows, cols})
    }
}

/**
 * Maps every point (x,y) of the first image through F*(x,y,1)^T.
 * line[i] belongs to points[i].
 */
pub fn epipolar_lines(fundamental: &Fundamental, points: &[Point<Float>]) -> Vec<EpipolarLine> {
    points.iter().map(|p| EpipolarLine::from_vector(&(fundamental*p.to_homogeneous()))).collect()
}

/**
 * Same as epipolar_lines but for points stored as the rows of an Nx2 matrix.
 */
pub fn epipolar_lines_from_matrix(fundamental: &Fundamental, points: &DMatrix<Float>) -> Result<Vec<EpipolarLine>, EpipolarError> {
    if points.ncols() != 2 {
        return Err(EpipolarError::MatrixDimension{rows: points.nrows(), cols: points.ncols()});
    }
    let point_list = points.row_iter().map(|r| Point::new(r[0], r[1])).collect::<Vec<Point<Float>>>();
    Ok(epipolar_lines(fundamental, &point_list))
}
