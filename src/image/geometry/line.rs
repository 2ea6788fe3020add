use crate::image::geometry::point::Point;
use crate::Float;

/**
 * Straight segment between two image positions. Endpoints may be non-finite when
 * they were solved from a degenerate line equation.
 */
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LineSegment {
    pub start: Point<Float>,
    pub end: Point<Float>
}

impl LineSegment {
    pub fn new(start: Point<Float>, end: Point<Float>) -> LineSegment {
        LineSegment{start, end}
    }

    pub fn is_finite(&self) -> bool {
        self.start.x.is_finite() && self.start.y.is_finite() && self.end.x.is_finite() && self.end.y.is_finite()
    }

    // https://en.wikipedia.org/wiki/Liang%E2%80%93Barsky_algorithm
    pub fn clip_to_box(&self, x_max: Float, y_max: Float) -> Option<LineSegment> {
        if !self.is_finite() {
            return None;
        }

        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let mut t_enter: Float = 0.0;
        let mut t_exit: Float = 1.0;

        let boundaries = [
            (-dx, self.start.x),
            (dx, x_max - self.start.x),
            (-dy, self.start.y),
            (dy, y_max - self.start.y)
        ];

        for (p, q) in boundaries {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q/p;
            if p < 0.0 {
                if r > t_exit {
                    return None;
                }
                t_enter = t_enter.max(r);
            } else {
                if r < t_enter {
                    return None;
                }
                t_exit = t_exit.min(r);
            }
        }

        Some(LineSegment::new(
            Point::new(self.start.x + t_enter*dx, self.start.y + t_enter*dy),
            Point::new(self.start.x + t_exit*dx, self.start.y + t_exit*dy)
        ))
    }
}
