extern crate nalgebra as na;

use na::Vector3;
use serde::{Serialize, Deserialize};

use crate::Float;

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Point<T> where T: PartialOrd + PartialEq {
    pub x: T,
    pub y: T
}

impl<T> Point<T> where T: PartialOrd + PartialEq {
    pub fn new(x: T, y:T) -> Point<T> {
        Point{x,y}
    }
}

impl Point<Float> {
    pub fn to_homogeneous(&self) -> Vector3<Float> {
        Vector3::<Float>::new(self.x, self.y, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homogeneous_appends_one() {
        let p = Point::<Float>::new(12.5, -3.0);
        assert_eq!(p.to_homogeneous(), Vector3::new(12.5, -3.0, 1.0));
    }

    #[test]
    fn yaml_layout_is_x_y() {
        let p = Point::<Float>::new(1.0, 2.0);
        let s = serde_yaml::to_string(&p).unwrap();
        assert_eq!(s.trim(), "x: 1.0\ny: 2.0");
        let back: Point<Float> = serde_yaml::from_str(&s).unwrap();
        assert_eq!(back, p);
    }
}
