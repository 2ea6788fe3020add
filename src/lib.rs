extern crate nalgebra as na;
extern crate image as image_rs;

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};

use self::error::EpipolarError;

pub mod error;
pub mod image;
pub mod io;
pub mod sfm;
pub mod selection;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub const DEFAULT_IMAGE_PATH_1: &str = "florence2.jpg";
pub const DEFAULT_IMAGE_PATH_2: &str = "florence3.jpg";
pub const DEFAULT_FIGURE_SIZE: [u32; 2] = [1200, 600];

pub const DEFAULT_FUNDAMENTAL: [[Float; 3]; 3] = [
    [3.03994528999160e-08, 2.65672654114295e-07, -0.000870550254997210],
    [4.67606901933558e-08, -1.11709498607089e-07, -0.00169128012255720],
    [-1.38310618285550e-06, 0.00140690091935593, 0.999997201170569]
];

/**
 * Inputs of a single run. Every field falls back to the defaults of the florence image pair.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConf {
    pub image_path_1: String,
    pub image_path_2: String,
    pub fundamental: Vec<Vec<Float>>,
    pub points_path: Option<String>,
    pub points_output_path: Option<String>,
    pub figure_output_path: Option<String>,
    pub figure_size: [u32; 2]
}

impl Default for RuntimeConf {
    fn default() -> RuntimeConf {
        RuntimeConf {
            image_path_1: DEFAULT_IMAGE_PATH_1.to_string(),
            image_path_2: DEFAULT_IMAGE_PATH_2.to_string(),
            fundamental: DEFAULT_FUNDAMENTAL.iter().map(|row| row.to_vec()).collect(),
            points_path: None,
            points_output_path: None,
            figure_output_path: None,
            figure_size: DEFAULT_FIGURE_SIZE
        }
    }
}

impl RuntimeConf {
    pub fn from_yaml(yaml: &str) -> Result<RuntimeConf, EpipolarError> {
        serde_yaml::from_str(yaml).map_err(|e| EpipolarError::Config(e.to_string()))
    }

    pub fn fundamental(&self) -> Result<sfm::epipolar::Fundamental, EpipolarError> {
        sfm::epipolar::fundamental_from_rows(&self.fundamental)
    }
}

pub fn load_runtime_conf(path: &Path) -> Result<RuntimeConf, EpipolarError> {
    let contents = fs::read_to_string(path).map_err(|e| EpipolarError::Config(format!("{}: {}", path.display(), e)))?;
    RuntimeConf::from_yaml(&contents)
}
