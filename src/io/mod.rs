extern crate image as image_rs;

use std::fs;
use std::path::Path;

use crate::Float;
use crate::error::EpipolarError;
use crate::image::Image;
use crate::image::geometry::point::Point;

/**
 * Decodes the image at file_path into 8-bit RGB. Fails with ImageNotFound if there is no file.
 */
pub fn load_image(file_path: &Path) -> Result<Image, EpipolarError> {
    if !file_path.exists() {
        return Err(EpipolarError::ImageNotFound(file_path.to_path_buf()));
    }

    let dynamic_image = image_rs::open(file_path).map_err(|source| EpipolarError::ImageDecode{path: file_path.to_path_buf(), source})?;
    let name = file_path.file_stem().map(|s| s.to_string_lossy().into_owned());
    let image = Image::from_dynamic_image(dynamic_image, name);
    log::info!("Loaded {} ({}x{})", file_path.display(), image.width(), image.height());
    Ok(image)
}

pub fn load_points(file_path: &Path) -> Result<Vec<Point<Float>>, EpipolarError> {
    let contents = fs::read_to_string(file_path).map_err(|e| point_file_error(file_path, e))?;
    serde_yaml::from_str(&contents).map_err(|e| point_file_error(file_path, e))
}

pub fn write_points(points: &[Point<Float>], file_path: &Path) -> Result<(), EpipolarError> {
    let serialized = serde_yaml::to_string(points).map_err(|e| point_file_error(file_path, e))?;
    fs::write(file_path, serialized).map_err(|e| point_file_error(file_path, e))
}

fn point_file_error<E: std::fmt::Display>(file_path: &Path, e: E) -> EpipolarError {
    EpipolarError::PointFile{path: file_path.to_path_buf(), reason: e.to_string()}
}
