extern crate image as image_rs;

use image_rs::{DynamicImage, RgbImage};

use crate::Float;

pub mod geometry;

#[derive(Debug,Clone)]
pub struct Image {
    pub buffer: RgbImage,
    pub name: Option<String>
}

impl Image {

    pub fn from_dynamic_image(image: DynamicImage, name: Option<String>) -> Image {
        Image{ buffer: image.to_rgb8(), name }
    }

    pub fn from_rgb_image(buffer: RgbImage, name: Option<String>) -> Image {
        Image{ buffer, name }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /**
     * True if the (sub)pixel position lies on the image. The right and bottom border are exclusive.
     */
    pub fn contains(&self, x: Float, y: Float) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width() as Float && y < self.height() as Float
    }

    pub fn as_rgb_bytes(&self) -> &[u8] {
        self.buffer.as_raw()
    }

}
