extern crate image as image_rs;

use std::cell::RefCell;
use std::rc::Rc;
use eframe::egui;
use image_rs::RgbImage;

use crate::Float;
use crate::error::EpipolarError;
use crate::image::Image;
use crate::image::geometry::point::Point;
use crate::selection::{PointSource, PointAccumulator};

const MARKER_HALF_SIZE: f32 = 6.0;

fn window_error(e: eframe::Error) -> EpipolarError {
    EpipolarError::Window(e.to_string())
}

fn native_options(title: &str, width: u32, height: u32) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([width as f32 + 20.0, height as f32 + 50.0]),
        ..Default::default()
    }
}

fn color_image(buffer: &RgbImage) -> egui::ColorImage {
    egui::ColorImage::from_rgb([buffer.width() as usize, buffer.height() as usize], buffer.as_raw())
}

/**
 * Maps a screen position inside the widget rect to image pixel coordinates.
 */
pub fn screen_to_image(pos: egui::Pos2, rect: egui::Rect, width: u32, height: u32) -> Point<Float> {
    let x = ((pos.x - rect.min.x)/rect.width()) as Float * width as Float;
    let y = ((pos.y - rect.min.y)/rect.height()) as Float * height as Float;
    Point::new(x, y)
}

pub fn image_to_screen(point: &Point<Float>, rect: egui::Rect, width: u32, height: u32) -> egui::Pos2 {
    let x = rect.min.x + (point.x/width as Float) as f32 * rect.width();
    let y = rect.min.y + (point.y/height as Float) as f32 * rect.height();
    egui::pos2(x, y)
}

fn draw_cross(painter: &egui::Painter, center: egui::Pos2) {
    let stroke = egui::Stroke::new(2.0, egui::Color32::RED);
    let d = MARKER_HALF_SIZE;
    painter.line_segment([center + egui::vec2(-d, -d), center + egui::vec2(d, d)], stroke);
    painter.line_segment([center + egui::vec2(-d, d), center + egui::vec2(d, -d)], stroke);
}

struct ClickSelectorApp {
    image: egui::ColorImage,
    width: u32,
    height: u32,
    texture: Option<egui::TextureHandle>,
    accumulator: Rc<RefCell<PointAccumulator>>
}

impl eframe::App for ClickSelectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.texture.get_or_insert_with(|| ctx.load_texture("selection", self.image.clone(), egui::TextureOptions::default())).clone();
        let (width, height) = (self.width, self.height);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("Select points on the image. Close the window when done. Selected: {}", self.accumulator.borrow().len()));
            egui::ScrollArea::both().show(ui, |ui| {
                let response = ui.add(egui::Image::new(&texture).fit_to_original_size(1.0).sense(egui::Sense::click()));
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let point = screen_to_image(pos, response.rect, width, height);
                        self.accumulator.borrow_mut().push(point.x, point.y);
                    }
                }

                let painter = ui.painter_at(response.rect);
                for point in self.accumulator.borrow().points() {
                    draw_cross(&painter, image_to_screen(point, response.rect, width, height));
                }
            });
        });
    }
}

/**
 * Shows an image and collects a point per left click until the window is closed.
 */
pub struct ClickSelector {
    pub image: Image,
    pub title: String
}

impl ClickSelector {
    pub fn new(image: Image, title: &str) -> ClickSelector {
        ClickSelector{image, title: title.to_string()}
    }
}

impl PointSource for ClickSelector {
    fn points(&mut self) -> Result<Vec<Point<Float>>, EpipolarError> {
        let (width, height) = (self.image.width(), self.image.height());
        let accumulator = Rc::new(RefCell::new(PointAccumulator::new(width, height)));
        let app = ClickSelectorApp {
            image: color_image(&self.image.buffer),
            width,
            height,
            texture: None,
            accumulator: Rc::clone(&accumulator)
        };

        log::info!("Select points on the image. Close the window when done.");
        eframe::run_native(&self.title, native_options(&self.title, width, height), Box::new(move |_cc| Ok(Box::new(app)))).map_err(window_error)?;

        let points = accumulator.borrow().points().to_vec();
        Ok(points)
    }
}

struct FigureApp {
    figure: egui::ColorImage,
    texture: Option<egui::TextureHandle>
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.texture.get_or_insert_with(|| ctx.load_texture("figure", self.figure.clone(), egui::TextureOptions::default())).clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.add(egui::Image::new(&texture).fit_to_original_size(1.0));
            });
        });
    }
}

/**
 * Blocks until the window is closed.
 */
pub fn show_figure(figure: &RgbImage, title: &str) -> Result<(), EpipolarError> {
    let app = FigureApp{figure: color_image(figure), texture: None};
    eframe::run_native(title, native_options(title, figure.width(), figure.height()), Box::new(move |_cc| Ok(Box::new(app)))).map_err(window_error)
}
