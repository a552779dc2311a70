//! A canvas that records draw calls for assertions.

use super::{Canvas, DrawingRect, GradientStop, Image, Paint, TextStyle};
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect(DrawingRect, Paint),
    Gradient(DrawingRect, Color, Vec<GradientStop>),
    Line((f64, f64), (f64, f64), f64, Color),
    Text(String, f64, f64, TextStyle),
    Image(u32, u32, DrawingRect),
}

/// Text is measured at half its font size per character.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn text(&self, wanted: &str) -> Option<(f64, f64, &TextStyle)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text(text, x, y, style) if text == wanted => Some((*x, *y, style)),
            _ => None,
        })
    }

    /// Opaque rectangles filled with `color`, in paint order.
    pub fn rects_with(&self, color: Color) -> Vec<DrawingRect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect(rect, paint) if paint.color == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Index of the first op matching `pred`.
    pub fn position(&self, pred: impl Fn(&DrawOp) -> bool) -> Option<usize> {
        self.ops.iter().position(pred)
    }
}

impl Canvas for DisplayList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: DrawingRect, paint: Paint) {
        self.ops.push(DrawOp::Rect(rect, paint));
    }

    fn fill_gradient_h(&mut self, rect: DrawingRect, color: Color, stops: &[GradientStop]) {
        self.ops.push(DrawOp::Gradient(rect, color, stops.to_vec()));
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
        self.ops.push(DrawOp::Line(from, to, width, color));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.ops.push(DrawOp::Text(text.to_string(), x, y, *style));
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().count() as f64 * style.size / 2.0
    }

    fn draw_image(&mut self, image: &Image, rect: DrawingRect) {
        self.ops
            .push(DrawOp::Image(image.width(), image.height(), rect));
    }
}
