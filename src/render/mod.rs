//! # Render Module
//!
//! Paints the guide onto an abstract pixel surface.
//!
//! ## Overview
//!
//! [`GridRenderer`] performs a full repaint of the guide every time it is
//! asked to, reading the mounted [`GuideView`](crate::guide::GuideView) and
//! the shared [`GuideData`](crate::model::GuideData). It draws through the
//! [`Canvas`] trait so the same pipeline can target the terminal
//! (`tui::TerminalCanvas`) or a recording canvas in tests.
//!
//! Coordinates are surface pixels with the origin at the top-left corner.
//! Text is anchored on its vertical centre.

#[cfg(test)]
pub(crate) mod display_list;
mod grid;
mod image;
mod rect;
pub mod text;
mod theme;

pub use grid::{GridRenderer, LOADING_TEXT};
pub use image::{Image, ImageCache, NoImages};
pub use rect::DrawingRect;
pub use text::TimeFormat;
pub use theme::Theme;

use ratatui::style::Color;

/// Fill colour with an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub alpha: f32,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    pub fn translucent(color: Color, alpha: f32) -> Self {
        Self {
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

/// Opacity at a relative horizontal offset of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub alpha: f32,
}

impl GradientStop {
    pub const fn new(offset: f64, alpha: f32) -> Self {
        Self { offset, alpha }
    }
}

/// Opacity at `t ∈ [0, 1]` along `stops` (sorted by offset).
pub fn gradient_alpha(stops: &[GradientStop], t: f64) -> f32 {
    let Some(first) = stops.first() else {
        return 1.0;
    };
    if t <= first.offset {
        return first.alpha;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.alpha;
            }
            let f = ((t - a.offset) / span) as f32;
            return a.alpha + (b.alpha - a.alpha) * f;
        }
    }
    stops.last().map_or(1.0, |s| s.alpha)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in surface pixels.
    pub size: f64,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
    /// Text wider than this is clipped by the canvas.
    pub max_width: Option<f64>,
}

impl TextStyle {
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            bold: false,
            color,
            align: TextAlign::Left,
            max_width: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// A pixel surface the guide can be painted on.
pub trait Canvas {
    /// Surface size in pixels.
    fn size(&self) -> (f64, f64);

    fn fill_rect(&mut self, rect: DrawingRect, paint: Paint);

    /// Fill `rect` with `color`, its opacity varying left to right.
    fn fill_gradient_h(&mut self, rect: DrawingRect, color: Color, stops: &[GradientStop]);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);

    /// Draw a single line of text anchored at `(x, y)`; `y` is the vertical centre.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Advance width of `text` in this canvas' metrics.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64;

    /// Scale `image` into `rect`.
    fn draw_image(&mut self, image: &Image, rect: DrawingRect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_alpha_interpolates() {
        let stops = [
            GradientStop::new(0.0, 0.4),
            GradientStop::new(0.3, 0.9),
            GradientStop::new(0.7, 0.9),
            GradientStop::new(1.0, 0.4),
        ];
        assert_eq!(gradient_alpha(&stops, 0.0), 0.4);
        assert!((gradient_alpha(&stops, 0.15) - 0.65).abs() < 1e-6);
        assert_eq!(gradient_alpha(&stops, 0.5), 0.9);
        assert_eq!(gradient_alpha(&stops, 1.0), 0.4);
        assert_eq!(gradient_alpha(&stops, 2.0), 0.4);
    }

    #[test]
    fn test_gradient_alpha_without_stops() {
        assert_eq!(gradient_alpha(&[], 0.5), 1.0);
    }

    #[test]
    fn test_paint_clamps_alpha() {
        assert_eq!(Paint::translucent(Color::Red, 3.0).alpha, 1.0);
        assert!(Paint::solid(Color::Red).is_opaque());
        assert!(!Paint::translucent(Color::Red, 0.2).is_opaque());
    }
}
