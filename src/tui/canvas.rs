//! Half-block rasteriser behind the guide's [`Canvas`].
//!
//! Every terminal cell holds two virtual pixels stacked vertically, drawn
//! with `▀` (foreground is the upper pixel, background the lower one). A
//! pixel is covered by a shape when its centre lies inside it; shapes thinner
//! than a pixel still get one so separators and time lines never vanish.
//!
//! Text lives in a separate per-cell layer and is measured in whole cells
//! whatever its font size. An opaque fill covering part of a cell erases the
//! text in it, so blocks painted later hide earlier labels as they would on a
//! pixel surface.

use crate::render::{gradient_alpha, text, Canvas, DrawingRect, GradientStop, Image, Paint, TextAlign, TextStyle};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use std::ops::Range;

const UPPER_HALF: char = '▀';

type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    color: Rgb,
    bold: bool,
}

#[derive(Debug, Clone)]
pub struct TerminalCanvas {
    cols: u16,
    rows: u16,
    cell_width: f64,
    cell_height: f64,
    /// `cols × rows * 2`, row-major.
    pixels: Vec<Rgb>,
    /// `cols × rows`, row-major.
    glyphs: Vec<Option<Glyph>>,
}

impl TerminalCanvas {
    /// A black canvas of `cols × rows` cells, each `cell_width × cell_height`
    /// virtual pixels.
    pub fn new(cols: u16, rows: u16, cell_width: f64, cell_height: f64) -> Self {
        let cells = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
            pixels: vec![(0, 0, 0); cells * 2],
            glyphs: vec![None; cells],
        }
    }

    fn pixel_height(&self) -> f64 {
        self.cell_height / 2.0
    }

    fn pixel_rows(&self) -> usize {
        self.rows as usize * 2
    }

    fn columns(&self, left: f64, right: f64) -> Range<usize> {
        pixel_span(left, right, self.cell_width, self.cols as usize)
    }

    fn pixel_range(&self, top: f64, bottom: f64) -> Range<usize> {
        pixel_span(top, bottom, self.pixel_height(), self.pixel_rows())
    }

    fn blend_pixel(&mut self, x: usize, y: usize, color: Rgb, alpha: f32) {
        let index = y * self.cols as usize + x;
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = blend(*pixel, color, alpha);
        }
    }

    fn clear_glyph(&mut self, x: usize, pixel_y: usize) {
        let index = (pixel_y / 2) * self.cols as usize + x;
        if let Some(glyph) = self.glyphs.get_mut(index) {
            *glyph = None;
        }
    }

    fn fill_pixels(&mut self, rect: DrawingRect, paint: Paint) {
        let color = rgb(paint.color);
        let columns = self.columns(rect.left, rect.right);
        let rows = self.pixel_range(rect.top, rect.bottom);
        for y in rows {
            for x in columns.clone() {
                self.blend_pixel(x, y, color, paint.alpha);
                if paint.is_opaque() {
                    self.clear_glyph(x, y);
                }
            }
        }
    }

    /// Copy the canvas into `buf`, starting at the top-left corner of `area`.
    pub fn flush(&self, buf: &mut Buffer, area: Rect) {
        let cols = self.cols.min(area.width);
        let rows = self.rows.min(area.height);
        for row in 0..rows {
            for col in 0..cols {
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                let top = self.pixels[(row as usize * 2) * self.cols as usize + col as usize];
                let bottom = self.pixels[(row as usize * 2 + 1) * self.cols as usize + col as usize];
                cell.reset();
                match self.glyphs[row as usize * self.cols as usize + col as usize] {
                    Some(glyph) => {
                        cell.set_char(glyph.ch).set_fg(to_color(glyph.color)).set_bg(to_color(top));
                        if glyph.bold {
                            cell.modifier.insert(Modifier::BOLD);
                        }
                    }
                    None => {
                        cell.set_char(UPPER_HALF).set_fg(to_color(top)).set_bg(to_color(bottom));
                    }
                }
            }
        }
    }
}

impl Canvas for TerminalCanvas {
    fn size(&self) -> (f64, f64) {
        (
            self.cols as f64 * self.cell_width,
            self.rows as f64 * self.cell_height,
        )
    }

    fn fill_rect(&mut self, rect: DrawingRect, paint: Paint) {
        self.fill_pixels(rect, paint);
    }

    fn fill_gradient_h(&mut self, rect: DrawingRect, color: Color, stops: &[GradientStop]) {
        let width = rect.width();
        if width <= 0.0 {
            return;
        }
        let color = rgb(color);
        let rows = self.pixel_range(rect.top, rect.bottom);
        for x in self.columns(rect.left, rect.right) {
            let centre = (x as f64 + 0.5) * self.cell_width;
            let alpha = gradient_alpha(stops, ((centre - rect.left) / width).clamp(0.0, 1.0));
            for y in rows.clone() {
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
        let half = width / 2.0;
        if from.0 == to.0 || from.1 == to.1 {
            let rect = if from.0 == to.0 {
                DrawingRect::new(from.0 - half, from.1.min(to.1), from.0 + half, from.1.max(to.1))
            } else {
                DrawingRect::new(from.0.min(to.0), from.1 - half, from.0.max(to.0), from.1 + half)
            };
            self.fill_pixels(rect, Paint::solid(color));
            return;
        }
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = (dx.abs() / self.cell_width)
            .max(dy.abs() / self.pixel_height())
            .ceil()
            .max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let (x, y) = (from.0 + dx * t, from.1 + dy * t);
            self.fill_pixels(
                DrawingRect::new(x - half, y - half, x + half, y + half),
                Paint::solid(color),
            );
        }
    }

    fn fill_text(&mut self, label: &str, x: f64, y: f64, style: &TextStyle) {
        if y < 0.0 {
            return;
        }
        let row = (y / self.cell_height).floor() as usize;
        if row >= self.rows as usize {
            return;
        }
        let label = match style.max_width {
            Some(max_width) => text::clip_to_width(label, max_width, |s| self.measure_text(s, style)),
            None => label.to_string(),
        };
        let len = label.chars().count() as f64;
        let anchor = x / self.cell_width;
        let start = match style.align {
            TextAlign::Left => anchor.round(),
            TextAlign::Center => (anchor - len / 2.0).round(),
            TextAlign::Right => (anchor - len).round(),
        } as i64;
        let color = rgb(style.color);
        for (i, ch) in label.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 || col >= self.cols as i64 {
                continue;
            }
            self.glyphs[row * self.cols as usize + col as usize] = Some(Glyph {
                ch,
                color,
                bold: style.bold,
            });
        }
    }

    fn measure_text(&self, label: &str, _style: &TextStyle) -> f64 {
        label.chars().count() as f64 * self.cell_width
    }

    fn draw_image(&mut self, image: &Image, rect: DrawingRect) {
        let (width, height) = (rect.width(), rect.height());
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let rows = self.pixel_range(rect.top, rect.bottom);
        for x in self.columns(rect.left, rect.right) {
            let u = ((x as f64 + 0.5) * self.cell_width - rect.left) / width;
            for y in rows.clone() {
                let v = ((y as f64 + 0.5) * self.pixel_height() - rect.top) / height;
                if let Some(color) = image.sample(u, v) {
                    self.blend_pixel(x, y, rgb(color), 1.0);
                    self.clear_glyph(x, y);
                }
            }
        }
    }
}

/// Pixels whose centres lie in `[lo, hi)`, at least one for a non-empty span.
fn pixel_span(lo: f64, hi: f64, step: f64, limit: usize) -> Range<usize> {
    if hi <= lo || limit == 0 {
        return 0..0;
    }
    let mut start = (lo / step - 0.5).ceil();
    let mut end = (hi / step - 0.5).ceil();
    if end <= start {
        start = ((lo + hi) / 2.0 / step).floor();
        end = start + 1.0;
    }
    let clamp = |v: f64| v.clamp(0.0, limit as f64) as usize;
    clamp(start)..clamp(end)
}

fn blend(dst: Rgb, src: Rgb, alpha: f32) -> Rgb {
    if alpha >= 1.0 {
        return src;
    }
    let mix = |d: u8, s: u8| (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8;
    (mix(dst.0, src.0), mix(dst.1, src.1), mix(dst.2, src.2))
}

fn to_color((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// RGB value of a theme colour. Named colours use the xterm defaults.
fn rgb(color: Color) -> Rgb {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black | Color::Reset => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Indexed(_) => (128, 128, 128),
    }
}
