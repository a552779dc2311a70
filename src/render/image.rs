//! Decoded channel logos and the cache they are looked up in.

use ratatui::style::Color;
use std::collections::HashMap;

/// A decoded bitmap, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// `None` unless `pixels` holds exactly `width × height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize && width > 0 && height > 0).then_some(
            Self {
                width,
                height,
                pixels,
            },
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Nearest-neighbour sample at relative coordinates in `[0, 1)`.
    pub fn sample(&self, u: f64, v: f64) -> Option<Color> {
        let x = (u.clamp(0.0, 1.0) * self.width as f64) as u32;
        let y = (v.clamp(0.0, 1.0) * self.height as f64) as u32;
        self.pixel(x.min(self.width - 1), y.min(self.height - 1))
    }
}

/// Synchronous logo lookup. Decoding happens elsewhere; a miss means the
/// renderer falls back to the channel name.
pub trait ImageCache {
    fn get(&self, key: &str) -> Option<&Image>;
}

impl ImageCache for HashMap<String, Image> {
    fn get(&self, key: &str) -> Option<&Image> {
        HashMap::get(self, key)
    }
}

/// Cache that never has an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageCache for NoImages {
    fn get(&self, _key: &str) -> Option<&Image> {
        None
    }
}
