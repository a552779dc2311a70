//! Scratch rectangle used while painting.

/// Axis-aligned rectangle in surface pixels.
///
/// A draw pass keeps one of these and repositions it for every element it
/// paints. It carries no ownership and is never stored between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawingRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DrawingRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from an origin and a size.
    pub fn from_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal centre.
    pub fn center(&self) -> f64 {
        self.left + self.width() / 2.0
    }

    /// Vertical centre.
    pub fn middle(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Shrink by `amount` on every side.
    pub fn inset(self, amount: f64) -> Self {
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    /// Overlap of two rectangles, `None` when they do not intersect.
    pub fn intersection(&self, other: &DrawingRect) -> Option<DrawingRect> {
        let rect = Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        (!rect.is_empty()).then_some(rect)
    }

    /// Place an image of `image_width × image_height` inside this rect,
    /// padded by `padding`, scaled to fit both axes and centred.
    pub fn fit_image(self, image_width: f64, image_height: f64, padding: f64) -> Self {
        let rect = self.inset(padding);
        if image_width <= 0.0 || image_height <= 0.0 || rect.is_empty() {
            return rect;
        }
        let scale = (rect.width() / image_width).min(rect.height() / image_height);
        let width = (image_width * scale).round().min(rect.width());
        let height = (image_height * scale).round().min(rect.height());
        let left = rect.left + ((rect.width() - width) / 2.0).floor();
        let top = rect.top + ((rect.height() - height) / 2.0).floor();
        Self::from_size(left, top, width, height)
    }
}
