pub use kurbo::{Point, Rect};

/// Output image size in pixels.
///
/// The document coordinate space equals this size, so rasterization is 1:1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas of `width x height` pixels.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a float, for layout math.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float, for layout math.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Full-canvas rectangle in document space.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }

    /// Height reserved at the top for the host device's clock widget.
    ///
    /// `clock_fraction` is the device's clock share of the height; a fixed 5% clearance is added.
    pub fn clock_space(self, clock_fraction: f64) -> f64 {
        self.h() * (clock_fraction + 0.05)
    }
}
