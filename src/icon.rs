//! Pixel geometry for icon primitives.
//!
//! Every shape in the icon is described by the box it is inscribed in,
//! mirroring how raster drawing APIs take an ellipse or rectangle as a
//! bounding box rather than a centre and radii.

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the canvas
    pub x: u32,
    /// Y offset from the top edge of the canvas
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The box left after insetting a `size x size` canvas by `inset` on all sides.
    ///
    /// Collapses to an empty box at the centre when the inset eats the canvas.
    pub fn inset_square(size: u32, inset: u32) -> Self {
        if inset.saturating_mul(2) >= size {
            return Self::new(size / 2, size / 2, 0, 0);
        }
        let side = size - inset * 2;
        Self::new(inset, inset, side, side)
    }

    /// A `width x height` box centred on a `size x size` canvas.
    pub fn centered(size: u32, width: u32, height: u32) -> Self {
        let width = width.min(size);
        let height = height.min(size);
        Self::new((size - width) / 2, (size - height) / 2, width, height)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Centre point in canvas coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_px_new() {
        let rect = RectPx::new(10, 20, 100, 200);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 220);
        assert_eq!(rect.center(), (60.0, 120.0));
    }

    #[test]
    fn inset_square_shrinks_evenly() {
        let rect = RectPx::inset_square(96, 4);
        assert_eq!(rect, RectPx::new(4, 4, 88, 88));
        assert_eq!(rect.center(), (48.0, 48.0));
    }

    #[test]
    fn inset_square_never_underflows() {
        let rect = RectPx::inset_square(3, 5);
        assert!(rect.is_empty());
        assert_eq!(rect, RectPx::new(1, 1, 0, 0));
    }

    #[test]
    fn inset_square_collapses_when_inset_meets_centre() {
        assert_eq!(RectPx::inset_square(3, 1), RectPx::new(1, 1, 1, 1));
        assert!(RectPx::inset_square(4, 2).is_empty());
        assert!(RectPx::inset_square(5, 3).is_empty());
    }

    #[test]
    fn centered_box() {
        let rect = RectPx::centered(48, 24, 12);
        assert_eq!(rect, RectPx::new(12, 18, 24, 12));
        assert_eq!((rect.right(), rect.bottom()), (36, 30));
    }
}
