//! Circular alpha mask for the round launcher variant.

use image::{GrayImage, Luma, RgbaImage};

/// Builds a hard-edged mask: 255 for pixels whose centre lies inside the
/// circle inscribed in a `size x size` square, 0 elsewhere.
pub fn circular_mask(size: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        if inside_inscribed_circle(x, y, size) {
            Luma([u8::MAX])
        } else {
            Luma([0])
        }
    })
}

/// Replaces the alpha channel of `image` with `mask`.
///
/// Prior alpha is discarded, so transparent pixels inside the mask become
/// opaque with whatever color they carried.
pub fn put_alpha(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());
    for (pixel, alpha) in image.pixels_mut().zip(mask.pixels()) {
        pixel[3] = alpha[0];
    }
}

/// Returns true if the centre of pixel (x, y) is within the inscribed circle.
pub fn inside_inscribed_circle(x: u32, y: u32, size: u32) -> bool {
    let r = f64::from(size) / 2.0;
    let dx = f64::from(x) + 0.5 - r;
    let dy = f64::from(y) + 0.5 - r;
    dx * dx + dy * dy <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn mask_corners_are_clear() {
        let mask = circular_mask(48);
        for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47)] {
            assert_eq!(mask.get_pixel(x, y)[0], 0, "corner ({x}, {y})");
        }
        assert_eq!(mask.get_pixel(24, 24)[0], 255);
    }

    #[test]
    fn mask_reaches_edge_midpoints() {
        let mask = circular_mask(48);
        assert_eq!(mask.get_pixel(24, 0)[0], 255);
        assert_eq!(mask.get_pixel(0, 24)[0], 255);
        assert_eq!(mask.get_pixel(47, 23)[0], 255);
    }

    #[test]
    fn mask_is_symmetric() {
        let size = 72;
        let mask = circular_mask(size);
        for y in 0..size {
            for x in 0..size {
                let v = mask.get_pixel(x, y)[0];
                assert_eq!(v, mask.get_pixel(size - 1 - x, y)[0]);
                assert_eq!(v, mask.get_pixel(x, size - 1 - y)[0]);
            }
        }
    }

    #[test]
    fn put_alpha_replaces_prior_alpha() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        let mut mask = GrayImage::new(4, 4);
        mask.put_pixel(1, 1, Luma([200]));
        put_alpha(&mut img, &mask);

        assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 200]);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
    }
}
