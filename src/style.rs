//! Palette and proportional layout of the launcher icon.
//!
//! Every dimension is an integer fraction of the target size so that each
//! density bucket gets the same design, snapped to whole pixels.

use palette::{Srgb, Srgba};

use crate::icon::RectPx;

/// Family requested for the monogram before any fallback.
pub const PREFERRED_FONT_FAMILY: &str = "Arial";

/// Colors and text of the icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// Fill of the outer disc and the centre disc.
    pub background: Srgb<u8>,
    /// Outline of the outer disc and the visible ring.
    pub accent: Srgb<u8>,
    /// Monogram and rectangle fallback.
    pub text: Srgb<u8>,
    /// Drop shadow under the monogram.
    pub shadow: Srgba<u8>,
    /// Highlight ellipse near the top.
    pub highlight: Srgba<u8>,
    pub monogram: String,
    pub font_family: String,
}

impl IconStyle {
    /// The BusinessGo palette: professional green on lighter green with a white "BG".
    pub fn businessgo() -> Self {
        Self {
            background: Srgb::new(0x2E, 0x7D, 0x32),
            accent: Srgb::new(0x4C, 0xAF, 0x50),
            text: Srgb::new(0xFF, 0xFF, 0xFF),
            shadow: Srgba::new(0, 0, 0, 100),
            highlight: Srgba::new(255, 255, 255, 30),
            monogram: "BG".to_string(),
            font_family: PREFERRED_FONT_FAMILY.to_string(),
        }
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        Self::businessgo()
    }
}

/// Integer dimensions of every icon element for one target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMetrics {
    pub size: u32,
    /// Inset of the outer disc.
    pub padding: u32,
    /// Stroke width of the outer disc outline.
    pub outline_width: u32,
    /// Inset of the accent disc.
    pub inner_padding: u32,
    /// Inset of the centre disc.
    pub main_padding: u32,
    pub font_size: u32,
    /// Down-right offset of the monogram shadow.
    pub shadow_offset: u32,
    /// Upward bias applied to the vertically centred monogram.
    pub text_lift: u32,
    pub highlight_width: u32,
    pub highlight_height: u32,
    pub highlight_top: u32,
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl IconMetrics {
    pub fn for_size(size: u32) -> Self {
        let highlight_width = size / 3;
        Self {
            size,
            padding: size / 20,
            outline_width: (size / 50).max(1),
            inner_padding: size / 8,
            main_padding: size / 6,
            font_size: size / 3,
            shadow_offset: (size / 100).max(1),
            text_lift: size / 20,
            highlight_width,
            highlight_height: highlight_width / 3,
            highlight_top: size / 4,
            fallback_width: size / 2,
            fallback_height: size / 4,
        }
    }

    pub fn outer_disc(&self) -> RectPx {
        RectPx::inset_square(self.size, self.padding)
    }

    pub fn accent_disc(&self) -> RectPx {
        RectPx::inset_square(self.size, self.inner_padding)
    }

    pub fn center_disc(&self) -> RectPx {
        RectPx::inset_square(self.size, self.main_padding)
    }

    /// Box of the highlight ellipse: horizontally centred, top edge at `highlight_top`.
    pub fn highlight(&self) -> RectPx {
        let x = (self.size / 2).saturating_sub(self.highlight_width / 2);
        RectPx::new(x, self.highlight_top, self.highlight_width, self.highlight_height)
    }

    /// Rectangle drawn in place of the monogram when no font resolves.
    pub fn fallback_glyph(&self) -> RectPx {
        RectPx::centered(self.size, self.fallback_width, self.fallback_height)
    }

    /// Top-left corner for a monogram whose ink box is `width x height`.
    pub fn text_origin(&self, width: u32, height: u32) -> (i64, i64) {
        let size = i64::from(self.size);
        let x = (size - i64::from(width)) / 2;
        let y = (size - i64::from(height)) / 2 - i64::from(self.text_lift);
        (x, y)
    }
}
