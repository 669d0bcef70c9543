//! The icon renderer.
//!
//! Layers, back to front:
//!
//! 1. Outer disc in the background color with an accent outline
//! 2. Accent disc, leaving a ring once the centre is repainted
//! 3. Centre disc in the background color
//! 4. Monogram with a drop shadow, or a white rectangle when no font resolves
//! 5. Translucent highlight ellipse near the top
//!
//! The round variant renders the same image and then replaces its alpha
//! channel with a circular mask.

use image::RgbaImage;
use palette::WithAlpha;
use resvg::usvg::{Group, Node, Rect};

use crate::error::RenderError;
use crate::font::{FontChoice, FontLibrary};
use crate::mask::{circular_mask, put_alpha};
use crate::style::{IconMetrics, IconStyle};
use crate::svg::{Scene, TextRun, rasterize};

/// Which launcher shape to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Full square canvas.
    Square,
    /// Square canvas masked to its inscribed circle.
    Round,
}

impl IconVariant {
    pub const ALL: [IconVariant; 2] = [IconVariant::Square, IconVariant::Round];
}

/// Renders the launcher icon at arbitrary pixel sizes.
///
/// Each call builds its image from scratch; nothing is shared between calls
/// except the read-only font library.
///
/// # Example
///
/// ```no_run
/// use businessgo_icons::{FontLibrary, IconRenderer, IconStyle};
///
/// let renderer = IconRenderer::new(IconStyle::businessgo(), FontLibrary::system());
/// let icon = renderer.render_round(96).unwrap();
/// assert_eq!(icon.dimensions(), (96, 96));
/// ```
#[derive(Debug, Clone)]
pub struct IconRenderer {
    style: IconStyle,
    fonts: FontLibrary,
}

impl IconRenderer {
    pub fn new(style: IconStyle, fonts: FontLibrary) -> Self {
        Self { style, fonts }
    }

    /// The BusinessGo icon using the platform's installed fonts.
    pub fn with_system_fonts() -> Self {
        Self::new(IconStyle::businessgo(), FontLibrary::system())
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    pub fn render(&self, size: u32, variant: IconVariant) -> Result<RgbaImage, RenderError> {
        match variant {
            IconVariant::Square => self.render_square(size),
            IconVariant::Round => self.render_round(size),
        }
    }

    /// Renders the unmasked `size x size` icon.
    pub fn render_square(&self, size: u32) -> Result<RgbaImage, RenderError> {
        if size == 0 {
            return Err(RenderError::ZeroSize);
        }

        let metrics = IconMetrics::for_size(size);
        let background = self.style.background.with_alpha(u8::MAX);
        let accent = self.style.accent.with_alpha(u8::MAX);

        let mut scene = Scene::new(size);
        scene.ellipse(metrics.outer_disc(), background, Some((accent, metrics.outline_width)));
        scene.ellipse(metrics.accent_disc(), accent, None);
        scene.ellipse(metrics.center_disc(), background, None);
        self.paint_monogram(&mut scene, &metrics)?;
        scene.ellipse(metrics.highlight(), self.style.highlight, None);

        let tree = scene.parse(&self.fonts.database())?;
        rasterize(&tree, size).ok_or(RenderError::ZeroSize)
    }

    /// Renders the square icon and masks it to its inscribed circle.
    pub fn render_round(&self, size: u32) -> Result<RgbaImage, RenderError> {
        let mut icon = self.render_square(size)?;
        put_alpha(&mut icon, &circular_mask(size));
        Ok(icon)
    }

    fn paint_monogram(&self, scene: &mut Scene, metrics: &IconMetrics) -> Result<(), RenderError> {
        let text_color = self.style.text.with_alpha(u8::MAX);

        let Some(layout) = self.layout_monogram(metrics)? else {
            scene.rect(metrics.fallback_glyph(), text_color);
            return Ok(());
        };

        let run = TextRun {
            text: &self.style.monogram,
            family: &layout.family,
            font_size: metrics.font_size,
            bold: layout.bold,
            x: layout.pen_x,
            y: layout.pen_y,
        };
        let offset = metrics.shadow_offset as f32;

        scene.text(
            TextRun {
                x: run.x + offset,
                y: run.y + offset,
                ..run
            },
            self.style.shadow,
        );
        scene.text(run, text_color);
        Ok(())
    }

    /// Resolves the font and positions the monogram, or `None` when the
    /// rectangle fallback must be drawn instead.
    fn layout_monogram(&self, metrics: &IconMetrics) -> Result<Option<MonogramLayout>, RenderError> {
        let choice = self.fonts.resolve(&self.style.font_family);
        let Some(family) = choice.family() else {
            return Ok(None);
        };

        let run = TextRun {
            text: &self.style.monogram,
            family,
            font_size: metrics.font_size,
            bold: matches!(choice, FontChoice::Preferred { .. }),
            x: 0.0,
            y: 0.0,
        };

        let Some(ink) = self.measure(run, metrics.size)? else {
            log::warn!("font {family:?} produced no outlines for {:?}", self.style.monogram);
            return Ok(None);
        };

        let width = ink.width().ceil() as u32;
        let height = ink.height().ceil() as u32;
        let (left, top) = metrics.text_origin(width, height);

        // Shift the pen so the ink box, not the baseline origin, lands on (left, top).
        Ok(Some(MonogramLayout {
            family: family.to_string(),
            bold: run.bold,
            width,
            height,
            left,
            top,
            pen_x: left as f32 - ink.x(),
            pen_y: top as f32 - ink.y(),
        }))
    }

    /// Lays out `run` alone and returns its ink bounds, or `None` if nothing was drawn.
    fn measure(&self, run: TextRun<'_>, size: u32) -> Result<Option<Rect>, RenderError> {
        let mut layout = Scene::new(size);
        layout.text(run, self.style.text.with_alpha(u8::MAX));

        let tree = layout.parse(&self.fonts.database())?;
        Ok(ink_bounds(tree.root()).filter(|b| b.width() > 0.0 && b.height() > 0.0))
    }
}

/// Where the monogram goes for one icon size.
#[derive(Debug, Clone, PartialEq)]
struct MonogramLayout {
    family: String,
    bold: bool,
    /// Ink box dimensions, rounded up to whole pixels.
    width: u32,
    height: u32,
    /// Top-left corner of the ink box.
    left: i64,
    top: i64,
    /// Baseline start that puts the ink box at (`left`, `top`).
    pen_x: f32,
    pen_y: f32,
}

/// Union of the glyph outlines under `group`.
///
/// Text nodes report their layout box (ascent to descent, full advance), so
/// the flattened outlines are measured instead.
fn ink_bounds(group: &Group) -> Option<Rect> {
    group
        .children()
        .iter()
        .filter_map(|node| match node {
            Node::Text(text) => ink_bounds(text.flattened()),
            Node::Group(group) => ink_bounds(group),
            Node::Path(path) => Some(path.bounding_box()),
            Node::Image(_) => None,
        })
        .reduce(|a, b| {
            Rect::from_ltrb(
                a.left().min(b.left()),
                a.top().min(b.top()),
                a.right().max(b.right()),
                a.bottom().max(b.bottom()),
            )
            .unwrap_or(a)
        })
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::with_system_fonts()
    }
}
