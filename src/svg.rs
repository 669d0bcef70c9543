//! SVG scene building and rasterization using resvg/usvg.
//!
//! Icons are drawn by emitting a small SVG document and rendering it with
//! resvg, so antialiasing and alpha compositing come from tiny-skia.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use palette::Srgba;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::fontdb::Database;
use resvg::usvg::{self, Options, Tree};

use crate::icon::RectPx;

// ============================================================================
// Scene
// ============================================================================

/// An SVG document under construction, one element per drawing call.
#[derive(Debug, Clone)]
pub struct Scene {
    size: u32,
    body: String,
}

/// Text run placed with its baseline start at (`x`, `y`).
#[derive(Debug, Clone, Copy)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub family: &'a str,
    pub font_size: u32,
    pub bold: bool,
    pub x: f32,
    pub y: f32,
}

impl Scene {
    /// Starts an empty, fully transparent `size x size` scene.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Fills the ellipse inscribed in `bounds`.
    ///
    /// With an outline, the stroke stays inside `bounds` and covers the
    /// outermost `width` pixels of the filled area.
    pub fn ellipse(&mut self, bounds: RectPx, fill: Srgba<u8>, outline: Option<(Srgba<u8>, u32)>) {
        if bounds.is_empty() {
            return;
        }

        let (cx, cy) = bounds.center();
        let mut rx = bounds.width as f32 / 2.0;
        let mut ry = bounds.height as f32 / 2.0;
        let mut stroke = String::new();

        if let Some((color, width)) = outline {
            let half = width as f32 / 2.0;
            rx = (rx - half).max(0.0);
            ry = (ry - half).max(0.0);
            stroke = format!(" {} stroke-width=\"{}\"", paint("stroke", color), width);
        }

        self.body.push_str(&format!(
            "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\" {}{stroke}/>\n",
            paint("fill", fill),
        ));
    }

    /// Fills `bounds` with pixel-aligned edges.
    pub fn rect(&mut self, bounds: RectPx, fill: Srgba<u8>) {
        if bounds.is_empty() {
            return;
        }

        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" shape-rendering=\"crispEdges\" {}/>\n",
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            paint("fill", fill),
        ));
    }

    pub fn text(&mut self, run: TextRun<'_>, fill: Srgba<u8>) {
        let weight = if run.bold { "bold" } else { "normal" };
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{weight}\" {}>{}</text>\n",
            run.x,
            run.y,
            escape_xml(&quote_family(run.family)),
            run.font_size,
            paint("fill", fill),
            escape_xml(run.text),
        ));
    }

    /// Returns the complete SVG document.
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{s}\" height=\"{s}\" viewBox=\"0 0 {s} {s}\">\n{}</svg>\n",
            self.body,
            s = self.size,
        )
    }

    /// Parses the scene, laying out text against `fonts`.
    pub fn parse(&self, fonts: &Arc<Database>) -> Result<Tree, usvg::Error> {
        let opts = Options {
            fontdb: Arc::clone(fonts),
            ..Options::default()
        };
        Tree::from_str(&self.to_svg(), &opts)
    }
}

/// Formats a color as an SVG paint attribute plus its opacity when translucent.
fn paint(attr: &str, color: Srgba<u8>) -> String {
    let hex = format!(
        "#{:02x}{:02x}{:02x}",
        color.color.red, color.color.green, color.color.blue
    );
    if color.alpha == u8::MAX {
        format!("{attr}=\"{hex}\"")
    } else {
        let opacity = f32::from(color.alpha) / 255.0;
        format!("{attr}=\"{hex}\" {attr}-opacity=\"{opacity}\"")
    }
}

/// Wraps a family name in a CSS string, using a quote the name does not contain.
fn quote_family(family: &str) -> String {
    if family.contains('\'') {
        format!("\"{family}\"")
    } else {
        format!("'{family}'")
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

// ============================================================================
// Rasterization
// ============================================================================

/// Renders a parsed tree onto a transparent `size x size` canvas at 1:1 scale.
///
/// Returns `None` for a zero-sized canvas.
pub fn rasterize(tree: &Tree, size: u32) -> Option<RgbaImage> {
    let mut pixmap = Pixmap::new(size, size)?;
    resvg::render(tree, Transform::identity(), &mut pixmap.as_mut());
    Some(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
///
/// tiny_skia stores premultiplied alpha; the image crate expects straight alpha.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}

// ============================================================================
// Tests
// ============================================================================
