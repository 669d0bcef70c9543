//! businessgo-icons: launcher icon generator for the BusinessGo Android app.
//!
//! The icon is drawn procedurally (concentric discs, a "BG" monogram and a
//! highlight) at any pixel size, then exported into the Android `mipmap-*`
//! density folders in square and round variants.
//!
//! # Example
//!
//! ```no_run
//! use businessgo_icons::{ExportPlan, IconRenderer};
//!
//! let renderer = IconRenderer::with_system_fonts();
//! let plan = ExportPlan::for_project(".");
//! let report = plan.run(&renderer, &mut std::io::stdout())?;
//! assert_eq!(report.written.len(), 11);
//! # Ok::<(), businessgo_icons::ExportError>(())
//! ```
//!
//! # Rendering a single size
//!
//! ```no_run
//! use businessgo_icons::{FontLibrary, IconRenderer, IconStyle, IconVariant};
//!
//! let renderer = IconRenderer::new(IconStyle::businessgo(), FontLibrary::system());
//! let icon = renderer.render(144, IconVariant::Round)?;
//! icon.save("ic_launcher_round.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod export;
mod font;
mod icon;
mod mask;
mod render;
mod style;
mod svg;

pub use error::{ExportError, RenderError};
pub use export::{
    DENSITY_BUCKETS, DensityBucket, ExportPlan, ExportReport, REFERENCE_FILE, REFERENCE_SIZE,
    RES_DIR, WrittenIcon, launcher_file_name, write_summary,
};
pub use font::{FontChoice, FontLibrary, LOCAL_FONT_FILE};
pub use icon::RectPx;
pub use mask::{circular_mask, inside_inscribed_circle, put_alpha};
pub use render::{IconRenderer, IconVariant};
pub use style::{IconMetrics, IconStyle, PREFERRED_FONT_FAMILY};
