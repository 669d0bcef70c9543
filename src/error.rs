//! Error types for rendering and exporting icons.

use std::io;
use std::path::PathBuf;

use resvg::usvg;
use thiserror::Error;

/// Errors produced while rendering a single icon.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A zero-pixel canvas was requested.
    #[error("icon size must be at least 1 pixel")]
    ZeroSize,

    /// The generated scene could not be parsed.
    #[error("failed to build icon scene: {0}")]
    Scene(#[from] usvg::Error),
}

/// Errors that abort an export run.
///
/// The first error stops the run. Files written before it stay on disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render {size}x{size} icon")]
    Render {
        size: u32,
        #[source]
        source: RenderError,
    },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write progress output")]
    Console(#[from] io::Error),
}
