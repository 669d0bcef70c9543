use std::path::PathBuf;

use businessgo_icons::{ExportError, ExportPlan, IconRenderer};
use clap::Parser;

/// Generates the BusinessGo launcher icons for every Android density.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Project root containing `android/app/src/main/res`.
    #[arg(long, default_value = env!("CARGO_MANIFEST_DIR"))]
    project_root: PathBuf,

    /// Create missing `mipmap-*` folders instead of failing.
    #[arg(long)]
    create_dirs: bool,
}

fn main() -> Result<(), ExportError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("exporting into {}", cli.project_root.display());

    let renderer = IconRenderer::with_system_fonts();
    if renderer.fonts().is_empty() {
        log::warn!("no fonts installed, the monogram will be drawn as a rectangle");
    }
    let plan = ExportPlan::for_project(&cli.project_root).with_create_dirs(cli.create_dirs);
    plan.run(&renderer, &mut std::io::stdout().lock())?;
    Ok(())
}
