//! Writes the launcher icons into an Android resource tree.
//!
//! For every density bucket the square and round variants are written as
//! `ic_launcher.png` and `ic_launcher_round.png`. A 512px reference copy of
//! the square icon is written last.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::ExportError;
use crate::render::{IconRenderer, IconVariant};

/// An Android density bucket and the launcher size it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityBucket {
    /// Resource folder name, e.g. `mipmap-hdpi`.
    pub folder: &'static str,
    /// Icon edge length in pixels.
    pub size: u32,
}

/// Density buckets in output order.
pub const DENSITY_BUCKETS: [DensityBucket; 5] = [
    DensityBucket { folder: "mipmap-mdpi", size: 48 },
    DensityBucket { folder: "mipmap-hdpi", size: 72 },
    DensityBucket { folder: "mipmap-xhdpi", size: 96 },
    DensityBucket { folder: "mipmap-xxhdpi", size: 144 },
    DensityBucket { folder: "mipmap-xxxhdpi", size: 192 },
];

/// Location of the resource tree relative to the project root.
pub const RES_DIR: [&str; 5] = ["android", "app", "src", "main", "res"];

pub const REFERENCE_FILE: &str = "businessgo_icon_512.png";
pub const REFERENCE_SIZE: u32 = 512;

/// File name used for a launcher variant inside a density folder.
pub fn launcher_file_name(variant: IconVariant) -> &'static str {
    match variant {
        IconVariant::Square => "ic_launcher.png",
        IconVariant::Round => "ic_launcher_round.png",
    }
}

/// A file produced by an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub path: PathBuf,
    pub size: u32,
    pub variant: IconVariant,
}

/// Everything an export run wrote, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: Vec<WrittenIcon>,
}

/// Where an export run writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    /// Directory holding the `mipmap-*` folders.
    pub res_dir: PathBuf,
    /// Destination of the 512px reference icon.
    pub reference_path: PathBuf,
    /// Create missing density folders instead of failing on them.
    pub create_dirs: bool,
}

impl ExportPlan {
    /// Plan for the project at `root`: resources under `android/app/src/main/res`,
    /// reference icon in the current directory, density folders must already exist.
    pub fn for_project(root: impl AsRef<Path>) -> Self {
        let res_dir = RES_DIR.iter().fold(root.as_ref().to_path_buf(), |dir, part| dir.join(part));
        Self {
            res_dir,
            reference_path: PathBuf::from(REFERENCE_FILE),
            create_dirs: false,
        }
    }

    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_path = path.into();
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Renders and writes every icon, reporting progress to `out`.
    ///
    /// Stops at the first failure; files already written are left in place.
    pub fn run<W: Write>(&self, renderer: &IconRenderer, out: &mut W) -> Result<ExportReport, ExportError> {
        let mut report = ExportReport::default();

        writeln!(out, "🎨 Creating BusinessGo App Icons...")?;

        for bucket in &DENSITY_BUCKETS {
            let folder = self.res_dir.join(bucket.folder);
            if self.create_dirs {
                fs::create_dir_all(&folder).map_err(|source| ExportError::CreateDir {
                    path: folder.clone(),
                    source,
                })?;
            }

            for variant in IconVariant::ALL {
                let file = launcher_file_name(variant);
                let path = folder.join(file);
                let icon = render(renderer, bucket.size, variant)?;
                write_png(&icon, &path)?;
                writeln!(
                    out,
                    "✅ Created {}/{} ({}x{})",
                    bucket.folder, file, bucket.size, bucket.size
                )?;
                report.written.push(WrittenIcon {
                    path,
                    size: bucket.size,
                    variant,
                });
            }
        }

        let reference = render(renderer, REFERENCE_SIZE, IconVariant::Square)?;
        write_png(&reference, &self.reference_path)?;
        writeln!(out, "✅ Created {REFERENCE_FILE} (reference)")?;
        report.written.push(WrittenIcon {
            path: self.reference_path.clone(),
            size: REFERENCE_SIZE,
            variant: IconVariant::Square,
        });

        write_summary(out)?;
        Ok(report)
    }
}

fn render(renderer: &IconRenderer, size: u32, variant: IconVariant) -> Result<RgbaImage, ExportError> {
    renderer
        .render(size, variant)
        .map_err(|source| ExportError::Render { size, source })
}

fn write_png(icon: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    icon.save_with_format(path, ImageFormat::Png)
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Prints the closing summary block.
pub fn write_summary<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🚀 All BusinessGo app icons created successfully!")?;
    writeln!(out, "📱 Your app will now show with a custom icon in the Android launcher.")?;
    writeln!(out)?;
    writeln!(out, "📝 Next steps:")?;
    writeln!(out, "1. Build and deploy the app to see the new icon")?;
    writeln!(out, "2. The icon features 'BG' monogram on a professional green background")?;
    writeln!(out, "3. Icons are optimized for all Android screen densities")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontLibrary;
    use crate::style::IconStyle;
    use tempfile::TempDir;

    fn renderer() -> IconRenderer {
        IconRenderer::new(IconStyle::businessgo(), FontLibrary::empty())
    }

    /// A project root with every density folder already present.
    fn project() -> (TempDir, ExportPlan) {
        let root = tempfile::tempdir().unwrap();
        let plan = ExportPlan::for_project(root.path())
            .with_reference_path(root.path().join(REFERENCE_FILE));
        for bucket in &DENSITY_BUCKETS {
            fs::create_dir_all(plan.res_dir.join(bucket.folder)).unwrap();
        }
        (root, plan)
    }

    #[test]
    fn plan_points_at_android_resources() {
        let plan = ExportPlan::for_project("/work/app");
        assert_eq!(plan.res_dir, PathBuf::from("/work/app/android/app/src/main/res"));
        assert_eq!(plan.reference_path, PathBuf::from(REFERENCE_FILE));
        assert!(!plan.create_dirs);
    }

    #[test]
    fn exports_all_icons() {
        let (_root, plan) = project();
        let mut out = Vec::new();
        let report = plan.run(&renderer(), &mut out).unwrap();

        assert_eq!(report.written.len(), 11);
        for bucket in &DENSITY_BUCKETS {
            for variant in IconVariant::ALL {
                let path = plan.res_dir.join(bucket.folder).join(launcher_file_name(variant));
                let img = image::open(&path).unwrap();
                assert_eq!(img.width(), bucket.size);
                assert_eq!(img.height(), bucket.size);
                assert_eq!(img.color(), image::ColorType::Rgba8);
            }
        }

        let reference = image::open(&plan.reference_path).unwrap();
        assert_eq!((reference.width(), reference.height()), (512, 512));
    }

    #[test]
    fn progress_lines_follow_table_order() {
        let (_root, plan) = project();
        let mut out = Vec::new();
        plan.run(&renderer(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let created: Vec<&str> = text.lines().filter(|l| l.starts_with("✅ Created")).collect();
        assert_eq!(created.len(), 11);
        assert_eq!(created[0], "✅ Created mipmap-mdpi/ic_launcher.png (48x48)");
        assert_eq!(created[1], "✅ Created mipmap-mdpi/ic_launcher_round.png (48x48)");
        assert_eq!(created[9], "✅ Created mipmap-xxxhdpi/ic_launcher_round.png (192x192)");
        assert_eq!(created[10], "✅ Created businessgo_icon_512.png (reference)");

        assert!(text.starts_with("🎨 Creating BusinessGo App Icons..."));
        assert!(text.contains("🚀 All BusinessGo app icons created successfully!"));
        assert!(text.ends_with("3. Icons are optimized for all Android screen densities\n"));
    }

    #[test]
    fn missing_folder_aborts_after_earlier_buckets() {
        let root = tempfile::tempdir().unwrap();
        let plan = ExportPlan::for_project(root.path())
            .with_reference_path(root.path().join(REFERENCE_FILE));
        let mdpi = plan.res_dir.join("mipmap-mdpi");
        fs::create_dir_all(&mdpi).unwrap();

        let mut out = Vec::new();
        let err = plan.run(&renderer(), &mut out).unwrap_err();
        match err {
            ExportError::Write { path, .. } => {
                assert_eq!(path, plan.res_dir.join("mipmap-hdpi").join("ic_launcher.png"));
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(mdpi.join("ic_launcher.png").is_file());
        assert!(mdpi.join("ic_launcher_round.png").is_file());
        assert!(!plan.res_dir.join("mipmap-hdpi").exists());
        assert!(!plan.reference_path.exists());

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("✅")).count(), 2);
        assert!(!text.contains("🚀"));
    }

    #[test]
    fn create_dirs_builds_missing_folders() {
        let root = tempfile::tempdir().unwrap();
        let plan = ExportPlan::for_project(root.path())
            .with_reference_path(root.path().join(REFERENCE_FILE))
            .with_create_dirs(true);

        let report = plan.run(&renderer(), &mut std::io::sink()).unwrap();
        assert_eq!(report.written.len(), 11);
        assert!(plan.res_dir.join("mipmap-xxxhdpi/ic_launcher_round.png").is_file());
    }

    #[test]
    fn written_round_icon_keeps_transparent_corners() {
        let (_root, plan) = project();
        plan.run(&renderer(), &mut std::io::sink()).unwrap();

        let path = plan.res_dir.join("mipmap-xhdpi").join("ic_launcher_round.png");
        let img = image::open(path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(48, 48)[3], 255);
    }
}
