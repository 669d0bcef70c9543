//! Font lookup for the monogram.
//!
//! Resolution is an ordered chain of attempts that stops at the first hit:
//! the bold face of the preferred family, then whatever the platform offers
//! as its default face, then nothing at all. The renderer turns
//! [`FontChoice::Unavailable`] into a plain rectangle.

use std::path::Path;
use std::sync::Arc;

use resvg::usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};

/// File checked in the working directory before falling back to installed fonts.
pub const LOCAL_FONT_FILE: &str = "arial.ttf";

/// Outcome of resolving the monogram font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    /// The preferred family was found.
    Preferred { family: String },
    /// The preferred family is missing; a platform default face is used.
    Default { family: String },
    /// No face could be resolved.
    Unavailable,
}

impl FontChoice {
    /// Family name to hand to the text layout, if any.
    pub fn family(&self) -> Option<&str> {
        match self {
            Self::Preferred { family } | Self::Default { family } => Some(family),
            Self::Unavailable => None,
        }
    }
}

/// A shared font database used both for resolution and for text layout.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    db: Arc<Database>,
}

impl FontLibrary {
    /// Loads the platform fonts plus `arial.ttf` from the working directory if present.
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();

        let local = Path::new(LOCAL_FONT_FILE);
        if local.is_file() {
            if let Err(err) = db.load_font_file(local) {
                log::warn!("ignoring {}: {}", local.display(), err);
            }
        }

        log::debug!("font database holds {} faces", db.len());
        Self::from_database(db)
    }

    /// A library with no faces. Every resolution yields [`FontChoice::Unavailable`].
    pub fn empty() -> Self {
        Self::from_database(Database::new())
    }

    pub fn from_database(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }

    /// The underlying database, for text layout.
    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.db)
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Resolves the monogram font, trying `family` in bold first.
    pub fn resolve(&self, family: &str) -> FontChoice {
        if let Some(found) = self.preferred_face(family) {
            log::debug!("monogram font: {found}");
            return FontChoice::Preferred { family: found };
        }

        if let Some(found) = self.default_face() {
            log::info!("font family {family:?} not found, using {found:?}");
            return FontChoice::Default { family: found };
        }

        log::warn!("no usable font face, drawing monogram fallback shape");
        FontChoice::Unavailable
    }

    fn preferred_face(&self, family: &str) -> Option<String> {
        let families = [Family::Name(family)];
        self.query(&families, Weight::BOLD)
    }

    fn default_face(&self) -> Option<String> {
        let families = [Family::SansSerif];
        self.query(&families, Weight::NORMAL).or_else(|| {
            self.db
                .faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        })
    }

    fn query(&self, families: &[Family<'_>], weight: Weight) -> Option<String> {
        let id = self.db.query(&Query {
            families,
            weight,
            stretch: Stretch::Normal,
            style: Style::Normal,
        })?;
        let face = self.db.face(id)?;
        face.families.first().map(|(name, _)| name.clone())
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_library_resolves_nothing() {
        let fonts = FontLibrary::empty();
        assert!(fonts.is_empty());

        let choice = fonts.resolve("Arial");
        assert_eq!(choice, FontChoice::Unavailable);
        assert!(choice.family().is_none());
    }

    #[test]
    fn choice_exposes_family() {
        let preferred = FontChoice::Preferred { family: "Arial".into() };
        let fallback = FontChoice::Default { family: "DejaVu Sans".into() };
        assert_eq!(preferred.family(), Some("Arial"));
        assert_eq!(fallback.family(), Some("DejaVu Sans"));
    }

    #[test]
    fn system_library_falls_back_when_family_is_missing() {
        let fonts = FontLibrary::system();
        let choice = fonts.resolve("No Such Family 7f3a");
        if fonts.is_empty() {
            assert_eq!(choice, FontChoice::Unavailable);
        } else {
            assert!(matches!(choice, FontChoice::Default { .. }));
        }
    }
}
