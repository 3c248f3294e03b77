//! Display preferences.
//!
//! An explicit object with a load / apply / persist lifecycle. Nothing in
//! this crate reads a theme global: callers load once at startup, apply the
//! stored category selection to their view, and honor `theme` in whatever
//! does the rendering.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EventKind, Theme};
use crate::view::TimelineView;

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Preferences I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed preferences file: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: Theme,
    pub visible_kinds: Vec<EventKind>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            visible_kinds: EventKind::ALL.to_vec(),
        }
    }
}

impl Preferences {
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// A missing file is the first-run case and silently yields defaults.
    /// An unreadable or malformed file gets a warning, never an error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(PrefsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring unreadable preferences"
                );
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads from the standard location under the app data directory.
    pub fn load_user() -> Self {
        Self::load_or_default(&crate::config::preferences_path())
    }

    /// Persists to the standard location under the app data directory.
    pub fn save_user(&self) -> Result<(), PrefsError> {
        self.save(&crate::config::preferences_path())
    }

    /// Injects the stored category selection into a view. The theme is the
    /// caller's to honor; this crate does not render.
    pub fn apply(&self, view: &mut TimelineView) {
        view.set_selected_kinds(self.visible_kinds.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = test_dir();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = Preferences {
            theme: Theme::Dark,
            visible_kinds: vec![EventKind::Appointment, EventKind::Labs],
        };
        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn stored_form_is_camel_case_json() {
        let dir = test_dir();
        let path = dir.path().join("preferences.json");
        let prefs = Preferences {
            theme: Theme::Dark,
            ..Default::default()
        };
        prefs.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"visibleKinds\""));
        assert!(text.contains("\"dark\""));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = test_dir();
        let prefs = Preferences::load_or_default(&dir.path().join("absent.json"));
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.visible_kinds.len(), EventKind::ALL.len());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = test_dir();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
        assert!(Preferences::load(&path).is_err());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = test_dir();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{\"theme\": \"dark\"}").unwrap();
        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.visible_kinds.len(), EventKind::ALL.len());
    }

    #[test]
    fn apply_sets_the_view_selection() {
        let prefs = Preferences {
            theme: Theme::Light,
            visible_kinds: vec![EventKind::Vitals],
        };
        let mut view = TimelineView::new();
        prefs.apply(&mut view);
        assert_eq!(view.selected_kinds(), [EventKind::Vitals]);
    }
}
