use std::path::PathBuf;

use anyhow::Context;
use gigarelay_engine::AtomicFileWriter;
use relay_logging::{relay_info, relay_warn};
use serde::{Deserialize, Serialize};

const PREFERENCES_FILENAME: &str = "preferences.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
struct Preferences {
    #[serde(default)]
    locale: Option<String>,
}

/// The one persisted key-value pair: the chosen locale code.
#[derive(Debug, Clone)]
pub(crate) struct PreferenceStore {
    writer: AtomicFileWriter,
}

impl PreferenceStore {
    pub(crate) fn new(state_dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(state_dir),
        }
    }

    /// Unreadable or malformed files count as "no preference".
    pub(crate) fn load_locale(&self) -> Option<String> {
        self.load().locale
    }

    /// Last write wins.
    pub(crate) fn save_locale(&self, code: &str) -> anyhow::Result<()> {
        let mut preferences = self.load();
        preferences.locale = Some(code.to_string());

        let content = ron::ser::to_string_pretty(&preferences, ron::ser::PrettyConfig::new())
            .context("serialize preferences")?;
        let path = self
            .writer
            .write(PREFERENCES_FILENAME, &content)
            .with_context(|| format!("write preferences to {:?}", self.writer.dir()))?;
        relay_info!("Saved locale preference {} to {:?}", code, path);
        Ok(())
    }

    fn load(&self) -> Preferences {
        let content = match self.writer.read(PREFERENCES_FILENAME) {
            Ok(Some(text)) => text,
            Ok(None) => return Preferences::default(),
            Err(err) => {
                relay_warn!("Failed to read preferences from {:?}: {}", self.writer.dir(), err);
                return Preferences::default();
            }
        };
        match ron::from_str(&content) {
            Ok(preferences) => preferences,
            Err(err) => {
                relay_warn!("Failed to parse preferences: {}", err);
                Preferences::default()
            }
        }
    }
}
