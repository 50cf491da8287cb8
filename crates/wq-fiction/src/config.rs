//! Configuration for a game session.

use std::path::{Path, PathBuf};

/// Default file for explicit `save`/`load` commands.
pub const DEFAULT_SAVE_PATH: &str = "save.json";
/// Default file written on `quit` and read back on start.
pub const DEFAULT_AUTOSAVE_PATH: &str = "autosave.json";

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// File used by `save` and `load` when no path is given.
    pub save_path: PathBuf,
    /// File written on `quit` and cleared on `restart`. `None` disables autosave.
    pub autosave_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            autosave_path: Some(PathBuf::from(DEFAULT_AUTOSAVE_PATH)),
        }
    }
}

impl SessionConfig {
    /// Set the default save file.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the autosave file.
    pub fn with_autosave_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.autosave_path = Some(path.into());
        self
    }

    /// Disable autosave, e.g. for embedded front-ends that persist on their own.
    pub fn without_autosave(mut self) -> Self {
        self.autosave_path = None;
        self
    }

    /// The autosave file, if enabled.
    pub fn autosave(&self) -> Option<&Path> {
        self.autosave_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.save_path, PathBuf::from("save.json"));
        assert_eq!(cfg.autosave(), Some(Path::new("autosave.json")));
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_save_path("slot1.json")
            .with_autosave_path("auto.json");
        assert_eq!(cfg.save_path, PathBuf::from("slot1.json"));
        assert_eq!(cfg.autosave(), Some(Path::new("auto.json")));

        let cfg = cfg.without_autosave();
        assert_eq!(cfg.autosave(), None);
    }
}
