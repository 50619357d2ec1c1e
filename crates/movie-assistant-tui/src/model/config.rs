use std::path::PathBuf;

use movie_assistant_core::config_file::{self, ConfigFile, DisplayConfig};

pub const THEME_NAMES: &[&str] = &["hacker", "modern"];

/// Display settings that can be changed at runtime and saved back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub theme_name: String,
    pub fps: u32,
    /// Changed since the last save.
    pub dirty: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            theme_name: "hacker".to_string(),
            fps: 10,
            dirty: false,
        }
    }
}

impl DisplayState {
    /// Only sets values that are `Some` in the file config.
    pub fn apply_file(&mut self, file_cfg: &ConfigFile) {
        if let Some(disp) = &file_cfg.display {
            if let Some(ref theme) = disp.theme {
                self.set_theme(theme);
            }
            if let Some(fps) = disp.fps {
                self.fps = fps.clamp(1, 60);
            }
        }
    }

    /// Switch to `name` if it is a known theme. Returns false (and keeps the
    /// current theme) otherwise.
    pub fn set_theme(&mut self, name: &str) -> bool {
        if !THEME_NAMES.contains(&name) {
            return false;
        }
        self.theme_name = name.to_string();
        true
    }

    /// Theme that follows `theme_name` in [`THEME_NAMES`].
    pub fn next_theme_name(&self) -> &'static str {
        let pos = THEME_NAMES
            .iter()
            .position(|&n| n == self.theme_name)
            .unwrap_or(0);
        THEME_NAMES[(pos + 1) % THEME_NAMES.len()]
    }

    /// Write the display section into `base`, leaving other sections alone.
    pub fn merge_into(&self, mut base: ConfigFile) -> ConfigFile {
        base.display = Some(DisplayConfig {
            theme: Some(self.theme_name.clone()),
            fps: Some(self.fps),
        });
        base
    }

    /// Save display settings to the platform config file.
    pub fn save(&self) -> Result<PathBuf, String> {
        let base = config_file::config_path()
            .and_then(|p| config_file::load_from_path(&p))
            .unwrap_or_default();
        config_file::save_config(&self.merge_into(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_assistant_core::config_file::ApiConfig;

    #[test]
    fn apply_file_ignores_unknown_theme_and_clamps_fps() {
        let mut state = DisplayState::default();
        state.apply_file(&ConfigFile {
            api: None,
            display: Some(DisplayConfig {
                theme: Some("neon".into()),
                fps: Some(500),
            }),
        });
        assert_eq!(state.theme_name, "hacker");
        assert_eq!(state.fps, 60);
    }

    #[test]
    fn set_theme_rejects_unknown_names() {
        let mut state = DisplayState::default();
        assert!(!state.set_theme("neon"));
        assert_eq!(state.theme_name, "hacker");
        assert_eq!(state.merge_into(ConfigFile::default()).display.unwrap().theme.as_deref(), Some("hacker"));

        assert!(state.set_theme("modern"));
        assert_eq!(state.theme_name, "modern");
    }

    #[test]
    fn theme_cycles() {
        let mut state = DisplayState::default();
        assert_eq!(state.next_theme_name(), "modern");
        state.theme_name = "modern".into();
        assert_eq!(state.next_theme_name(), "hacker");
    }

    #[test]
    fn merge_keeps_api_section() {
        let base = ConfigFile {
            api: Some(ApiConfig {
                base_url: Some("http://films:8000".into()),
                timeout_secs: None,
            }),
            display: None,
        };
        let state = DisplayState {
            theme_name: "modern".into(),
            fps: 15,
            dirty: true,
        };
        let merged = state.merge_into(base);
        assert_eq!(
            merged.api.unwrap().base_url.as_deref(),
            Some("http://films:8000")
        );
        let display = merged.display.unwrap();
        assert_eq!(display.theme.as_deref(), Some("modern"));
        assert_eq!(display.fps, Some(15));
    }
}
