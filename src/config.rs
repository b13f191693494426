use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Which player moves first in a fresh game.
    pub starting_player: Player,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the event loop waits for a key press before redrawing.
    pub poll_rate_ms: u64,
    /// Glyph drawn for a placed piece.
    pub piece_glyph: String,
    /// Glyph drawn for an empty cell.
    pub empty_glyph: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_player: Player::Red,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_rate_ms: 100,
            piece_glyph: "\u{25cf}".to_string(),
            empty_glyph: ".".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_rate_ms must be > 0".into(),
            ));
        }
        if self.ui.piece_glyph.is_empty() {
            return Err(ConfigError::Validation(
                "ui.piece_glyph must not be empty".into(),
            ));
        }
        if self.ui.empty_glyph.is_empty() {
            return Err(ConfigError::Validation(
                "ui.empty_glyph must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
starting_player = "yellow"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.starting_player, Player::Yellow);
        // Other fields should be defaults
        assert_eq!(config.ui.poll_rate_ms, 100);
        assert_eq!(config.ui.empty_glyph, ".");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.starting_player, Player::Red);
        assert_eq!(config.ui.poll_rate_ms, 100);
    }

    #[test]
    fn test_validation_rejects_zero_poll_rate() {
        let mut config = AppConfig::default();
        config.ui.poll_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_glyph() {
        let mut config = AppConfig::default();
        config.ui.piece_glyph = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.starting_player, Player::Red);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
poll_rate_ms = 250
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.poll_rate_ms, 250);
        // Others are defaults
        assert_eq!(config.game.starting_player, Player::Red);
    }

    #[test]
    fn test_load_rejects_unknown_player() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[game]\nstarting_player = \"green\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
