//! Configuration system
//!
//! File-backed settings for tools built on the collision core. The format is
//! picked from the file extension: `.toml` or `.ron`.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_str_with_format(&contents, Format::from_path(path)?)
    }

    /// Parse configuration text in the given format
    fn from_str_with_format(contents: &str, format: Format) -> Result<Self, ConfigError> {
        match format {
            Format::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::from_path(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// TOML document
    Toml,
    /// Rusty Object Notation
    Ron,
}

impl Format {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct ToolSettings {
        name: String,
        verbose: bool,
    }

    impl Config for ToolSettings {}

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("probe.toml")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("cases/basic.ron")).unwrap(), Format::Ron);
        assert!(matches!(
            Format::from_path(Path::new("probe.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("probe")).is_err());
    }

    #[test]
    fn test_parse_toml_and_ron() {
        let from_toml =
            ToolSettings::from_str_with_format("name = \"probe\"\nverbose = true\n", Format::Toml)
                .unwrap();
        let from_ron =
            ToolSettings::from_str_with_format("(name: \"probe\", verbose: true)", Format::Ron)
                .unwrap();

        assert_eq!(from_toml, from_ron);
        assert!(from_toml.verbose);
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let settings = ToolSettings::from_str_with_format("", Format::Toml).unwrap();
        assert_eq!(settings, ToolSettings::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = ToolSettings::from_str_with_format("name = ", Format::Toml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = ToolSettings::load_from_file("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_save_then_load_ron() {
        let path = std::env::temp_dir()
            .join(format!("collision_core_cfg_{}.ron", std::process::id()));
        let settings = ToolSettings { name: "scratch".to_string(), verbose: true };

        settings.save_to_file(&path).unwrap();
        let loaded = ToolSettings::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }
}
