use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given. Missing is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "lunisolar.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LunisolarConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            date_format: default_date_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<LunisolarConfig> {
    let (path, required) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };
    if !required && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LunisolarConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: LunisolarConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.date_format, "%Y-%m-%d");
    }

    #[test]
    fn output_section() {
        let file = write_config(
            r#"
            [output]
            format = "json"
            date_format = "%d/%m/%Y"
            "#,
        );
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.date_format, "%d/%m/%Y");
    }

    #[test]
    fn unknown_field_rejected() {
        let file = write_config("[output]\ncolour = true\n");
        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
