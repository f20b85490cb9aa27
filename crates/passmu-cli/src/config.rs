//! YAML configuration loading and CLI flag overrides.

use std::fs;
use std::path::Path;

use thiserror::Error;

use passmu_core::{Error as CoreError, MutationConfig};

use crate::Cli;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Decode the YAML configuration, or fall back to the built-in defaults
/// when no path is given. Missing keys take their default values.
pub fn load_config(path: Option<&Path>) -> Result<MutationConfig, ConfigFileError> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(serde_yaml_ng::from_str(&contents)?)
        }
        None => Ok(MutationConfig::default()),
    }
}

/// Flags beat file values.
pub fn apply_overrides(config: &mut MutationConfig, cli: &Cli) {
    if cli.compress {
        config.use_compression = true;
    }
    if let Some(max_lines) = cli.max_lines {
        config.max_lines_per_file = max_lines;
    }
    if let Some(min_length) = cli.min_length {
        config.min_password_length = min_length;
    }
    if let Some(max_length) = cli.max_length {
        config.max_password_length = Some(max_length);
    }
    if let Some(max_symbols) = cli.max_symbols {
        config.max_symbols = max_symbols;
    }
    if let Some(random_caps) = cli.random_caps {
        config.random_caps_per_variant = random_caps;
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_config_path(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("passmu_cli_{label}_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir.join("config.yaml")
    }

    #[test]
    fn load_config_defaults_without_path() {
        let config = load_config(None).expect("defaults load");
        assert!(config.use_symbols);
        assert_eq!(config.max_symbols, 3);
    }

    #[test]
    fn load_config_parses_yaml_file() {
        let path = temp_config_path("parse");
        fs::write(
            &path,
            "symbols: ['!', '?']\nmax_symbols: 1\nuse_compression: true\nreal_world_leet:\n  a: ['4']\n",
        )
        .expect("write config");

        let config = load_config(Some(&path)).expect("load config");
        assert_eq!(config.symbols, vec!["!".to_string(), "?".to_string()]);
        assert_eq!(config.max_symbols, 1);
        assert!(config.use_compression);
        assert_eq!(
            config.real_world_leet.get(&'a'),
            Some(&vec!["4".to_string()])
        );
        // Keys absent from the file keep their defaults.
        assert_eq!(config.random_caps_per_variant, 2);
    }

    #[test]
    fn load_config_rejects_malformed_yaml() {
        let path = temp_config_path("malformed");
        fs::write(&path, "max_symbols: [not an integer\n").expect("write config");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn load_config_reports_missing_file() {
        let path = temp_config_path("missing");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigFileError::Io(_))
        ));
    }
}
