use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Symbols inserted into mutants when no configuration file overrides them.
pub const DEFAULT_SYMBOLS: [&str; 11] = ["!", "@", "#", "$", "%", "&", "*", "?", "1", "2", "3"];

/// Default cap on the number of symbols inserted into a single mutant.
pub const DEFAULT_MAX_SYMBOLS: usize = 3;

/// Default number of random-capitalization draws per mutant.
pub const DEFAULT_RANDOM_CAPS_PER_VARIANT: usize = 2;

/// Default cap on simultaneous leetspeak substitutions.
pub const DEFAULT_MAX_LEET_SUBSTITUTIONS: usize = 2;

/// Immutable knobs for a mutation run.
///
/// Loaded once at startup (YAML file plus CLI overrides) and shared
/// read-only with every worker. `normalize` and `validate` are expected to
/// run at the loading boundary before the engine starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Ordered symbol alphabet for insertion.
    pub symbols: Vec<String>,
    /// Maximum number of symbols inserted into one mutant.
    pub max_symbols: usize,
    /// Random-capitalization draws per mutant (0 disables the step).
    pub random_caps_per_variant: usize,
    /// Lowercase letter -> ordered replacement strings.
    pub real_world_leet: BTreeMap<char, Vec<String>>,
    /// Maximum simultaneous leetspeak substitutions.
    pub max_leet_substitutions: usize,
    /// Minimum candidate length, in characters.
    pub min_password_length: usize,
    /// Maximum candidate length, in characters (unset = unbounded).
    pub max_password_length: Option<usize>,
    pub use_symbols: bool,
    pub use_leetspeak: bool,
    pub use_years: bool,
    pub use_long_years: bool,
    pub use_short_years: bool,
    /// Year strings appended to bases when `use_years` is set.
    pub years: Vec<String>,
    pub use_keyboard_walks: bool,
    /// Keyboard-walk literals added as independent bases.
    pub keyboard_walks: Vec<String>,
    /// Write each output part through a gzip stream.
    pub use_compression: bool,
    /// Line budget per output part (0 = unlimited).
    pub max_lines_per_file: u64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            max_symbols: DEFAULT_MAX_SYMBOLS,
            random_caps_per_variant: DEFAULT_RANDOM_CAPS_PER_VARIANT,
            real_world_leet: default_leet_map(),
            max_leet_substitutions: DEFAULT_MAX_LEET_SUBSTITUTIONS,
            min_password_length: 1,
            max_password_length: None,
            use_symbols: true,
            use_leetspeak: true,
            use_years: false,
            use_long_years: true,
            use_short_years: false,
            years: Vec::new(),
            use_keyboard_walks: false,
            keyboard_walks: default_keyboard_walks(),
            use_compression: false,
            max_lines_per_file: 0,
        }
    }
}

impl MutationConfig {
    /// Uphold the invariant that the symbol alphabet is empty when symbol
    /// insertion is disabled.
    pub fn normalize(&mut self) {
        if !self.use_symbols {
            self.symbols.clear();
        }
    }

    /// Check the invariants a run depends on.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_password_length
            && self.min_password_length > max
        {
            return Err(Error::InvalidConfig(format!(
                "min_password_length {} exceeds max_password_length {}",
                self.min_password_length, max
            )));
        }
        if !self.use_symbols && !self.symbols.is_empty() {
            return Err(Error::InvalidConfig(
                "symbols must be empty when use_symbols is false".to_string(),
            ));
        }
        Ok(())
    }
}

/// Leetspeak substitutions observed in real-world password dumps.
fn default_leet_map() -> BTreeMap<char, Vec<String>> {
    let entries: [(char, &[&str]); 7] = [
        ('a', &["@", "4"]),
        ('e', &["3"]),
        ('i', &["1", "!"]),
        ('o', &["0"]),
        ('s', &["$", "5"]),
        ('t', &["7"]),
        ('l', &["1"]),
    ];
    entries
        .into_iter()
        .map(|(letter, reps)| (letter, reps.iter().map(|rep| rep.to_string()).collect()))
        .collect()
}

fn default_keyboard_walks() -> Vec<String> {
    ["qwerty", "qwertyuiop", "asdfgh", "zxcvbn", "qazwsx", "1q2w3e4r", "123456789"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = MutationConfig::default();
        assert_eq!(config.symbols.len(), DEFAULT_SYMBOLS.len());
        assert_eq!(config.max_symbols, 3);
        assert_eq!(config.random_caps_per_variant, 2);
        assert_eq!(config.max_leet_substitutions, 2);
        assert_eq!(config.real_world_leet.get(&'s').map(Vec::len), Some(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_length_bounds() {
        let config = MutationConfig {
            min_password_length: 10,
            max_password_length: Some(4),
            ..MutationConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn normalize_clears_symbols_when_disabled() {
        let mut config = MutationConfig {
            use_symbols: false,
            ..MutationConfig::default()
        };
        assert!(config.validate().is_err());
        config.normalize();
        assert!(config.symbols.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn yaml_round_trip_preserves_leet_map() {
        let config = MutationConfig::default();
        let yaml = serde_yaml_ng::to_string(&config).expect("serialize config");
        let parsed: MutationConfig = serde_yaml_ng::from_str(&yaml).expect("parse config");
        assert_eq!(parsed.real_world_leet, config.real_world_leet);
        assert_eq!(parsed.symbols, config.symbols);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let yaml = "min_password_length: 6\nuse_compression: true\n";
        let parsed: MutationConfig = serde_yaml_ng::from_str(yaml).expect("parse config");
        assert_eq!(parsed.min_password_length, 6);
        assert!(parsed.use_compression);
        assert_eq!(parsed.max_symbols, DEFAULT_MAX_SYMBOLS);
        assert!(!parsed.real_world_leet.is_empty());
    }
}
