//! Fixture configuration: file names, sample size, and seed.
//!
//! Values are layered: built-in defaults, an optional YAML file,
//! `RENAVAM_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FixtureError;

/// Default output of the invalid-record generator.
pub const DEFAULT_INVALID_OUTPUT: &str = "registros_invalidos.txt";
/// Default record file the sampler reads.
pub const DEFAULT_SEARCH_SOURCE: &str = "registros_carros.txt";
/// Default output of the sampler.
pub const DEFAULT_SEARCH_OUTPUT: &str = "buscas.txt";
/// Default number of renavams to sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Resolved settings for both generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Where the invalid-record generator writes.
    pub invalid_output: PathBuf,
    /// Record file the sampler reads.
    pub search_source: PathBuf,
    /// Where the sampler writes.
    pub search_output: PathBuf,
    /// Number of renavams to sample.
    pub sample_size: usize,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            invalid_output: PathBuf::from(DEFAULT_INVALID_OUTPUT),
            search_source: PathBuf::from(DEFAULT_SEARCH_SOURCE),
            search_output: PathBuf::from(DEFAULT_SEARCH_OUTPUT),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

/// On-disk shape of the YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    invalid_output: Option<PathBuf>,
    search_source: Option<PathBuf>,
    search_output: Option<PathBuf>,
    sample_size: Option<usize>,
    seed: Option<u64>,
}

/// Command-line values; each one wins over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `invalid --output`.
    pub invalid_output: Option<PathBuf>,
    /// `sample --source`.
    pub search_source: Option<PathBuf>,
    /// `sample --output`.
    pub search_output: Option<PathBuf>,
    /// `sample --count`.
    pub sample_size: Option<usize>,
    /// `sample --seed`.
    pub seed: Option<u64>,
    /// The command samples keys. Sample size and seed are only read from
    /// the environment when it does.
    pub sampling: bool,
}

impl FixtureConfig {
    /// Resolves configuration from defaults, an optional file, the process
    /// environment (after loading `.env`, if any), and `overrides`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a numeric
    /// environment variable the command uses is malformed.
    pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<Self, FixtureError> {
        if let Some(err) = dotenv_failure(dotenvy::dotenv()) {
            tracing::warn!(%err, "ignoring unreadable .env file");
        }
        let mut config = Self::default();
        if let Some(path) = path {
            config.merge_file(path)?;
        }
        config.apply_env(|name| std::env::var(name).ok(), overrides)?;
        config.apply_overrides(overrides);
        tracing::debug!(?config, "resolved fixture config");
        Ok(config)
    }

    /// Overlays command-line values.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(v) = &overrides.invalid_output {
            self.invalid_output.clone_from(v);
        }
        if let Some(v) = &overrides.search_source {
            self.search_source.clone_from(v);
        }
        if let Some(v) = &overrides.search_output {
            self.search_output.clone_from(v);
        }
        if let Some(v) = overrides.sample_size {
            self.sample_size = v;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    /// Overlays values from a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Config`] if the file cannot be read or parsed.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|e| FixtureError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.merge_yaml(&content).map_err(|message| FixtureError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn merge_yaml(&mut self, content: &str) -> Result<(), String> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(());
        }
        let file: ConfigFile = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if let Some(v) = file.invalid_output {
            self.invalid_output = v;
        }
        if let Some(v) = file.search_source {
            self.search_source = v;
        }
        if let Some(v) = file.search_output {
            self.search_output = v;
        }
        if let Some(v) = file.sample_size {
            self.sample_size = v;
        }
        if file.seed.is_some() {
            self.seed = file.seed;
        }
        Ok(())
    }

    /// Overlays `RENAVAM_*` variables read through `lookup`.
    ///
    /// `RENAVAM_SAMPLE_SIZE` and `RENAVAM_SEED` are skipped unless
    /// `overrides.sampling` is set and the matching flag is absent.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidEnv`] if a numeric variable that is read
    /// is not a non-negative integer.
    pub fn apply_env<F>(&mut self, lookup: F, overrides: &Overrides) -> Result<(), FixtureError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("RENAVAM_INVALID_OUTPUT") {
            self.invalid_output = PathBuf::from(v);
        }
        if let Some(v) = lookup("RENAVAM_SEARCH_SOURCE") {
            self.search_source = PathBuf::from(v);
        }
        if let Some(v) = lookup("RENAVAM_SEARCH_OUTPUT") {
            self.search_output = PathBuf::from(v);
        }
        if !overrides.sampling {
            return Ok(());
        }
        if overrides.sample_size.is_none() {
            if let Some(v) = lookup("RENAVAM_SAMPLE_SIZE") {
                self.sample_size = parse_env("RENAVAM_SAMPLE_SIZE", v)?;
            }
        }
        if overrides.seed.is_none() {
            if let Some(v) = lookup("RENAVAM_SEED") {
                self.seed = Some(parse_env("RENAVAM_SEED", v)?);
            }
        }
        Ok(())
    }
}

/// Returns the `.env` loading error worth reporting; a missing file is not.
fn dotenv_failure<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Err(err) if !err.not_found() => Some(err),
        _ => None,
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, FixtureError> {
    value.trim().parse().map_err(|_| FixtureError::InvalidEnv { name, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_script_file_names() {
        let config = FixtureConfig::default();
        assert_eq!(config.invalid_output, PathBuf::from("registros_invalidos.txt"));
        assert_eq!(config.search_source, PathBuf::from("registros_carros.txt"));
        assert_eq!(config.search_output, PathBuf::from("buscas.txt"));
        assert_eq!(config.sample_size, 100);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn yaml_overrides_only_given_keys() {
        let mut config = FixtureConfig::default();
        config.merge_yaml("sample_size: 5\nseed: 11\n").unwrap();
        assert_eq!(config.sample_size, 5);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.search_output, PathBuf::from("buscas.txt"));
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        let mut config = FixtureConfig::default();
        assert!(config.merge_yaml("sample_sise: 5\n").is_err());
    }

    #[test]
    fn empty_yaml_is_a_no_op() {
        let mut config = FixtureConfig::default();
        config.merge_yaml("  \n").unwrap();
        assert_eq!(config, FixtureConfig::default());
    }

    #[test]
    fn missing_config_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FixtureConfig::default();
        let err = config.merge_file(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, FixtureError::Config { .. }));
    }

    #[test]
    fn config_file_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.yaml");
        std::fs::write(&path, "search_source: carros.csv\n").unwrap();

        let mut config = FixtureConfig::default();
        config.merge_file(&path).unwrap();
        assert_eq!(config.search_source, PathBuf::from("carros.csv"));
    }

    fn sampling() -> Overrides {
        Overrides { sampling: true, ..Overrides::default() }
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = FixtureConfig::default();
        config.merge_yaml("sample_size: 5\n").unwrap();
        config
            .apply_env(
                env(&[("RENAVAM_SAMPLE_SIZE", "7"), ("RENAVAM_SEARCH_OUTPUT", "out.txt")]),
                &sampling(),
            )
            .unwrap();
        assert_eq!(config.sample_size, 7);
        assert_eq!(config.search_output, PathBuf::from("out.txt"));
    }

    #[test]
    fn malformed_env_number_errors() {
        let mut config = FixtureConfig::default();
        let err = config.apply_env(env(&[("RENAVAM_SEED", "-3")]), &sampling()).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidEnv { name: "RENAVAM_SEED", .. }));
    }

    #[test]
    fn seed_flag_beats_malformed_env() {
        let overrides = Overrides { seed: Some(3), sample_size: Some(1), ..sampling() };
        let mut config = FixtureConfig::default();
        config
            .apply_env(env(&[("RENAVAM_SEED", "abc"), ("RENAVAM_SAMPLE_SIZE", "x")]), &overrides)
            .unwrap();
        config.apply_overrides(&overrides);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.sample_size, 1);
    }

    #[test]
    fn non_sampling_command_ignores_numeric_env() {
        let overrides = Overrides::default();
        let mut config = FixtureConfig::default();
        config
            .apply_env(
                env(&[("RENAVAM_SEED", "abc"), ("RENAVAM_INVALID_OUTPUT", "bad.txt")]),
                &overrides,
            )
            .unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.invalid_output, PathBuf::from("bad.txt"));
    }

    #[test]
    fn flags_beat_env_and_file() {
        let mut config = FixtureConfig::default();
        config.merge_yaml("search_output: file.txt\n").unwrap();
        config.apply_env(env(&[("RENAVAM_SEARCH_OUTPUT", "env.txt")]), &sampling()).unwrap();
        config.apply_overrides(&Overrides {
            search_output: Some(PathBuf::from("flag.txt")),
            ..sampling()
        });
        assert_eq!(config.search_output, PathBuf::from("flag.txt"));
    }

    #[test]
    fn missing_dotenv_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(dotenv_failure(dotenvy::from_path(dir.path().join(".env"))).is_none());
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RENAVAM SEED 3\n").unwrap();
        assert!(dotenv_failure(dotenvy::from_path(&path)).is_some());
    }
}
