//! Configuration management for cotalk.
//!
//! Parses `cotalk.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `output.dir`
//! - `output.filename`
//! - `assets.dir`
//! - `docs.command` (every element)

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override talk asset directory.
    pub assets_dir: Option<PathBuf>,
    /// Override documentation lookup failure policy.
    pub docs_on_failure: Option<DocsFailure>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cotalk.toml";

/// Default output filename for the rendered deck.
const DEFAULT_FILENAME: &str = "index.html";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Asset configuration (paths are relative strings from TOML).
    assets: AssetsConfigRaw,
    /// Documentation lookup configuration.
    pub docs: DocsConfig,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Resolved asset configuration (set after loading).
    #[serde(skip)]
    pub assets_resolved: AssetsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    filename: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory the rendered page is written to.
    pub dir: PathBuf,
    /// Filename of the rendered page.
    pub filename: String,
}

impl OutputConfig {
    /// Full path of the rendered page.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Raw asset configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AssetsConfigRaw {
    dir: Option<String>,
}

/// Resolved asset configuration.
#[derive(Debug, Default)]
pub struct AssetsConfig {
    /// Directory to read talk assets from.
    ///
    /// If `None`, the assets bundled with the binary are used.
    pub dir: Option<PathBuf>,
}

/// What to do when the documentation command fails.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocsFailure {
    /// Log a warning and render an empty documentation block.
    #[default]
    Empty,
    /// Abort the build.
    Fatal,
}

/// Documentation lookup configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Command and leading arguments; the package name is appended.
    pub command: Vec<String>,
    /// Failure policy for the command.
    pub on_failure: DocsFailure,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            command: vec!["cargo".to_owned(), "info".to_owned(), "--quiet".to_owned()],
            on_failure: DocsFailure::Empty,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`COTALK_OUT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cotalk.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(assets_dir) = &settings.assets_dir {
            self.assets_resolved.dir = Some(assets_dir.clone());
        }
        if let Some(on_failure) = settings.docs_on_failure {
            self.docs.on_failure = on_failure;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            output: OutputConfigRaw::default(),
            assets: AssetsConfigRaw::default(),
            docs: DocsConfig::default(),
            output_resolved: OutputConfig {
                dir: base.join("build"),
                filename: DEFAULT_FILENAME.to_owned(),
            },
            assets_resolved: AssetsConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_output()?;
        self.validate_docs()?;
        Ok(())
    }

    fn validate_output(&self) -> Result<(), ConfigError> {
        let filename = &self.output_resolved.filename;
        require_non_empty(filename, "output.filename")?;
        if filename.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "output.filename must be a bare file name".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        match self.docs.command.first() {
            Some(program) => require_non_empty(program, "docs.command"),
            None => Err(ConfigError::Validation(
                "docs.command cannot be empty".to_owned(),
            )),
        }
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        if let Some(ref filename) = self.output.filename {
            self.output.filename = Some(expand::expand_env(filename, "output.filename")?);
        }
        if let Some(ref dir) = self.assets.dir {
            self.assets.dir = Some(expand::expand_env(dir, "assets.dir")?);
        }
        self.docs.command = self
            .docs
            .command
            .iter()
            .map(|arg| expand::expand_env(arg, "docs.command"))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("build")),
            filename: self
                .output
                .filename
                .clone()
                .unwrap_or_else(|| DEFAULT_FILENAME.to_owned()),
        };
        self.assets_resolved = AssetsConfig {
            dir: self.assets.dir.as_deref().map(|d| config_dir.join(d)),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_resolved.dir, PathBuf::from("./build"));
        assert_eq!(config.output_resolved.filename, "index.html");
        assert_eq!(config.assets_resolved.dir, None);
        assert_eq!(config.docs.command, vec!["cargo", "info", "--quiet"]);
        assert_eq!(config.docs.on_failure, DocsFailure::Empty);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.docs.on_failure, DocsFailure::Empty);
        assert!(config.output.dir.is_none());
    }

    #[test]
    fn test_parse_docs_config() {
        let toml = r#"
[docs]
command = ["rustup", "doc", "--path"]
on_failure = "fatal"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.docs.command, vec!["rustup", "doc", "--path"]);
        assert_eq!(config.docs.on_failure, DocsFailure::Fatal);
    }

    #[test]
    fn test_parse_unknown_failure_policy() {
        let toml = r#"
[docs]
on_failure = "retry"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_resolves_paths_relative_to_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            r#"
[output]
dir = "site"
filename = "talk.html"

[assets]
dir = "slides"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.output_resolved.dir, temp_dir.path().join("site"));
        assert_eq!(
            config.output_resolved.path(),
            temp_dir.path().join("site/talk.html")
        );
        assert_eq!(
            config.assets_resolved.dir,
            Some(temp_dir.path().join("slides"))
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_defaults_when_sections_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.output_resolved.dir, temp_dir.path().join("build"));
        assert_eq!(config.output_resolved.filename, "index.html");
        assert_eq!(config.assets_resolved.dir, None);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let result = Config::load(Some(&missing), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_rejects_filename_with_separator() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            r#"
[output]
filename = "nested/index.html"
"#,
        );

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("output.filename"));
    }

    #[test]
    fn test_load_rejects_empty_docs_command() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            r"
[docs]
command = []
",
        );

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(err.to_string().contains("docs.command"));
    }

    #[test]
    fn test_cli_settings_override_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            r#"
[output]
dir = "site"

[docs]
on_failure = "empty"
"#,
        );
        let settings = CliSettings {
            output_dir: Some(PathBuf::from("/tmp/elsewhere")),
            assets_dir: Some(PathBuf::from("/tmp/assets")),
            docs_on_failure: Some(DocsFailure::Fatal),
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.output_resolved.dir, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(
            config.assets_resolved.dir,
            Some(PathBuf::from("/tmp/assets"))
        );
        assert_eq!(config.docs.on_failure, DocsFailure::Fatal);
    }

    #[test]
    fn test_expand_env_vars_output_dir() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("COTALK_TEST_OUT", "public");
        }

        let toml = r#"
[output]
dir = "${COTALK_TEST_OUT}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.output.dir.as_deref(), Some("public"));

        unsafe {
            std::env::remove_var("COTALK_TEST_OUT");
        }
    }

    #[test]
    fn test_expand_env_vars_docs_command() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("COTALK_TEST_CARGO");
        }

        let toml = r#"
[docs]
command = ["${COTALK_TEST_CARGO:-cargo}", "info"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.docs.command, vec!["cargo", "info"]);
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_COTALK_TEST");
        }

        let toml = r#"
[assets]
dir = "${MISSING_VAR_COTALK_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_COTALK_TEST"));
        assert!(err.to_string().contains("assets.dir"));
    }
}
