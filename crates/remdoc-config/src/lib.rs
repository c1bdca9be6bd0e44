//! Configuration management for remdoc.
//!
//! Parses `remdoc.toml` configuration files with serde and provides
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
//! - `directus.url`
//! - `directus.token`

mod expand;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Directus base URL.
    pub url: Option<String>,
    /// Override Directus static token.
    pub token: Option<String>,
    /// Override the project directory the output directory is resolved against.
    pub project_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "remdoc.toml";

/// Output directory used when `[export]` does not name one.
pub const DEFAULT_OUTPUT_DIR: &str = ".remote";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directus connection settings.
    pub directus: Option<DirectusConfig>,
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Directus connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectusConfig {
    /// Directus instance base URL.
    pub url: String,
    /// Static access token. Empty values are treated as anonymous access.
    #[serde(default)]
    pub token: Option<String>,
    /// Global HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl DirectusConfig {
    /// Create a config for the given URL with defaults for everything else.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.url, "directus.url")?;
        require_http_url(&self.url, "directus.url")?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "directus.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Raw export configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    output_dir: Option<String>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ExportConfig {
    /// Directory the markdown tree is written to. Wiped on every export.
    pub output_dir: PathBuf,
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
        /// Config field path (e.g., "`directus.token`").
        field: String,
        /// Error message (e.g., "${`DIRECTUS_TOKEN`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a relative path made only of normal components.
///
/// The output directory is deleted on every export, so it must resolve strictly
/// below the project directory.
fn require_subdirectory(path: &str, field: &str) -> Result<(), ConfigError> {
    let path = Path::new(path);
    if path.is_absolute()
        || !path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
    {
        return Err(ConfigError::Validation(format!(
            "{field} must be a relative path below the project directory"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `remdoc.toml` in current directory and parents.
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

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(url) = &settings.url {
            match self.directus.as_mut() {
                Some(directus) => directus.url.clone_from(url),
                None => self.directus = Some(DirectusConfig::new(url.clone())),
            }
        }
        if let Some(token) = &settings.token
            && let Some(directus) = self.directus.as_mut()
        {
            directus.token = non_empty(token.clone());
        }
        if let Some(project_dir) = &settings.project_dir {
            self.resolve_paths(project_dir);
        }
    }

    /// Get validated Directus configuration.
    ///
    /// Returns the Directus config if the `[directus]` section is present (or a
    /// URL was supplied on the command line) and all fields are valid.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_directus(&self) -> Result<&DirectusConfig, ConfigError> {
        let directus = self.directus.as_ref().ok_or_else(|| {
            ConfigError::Validation("[directus] section required in config".into())
        })?;
        directus.validate()?;
        Ok(directus)
    }

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

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            directus: None,
            export: ExportConfigRaw::default(),
            export_resolved: ExportConfig {
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Only sections that are present are validated; a missing `[directus]`
    /// section is reported by [`Config::require_directus`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(directus) = &self.directus {
            directus.validate()?;
        }
        if let Some(output_dir) = &self.export.output_dir {
            require_non_empty(output_dir, "export.output_dir")?;
            require_subdirectory(output_dir, "export.output_dir")?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut directus) = self.directus {
            directus.url = expand::expand_env(&directus.url, "directus.url")?;
            directus.token = match directus.token.take() {
                Some(token) => non_empty(expand::expand_env(&token, "directus.token")?),
                None => None,
            };
        }
        Ok(())
    }

    /// Resolve the output directory against the project directory.
    fn resolve_paths(&mut self, project_dir: &Path) {
        let output_dir = self
            .export
            .output_dir
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_DIR);
        self.export_resolved = ExportConfig {
            output_dir: project_dir.join(output_dir),
        };
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/project"));
        assert!(config.directus.is_none());
        assert_eq!(
            config.export_resolved.output_dir,
            PathBuf::from("/project/.remote")
        );
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.directus.is_none());
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_parse_directus_config() {
        let toml = r#"
[directus]
url = "https://cms.example.com"
token = "static-token"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let directus = config.directus.unwrap();
        assert_eq!(directus.url, "https://cms.example.com");
        assert_eq!(directus.token.as_deref(), Some("static-token"));
        assert_eq!(directus.timeout_secs, 5);
    }

    #[test]
    fn test_parse_directus_defaults() {
        let toml = r#"
[directus]
url = "https://cms.example.com"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let directus = config.directus.unwrap();
        assert!(directus.token.is_none());
        assert_eq!(directus.timeout_secs, 30);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[export]
output_dir = "content/remote"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.export_resolved.output_dir,
            PathBuf::from("/project/content/remote")
        );
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[directus]\nurl = \"https://cms.example.com\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path()), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.export_resolved.output_dir, dir.path().join(".remote"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/remdoc.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[directus]\nurl = \"cms.example.com\"\n").unwrap();

        let err = Config::load(Some(path.as_path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("directus.url"));
    }

    #[test]
    fn test_apply_cli_settings_url_creates_section() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            url: Some("https://cms.example.com".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        let directus = config.require_directus().unwrap();
        assert_eq!(directus.url, "https://cms.example.com");
        assert_eq!(directus.timeout_secs, 30);
    }

    #[test]
    fn test_apply_cli_settings_token() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.directus = Some(DirectusConfig::new("https://cms.example.com"));
        let overrides = CliSettings {
            token: Some("cli-token".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.directus.unwrap().token.as_deref(),
            Some("cli-token")
        );
    }

    #[test]
    fn test_apply_cli_settings_project_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            project_dir: Some(PathBuf::from("/site")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.export_resolved.output_dir, PathBuf::from("/site/.remote"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert!(config.directus.is_none());
        assert_eq!(config.export_resolved.output_dir, PathBuf::from("/test/.remote"));
    }

    #[test]
    fn test_require_directus_missing() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.require_directus().unwrap_err();
        assert!(err.to_string().contains("[directus]"));
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut directus = DirectusConfig::new("https://cms.example.com");
        directus.timeout_secs = 0;
        let err = directus.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_validate_empty_output_dir() {
        let config: Config = toml::from_str("[export]\noutput_dir = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("export.output_dir"));
    }

    fn assert_output_dir_rejected(output_dir: &str) {
        let config: Config =
            toml::from_str(&format!("[export]\noutput_dir = {output_dir:?}\n")).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation for {output_dir:?}, got {err:?}"
        );
        assert!(err.to_string().contains("export.output_dir"));
    }

    #[test]
    fn test_validate_output_dir_current_dir() {
        assert_output_dir_rejected(".");
    }

    #[test]
    fn test_validate_output_dir_parent_dir() {
        assert_output_dir_rejected("..");
    }

    #[test]
    fn test_validate_output_dir_root() {
        assert_output_dir_rejected("/");
    }

    #[test]
    fn test_validate_output_dir_absolute() {
        assert_output_dir_rejected("/var/www/docs");
    }

    #[test]
    fn test_validate_output_dir_escapes_through_parent() {
        assert_output_dir_rejected("content/../..");
    }

    #[test]
    fn test_validate_output_dir_leading_current_dir() {
        assert_output_dir_rejected("./.remote");
    }

    #[test]
    fn test_validate_output_dir_nested_is_valid() {
        let config: Config = toml::from_str("[export]\noutput_dir = \"content/.remote\"\n").unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_load_rejects_output_dir_before_any_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[export]\noutput_dir = \".\"\n").unwrap();

        let err = Config::load(Some(path.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(path.exists());
    }

    #[test]
    fn test_expand_env_vars_directus() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("REMDOC_CFG_URL", "https://cms.test.com");
            std::env::set_var("REMDOC_CFG_TOKEN", "env-token");
        }

        let toml = r#"
[directus]
url = "${REMDOC_CFG_URL}"
token = "${REMDOC_CFG_TOKEN}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        let directus = config.directus.unwrap();
        assert_eq!(directus.url, "https://cms.test.com");
        assert_eq!(directus.token.as_deref(), Some("env-token"));

        unsafe {
            std::env::remove_var("REMDOC_CFG_URL");
            std::env::remove_var("REMDOC_CFG_TOKEN");
        }
    }

    #[test]
    fn test_expand_env_vars_empty_token_is_anonymous() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("REMDOC_CFG_NO_TOKEN");
        }

        let toml = r#"
[directus]
url = "https://cms.example.com"
token = "${REMDOC_CFG_NO_TOKEN:-}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert!(config.directus.unwrap().token.is_none());
    }
}
