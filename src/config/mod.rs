//! Configuration management for stcli
//!
//! Settings come from a YAML file of named profiles. Command-line flags and
//! their environment variables take precedence over the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::smartthings::DEFAULT_API_URL;
use crate::error::{ConfigError, Result};

/// Profile used when none is named anywhere
pub const DEFAULT_PROFILE: &str = "default";

/// Contents of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Profile used when `--profile` is not given
    #[serde(default)]
    pub active_profile: Option<String>,

    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// One named set of credentials and preferences
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    /// SmartThings personal access token
    #[serde(default)]
    pub token: Option<String>,

    /// API base URL override
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".stcli").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, returning `None` when the file does not exist
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        warn_if_world_readable(path);

        let contents = std::fs::read_to_string(path)?;
        let config: ConfigFile = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(Some(config))
    }
}

#[cfg(unix)]
fn warn_if_world_readable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(meta) = std::fs::metadata(path) {
        if meta.permissions().mode() & 0o077 != 0 {
            warn!(
                "{} is readable by other users; consider `chmod 600` since it holds tokens",
                path.display()
            );
        }
    }
}

#[cfg(not(unix))]
fn warn_if_world_readable(_path: &Path) {}

/// Effective settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub profile: String,
    pub token: String,
    pub api_url: String,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge global options over the config file.
    ///
    /// Precedence: CLI flag > environment variable > profile > default.
    /// A missing file is only an error when no token was supplied directly.
    pub fn resolve(opts: &GlobalOptions) -> Result<Self> {
        let path = ConfigFile::resolve_path(opts.config_ref())?;
        let file = ConfigFile::load_optional(&path)?;

        if file.is_none() && opts.token.is_none() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        Self::merge(opts, file.as_ref())
    }

    /// `file` is `None` when no config file exists and the token was given
    /// directly; profile names then only label the settings.
    fn merge(opts: &GlobalOptions, file: Option<&ConfigFile>) -> Result<Self> {
        let empty = ConfigFile::default();
        let loaded = file.is_some();
        let file = file.unwrap_or(&empty);

        let profile_name = opts
            .profile_ref()
            .or(file.active_profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
            .to_string();

        let profile = match file.profiles.get(&profile_name) {
            Some(p) => p.clone(),
            // An explicitly requested profile must exist
            None if loaded && (opts.profile.is_some() || file.active_profile.is_some()) => {
                return Err(ConfigError::ProfileNotFound(profile_name).into());
            }
            None => ProfileConfig::default(),
        };

        let token = opts
            .token
            .clone()
            .or(profile.token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let api_url = opts
            .api_url
            .clone()
            .or(profile.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let format = opts
            .format
            .or(profile.preferences.format)
            .unwrap_or_default();

        debug!("Resolved API URL {} (format {:?})", api_url, format);

        Ok(Self {
            profile: profile_name,
            token,
            api_url,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> GlobalOptions {
        GlobalOptions::default()
    }

    fn file_with(yaml: &str) -> ConfigFile {
        serde_yaml::from_str(yaml).unwrap()
    }

    const TWO_PROFILES: &str = r#"
active_profile: work
profiles:
  default:
    token: home-token
  work:
    token: work-token
    api_url: http://localhost:9000
    preferences:
      format: json
"#;

    #[test]
    fn test_active_profile_used_by_default() {
        let settings = Settings::merge(&opts(), Some(&file_with(TWO_PROFILES))).unwrap();

        assert_eq!(settings.profile, "work");
        assert_eq!(settings.token, "work-token");
        assert_eq!(settings.api_url, "http://localhost:9000");
        assert!(matches!(settings.format, OutputFormat::Json));
    }

    #[test]
    fn test_profile_flag_overrides_active_profile() {
        let mut o = opts();
        o.profile = Some("default".to_string());

        let settings = Settings::merge(&o, Some(&file_with(TWO_PROFILES))).unwrap();

        assert_eq!(settings.token, "home-token");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert!(matches!(settings.format, OutputFormat::Table));
    }

    #[test]
    fn test_flags_override_profile_values() {
        let mut o = opts();
        o.token = Some("flag-token".to_string());
        o.api_url = Some("http://127.0.0.1:1".to_string());
        o.format = Some(OutputFormat::Yaml);

        let settings = Settings::merge(&o, Some(&file_with(TWO_PROFILES))).unwrap();

        assert_eq!(settings.token, "flag-token");
        assert_eq!(settings.api_url, "http://127.0.0.1:1");
        assert!(matches!(settings.format, OutputFormat::Yaml));
    }

    #[test]
    fn test_unknown_profile_is_error() {
        let mut o = opts();
        o.profile = Some("staging".to_string());

        let err = Settings::merge(&o, Some(&file_with(TWO_PROFILES))).unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_missing_token_is_error() {
        let file = file_with("profiles:\n  default:\n    api_url: http://x\n");
        let err = Settings::merge(&opts(), Some(&file)).unwrap_err();

        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn test_token_without_file_uses_defaults() {
        let mut o = opts();
        o.token = Some("env-token".to_string());

        let settings = Settings::merge(&o, None).unwrap();

        assert_eq!(settings.profile, DEFAULT_PROFILE);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_token_and_profile_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut o = opts();
        o.config = Some(dir.path().join("absent.yaml").to_string_lossy().to_string());
        o.token = Some("tok".to_string());
        o.profile = Some("work".to_string());

        let settings = Settings::resolve(&o).unwrap();

        assert_eq!(settings.profile, "work");
        assert_eq!(settings.token, "tok");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_unknown_profile_with_token_and_file_is_error() {
        let mut o = opts();
        o.token = Some("tok".to_string());
        o.profile = Some("staging".to_string());

        let err = Settings::merge(&o, Some(&file_with(TWO_PROFILES))).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_missing_file_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut o = opts();
        o.config = Some(dir.path().join("nope.yaml").to_string_lossy().to_string());

        let err = Settings::resolve(&o).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn test_resolve_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, TWO_PROFILES).unwrap();

        let mut o = opts();
        o.config = Some(path.to_string_lossy().to_string());

        let settings = Settings::resolve(&o).unwrap();
        assert_eq!(settings.token, "work-token");
    }

    #[test]
    fn test_resolve_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "profiles: [not: a map").unwrap();

        let mut o = opts();
        o.config = Some(path.to_string_lossy().to_string());

        let err = Settings::resolve(&o).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::ParseError(_))
        ));
    }
}
