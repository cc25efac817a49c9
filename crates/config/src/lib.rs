use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "chime-messaging.toml",
    "config/chime-messaging.toml",
    "crates/config/chime-messaging.toml",
    "../chime-messaging.toml",
    "../config/chime-messaging.toml",
];

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "CHIME_MESSAGING_CONFIG";

/// Prefix of environment overrides, e.g. `CHIME_MESSAGING__VALIDATION__ENFORCE`
pub const ENV_PREFIX: &str = "CHIME_MESSAGING";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Client-side validation of requests.
///
/// ```
/// use chime_messaging_config::ValidationConfig;
///
/// assert!(ValidationConfig::default().enforce);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Validate requests before they are serialized
    #[serde(default = "ValidationConfig::default_enforce")]
    pub enforce: bool,
}

impl ValidationConfig {
    const fn default_enforce() -> bool {
        true
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce: Self::default_enforce(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,
}

impl LoggingConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

/// Load the configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use chime_messaging_config::load;
///
/// std::env::remove_var("CHIME_MESSAGING_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.logging.filter.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("validation.enforce", defaults.validation.enforce)
        .context("invalid default for validation.enforce")?
        .set_default("logging.filter", defaults.logging.filter.clone())
        .context("invalid default for logging.filter")?;

    let environment_overrides = config::Environment::with_prefix(ENV_PREFIX).separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via {}", CONFIG_PATH_VAR);
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides.try_parsing(true));

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded messaging configuration");
    Ok(config)
}
