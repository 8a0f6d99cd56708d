// Standard library
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use reqwest::Url;
use tracing::{error, info};

// Project imports
use crate::providers::dnspod::constants::{
    default_endpoint, default_max_retries, default_region, default_retry_base_delay_ms,
};
use crate::providers::dnspod::DnsPodOptions;

// Current module imports
use super::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX, GROUP_NAME_ENV, MAX_PROVIDER_RETRIES,
};
use super::errors::{SettingsError, ValidationError};
use super::types::{
    default_listen_address, default_log_level, ConfigManager, DnsPodSettings, Log, Server,
    Settings, ValidatedSettings,
};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            tls_cert_path: None,
            tls_key_path: None,
        }
    }
}

impl Default for DnsPodSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            region: default_region(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
        }
    }
}

impl DnsPodSettings {
    pub fn to_options(&self) -> DnsPodOptions {
        DnsPodOptions {
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            max_retries: self.max_retries,
            retry_base_delay: Duration::from_millis(self.retry_base_delay_ms),
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        if self.server.listen_address.parse::<SocketAddr>().is_err() {
            return Err(ValidationError::InvalidListenAddress(
                self.server.listen_address.clone(),
            ));
        }

        if self.server.tls_cert_path.is_some() != self.server.tls_key_path.is_some() {
            return Err(ValidationError::IncompleteTls);
        }

        if self.webhook.group_name.trim().is_empty() {
            return Err(ValidationError::MissingGroupName);
        }

        if Url::parse(&self.dnspod.endpoint).is_err() {
            return Err(ValidationError::InvalidEndpoint(self.dnspod.endpoint.clone()));
        }

        if self.dnspod.max_retries > MAX_PROVIDER_RETRIES {
            return Err(ValidationError::TooManyRetries {
                max: MAX_PROVIDER_RETRIES,
                got: self.dnspod.max_retries,
            });
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    pub fn new() -> Result<Self, SettingsError> {
        let config_path: PathBuf = Self::get_config_path()?;
        Self::ensure_config_file_exists(&config_path)?;
        Self::from_path(config_path)
    }

    /// Loads and validates the configuration at `config_path`.
    pub fn from_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(ConfigManager {
            settings: validated_settings.into_inner(),
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("dnspod-webhook").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("webhook.group_name", env::var(GROUP_NAME_ENV).ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
