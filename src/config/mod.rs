//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{collections::BTreeMap, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::domain::ConfiguredAdmin;

mod cli;

pub use cli::{AdminsArgs, CliArgs, Command, KeyArgs, SettingsOverrides};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "admin-caching";
const ENV_PREFIX: &str = "ADMIN_CACHING";
const DEFAULT_LANGUAGE_CODE: &str = "en-us";
const DEFAULT_USE_I18N: bool = true;
const DEFAULT_USE_L10N: bool = true;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub i18n: I18nSettings,
    pub caches: CacheSettings,
    pub admins: BTreeMap<String, AdminSettings>,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Translation switches and the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nSettings {
    pub use_i18n: bool,
    pub use_l10n: bool,
    pub language_code: String,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            use_i18n: DEFAULT_USE_I18N,
            use_l10n: DEFAULT_USE_L10N,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }
}

/// Default timeouts of the configured caches, by alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheSettings {
    pub timeouts: BTreeMap<String, Duration>,
}

impl CacheSettings {
    pub fn timeout_for(&self, alias: &str) -> Option<Duration> {
        self.timeouts.get(alias).copied()
    }
}

/// Admin registered for one model label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSettings {
    pub admin: String,
    pub enabled: bool,
    pub cache: Option<String>,
    pub timeout: Option<Duration>,
}

impl AdminSettings {
    pub fn to_admin(&self) -> ConfiguredAdmin {
        let mut admin = ConfiguredAdmin::new(self.admin.clone()).with_enabled(self.enabled);
        if let Some(cache) = self.cache.as_ref() {
            admin = admin.with_cache_alias(cache.clone());
        }
        if let Some(timeout) = self.timeout {
            admin = admin.with_timeout(timeout);
        }
        admin
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: String, reason: String },
}

impl LoadError {
    fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(cli.command.overrides());

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    i18n: RawI18nSettings,
    caches: BTreeMap<String, RawCacheSettings>,
    admins: BTreeMap<String, RawAdminSettings>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(use_i18n) = overrides.use_i18n {
            self.i18n.use_i18n = Some(use_i18n);
        }
        if let Some(use_l10n) = overrides.use_l10n {
            self.i18n.use_l10n = Some(use_l10n);
        }
        if let Some(code) = overrides.language_code.as_ref() {
            self.i18n.language_code = Some(code.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            i18n,
            caches,
            admins,
        } = raw;

        let logging = build_logging_settings(logging)?;
        let i18n = build_i18n_settings(i18n)?;
        let caches = build_cache_settings(caches)?;
        let admins = build_admin_settings(admins)?;

        Ok(Self {
            logging,
            i18n,
            caches,
            admins,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_i18n_settings(i18n: RawI18nSettings) -> Result<I18nSettings, LoadError> {
    let language_code = i18n
        .language_code
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string());
    if language_code.is_empty() {
        return Err(LoadError::invalid("i18n.language_code", "must not be empty"));
    }
    if language_code.chars().any(|c| c.is_whitespace()) {
        return Err(LoadError::invalid(
            "i18n.language_code",
            "must not contain whitespace",
        ));
    }

    Ok(I18nSettings {
        use_i18n: i18n.use_i18n.unwrap_or(DEFAULT_USE_I18N),
        use_l10n: i18n.use_l10n.unwrap_or(DEFAULT_USE_L10N),
        language_code,
    })
}

fn build_cache_settings(
    caches: BTreeMap<String, RawCacheSettings>,
) -> Result<CacheSettings, LoadError> {
    let mut timeouts = BTreeMap::new();
    for (alias, cache) in caches {
        if let Some(seconds) = cache.timeout_seconds {
            let timeout = positive_seconds(seconds, format!("caches.{alias}.timeout_seconds"))?;
            timeouts.insert(alias, timeout);
        }
    }
    Ok(CacheSettings { timeouts })
}

fn build_admin_settings(
    admins: BTreeMap<String, RawAdminSettings>,
) -> Result<BTreeMap<String, AdminSettings>, LoadError> {
    let mut resolved = BTreeMap::new();
    for (model, raw) in admins {
        let admin = raw
            .admin
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| LoadError::invalid(format!("admins.{model}.admin"), "is required"))?;
        let timeout = raw
            .timeout_seconds
            .map(|seconds| positive_seconds(seconds, format!("admins.{model}.timeout_seconds")))
            .transpose()?;
        let cache = raw.cache.and_then(|value| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

        resolved.insert(
            model,
            AdminSettings {
                admin,
                enabled: raw.enabled.unwrap_or(false),
                cache,
                timeout,
            },
        );
    }
    Ok(resolved)
}

fn positive_seconds(seconds: u64, key: String) -> Result<Duration, LoadError> {
    if seconds == 0 {
        return Err(LoadError::invalid(key, "must be greater than zero"));
    }
    Ok(Duration::from_secs(seconds))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawI18nSettings {
    use_i18n: Option<bool>,
    use_l10n: Option<bool>,
    language_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCacheSettings {
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAdminSettings {
    admin: Option<String>,
    enabled: Option<bool>,
    cache: Option<String>,
    timeout_seconds: Option<u64>,
}
