//! Key and policy inspection built from settings.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::admin::{AdminRegistry, AdminSite};
use crate::cache::{CacheConfig, CacheKey};
use crate::config::{KeyArgs, Settings};
use crate::domain::{AdminHandler, ConfiguredAdmin, ModelRef};
use crate::translation::TranslationState;

use super::error::AppError;

/// Admin site populated from the `[admins]` settings table.
pub fn admin_site(settings: &Settings) -> AdminSite {
    let site = AdminSite::new();
    for (model, admin) in &settings.admins {
        site.register(model.clone(), Arc::new(admin.to_admin()));
    }
    site
}

/// Everything a caller needs to look up one cached admin row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub key: String,
    pub result_key: String,
    pub prefix: String,
    pub admin: String,
    pub policy: CacheConfig,
}

impl fmt::Display for KeyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "key:        {}", self.key)?;
        writeln!(f, "result key: {}", self.result_key)?;
        writeln!(f, "prefix:     {}", self.prefix)?;
        writeln!(f, "admin:      {}", self.admin)?;
        write!(f, "caching:    {}", PolicyDisplay(&self.policy))
    }
}

/// Compute the key of `args.model`/`args.pk` under the configured state.
pub fn key_report(settings: &Settings, args: &KeyArgs) -> Result<KeyReport, AppError> {
    let site = admin_site(settings);
    let translation = TranslationState::new(settings.i18n.clone());
    if args.no_language {
        translation.deactivate_all();
    } else if let Some(language) = args.language.as_ref() {
        translation.activate(language.clone());
    }

    let model = ModelRef::new(args.model.clone(), args.pk.clone());
    let key = match args.admin.as_ref() {
        Some(path) => {
            let admin: Arc<dyn AdminHandler> = Arc::new(ConfiguredAdmin::new(path.clone()));
            CacheKey::with_admin(&model, admin, &translation)
        }
        None => CacheKey::new(&model, &site, &translation)?,
    };
    let policy = CacheConfig::for_key(&key, &settings.caches);

    info!(
        model = %args.model,
        admin = key.admin().admin_path(),
        enabled = policy.enabled,
        "computed key report"
    );

    Ok(KeyReport {
        key: key.key().to_string(),
        result_key: key.result_key(),
        prefix: key.i18n_l10n_prefix().to_string(),
        admin: key.admin().admin_path().to_string(),
        policy,
    })
}

/// One registered admin and its resolved caching policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminReport {
    pub model: String,
    pub admin: String,
    pub policy: CacheConfig,
}

impl fmt::Display for AdminReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.model,
            self.admin,
            PolicyDisplay(&self.policy)
        )
    }
}

/// Registered admins in model-label order.
pub fn admin_reports(settings: &Settings) -> Result<Vec<AdminReport>, AppError> {
    let site = admin_site(settings);
    site.model_labels()
        .into_iter()
        .map(|model| -> Result<AdminReport, AppError> {
            let admin = site.admin_for(&model)?;
            let policy = CacheConfig::for_admin(admin.as_ref(), &settings.caches);
            Ok(AdminReport {
                admin: admin.admin_path().to_string(),
                model,
                policy,
            })
        })
        .collect()
}

struct PolicyDisplay<'a>(&'a CacheConfig);

impl fmt::Display for PolicyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.0.enabled { "enabled" } else { "disabled" };
        write!(
            f,
            "{state}, cache={}, timeout={}",
            self.0.cache_alias,
            format_timeout(self.0.timeout)
        )
    }
}

fn format_timeout(timeout: Duration) -> String {
    format!("{}s", timeout.as_secs())
}
