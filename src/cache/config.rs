//! Per-admin caching policy.
//!
//! Resolved from the admin handler's optional capabilities, falling back to
//! the `[caches]` table of the settings.

use std::time::Duration;

use crate::config::CacheSettings;
use crate::domain::AdminHandler;

use super::keys::CacheKey;

pub const DEFAULT_CACHE_ALIAS: &str = "default";
pub const DEFAULT_CACHE_TIMEOUT_SECS: u64 = 300;

/// Where and for how long an admin's rendered rows are cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether the admin opted into row caching.
    pub enabled: bool,
    /// Cache the rows go to.
    pub cache_alias: String,
    /// Lifetime of a cached row.
    pub timeout: Duration,
}

impl CacheConfig {
    pub fn for_admin(admin: &dyn AdminHandler, caches: &CacheSettings) -> Self {
        let cache_alias = admin
            .cache_alias()
            .unwrap_or(DEFAULT_CACHE_ALIAS)
            .to_string();
        let timeout = admin.caching_timeout().unwrap_or_else(|| {
            caches
                .timeout_for(&cache_alias)
                .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TIMEOUT_SECS))
        });

        Self {
            enabled: admin.caching_enabled(),
            cache_alias,
            timeout,
        }
    }

    pub fn for_key(key: &CacheKey<'_>, caches: &CacheSettings) -> Self {
        Self::for_admin(key.admin().as_ref(), caches)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::ConfiguredAdmin;

    fn caches(entries: &[(&str, u64)]) -> CacheSettings {
        CacheSettings {
            timeouts: entries
                .iter()
                .map(|(alias, secs)| (alias.to_string(), Duration::from_secs(*secs)))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn plain_admin_is_disabled_on_the_default_cache() {
        let config = CacheConfig::for_admin(&ConfiguredAdmin::new("a.Admin"), &caches(&[]));
        assert!(!config.is_enabled());
        assert_eq!(config.cache_alias, "default");
        assert_eq!(config.timeout, Duration::from_secs(300));
    }

    #[test]
    fn timeout_falls_back_to_the_alias_setting() {
        let admin = ConfiguredAdmin::new("a.Admin")
            .with_enabled(true)
            .with_cache_alias("rows");
        let config = CacheConfig::for_admin(&admin, &caches(&[("rows", 45), ("default", 10)]));

        assert!(config.is_enabled());
        assert_eq!(config.cache_alias, "rows");
        assert_eq!(config.timeout, Duration::from_secs(45));
    }

    #[test]
    fn unknown_alias_uses_the_builtin_timeout() {
        let admin = ConfiguredAdmin::new("a.Admin").with_cache_alias("missing");
        let config = CacheConfig::for_admin(&admin, &caches(&[("default", 10)]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_CACHE_TIMEOUT_SECS));
    }

    #[test]
    fn admin_timeout_wins() {
        let admin = ConfiguredAdmin::new("a.Admin").with_timeout(Duration::from_secs(5));
        let config = CacheConfig::for_admin(&admin, &caches(&[("default", 10)]));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
