//! Cache keys for rendered admin rows.
//!
//! The crate never stores anything: [`CacheKey`] produces the lookup key and
//! [`CacheConfig`] tells the caller which cache and timeout an admin asked
//! for. Storage is left to the caller's cache backend.

mod config;
mod keys;

pub use config::{CacheConfig, DEFAULT_CACHE_ALIAS, DEFAULT_CACHE_TIMEOUT_SECS};
pub use keys::{CacheKey, i18n_l10n_prefix};
