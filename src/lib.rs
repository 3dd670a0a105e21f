//! Deterministic, locale-aware cache keys for rendered admin rows.
//!
//! ```
//! use std::sync::Arc;
//!
//! use admin_caching::admin::AdminSite;
//! use admin_caching::cache::CacheKey;
//! use admin_caching::config::I18nSettings;
//! use admin_caching::domain::{AdminHandler, ModelRef};
//! use admin_caching::translation::TranslationState;
//!
//! struct GroupAdmin;
//! impl AdminHandler for GroupAdmin {
//!     fn admin_path(&self) -> &str {
//!         "auth.admin.GroupAdmin"
//!     }
//! }
//!
//! let site = AdminSite::new();
//! site.register("auth.Group", Arc::new(GroupAdmin));
//!
//! let translation = TranslationState::new(I18nSettings::default());
//! translation.activate("de-ch");
//!
//! let group = ModelRef::new("auth.Group", "3");
//! let key = CacheKey::new(&group, &site, &translation)?;
//! assert_eq!(key.key(), "de-ch.de_CH.auth.admin.GroupAdmin-auth.Group-3");
//! # Ok::<(), admin_caching::domain::RegistryError>(())
//! ```

pub mod admin;
pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
pub mod translation;
mod util;
