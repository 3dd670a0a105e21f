//! Cache key derivation for rendered admin rows.
//!
//! A key has the shape
//!
//! ```text
//! [<language>[.<locale>].]<admin path>-<model label>-<result key>
//! ```
//!
//! Segments are joined verbatim. Labels or identifiers containing `.` or `-`
//! can therefore produce colliding keys; callers that need strict uniqueness
//! must keep those characters out of custom identifiers. The format is kept
//! as is because stored keys are compared across deployments.

use std::fmt;
use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use crate::admin::AdminRegistry;
use crate::domain::{AdminHandler, Model, RegistryError};
use crate::translation::Translation;

const LOCALE_SEPARATOR: char = '.';
const SEGMENT_SEPARATOR: char = '-';

/// Cache key of one result object as rendered by one admin handler.
///
/// Built once per lookup or store and immutable afterwards. The locale prefix
/// reflects the translation state at construction time.
pub struct CacheKey<'a> {
    admin: Arc<dyn AdminHandler>,
    result: &'a dyn Model,
    i18n_l10n_prefix: String,
    key: String,
}

impl<'a> CacheKey<'a> {
    /// Build the key with the admin handler registered for the result's model.
    ///
    /// Fails with the registry's error when the model is not registered.
    pub fn new(
        result: &'a dyn Model,
        registry: &dyn AdminRegistry,
        translation: &dyn Translation,
    ) -> Result<Self, RegistryError> {
        let admin = registry.admin_for(result.model_label())?;
        Ok(Self::with_admin(result, admin, translation))
    }

    /// Build the key with an explicit admin handler, bypassing the registry.
    pub fn with_admin(
        result: &'a dyn Model,
        admin: Arc<dyn AdminHandler>,
        translation: &dyn Translation,
    ) -> Self {
        let i18n_l10n_prefix = i18n_l10n_prefix(translation);
        let custom = admin.caching_key(result);
        let identifier = match custom.as_deref() {
            Some(_) => "custom",
            None => "pk",
        };
        let result_key = custom.unwrap_or_else(|| result.pk());
        let key = assemble(
            &i18n_l10n_prefix,
            admin.admin_path(),
            result.model_label(),
            &result_key,
        );

        counter!("admin_caching_keys_total", "identifier" => identifier).increment(1);
        debug!(
            admin = admin.admin_name(),
            model = result.model_label(),
            identifier,
            key = %key,
            "computed admin cache key"
        );

        Self {
            admin,
            result,
            i18n_l10n_prefix,
            key,
        }
    }

    pub fn admin(&self) -> &Arc<dyn AdminHandler> {
        &self.admin
    }

    pub fn result(&self) -> &'a dyn Model {
        self.result
    }

    /// Identifier of the result object: the admin's custom key, or the primary key.
    pub fn result_key(&self) -> String {
        self.admin
            .caching_key(self.result)
            .unwrap_or_else(|| self.result.pk())
    }

    /// Locale segment of the key, empty when i18n is off.
    pub fn i18n_l10n_prefix(&self) -> &str {
        &self.i18n_l10n_prefix
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_key(self) -> String {
        self.key
    }
}

impl fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl fmt::Debug for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheKey")
            .field("admin", &self.admin.admin_path())
            .field("model", &self.result.model_label())
            .field("key", &self.key)
            .finish()
    }
}

/// Locale segment derived from the translation state.
///
/// Localization needs internationalization, so the l10n flag is ignored when
/// i18n is off. With no active language the segment is empty.
pub fn i18n_l10n_prefix(translation: &dyn Translation) -> String {
    if !translation.use_i18n() {
        return String::new();
    }
    let Some(language) = translation.active_language() else {
        return String::new();
    };
    if !translation.use_l10n() {
        return language;
    }

    let locale = translation.to_locale(&language);
    format!("{language}{LOCALE_SEPARATOR}{locale}")
}

fn assemble(prefix: &str, admin_path: &str, model_label: &str, result_key: &str) -> String {
    let mut key = String::with_capacity(
        prefix.len() + admin_path.len() + model_label.len() + result_key.len() + 3,
    );
    if !prefix.is_empty() {
        key.push_str(prefix);
        key.push(LOCALE_SEPARATOR);
    }
    key.push_str(admin_path);
    key.push(SEGMENT_SEPARATOR);
    key.push_str(model_label);
    key.push(SEGMENT_SEPARATOR);
    key.push_str(result_key);
    key
}
