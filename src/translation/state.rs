use std::sync::RwLock;

use tracing::debug;

use crate::config::I18nSettings;
use crate::util::lock::RecoverRwLock;

use super::Translation;

const SOURCE: &str = "translation::state";

/// Process-local translation state.
///
/// The flags are fixed at construction; the active language can be switched at
/// any time and starts out as the configured default language.
#[derive(Debug)]
pub struct TranslationState {
    settings: I18nSettings,
    active: RwLock<Option<String>>,
}

impl TranslationState {
    pub fn new(settings: I18nSettings) -> Self {
        let active = RwLock::new(Some(settings.language_code.clone()));
        Self { settings, active }
    }

    pub fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// Make `language` the active language.
    pub fn activate(&self, language: impl Into<String>) {
        let language = language.into();
        debug!(language = %language, "activating language");
        *self.active.write_or_recover(SOURCE, "activate") = Some(language);
    }

    /// Fall back to the configured default language.
    pub fn deactivate(&self) {
        let default = self.settings.language_code.clone();
        *self.active.write_or_recover(SOURCE, "deactivate") = Some(default);
    }

    /// Leave no language active at all.
    pub fn deactivate_all(&self) {
        debug!("deactivating all languages");
        *self.active.write_or_recover(SOURCE, "deactivate_all") = None;
    }

    /// Switch to `language` until the returned guard is dropped.
    ///
    /// `None` deactivates every language for the guard's lifetime.
    pub fn override_language(&self, language: Option<&str>) -> LanguageOverride<'_> {
        let previous = {
            let mut active = self.active.write_or_recover(SOURCE, "override_language");
            std::mem::replace(&mut *active, language.map(str::to_string))
        };
        LanguageOverride {
            state: self,
            previous,
        }
    }
}

impl Translation for TranslationState {
    fn active_language(&self) -> Option<String> {
        self.active
            .read_or_recover(SOURCE, "active_language")
            .clone()
    }

    fn use_i18n(&self) -> bool {
        self.settings.use_i18n
    }

    fn use_l10n(&self) -> bool {
        self.settings.use_l10n
    }
}

/// Restores the previously active language when dropped.
#[must_use = "the language is restored as soon as the guard is dropped"]
pub struct LanguageOverride<'a> {
    state: &'a TranslationState,
    previous: Option<String>,
}

impl Drop for LanguageOverride<'_> {
    fn drop(&mut self) {
        let previous = self.previous.take();
        let state = self.state;
        *state.active.write_or_recover(SOURCE, "restore_language") = previous;
    }
}
