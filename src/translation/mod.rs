//! Locale state consulted when building cache keys.
//!
//! [`Translation`] is the read-only view [`crate::cache::CacheKey`] needs;
//! [`TranslationState`] is the in-process implementation driven by
//! [`crate::config::I18nSettings`].

mod locale;
mod state;

pub use locale::to_locale;
pub use state::{LanguageOverride, TranslationState};

/// Current language and formatting switches of the hosting application.
pub trait Translation {
    /// Active language code (`en-us`), or `None` when every language has been
    /// deactivated.
    fn active_language(&self) -> Option<String>;

    /// Whether text translation is enabled.
    fn use_i18n(&self) -> bool;

    /// Whether locale-aware formatting is enabled. Has no effect without i18n.
    fn use_l10n(&self) -> bool;

    /// Locale name for a language code (`de-ch` → `de_CH`).
    fn to_locale(&self, language: &str) -> String {
        to_locale(language)
    }
}
