//! Admin handler lookup.
//!
//! [`AdminRegistry`] is the read-only capability consumed by
//! [`crate::cache::CacheKey`]; [`AdminSite`] is the in-process implementation
//! populated at startup or by test fixtures.

mod site;

use std::sync::Arc;

use crate::domain::{AdminHandler, RegistryError};

pub use site::AdminSite;

/// Maps a model label to the admin handler registered for it.
pub trait AdminRegistry {
    /// Handler currently registered for `model_label`.
    fn admin_for(&self, model_label: &str) -> Result<Arc<dyn AdminHandler>, RegistryError>;
}
