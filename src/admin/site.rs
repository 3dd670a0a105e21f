use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::domain::{AdminHandler, Model, RegistryError};
use crate::util::lock::RecoverRwLock;

use super::AdminRegistry;

const SOURCE: &str = "admin::site";

/// Registry of admin handlers keyed by model label.
///
/// Registration replaces any earlier handler for the same label, and lookups
/// always observe the current entry.
pub struct AdminSite {
    registry: RwLock<HashMap<String, Arc<dyn AdminHandler>>>,
}

impl AdminSite {
    /// Create an empty site.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Register `admin` for `model_label`, returning the handler it replaced.
    pub fn register(
        &self,
        model_label: impl Into<String>,
        admin: Arc<dyn AdminHandler>,
    ) -> Option<Arc<dyn AdminHandler>> {
        let model_label = model_label.into();
        debug!(
            model = %model_label,
            admin = admin.admin_path(),
            "registering admin handler"
        );
        self.registry
            .write_or_recover(SOURCE, "register")
            .insert(model_label, admin)
    }

    /// Register `admin` for the model's own label.
    pub fn register_model(
        &self,
        model: &dyn Model,
        admin: Arc<dyn AdminHandler>,
    ) -> Option<Arc<dyn AdminHandler>> {
        self.register(model.model_label(), admin)
    }

    /// Remove the handler for `model_label`.
    pub fn unregister(&self, model_label: &str) -> Option<Arc<dyn AdminHandler>> {
        self.registry
            .write_or_recover(SOURCE, "unregister")
            .remove(model_label)
    }

    pub fn is_registered(&self, model_label: &str) -> bool {
        self.registry
            .read_or_recover(SOURCE, "is_registered")
            .contains_key(model_label)
    }

    /// Registered model labels, sorted.
    pub fn model_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .registry
            .read_or_recover(SOURCE, "model_labels")
            .keys()
            .cloned()
            .collect();
        labels.sort();
        labels
    }

    pub fn len(&self) -> usize {
        self.registry.read_or_recover(SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminRegistry for AdminSite {
    fn admin_for(&self, model_label: &str) -> Result<Arc<dyn AdminHandler>, RegistryError> {
        self.registry
            .read_or_recover(SOURCE, "admin_for")
            .get(model_label)
            .cloned()
            .ok_or_else(|| RegistryError::not_registered(model_label))
    }
}
