use thiserror::Error;

/// Failure to find the admin handler for a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("model `{model}` is not registered with the admin site")]
    NotRegistered { model: String },
}

impl RegistryError {
    pub fn not_registered(model: impl Into<String>) -> Self {
        Self::NotRegistered {
            model: model.into(),
        }
    }
}
