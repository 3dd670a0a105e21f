use thiserror::Error;

use crate::{config::LoadError, domain::RegistryError, infra::error::InfraError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
