//! Result objects, admin handlers and the errors raised while resolving them.

pub mod admin;
pub mod error;
pub mod model;

pub use admin::{AdminHandler, ConfiguredAdmin};
pub use error::RegistryError;
pub use model::{Model, ModelRef};
