//! Commands run by the `admin-caching` binary.

pub mod error;
pub mod inspect;
