//! Admin handlers and their optional caching capabilities.

use std::time::Duration;

use super::model::Model;

/// The object responsible for rendering a model type in the admin panel.
///
/// Only the type identity is required. Every caching capability has a default
/// that means "not provided", so a plain handler needs no method bodies at all:
///
/// ```
/// use admin_caching::domain::admin::AdminHandler;
///
/// struct GroupAdmin;
/// impl AdminHandler for GroupAdmin {}
/// ```
pub trait AdminHandler: Send + Sync {
    /// Fully-qualified type name of the handler. Defaults to the Rust type path.
    fn admin_path(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Short class name, used in log events.
    fn admin_name(&self) -> &str {
        short_type_name(self.admin_path())
    }

    /// Custom result identifier overriding the primary key.
    ///
    /// `None` means the handler has no override. A returned value is used
    /// verbatim.
    fn caching_key(&self, _result: &dyn Model) -> Option<String> {
        None
    }

    /// Whether rendered rows of this admin should be cached at all.
    fn caching_enabled(&self) -> bool {
        false
    }

    /// Name of the cache the rows should go to.
    fn cache_alias(&self) -> Option<&str> {
        None
    }

    /// Lifetime of a cached row.
    fn caching_timeout(&self) -> Option<Duration> {
        None
    }
}

/// Last path segment of a type path, ignoring generic arguments.
pub fn short_type_name(path: &str) -> &str {
    let head = path.split('<').next().unwrap_or(path);
    let start = head.rfind("::").map(|idx| idx + 2).unwrap_or(0);
    let start = if start == 0 {
        head.rfind('.').map(|idx| idx + 1).unwrap_or(0)
    } else {
        start
    };
    &head[start..]
}

/// An admin handler known only by its path and caching options.
///
/// Built from configuration, where no concrete handler type exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfiguredAdmin {
    path: String,
    enabled: bool,
    cache_alias: Option<String>,
    timeout: Option<Duration>,
}

impl ConfiguredAdmin {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_cache_alias(mut self, alias: impl Into<String>) -> Self {
        self.cache_alias = Some(alias.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl AdminHandler for ConfiguredAdmin {
    fn admin_path(&self) -> &str {
        &self.path
    }

    fn caching_enabled(&self) -> bool {
        self.enabled
    }

    fn cache_alias(&self) -> Option<&str> {
        self.cache_alias.as_deref()
    }

    fn caching_timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
