//! Result objects rendered by the admin panel.

/// An entity whose rendered admin representation can be cached.
///
/// The model label identifies the entity's type. It is part of every cache key
/// and is the lookup key used by [`crate::admin::AdminRegistry`].
pub trait Model {
    /// Class-qualified name of the model type.
    ///
    /// Defaults to the Rust type path (`my_app::models::Group`). Override it to
    /// keep keys stable across module moves, e.g. `auth.Group`.
    fn model_label(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// String form of the primary key.
    fn pk(&self) -> String;
}

/// A model described purely by its label and primary key.
///
/// Useful when the concrete entity type is not available, for example when a
/// key has to be recomputed from an identifier found in a log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelRef {
    label: String,
    pk: String,
}

impl ModelRef {
    pub fn new(label: impl Into<String>, pk: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pk: pk.into(),
        }
    }
}

impl Model for ModelRef {
    fn model_label(&self) -> &str {
        &self.label
    }

    fn pk(&self) -> String {
        self.pk.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Group {
        id: u32,
    }

    impl Model for Group {
        fn pk(&self) -> String {
            self.id.to_string()
        }
    }

    #[test]
    fn default_label_is_type_path() {
        let group = Group { id: 3 };
        assert_eq!(
            group.model_label(),
            "admin_caching::domain::model::tests::Group"
        );
        assert_eq!(group.pk(), "3");
    }

    #[test]
    fn model_ref_reports_given_label() {
        let model = ModelRef::new("auth.Group", "5");
        assert_eq!(model.model_label(), "auth.Group");
        assert_eq!(model.pk(), "5");
    }
}
