//! Key composition tests for admin rows.
//!
//! Models and admins are declared here so the default type-path identities
//! resolve to this test crate.

use std::any::type_name;
use std::sync::Arc;

use admin_caching::admin::{AdminRegistry, AdminSite};
use admin_caching::cache::CacheKey;
use admin_caching::config::I18nSettings;
use admin_caching::domain::{AdminHandler, Model, RegistryError};
use admin_caching::translation::{Translation, TranslationState};

struct Group {
    pk: u32,
}

impl Model for Group {
    fn model_label(&self) -> &str {
        "auth.Group"
    }

    fn pk(&self) -> String {
        self.pk.to_string()
    }
}

struct Session;

impl Model for Session {
    fn model_label(&self) -> &str {
        "sessions.Session"
    }

    fn pk(&self) -> String {
        "s3ss10n".to_string()
    }
}

struct GroupAdmin;
impl AdminHandler for GroupAdmin {}

struct SessionAdmin;
impl AdminHandler for SessionAdmin {}

struct AdminWithCustomCacheKey;

impl AdminHandler for AdminWithCustomCacheKey {
    fn caching_key(&self, _result: &dyn Model) -> Option<String> {
        Some("Foo:Bar:9".to_string())
    }
}

fn translation(i18n: bool, l10n: bool) -> TranslationState {
    TranslationState::new(I18nSettings {
        use_i18n: i18n,
        use_l10n: l10n,
        language_code: "en-us".to_string(),
    })
}

fn site() -> AdminSite {
    let site = AdminSite::new();
    site.register("auth.Group", Arc::new(GroupAdmin));
    site.register("sessions.Session", Arc::new(SessionAdmin));
    site
}

#[test]
fn key_is_derived_from_admin_and_object_by_default() {
    let translation = translation(false, false);
    let cases: [(Arc<dyn AdminHandler>, Group, String); 2] = [
        (
            Arc::new(SessionAdmin),
            Group { pk: 3 },
            format!("{}-auth.Group-3", type_name::<SessionAdmin>()),
        ),
        (
            Arc::new(GroupAdmin),
            Group { pk: 5 },
            format!("{}-auth.Group-5", type_name::<GroupAdmin>()),
        ),
    ];

    for (admin, result, expected) in cases {
        let key = CacheKey::with_admin(&result, admin, &translation);
        assert_eq!(key.result_key(), result.pk.to_string());
        assert_eq!(key.key(), expected);
    }
}

#[test]
fn admin_can_override_the_result_key() {
    let translation = translation(false, false);
    let group = Group { pk: 55 };

    let key = CacheKey::with_admin(&group, Arc::new(AdminWithCustomCacheKey), &translation);

    assert_eq!(key.result_key(), "Foo:Bar:9");
    assert_eq!(
        key.key(),
        format!(
            "{}-auth.Group-Foo:Bar:9",
            type_name::<AdminWithCustomCacheKey>()
        )
    );
}

#[test]
fn custom_result_key_is_used_verbatim() {
    struct Verbatim;
    impl AdminHandler for Verbatim {
        fn caching_key(&self, result: &dyn Model) -> Option<String> {
            Some(format!(" {}.x-y ", result.pk()))
        }
    }

    let translation = translation(true, false);
    let group = Group { pk: 1 };
    let key = CacheKey::with_admin(&group, Arc::new(Verbatim), &translation);

    assert_eq!(key.result_key(), " 1.x-y ");
    assert!(key.key().ends_with("-auth.Group- 1.x-y "));
}

#[test]
fn admin_is_resolved_from_the_registry_when_not_given() {
    let site = site();
    let translation = translation(false, false);
    let group = Group { pk: 1 };

    let explicit: Arc<dyn AdminHandler> = Arc::new(SessionAdmin);
    let with_explicit = CacheKey::with_admin(&group, Arc::clone(&explicit), &translation);
    assert!(Arc::ptr_eq(with_explicit.admin(), &explicit));

    let registered = site.admin_for("auth.Group").expect("registered");
    let derived = CacheKey::new(&group, &site, &translation).expect("registered");
    assert!(Arc::ptr_eq(derived.admin(), &registered));

    let replacement: Arc<dyn AdminHandler> = Arc::new(AdminWithCustomCacheKey);
    site.register("auth.Group", Arc::clone(&replacement));
    let rederived = CacheKey::new(&group, &site, &translation).expect("registered");
    assert!(Arc::ptr_eq(rederived.admin(), &replacement));
    assert_eq!(rederived.result_key(), "Foo:Bar:9");

    // The earlier key keeps the handler it was built with.
    assert!(Arc::ptr_eq(derived.admin(), &registered));
}

#[test]
fn unregistered_model_without_admin_fails() {
    let site = AdminSite::new();
    let translation = translation(true, true);

    let err = CacheKey::new(&Group { pk: 1 }, &site, &translation).expect_err("not registered");
    assert_eq!(err, RegistryError::not_registered("auth.Group"));
}

#[test]
fn explicit_admin_needs_no_registration() {
    let site = AdminSite::new();
    let translation = translation(false, false);
    let session = Session;

    let key = CacheKey::with_admin(&session, Arc::new(GroupAdmin), &translation);
    assert!(site.is_empty());
    assert_eq!(
        key.key(),
        format!("{}-sessions.Session-s3ss10n", type_name::<GroupAdmin>())
    );
}

#[test]
fn key_is_i18n_l10n_aware_if_settings_enabled() {
    let site = site();
    let cases = [
        ("en", true, true, "en.en"),
        ("de-ch", true, true, "de-ch.de_CH"),
        ("en-us", true, true, "en-us.en_US"),
        ("en-us", true, false, "en-us"),
        // Localization does nothing without internationalization.
        ("en-us", false, true, ""),
        ("en-us", false, false, ""),
    ];

    for (language, i18n, l10n, expected_prefix) in cases {
        let translation = translation(i18n, l10n);
        let _language = translation.override_language(Some(language));
        let group = Group { pk: 1 };

        let key = CacheKey::new(&group, &site, &translation).expect("registered");
        assert_eq!(key.i18n_l10n_prefix(), expected_prefix, "{language}");
        assert!(key.key().starts_with(expected_prefix));
        if expected_prefix.is_empty() {
            assert!(key.key().starts_with(type_name::<GroupAdmin>()));
        } else {
            assert!(key.key().starts_with(&format!("{expected_prefix}.")));
            assert_eq!(
                key.key(),
                format!("{expected_prefix}.{}-auth.Group-1", type_name::<GroupAdmin>())
            );
        }
    }
}

#[test]
fn key_survives_deactivating_every_language() {
    let site = site();
    let translation = translation(true, true);
    let _language = translation.override_language(Some("en"));
    translation.deactivate_all();

    let group = Group { pk: 1 };
    let key = CacheKey::new(&group, &site, &translation).expect("registered");

    assert_eq!(key.i18n_l10n_prefix(), "");
    assert_eq!(
        key.key(),
        format!("{}-auth.Group-1", type_name::<GroupAdmin>())
    );
}

#[test]
fn prefix_is_captured_at_construction() {
    let site = site();
    let translation = translation(true, false);
    let group = Group { pk: 2 };

    let before = CacheKey::new(&group, &site, &translation).expect("registered");
    translation.activate("fr");

    assert_eq!(before.i18n_l10n_prefix(), "en-us");
    assert_eq!(translation.active_language().as_deref(), Some("fr"));
}

#[test]
fn identical_inputs_produce_identical_keys() {
    let site = site();
    let translation = translation(true, true);
    let _language = translation.override_language(Some("de-ch"));
    let group = Group { pk: 42 };

    let first = CacheKey::new(&group, &site, &translation).expect("registered");
    let second = CacheKey::new(&group, &site, &translation).expect("registered");

    assert_eq!(first.key(), second.key());
    assert_eq!(first.to_string(), second.into_key());
}

#[test]
fn different_objects_get_different_keys() {
    let site = site();
    let translation = translation(true, true);

    let one = Group { pk: 1 };
    let two = Group { pk: 2 };
    let first = CacheKey::new(&one, &site, &translation).expect("registered");
    let second = CacheKey::new(&two, &site, &translation).expect("registered");

    assert_ne!(first.key(), second.key());
}
