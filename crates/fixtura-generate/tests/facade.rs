use std::sync::Arc;

use fixtura_core::{Error, ResourceStore, Result, StaticSource};
use fixtura_generate::{BUILTIN_PROVIDERS, Generic, GenericOptions, Provider};
use serde_json::{Value, json};

mod first {
    use super::*;

    #[derive(Default)]
    pub struct Sensors;

    impl Provider for Sensors {
        fn fields(&self) -> Vec<&'static str> {
            vec!["reading"]
        }

        fn generate_field(&mut self, name: &str) -> Result<Value> {
            match name {
                "reading" => Ok(json!("first")),
                _ => Err(Error::unsupported("field", name)),
            }
        }
    }
}

mod second {
    use super::*;

    #[derive(Default)]
    pub struct Sensors {
        pub calls: usize,
    }

    impl Provider for Sensors {
        fn fields(&self) -> Vec<&'static str> {
            vec!["reading", "calls"]
        }

        fn generate_field(&mut self, name: &str) -> Result<Value> {
            self.calls += 1;
            match name {
                "reading" => Ok(json!("second")),
                "calls" => Ok(json!(self.calls)),
                _ => Err(Error::unsupported("field", name)),
            }
        }
    }
}

#[derive(Default)]
struct Gadgets;

impl Provider for Gadgets {
    fn declared_name() -> Option<&'static str> {
        Some("gadget_shop")
    }

    fn fields(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn generate_field(&mut self, name: &str) -> Result<Value> {
        Err(Error::unsupported("field", name))
    }
}

#[derive(Default)]
struct Spaced;

impl Provider for Spaced {
    fn declared_name() -> Option<&'static str> {
        Some("not a name")
    }

    fn fields(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn generate_field(&mut self, name: &str) -> Result<Value> {
        Err(Error::unsupported("field", name))
    }
}

#[derive(Default)]
struct Personal;

impl Provider for Personal {
    fn fields(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn generate_field(&mut self, name: &str) -> Result<Value> {
        Err(Error::unsupported("field", name))
    }
}

fn seeded(locale: &str, seed: u64) -> Generic {
    Generic::with_options(GenericOptions {
        locale: locale.to_string(),
        seed: Some(seed),
        store: None,
    })
}

#[test]
fn lazy_accessor_returns_the_same_instance() {
    let mut generic = seeded("en", 1);
    let first: *const fixtura_generate::Personal = generic.personal().expect("personal");
    generic.personal().expect("personal").age(33, 33).expect("age");
    let second: *const fixtura_generate::Personal = generic.personal().expect("personal");
    assert_eq!(first, second);
    assert_eq!(generic.personal().expect("personal").stored_age(), Some(33));
}

#[test]
fn providers_are_built_only_when_used() {
    let mut generic = seeded("en", 1);
    assert!(generic.store().cached_keys().is_empty());
    generic.food().expect("food");
    assert_eq!(
        generic.store().cached_keys(),
        vec![("food".to_string(), "en".to_string())]
    );
}

#[test]
fn type_name_registration_last_wins() {
    let mut generic = seeded("en", 1);
    assert_eq!(generic.register::<first::Sensors>().expect("first"), "sensors");
    assert_eq!(generic.generate("sensors", "reading").expect("reading"), json!("first"));

    assert_eq!(generic.register::<second::Sensors>().expect("second"), "sensors");
    assert_eq!(generic.registered_names(), vec!["sensors"]);
    assert_eq!(generic.generate("sensors", "reading").expect("reading"), json!("second"));
    assert!(generic.registered::<first::Sensors>("sensors").is_none());
    assert_eq!(
        generic
            .registered::<second::Sensors>("sensors")
            .map(|sensors| sensors.calls),
        Some(1)
    );
}

#[test]
fn declared_name_takes_precedence() {
    let mut generic = seeded("en", 1);
    assert_eq!(generic.register::<Gadgets>().expect("gadgets"), "gadget_shop");
    assert!(generic.registered_mut::<Gadgets>("gadget_shop").is_some());
    assert!(generic.registered::<Gadgets>("gadgets").is_none());
}

#[test]
fn invalid_names_leave_registry_untouched() {
    let mut generic = seeded("en", 1);
    generic.register::<first::Sensors>().expect("sensors");

    assert!(matches!(
        generic.register::<Spaced>(),
        Err(Error::InvalidProvider(_))
    ));
    assert!(matches!(
        generic.register::<Personal>(),
        Err(Error::InvalidProvider(_))
    ));
    assert_eq!(generic.registered_names(), vec!["sensors"]);
    assert!(BUILTIN_PROVIDERS.contains(&"personal"));
}

#[test]
fn unknown_provider_and_field_name_the_offender() {
    let mut generic = seeded("en", 1);
    let err = generic.generate("sensors", "reading").expect_err("unknown provider");
    assert!(matches!(err, Error::UnsupportedOption { option: "provider", ref value } if value == "sensors"));
    assert!(matches!(
        generic.generate("food", "pizza"),
        Err(Error::UnsupportedOption { option: "field", .. })
    ));
}

#[test]
fn every_builtin_field_generates() {
    let mut generic = seeded("en", 9);
    for provider in BUILTIN_PROVIDERS {
        let fields = generic.fields(provider).expect("fields");
        assert!(!fields.is_empty(), "{provider} declares no fields");
        for field in fields {
            let value = generic.generate(provider, field).expect("generated");
            assert!(!value.is_null(), "{provider}.{field}");
        }
    }
}

#[test]
fn static_table_providers_are_listed() {
    for name in ["clothing_sizes", "development", "file", "hardware", "internet"] {
        assert!(BUILTIN_PROVIDERS.contains(&name), "{name}");
    }
    let mut generic = seeded("en", 3);
    assert_eq!(
        generic.fields("clothing_sizes").expect("fields"),
        vec!["custom", "european", "international"]
    );
}

#[test]
fn same_seed_same_output() {
    let mut a = seeded("ru", 42);
    let mut b = seeded("ru", 42);
    for _ in 0..5 {
        assert_eq!(
            a.personal().expect("personal").full_name(Default::default(), false).expect("name"),
            b.personal().expect("personal").full_name(Default::default(), false).expect("name"),
        );
        assert_eq!(a.network().ip_v4(), b.network().ip_v4());
    }
}

#[test]
fn unknown_locale_fails_on_bundle_access_only() {
    let mut generic = seeded("xx", 1);
    assert!(matches!(
        generic.personal(),
        Err(Error::ResourceNotFound { ref domain, ref locale }) if domain == "personal" && locale == "xx"
    ));
    let isbn = generic
        .code()
        .expect("code needs no bundle")
        .isbn(Default::default());
    assert!(isbn.chars().next().is_some_and(|c| c.is_ascii_digit()));
    assert!(generic.numbers().between(1, 3).is_ok());
    assert!(generic.hardware().cpu().is_ok());
    let twitter = generic
        .internet()
        .expect("internet reads english names")
        .twitter(Default::default())
        .expect("twitter");
    assert!(twitter.starts_with("http://twitter.com/"));
}

#[test]
fn shared_store_is_used_by_every_provider() {
    const ENTRIES: &[(&str, &str, &str)] = &[(
        "en",
        "food",
        r#"{"vegetables": ["Kale"], "fruits": ["Fig"], "dishes": ["Stew"],
            "spices": ["Salt"], "drinks": ["Tea"]}"#,
    )];
    let store = Arc::new(ResourceStore::new(StaticSource::new(ENTRIES)));
    let mut generic = Generic::with_options(GenericOptions {
        store: Some(Arc::clone(&store)),
        ..GenericOptions::default()
    });
    assert_eq!(generic.food().expect("food").fruit().expect("fruit"), "Fig");
    assert!(store.is_cached("food", "en"));
    assert!(matches!(
        generic.address(),
        Err(Error::ResourceNotFound { .. })
    ));
}

#[test]
fn display_names_kind_locale_and_language() {
    let mut generic = seeded("de", 1);
    assert_eq!(generic.to_string(), "Generic:de:German");
    assert_eq!(
        generic.personal().expect("personal").to_string(),
        "Personal:de:German"
    );
}
