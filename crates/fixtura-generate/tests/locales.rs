use fixtura_core::{Error, romanize};
use fixtura_generate::assets::{directory_store, embedded_locales};
use fixtura_generate::providers::options::{CountryCodeFormat, Gender, TemperatureScale};
use fixtura_generate::{Generic, GenericOptions};

fn seeded(locale: &str, seed: u64) -> Generic {
    Generic::with_options(GenericOptions {
        locale: locale.to_string(),
        seed: Some(seed),
        store: None,
    })
}

#[test]
fn addresses_render_for_every_embedded_locale() {
    for locale in embedded_locales() {
        let mut generic = seeded(locale, 1);
        let address = generic.address().expect("address");
        for _ in 0..10 {
            let rendered = address.address().expect("rendered");
            assert!(!rendered.contains('{') && !rendered.contains('}'), "{rendered}");
        }
        let postal = address.postal_code().expect("postal code");
        assert!(postal.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn postal_code_length_follows_locale() {
    let mut ru = seeded("ru", 2);
    assert_eq!(ru.address().expect("address").postal_code().expect("code").len(), 6);
    let mut en = seeded("en", 2);
    assert_eq!(en.address().expect("address").postal_code().expect("code").len(), 5);
}

#[test]
fn russian_names_romanize_to_latin() {
    let mut generic = seeded("ru", 3);
    let person = generic.personal().expect("personal");
    for gender in [Gender::Female, Gender::Male] {
        let name = person.full_name(gender, false).expect("name");
        let latin = romanize(&name, "ru").expect("romanized");
        assert!(latin.is_ascii(), "{name} -> {latin}");
    }
    assert!(matches!(romanize("Hallo", "de"), Err(Error::UnsupportedLocale(_))));
}

#[test]
fn currency_symbol_follows_locale() {
    let mut en = seeded("en", 4);
    let price = en.business().expect("business").price(10.0, 10.0).expect("price");
    assert_eq!(price, "10.00 $");
    let mut ru = seeded("ru", 4);
    assert!(ru.business().expect("business").price(1.0, 2.0).expect("price").ends_with('₽'));
}

#[test]
fn non_finite_float_bounds_are_invalid_input() {
    let mut generic = seeded("en", 4);
    assert!(matches!(
        generic.numbers().rating(f64::NAN),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        generic.business().expect("business").price(0.0, f64::INFINITY),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        generic.personal().expect("personal").height(f64::NAN, 2.0),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        generic.business().expect("business").price(-f64::MAX, f64::MAX),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn dates_use_locale_format() {
    let mut de = seeded("de", 5);
    let date = de.datetime().expect("datetime").date(2000, 2000, None).expect("date");
    let parts: Vec<&str> = date.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[2], "2000");

    let mut en = seeded("en", 5);
    let datetime = en.datetime().expect("datetime");
    let custom = datetime.date(1999, 1999, Some("%Y")).expect("date");
    assert_eq!(custom, "1999");
    assert!(matches!(
        datetime.date(2001, 2000, None),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn text_helpers() {
    let mut generic = seeded("en", 6);
    let text = generic.text().expect("text");
    assert_eq!(text.alphabet(true).expect("alphabet").len(), 26);
    assert_eq!(text.words(3).expect("words").len(), 3);
    let color = text.hex_color();
    assert_eq!(color.len(), 7);
    assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(
        text.weather(TemperatureScale::Fahrenheit, 100, 100).expect("weather"),
        "212.0 °F"
    );
}

#[test]
fn views_and_swear_words_exist_in_every_locale() {
    for locale in embedded_locales() {
        let mut generic = seeded(locale, 12);
        let person = generic.personal().expect("personal");
        for value in [
            person.sexual_orientation(false).expect("sexuality"),
            person.political_views().expect("political views"),
            person.worldview().expect("worldview"),
            person.views_on().expect("views on"),
            person.favorite_movie().expect("movie"),
        ] {
            assert!(!value.is_empty(), "{locale}");
        }
        assert!(!generic.text().expect("text").swear_word().expect("swear").is_empty());
    }
}

#[test]
fn country_codes_by_format() {
    let mut generic = seeded("en", 7);
    let address = generic.address().expect("address");
    assert_eq!(address.country_iso(CountryCodeFormat::Iso2).expect("iso2").len(), 2);
    assert_eq!(address.country_iso(CountryCodeFormat::Iso3).expect("iso3").len(), 3);
    let numeric = address.country_iso(CountryCodeFormat::Numeric).expect("numeric");
    assert!(numeric.len() == 3 && numeric.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn directory_bundles_override_embedded_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locale_dir = dir.path().join("eo");
    std::fs::create_dir_all(&locale_dir).expect("locale dir");
    std::fs::write(
        locale_dir.join("food.json"),
        r#"{"vegetables": ["Karoto"], "fruits": ["Pomo"], "dishes": ["Supo"],
            "spices": ["Salo"], "drinks": ["Teo"]}"#,
    )
    .expect("bundle");

    let mut generic = Generic::with_options(GenericOptions {
        locale: "eo".to_string(),
        seed: Some(8),
        store: Some(directory_store(dir.path())),
    });
    assert_eq!(generic.food().expect("food").fruit().expect("fruit"), "Pomo");
    assert!(matches!(
        generic.science(),
        Err(Error::ResourceNotFound { .. })
    ));
}
