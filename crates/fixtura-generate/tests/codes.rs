use fixtura_core::{Error, luhn_is_valid};
use fixtura_generate::providers::options::{CardType, EanFormat, IsbnFormat};
use fixtura_generate::{Generic, GenericOptions};
use proptest::prelude::*;

fn seeded(locale: &str, seed: u64) -> Generic {
    Generic::with_options(GenericOptions {
        locale: locale.to_string(),
        seed: Some(seed),
        store: None,
    })
}

fn digits(grouped: &str) -> String {
    grouped.chars().filter(|c| !c.is_whitespace()).collect()
}

fn group_lengths(grouped: &str) -> Vec<usize> {
    grouped.split(' ').map(str::len).collect()
}

#[test]
fn visa_numbers() {
    let mut generic = seeded("en", 1);
    let person = generic.personal().expect("personal");
    for _ in 0..25 {
        let card = person.credit_card_number(CardType::Visa).expect("visa");
        assert_eq!(group_lengths(&card), vec![4, 4, 4, 4]);
        let number = digits(&card);
        assert!(number.starts_with('4'));
        assert!(luhn_is_valid(&number), "{card}");
    }
}

#[test]
fn mastercard_prefixes() {
    let mut generic = seeded("en", 2);
    let person = generic.personal().expect("personal");
    for _ in 0..25 {
        let card = person.credit_card_number(CardType::MasterCard).expect("mc");
        let number = digits(&card);
        let prefix: u32 = number[..4].parse().expect("prefix");
        assert!((2221..=2720).contains(&prefix) || (5100..=5500).contains(&prefix));
        assert_eq!(number.len(), 16);
        assert!(luhn_is_valid(&number), "{card}");
    }
}

#[test]
fn amex_numbers_use_four_six_five() {
    let mut generic = seeded("en", 3);
    let person = generic.personal().expect("personal");
    let card_type: CardType = "amex".parse().expect("alias");
    for _ in 0..25 {
        let card = person.credit_card_number(card_type).expect("amex");
        assert_eq!(group_lengths(&card), vec![4, 6, 5]);
        let number = digits(&card);
        assert!(number.starts_with("34") || number.starts_with("37"));
        assert!(luhn_is_valid(&number), "{card}");
    }
}

#[test]
fn unknown_card_type_is_named() {
    let err = "discover".parse::<CardType>().expect_err("unsupported");
    assert!(matches!(err, Error::UnsupportedOption { ref value, .. } if value == "discover"));
}

#[test]
fn imei_is_fifteen_luhn_digits() {
    let mut generic = seeded("en", 4);
    let code = generic.code().expect("code");
    for _ in 0..25 {
        let imei = code.imei().expect("imei");
        assert_eq!(imei.len(), 15);
        assert!(luhn_is_valid(&imei), "{imei}");
    }
}

#[test]
fn isbn_carries_locale_group() {
    let mut en = seeded("en", 5);
    let isbn10 = en.code().expect("code").isbn(IsbnFormat::Isbn10);
    assert!(isbn10.starts_with("1-"), "{isbn10}");
    assert_eq!(isbn10.len(), "1-#####-###-#".len());

    let mut ru = seeded("ru", 5);
    let isbn13 = ru.code().expect("code").isbn(IsbnFormat::Isbn13);
    let parts: Vec<&str> = isbn13.split('-').collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[1], "5");
    assert!(parts.iter().all(|part| part.chars().all(|c| c.is_ascii_digit())));
}

#[test]
fn ean_lengths() {
    let mut generic = seeded("en", 6);
    let code = generic.code().expect("code");
    assert_eq!(code.ean(EanFormat::Ean8).len(), 8);
    assert_eq!(code.ean(EanFormat::Ean13).len(), 13);
    assert!(matches!(
        "ean-5".parse::<EanFormat>(),
        Err(Error::UnsupportedOption { .. })
    ));
}

#[test]
fn issn_and_pin_masks() {
    let mut generic = seeded("en", 7);
    let code = generic.code().expect("code");
    let issn = code.issn(None);
    assert_eq!(issn.len(), 9);
    assert_eq!(&issn[4..5], "-");
    assert_eq!(code.pin(Some("##")).len(), 2);
    assert_eq!(code.pin(None).len(), 4);
}

#[test]
fn telephone_with_custom_digit_symbol() {
    let mut generic = seeded("en", 8);
    let person = generic.personal().expect("personal");
    let phone = person.telephone(Some("+1-(***)-#"), '*').expect("phone");
    assert!(phone.starts_with("+1-("));
    assert!(phone.ends_with(")-#"));
    assert!(phone[4..7].chars().all(|c| c.is_ascii_digit()));

    assert!(matches!(
        person.telephone(None, '@'),
        Err(Error::InvalidInput(_))
    ));
    let from_bundle = person.telephone(None, '#').expect("phone");
    assert!(!from_bundle.contains('#'));
}

#[test]
fn identifier_default_mask() {
    let mut generic = seeded("en", 9);
    let id = generic.personal().expect("personal").identifier(None);
    let shape: String = id
        .chars()
        .map(|c| if c.is_ascii_digit() { '#' } else { c })
        .collect();
    assert_eq!(shape, "##-##/##");
}

#[test]
fn transport_models_follow_masks() {
    let mut generic = seeded("en", 10);
    let truck = generic.transport().truck(None).expect("truck");
    let (_, model) = truck.rsplit_once('-').expect("make-model");
    let (number, letters) = model.split_once(' ').expect("#### @@");
    assert_eq!(number.len(), 4);
    assert!(number.chars().all(|c| c.is_ascii_digit()));
    assert!(letters.len() == 2 && letters.chars().all(|c| c.is_ascii_uppercase()));

    let plane = generic.transport().airplane(Some("A###")).expect("plane");
    let model = plane.rsplit(' ').next().expect("model");
    assert_eq!(model.len(), 4);
    assert!(model.starts_with(|c: char| c.is_ascii_uppercase()));
}

proptest! {
    #[test]
    fn any_seed_yields_luhn_valid_cards(seed in any::<u64>()) {
        let mut generic = seeded("en", seed);
        let person = generic.personal().expect("personal");
        for card_type in [CardType::Visa, CardType::MasterCard, CardType::AmericanExpress] {
            let card = person.credit_card_number(card_type).expect("card");
            prop_assert!(luhn_is_valid(&digits(&card)), "{}", card);
        }
    }
}
