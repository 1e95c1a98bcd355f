use fixtura_core::Error;
use fixtura_generate::{Generic, GenericOptions};

fn seeded(locale: &str, seed: u64) -> Generic {
    Generic::with_options(GenericOptions {
        locale: locale.to_string(),
        seed: Some(seed),
        store: None,
    })
}

#[test]
fn personal_records_list_under_users() {
    let mut generic = seeded("en", 1);
    let document = generic.structured().json("personal", 3).expect("json");
    let users = document["users"].as_array().expect("users array");
    assert_eq!(users.len(), 3);

    let fields = generic.fields("personal").expect("fields");
    for user in users {
        let record = user.as_object().expect("record");
        assert_eq!(record.len(), fields.len());
        assert!(fields.iter().all(|field| record.contains_key(*field)));
    }
}

#[test]
fn records_keep_age_dependent_fields_consistent() {
    let mut generic = seeded("ru", 2);
    let document = generic.structured().json("personal", 20).expect("json");
    for user in document["users"].as_array().expect("users") {
        let age = user["age"].as_u64().expect("age");
        let experience = user["work_experience"].as_u64().expect("experience");
        assert_eq!(experience, age.saturating_sub(22));
        if age < 18 {
            assert_eq!(user["child_count"].as_u64(), Some(0));
        }
    }
}

#[test]
fn address_and_business_roots() {
    let mut generic = seeded("de", 3);
    let addresses = generic.structured().json("address", 2).expect("json");
    assert_eq!(addresses["addresses"].as_array().map(Vec::len), Some(2));
    let companies = generic.structured().json("business", 1).expect("json");
    assert!(companies["companies"][0]["price"]
        .as_str()
        .is_some_and(|price| price.ends_with('€')));
}

#[test]
fn zero_items_is_an_empty_list() {
    let mut generic = seeded("en", 4);
    let document = generic.structured().json("address", 0).expect("json");
    assert_eq!(document["addresses"].as_array().map(Vec::len), Some(0));
}

#[test]
fn providers_without_a_root_are_unsupported() {
    let mut generic = seeded("en", 5);
    assert!(matches!(
        generic.structured().json("food", 1),
        Err(Error::UnsupportedOption { option: "provider", ref value }) if value == "food"
    ));
}

#[test]
fn hardware_records_list_under_computers() {
    let mut generic = seeded("en", 6);
    let document = generic.structured().json("hardware", 2).expect("json");
    let computers = document["computers"].as_array().expect("computers");
    assert_eq!(computers.len(), 2);
    assert!(computers[0]["cpu_frequency"]
        .as_str()
        .is_some_and(|frequency| frequency.ends_with("GHz")));
}

#[test]
fn css_rules_hold_declarations() {
    let mut generic = seeded("en", 7);
    let mut structured = generic.structured();
    for _ in 0..10 {
        let rule = structured.css().expect("css");
        let (selector, body) = rule.split_once(" {").expect("rule body");
        assert!(!selector.is_empty());
        let body = body.strip_suffix('}').expect("closing brace");
        let declarations: Vec<&str> = body.split("; ").collect();
        assert!((1..=6).contains(&declarations.len()), "{rule}");
        assert!(declarations.iter().all(|declaration| declaration.contains(": ")));
    }
}

#[test]
fn html_wraps_a_sentence_in_a_container() {
    let mut generic = seeded("ru", 8);
    let mut structured = generic.structured();
    for _ in 0..10 {
        let html = structured.html().expect("html");
        let tag = html[1..].split(' ').next().expect("tag name");
        assert!(["a", "div", "p", "span"].contains(&tag), "{html}");
        assert!(html.ends_with(&format!("</{tag}>")), "{html}");
        assert!(html.contains("=\""), "{html}");
    }
}

#[test]
fn html_attribute_values_by_kind() {
    let mut generic = seeded("en", 9);
    let mut structured = generic.structured();
    let href = structured.html_attribute_value("a", "href").expect("href");
    assert!(href.starts_with("http://www."));
    let target = structured.html_attribute_value("a", "target").expect("target");
    assert!(target.starts_with('_'));
    assert!(structured
        .html_attribute_value("span", "style")
        .expect("style")
        .contains(": "));
    assert!(matches!(
        structured.html_attribute_value("table", "id"),
        Err(Error::UnsupportedOption { option: "html tag", .. })
    ));
    assert!(matches!(
        structured.html_attribute_value("div", "href"),
        Err(Error::UnsupportedOption { option: "html attribute", .. })
    ));
}
