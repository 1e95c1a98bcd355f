use fixtura_core::Error;
use fixtura_generate::{Generic, GenericOptions, Personal};

fn generic(seed: u64) -> Generic {
    Generic::with_options(GenericOptions {
        seed: Some(seed),
        ..GenericOptions::default()
    })
}

fn personal(generic: &mut Generic) -> &mut Personal {
    generic.personal().expect("english personal bundle")
}

#[test]
fn fixed_age_below_start_has_no_experience() {
    let mut generic = generic(1);
    let person = personal(&mut generic);
    assert_eq!(person.age(18, 18).expect("age"), 18);
    assert_eq!(person.work_experience(22).expect("experience"), 0);
}

#[test]
fn experience_is_age_minus_start() {
    let mut generic = generic(2);
    let person = personal(&mut generic);
    person.age(40, 40).expect("age");
    assert_eq!(person.work_experience(22).expect("experience"), 18);
    assert_eq!(person.work_experience(0).expect("experience"), 40);
    assert_eq!(person.work_experience(60).expect("experience"), 0);
}

#[test]
fn dependent_call_establishes_age_once() {
    let mut generic = generic(3);
    let person = personal(&mut generic);
    assert_eq!(person.stored_age(), None);

    let children = person.child_count(5).expect("children");
    let age = person.stored_age().expect("age established");
    assert!((16..=66).contains(&age));
    assert!(children <= 5);
    if age < 18 {
        assert_eq!(children, 0);
    }

    for _ in 0..20 {
        person.work_experience(22).expect("experience");
        person.child_count(5).expect("children");
        assert_eq!(person.stored_age(), Some(age));
    }
}

#[test]
fn minors_never_have_children() {
    let mut generic = generic(4);
    let person = personal(&mut generic);
    for _ in 0..50 {
        person.age(0, 17).expect("age");
        assert_eq!(person.child_count(5).expect("children"), 0);
    }
}

#[test]
fn adults_stay_within_child_limit() {
    let mut generic = generic(5);
    let person = personal(&mut generic);
    person.age(30, 30).expect("age");
    for _ in 0..50 {
        assert!(person.child_count(2).expect("children") <= 2);
    }
}

#[test]
fn new_age_replaces_stored_age() {
    let mut generic = generic(6);
    let person = personal(&mut generic);
    person.age(20, 20).expect("age");
    person.age(50, 50).expect("age");
    assert_eq!(person.work_experience(22).expect("experience"), 28);
}

#[test]
fn inverted_age_range_is_rejected_without_touching_the_slot() {
    let mut generic = generic(7);
    let person = personal(&mut generic);
    person.age(30, 30).expect("age");
    assert!(matches!(person.age(40, 20), Err(Error::InvalidInput(_))));
    assert_eq!(person.stored_age(), Some(30));
}
