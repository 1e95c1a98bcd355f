use crate::error::{Error, Result};

/// Luhn (mod 10) check digit for a string of decimal digits.
///
/// The returned digit, appended to `number`, makes the whole string pass
/// [`luhn_is_valid`].
pub fn luhn_check_digit(number: &str) -> Result<char> {
    let digits = parse_digits(number)?;
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, &digit)| if idx % 2 == 0 { double(digit) } else { digit })
        .sum();
    let check = (10 - sum % 10) % 10;
    char::from_digit(check, 10)
        .ok_or_else(|| Error::invalid_input(format!("check digit out of range: {check}")))
}

/// `number` followed by its Luhn check digit.
pub fn append_luhn(number: &str) -> Result<String> {
    let check = luhn_check_digit(number)?;
    let mut out = String::with_capacity(number.len() + 1);
    out.push_str(number);
    out.push(check);
    Ok(out)
}

/// Whether `number` (check digit included) passes the Luhn test.
pub fn luhn_is_valid(number: &str) -> bool {
    let Ok(digits) = parse_digits(number) else {
        return false;
    };
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, &digit)| if idx % 2 == 1 { double(digit) } else { digit })
        .sum();
    sum % 10 == 0
}

/// Split `number` into space separated groups of the given sizes.
///
/// The group sizes must add up to the exact length of `number`.
pub fn group_digits(number: &str, groups: &[usize]) -> Result<String> {
    let expected: usize = groups.iter().sum();
    if number.len() != expected || !number.is_ascii() {
        return Err(Error::invalid_input(format!(
            "cannot split '{number}' into groups {groups:?}: expected {expected} characters"
        )));
    }

    let mut parts = Vec::with_capacity(groups.len());
    let mut rest = number;
    for &size in groups {
        let (head, tail) = rest.split_at(size);
        parts.push(head);
        rest = tail;
    }
    Ok(parts.join(" "))
}

fn parse_digits(number: &str) -> Result<Vec<u32>> {
    if number.is_empty() {
        return Err(Error::invalid_input("luhn input must not be empty"));
    }
    number
        .chars()
        .map(|c| {
            c.to_digit(10).ok_or_else(|| {
                Error::invalid_input(format!("luhn input '{number}' contains non-digit '{c}'"))
            })
        })
        .collect()
}

fn double(digit: u32) -> u32 {
    let doubled = digit * 2;
    if doubled > 9 { doubled - 9 } else { doubled }
}
