//! Mask expansion: `@` becomes a random uppercase letter, `#` a random digit,
//! everything else is copied through.
//!
//! There is no escape syntax. A literal `@` or `#` can only appear in a
//! template when the caller picks different placeholder symbols.

use rand::Rng;

use crate::error::{Error, Result};

pub const LETTER_PLACEHOLDER: char = '@';
pub const DIGIT_PLACEHOLDER: char = '#';

const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The pair of symbols a template is expanded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    letter: char,
    digit: char,
}

impl Placeholders {
    pub fn new(letter: char, digit: char) -> Result<Self> {
        if letter == digit {
            return Err(Error::invalid_input(format!(
                "letter and digit placeholders must differ, both are '{letter}'"
            )));
        }
        Ok(Self { letter, digit })
    }

    /// Default letter symbol with a custom digit symbol.
    pub fn with_digit(digit: char) -> Result<Self> {
        Self::new(LETTER_PLACEHOLDER, digit)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn digit(&self) -> char {
        self.digit
    }

    /// Number of (letter, digit) placeholders in `template`.
    pub fn count(&self, template: &str) -> (usize, usize) {
        template.chars().fold((0, 0), |(letters, digits), c| {
            if c == self.letter {
                (letters + 1, digits)
            } else if c == self.digit {
                (letters, digits + 1)
            } else {
                (letters, digits)
            }
        })
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            letter: LETTER_PLACEHOLDER,
            digit: DIGIT_PLACEHOLDER,
        }
    }
}

/// Expand `template` with the default `@`/`#` symbols.
pub fn expand<R: Rng + ?Sized>(template: &str, rng: &mut R) -> String {
    expand_with(template, Placeholders::default(), rng)
}

pub fn expand_with<R: Rng + ?Sized>(
    template: &str,
    placeholders: Placeholders,
    rng: &mut R,
) -> String {
    let mut out = String::with_capacity(template.len());
    for c in template.chars() {
        if c == placeholders.letter {
            out.push(char::from(UPPERCASE[rng.random_range(0..UPPERCASE.len())]));
        } else if c == placeholders.digit {
            out.push(char::from(b'0' + rng.random_range(0..10u8)));
        } else {
            out.push(c);
        }
    }
    out
}

/// Expand a template that must yield exactly `digits` random digits and no
/// random letters, e.g. the body of a checksummed identifier.
pub fn expand_digits<R: Rng + ?Sized>(
    template: &str,
    placeholders: Placeholders,
    digits: usize,
    rng: &mut R,
) -> Result<String> {
    let (letter_count, digit_count) = placeholders.count(template);
    if letter_count > 0 {
        return Err(Error::invalid_input(format!(
            "mask '{template}' contains letter placeholders where only digits are allowed"
        )));
    }
    if digit_count != digits {
        return Err(Error::invalid_input(format!(
            "mask '{template}' has {digit_count} digit placeholders, expected {digits}"
        )));
    }
    Ok(expand_with(template, placeholders, rng))
}
