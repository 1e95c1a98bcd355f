use std::fmt;

use crate::romanize::{RUSSIAN, UKRAINIAN};

pub const DEFAULT_LOCALE: &str = "en";

/// Per-locale formatting facts that are not part of any bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    /// ISBN registration group, or `#` for a random digit.
    pub isbn_group: &'static str,
    pub currency_symbol: &'static str,
    pub romanization: Option<&'static [(char, &'static str)]>,
}

const DEFAULT_PROFILE: LocaleProfile = LocaleProfile {
    code: "",
    name: "Unknown",
    native_name: "Unknown",
    isbn_group: "#",
    currency_symbol: "$",
    romanization: None,
};

const PROFILES: &[LocaleProfile] = &[
    LocaleProfile {
        code: "de",
        name: "German",
        native_name: "Deutsch",
        isbn_group: "3",
        currency_symbol: "€",
        romanization: None,
    },
    LocaleProfile {
        code: "en",
        name: "English",
        native_name: "English",
        isbn_group: "1",
        currency_symbol: "$",
        romanization: None,
    },
    LocaleProfile {
        code: "ru",
        name: "Russian",
        native_name: "Русский",
        isbn_group: "5",
        currency_symbol: "₽",
        romanization: Some(RUSSIAN),
    },
    LocaleProfile {
        code: "uk",
        name: "Ukrainian",
        native_name: "Українська",
        isbn_group: "966",
        currency_symbol: "₴",
        romanization: Some(UKRAINIAN),
    },
];

/// Profile for `code`, or a neutral default for unknown locales.
pub fn profile(code: &str) -> &'static LocaleProfile {
    PROFILES
        .iter()
        .find(|profile| profile.code == code)
        .unwrap_or(&DEFAULT_PROFILE)
}

pub fn is_known(code: &str) -> bool {
    PROFILES.iter().any(|profile| profile.code == code)
}

/// English name of the locale's language.
pub fn locale_information(code: &str) -> &'static str {
    profile(code).name
}

/// `Kind:locale:Language`, used by provider `Display` impls.
pub fn describe(f: &mut fmt::Formatter<'_>, kind: &str, locale: &str) -> fmt::Result {
    write!(f, "{}:{}:{}", kind, locale, locale_information(locale))
}
