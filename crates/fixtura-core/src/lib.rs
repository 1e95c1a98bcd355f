//! Core machinery for fixtura.
//!
//! This crate holds the pieces every provider builds on: the locale bundle
//! store, the mask engine, Luhn checksums, the derived-attribute slot and the
//! per-locale profile table.

pub mod bundle;
pub mod checksum;
pub mod derived;
pub mod error;
pub mod locale;
pub mod mask;
pub mod romanize;
pub mod store;

pub use bundle::Bundle;
pub use checksum::{append_luhn, group_digits, luhn_check_digit, luhn_is_valid};
pub use derived::Derived;
pub use error::{Error, Result};
pub use locale::{DEFAULT_LOCALE, LocaleProfile, locale_information};
pub use mask::{DIGIT_PLACEHOLDER, LETTER_PLACEHOLDER, Placeholders, expand, expand_with};
pub use romanize::romanize;
pub use store::{BundleSource, DirectorySource, ResourceStore, StaticSource};
