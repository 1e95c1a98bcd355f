//! Enumerated options accepted by provider methods.
//!
//! Every option parses from its string name; unknown names are rejected with
//! [`Error::UnsupportedOption`] naming the offending value.

use std::fmt;
use std::str::FromStr;

use fixtura_core::Error;

macro_rules! string_option {
    ($ty:ident, $label:literal, { $($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $ty {
            pub fn parse(value: &str) -> Option<Self> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($name $(| $alias)* => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value).ok_or_else(|| Error::unsupported($label, value))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

string_option!(Gender, "gender", {
    Female => "female" | "f",
    Male => "male" | "m",
});

/// Kind of title placed before or after a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TitleKind {
    #[default]
    Typical,
    Academic,
}

string_option!(TitleKind, "title type", {
    Typical => "typical",
    Academic => "academic",
});

/// Card issuing network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardType {
    #[default]
    Visa,
    MasterCard,
    AmericanExpress,
}

string_option!(CardType, "card type", {
    Visa => "visa" | "vi" | "v",
    MasterCard => "master_card" | "mc" | "master" | "m",
    AmericanExpress => "american_express" | "amex" | "ax" | "a",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

string_option!(HashAlgorithm, "hashing algorithm", {
    Md5 => "md5",
    Sha1 => "sha1",
    Sha256 => "sha256",
    Sha512 => "sha512",
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IsbnFormat {
    #[default]
    Isbn10,
    Isbn13,
}

string_option!(IsbnFormat, "isbn format", {
    Isbn10 => "isbn-10" | "isbn10",
    Isbn13 => "isbn-13" | "isbn13",
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EanFormat {
    Ean8,
    #[default]
    Ean13,
}

string_option!(EanFormat, "ean format", {
    Ean8 => "ean-8" | "ean8",
    Ean13 => "ean-13" | "ean13",
});

/// ISO 3166 country code format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountryCodeFormat {
    #[default]
    Iso2,
    Iso3,
    Numeric,
}

string_option!(CountryCodeFormat, "country code format", {
    Iso2 => "iso2",
    Iso3 => "iso3",
    Numeric => "numeric",
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemperatureScale {
    #[default]
    Celsius,
    Fahrenheit,
}

string_option!(TemperatureScale, "temperature scale", {
    Celsius => "c" | "celsius",
    Fahrenheit => "f" | "fahrenheit",
});

/// File category used to pick an extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileType {
    Source,
    #[default]
    Text,
    Data,
    Audio,
    Video,
    Image,
    Executable,
    Compressed,
}

string_option!(FileType, "file type", {
    Source => "source",
    Text => "text",
    Data => "data",
    Audio => "audio",
    Video => "video",
    Image => "image",
    Executable => "executable",
    Compressed => "compressed",
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashtagCategory {
    #[default]
    General,
    Girls,
    Love,
    Boys,
    Friends,
    Family,
    Nature,
    Travel,
    Cars,
    Sport,
    Tumblr,
}

string_option!(HashtagCategory, "hashtag category", {
    General => "general",
    Girls => "girls",
    Love => "love",
    Boys => "boys",
    Friends => "friends",
    Family => "family",
    Nature => "nature",
    Travel => "travel",
    Cars => "cars",
    Sport => "sport",
    Tumblr => "tumblr",
});

/// Category of a stock photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageCategory {
    Buildings,
    Food,
    Nature,
    People,
    Technology,
    Objects,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 6] = [
        Self::Buildings,
        Self::Food,
        Self::Nature,
        Self::People,
        Self::Technology,
        Self::Objects,
    ];
}

string_option!(ImageCategory, "image category", {
    Buildings => "buildings",
    Food => "food",
    Nature => "nature",
    People => "people",
    Technology => "technology",
    Objects => "objects",
});
