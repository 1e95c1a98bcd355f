use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::json;

use fixtura_core::{Bundle, Error, Result, locale, mask};

use crate::intd::{COUNTRIES_ISO2, COUNTRIES_ISO3, COUNTRIES_NUMERIC};
use crate::providers::options::CountryCodeFormat;
use crate::providers::{Field, ProviderContext, field_table_provider};

pub const DEFAULT_MAX_STREET_NUMBER: u32 = 1400;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug)]
pub struct Address {
    locale: String,
    bundle: Bundle,
    rng: ChaCha8Rng,
}

impl Address {
    pub const NAME: &'static str = "address";

    pub fn new(ctx: &ProviderContext) -> Result<Self> {
        Ok(Self {
            locale: ctx.locale().to_string(),
            bundle: ctx.load(Self::NAME)?,
            rng: ctx.rng(Self::NAME),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn street_number(&mut self, maximum: u32) -> Result<String> {
        if maximum == 0 {
            return Err(Error::invalid_input("street number maximum must be at least 1"));
        }
        Ok(self.rng.random_range(1..=maximum).to_string())
    }

    pub fn street_name(&mut self) -> Result<String> {
        Ok(self.bundle.pick("street.name", &mut self.rng)?.to_string())
    }

    pub fn street_suffix(&mut self) -> Result<String> {
        Ok(self.bundle.pick("street.suffix", &mut self.rng)?.to_string())
    }

    /// Full street address laid out by the locale's `address_fmt`.
    pub fn address(&mut self) -> Result<String> {
        let template = self.bundle.str("address_fmt")?.to_string();
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                Error::InvalidBundle(format!(
                    "unclosed placeholder in address_fmt '{template}' for {}",
                    self.locale
                ))
            })?;
            let value = match &after[..close] {
                "st_num" => self.street_number(DEFAULT_MAX_STREET_NUMBER)?,
                "st_name" => self.street_name()?,
                "st_sfx" => self.street_suffix()?,
                "city" => self.city()?,
                other => {
                    return Err(Error::InvalidBundle(format!(
                        "unknown placeholder '{{{other}}}' in address_fmt for {}",
                        self.locale
                    )));
                }
            };
            out.push_str(&value);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// State or region name, or its ISO 3166-2 code when `abbr` is set.
    pub fn state(&mut self, abbr: bool) -> Result<String> {
        let path = if abbr { "state.abbr" } else { "state.name" };
        Ok(self.bundle.pick(path, &mut self.rng)?.to_string())
    }

    pub fn postal_code(&mut self) -> Result<String> {
        let template = self.bundle.str("postal_code_fmt")?;
        Ok(mask::expand(template, &mut self.rng))
    }

    pub fn country(&mut self) -> Result<String> {
        Ok(self.bundle.pick("country.name", &mut self.rng)?.to_string())
    }

    pub fn country_iso(&mut self, format: CountryCodeFormat) -> Result<String> {
        let codes = match format {
            CountryCodeFormat::Iso2 => COUNTRIES_ISO2,
            CountryCodeFormat::Iso3 => COUNTRIES_ISO3,
            CountryCodeFormat::Numeric => COUNTRIES_NUMERIC,
        };
        codes
            .choose(&mut self.rng)
            .map(|code| code.to_string())
            .ok_or_else(|| Error::invalid_input("no country codes"))
    }

    pub fn city(&mut self) -> Result<String> {
        Ok(self.bundle.pick("city", &mut self.rng)?.to_string())
    }

    pub fn latitude(&mut self) -> f64 {
        self.rng.random_range(-90.0..=90.0)
    }

    pub fn longitude(&mut self) -> f64 {
        self.rng.random_range(-180.0..=180.0)
    }

    pub fn coordinates(&mut self) -> Coordinates {
        Coordinates {
            latitude: self.latitude(),
            longitude: self.longitude(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Address", &self.locale)
    }
}

const FIELDS: &[Field<Address>] = &[
    Field::new("address", |p| Ok(json!(p.address()?))),
    Field::new("street_number", |p| {
        Ok(json!(p.street_number(DEFAULT_MAX_STREET_NUMBER)?))
    }),
    Field::new("street_name", |p| Ok(json!(p.street_name()?))),
    Field::new("street_suffix", |p| Ok(json!(p.street_suffix()?))),
    Field::new("city", |p| Ok(json!(p.city()?))),
    Field::new("state", |p| Ok(json!(p.state(false)?))),
    Field::new("postal_code", |p| Ok(json!(p.postal_code()?))),
    Field::new("country", |p| Ok(json!(p.country()?))),
    Field::new("country_iso", |p| {
        Ok(json!(p.country_iso(CountryCodeFormat::default())?))
    }),
    Field::new("latitude", |p| Ok(json!(p.latitude()))),
    Field::new("longitude", |p| Ok(json!(p.longitude()))),
    Field::new("coordinates", |p| Ok(json!(p.coordinates()))),
];

field_table_provider!(Address, FIELDS);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use fixtura_core::{ResourceStore, StaticSource};

    const ENTRIES: &[(&str, &str, &str)] = &[
        (
            "en",
            "address",
            r#"{"street": {"name": ["Elm"], "suffix": ["Street"]},
                "address_fmt": "{st_num} {st_name} {st_sfx}", "city": ["Springfield"]}"#,
        ),
        (
            "xx",
            "address",
            r#"{"street": {"name": ["Elm"], "suffix": ["Street"]},
                "address_fmt": "{st_name} {house}"}"#,
        ),
    ];

    fn address(locale: &str) -> Address {
        let store = Arc::new(ResourceStore::new(StaticSource::new(ENTRIES)));
        Address::new(&ProviderContext::new(locale, store).with_seed(Some(11))).expect("address")
    }

    #[test]
    fn renders_named_placeholders() {
        let rendered = address("en").address().expect("address");
        let (number, street) = rendered.split_once(' ').expect("number first");
        assert!(number.parse::<u32>().is_ok_and(|n| (1..=1400).contains(&n)));
        assert_eq!(street, "Elm Street");
    }

    #[test]
    fn unknown_placeholder_is_a_bundle_error() {
        let err = address("xx").address().expect_err("unknown placeholder");
        assert!(matches!(err, Error::InvalidBundle(message) if message.contains("{house}")));
    }
}
