use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::{Bundle, Error, Result, locale};

use crate::intd::CURRENCIES;
use crate::providers::{Field, ProviderContext, check_float_range, field_table_provider};

pub const DEFAULT_FOUNDED_MIN: u32 = 1990;
pub const DEFAULT_FOUNDED_MAX: u32 = 2016;
pub const DEFAULT_PRICE_MIN: f64 = 10.0;
pub const DEFAULT_PRICE_MAX: f64 = 1000.0;

#[derive(Debug)]
pub struct Business {
    locale: String,
    bundle: Bundle,
    rng: ChaCha8Rng,
}

impl Business {
    pub const NAME: &'static str = "business";

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

    /// Legal form of a company, e.g. `Incorporated` or `Inc.` when `abbr`.
    pub fn company_type(&mut self, abbr: bool) -> Result<String> {
        let path = if abbr {
            "company.type.abbr"
        } else {
            "company.type.title"
        };
        Ok(self.bundle.pick(path, &mut self.rng)?.to_string())
    }

    pub fn company(&mut self) -> Result<String> {
        Ok(self.bundle.pick("company.name", &mut self.rng)?.to_string())
    }

    /// `© 1990-2016 Company, Inc.`; the founding year is strictly before
    /// `maximum`. Without a date: `© Company, Inc.`.
    pub fn copyright(&mut self, with_date: bool, minimum: u32, maximum: u32) -> Result<String> {
        let kind = self.company_type(true)?;
        if !with_date {
            let company = self.company()?;
            return Ok(format!("© {company}, {kind}"));
        }
        if minimum >= maximum {
            return Err(Error::invalid_input(format!(
                "copyright: minimum {minimum} must be < maximum {maximum}"
            )));
        }
        let founded = self.rng.random_range(minimum..maximum);
        let company = self.company()?;
        Ok(format!("© {founded}-{maximum} {company}, {kind}"))
    }

    /// ISO 4217 currency code.
    pub fn currency_iso(&mut self) -> Result<String> {
        CURRENCIES
            .choose(&mut self.rng)
            .map(|code| code.to_string())
            .ok_or_else(|| Error::invalid_input("no currencies"))
    }

    /// Price with two decimals followed by the locale's currency symbol.
    pub fn price(&mut self, minimum: f64, maximum: f64) -> Result<String> {
        check_float_range("price", minimum, maximum)?;
        let price = if minimum == maximum {
            minimum
        } else {
            self.rng.random_range(minimum..maximum)
        };
        let symbol = locale::profile(&self.locale).currency_symbol;
        Ok(format!("{price:.2} {symbol}"))
    }
}

impl fmt::Display for Business {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Business", &self.locale)
    }
}

const FIELDS: &[Field<Business>] = &[
    Field::new("company", |p| Ok(json!(p.company()?))),
    Field::new("company_type", |p| Ok(json!(p.company_type(false)?))),
    Field::new("copyright", |p| {
        Ok(json!(p.copyright(
            true,
            DEFAULT_FOUNDED_MIN,
            DEFAULT_FOUNDED_MAX
        )?))
    }),
    Field::new("currency_iso", |p| Ok(json!(p.currency_iso()?))),
    Field::new("price", |p| {
        Ok(json!(p.price(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)?))
    }),
];

field_table_provider!(Business, FIELDS);
