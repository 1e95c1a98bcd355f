use std::fmt;

use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::mask::{self, Placeholders};
use fixtura_core::{Error, Result, append_luhn, locale};

use crate::intd::IMEI_TACS;
use crate::providers::options::{EanFormat, IsbnFormat};
use crate::providers::{Field, ProviderContext, field_table_provider};

pub const DEFAULT_CODE_MASK: &str = "@###";
pub const DEFAULT_ISSN_MASK: &str = "####-####";
pub const DEFAULT_PIN_MASK: &str = "####";

const ISBN10_MASK: &str = "{group}-#####-###-#";
const ISBN13_MASK: &str = "###-{group}-#####-###-#";
const IMEI_SERIAL_DIGITS: usize = 6;

/// Codes and identifiers built from masks (ISBN, EAN, IMEI, PIN...).
#[derive(Debug)]
pub struct Code {
    locale: String,
    rng: ChaCha8Rng,
}

impl Code {
    pub const NAME: &'static str = "code";

    pub fn new(ctx: &ProviderContext) -> Self {
        Self {
            locale: ctx.locale().to_string(),
            rng: ctx.rng(Self::NAME),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Expand `mask` with the given placeholder symbols.
    pub fn custom_code(&mut self, mask: &str, placeholders: Placeholders) -> String {
        mask::expand_with(mask, placeholders, &mut self.rng)
    }

    pub fn issn(&mut self, mask: Option<&str>) -> String {
        mask::expand(mask.unwrap_or(DEFAULT_ISSN_MASK), &mut self.rng)
    }

    /// ISBN with the registration group of the current locale.
    pub fn isbn(&mut self, format: IsbnFormat) -> String {
        let template = match format {
            IsbnFormat::Isbn10 => ISBN10_MASK,
            IsbnFormat::Isbn13 => ISBN13_MASK,
        };
        let group = locale::profile(&self.locale).isbn_group;
        mask::expand(&template.replace("{group}", group), &mut self.rng)
    }

    pub fn ean(&mut self, format: EanFormat) -> String {
        let digits = match format {
            EanFormat::Ean8 => 8,
            EanFormat::Ean13 => 13,
        };
        mask::expand(&"#".repeat(digits), &mut self.rng)
    }

    /// 15-digit IMEI: a known TAC, a random serial and a Luhn check digit.
    pub fn imei(&mut self) -> Result<String> {
        let tac = IMEI_TACS
            .choose(&mut self.rng)
            .ok_or_else(|| Error::invalid_input("no IMEI type allocation codes"))?;
        let serial = mask::expand_digits(
            &"#".repeat(IMEI_SERIAL_DIGITS),
            Placeholders::default(),
            IMEI_SERIAL_DIGITS,
            &mut self.rng,
        )?;
        append_luhn(&format!("{tac}{serial}"))
    }

    pub fn pin(&mut self, mask: Option<&str>) -> String {
        mask::expand(mask.unwrap_or(DEFAULT_PIN_MASK), &mut self.rng)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Code", &self.locale)
    }
}

const FIELDS: &[Field<Code>] = &[
    Field::new("custom_code", |p| {
        Ok(json!(p.custom_code(DEFAULT_CODE_MASK, Placeholders::default())))
    }),
    Field::new("ean", |p| Ok(json!(p.ean(EanFormat::default())))),
    Field::new("imei", |p| Ok(json!(p.imei()?))),
    Field::new("isbn", |p| Ok(json!(p.isbn(IsbnFormat::default())))),
    Field::new("issn", |p| Ok(json!(p.issn(None)))),
    Field::new("pin", |p| Ok(json!(p.pin(None)))),
];

field_table_provider!(Code, FIELDS);
