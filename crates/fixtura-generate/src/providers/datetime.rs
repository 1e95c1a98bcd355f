use std::fmt::{self, Write as _};

use chrono::{Datelike, NaiveDate, NaiveTime};
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::{Bundle, Error, Result, locale};

use crate::intd::ROMAN_CENTURIES;
use crate::providers::{Field, ProviderContext, check_range, field_table_provider};

pub const DEFAULT_MIN_YEAR: i32 = 1990;
pub const DEFAULT_MAX_YEAR: i32 = 2050;
pub const DEFAULT_DATE_START: i32 = 2000;
pub const DEFAULT_DATE_END: i32 = 2035;

/// Dates, times and calendar names formatted for the locale.
///
/// Format strings use chrono's strftime syntax. A format the value cannot be
/// rendered with (for example `%H` on a date) is reported as invalid input.
#[derive(Debug)]
pub struct Datetime {
    locale: String,
    bundle: Bundle,
    rng: ChaCha8Rng,
}

impl Datetime {
    pub const NAME: &'static str = "datetime";

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

    pub fn day_of_week(&mut self, abbr: bool) -> Result<String> {
        let path = if abbr { "day.abbr" } else { "day.name" };
        Ok(self.bundle.pick(path, &mut self.rng)?.to_string())
    }

    pub fn month(&mut self, abbr: bool) -> Result<String> {
        let path = if abbr { "month.abbr" } else { "month.name" };
        Ok(self.bundle.pick(path, &mut self.rng)?.to_string())
    }

    pub fn year(&mut self, minimum: i32, maximum: i32) -> Result<i32> {
        check_range("year", minimum, maximum)?;
        Ok(self.rng.random_range(minimum..=maximum))
    }

    /// Century in roman numerals.
    pub fn century(&mut self) -> Result<String> {
        ROMAN_CENTURIES
            .choose(&mut self.rng)
            .map(|century| century.to_string())
            .ok_or_else(|| Error::invalid_input("no centuries"))
    }

    pub fn periodicity(&mut self) -> Result<String> {
        Ok(self.bundle.pick("periodicity", &mut self.rng)?.to_string())
    }

    /// Random calendar date in `[start_year, end_year]`, rendered with `fmt`
    /// or the locale's `formats.date`.
    pub fn date(&mut self, start_year: i32, end_year: i32, fmt: Option<&str>) -> Result<String> {
        let year = self.year(start_year, end_year)?;
        let month = self.rng.random_range(1..=12);
        let day = self.rng.random_range(1..=days_in_month(year, month));
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::invalid_input(format!("{year:04}-{month:02}-{day:02} is not a date"))
        })?;
        let fmt = match fmt {
            Some(fmt) => fmt,
            None => self.bundle.str("formats.date")?,
        };
        render(fmt, date.format(fmt))
    }

    /// Random time of day rendered with `fmt` or the locale's `formats.time`.
    pub fn time(&mut self, fmt: Option<&str>) -> Result<String> {
        let time = NaiveTime::from_hms_micro_opt(
            self.rng.random_range(0..24),
            self.rng.random_range(0..60),
            self.rng.random_range(0..60),
            self.rng.random_range(0..1_000_000),
        )
        .ok_or_else(|| Error::invalid_input("generated time out of range"))?;
        let fmt = match fmt {
            Some(fmt) => fmt,
            None => self.bundle.str("formats.time")?,
        };
        render(fmt, time.format(fmt))
    }

    pub fn day_of_month(&mut self) -> u32 {
        self.rng.random_range(1..=31)
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Datetime", &self.locale)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

fn render(fmt: &str, value: impl fmt::Display) -> Result<String> {
    let mut out = String::new();
    write!(out, "{value}")
        .map_err(|_| Error::invalid_input(format!("cannot render with format '{fmt}'")))?;
    Ok(out)
}

const FIELDS: &[Field<Datetime>] = &[
    Field::new("century", |p| Ok(json!(p.century()?))),
    Field::new("date", |p| {
        Ok(json!(p.date(DEFAULT_DATE_START, DEFAULT_DATE_END, None)?))
    }),
    Field::new("day_of_month", |p| Ok(json!(p.day_of_month()))),
    Field::new("day_of_week", |p| Ok(json!(p.day_of_week(false)?))),
    Field::new("month", |p| Ok(json!(p.month(false)?))),
    Field::new("periodicity", |p| Ok(json!(p.periodicity()?))),
    Field::new("time", |p| Ok(json!(p.time(None)?))),
    Field::new("year", |p| {
        Ok(json!(p.year(DEFAULT_MIN_YEAR, DEFAULT_MAX_YEAR)?))
    }),
];

field_table_provider!(Datetime, FIELDS);
