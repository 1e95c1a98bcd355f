use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::{Error, Result};

use crate::providers::{
    Field, check_float_range, check_range, field_table_provider, seeded_rng,
};

pub const DEFAULT_FLOAT_EXPONENT: u32 = 2;
/// Largest `n` accepted by [`Numbers::floats`].
pub const MAX_FLOAT_EXPONENT: u32 = 7;
pub const DEFAULT_PRIMES_START: u32 = 1;
pub const DEFAULT_PRIMES_END: u32 = 999;
/// Upper bound on the sieve behind [`Numbers::primes`].
pub const MAX_PRIMES_END: u32 = 10_000_000;

#[derive(Debug)]
pub struct Numbers {
    rng: ChaCha8Rng,
}

impl Numbers {
    pub const NAME: &'static str = "numbers";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed, Self::NAME),
        }
    }

    /// `10^n` floats in `[0, 1)`.
    pub fn floats(&mut self, n: u32) -> Result<Vec<f64>> {
        if n > MAX_FLOAT_EXPONENT {
            return Err(Error::invalid_input(format!(
                "floats: exponent {n} exceeds {MAX_FLOAT_EXPONENT}"
            )));
        }
        Ok((0..10usize.pow(n)).map(|_| self.rng.random()).collect())
    }

    /// Every prime in `[start, end)`, ascending.
    pub fn primes(&self, start: u32, end: u32) -> Result<Vec<u32>> {
        check_range("primes", start, end)?;
        if end > MAX_PRIMES_END {
            return Err(Error::invalid_input(format!(
                "primes: end {end} exceeds {MAX_PRIMES_END}"
            )));
        }
        let end = end as usize;
        let mut composite = vec![false; end];
        let mut primes = Vec::new();
        for candidate in 2..end {
            if composite[candidate] {
                continue;
            }
            if candidate >= start as usize {
                primes.push(candidate as u32);
            }
            let mut multiple = candidate.saturating_mul(candidate);
            while multiple < end {
                composite[multiple] = true;
                multiple += candidate;
            }
        }
        Ok(primes)
    }

    pub fn digit(&mut self) -> u8 {
        self.rng.random_range(0..=9)
    }

    pub fn between(&mut self, minimum: i64, maximum: i64) -> Result<i64> {
        check_range("between", minimum, maximum)?;
        Ok(self.rng.random_range(minimum..=maximum))
    }

    /// Rating in `[0, maximum]` rounded to one decimal place.
    pub fn rating(&mut self, maximum: f64) -> Result<f64> {
        check_float_range("rating", 0.0, maximum)?;
        let raw = self.rng.random_range(0.0..=maximum);
        Ok((raw * 10.0).round() / 10.0)
    }
}

impl Default for Numbers {
    fn default() -> Self {
        Self::new(None)
    }
}

const FIELDS: &[Field<Numbers>] = &[
    Field::new("between", |p| Ok(json!(p.between(1, 1000)?))),
    Field::new("digit", |p| Ok(json!(p.digit()))),
    Field::new("floats", |p| Ok(json!(p.floats(DEFAULT_FLOAT_EXPONENT)?))),
    Field::new("primes", |p| {
        Ok(json!(p.primes(DEFAULT_PRIMES_START, DEFAULT_PRIMES_END)?))
    }),
    Field::new("rating", |p| Ok(json!(p.rating(5.0)?))),
];

field_table_provider!(Numbers, FIELDS);
