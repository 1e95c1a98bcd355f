use std::any::Any;
use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use fixtura_core::{Bundle, Error, ResourceStore, Result};

pub mod address;
pub mod business;
pub mod clothing;
pub mod code;
pub mod datetime;
pub mod development;
pub mod file;
pub mod food;
pub mod hardware;
pub mod internet;
pub mod network;
pub mod numbers;
pub mod options;
pub mod personal;
pub mod science;
pub mod text;
pub mod transport;

pub use address::Address;
pub use business::Business;
pub use clothing::ClothingSizes;
pub use code::Code;
pub use datetime::Datetime;
pub use development::Development;
pub use file::File;
pub use food::Food;
pub use hardware::Hardware;
pub use internet::Internet;
pub use network::Network;
pub use numbers::Numbers;
pub use options::Gender;
pub use personal::Personal;
pub use science::Science;
pub use text::Text;
pub use transport::Transport;

/// A group of related generators that can be registered on [`crate::Generic`].
///
/// Providers describe their generators through a declared field table rather
/// than by reflection: `fields` lists the names and `generate_field` runs one
/// of them with its default arguments.
pub trait Provider: Any + Send {
    /// Registration name declared by the type. `None` falls back to the
    /// lowercased type name.
    fn declared_name() -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }

    fn fields(&self) -> Vec<&'static str>;

    fn generate_field(&mut self, name: &str) -> Result<Value>;
}

/// One entry of a provider's field table.
pub struct Field<P> {
    pub name: &'static str,
    pub generate: fn(&mut P) -> Result<Value>,
}

impl<P> Field<P> {
    pub const fn new(name: &'static str, generate: fn(&mut P) -> Result<Value>) -> Self {
        Self { name, generate }
    }
}

pub fn field_names<P>(table: &[Field<P>]) -> Vec<&'static str> {
    table.iter().map(|field| field.name).collect()
}

/// Run the generator called `name` from `table`.
pub fn dispatch<P>(provider: &mut P, table: &[Field<P>], name: &str) -> Result<Value> {
    let field = table
        .iter()
        .find(|field| field.name == name)
        .ok_or_else(|| Error::unsupported("field", name))?;
    (field.generate)(provider)
}

macro_rules! field_table_provider {
    ($provider:ty, $table:expr) => {
        impl $crate::providers::Provider for $provider {
            fn fields(&self) -> Vec<&'static str> {
                $crate::providers::field_names($table)
            }

            fn generate_field(
                &mut self,
                name: &str,
            ) -> fixtura_core::Result<serde_json::Value> {
                $crate::providers::dispatch(self, $table, name)
            }
        }
    };
}
pub(crate) use field_table_provider;

/// What a locale-aware provider needs at construction.
#[derive(Debug, Clone)]
pub struct ProviderContext {
    locale: String,
    store: Arc<ResourceStore>,
    seed: Option<u64>,
}

impl ProviderContext {
    pub fn new(locale: impl Into<String>, store: Arc<ResourceStore>) -> Self {
        Self {
            locale: locale.into(),
            store,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn store(&self) -> &Arc<ResourceStore> {
        &self.store
    }

    /// Bundle for `domain` in this context's locale.
    pub fn load(&self, domain: &str) -> Result<Bundle> {
        self.store.load(domain, &self.locale)
    }

    /// RNG for the provider called `name`, derived from the seed if one is set.
    pub fn rng(&self, name: &str) -> ChaCha8Rng {
        seeded_rng(self.seed, name)
    }
}

pub fn seeded_rng(seed: Option<u64>, key: &str) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(hash_seed(seed, key)),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a of `key` with `seed` folded into the offset basis, so each
/// provider draws from its own stream under one facade seed.
fn hash_seed(seed: u64, key: &str) -> u64 {
    key.bytes().fold(seed ^ FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

pub(crate) fn check_range<T: PartialOrd + std::fmt::Display>(
    what: &str,
    min: T,
    max: T,
) -> Result<()> {
    if min > max {
        return Err(Error::invalid_input(format!(
            "{what}: minimum {min} must be <= maximum {max}"
        )));
    }
    Ok(())
}

/// Uniform pick from a static table.
pub(crate) fn pick_from<R: Rng + ?Sized>(table: &[&str], rng: &mut R) -> Result<String> {
    table
        .choose(rng)
        .map(|value| value.to_string())
        .ok_or_else(|| Error::invalid_input("empty value table"))
}

/// [`check_range`] for floats. NaN, infinite bounds and spans that overflow
/// `f64` are rejected before they reach the sampler.
pub(crate) fn check_float_range(what: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(Error::invalid_input(format!(
            "{what}: bounds must be finite, got {min} and {max}"
        )));
    }
    check_range(what, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_rngs_differ_per_provider() {
        let mut a = seeded_rng(Some(7), "personal");
        let mut b = seeded_rng(Some(7), "address");
        let mut c = seeded_rng(Some(7), "personal");
        let first: u64 = a.random();
        assert_ne!(first, b.random::<u64>());
        assert_eq!(first, c.random::<u64>());
    }

    #[test]
    fn empty_key_keeps_the_mixed_basis() {
        assert_eq!(hash_seed(0, ""), FNV_OFFSET_BASIS);
        assert_ne!(hash_seed(1, "numbers"), hash_seed(2, "numbers"));
    }

    #[test]
    fn float_ranges_must_be_finite() {
        assert!(check_float_range("height", 1.5, 2.0).is_ok());
        for (min, max) in [
            (f64::NAN, 2.0),
            (0.0, f64::NAN),
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
            (-f64::MAX, f64::MAX),
        ] {
            assert!(matches!(
                check_float_range("height", min, max),
                Err(Error::InvalidInput(_))
            ));
        }
        assert!(matches!(
            check_float_range("height", 2.0, 1.0),
            Err(Error::InvalidInput(_))
        ));
    }
}
