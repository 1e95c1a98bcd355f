use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::{Error, Result, mask};

use crate::intd::{AIRPLANES, CARS, TRUCKS};
use crate::providers::{Field, field_table_provider, seeded_rng};

pub const DEFAULT_TRUCK_MASK: &str = "#### @@";
pub const DEFAULT_AIRPLANE_MASK: &str = "###";

#[derive(Debug)]
pub struct Transport {
    rng: ChaCha8Rng,
}

impl Transport {
    pub const NAME: &'static str = "transport";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed, Self::NAME),
        }
    }

    fn make(&mut self, makes: &[&str]) -> Result<String> {
        makes
            .choose(&mut self.rng)
            .map(|make| make.to_string())
            .ok_or_else(|| Error::invalid_input("no vehicle makes"))
    }

    /// `Make-Model`, the model expanded from `model_mask`.
    pub fn truck(&mut self, model_mask: Option<&str>) -> Result<String> {
        let model = mask::expand(model_mask.unwrap_or(DEFAULT_TRUCK_MASK), &mut self.rng);
        let make = self.make(TRUCKS)?;
        Ok(format!("{make}-{model}"))
    }

    pub fn car(&mut self) -> Result<String> {
        self.make(CARS)
    }

    /// `Make Model`, the model expanded from `model_mask`.
    pub fn airplane(&mut self, model_mask: Option<&str>) -> Result<String> {
        let model = mask::expand(model_mask.unwrap_or(DEFAULT_AIRPLANE_MASK), &mut self.rng);
        let make = self.make(AIRPLANES)?;
        Ok(format!("{make} {model}"))
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(None)
    }
}

const FIELDS: &[Field<Transport>] = &[
    Field::new("airplane", |p| Ok(json!(p.airplane(None)?))),
    Field::new("car", |p| Ok(json!(p.car()?))),
    Field::new("truck", |p| Ok(json!(p.truck(None)?))),
];

field_table_provider!(Transport, FIELDS);
