use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::Result;

use crate::intd::{
    CPU, CPU_CODENAMES, GENERATION, GENERATION_ABBR, GRAPHICS, MANUFACTURERS, MEMORY,
    PHONE_MODELS, RAM_SIZES, RAM_TYPES, RESOLUTIONS, SCREEN_SIZES,
};
use crate::providers::{Field, field_table_provider, pick_from, seeded_rng};

/// Lower and upper bound of [`Hardware::cpu_frequency`], in GHz.
const CPU_FREQUENCY_GHZ: (f64, f64) = (1.5, 4.3);

#[derive(Debug)]
pub struct Hardware {
    rng: ChaCha8Rng,
}

impl Hardware {
    pub const NAME: &'static str = "hardware";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed, Self::NAME),
        }
    }

    pub fn resolution(&mut self) -> Result<String> {
        pick_from(RESOLUTIONS, &mut self.rng)
    }

    pub fn screen_size(&mut self) -> Result<String> {
        pick_from(SCREEN_SIZES, &mut self.rng)
    }

    pub fn cpu(&mut self) -> Result<String> {
        pick_from(CPU, &mut self.rng)
    }

    /// Clock speed with one decimal, e.g. `3.2GHz`.
    pub fn cpu_frequency(&mut self) -> String {
        let (low, high) = CPU_FREQUENCY_GHZ;
        let frequency = self.rng.random_range(low..high);
        format!("{frequency:.1}GHz")
    }

    pub fn generation(&mut self, abbr: bool) -> Result<String> {
        let table = if abbr { GENERATION_ABBR } else { GENERATION };
        pick_from(table, &mut self.rng)
    }

    pub fn cpu_codename(&mut self) -> Result<String> {
        pick_from(CPU_CODENAMES, &mut self.rng)
    }

    pub fn ram_type(&mut self) -> Result<String> {
        pick_from(RAM_TYPES, &mut self.rng)
    }

    pub fn ram_size(&mut self) -> Result<String> {
        Ok(format!("{}GB", pick_from(RAM_SIZES, &mut self.rng)?))
    }

    pub fn ssd_or_hdd(&mut self) -> Result<String> {
        pick_from(MEMORY, &mut self.rng)
    }

    pub fn graphics(&mut self) -> Result<String> {
        pick_from(GRAPHICS, &mut self.rng)
    }

    pub fn manufacturer(&mut self) -> Result<String> {
        pick_from(MANUFACTURERS, &mut self.rng)
    }

    pub fn phone_model(&mut self) -> Result<String> {
        pick_from(PHONE_MODELS, &mut self.rng)
    }
}

impl Default for Hardware {
    fn default() -> Self {
        Self::new(None)
    }
}

const FIELDS: &[Field<Hardware>] = &[
    Field::new("cpu", |p| Ok(json!(p.cpu()?))),
    Field::new("cpu_codename", |p| Ok(json!(p.cpu_codename()?))),
    Field::new("cpu_frequency", |p| Ok(json!(p.cpu_frequency()))),
    Field::new("generation", |p| Ok(json!(p.generation(false)?))),
    Field::new("graphics", |p| Ok(json!(p.graphics()?))),
    Field::new("manufacturer", |p| Ok(json!(p.manufacturer()?))),
    Field::new("phone_model", |p| Ok(json!(p.phone_model()?))),
    Field::new("ram_size", |p| Ok(json!(p.ram_size()?))),
    Field::new("ram_type", |p| Ok(json!(p.ram_type()?))),
    Field::new("resolution", |p| Ok(json!(p.resolution()?))),
    Field::new("screen_size", |p| Ok(json!(p.screen_size()?))),
    Field::new("ssd_or_hdd", |p| Ok(json!(p.ssd_or_hdd()?))),
];

field_table_provider!(Hardware, FIELDS);
