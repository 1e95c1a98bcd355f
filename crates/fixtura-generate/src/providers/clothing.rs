use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::Result;

use crate::intd::INTERNATIONAL_SIZES;
use crate::providers::{Field, check_range, field_table_provider, pick_from, seeded_rng};

pub const DEFAULT_CUSTOM_MIN: u32 = 40;
pub const DEFAULT_CUSTOM_MAX: u32 = 62;

#[derive(Debug)]
pub struct ClothingSizes {
    rng: ChaCha8Rng,
}

impl ClothingSizes {
    pub const NAME: &'static str = "clothing_sizes";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed, Self::NAME),
        }
    }

    /// Letter size such as `XL`.
    pub fn international(&mut self) -> Result<String> {
        pick_from(INTERNATIONAL_SIZES, &mut self.rng)
    }

    /// Even European size in `40..=60`.
    pub fn european(&mut self) -> u32 {
        self.rng.random_range(20..=30) * 2
    }

    pub fn custom(&mut self, minimum: u32, maximum: u32) -> Result<u32> {
        check_range("clothing size", minimum, maximum)?;
        Ok(self.rng.random_range(minimum..=maximum))
    }
}

impl Default for ClothingSizes {
    fn default() -> Self {
        Self::new(None)
    }
}

const FIELDS: &[Field<ClothingSizes>] = &[
    Field::new("custom", |p| {
        Ok(json!(p.custom(DEFAULT_CUSTOM_MIN, DEFAULT_CUSTOM_MAX)?))
    }),
    Field::new("european", |p| Ok(json!(p.european()))),
    Field::new("international", |p| Ok(json!(p.international()?))),
];

field_table_provider!(ClothingSizes, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;

    use fixtura_core::Error;

    #[test]
    fn european_sizes_are_even() {
        let mut sizes = ClothingSizes::new(Some(8));
        for _ in 0..50 {
            let size = sizes.european();
            assert!((40..=60).contains(&size));
            assert_eq!(size % 2, 0);
        }
    }

    #[test]
    fn custom_range_is_checked() {
        let mut sizes = ClothingSizes::new(Some(8));
        assert_eq!(sizes.custom(44, 44).expect("size"), 44);
        assert!(matches!(sizes.custom(50, 40), Err(Error::InvalidInput(_))));
    }
}
