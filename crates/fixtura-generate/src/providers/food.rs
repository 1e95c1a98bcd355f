use std::fmt;

use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::{Bundle, Result, locale};

use crate::providers::{Field, ProviderContext, field_table_provider};

#[derive(Debug)]
pub struct Food {
    locale: String,
    bundle: Bundle,
    rng: ChaCha8Rng,
}

impl Food {
    pub const NAME: &'static str = "food";

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

    fn pick(&mut self, path: &str) -> Result<String> {
        Ok(self.bundle.pick(path, &mut self.rng)?.to_string())
    }

    pub fn vegetable(&mut self) -> Result<String> {
        self.pick("vegetables")
    }

    pub fn fruit(&mut self) -> Result<String> {
        self.pick("fruits")
    }

    pub fn dish(&mut self) -> Result<String> {
        self.pick("dishes")
    }

    pub fn spices(&mut self) -> Result<String> {
        self.pick("spices")
    }

    pub fn drink(&mut self) -> Result<String> {
        self.pick("drinks")
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Food", &self.locale)
    }
}

const FIELDS: &[Field<Food>] = &[
    Field::new("dish", |p| Ok(json!(p.dish()?))),
    Field::new("drink", |p| Ok(json!(p.drink()?))),
    Field::new("fruit", |p| Ok(json!(p.fruit()?))),
    Field::new("spices", |p| Ok(json!(p.spices()?))),
    Field::new("vegetable", |p| Ok(json!(p.vegetable()?))),
];

field_table_provider!(Food, FIELDS);
