use std::fmt;

use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::json;

use fixtura_core::{Bundle, Error, Result, locale};

use crate::intd::MATH_FORMULAS;
use crate::providers::{Field, ProviderContext, field_table_provider};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChemicalElement {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
}

impl ChemicalElement {
    /// Parse a `Name|Symbol|Number` bundle entry.
    pub fn parse(entry: &str) -> Option<Self> {
        let mut parts = entry.split('|').map(str::trim);
        let name = parts.next().filter(|name| !name.is_empty())?;
        let symbol = parts.next().filter(|symbol| !symbol.is_empty())?;
        let atomic_number = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            atomic_number,
        })
    }
}

#[derive(Debug)]
pub struct Science {
    locale: String,
    bundle: Bundle,
    rng: ChaCha8Rng,
}

impl Science {
    pub const NAME: &'static str = "science";

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

    pub fn math_formula(&mut self) -> Result<String> {
        MATH_FORMULAS
            .choose(&mut self.rng)
            .map(|formula| formula.to_string())
            .ok_or_else(|| Error::invalid_input("no formulas"))
    }

    pub fn chemical_element(&mut self) -> Result<ChemicalElement> {
        let entry = self.bundle.pick("element", &mut self.rng)?;
        ChemicalElement::parse(entry).ok_or_else(|| {
            Error::InvalidBundle(format!(
                "element entry '{entry}' in {}/science is not Name|Symbol|Number",
                self.locale
            ))
        })
    }

    /// Link to an encyclopedia article.
    pub fn scientific_article(&mut self) -> Result<String> {
        Ok(self.bundle.pick("article", &mut self.rng)?.to_string())
    }

    pub fn scientist(&mut self) -> Result<String> {
        Ok(self.bundle.pick("scientist", &mut self.rng)?.to_string())
    }
}

impl fmt::Display for Science {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Science", &self.locale)
    }
}

const FIELDS: &[Field<Science>] = &[
    Field::new("chemical_element", |p| Ok(json!(p.chemical_element()?))),
    Field::new("math_formula", |p| Ok(json!(p.math_formula()?))),
    Field::new("scientific_article", |p| Ok(json!(p.scientific_article()?))),
    Field::new("scientist", |p| Ok(json!(p.scientist()?))),
];

field_table_provider!(Science, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_element_entries() {
        assert_eq!(
            ChemicalElement::parse("Sulfur | S | 16"),
            Some(ChemicalElement {
                name: "Sulfur".into(),
                symbol: "S".into(),
                atomic_number: 16,
            })
        );
        assert_eq!(ChemicalElement::parse("Sulfur|S"), None);
        assert_eq!(ChemicalElement::parse("Sulfur|S|sixteen"), None);
        assert_eq!(ChemicalElement::parse("Sulfur|S|16|x"), None);
    }
}
