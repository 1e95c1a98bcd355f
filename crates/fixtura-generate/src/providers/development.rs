use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::Result;

use crate::intd::{
    BACKEND, FRONTEND, LICENSES, NOSQL_DATABASES, OS, OTHER_TECH, PROGRAMMING_LANGS,
    SQL_DATABASES,
};
use crate::providers::{Field, field_table_provider, pick_from, seeded_rng};

const STACKOVERFLOW_URL: &str = "http://stackoverflow.com/questions";

/// Software licenses, versions, stacks and other developer trivia.
#[derive(Debug)]
pub struct Development {
    rng: ChaCha8Rng,
}

impl Development {
    pub const NAME: &'static str = "development";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed, Self::NAME),
        }
    }

    pub fn software_license(&mut self) -> Result<String> {
        pick_from(LICENSES, &mut self.rng)
    }

    /// `major.minor.patch`, each part in `0..=11`.
    pub fn version(&mut self) -> String {
        let [major, minor, patch]: [u8; 3] =
            std::array::from_fn(|_| self.rng.random_range(0..=11));
        format!("{major}.{minor}.{patch}")
    }

    pub fn database(&mut self, nosql: bool) -> Result<String> {
        let table = if nosql { NOSQL_DATABASES } else { SQL_DATABASES };
        pick_from(table, &mut self.rng)
    }

    pub fn other(&mut self) -> Result<String> {
        pick_from(OTHER_TECH, &mut self.rng)
    }

    pub fn programming_language(&mut self) -> Result<String> {
        pick_from(PROGRAMMING_LANGS, &mut self.rng)
    }

    pub fn backend(&mut self) -> Result<String> {
        pick_from(BACKEND, &mut self.rng)
    }

    pub fn frontend(&mut self) -> Result<String> {
        pick_from(FRONTEND, &mut self.rng)
    }

    pub fn os(&mut self) -> Result<String> {
        pick_from(OS, &mut self.rng)
    }

    /// Link to a question with a seven digit id.
    pub fn stackoverflow_question(&mut self) -> String {
        let id = self.rng.random_range(1_000_000..=9_999_999);
        format!("{STACKOVERFLOW_URL}/{id}")
    }
}

impl Default for Development {
    fn default() -> Self {
        Self::new(None)
    }
}

const FIELDS: &[Field<Development>] = &[
    Field::new("backend", |p| Ok(json!(p.backend()?))),
    Field::new("database", |p| Ok(json!(p.database(false)?))),
    Field::new("frontend", |p| Ok(json!(p.frontend()?))),
    Field::new("os", |p| Ok(json!(p.os()?))),
    Field::new("other", |p| Ok(json!(p.other()?))),
    Field::new("programming_language", |p| {
        Ok(json!(p.programming_language()?))
    }),
    Field::new("software_license", |p| Ok(json!(p.software_license()?))),
    Field::new("stackoverflow_question", |p| {
        Ok(json!(p.stackoverflow_question()))
    }),
    Field::new("version", |p| Ok(json!(p.version()))),
];

field_table_provider!(Development, FIELDS);
