use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::Value;

use crate::error::{Error, Result};

/// Parsed, immutable data for one (domain, locale) pair.
///
/// Cloning a bundle is cheap and shares the parsed tree; callers that need a
/// mutable copy take one with [`Bundle::to_value`].
#[derive(Debug, Clone)]
pub struct Bundle {
    domain: Arc<str>,
    locale: Arc<str>,
    data: Arc<Value>,
}

impl Bundle {
    pub fn new(domain: &str, locale: &str, data: Value) -> Self {
        Self {
            domain: Arc::from(domain),
            locale: Arc::from(locale),
            data: Arc::new(data),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn value(&self) -> &Value {
        &self.data
    }

    /// Deep copy of the underlying tree.
    pub fn to_value(&self) -> Value {
        self.data.as_ref().clone()
    }

    /// Look up a dotted path such as `street.name`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self.data.as_ref(), |node, key| node.get(key))
    }

    pub fn require(&self, path: &str) -> Result<&Value> {
        self.get(path).ok_or_else(|| self.missing(path))
    }

    pub fn str(&self, path: &str) -> Result<&str> {
        self.require(path)?
            .as_str()
            .ok_or_else(|| self.shape(path, "a string"))
    }

    /// All string entries of the list at `path`.
    pub fn strings(&self, path: &str) -> Result<Vec<&str>> {
        self.list(path)?
            .iter()
            .map(|item| item.as_str().ok_or_else(|| self.shape(path, "a list of strings")))
            .collect()
    }

    /// Pick one string uniformly from the list at `path`.
    pub fn pick<R: Rng + ?Sized>(&self, path: &str, rng: &mut R) -> Result<&str> {
        let items = self.list(path)?;
        let item = items
            .choose(rng)
            .ok_or_else(|| Error::InvalidBundle(format!("{} is empty in {}", path, self.key())))?;
        item.as_str()
            .ok_or_else(|| self.shape(path, "a list of strings"))
    }

    fn list(&self, path: &str) -> Result<&Vec<Value>> {
        self.require(path)?
            .as_array()
            .ok_or_else(|| self.shape(path, "a list"))
    }

    fn key(&self) -> String {
        format!("{}/{}", self.locale, self.domain)
    }

    fn missing(&self, path: &str) -> Error {
        Error::InvalidBundle(format!("missing key '{}' in {}", path, self.key()))
    }

    fn shape(&self, path: &str, expected: &str) -> Error {
        Error::InvalidBundle(format!(
            "key '{}' in {} must be {}",
            path,
            self.key(),
            expected
        ))
    }
}

impl PartialEq for Bundle {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.locale == other.locale && self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn bundle() -> Bundle {
        Bundle::new(
            "address",
            "en",
            json!({
                "street": {"name": ["Elm", "Oak"], "suffix": []},
                "postal_code_fmt": "#####",
                "mixed": ["a", 1]
            }),
        )
    }

    #[test]
    fn resolves_dotted_paths() {
        let bundle = bundle();
        assert_eq!(
            bundle.strings("street.name").expect("names"),
            vec!["Elm", "Oak"]
        );
        assert_eq!(bundle.str("postal_code_fmt").expect("fmt"), "#####");
        assert!(bundle.get("street.missing").is_none());
    }

    #[test]
    fn reports_missing_and_malformed_keys() {
        let bundle = bundle();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(bundle.str("nope"), Err(Error::InvalidBundle(_))));
        assert!(matches!(
            bundle.pick("street.suffix", &mut rng),
            Err(Error::InvalidBundle(_))
        ));
        assert!(matches!(bundle.strings("mixed"), Err(Error::InvalidBundle(_))));
    }
}
