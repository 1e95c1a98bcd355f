use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use tracing::debug;

use crate::bundle::Bundle;
use crate::error::{Error, Result};

/// Raw text behind locale bundles.
///
/// `read` returns `Ok(None)` when the source simply has no data for the key;
/// the store turns that into [`Error::ResourceNotFound`].
pub trait BundleSource: Send + Sync + fmt::Debug {
    fn read(&self, domain: &str, locale: &str) -> Result<Option<String>>;
}

/// Bundles laid out on disk as `<root>/<locale>/<domain>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BundleSource for DirectorySource {
    fn read(&self, domain: &str, locale: &str) -> Result<Option<String>> {
        if !is_safe_segment(domain) || !is_safe_segment(locale) {
            return Ok(None);
        }
        let path = self.root.join(locale).join(format!("{domain}.json"));
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Io(err)),
        }
    }
}

/// Bundles compiled into the binary, keyed by `(locale, domain)`.
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    entries: &'static [(&'static str, &'static str, &'static str)],
}

impl StaticSource {
    /// `entries` holds `(locale, domain, json)` triples.
    pub const fn new(entries: &'static [(&'static str, &'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn locales(&self) -> Vec<&'static str> {
        let mut locales: Vec<_> = self.entries.iter().map(|(locale, _, _)| *locale).collect();
        locales.sort_unstable();
        locales.dedup();
        locales
    }
}

impl BundleSource for StaticSource {
    fn read(&self, domain: &str, locale: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .iter()
            .find(|(l, d, _)| *l == locale && *d == domain)
            .map(|(_, _, json)| (*json).to_string()))
    }
}

/// Cache of parsed bundles keyed by (domain, locale).
///
/// Share one store between providers through an `Arc`; every bundle is parsed
/// at most once per store unless two callers race on the first load, in which
/// case the first insert wins and both observe it.
#[derive(Debug)]
pub struct ResourceStore {
    source: Box<dyn BundleSource>,
    cache: RwLock<BTreeMap<(String, String), Bundle>>,
}

impl ResourceStore {
    pub fn new(source: impl BundleSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn load(&self, domain: &str, locale: &str) -> Result<Bundle> {
        if let Some(bundle) = self.cached(domain, locale) {
            debug!(domain, locale, "bundle cache hit");
            return Ok(bundle);
        }

        let contents = self
            .source
            .read(domain, locale)?
            .ok_or_else(|| Error::ResourceNotFound {
                domain: domain.to_string(),
                locale: locale.to_string(),
            })?;
        let data: Value = serde_json::from_str(&contents).map_err(|err| {
            Error::InvalidBundle(format!("{locale}/{domain}.json is not valid json: {err}"))
        })?;
        if !data.is_object() {
            return Err(Error::InvalidBundle(format!(
                "{locale}/{domain}.json must be a json object"
            )));
        }
        debug!(domain, locale, "bundle loaded");

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let bundle = cache
            .entry((domain.to_string(), locale.to_string()))
            .or_insert_with(|| Bundle::new(domain, locale, data))
            .clone();
        Ok(bundle)
    }

    pub fn is_cached(&self, domain: &str, locale: &str) -> bool {
        self.cached(domain, locale).is_some()
    }

    pub fn cached_keys(&self) -> Vec<(String, String)> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.keys().cloned().collect()
    }

    fn cached(&self, domain: &str, locale: &str) -> Option<Bundle> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(&(domain.to_string(), locale.to_string()))
            .cloned()
    }
}

fn is_safe_segment(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
