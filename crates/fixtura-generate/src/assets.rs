//! Locale bundles compiled into the crate.

use std::sync::Arc;

use fixtura_core::{DirectorySource, ResourceStore, StaticSource};

macro_rules! bundles {
    ($($locale:literal => [$($domain:literal),+ $(,)?]),+ $(,)?) => {
        &[$($((
            $locale,
            $domain,
            include_str!(concat!("../assets/locales/", $locale, "/", $domain, ".json")),
        ),)+)+]
    };
}

const EMBEDDED: &[(&str, &str, &str)] = bundles! {
    "de" => ["address", "business", "datetime", "food", "personal", "science", "text"],
    "en" => ["address", "business", "datetime", "food", "personal", "science", "text"],
    "ru" => ["address", "business", "datetime", "food", "personal", "science", "text"],
};

/// Source over the bundles shipped with the crate.
pub fn embedded_source() -> StaticSource {
    StaticSource::new(EMBEDDED)
}

/// Locales with embedded bundles.
pub fn embedded_locales() -> Vec<&'static str> {
    embedded_source().locales()
}

/// A fresh store over the embedded bundles.
pub fn embedded_store() -> Arc<ResourceStore> {
    Arc::new(ResourceStore::new(embedded_source()))
}

/// A fresh store reading `<root>/<locale>/<domain>.json`.
pub fn directory_store(root: impl Into<std::path::PathBuf>) -> Arc<ResourceStore> {
    Arc::new(ResourceStore::new(DirectorySource::new(root)))
}
