use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};
use serde_json::{Map, Value};

use fixtura_core::{Error, Result};

use crate::generic::Generic;
use crate::intd::{
    AttributeValue, CSS_PROPERTIES, CSS_SELECTORS, CSS_SIZE_UNITS, CssValue, HTML_CONTAINER_TAGS,
    HTML_MARKUP_TAGS,
};
use crate::providers::options::Gender;
use crate::providers::{Address, Business, Hardware, Personal, Provider, pick_from};

/// Providers that can be rendered as JSON documents, with the key their
/// records are listed under.
pub const JSON_ROOTS: &[(&str, &str)] = &[
    (Personal::NAME, "users"),
    (Address::NAME, "addresses"),
    (Business::NAME, "companies"),
    (Hardware::NAME, "computers"),
];

const MAX_CSS_PROPERTIES: usize = 6;

/// Structured documents: JSON assembled from provider field tables, and
/// CSS and HTML snippets filled with locale text.
pub struct Structured<'a> {
    generic: &'a mut Generic,
}

impl<'a> Structured<'a> {
    pub const NAME: &'static str = "structured";

    pub fn new(generic: &'a mut Generic) -> Self {
        Self { generic }
    }

    /// `{root: [record, ...]}` with `items` records of `provider`, each
    /// holding every declared field.
    pub fn json(&mut self, provider: &str, items: usize) -> Result<Value> {
        let root = json_root(provider).ok_or_else(|| Error::unsupported("provider", provider))?;
        let provider = self.generic.provider(provider)?;
        let records = (0..items)
            .map(|_| record(provider))
            .collect::<Result<Vec<_>>>()?;
        let mut document = Map::new();
        document.insert(root.to_string(), Value::Array(records));
        Ok(Value::Object(document))
    }

    /// One `property: value` declaration, e.g. `padding-right: 46pt`.
    pub fn css_property(&mut self) -> Result<String> {
        let (property, kind) = *CSS_PROPERTIES
            .choose(self.generic.markup_rng())
            .ok_or_else(|| Error::invalid_input("no css properties"))?;
        let value = match kind {
            CssValue::Choice(values) => pick_from(values, self.generic.markup_rng())?,
            CssValue::Color => self.generic.text()?.hex_color(),
            CssValue::Size => {
                let rng = self.generic.markup_rng();
                let amount = rng.random_range(1..=99);
                format!("{amount}{}", pick_from(CSS_SIZE_UNITS, rng)?)
            }
        };
        Ok(format!("{property}: {value}"))
    }

    /// A rule of one to six declarations on a tag, class or id selector.
    pub fn css(&mut self) -> Result<String> {
        let word = self.generic.text()?.word()?;
        let rng = self.generic.markup_rng();
        let selector = format!("{}{word}", pick_from(CSS_SELECTORS, rng)?);
        let container = HTML_CONTAINER_TAGS
            .iter()
            .map(|(tag, _)| *tag)
            .choose(rng)
            .ok_or_else(|| Error::invalid_input("no html container tags"))?;
        let markup = pick_from(HTML_MARKUP_TAGS, rng)?;
        let base = match rng.random_range(0..3) {
            0 => container.to_string(),
            1 => markup,
            _ => selector,
        };
        let count = rng.random_range(1..=MAX_CSS_PROPERTIES);
        let properties = (0..count)
            .map(|_| self.css_property())
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("{base} {{{}}}", properties.join("; ")))
    }

    /// A container tag with some of its attributes set around a sentence.
    pub fn html(&mut self) -> Result<String> {
        let rng = self.generic.markup_rng();
        let (tag, attributes) = *HTML_CONTAINER_TAGS
            .choose(rng)
            .ok_or_else(|| Error::invalid_input("no html container tags"))?;
        let count = rng.random_range(1..=attributes.len());
        let selected: Vec<(&str, AttributeValue)> =
            attributes.choose_multiple(rng, count).copied().collect();

        let mut rendered = Vec::with_capacity(selected.len());
        for (name, kind) in selected {
            let value = self.attribute_value(kind)?;
            rendered.push(format!("{name}=\"{value}\""));
        }
        let content = self.generic.text()?.sentence()?;
        Ok(format!("<{tag} {}>{content}</{tag}>", rendered.join(" ")))
    }

    /// Value for `attribute` of `tag`. Pairs outside the known tag set are
    /// [`Error::UnsupportedOption`].
    pub fn html_attribute_value(&mut self, tag: &str, attribute: &str) -> Result<String> {
        let (_, attributes) = HTML_CONTAINER_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .ok_or_else(|| Error::unsupported("html tag", tag))?;
        let (_, kind) = attributes
            .iter()
            .find(|(name, _)| *name == attribute)
            .ok_or_else(|| Error::unsupported("html attribute", attribute))?;
        self.attribute_value(*kind)
    }

    fn attribute_value(&mut self, kind: AttributeValue) -> Result<String> {
        match kind {
            AttributeValue::Choice(values) => pick_from(values, self.generic.markup_rng()),
            AttributeValue::Css => self.css_property(),
            AttributeValue::Word => self.generic.text()?.word(),
            AttributeValue::Url => self.generic.internet()?.home_page(Gender::default()),
        }
    }
}

pub fn json_root(provider: &str) -> Option<&'static str> {
    JSON_ROOTS
        .iter()
        .find(|(name, _)| *name == provider)
        .map(|(_, root)| *root)
}

/// One value per declared field, generated in table order.
pub fn record(provider: &mut dyn Provider) -> Result<Value> {
    let mut fields = Map::new();
    for name in provider.fields() {
        let value = provider.generate_field(name)?;
        fields.insert(name.to_string(), value);
    }
    Ok(Value::Object(fields))
}
