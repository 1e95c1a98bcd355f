use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::{Bundle, Result, locale};

use crate::intd::HEX_DIGITS;
use crate::providers::options::TemperatureScale;
use crate::providers::{Field, ProviderContext, check_range, field_table_provider};

pub const DEFAULT_QUANTITY: usize = 5;
pub const DEFAULT_MIN_TEMPERATURE: i32 = -30;
pub const DEFAULT_MAX_TEMPERATURE: i32 = 40;

#[derive(Debug)]
pub struct Text {
    locale: String,
    bundle: Bundle,
    rng: ChaCha8Rng,
}

impl Text {
    pub const NAME: &'static str = "text";

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

    /// The locale's alphabet, uppercase unless `lowercase` is set.
    pub fn alphabet(&self, lowercase: bool) -> Result<Vec<String>> {
        let path = if lowercase {
            "alphabet.lowercase"
        } else {
            "alphabet.uppercase"
        };
        Ok(self
            .bundle
            .strings(path)?
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn level(&mut self) -> Result<String> {
        self.pick("level")
    }

    /// `quantity` sentences joined by spaces.
    pub fn text(&mut self, quantity: usize) -> Result<String> {
        let sentences = (0..quantity)
            .map(|_| self.pick("text"))
            .collect::<Result<Vec<_>>>()?;
        Ok(sentences.join(" "))
    }

    pub fn sentence(&mut self) -> Result<String> {
        self.text(1)
    }

    pub fn title(&mut self) -> Result<String> {
        self.text(1)
    }

    pub fn words(&mut self, quantity: usize) -> Result<Vec<String>> {
        (0..quantity).map(|_| self.pick("words")).collect()
    }

    pub fn word(&mut self) -> Result<String> {
        self.pick("words")
    }

    pub fn swear_word(&mut self) -> Result<String> {
        self.pick("swear_words")
    }

    pub fn quote(&mut self) -> Result<String> {
        self.pick("quotes")
    }

    pub fn color(&mut self) -> Result<String> {
        self.pick("color")
    }

    /// `#` and six distinct uppercase hex digits.
    pub fn hex_color(&mut self) -> String {
        let digits: String = HEX_DIGITS
            .choose_multiple(&mut self.rng, 6)
            .map(|digit| char::from(*digit))
            .collect();
        format!("#{digits}")
    }

    /// Temperature drawn in Celsius from `[minimum, maximum]`, converted to
    /// the requested scale, e.g. `33.0 °C`.
    pub fn weather(
        &mut self,
        scale: TemperatureScale,
        minimum: i32,
        maximum: i32,
    ) -> Result<String> {
        check_range("temperature", minimum, maximum)?;
        let celsius = f64::from(self.rng.random_range(minimum..=maximum));
        Ok(match scale {
            TemperatureScale::Celsius => format!("{celsius:.1} °C"),
            TemperatureScale::Fahrenheit => format!("{:.1} °F", celsius * 1.8 + 32.0),
        })
    }

    pub fn answer(&mut self) -> Result<String> {
        self.pick("answers")
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Text", &self.locale)
    }
}

const FIELDS: &[Field<Text>] = &[
    Field::new("alphabet", |p| Ok(json!(p.alphabet(false)?))),
    Field::new("answer", |p| Ok(json!(p.answer()?))),
    Field::new("color", |p| Ok(json!(p.color()?))),
    Field::new("hex_color", |p| Ok(json!(p.hex_color()))),
    Field::new("level", |p| Ok(json!(p.level()?))),
    Field::new("quote", |p| Ok(json!(p.quote()?))),
    Field::new("sentence", |p| Ok(json!(p.sentence()?))),
    Field::new("swear_word", |p| Ok(json!(p.swear_word()?))),
    Field::new("text", |p| Ok(json!(p.text(DEFAULT_QUANTITY)?))),
    Field::new("title", |p| Ok(json!(p.title()?))),
    Field::new("weather", |p| {
        Ok(json!(p.weather(
            TemperatureScale::default(),
            DEFAULT_MIN_TEMPERATURE,
            DEFAULT_MAX_TEMPERATURE
        )?))
    }),
    Field::new("word", |p| Ok(json!(p.word()?))),
    Field::new("words", |p| Ok(json!(p.words(DEFAULT_QUANTITY)?))),
];

field_table_provider!(Text, FIELDS);
