use std::fmt;
use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::{Value, json};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use fixtura_core::mask::{self, Placeholders};
use fixtura_core::{
    Bundle, DEFAULT_LOCALE, Derived, Error, ResourceStore, Result, append_luhn, group_digits,
    locale,
};

use crate::intd::{
    BITCOIN_CHARS, BLOOD_GROUPS, EMAIL_DOMAINS, ENGLISH_LEVELS, FAVORITE_MUSIC_GENRE,
    GENDER_SYMBOLS, SEXUALITY_SYMBOLS,
};
use crate::providers::options::{CardType, Gender, HashAlgorithm, TitleKind};
use crate::providers::{
    Field, ProviderContext, check_float_range, check_range, field_table_provider, pick_from,
};

pub const DEFAULT_MIN_AGE: u32 = 16;
pub const DEFAULT_MAX_AGE: u32 = 66;
pub const DEFAULT_MAX_CHILDREN: u32 = 5;
pub const DEFAULT_WORK_START_AGE: u32 = 22;
pub const ADULT_AGE: u32 = 18;

pub const DEFAULT_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_TELEPHONE_MASK: &str = "+#-(###)-###-####";
pub const DEFAULT_IDENTIFIER_MASK: &str = "##-##/##";
pub const DEFAULT_AVATAR_SIZE: u32 = 256;

const AVATAR_URL: &str = "https://api.adorable.io/avatars";
const BITCOIN_BODY_LENGTH: usize = 33;

const PASSWORD_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const SIXTEEN_DIGIT_GROUPS: &[usize] = &[4, 4, 4, 4];
const AMEX_GROUPS: &[usize] = &[4, 6, 5];

/// Personal data: names, contacts, payment cards and the age-derived
/// attributes.
///
/// `age` is the one stateful generator. `child_count` and `work_experience`
/// read the stored age and only generate one when none is stored yet.
#[derive(Debug)]
pub struct Personal {
    locale: String,
    bundle: Bundle,
    store: Arc<ResourceStore>,
    rng: ChaCha8Rng,
    stored_age: Derived<u32>,
}

impl Personal {
    pub const NAME: &'static str = "personal";

    pub fn new(ctx: &ProviderContext) -> Result<Self> {
        Ok(Self {
            locale: ctx.locale().to_string(),
            bundle: ctx.load(Self::NAME)?,
            store: Arc::clone(ctx.store()),
            rng: ctx.rng(Self::NAME),
            stored_age: Derived::Unset,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Sample an age in `[minimum, maximum]` and remember it.
    pub fn age(&mut self, minimum: u32, maximum: u32) -> Result<u32> {
        check_range("age", minimum, maximum)?;
        let age = self.rng.random_range(minimum..=maximum);
        Ok(self.stored_age.set(age))
    }

    /// The stored age, if `age` has been called.
    pub fn stored_age(&self) -> Option<u32> {
        self.stored_age.get()
    }

    fn current_age(&mut self) -> Result<u32> {
        match self.stored_age.get() {
            Some(age) => Ok(age),
            None => self.age(DEFAULT_MIN_AGE, DEFAULT_MAX_AGE),
        }
    }

    /// Zero below adulthood, otherwise a count in `[0, max_children]`.
    pub fn child_count(&mut self, max_children: u32) -> Result<u32> {
        let age = self.current_age()?;
        if age < ADULT_AGE {
            return Ok(0);
        }
        Ok(self.rng.random_range(0..=max_children))
    }

    pub fn work_experience(&mut self, start_age: u32) -> Result<u32> {
        let age = self.current_age()?;
        Ok(age.saturating_sub(start_age))
    }

    pub fn name(&mut self, gender: Gender) -> Result<String> {
        pick_name(&self.bundle, gender, &mut self.rng)
    }

    pub fn surname(&mut self, gender: Gender) -> Result<String> {
        let path = gendered_path(&self.bundle, "surnames", gender)?;
        Ok(self.bundle.pick(&path, &mut self.rng)?.to_string())
    }

    /// `Name Surname`, or `Surname Name` when `reverse` is set.
    pub fn full_name(&mut self, gender: Gender, reverse: bool) -> Result<String> {
        let name = self.name(gender)?;
        let surname = self.surname(gender)?;
        Ok(if reverse {
            format!("{surname} {name}")
        } else {
            format!("{name} {surname}")
        })
    }

    pub fn title(&mut self, gender: Gender, kind: TitleKind) -> Result<String> {
        let path = format!("title.{}.{}", gender.as_str(), kind.as_str());
        Ok(self.bundle.pick(&path, &mut self.rng)?.to_string())
    }

    /// Lowercased English first name followed by a number, whatever the
    /// provider locale.
    pub fn username(&mut self, gender: Gender) -> Result<String> {
        let english = self.store.load(Self::NAME, DEFAULT_LOCALE)?;
        username_from(&english, gender, &mut self.rng)
    }

    /// Random printable password, or its hex digest when `algorithm` is set.
    pub fn password(&mut self, length: usize, algorithm: Option<HashAlgorithm>) -> String {
        let password: String = (0..length)
            .map(|_| char::from(PASSWORD_CHARS[self.rng.random_range(0..PASSWORD_CHARS.len())]))
            .collect();
        match algorithm {
            None => password,
            Some(HashAlgorithm::Md5) => hex::encode(Md5::digest(password.as_bytes())),
            Some(HashAlgorithm::Sha1) => hex::encode(Sha1::digest(password.as_bytes())),
            Some(HashAlgorithm::Sha256) => hex::encode(Sha256::digest(password.as_bytes())),
            Some(HashAlgorithm::Sha512) => hex::encode(Sha512::digest(password.as_bytes())),
        }
    }

    pub fn email(&mut self, gender: Gender) -> Result<String> {
        let user = self.username(gender)?;
        let domain = EMAIL_DOMAINS
            .choose(&mut self.rng)
            .ok_or_else(|| Error::invalid_input("no email domains"))?;
        Ok(format!("{user}{domain}"))
    }

    /// PayPal account, which is an email address.
    pub fn paypal(&mut self, gender: Gender) -> Result<String> {
        self.email(gender)
    }

    /// Pay-to-pubkey-hash (`1…`) or pay-to-script-hash (`3…`) shaped
    /// address of 34 characters. No checksum is computed.
    pub fn bitcoin(&mut self) -> String {
        let mut address = String::with_capacity(BITCOIN_BODY_LENGTH + 1);
        address.push(if self.rng.random_bool(0.5) { '1' } else { '3' });
        for _ in 0..BITCOIN_BODY_LENGTH {
            let index = self.rng.random_range(0..BITCOIN_CHARS.len());
            address.push(char::from(BITCOIN_CHARS[index]));
        }
        address
    }

    /// Luhn-valid card number grouped the way the network prints it.
    pub fn credit_card_number(&mut self, card_type: CardType) -> Result<String> {
        let (prefix, length, groups) = match card_type {
            CardType::Visa => (self.rng.random_range(4000..=4999), 16, SIXTEEN_DIGIT_GROUPS),
            CardType::MasterCard => {
                let prefix = if self.rng.random_bool(0.5) {
                    self.rng.random_range(2221..=2720)
                } else {
                    self.rng.random_range(5100..=5500)
                };
                (prefix, 16, SIXTEEN_DIGIT_GROUPS)
            }
            CardType::AmericanExpress => {
                let prefix = if self.rng.random_bool(0.5) { 34 } else { 37 };
                (prefix, 15, AMEX_GROUPS)
            }
        };

        let mut body = prefix.to_string();
        while body.len() < length - 1 {
            body.push(char::from(b'0' + self.rng.random_range(0..10u8)));
        }
        let number = append_luhn(&body)?;
        group_digits(&number, groups)
    }

    /// `MM/YY` with the year drawn from `[minimum, maximum]`.
    pub fn credit_card_expiration_date(&mut self, minimum: u32, maximum: u32) -> Result<String> {
        check_range("expiration year", minimum, maximum)?;
        let month = self.rng.random_range(1..=12);
        let year = self.rng.random_range(minimum..=maximum);
        Ok(format!("{month:02}/{year}"))
    }

    pub fn cvv(&mut self) -> u32 {
        self.rng.random_range(100..=999)
    }

    pub fn cid(&mut self) -> u32 {
        self.rng.random_range(1000..=9999)
    }

    pub fn gender(&mut self, symbol: bool) -> Result<String> {
        if symbol {
            return GENDER_SYMBOLS
                .choose(&mut self.rng)
                .map(|symbol| symbol.to_string())
                .ok_or_else(|| Error::invalid_input("no gender symbols"));
        }
        Ok(self.bundle.pick("gender", &mut self.rng)?.to_string())
    }

    pub fn sexual_orientation(&mut self, symbol: bool) -> Result<String> {
        if symbol {
            return pick_from(SEXUALITY_SYMBOLS, &mut self.rng);
        }
        Ok(self.bundle.pick("sexuality", &mut self.rng)?.to_string())
    }

    pub fn political_views(&mut self) -> Result<String> {
        Ok(self.bundle.pick("political_views", &mut self.rng)?.to_string())
    }

    pub fn worldview(&mut self) -> Result<String> {
        Ok(self.bundle.pick("worldview", &mut self.rng)?.to_string())
    }

    pub fn views_on(&mut self) -> Result<String> {
        Ok(self.bundle.pick("views_on", &mut self.rng)?.to_string())
    }

    pub fn favorite_movie(&mut self) -> Result<String> {
        Ok(self.bundle.pick("favorite_movie", &mut self.rng)?.to_string())
    }

    pub fn favorite_music_genre(&mut self) -> Result<String> {
        pick_from(FAVORITE_MUSIC_GENRE, &mut self.rng)
    }

    pub fn level_of_english(&mut self) -> Result<String> {
        pick_from(ENGLISH_LEVELS, &mut self.rng)
    }

    /// Avatar URL of `size` pixels keyed by the MD5 of a random password.
    pub fn avatar(&mut self, size: u32) -> String {
        let key = self.password(DEFAULT_PASSWORD_LENGTH, Some(HashAlgorithm::Md5));
        format!("{AVATAR_URL}/{size}/{key}.png")
    }

    pub fn occupation(&mut self) -> Result<String> {
        Ok(self.bundle.pick("occupation", &mut self.rng)?.to_string())
    }

    pub fn nationality(&mut self, gender: Gender) -> Result<String> {
        let path = gendered_path(&self.bundle, "nationality", gender)?;
        Ok(self.bundle.pick(&path, &mut self.rng)?.to_string())
    }

    pub fn university(&mut self) -> Result<String> {
        Ok(self.bundle.pick("university", &mut self.rng)?.to_string())
    }

    pub fn academic_degree(&mut self) -> Result<String> {
        Ok(self.bundle.pick("academic_degree", &mut self.rng)?.to_string())
    }

    pub fn language(&mut self) -> Result<String> {
        Ok(self.bundle.pick("language", &mut self.rng)?.to_string())
    }

    /// Phone number from `mask`, or from one of the locale's formats.
    /// `placeholder` replaces `#` as the digit symbol.
    ///
    /// `@` is the letter symbol and cannot double as the digit symbol, so
    /// `placeholder == '@'` is rejected with [`Error::InvalidInput`] instead
    /// of filling the mask with letters.
    pub fn telephone(&mut self, mask: Option<&str>, placeholder: char) -> Result<String> {
        let placeholders = Placeholders::with_digit(placeholder)?;
        let template = match mask {
            Some(mask) => mask.to_string(),
            None if self.bundle.get("telephone_fmt").is_some() => self
                .bundle
                .pick("telephone_fmt", &mut self.rng)?
                .to_string(),
            None => DEFAULT_TELEPHONE_MASK.to_string(),
        };
        Ok(mask::expand_with(&template, placeholders, &mut self.rng))
    }

    pub fn identifier(&mut self, mask: Option<&str>) -> String {
        mask::expand(mask.unwrap_or(DEFAULT_IDENTIFIER_MASK), &mut self.rng)
    }

    pub fn blood_type(&mut self) -> Result<String> {
        BLOOD_GROUPS
            .choose(&mut self.rng)
            .map(|group| group.to_string())
            .ok_or_else(|| Error::invalid_input("no blood groups"))
    }

    /// Height in metres with two decimals.
    pub fn height(&mut self, minimum: f64, maximum: f64) -> Result<String> {
        check_float_range("height", minimum, maximum)?;
        let height = if minimum == maximum {
            minimum
        } else {
            self.rng.random_range(minimum..maximum)
        };
        Ok(format!("{height:.2}"))
    }

    /// Weight in kilograms.
    pub fn weight(&mut self, minimum: u32, maximum: u32) -> Result<u32> {
        check_range("weight", minimum, maximum)?;
        Ok(self.rng.random_range(minimum..=maximum))
    }
}

impl fmt::Display for Personal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Personal", &self.locale)
    }
}

/// Lowercased first name from `bundle` followed by a number in `2..=9999`.
pub(crate) fn username_from(
    bundle: &Bundle,
    gender: Gender,
    rng: &mut ChaCha8Rng,
) -> Result<String> {
    let name = pick_name(bundle, gender, rng)?;
    let suffix = rng.random_range(2..=9999);
    Ok(format!("{}{}", name.to_lowercase(), suffix))
}

fn pick_name(bundle: &Bundle, gender: Gender, rng: &mut ChaCha8Rng) -> Result<String> {
    let path = format!("names.{}", gender.as_str());
    Ok(bundle.pick(&path, rng)?.to_string())
}

/// `key.<gender>` when the bundle splits `key` by gender, else `key`.
fn gendered_path(bundle: &Bundle, key: &str, gender: Gender) -> Result<String> {
    Ok(match bundle.require(key)? {
        Value::Object(_) => format!("{key}.{}", gender.as_str()),
        _ => key.to_string(),
    })
}

const FIELDS: &[Field<Personal>] = &[
    Field::new("age", |p| Ok(json!(p.age(DEFAULT_MIN_AGE, DEFAULT_MAX_AGE)?))),
    Field::new("child_count", |p| {
        Ok(json!(p.child_count(DEFAULT_MAX_CHILDREN)?))
    }),
    Field::new("work_experience", |p| {
        Ok(json!(p.work_experience(DEFAULT_WORK_START_AGE)?))
    }),
    Field::new("name", |p| Ok(json!(p.name(Gender::default())?))),
    Field::new("surname", |p| Ok(json!(p.surname(Gender::default())?))),
    Field::new("full_name", |p| {
        Ok(json!(p.full_name(Gender::default(), false)?))
    }),
    Field::new("title", |p| {
        Ok(json!(p.title(Gender::default(), TitleKind::default())?))
    }),
    Field::new("username", |p| Ok(json!(p.username(Gender::default())?))),
    Field::new("password", |p| {
        Ok(json!(p.password(DEFAULT_PASSWORD_LENGTH, None)))
    }),
    Field::new("email", |p| Ok(json!(p.email(Gender::default())?))),
    Field::new("credit_card_number", |p| {
        Ok(json!(p.credit_card_number(CardType::default())?))
    }),
    Field::new("credit_card_expiration_date", |p| {
        Ok(json!(p.credit_card_expiration_date(16, 25)?))
    }),
    Field::new("cvv", |p| Ok(json!(p.cvv()))),
    Field::new("cid", |p| Ok(json!(p.cid()))),
    Field::new("gender", |p| Ok(json!(p.gender(false)?))),
    Field::new("occupation", |p| Ok(json!(p.occupation()?))),
    Field::new("nationality", |p| Ok(json!(p.nationality(Gender::default())?))),
    Field::new("university", |p| Ok(json!(p.university()?))),
    Field::new("academic_degree", |p| Ok(json!(p.academic_degree()?))),
    Field::new("language", |p| Ok(json!(p.language()?))),
    Field::new("telephone", |p| Ok(json!(p.telephone(None, '#')?))),
    Field::new("identifier", |p| Ok(json!(p.identifier(None)))),
    Field::new("blood_type", |p| Ok(json!(p.blood_type()?))),
    Field::new("bitcoin", |p| Ok(json!(p.bitcoin()))),
    Field::new("paypal", |p| Ok(json!(p.paypal(Gender::default())?))),
    Field::new("sexual_orientation", |p| Ok(json!(p.sexual_orientation(false)?))),
    Field::new("political_views", |p| Ok(json!(p.political_views()?))),
    Field::new("worldview", |p| Ok(json!(p.worldview()?))),
    Field::new("views_on", |p| Ok(json!(p.views_on()?))),
    Field::new("favorite_movie", |p| Ok(json!(p.favorite_movie()?))),
    Field::new("favorite_music_genre", |p| Ok(json!(p.favorite_music_genre()?))),
    Field::new("level_of_english", |p| Ok(json!(p.level_of_english()?))),
    Field::new("avatar", |p| Ok(json!(p.avatar(DEFAULT_AVATAR_SIZE)))),
    Field::new("height", |p| Ok(json!(p.height(1.5, 2.0)?))),
    Field::new("weight", |p| Ok(json!(p.weight(38, 90)?))),
];

field_table_provider!(Personal, FIELDS);
