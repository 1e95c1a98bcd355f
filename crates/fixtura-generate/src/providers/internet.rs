use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::{Bundle, DEFAULT_LOCALE, Result};

use crate::intd::{
    DOMAINS, EMOJI, HASHTAGS_BOYS, HASHTAGS_CARS, HASHTAGS_FAMILY, HASHTAGS_FRIENDS,
    HASHTAGS_GENERAL, HASHTAGS_GIRLS, HASHTAGS_LOVE, HASHTAGS_NATURE, HASHTAGS_SPORT,
    HASHTAGS_TRAVEL, HASHTAGS_TUMBLR, IMAGE_KEYWORDS, PROTOCOLS, SUBREDDITS, SUBREDDITS_NSFW,
    USER_AGENTS,
};
use crate::providers::options::{Gender, HashtagCategory, ImageCategory};
use crate::providers::personal::{self, Personal};
use crate::providers::{Field, ProviderContext, field_table_provider, pick_from};

pub const DEFAULT_IMAGE_WIDTH: u32 = 1900;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 1080;
pub const DEFAULT_PLACEHOLDER_WIDTH: u32 = 400;
pub const DEFAULT_PLACEHOLDER_HEIGHT: u32 = 300;
pub const DEFAULT_HASHTAG_COUNT: usize = 4;

const PLACEHOLDER_URL: &str = "http://placehold.it";
const UNSPLASH_URL: &str = "https://source.unsplash.com";
const REDDIT_URL: &str = "http://www.reddit.com";

/// Web flavoured values: social profile links, image URLs, hashtags and
/// user agents.
///
/// Profile links use the same English usernames as
/// [`Personal::username`], so the provider needs the `en` personal bundle
/// whatever the facade locale is.
#[derive(Debug)]
pub struct Internet {
    names: Bundle,
    rng: ChaCha8Rng,
}

impl Internet {
    pub const NAME: &'static str = "internet";

    pub fn new(ctx: &ProviderContext) -> Result<Self> {
        Ok(Self {
            names: ctx.store().load(Personal::NAME, DEFAULT_LOCALE)?,
            rng: ctx.rng(Self::NAME),
        })
    }

    /// Emoji shortcode such as `:smile:`.
    pub fn emoji(&mut self) -> Result<String> {
        pick_from(EMOJI, &mut self.rng)
    }

    pub fn image_placeholder(&self, width: u32, height: u32) -> String {
        format!("{PLACEHOLDER_URL}/{width}x{height}")
    }

    /// Stock photo URL; `None` picks a category at random.
    pub fn stock_image(
        &mut self,
        category: Option<ImageCategory>,
        width: u32,
        height: u32,
    ) -> String {
        let category = category.unwrap_or_else(|| {
            ImageCategory::ALL[self.rng.random_range(0..ImageCategory::ALL.len())]
        });
        format!("{UNSPLASH_URL}/category/{category}/{width}x{height}")
    }

    pub fn image_by_keyword(&mut self, keyword: Option<&str>) -> Result<String> {
        let keyword = match keyword {
            Some(keyword) => keyword.to_string(),
            None => pick_from(IMAGE_KEYWORDS, &mut self.rng)?,
        };
        Ok(format!("{UNSPLASH_URL}/weekly?{keyword}"))
    }

    /// `quantity` hashtags from `category`, repeats allowed.
    pub fn hashtags(&mut self, quantity: usize, category: HashtagCategory) -> Result<Vec<String>> {
        let table = match category {
            HashtagCategory::General => HASHTAGS_GENERAL,
            HashtagCategory::Girls => HASHTAGS_GIRLS,
            HashtagCategory::Love => HASHTAGS_LOVE,
            HashtagCategory::Boys => HASHTAGS_BOYS,
            HashtagCategory::Friends => HASHTAGS_FRIENDS,
            HashtagCategory::Family => HASHTAGS_FAMILY,
            HashtagCategory::Nature => HASHTAGS_NATURE,
            HashtagCategory::Travel => HASHTAGS_TRAVEL,
            HashtagCategory::Cars => HASHTAGS_CARS,
            HashtagCategory::Sport => HASHTAGS_SPORT,
            HashtagCategory::Tumblr => HASHTAGS_TUMBLR,
        };
        (0..quantity).map(|_| pick_from(table, &mut self.rng)).collect()
    }

    fn username(&mut self, gender: Gender) -> Result<String> {
        personal::username_from(&self.names, gender, &mut self.rng)
    }

    pub fn twitter(&mut self, gender: Gender) -> Result<String> {
        Ok(format!("http://twitter.com/{}", self.username(gender)?))
    }

    pub fn facebook(&mut self, gender: Gender) -> Result<String> {
        Ok(format!("https://facebook.com/{}", self.username(gender)?))
    }

    /// `http://www.<username><tld>`.
    pub fn home_page(&mut self, gender: Gender) -> Result<String> {
        let user = self.username(gender)?;
        let domain = pick_from(DOMAINS, &mut self.rng)?;
        Ok(format!("http://www.{user}{domain}"))
    }

    /// Subreddit path like `/r/rust`, or its full URL when `full_url` is set.
    pub fn subreddit(&mut self, nsfw: bool, full_url: bool) -> Result<String> {
        let table = if nsfw { SUBREDDITS_NSFW } else { SUBREDDITS };
        let path = pick_from(table, &mut self.rng)?;
        Ok(if full_url {
            format!("{REDDIT_URL}{path}")
        } else {
            path
        })
    }

    pub fn user_agent(&mut self) -> Result<String> {
        pick_from(USER_AGENTS, &mut self.rng)
    }

    pub fn protocol(&mut self) -> Result<String> {
        pick_from(PROTOCOLS, &mut self.rng)
    }
}

const FIELDS: &[Field<Internet>] = &[
    Field::new("emoji", |p| Ok(json!(p.emoji()?))),
    Field::new("facebook", |p| Ok(json!(p.facebook(Gender::default())?))),
    Field::new("hashtags", |p| {
        Ok(json!(p.hashtags(
            DEFAULT_HASHTAG_COUNT,
            HashtagCategory::default()
        )?))
    }),
    Field::new("home_page", |p| Ok(json!(p.home_page(Gender::default())?))),
    Field::new("image_by_keyword", |p| Ok(json!(p.image_by_keyword(None)?))),
    Field::new("image_placeholder", |p| {
        Ok(json!(p.image_placeholder(
            DEFAULT_PLACEHOLDER_WIDTH,
            DEFAULT_PLACEHOLDER_HEIGHT
        )))
    }),
    Field::new("protocol", |p| Ok(json!(p.protocol()?))),
    Field::new("stock_image", |p| {
        Ok(json!(p.stock_image(
            None,
            DEFAULT_IMAGE_WIDTH,
            DEFAULT_IMAGE_HEIGHT
        )))
    }),
    Field::new("subreddit", |p| Ok(json!(p.subreddit(false, false)?))),
    Field::new("twitter", |p| Ok(json!(p.twitter(Gender::default())?))),
    Field::new("user_agent", |p| Ok(json!(p.user_agent()?))),
];

field_table_provider!(Internet, FIELDS);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fixtura_core::{ResourceStore, StaticSource};

    use super::*;

    const ENTRIES: &[(&str, &str, &str)] = &[(
        "en",
        "personal",
        r#"{"names": {"female": ["Ada"], "male": ["Alan"]}}"#,
    )];

    fn internet(locale: &str) -> Internet {
        let store = Arc::new(ResourceStore::new(StaticSource::new(ENTRIES)));
        let ctx = ProviderContext::new(locale, store).with_seed(Some(6));
        Internet::new(&ctx).expect("internet")
    }

    #[test]
    fn profile_links_use_english_usernames() {
        let mut internet = internet("ru");
        let twitter = internet.twitter(Gender::Female).expect("twitter");
        assert!(twitter.starts_with("http://twitter.com/ada"), "{twitter}");
        let home = internet.home_page(Gender::Male).expect("home page");
        assert!(home.starts_with("http://www.alan"), "{home}");
    }

    #[test]
    fn image_urls() {
        let mut internet = internet("en");
        assert_eq!(
            internet.image_placeholder(400, 300),
            "http://placehold.it/400x300"
        );
        assert_eq!(
            internet.stock_image(Some(ImageCategory::Food), 800, 600),
            "https://source.unsplash.com/category/food/800x600"
        );
        let random = internet.stock_image(None, 10, 10);
        assert!(ImageCategory::ALL
            .iter()
            .any(|category| random.contains(&format!("/category/{category}/"))));
    }

    #[test]
    fn hashtags_and_subreddits() {
        let mut internet = internet("en");
        let tags = internet
            .hashtags(3, HashtagCategory::Travel)
            .expect("hashtags");
        assert_eq!(tags.len(), 3);
        assert!(tags.iter().all(|tag| HASHTAGS_TRAVEL.contains(&tag.as_str())));

        let url = internet.subreddit(false, true).expect("subreddit");
        assert!(url.starts_with("http://www.reddit.com/r/"));
        assert!(internet.subreddit(false, false).expect("path").starts_with("/r/"));
    }
}
