use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::debug;

use fixtura_core::{DEFAULT_LOCALE, Error, ResourceStore, Result, locale};

use crate::assets;
use crate::providers::{
    Address, Business, ClothingSizes, Code, Datetime, Development, File, Food, Hardware,
    Internet, Network, Numbers, Personal, Provider, ProviderContext, Science, Text, Transport,
};
use crate::structured::Structured;

/// Names of the providers every [`Generic`] exposes. Registration may not
/// shadow them.
pub const BUILTIN_PROVIDERS: &[&str] = &[
    Address::NAME,
    Business::NAME,
    ClothingSizes::NAME,
    Code::NAME,
    Datetime::NAME,
    Development::NAME,
    File::NAME,
    Food::NAME,
    Hardware::NAME,
    Internet::NAME,
    Network::NAME,
    Numbers::NAME,
    Personal::NAME,
    Science::NAME,
    Text::NAME,
    Transport::NAME,
];

/// How a [`Generic`] is built.
#[derive(Debug, Clone)]
pub struct GenericOptions {
    pub locale: String,
    /// Seed for every provider RNG; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Bundle store to share; `None` uses the embedded bundles.
    pub store: Option<Arc<ResourceStore>>,
}

impl Default for GenericOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
            store: None,
        }
    }
}

/// Entry point bundling every provider for one locale.
///
/// Locale-aware providers are built on first access and cached, so a locale
/// whose bundles are missing only fails when one of its providers is used.
/// Further providers can be added with [`Generic::register`].
pub struct Generic {
    ctx: ProviderContext,
    personal: Option<Personal>,
    address: Option<Address>,
    business: Option<Business>,
    datetime: Option<Datetime>,
    text: Option<Text>,
    food: Option<Food>,
    science: Option<Science>,
    code: Option<Code>,
    internet: Option<Internet>,
    numbers: Numbers,
    network: Network,
    transport: Transport,
    development: Development,
    file: File,
    hardware: Hardware,
    clothing_sizes: ClothingSizes,
    markup_rng: ChaCha8Rng,
    registered: BTreeMap<String, Box<dyn Provider>>,
}

impl Generic {
    pub fn new(locale: impl Into<String>) -> Self {
        Self::with_options(GenericOptions {
            locale: locale.into(),
            ..GenericOptions::default()
        })
    }

    pub fn with_options(options: GenericOptions) -> Self {
        let store = options.store.unwrap_or_else(assets::embedded_store);
        let ctx = ProviderContext::new(options.locale, store).with_seed(options.seed);
        Self {
            numbers: Numbers::new(ctx.seed()),
            network: Network::new(ctx.seed()),
            transport: Transport::new(ctx.seed()),
            development: Development::new(ctx.seed()),
            file: File::new(ctx.seed()),
            hardware: Hardware::new(ctx.seed()),
            clothing_sizes: ClothingSizes::new(ctx.seed()),
            markup_rng: ctx.rng(Structured::NAME),
            ctx,
            personal: None,
            address: None,
            business: None,
            datetime: None,
            text: None,
            food: None,
            science: None,
            code: None,
            internet: None,
            registered: BTreeMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        self.ctx.locale()
    }

    pub fn store(&self) -> &Arc<ResourceStore> {
        self.ctx.store()
    }

    pub fn personal(&mut self) -> Result<&mut Personal> {
        let ctx = &self.ctx;
        lazy(&mut self.personal, Personal::NAME, ctx, Personal::new)
    }

    pub fn address(&mut self) -> Result<&mut Address> {
        let ctx = &self.ctx;
        lazy(&mut self.address, Address::NAME, ctx, Address::new)
    }

    pub fn business(&mut self) -> Result<&mut Business> {
        let ctx = &self.ctx;
        lazy(&mut self.business, Business::NAME, ctx, Business::new)
    }

    pub fn datetime(&mut self) -> Result<&mut Datetime> {
        let ctx = &self.ctx;
        lazy(&mut self.datetime, Datetime::NAME, ctx, Datetime::new)
    }

    pub fn text(&mut self) -> Result<&mut Text> {
        let ctx = &self.ctx;
        lazy(&mut self.text, Text::NAME, ctx, Text::new)
    }

    pub fn food(&mut self) -> Result<&mut Food> {
        let ctx = &self.ctx;
        lazy(&mut self.food, Food::NAME, ctx, Food::new)
    }

    pub fn science(&mut self) -> Result<&mut Science> {
        let ctx = &self.ctx;
        lazy(&mut self.science, Science::NAME, ctx, Science::new)
    }

    pub fn code(&mut self) -> Result<&mut Code> {
        let ctx = &self.ctx;
        lazy(&mut self.code, Code::NAME, ctx, |ctx| Ok(Code::new(ctx)))
    }

    /// Needs the `en` personal bundle whatever the facade locale.
    pub fn internet(&mut self) -> Result<&mut Internet> {
        let ctx = &self.ctx;
        lazy(&mut self.internet, Internet::NAME, ctx, Internet::new)
    }

    pub fn numbers(&mut self) -> &mut Numbers {
        &mut self.numbers
    }

    pub fn network(&mut self) -> &mut Network {
        &mut self.network
    }

    pub fn transport(&mut self) -> &mut Transport {
        &mut self.transport
    }

    pub fn development(&mut self) -> &mut Development {
        &mut self.development
    }

    pub fn file(&mut self) -> &mut File {
        &mut self.file
    }

    pub fn hardware(&mut self) -> &mut Hardware {
        &mut self.hardware
    }

    pub fn clothing_sizes(&mut self) -> &mut ClothingSizes {
        &mut self.clothing_sizes
    }

    pub fn structured(&mut self) -> Structured<'_> {
        Structured::new(self)
    }

    /// RNG behind the CSS and HTML snippets of [`Structured`].
    pub(crate) fn markup_rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.markup_rng
    }

    /// Register `P` under its declared name, or its lowercased type name.
    ///
    /// A later registration under the same name replaces the earlier one.
    /// Names that are not identifiers, or that shadow a built-in provider,
    /// are rejected and leave the registry unchanged.
    pub fn register<P: Provider + Default>(&mut self) -> Result<String> {
        let name = provider_name::<P>()?;
        if BUILTIN_PROVIDERS.contains(&name.as_str()) {
            return Err(Error::InvalidProvider(format!(
                "'{name}' is a built-in provider name"
            )));
        }
        let replaced = self
            .registered
            .insert(name.clone(), Box::new(P::default()))
            .is_some();
        debug!(provider = %name, replaced, "provider registered");
        Ok(name)
    }

    /// Names of registered (non built-in) providers, sorted.
    pub fn registered_names(&self) -> Vec<&str> {
        self.registered.keys().map(String::as_str).collect()
    }

    /// Registered provider `name`, if it is a `P`.
    pub fn registered<P: Provider>(&self, name: &str) -> Option<&P> {
        let provider: &(dyn Provider + 'static) = &**self.registered.get(name)?;
        let provider: &(dyn Any + 'static) = provider;
        provider.downcast_ref::<P>()
    }

    pub fn registered_mut<P: Provider>(&mut self, name: &str) -> Option<&mut P> {
        let provider: &mut (dyn Provider + 'static) = &mut **self.registered.get_mut(name)?;
        let provider: &mut (dyn Any + 'static) = provider;
        provider.downcast_mut::<P>()
    }

    /// Any provider, built-in or registered, by name.
    pub fn provider(&mut self, name: &str) -> Result<&mut (dyn Provider + 'static)> {
        match name {
            Personal::NAME => Ok(self.personal()?),
            Address::NAME => Ok(self.address()?),
            Business::NAME => Ok(self.business()?),
            Datetime::NAME => Ok(self.datetime()?),
            Text::NAME => Ok(self.text()?),
            Food::NAME => Ok(self.food()?),
            Science::NAME => Ok(self.science()?),
            Code::NAME => Ok(self.code()?),
            Internet::NAME => Ok(self.internet()?),
            Numbers::NAME => Ok(&mut self.numbers),
            Network::NAME => Ok(&mut self.network),
            Transport::NAME => Ok(&mut self.transport),
            Development::NAME => Ok(&mut self.development),
            File::NAME => Ok(&mut self.file),
            Hardware::NAME => Ok(&mut self.hardware),
            ClothingSizes::NAME => Ok(&mut self.clothing_sizes),
            _ => self
                .registered
                .get_mut(name)
                .map(Box::as_mut)
                .ok_or_else(|| Error::unsupported("provider", name)),
        }
    }

    /// Field names declared by provider `name`.
    pub fn fields(&mut self, name: &str) -> Result<Vec<&'static str>> {
        Ok(self.provider(name)?.fields())
    }

    /// Run field `field` of provider `name` with its default arguments.
    pub fn generate(&mut self, name: &str, field: &str) -> Result<Value> {
        self.provider(name)?.generate_field(field)
    }
}

impl fmt::Debug for Generic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generic")
            .field("locale", &self.locale())
            .field("seed", &self.ctx.seed())
            .field("registered", &self.registered_names())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Generic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        locale::describe(f, "Generic", self.locale())
    }
}

fn lazy<'a, P>(
    slot: &'a mut Option<P>,
    name: &str,
    ctx: &ProviderContext,
    init: impl FnOnce(&ProviderContext) -> Result<P>,
) -> Result<&'a mut P> {
    let provider = match slot.take() {
        Some(provider) => provider,
        None => {
            debug!(provider = name, locale = ctx.locale(), "constructing provider");
            init(ctx)?
        }
    };
    Ok(slot.insert(provider))
}

/// Registration name of `P`: its declared name, else the lowercased type
/// name without module path or generic arguments.
pub fn provider_name<P: Provider>() -> Result<String> {
    let name = match P::declared_name() {
        Some(name) => name.to_string(),
        None => type_ident(std::any::type_name::<P>()).to_lowercase(),
    };
    if !is_identifier(&name) {
        return Err(Error::InvalidProvider(format!(
            "'{name}' (from {}) is not a valid provider name",
            std::any::type_name::<P>()
        )));
    }
    Ok(name)
}

fn type_ident(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
