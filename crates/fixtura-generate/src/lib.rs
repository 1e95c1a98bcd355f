//! Locale-aware fake data providers for fixtura.
//!
//! [`Generic`] bundles every built-in provider for one locale and accepts
//! additional ones through [`Generic::register`]. Bundles are embedded in the
//! crate unless a store over another source is supplied in
//! [`GenericOptions`].

pub mod assets;
pub mod generic;
mod intd;
pub mod providers;
pub mod structured;

pub use generic::{BUILTIN_PROVIDERS, Generic, GenericOptions, provider_name};
pub use providers::{
    Address, Business, ClothingSizes, Code, Datetime, Development, File, Food, Gender, Hardware,
    Internet, Network, Numbers, Personal, Provider, ProviderContext, Science, Text, Transport,
};
pub use structured::Structured;
