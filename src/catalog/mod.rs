//! Read-only template catalog.
//!
//! Templates are loaded once, wrapped in `Arc`, and shared by every unit
//! instance and every match built from the same [`Catalog`]. Nothing in
//! the simulator mutates a template.
//!
//! ## Key Types
//!
//! - `ChampionTemplate`: cost tier, base stats, traits, ability
//! - `ItemTemplate`: components (empty recipe) and completed items
//! - `TraitTemplate`: breakpoint tiers
//! - `AugmentDescriptor`: id, name and effect parameters
//! - `EffectParams`: untyped named parameters read by effect code
//! - `Catalog`: lookup by id, by name, by cost, by trait

/// Declares a string-backed catalog id.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $label, self.0)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

pub(crate) use string_id;

pub mod augment;
pub mod champion;
pub mod item;
pub mod params;
pub mod registry;
pub mod sample;
pub mod traits;

pub use augment::{AugmentDescriptor, AugmentId};
pub use champion::{AbilityDescriptor, BaseStats, ChampionId, ChampionTemplate};
pub use item::{ItemId, ItemTemplate};
pub use params::{EffectParams, ParamValue};
pub use registry::{Catalog, CatalogBuilder, CatalogData};
pub use sample::sample_catalog;
pub use traits::{TraitId, TraitTemplate, TraitTier};
