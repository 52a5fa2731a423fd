//! Built-in augment modules.

pub mod artillery_barrage;
pub mod epoch;
pub mod epoch_plus;
pub mod exiles_ii;

use super::hooks::AugmentModule;

/// Every module registered by [`AugmentRegistry::builtin`](super::AugmentRegistry::builtin).
#[must_use]
pub fn builtin_modules() -> Vec<AugmentModule> {
    vec![
        artillery_barrage::module(),
        exiles_ii::module(),
        epoch::module(),
        epoch_plus::module(),
    ]
}
