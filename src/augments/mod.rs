//! Augment effects as a static plugin table.
//!
//! Each augment is an [`AugmentModule`]: an id, an optional synthetic
//! descriptor for augments the catalog lacks, an optional set of rounds in
//! which it may be offered, and a [`HookTable`] of plain function pointers.
//! [`AugmentRegistry::builtin`] merges every built-in module once; the
//! registry is then shared read-only (behind `Arc`) by every match.
//!
//! Dispatch never fails. An augment without the requested hook, or an id
//! the registry does not know, yields a neutral successful
//! [`AugmentResult`].
//!
//! Passives are recomputed from scratch: before any `passive` hook runs,
//! every owned unit's live stats are reset to their star-scaled base and
//! augment flags are cleared. Hooks add their bonuses on top each time, so
//! applying passives twice never stacks.
//!
//! ## Key Types
//!
//! - `HookEvent`: lifecycle trigger points
//! - `HookContext`: the player, pool and RNG handed to a hook
//! - `AugmentModule` / `HookTable`: one augment's behaviour
//! - `AugmentRegistry`: id-keyed dispatch and eligibility filtering

pub mod effects;
pub mod helpers;
pub mod hooks;
pub mod registry;
pub mod result;

pub use hooks::{AugmentModule, HookContext, HookEvent, HookFn, HookTable};
pub use registry::AugmentRegistry;
pub use result::AugmentResult;
