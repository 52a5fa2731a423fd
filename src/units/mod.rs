//! Unit instances and the containers that own them.
//!
//! A [`Champion`] lives in exactly one place: a [`Board`] cell or a
//! [`Bench`] slot. Both containers own their units by value, so moving a
//! unit is a move in the Rust sense and a unit can never be in two places.
//!
//! ## Key Types
//!
//! - `Champion`: template handle, star level, items, live stats, flags
//! - `LiveStats`: mutable combat stats derived from the template
//! - `Board`: offset-coordinate hex grid
//! - `Bench`: fixed reserve slots

pub mod bench;
pub mod board;
pub mod champion;

pub use bench::Bench;
pub use board::Board;
pub use champion::{Champion, LiveStats, MAX_STARS};
