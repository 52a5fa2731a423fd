//! The shared champion pool.
//!
//! Every match has one pool shared by all players. Shops are *sampled*
//! from it without reserving stock; copies only leave the pool when a
//! unit is bought or granted, and return when it is sold.

pub mod champion_pool;

pub use champion_pool::{ChampionPool, PoolEntry};
