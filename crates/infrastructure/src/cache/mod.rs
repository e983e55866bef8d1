//! Cache implementations
//!
//! The audio cache holds synthesized speech and composed report text in
//! memory with a bounded entry count and a cache-level TTL.

mod moka_cache;

pub use moka_cache::{MokaCache, MokaCacheConfig};
