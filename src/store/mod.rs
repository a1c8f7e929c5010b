//! Read-only state stores seeded at construction.
//!
//! Stores provide a single read access point for a pre-seeded value. The
//! value is bound once, when the store is created, and never reassigned.

mod store;

pub use store::{create_seed_store, SeedStore};
