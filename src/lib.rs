//! # Seedbed
//!
//! Immutable, pre-seeded state stores for Rust.
//!
//! Seedbed provides two pieces for exposing a pre-populated data set to the
//! rest of an application:
//!
//! ## Stores
//!
//! A read-only container bound exactly once at construction:
//! - `SeedStore<T>` - Holds a seed value and hands out read access
//! - Clones share the same payload, so a store can be passed freely to
//!   every consumer that needs the data
//!
//! ## Seed sources
//!
//! The collaborators a store is constructed from:
//! - `InlineSeed<T>` - An already-constructed in-memory value
//! - `JsonSeed` - JSON text or a JSON file, deserialized into a typed payload
//!
//! There is no registry and no global state: sources are passed to
//! constructors, which return plain immutable values.

pub mod seed;
pub mod store;

// Re-export main types for convenience
pub use seed::{InlineSeed, JsonSeed, SeedError, SeedSource};
pub use store::{create_seed_store, SeedStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = SeedStore::new(42);
        assert_eq!(store.get(), 42);
        assert_eq!(store.get(), 42);
    }
}
