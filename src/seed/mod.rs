//! Seed sources and their errors.
//!
//! A seed source is the collaborator a store is constructed from: anything
//! that can yield the seed value exactly once. In-memory values load
//! infallibly; file and text sources surface I/O and parse failures as
//! [`SeedError`].

mod error;
mod source;

pub use error::SeedError;
pub use source::{InlineSeed, JsonSeed, SeedSource};
