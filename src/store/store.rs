use std::sync::Arc;

use tracing::debug;

use crate::seed::{SeedError, SeedSource};

/// A thread-safe, read-only store for pre-seeded application state.
///
/// The seed value is bound exactly once, at construction, and the store
/// exposes no way to reassign it afterwards. Because nothing is ever
/// written after the payload is shared, reads need no locking.
pub struct SeedStore<T> {
    seed: Arc<T>,
}

impl<T> SeedStore<T> {
    /// Create a new store seeded with the given value.
    pub fn new(seed: T) -> Self {
        debug!(payload = std::any::type_name::<T>(), "seed store created");
        Self {
            seed: Arc::new(seed),
        }
    }

    /// Create a store by loading a seed source.
    ///
    /// Errors from fallible sources (file reads, deserialization) are
    /// propagated unchanged.
    pub fn from_source<S>(source: S) -> Result<Self, SeedError>
    where
        S: SeedSource<T>,
    {
        Ok(Self::new(source.load()?))
    }

    /// Borrow the seeded value.
    pub fn seed(&self) -> &T {
        &self.seed
    }

    /// Read the seeded value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.seed)
    }
}

impl<T: Clone> SeedStore<T> {
    /// Get a clone of the seeded value.
    pub fn get(&self) -> T {
        (*self.seed).clone()
    }
}

impl<T> Clone for SeedStore<T> {
    fn clone(&self) -> Self {
        Self {
            seed: Arc::clone(&self.seed),
        }
    }
}

/// Create a store by loading the given seed source.
///
/// # Example
///
/// ```
/// use seedbed::{create_seed_store, InlineSeed};
///
/// let store = create_seed_store(InlineSeed::new(vec![1, 2, 3]))?;
/// assert_eq!(store.get(), vec![1, 2, 3]);
/// # Ok::<(), seedbed::SeedError>(())
/// ```
pub fn create_seed_store<T, S>(source: S) -> Result<SeedStore<T>, SeedError>
where
    S: SeedSource<T>,
{
    SeedStore::from_source(source)
}
