//! Fact retriever registry implementation

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use indexmap::IndexMap;
use tracing::info;

use super::models::{FactRetriever, FactRetrieverRegistration, FactSchema};
use crate::error::{RegistryError, Result};
use crate::metrics::METRICS;

/// Central source of truth for which fact retrievers are known to the
/// system.
///
/// Holds `id -> registration` in insertion order, so listings are
/// reproducible. Entries are never removed or overwritten; once an id is
/// registered it stays for the registry's lifetime. A single `RwLock`
/// guards the map: readers see a consistent snapshot, and the
/// check-then-insert in [`register`](Self::register) is atomic under the
/// write lock.
pub struct FactRetrieverRegistry {
    retrievers: RwLock<IndexMap<String, FactRetrieverRegistration>>,
}

impl FactRetrieverRegistry {
    /// Build a registry from an initial set of registrations.
    ///
    /// Each element goes through [`register`](Self::register), so a
    /// duplicate id in the initial set fails construction with the same
    /// `Conflict` error the runtime path produces.
    pub fn new(registrations: Vec<FactRetrieverRegistration>) -> Result<Self> {
        let registry = Self::default();
        for registration in registrations {
            registry.register(registration)?;
        }
        Ok(registry)
    }

    /// Register a retriever.
    ///
    /// Fails with [`RegistryError::Conflict`] when the embedded retriever's
    /// id is already taken; the existing registration is left untouched.
    pub fn register(&self, registration: FactRetrieverRegistration) -> Result<()> {
        let id = registration.id().to_string();
        let mut retrievers = self
            .retrievers
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if retrievers.contains_key(&id) {
            METRICS.record_registration(false);
            return Err(RegistryError::Conflict { id });
        }

        retrievers.insert(id.clone(), registration);
        let count = retrievers.len();
        drop(retrievers);

        METRICS.record_registration(true);
        METRICS.set_registered(count);
        info!(retriever = %id, count, "Fact retriever registered");
        Ok(())
    }

    /// Look up a registration by retriever id.
    ///
    /// Fails with [`RegistryError::NotFound`] when no retriever with that
    /// id is registered.
    pub fn get(&self, id: &str) -> Result<FactRetrieverRegistration> {
        match self.read().get(id) {
            Some(registration) => {
                METRICS.record_lookup(true);
                Ok(registration.clone())
            }
            None => {
                METRICS.record_lookup(false);
                Err(RegistryError::NotFound { id: id.to_string() })
            }
        }
    }

    /// All registered retrievers, in registration order
    pub fn list_retrievers(&self) -> Vec<Arc<dyn FactRetriever>> {
        self.read()
            .values()
            .map(|registration| Arc::clone(&registration.retriever))
            .collect()
    }

    /// All registration records, in registration order
    pub fn list_registrations(&self) -> Vec<FactRetrieverRegistration> {
        self.read().values().cloned().collect()
    }

    /// Schemas of all registered retrievers, index-aligned with
    /// [`list_retrievers`](Self::list_retrievers)
    pub fn get_schemas(&self) -> Vec<FactSchema> {
        self.list_retrievers()
            .iter()
            .map(|retriever| retriever.schema().clone())
            .collect()
    }

    /// Number of registered retrievers
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, FactRetrieverRegistration>> {
        // A poisoned lock only means another thread panicked while holding
        // it; the map itself cannot be torn (the sole mutation is a single
        // insert performed after the occupancy check).
        self.retrievers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FactRetrieverRegistry {
    fn default() -> Self {
        Self {
            retrievers: RwLock::new(IndexMap::new()),
        }
    }
}

impl std::fmt::Debug for FactRetrieverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactRetrieverRegistry")
            .field("retriever_count", &self.len())
            .finish_non_exhaustive()
    }
}
