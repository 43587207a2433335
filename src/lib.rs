//! Fact retriever registration and lookup
//!
//! This crate maintains the authoritative collection of fact retriever
//! registrations for an entity analysis system:
//! - Retrievers are registered once, under a unique identifier
//! - A scheduler reads the registrations to learn what to run and when
//! - Schema consumers read the retriever schemas to advertise available
//!   fact shapes downstream
//!
//! Retriever execution, scheduling, and fact persistence live in those
//! external collaborators; this crate only stores and serves registrations.

pub mod error;
pub mod facts;
pub mod metrics;

pub use error::{RegistryError, Result};
pub use facts::{
    EntityFilter, EntityRef, Fact, FactLifecycle, FactRetriever, FactRetrieverRegistration,
    FactRetrieverRegistry, FactSchema, FactValueDescriptor, FactValueType, RetrieverContext,
};

/// Convenience re-exports for downstream consumers
pub mod prelude {
    pub use crate::error::{RegistryError, Result};
    pub use crate::facts::{
        EntityRef, Fact, FactLifecycle, FactRetriever, FactRetrieverRegistration,
        FactRetrieverRegistry, FactSchema, FactValueDescriptor, FactValueType, RetrieverContext,
    };
}
