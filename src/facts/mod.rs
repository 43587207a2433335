//! Fact retriever registration and lookup
//!
//! The registry is the single authoritative collection of retriever
//! registrations:
//! - Identifier uniqueness enforced at registration time
//! - Insertion-order listings for schedulers and schema consumers
//! - Lookup by retriever id

pub mod models;
pub mod registry;

pub use models::{
    EntityFilter, EntityRef, Fact, FactLifecycle, FactRetriever, FactRetrieverRegistration,
    FactSchema, FactValueDescriptor, FactValueType, RetrieverContext,
};
pub use registry::FactRetrieverRegistry;
