//! Data models for fact retrievers

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Value types a fact field can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactValueType {
    Integer,
    Float,
    String,
    Boolean,
    DateTime,
    Set,
}

/// Describes one named field of a fact schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactValueDescriptor {
    #[serde(rename = "type")]
    pub value_type: FactValueType,
    pub description: String,
}

/// Shape of the facts a retriever produces: fact name -> descriptor
///
/// Field order is preserved so downstream consumers advertise facts in the
/// order the supplier declared them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactSchema {
    #[serde(flatten)]
    pub fields: IndexMap<String, FactValueDescriptor>,
}

impl FactSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the schema
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value_type: FactValueType,
        description: impl Into<String>,
    ) -> Self {
        self.fields.insert(
            name.into(),
            FactValueDescriptor {
                value_type,
                description: description.into(),
            },
        );
        self
    }
}

/// Reference to the entity a fact describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub name: String,
}

fn default_namespace() -> String {
    "default".to_string()
}

impl EntityRef {
    pub fn new(
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.kind, self.namespace, self.name)
    }
}

/// A single typed observation about one entity
///
/// Keys of `facts` correspond to field names in the producing retriever's
/// [`FactSchema`]; the registry never inspects the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub entity: EntityRef,
    pub facts: HashMap<String, serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl Fact {
    pub fn new(entity: EntityRef, facts: HashMap<String, serde_json::Value>) -> Self {
        Self {
            entity,
            facts,
            timestamp: Utc::now(),
        }
    }
}

/// Predicate restricting which entities a retriever applies to,
/// e.g. `{"kind": "component"}`
pub type EntityFilter = HashMap<String, String>;

/// Context handed to a retriever run by the scheduler that drives it
#[derive(Debug, Clone, Default)]
pub struct RetrieverContext {
    /// Entities the run should cover; empty means all known entities
    pub entities: Vec<EntityRef>,
}

/// A pluggable unit that produces typed facts about entities.
///
/// Implemented by external suppliers. The registry only reads `id` and
/// `schema`; `retrieve` is driven by the scheduler that consumes the
/// registry, never by the registry itself.
#[async_trait]
pub trait FactRetriever: Send + Sync {
    /// Unique identifier for this retriever
    fn id(&self) -> &str;

    /// Human-readable summary of what this retriever collects
    fn description(&self) -> &str {
        ""
    }

    /// Shape of the facts this retriever produces
    fn schema(&self) -> &FactSchema;

    /// Optional scoping of which entities this retriever applies to
    fn entity_filter(&self) -> Option<&[EntityFilter]> {
        None
    }

    /// Collect facts for the given entities
    async fn retrieve(&self, ctx: &RetrieverContext) -> anyhow::Result<Vec<Fact>>;
}

/// Retention policy for the facts a retriever produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactLifecycle {
    /// Keep at most this many fact rows per entity
    MaxItems(usize),
    /// Expire facts older than this
    Ttl(Duration),
}

/// A retriever bundled with the operational metadata a scheduler needs
/// to run it.
///
/// Cloning is cheap: the retriever itself is shared behind an `Arc` and is
/// never mutated once registered.
#[derive(Clone)]
pub struct FactRetrieverRegistration {
    /// The data-collection unit itself
    pub retriever: Arc<dyn FactRetriever>,
    /// Cron expression describing execution cadence
    pub cadence: String,
    /// Retention policy for produced facts
    pub lifecycle: Option<FactLifecycle>,
    /// Per-run execution cap
    pub timeout: Option<Duration>,
}

impl FactRetrieverRegistration {
    pub fn new(retriever: Arc<dyn FactRetriever>, cadence: impl Into<String>) -> Self {
        Self {
            retriever,
            cadence: cadence.into(),
            lifecycle: None,
            timeout: None,
        }
    }

    pub fn with_lifecycle(mut self, lifecycle: FactLifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Identifier of the embedded retriever
    pub fn id(&self) -> &str {
        self.retriever.id()
    }

    /// Schema of the embedded retriever
    pub fn schema(&self) -> &FactSchema {
        self.retriever.schema()
    }
}

impl fmt::Debug for FactRetrieverRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactRetrieverRegistration")
            .field("retriever", &self.retriever.id())
            .field("cadence", &self.cadence)
            .field("lifecycle", &self.lifecycle)
            .field("timeout", &self.timeout)
            .finish()
    }
}
