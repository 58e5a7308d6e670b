//! Error types for the `shipwright-host` crate.

use shipwright_types::{EntityId, RecordKind};

/// Errors raised while loading scenes or attaching baked data.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The entity already carries a record of this kind.
    #[error("entity {entity} already has a {kind:?} record")]
    DuplicateRecord {
        /// Target entity.
        entity: EntityId,
        /// Kind that was attached twice.
        kind: RecordKind,
    },

    /// The entity handle is not known to the store.
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// Failed to read a scene file.
    #[error("failed to read scene file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Scene YAML did not parse.
    #[error("failed to parse scene YAML: {source}")]
    Yaml {
        /// The underlying YAML error.
        source: serde_yml::Error,
    },

    /// Scene JSON did not parse, or a snapshot failed to encode.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

impl From<serde_yml::Error> for HostError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
