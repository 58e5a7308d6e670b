//! The entity store seam and an in-memory implementation.
//!
//! The bake layer never touches storage directly. A host implements
//! [`EntityStore`] and [`apply_output`](crate::apply::apply_output) drives
//! it with one create-or-fetch followed by one attach per record and flag.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use shipwright_types::{EntityId, MarkerFlag, RecordKind, RuntimeRecord};

use crate::error::HostError;

/// Storage a bake is applied to.
pub trait EntityStore {
    /// Return the entity registered under `name`, creating it if needed.
    fn create_or_fetch(&mut self, name: &str) -> EntityId;

    /// Attach a record to an entity.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownEntity`] for a handle the store never
    /// issued and [`HostError::DuplicateRecord`] when the entity already
    /// has a record of the same kind.
    fn attach_record(&mut self, entity: EntityId, record: RuntimeRecord) -> Result<(), HostError>;

    /// Attach a marker flag. Attaching a flag twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownEntity`] for a handle the store never
    /// issued.
    fn attach_flag(&mut self, entity: EntityId, flag: MarkerFlag) -> Result<(), HostError>;
}

/// Everything attached to one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntityRecords {
    /// Scene object name the entity was created for.
    pub name: String,
    /// Records in attach order, at most one per kind.
    pub records: Vec<RuntimeRecord>,
    /// Marker flags.
    pub flags: BTreeSet<MarkerFlag>,
}

impl EntityRecords {
    /// The record of the given kind, if attached.
    pub fn record(&self, kind: RecordKind) -> Option<&RuntimeRecord> {
        self.records.iter().find(|r| r.kind() == kind)
    }
}

/// A [`BTreeMap`]-backed [`EntityStore`] with a name index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorld {
    entities: BTreeMap<EntityId, EntityRecords>,
    names: BTreeMap<String, EntityId>,
}

impl InMemoryWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity handle by scene object name.
    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.names.get(name).copied()
    }

    /// Everything attached to `entity`.
    pub fn entity(&self, entity: EntityId) -> Option<&EntityRecords> {
        self.entities.get(&entity)
    }

    /// Everything attached to the entity named `name`.
    pub fn by_name(&self, name: &str) -> Option<&EntityRecords> {
        self.id_of(name).and_then(|id| self.entity(id))
    }

    /// All entities ordered by name. Entity handles are left out so the
    /// snapshot is stable across runs.
    pub fn snapshot(&self) -> Vec<&EntityRecords> {
        self.names
            .values()
            .filter_map(|id| self.entities.get(id))
            .collect()
    }

    fn entry(&mut self, entity: EntityId) -> Result<&mut EntityRecords, HostError> {
        self.entities
            .get_mut(&entity)
            .ok_or(HostError::UnknownEntity(entity))
    }
}

impl EntityStore for InMemoryWorld {
    fn create_or_fetch(&mut self, name: &str) -> EntityId {
        if let Some(id) = self.names.get(name) {
            return *id;
        }
        let id = EntityId::new();
        self.names.insert(name.to_owned(), id);
        self.entities.insert(
            id,
            EntityRecords {
                name: name.to_owned(),
                ..EntityRecords::default()
            },
        );
        id
    }

    fn attach_record(&mut self, entity: EntityId, record: RuntimeRecord) -> Result<(), HostError> {
        let entry = self.entry(entity)?;
        let kind = record.kind();
        if entry.record(kind).is_some() {
            return Err(HostError::DuplicateRecord { entity, kind });
        }
        entry.records.push(record);
        Ok(())
    }

    fn attach_flag(&mut self, entity: EntityId, flag: MarkerFlag) -> Result<(), HostError> {
        self.entry(entity)?.flags.insert(flag);
        Ok(())
    }
}
