//! Applying a [`BakeOutput`] to an [`EntityStore`].

use std::borrow::Cow;

use serde::Serialize;
use shipwright_bake::BakeOutput;
use shipwright_types::EntityId;
use tracing::warn;

use crate::store::EntityStore;

/// What happened when one output was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Entity the output was applied to.
    pub entity: EntityId,
    /// Records the store accepted.
    pub records_attached: usize,
    /// Flags the store accepted.
    pub flags_attached: usize,
    /// Attaches the store refused.
    pub rejected: usize,
    /// Bake warnings carried by the output.
    pub warnings: usize,
}

impl ApplyReport {
    /// Whether every attach succeeded and the bake raised no warnings.
    pub const fn is_clean(&self) -> bool {
        self.rejected == 0 && self.warnings == 0
    }
}

/// Apply `output` to the entity named `target_name`.
///
/// Calls [`EntityStore::create_or_fetch`] exactly once, then attaches every
/// record and flag in order. Unresolved defaults are attached after the
/// records, skipping any kind a record already covers. A refused attach is
/// logged and counted; it never stops the remaining attaches. Every bake
/// warning is logged.
pub fn apply_output<S: EntityStore + ?Sized>(
    store: &mut S,
    target_name: &str,
    output: &BakeOutput,
) -> ApplyReport {
    let output: Cow<'_, BakeOutput> = if output.defaults.is_empty() {
        Cow::Borrowed(output)
    } else {
        let mut resolved = output.clone();
        resolved.resolve_defaults();
        Cow::Owned(resolved)
    };

    for warning in &output.warnings {
        warn!(
            target_name = warning.target(),
            facet = warning.facet(),
            warning = %warning,
            "bake warning"
        );
    }

    let entity = store.create_or_fetch(target_name);
    let mut records_attached: usize = 0;
    let mut flags_attached: usize = 0;
    let mut rejected: usize = 0;

    for record in &output.records {
        let kind = record.kind();
        match store.attach_record(entity, record.clone()) {
            Ok(()) => records_attached = records_attached.saturating_add(1),
            Err(e) => {
                rejected = rejected.saturating_add(1);
                warn!(
                    target_name,
                    entity = %entity,
                    kind = ?kind,
                    error = %e,
                    "record attach rejected"
                );
            }
        }
    }

    for flag in &output.flags {
        match store.attach_flag(entity, *flag) {
            Ok(()) => flags_attached = flags_attached.saturating_add(1),
            Err(e) => {
                rejected = rejected.saturating_add(1);
                warn!(
                    target_name,
                    entity = %entity,
                    flag = ?flag,
                    error = %e,
                    "flag attach rejected"
                );
            }
        }
    }

    ApplyReport {
        entity,
        records_attached,
        flags_attached,
        rejected,
        warnings: output.warnings.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;
    use crate::store::InMemoryWorld;
    use shipwright_bake::BakeWarning;
    use shipwright_types::records::{HullId, TechTier};
    use shipwright_types::{LongId, MarkerFlag, RuntimeRecord};

    /// Counts calls so the adapter contract can be checked.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryWorld,
        create_calls: usize,
        attach_calls: usize,
    }

    impl EntityStore for CountingStore {
        fn create_or_fetch(&mut self, name: &str) -> EntityId {
            self.create_calls = self.create_calls.saturating_add(1);
            self.inner.create_or_fetch(name)
        }

        fn attach_record(
            &mut self,
            entity: EntityId,
            record: RuntimeRecord,
        ) -> Result<(), HostError> {
            self.attach_calls = self.attach_calls.saturating_add(1);
            self.inner.attach_record(entity, record)
        }

        fn attach_flag(&mut self, entity: EntityId, flag: MarkerFlag) -> Result<(), HostError> {
            self.attach_calls = self.attach_calls.saturating_add(1);
            self.inner.attach_flag(entity, flag)
        }
    }

    fn output() -> BakeOutput {
        BakeOutput {
            records: vec![
                HullId(LongId::default()).into(),
                TechTier(4).into(),
                TechTier(5).into(),
            ],
            flags: vec![MarkerFlag::CapitalShip],
            warnings: vec![BakeWarning::MissingIdentifier {
                target: "Frigate".to_owned(),
                facet: "module_id",
                field: "module_id",
            }],
            defaults: Vec::new(),
        }
    }

    #[test]
    fn one_create_and_one_attach_each() {
        let mut store = CountingStore::default();
        let report = apply_output(&mut store, "Frigate", &output());
        assert_eq!(store.create_calls, 1);
        assert_eq!(store.attach_calls, 4);
        assert_eq!(report.records_attached, 2);
        assert_eq!(report.flags_attached, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.warnings, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn rejection_does_not_stop_later_attaches() {
        let mut world = InMemoryWorld::new();
        apply_output(&mut world, "Frigate", &output());
        let entity = world.by_name("Frigate");
        assert!(entity.is_some_and(|e| e.flags.contains(&MarkerFlag::CapitalShip)));
        assert_eq!(entity.map(|e| e.records.len()), Some(2));
    }

    #[test]
    fn defaults_attach_only_for_uncovered_kinds() {
        let mut output = BakeOutput::default();
        output.records.push(TechTier(6).into());
        output.defaults.push(TechTier(1).into());
        output.defaults.push(HullId(LongId::default()).into());

        let mut world = InMemoryWorld::new();
        let report = apply_output(&mut world, "Frigate", &output);

        assert_eq!(report.records_attached, 2);
        assert_eq!(report.rejected, 0);
        assert_eq!(
            world.by_name("Frigate").map(|e| e.records.clone()),
            Some(vec![
                RuntimeRecord::TechTier(TechTier(6)),
                RuntimeRecord::HullId(HullId(LongId::default())),
            ])
        );
    }

    #[test]
    fn empty_output_still_creates_entity() {
        let mut world = InMemoryWorld::new();
        let report = apply_output(&mut world, "Empty", &BakeOutput::default());
        assert!(report.is_clean());
        assert_eq!(world.id_of("Empty"), Some(report.entity));
    }
}
