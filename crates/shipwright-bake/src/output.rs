//! The value a bake returns.

use serde::Serialize;
use shipwright_types::{MarkerFlag, RecordKind, RuntimeRecord};

use crate::error::BakeWarning;

/// Records, flags, and warnings produced for one target.
///
/// Records and flags keep emission order. `defaults` holds bundle records
/// that only apply when no facet emits the same kind; [`resolve_defaults`]
/// folds them into `records`. Applying the output to a host is a separate
/// step, see `shipwright_host::apply_output`.
///
/// [`resolve_defaults`]: BakeOutput::resolve_defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BakeOutput {
    /// Runtime records in emission order.
    pub records: Vec<RuntimeRecord>,
    /// Marker flags in emission order.
    pub flags: Vec<MarkerFlag>,
    /// Non-fatal diagnostics.
    pub warnings: Vec<BakeWarning>,
    /// Fallback records, overridden by any record of the same kind.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaults: Vec<RuntimeRecord>,
}

impl BakeOutput {
    /// Append another output after this one.
    pub fn extend(&mut self, other: Self) {
        self.records.extend(other.records);
        self.flags.extend(other.flags);
        self.warnings.extend(other.warnings);
        self.defaults.extend(other.defaults);
    }

    /// Move each default whose kind no record carries into `records`.
    ///
    /// The first default of a kind wins over later ones. Afterwards
    /// `defaults` is empty, and the result no longer depends on the order
    /// the facets were baked in.
    pub fn resolve_defaults(&mut self) {
        for record in std::mem::take(&mut self.defaults) {
            if self.record(record.kind()).is_none() {
                self.records.push(record);
            }
        }
    }

    /// Whether nothing at all was produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
            && self.flags.is_empty()
            && self.warnings.is_empty()
            && self.defaults.is_empty()
    }

    /// First record of the given kind.
    pub fn record(&self, kind: RecordKind) -> Option<&RuntimeRecord> {
        self.records.iter().find(|r| r.kind() == kind)
    }

    /// Whether the flag was emitted.
    pub fn has_flag(&self, flag: MarkerFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Kinds of all records in emission order.
    pub fn kinds(&self) -> Vec<RecordKind> {
        self.records.iter().map(RuntimeRecord::kind).collect()
    }
}
