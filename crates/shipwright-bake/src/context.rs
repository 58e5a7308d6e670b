//! The emitter a facet writes into while it bakes.
//!
//! A [`BakeContext`] is scoped to one (target, facet) pair. It applies the
//! identifier rules so that every facet trims, bounds, and reports ids the
//! same way, and it collects what the facet emits into a [`BakeOutput`].

use shipwright_types::{FixedId, LongId, MarkerFlag, RuntimeRecord, ShortId};

use crate::error::BakeWarning;
use crate::normalize::trim_id;
use crate::output::BakeOutput;

/// Collects the records, flags, and warnings of one facet bake.
#[derive(Debug)]
pub struct BakeContext<'a> {
    target: &'a str,
    facet: &'static str,
    output: BakeOutput,
}

impl<'a> BakeContext<'a> {
    /// Start baking `facet` for the scene object named `target`.
    pub fn new(target: &'a str, facet: &'static str) -> Self {
        Self {
            target,
            facet,
            output: BakeOutput::default(),
        }
    }

    /// Name of the scene object being baked.
    pub const fn target(&self) -> &str {
        self.target
    }

    /// Name of the facet being baked.
    pub const fn facet(&self) -> &'static str {
        self.facet
    }

    // -----------------------------------------------------------------------
    // Identifiers
    // -----------------------------------------------------------------------

    /// Trim and bound a required long identifier.
    ///
    /// Returns `None` and records [`BakeWarning::MissingIdentifier`] when
    /// the trimmed text is empty.
    pub fn require_long(&mut self, field: &'static str, raw: &str) -> Option<LongId> {
        self.require(field, raw)
    }

    /// Trim and bound a required short identifier.
    pub fn require_short(&mut self, field: &'static str, raw: &str) -> Option<ShortId> {
        self.require(field, raw)
    }

    /// Trim and bound an optional long identifier. Empty input stays empty
    /// without a warning.
    pub fn optional_long(&mut self, field: &'static str, raw: &str) -> LongId {
        self.bounded(field, trim_id(raw))
    }

    /// Trim and bound an optional short identifier.
    pub fn optional_short(&mut self, field: &'static str, raw: &str) -> ShortId {
        self.bounded(field, trim_id(raw))
    }

    /// Trim and bound an entity reference inside a list entry.
    ///
    /// An empty reference means the entry is dropped. That is compaction,
    /// not an error, so no warning is recorded.
    pub fn reference(&mut self, field: &'static str, raw: &str) -> Option<LongId> {
        let text = trim_id(raw);
        if text.is_empty() {
            return None;
        }
        Some(self.bounded(field, text))
    }

    fn require<const N: usize>(&mut self, field: &'static str, raw: &str) -> Option<FixedId<N>> {
        let text = trim_id(raw);
        if text.is_empty() {
            self.output.warnings.push(BakeWarning::MissingIdentifier {
                target: self.target.to_owned(),
                facet: self.facet,
                field,
            });
            return None;
        }
        Some(self.bounded(field, text))
    }

    fn bounded<const N: usize>(&mut self, field: &'static str, text: &str) -> FixedId<N> {
        let (id, truncated) = FixedId::<N>::truncating(text);
        if truncated {
            self.output.warnings.push(BakeWarning::IdentifierTruncated {
                target: self.target.to_owned(),
                facet: self.facet,
                field,
                max_bytes: N,
                original_bytes: text.len(),
            });
        }
        id
    }

    // -----------------------------------------------------------------------
    // Emission
    // -----------------------------------------------------------------------

    /// Emit a record.
    pub fn emit(&mut self, record: impl Into<RuntimeRecord>) {
        self.output.records.push(record.into());
    }

    /// Emit a record if present. `None` models "this facet does not apply".
    pub fn emit_optional<R: Into<RuntimeRecord>>(&mut self, record: Option<R>) {
        if let Some(record) = record {
            self.emit(record);
        }
    }

    /// Emit a fallback record. It is kept only if no facet on the same
    /// target emits a record of its kind.
    pub fn emit_default(&mut self, record: impl Into<RuntimeRecord>) {
        self.output.defaults.push(record.into());
    }

    /// Attach a marker flag.
    pub fn flag(&mut self, flag: MarkerFlag) {
        self.output.flags.push(flag);
    }

    /// Finish and return everything emitted.
    pub fn finish(self) -> BakeOutput {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipwright_types::records::HullId;

    #[test]
    fn required_id_is_trimmed() {
        let mut ctx = BakeContext::new("Frigate", "hull_id");
        let id = ctx.require_long("hull_id", "  lcv-sparrow ");
        assert_eq!(id.map(|i| i.to_string()), Some("lcv-sparrow".to_owned()));
        assert!(ctx.finish().warnings.is_empty());
    }

    #[test]
    fn empty_required_id_warns() {
        let mut ctx = BakeContext::new("Frigate", "hull_id");
        assert!(ctx.require_long("hull_id", " \t ").is_none());
        let output = ctx.finish();
        assert_eq!(
            output.warnings,
            vec![BakeWarning::MissingIdentifier {
                target: "Frigate".to_owned(),
                facet: "hull_id",
                field: "hull_id",
            }]
        );
    }

    #[test]
    fn oversized_id_truncates_with_warning() {
        let mut ctx = BakeContext::new("Station", "aggregate_profile");
        let raw = "t".repeat(40);
        let id = ctx.require_short("template_id", &raw);
        assert_eq!(id.map(|i| i.len()), Some(32));
        let output = ctx.finish();
        assert!(matches!(
            output.warnings.first(),
            Some(BakeWarning::IdentifierTruncated {
                max_bytes: 32,
                original_bytes: 40,
                ..
            })
        ));
    }

    #[test]
    fn empty_reference_is_silent() {
        let mut ctx = BakeContext::new("Pilot", "ownership");
        assert!(ctx.reference("asset_id", "").is_none());
        assert!(ctx.finish().is_empty());
    }

    #[test]
    fn emit_optional_skips_none() {
        let mut ctx = BakeContext::new("Frigate", "hull_id");
        ctx.emit_optional::<HullId>(None);
        ctx.emit_optional(Some(HullId(LongId::default())));
        ctx.flag(MarkerFlag::CapitalShip);
        let output = ctx.finish();
        assert_eq!(output.records.len(), 1);
        assert_eq!(output.flags, vec![MarkerFlag::CapitalShip]);
    }

    #[test]
    fn emit_default_is_kept_apart() {
        let mut ctx = BakeContext::new("Frigate", "capital_ship");
        ctx.emit_default(HullId(LongId::default()));
        let output = ctx.finish();
        assert!(output.records.is_empty());
        assert_eq!(output.defaults, vec![RuntimeRecord::HullId(HullId(LongId::default()))]);
    }
}
