//! Identifier facets.
//!
//! Text ids are required: an empty or whitespace-only id suppresses the
//! record and reports [`BakeWarning::MissingIdentifier`]. Numeric ids pass
//! through unchanged.
//!
//! [`BakeWarning::MissingIdentifier`]: crate::error::BakeWarning::MissingIdentifier

use serde::{Deserialize, Serialize};
use shipwright_types::AggregateType;
use shipwright_types::records::{
    AggregateId, AggregateTypeRecord, ComposedAggregateProfile, CultureId, EffectId, HullId,
    LineageId, ModuleManufacturer, ModuleTypeId, ProductId, RaceId, RequiredTechTier, ResourceId,
    SentientAnatomy, TechTier,
};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{clamp_u8, trim_in_place};

/// Generates an authoring record holding one required long id.
macro_rules! catalog_id_facet {
    ( $( $(#[$meta:meta])* $name:ident { $field:ident } => $record:ident, $tag:literal; )+ ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
            #[serde(default)]
            pub struct $name {
                /// Catalog id. Surrounding whitespace is ignored.
                pub $field: String,
            }

            impl Facet for $name {
                const NAME: &'static str = $tag;

                fn bake(&self, ctx: &mut BakeContext<'_>) {
                    let id = ctx.require_long(stringify!($field), &self.$field);
                    ctx.emit_optional(id.map($record));
                }

                fn normalize_in_place(&mut self) {
                    trim_in_place(&mut self.$field);
                }
            }
        )+
    };
}

catalog_id_facet! {
    /// Hull catalog reference.
    AuthoringHullId { hull_id } => HullId, "hull_id";
    /// Resource catalog reference.
    AuthoringResourceId { resource_id } => ResourceId, "resource_id";
    /// Product catalog reference.
    AuthoringProductId { product_id } => ProductId, "product_id";
    /// Effect catalog reference.
    AuthoringEffectId { effect_id } => EffectId, "effect_id";
    /// Aggregate organization reference.
    AuthoringAggregateId { aggregate_id } => AggregateId, "aggregate_id";
    /// Family lineage reference.
    AuthoringLineage { lineage_id } => LineageId, "lineage";
    /// Module manufacturer reference.
    AuthoringManufacturer { manufacturer_id } => ModuleManufacturer, "manufacturer";
    /// Species reference.
    AuthoringSpecies { species_id } => SentientAnatomy, "species";
}

// ---------------------------------------------------------------------------
// Module id with gated tech tier
// ---------------------------------------------------------------------------

/// Module type reference with an optional tech requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringModuleId {
    /// Module type catalog id.
    pub module_id: String,
    /// Tech tier needed to fit the module. Zero means no requirement.
    pub required_tech_tier: i64,
}

impl Facet for AuthoringModuleId {
    const NAME: &'static str = "module_id";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let Some(id) = ctx.require_long("module_id", &self.module_id) else {
            return;
        };
        ctx.emit(ModuleTypeId(id));
        let tier = clamp_u8(self.required_tech_tier, 0, u8::MAX);
        if tier > 0 {
            ctx.emit(RequiredTechTier(tier));
        }
    }

    fn normalize_in_place(&mut self) {
        trim_in_place(&mut self.module_id);
    }
}

// ---------------------------------------------------------------------------
// Numeric ids
// ---------------------------------------------------------------------------

/// Numeric culture id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringCulture {
    /// Culture id.
    pub culture_id: u16,
}

impl Facet for AuthoringCulture {
    const NAME: &'static str = "culture";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(CultureId(self.culture_id));
    }
}

/// Numeric race id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringRace {
    /// Race id.
    pub race_id: u16,
}

impl Facet for AuthoringRace {
    const NAME: &'static str = "race";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(RaceId(self.race_id));
    }
}

/// Technology tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringTechTier {
    /// Tier, saturated into `[0, 255]`.
    pub tier: i64,
}

impl Facet for AuthoringTechTier {
    const NAME: &'static str = "tech_tier";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(TechTier(clamp_u8(self.tier, 0, u8::MAX)));
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Kind of aggregate organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringAggregateType {
    /// Aggregate kind.
    pub aggregate_type: AggregateType,
}

impl Facet for AuthoringAggregateType {
    const NAME: &'static str = "aggregate_type";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(AggregateTypeRecord(self.aggregate_type));
    }
}

/// Profile ids an aggregate is composed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringAggregateProfile {
    /// Template id. Required.
    pub template_id: String,
    /// Outlook profile id.
    pub outlook_id: String,
    /// Alignment profile id.
    pub alignment_id: String,
    /// Personality profile id.
    pub personality_id: String,
    /// Theme profile id.
    pub theme_id: String,
}

impl Facet for AuthoringAggregateProfile {
    const NAME: &'static str = "aggregate_profile";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let Some(template_id) = ctx.require_short("template_id", &self.template_id) else {
            return;
        };
        let profile = ComposedAggregateProfile {
            template_id,
            outlook_id: ctx.optional_short("outlook_id", &self.outlook_id),
            alignment_id: ctx.optional_short("alignment_id", &self.alignment_id),
            personality_id: ctx.optional_short("personality_id", &self.personality_id),
            theme_id: ctx.optional_short("theme_id", &self.theme_id),
        };
        ctx.emit(profile);
    }

    fn normalize_in_place(&mut self) {
        trim_in_place(&mut self.template_id);
        trim_in_place(&mut self.outlook_id);
        trim_in_place(&mut self.alignment_id);
        trim_in_place(&mut self.personality_id);
        trim_in_place(&mut self.theme_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BakeWarning;
    use crate::facet::bake_facet;
    use shipwright_types::{LongId, RecordKind, RuntimeRecord, ShortId};

    fn hull(text: &str) -> AuthoringHullId {
        AuthoringHullId {
            hull_id: text.to_owned(),
        }
    }

    #[test]
    fn hull_id_is_trimmed() {
        let output = bake_facet(&hull("  lcv-sparrow "), "Frigate");
        assert_eq!(
            output.records,
            vec![RuntimeRecord::HullId(HullId(
                LongId::new("lcv-sparrow").unwrap_or_default()
            ))]
        );
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn whitespace_hull_id_is_suppressed() {
        for raw in ["", "   ", "\t\n"] {
            let output = bake_facet(&hull(raw), "Frigate");
            assert!(output.records.is_empty());
            assert!(matches!(
                output.warnings.as_slice(),
                [BakeWarning::MissingIdentifier { field: "hull_id", .. }]
            ));
        }
    }

    #[test]
    fn tech_tier_gates_secondary_record() {
        let zero = AuthoringModuleId {
            module_id: "mod.laser.mk2".to_owned(),
            required_tech_tier: 0,
        };
        assert_eq!(bake_facet(&zero, "M").kinds(), vec![RecordKind::ModuleTypeId]);

        let five = AuthoringModuleId {
            required_tech_tier: 5,
            ..zero
        };
        let output = bake_facet(&five, "M");
        assert_eq!(
            output.kinds(),
            vec![RecordKind::ModuleTypeId, RecordKind::RequiredTechTier]
        );
        assert_eq!(
            output.record(RecordKind::RequiredTechTier),
            Some(&RuntimeRecord::RequiredTechTier(RequiredTechTier(5)))
        );
    }

    #[test]
    fn negative_required_tier_is_treated_as_none() {
        let module = AuthoringModuleId {
            module_id: "mod.laser.mk2".to_owned(),
            required_tech_tier: -4,
        };
        assert_eq!(bake_facet(&module, "M").records.len(), 1);
    }

    #[test]
    fn missing_module_id_suppresses_both_records() {
        let module = AuthoringModuleId {
            module_id: " ".to_owned(),
            required_tech_tier: 5,
        };
        let output = bake_facet(&module, "M");
        assert!(output.records.is_empty());
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn numeric_ids_pass_through() {
        let culture = bake_facet(&AuthoringCulture { culture_id: 65_535 }, "Crew");
        assert_eq!(
            culture.records,
            vec![RuntimeRecord::CultureId(CultureId(65_535))]
        );
        let race = bake_facet(&AuthoringRace { race_id: 0 }, "Crew");
        assert_eq!(race.records, vec![RuntimeRecord::RaceId(RaceId(0))]);
    }

    #[test]
    fn tech_tier_saturates() {
        let output = bake_facet(&AuthoringTechTier { tier: 1_000 }, "Colony");
        assert_eq!(output.records, vec![RuntimeRecord::TechTier(TechTier(255))]);
        let output = bake_facet(&AuthoringTechTier { tier: -1 }, "Colony");
        assert_eq!(output.records, vec![RuntimeRecord::TechTier(TechTier(0))]);
    }

    #[test]
    fn aggregate_profile_requires_template() {
        let profile = AuthoringAggregateProfile {
            template_id: String::new(),
            theme_id: "theme.crimson".to_owned(),
            ..AuthoringAggregateProfile::default()
        };
        let output = bake_facet(&profile, "Guild");
        assert!(output.records.is_empty());
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn aggregate_profile_uses_short_ids() {
        let profile = AuthoringAggregateProfile {
            template_id: " guild.traders ".to_owned(),
            outlook_id: "o".repeat(40),
            ..AuthoringAggregateProfile::default()
        };
        let output = bake_facet(&profile, "Guild");
        assert_eq!(
            output.records,
            vec![RuntimeRecord::ComposedAggregateProfile(ComposedAggregateProfile {
                template_id: ShortId::new("guild.traders").unwrap_or_default(),
                outlook_id: ShortId::truncating(&"o".repeat(40)).0,
                alignment_id: ShortId::empty(),
                personality_id: ShortId::empty(),
                theme_id: ShortId::empty(),
            })]
        );
        assert!(matches!(
            output.warnings.as_slice(),
            [BakeWarning::IdentifierTruncated { field: "outlook_id", .. }]
        ));
    }
}
