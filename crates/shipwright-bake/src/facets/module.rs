//! Module and facility facets.

use serde::{Deserialize, Serialize};
use shipwright_types::records::{
    FacilityArchetypeRecord, FacilityTierRecord, HullVariantRecord, ModuleFunctionData,
    ModuleQuality, ModuleRarityRecord, ModuleTier,
};
use shipwright_types::{FacilityArchetype, FacilityTier, HullVariant, ModuleFunction, ModuleRarity};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_scalar, clamp_u8, trim_in_place};

const QUALITY: ScalarRange = ScalarRange::UNIT.with_default(0.5);
const FUNCTION_CAPACITY: ScalarRange = ScalarRange::new(0.0, 1_000_000.0, 0.0);

/// Build quality and tier of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringModuleQuality {
    /// Quality in `[0, 1]`.
    pub quality: f32,
    /// Tier, saturated into `[0, 255]`.
    pub tier: i64,
}

impl Default for AuthoringModuleQuality {
    fn default() -> Self {
        Self {
            quality: QUALITY.default,
            tier: 1,
        }
    }
}

impl Facet for AuthoringModuleQuality {
    const NAME: &'static str = "module_quality";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(ModuleQuality(clamp_scalar(self.quality, QUALITY)));
        ctx.emit(ModuleTier(clamp_u8(self.tier, 0, u8::MAX)));
    }
}

/// Rarity of a module blueprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringModuleRarity {
    /// Rarity.
    pub rarity: ModuleRarity,
}

impl Facet for AuthoringModuleRarity {
    const NAME: &'static str = "module_rarity";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(ModuleRarityRecord(self.rarity));
    }
}

/// Variant of a hull design.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringHullVariant {
    /// Variant.
    pub variant: HullVariant,
}

impl Facet for AuthoringHullVariant {
    const NAME: &'static str = "hull_variant";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(HullVariantRecord(self.variant));
    }
}

/// What a module does and how much of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringModuleFunction {
    /// Function. `None` suppresses the record.
    pub function: ModuleFunction,
    /// Function capacity in `[0, 1e6]`.
    pub capacity: f32,
    /// Optional description key.
    pub description: String,
}

impl Facet for AuthoringModuleFunction {
    const NAME: &'static str = "module_function";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        if self.function == ModuleFunction::None {
            return;
        }
        let description = ctx.optional_long("description", &self.description);
        ctx.emit(ModuleFunctionData {
            function: self.function,
            capacity: clamp_scalar(self.capacity, FUNCTION_CAPACITY),
            description,
        });
    }

    fn normalize_in_place(&mut self) {
        trim_in_place(&mut self.description);
    }
}

/// Facility archetype and size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringFacility {
    /// Archetype. `None` suppresses both records.
    pub archetype: FacilityArchetype,
    /// Size tier.
    pub tier: FacilityTier,
}

impl AuthoringFacility {
    /// The archetype and tier records, absent when no archetype is set.
    pub fn records(&self) -> Option<(FacilityArchetypeRecord, FacilityTierRecord)> {
        (self.archetype != FacilityArchetype::None).then_some((
            FacilityArchetypeRecord(self.archetype),
            FacilityTierRecord(self.tier),
        ))
    }
}

impl Facet for AuthoringFacility {
    const NAME: &'static str = "facility";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        if let Some((archetype, tier)) = self.records() {
            ctx.emit(archetype);
            ctx.emit(tier);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::bake_facet;
    use shipwright_types::{LongId, RecordKind, RuntimeRecord};

    #[test]
    fn module_quality_defaults() {
        let output = bake_facet(&AuthoringModuleQuality::default(), "Laser");
        assert_eq!(
            output.records,
            vec![
                RuntimeRecord::ModuleQuality(ModuleQuality(0.5)),
                RuntimeRecord::ModuleTier(ModuleTier(1)),
            ]
        );
    }

    #[test]
    fn module_quality_saturates() {
        let facet = AuthoringModuleQuality {
            quality: 9.0,
            tier: 300,
        };
        let output = bake_facet(&facet, "Laser");
        assert_eq!(
            output.records,
            vec![
                RuntimeRecord::ModuleQuality(ModuleQuality(1.0)),
                RuntimeRecord::ModuleTier(ModuleTier(255)),
            ]
        );
    }

    #[test]
    fn rarity_and_variant_pass_through() {
        let rarity = bake_facet(
            &AuthoringModuleRarity {
                rarity: ModuleRarity::Prototype,
            },
            "Laser",
        );
        assert_eq!(
            rarity.records,
            vec![RuntimeRecord::ModuleRarity(ModuleRarityRecord(ModuleRarity::Prototype))]
        );
        let variant = bake_facet(&AuthoringHullVariant::default(), "Hull");
        assert_eq!(variant.kinds(), vec![RecordKind::HullVariant]);
    }

    #[test]
    fn function_none_is_suppressed() {
        let facet = AuthoringModuleFunction {
            capacity: 400.0,
            ..AuthoringModuleFunction::default()
        };
        assert!(bake_facet(&facet, "Bay").is_empty());
    }

    #[test]
    fn function_capacity_clamps() {
        let facet = AuthoringModuleFunction {
            function: ModuleFunction::HangarCapacity,
            capacity: -4.0,
            description: " hangar.small ".to_owned(),
        };
        let output = bake_facet(&facet, "Bay");
        assert_eq!(
            output.records,
            vec![RuntimeRecord::ModuleFunctionData(ModuleFunctionData {
                function: ModuleFunction::HangarCapacity,
                capacity: 0.0,
                description: LongId::new("hangar.small").unwrap_or_default(),
            })]
        );
    }

    #[test]
    fn facility_none_suppresses_both() {
        let facet = AuthoringFacility {
            archetype: FacilityArchetype::None,
            tier: FacilityTier::Titanic,
        };
        assert!(bake_facet(&facet, "Station").is_empty());
    }

    #[test]
    fn facility_emits_archetype_and_tier() {
        let facet = AuthoringFacility {
            archetype: FacilityArchetype::OrbitalDrydock,
            tier: FacilityTier::Large,
        };
        let output = bake_facet(&facet, "Station");
        assert_eq!(
            output.kinds(),
            vec![RecordKind::FacilityArchetype, RecordKind::FacilityTier]
        );
    }
}
