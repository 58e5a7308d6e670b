//! The [`Facet`] trait and whole-object baking.
//!
//! A facet is one designer-edited authoring record. Facets bake
//! independently; they only meet by attaching to the same target. An
//! [`AuthoringObject`] is a named scene object carrying any number of
//! facets, and [`bake_object`] concatenates their outputs in authoring
//! order.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::context::BakeContext;
use crate::facets::alignment::{
    AuthoringAlignment, AuthoringDoctrine, AuthoringEthicAxes, AuthoringOutlooks,
    AuthoringSpyRole,
};
use crate::facets::identity::{
    AuthoringAggregateId, AuthoringAggregateProfile, AuthoringAggregateType, AuthoringCulture,
    AuthoringEffectId, AuthoringHullId, AuthoringLineage, AuthoringManufacturer,
    AuthoringModuleId, AuthoringProductId, AuthoringRace, AuthoringResourceId, AuthoringSpecies,
    AuthoringTechTier,
};
use crate::facets::individual::{
    AuthoringAugmentationStats, AuthoringExpertise, AuthoringIndividualStats,
    AuthoringPhysique, AuthoringPreordain, AuthoringServiceTraits, AuthoringTitles,
};
use crate::facets::logistics::AuthoringLogisticsBoard;
use crate::facets::module::{
    AuthoringFacility, AuthoringHullVariant, AuthoringModuleFunction, AuthoringModuleQuality,
    AuthoringModuleRarity,
};
use crate::facets::power::AuthoringShipPower;
use crate::facets::relations::{
    AuthoringAffiliations, AuthoringContract, AuthoringLoyalty, AuthoringMentorship,
    AuthoringOwnership, AuthoringPatronage, AuthoringReputation, AuthoringSuccessors,
};
use crate::facets::strike_craft::{
    AuthoringStrikeCraftDogfight, AuthoringStrikeCraftPilot, AuthoringStrikeCraftWing,
};
use crate::facets::vessel::{
    AuthoringCaptainReadiness, AuthoringCapitalShip, AuthoringCarrier, AuthoringStance,
    AuthoringVesselQuality,
};
use crate::output::BakeOutput;

/// One authoring record that bakes into zero or more runtime records.
pub trait Facet {
    /// Stable facet name, also the scene document tag.
    const NAME: &'static str;

    /// Emit this facet's records, flags, and warnings into `ctx`.
    ///
    /// Must be total: any field values, including NaN and empty text,
    /// produce an output.
    fn bake(&self, ctx: &mut BakeContext<'_>);

    /// Rewrite stored identifiers into their normalized form.
    ///
    /// Baking does not depend on this having run.
    fn normalize_in_place(&mut self) {}
}

/// Bake a single facet for the scene object named `target`.
pub fn bake_facet<F: Facet>(facet: &F, target: &str) -> BakeOutput {
    let mut ctx = BakeContext::new(target, F::NAME);
    facet.bake(&mut ctx);
    let output = ctx.finish();
    trace!(
        target_name = target,
        facet = F::NAME,
        records = output.records.len(),
        flags = output.flags.len(),
        warnings = output.warnings.len(),
        "facet baked"
    );
    output
}

/// Generates [`AuthoredFacet`] and its dispatch methods.
macro_rules! define_authored_facets {
    ( $( $variant:ident($payload:ty) => $facet:ty, )+ ) => {
        /// Any facet, tagged by name in scene documents.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "facet", rename_all = "snake_case")]
        pub enum AuthoredFacet {
            $(
                #[doc = concat!("The `", stringify!($variant), "` facet.")]
                $variant($payload),
            )+
        }

        impl AuthoredFacet {
            /// Facet name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$facet as Facet>::NAME, )+
                }
            }

            /// Bake this facet for the scene object named `target`.
            pub fn bake(&self, target: &str) -> BakeOutput {
                match self {
                    $( Self::$variant(facet) => bake_facet::<$facet>(facet, target), )+
                }
            }

            /// Normalize stored identifiers in place.
            pub fn normalize_in_place(&mut self) {
                match self {
                    $( Self::$variant(facet) => facet.normalize_in_place(), )+
                }
            }
        }

        $(
            impl From<$facet> for AuthoredFacet {
                fn from(facet: $facet) -> Self {
                    Self::$variant(facet.into())
                }
            }
        )+
    };
}

define_authored_facets! {
    // Identity
    HullId(AuthoringHullId) => AuthoringHullId,
    ModuleId(AuthoringModuleId) => AuthoringModuleId,
    ResourceId(AuthoringResourceId) => AuthoringResourceId,
    ProductId(AuthoringProductId) => AuthoringProductId,
    EffectId(AuthoringEffectId) => AuthoringEffectId,
    AggregateId(AuthoringAggregateId) => AuthoringAggregateId,
    Lineage(AuthoringLineage) => AuthoringLineage,
    Manufacturer(AuthoringManufacturer) => AuthoringManufacturer,
    Species(AuthoringSpecies) => AuthoringSpecies,
    Culture(AuthoringCulture) => AuthoringCulture,
    Race(AuthoringRace) => AuthoringRace,
    TechTier(AuthoringTechTier) => AuthoringTechTier,
    AggregateType(AuthoringAggregateType) => AuthoringAggregateType,
    AggregateProfile(AuthoringAggregateProfile) => AuthoringAggregateProfile,
    // Alignment
    Alignment(AuthoringAlignment) => AuthoringAlignment,
    EthicAxes(AuthoringEthicAxes) => AuthoringEthicAxes,
    Outlooks(AuthoringOutlooks) => AuthoringOutlooks,
    Doctrine(AuthoringDoctrine) => AuthoringDoctrine,
    SpyRole(AuthoringSpyRole) => AuthoringSpyRole,
    // Individual
    IndividualStats(AuthoringIndividualStats) => AuthoringIndividualStats,
    Physique(AuthoringPhysique) => AuthoringPhysique,
    AugmentationStats(AuthoringAugmentationStats) => AuthoringAugmentationStats,
    Expertise(AuthoringExpertise) => AuthoringExpertise,
    ServiceTraits(AuthoringServiceTraits) => AuthoringServiceTraits,
    Preordain(AuthoringPreordain) => AuthoringPreordain,
    Titles(AuthoringTitles) => AuthoringTitles,
    // Relations
    Loyalty(AuthoringLoyalty) => AuthoringLoyalty,
    Affiliations(AuthoringAffiliations) => AuthoringAffiliations,
    Ownership(AuthoringOwnership) => AuthoringOwnership,
    Patronage(AuthoringPatronage) => AuthoringPatronage,
    Mentorship(AuthoringMentorship) => AuthoringMentorship,
    Successors(AuthoringSuccessors) => AuthoringSuccessors,
    Contract(AuthoringContract) => AuthoringContract,
    Reputation(AuthoringReputation) => AuthoringReputation,
    // Modules
    ModuleQuality(AuthoringModuleQuality) => AuthoringModuleQuality,
    ModuleRarity(AuthoringModuleRarity) => AuthoringModuleRarity,
    ModuleFunction(AuthoringModuleFunction) => AuthoringModuleFunction,
    Facility(AuthoringFacility) => AuthoringFacility,
    HullVariant(AuthoringHullVariant) => AuthoringHullVariant,
    // Vessels
    VesselQuality(AuthoringVesselQuality) => AuthoringVesselQuality,
    Stance(AuthoringStance) => AuthoringStance,
    CaptainReadiness(AuthoringCaptainReadiness) => AuthoringCaptainReadiness,
    CapitalShip(AuthoringCapitalShip) => AuthoringCapitalShip,
    Carrier(AuthoringCarrier) => AuthoringCarrier,
    ShipPower(Box<AuthoringShipPower>) => AuthoringShipPower,
    LogisticsBoard(AuthoringLogisticsBoard) => AuthoringLogisticsBoard,
    // Strike craft
    StrikeCraftDogfight(AuthoringStrikeCraftDogfight) => AuthoringStrikeCraftDogfight,
    StrikeCraftPilot(AuthoringStrikeCraftPilot) => AuthoringStrikeCraftPilot,
    StrikeCraftWing(AuthoringStrikeCraftWing) => AuthoringStrikeCraftWing,
}

/// A named scene object and the facets authored on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthoringObject {
    /// Scene object name. The host creates or fetches the target by this
    /// name.
    pub name: String,
    /// Facets in authoring order.
    #[serde(default)]
    pub facets: Vec<AuthoredFacet>,
}

impl AuthoringObject {
    /// Create an object with no facets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facets: Vec::new(),
        }
    }

    /// Add a facet, builder style.
    #[must_use]
    pub fn with(mut self, facet: impl Into<AuthoredFacet>) -> Self {
        self.facets.push(facet.into());
        self
    }

    /// Normalize stored identifiers on every facet.
    pub fn normalize_in_place(&mut self) {
        for facet in &mut self.facets {
            facet.normalize_in_place();
        }
    }
}

/// Bake every facet of `object` and concatenate the outputs in authoring
/// order. A facet that warns never stops its siblings from baking.
///
/// Bundle defaults are resolved last, so a record authored by any facet
/// overrides a bundle default of the same kind wherever the two facets sit.
pub fn bake_object(object: &AuthoringObject) -> BakeOutput {
    let mut output = BakeOutput::default();
    for facet in &object.facets {
        output.extend(facet.bake(&object.name));
    }
    output.resolve_defaults();
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::identity::AuthoringModuleId;
    use shipwright_types::{ReadinessPreset, RecordKind, RuntimeRecord};

    fn frigate() -> AuthoringObject {
        AuthoringObject::new("Frigate_01")
            .with(AuthoringHullId {
                hull_id: "  lcv-sparrow ".to_owned(),
            })
            .with(AuthoringModuleId {
                module_id: String::new(),
                required_tech_tier: 3,
            })
            .with(AuthoringTechTier { tier: 4 })
    }

    #[test]
    fn object_bakes_facets_in_order() {
        let output = bake_object(&frigate());
        assert_eq!(output.kinds(), vec![RecordKind::HullId, RecordKind::TechTier]);
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn missing_id_does_not_stop_siblings() {
        let output = bake_object(&frigate());
        assert!(output.record(RecordKind::TechTier).is_some());
        assert!(output.record(RecordKind::ModuleTypeId).is_none());
    }

    #[test]
    fn authored_readiness_beats_bundle_default_in_either_order() {
        let strict = AuthoringCaptainReadiness::preset(ReadinessPreset::Strict);
        let expected = RuntimeRecord::CaptainReadiness(strict.record());
        let readiness_first = AuthoringObject::new("Dreadnought")
            .with(strict.clone())
            .with(AuthoringCapitalShip::default());
        let capital_first = AuthoringObject::new("Dreadnought")
            .with(AuthoringCapitalShip::default())
            .with(strict);

        for object in [readiness_first, capital_first] {
            let output = bake_object(&object);
            assert_eq!(output.record(RecordKind::CaptainReadiness), Some(&expected));
            let readiness_records = output
                .kinds()
                .into_iter()
                .filter(|kind| *kind == RecordKind::CaptainReadiness)
                .count();
            assert_eq!(readiness_records, 1);
            assert!(output.defaults.is_empty());
        }
    }

    #[test]
    fn bundle_default_applies_when_nothing_overrides_it() {
        let object = AuthoringObject::new("Dreadnought").with(AuthoringCapitalShip::default());
        let output = bake_object(&object);
        assert_eq!(
            output.record(RecordKind::CaptainReadiness),
            Some(&RuntimeRecord::CaptainReadiness(
                AuthoringCaptainReadiness::preset(ReadinessPreset::Standard).record()
            ))
        );
    }

    #[test]
    fn facet_names_match_tags() {
        let facet = AuthoredFacet::from(AuthoringTechTier { tier: 1 });
        assert_eq!(facet.name(), "tech_tier");
        let json = serde_json::to_value(&facet).unwrap_or_default();
        assert_eq!(json["facet"], "tech_tier");
    }

    #[test]
    fn facets_deserialize_from_yaml() {
        let yaml = "name: Scout\nfacets:\n  - facet: hull_id\n    hull_id: scout-mk1\n  - facet: vessel_quality\n";
        let object: Result<AuthoringObject, _> = serde_yml::from_str(yaml);
        let object = object.unwrap_or_default();
        assert_eq!(object.name, "Scout");
        assert_eq!(object.facets.len(), 2);
        assert_eq!(object.facets.last().map(AuthoredFacet::name), Some("vessel_quality"));
    }

    #[test]
    fn normalize_then_bake_is_stable() {
        let mut object = frigate();
        let before = bake_object(&object);
        object.normalize_in_place();
        let after = bake_object(&object);
        assert_eq!(before, after);
        assert!(matches!(
            object.facets.first(),
            Some(AuthoredFacet::HullId(AuthoringHullId { hull_id })) if hull_id == "lcv-sparrow"
        ));
    }
}
