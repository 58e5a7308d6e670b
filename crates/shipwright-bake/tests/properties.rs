//! Property tests for the shared normalization rules and facet bakes.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use shipwright_bake::facets::alignment::{
    AuthoringEthicAxes, AuthoringOutlooks, AxisValueEntry, OutlookWeightEntry,
};
use shipwright_bake::facets::identity::{AuthoringHullId, AuthoringModuleId};
use shipwright_bake::facets::individual::AuthoringPreordain;
use shipwright_bake::facets::module::{AuthoringFacility, AuthoringModuleFunction};
use shipwright_bake::facets::vessel::AuthoringVesselQuality;
use shipwright_bake::normalize::{clamp_scalar, passes_sparse, to_half};
use shipwright_bake::{AuthoringObject, ScalarRange, bake_facet, bake_object};
use shipwright_types::{
    EthicAxis, FacilityArchetype, FacilityTier, ModuleFunction, OutlookId, PreordainTrack,
    RecordKind, RuntimeRecord,
};

fn any_scalar() -> impl Strategy<Value = f32> {
    prop_oneof![
        4 => any::<f32>(),
        4 => -2.0_f32..2.0,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
    ]
}

fn any_outlook() -> impl Strategy<Value = OutlookId> {
    prop_oneof![
        Just(OutlookId::Neutral),
        Just(OutlookId::Loyalist),
        Just(OutlookId::Opportunist),
        Just(OutlookId::Fanatic),
        Just(OutlookId::Mutinous),
    ]
}

const RANGES: [ScalarRange; 3] = [
    ScalarRange::UNIT,
    ScalarRange::SIGNED_UNIT,
    ScalarRange::PERCENT_SCORE,
];

fn kept_outlooks(output: &shipwright_bake::BakeOutput) -> Vec<OutlookId> {
    match output.record(RecordKind::OutlookEntries) {
        Some(RuntimeRecord::OutlookEntries(entries)) => {
            entries.iter().map(|e| e.outlook).collect()
        }
        _ => Vec::new(),
    }
}

proptest! {
    #[test]
    fn clamp_stays_in_range(value in any_scalar()) {
        for range in RANGES {
            let clamped = clamp_scalar(value, range);
            prop_assert!(clamped >= range.min && clamped <= range.max);
            if value.is_nan() {
                prop_assert!((clamped - range.default).abs() < f32::EPSILON);
            }
        }
    }

    #[test]
    fn half_stays_in_range(value in any_scalar()) {
        for range in RANGES {
            let stored = to_half(value, range).to_f32();
            prop_assert!(stored >= range.min && stored <= range.max);
        }
    }

    #[test]
    fn sparse_filter_keeps_exactly_the_large_weights(
        entries in prop::collection::vec((any_outlook(), any_scalar()), 0..16),
    ) {
        let facet = AuthoringOutlooks {
            outlooks: entries
                .iter()
                .map(|&(outlook, weight)| OutlookWeightEntry { outlook, weight })
                .collect(),
        };
        let expected: Vec<OutlookId> = entries
            .iter()
            .filter(|(_, weight)| passes_sparse(clamp_scalar(*weight, ScalarRange::SIGNED_UNIT)))
            .map(|(outlook, _)| *outlook)
            .collect();

        let output = bake_facet(&facet, "Crew");
        prop_assert_eq!(kept_outlooks(&output), expected);
        prop_assert!(output.warnings.is_empty());
    }

    #[test]
    fn bake_is_idempotent(
        hull in "[ a-z0-9.-]{0,80}",
        quality in any_scalar(),
        weights in prop::collection::vec(any_scalar(), 0..6),
    ) {
        let mut object = AuthoringObject::new("Vessel")
            .with(AuthoringHullId { hull_id: hull })
            .with(AuthoringVesselQuality { quality })
            .with(AuthoringOutlooks {
                outlooks: weights
                    .into_iter()
                    .map(|weight| OutlookWeightEntry { outlook: OutlookId::Loyalist, weight })
                    .collect(),
            });

        let first = serde_json::to_vec(&bake_object(&object)).unwrap();
        let second = serde_json::to_vec(&bake_object(&object)).unwrap();
        prop_assert_eq!(&first, &second);

        object.normalize_in_place();
        let normalized = serde_json::to_vec(&bake_object(&object)).unwrap();
        prop_assert_eq!(&first, &normalized);
    }

    #[test]
    fn tech_tier_gates_on_positive_values(tier in any::<i64>()) {
        let facet = AuthoringModuleId {
            module_id: "mod.railgun".to_owned(),
            required_tech_tier: tier,
        };
        let output = bake_facet(&facet, "Module");
        prop_assert_eq!(
            output.record(RecordKind::RequiredTechTier).is_some(),
            tier > 0
        );
        prop_assert!(output.record(RecordKind::ModuleTypeId).is_some());
    }
}

#[test]
fn sparse_order_follows_authoring_order() {
    let facet = AuthoringEthicAxes {
        axes: vec![
            AxisValueEntry {
                axis: EthicAxis::War,
                value: 0.9,
            },
            AxisValueEntry {
                axis: EthicAxis::Materialist,
                value: 0.005,
            },
            AxisValueEntry {
                axis: EthicAxis::Authoritarian,
                value: -0.5,
            },
        ],
    };
    let output = bake_facet(&facet, "Crew");
    let axes: Vec<EthicAxis> = match output.records.first() {
        Some(RuntimeRecord::EthicAxisValues(values)) => values.iter().map(|v| v.axis).collect(),
        _ => Vec::new(),
    };
    assert_eq!(axes, vec![EthicAxis::War, EthicAxis::Authoritarian]);
}

#[test]
fn none_sentinels_suppress_records() {
    let facility = AuthoringFacility {
        archetype: FacilityArchetype::None,
        tier: FacilityTier::Massive,
    };
    let function = AuthoringModuleFunction {
        function: ModuleFunction::None,
        capacity: 100.0,
        description: "unused".to_owned(),
    };
    let preordain = AuthoringPreordain {
        track: PreordainTrack::None,
    };
    assert!(bake_facet(&facility, "Station").is_empty());
    assert!(bake_facet(&function, "Module").is_empty());
    assert!(bake_facet(&preordain, "Cadet").is_empty());
}
