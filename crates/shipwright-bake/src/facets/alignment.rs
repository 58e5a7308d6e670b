//! Alignment, conviction, doctrine, and covert-role facets.

use half::f16;
use serde::{Deserialize, Serialize};
use shipwright_types::records::{
    AlignmentTriplet, AlignmentWindow, DoctrineAxisExpectation, DoctrineOutlookExpectation,
    DoctrineProfile, EthicAxisValue, OutlookEntry, SuspicionScore,
};
use shipwright_types::{EthicAxis, MarkerFlag, OutlookId};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_scalar, ordered_bounds, passes_sparse, to_half};

const AXIS: ScalarRange = ScalarRange::SIGNED_UNIT;

// ---------------------------------------------------------------------------
// Alignment triplet
// ---------------------------------------------------------------------------

/// Law, good, and integrity sliders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringAlignment {
    /// Lawful versus chaotic.
    pub law: f32,
    /// Good versus evil.
    pub good: f32,
    /// Integrity versus corruption.
    pub integrity: f32,
}

impl Facet for AuthoringAlignment {
    const NAME: &'static str = "alignment";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(AlignmentTriplet {
            law: to_half(self.law, AXIS),
            good: to_half(self.good, AXIS),
            integrity: to_half(self.integrity, AXIS),
        });
    }
}

// ---------------------------------------------------------------------------
// Sparse convictions
// ---------------------------------------------------------------------------

/// One authored ethic axis conviction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisValueEntry {
    /// The axis.
    pub axis: EthicAxis,
    /// Conviction in `[-1, 1]`.
    pub value: f32,
}

/// Per-axis ethic convictions. Near-zero entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringEthicAxes {
    /// Convictions in authoring order.
    pub axes: Vec<AxisValueEntry>,
}

impl Facet for AuthoringEthicAxes {
    const NAME: &'static str = "ethic_axes";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let values: Vec<EthicAxisValue> = self
            .axes
            .iter()
            .filter_map(|entry| {
                let value = clamp_scalar(entry.value, AXIS);
                passes_sparse(value).then(|| EthicAxisValue {
                    axis: entry.axis,
                    value: to_half(value, AXIS),
                })
            })
            .collect();
        ctx.emit(values);
    }
}

/// One authored outlook weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlookWeightEntry {
    /// The outlook.
    pub outlook: OutlookId,
    /// Weight in `[-1, 1]`.
    pub weight: f32,
}

/// Outlook (stance) weights. Near-zero entries are dropped; downstream
/// systems pick the top entries, the bake keeps them all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringOutlooks {
    /// Weights in authoring order.
    pub outlooks: Vec<OutlookWeightEntry>,
}

impl Facet for AuthoringOutlooks {
    const NAME: &'static str = "outlooks";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let entries: Vec<OutlookEntry> = self
            .outlooks
            .iter()
            .filter_map(|entry| {
                let weight = clamp_scalar(entry.weight, AXIS);
                passes_sparse(weight).then(|| OutlookEntry {
                    outlook: entry.outlook,
                    weight: to_half(weight, AXIS),
                })
            })
            .collect();
        ctx.emit(entries);
    }
}

// ---------------------------------------------------------------------------
// Doctrine
// ---------------------------------------------------------------------------

/// Authored alignment bounds. A lower bound above its upper bound is pulled
/// down to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringAlignmentWindow {
    /// Lower law bound.
    pub law_min: f32,
    /// Upper law bound.
    pub law_max: f32,
    /// Lower good bound.
    pub good_min: f32,
    /// Upper good bound.
    pub good_max: f32,
    /// Lower integrity bound.
    pub integrity_min: f32,
    /// Upper integrity bound.
    pub integrity_max: f32,
}

impl Default for AuthoringAlignmentWindow {
    fn default() -> Self {
        Self {
            law_min: -1.0,
            law_max: 1.0,
            good_min: -1.0,
            good_max: 1.0,
            integrity_min: -1.0,
            integrity_max: 1.0,
        }
    }
}

/// Normalize one bound pair: clamp both ends, then order them.
fn window_pair(min: f32, max: f32) -> (f16, f16) {
    let lower = AXIS.with_default(-1.0);
    let upper = AXIS.with_default(1.0);
    let (min, max) = ordered_bounds(lower.clamp(min), upper.clamp(max));
    (to_half(min, AXIS), to_half(max, AXIS))
}

impl AuthoringAlignmentWindow {
    fn bake(&self) -> AlignmentWindow {
        let (law_min, law_max) = window_pair(self.law_min, self.law_max);
        let (good_min, good_max) = window_pair(self.good_min, self.good_max);
        let (integrity_min, integrity_max) = window_pair(self.integrity_min, self.integrity_max);
        AlignmentWindow {
            law_min,
            law_max,
            good_min,
            good_max,
            integrity_min,
            integrity_max,
        }
    }
}

/// Authored axis range expectation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisExpectationEntry {
    /// The axis.
    pub axis: EthicAxis,
    /// Lower bound in `[-1, 1]`.
    pub min: f32,
    /// Upper bound in `[-1, 1]`.
    pub max: f32,
}

impl Default for AxisExpectationEntry {
    fn default() -> Self {
        Self {
            axis: EthicAxis::default(),
            min: -1.0,
            max: 1.0,
        }
    }
}

/// Authored outlook requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlookExpectationEntry {
    /// The outlook.
    pub outlook: OutlookId,
    /// Required weight in `[-1, 1]`.
    pub minimum_weight: f32,
}

/// Organizational doctrine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringDoctrine {
    /// Expected alignment bounds.
    pub alignment_window: AuthoringAlignmentWindow,
    /// Allowed axis deviation in `[0, 1]`.
    pub axis_tolerance: f32,
    /// Allowed outlook deviation in `[0, 1]`.
    pub outlook_tolerance: f32,
    /// Chaos at which mutiny becomes possible, in `[0, 1]`.
    pub chaos_mutiny_threshold: f32,
    /// Lawfulness floor for contracts, in `[0, 1]`.
    pub lawful_contract_floor: f32,
    /// Suspicion gained per breach, in `[0, 1]`.
    pub suspicion_gain: f32,
    /// Expected axis ranges in authoring order.
    pub axis_expectations: Vec<AxisExpectationEntry>,
    /// Required outlooks in authoring order.
    pub outlook_expectations: Vec<OutlookExpectationEntry>,
}

const AXIS_TOLERANCE: ScalarRange = ScalarRange::UNIT.with_default(0.25);
const OUTLOOK_TOLERANCE: ScalarRange = ScalarRange::UNIT.with_default(0.25);
const CHAOS_MUTINY: ScalarRange = ScalarRange::UNIT.with_default(0.6);
const LAWFUL_FLOOR: ScalarRange = ScalarRange::UNIT.with_default(0.3);
const SUSPICION_GAIN: ScalarRange = ScalarRange::UNIT.with_default(0.1);

impl Default for AuthoringDoctrine {
    fn default() -> Self {
        Self {
            alignment_window: AuthoringAlignmentWindow::default(),
            axis_tolerance: AXIS_TOLERANCE.default,
            outlook_tolerance: OUTLOOK_TOLERANCE.default,
            chaos_mutiny_threshold: CHAOS_MUTINY.default,
            lawful_contract_floor: LAWFUL_FLOOR.default,
            suspicion_gain: SUSPICION_GAIN.default,
            axis_expectations: Vec::new(),
            outlook_expectations: Vec::new(),
        }
    }
}

impl Facet for AuthoringDoctrine {
    const NAME: &'static str = "doctrine";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(DoctrineProfile {
            window: self.alignment_window.bake(),
            axis_tolerance: to_half(self.axis_tolerance, AXIS_TOLERANCE),
            outlook_tolerance: to_half(self.outlook_tolerance, OUTLOOK_TOLERANCE),
            chaos_mutiny_threshold: to_half(self.chaos_mutiny_threshold, CHAOS_MUTINY),
            lawful_contract_floor: to_half(self.lawful_contract_floor, LAWFUL_FLOOR),
            suspicion_gain: to_half(self.suspicion_gain, SUSPICION_GAIN),
        });

        let axes: Vec<DoctrineAxisExpectation> = self
            .axis_expectations
            .iter()
            .map(|entry| {
                let (min, max) = window_pair(entry.min, entry.max);
                DoctrineAxisExpectation {
                    axis: entry.axis,
                    min,
                    max,
                }
            })
            .collect();
        ctx.emit(axes);

        let outlooks: Vec<DoctrineOutlookExpectation> = self
            .outlook_expectations
            .iter()
            .filter_map(|entry| {
                let weight = clamp_scalar(entry.minimum_weight, AXIS);
                passes_sparse(weight).then(|| DoctrineOutlookExpectation {
                    outlook: entry.outlook,
                    minimum_weight: to_half(weight, AXIS),
                })
            })
            .collect();
        ctx.emit(outlooks);
    }
}

// ---------------------------------------------------------------------------
// Covert role
// ---------------------------------------------------------------------------

/// Marks an individual as a covert operative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringSpyRole {
    /// Whether the individual is a spy. When false nothing is emitted.
    pub is_spy: bool,
    /// Starting suspicion in `[0, 1]`.
    pub initial_suspicion: f32,
}

impl Facet for AuthoringSpyRole {
    const NAME: &'static str = "spy_role";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        if !self.is_spy {
            return;
        }
        ctx.flag(MarkerFlag::SpyRole);
        ctx.emit(SuspicionScore(to_half(self.initial_suspicion, ScalarRange::UNIT)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::bake_facet;
    use shipwright_types::RuntimeRecord;

    #[test]
    fn alignment_clamps_each_axis() {
        let output = bake_facet(
            &AuthoringAlignment {
                law: 3.0,
                good: f32::NAN,
                integrity: -0.5,
            },
            "Crew",
        );
        assert_eq!(
            output.records,
            vec![RuntimeRecord::AlignmentTriplet(AlignmentTriplet {
                law: f16::from_f32(1.0),
                good: f16::from_f32(0.0),
                integrity: f16::from_f32(-0.5),
            })]
        );
    }

    #[test]
    fn outlooks_keep_order_and_drop_small() {
        let facet = AuthoringOutlooks {
            outlooks: vec![
                OutlookWeightEntry {
                    outlook: OutlookId::Loyalist,
                    weight: 0.9,
                },
                OutlookWeightEntry {
                    outlook: OutlookId::Opportunist,
                    weight: 0.02,
                },
                OutlookWeightEntry {
                    outlook: OutlookId::Mutinous,
                    weight: -0.5,
                },
                OutlookWeightEntry {
                    outlook: OutlookId::Fanatic,
                    weight: 0.005,
                },
            ],
        };
        let output = bake_facet(&facet, "Crew");
        let Some(RuntimeRecord::OutlookEntries(entries)) = output.records.first() else {
            assert!(output.records.is_empty(), "unexpected {:?}", output.records);
            return;
        };
        let outlooks: Vec<OutlookId> = entries.iter().map(|e| e.outlook).collect();
        assert_eq!(
            outlooks,
            vec![OutlookId::Loyalist, OutlookId::Opportunist, OutlookId::Mutinous]
        );
        assert_eq!(entries.last().map(|e| e.weight), Some(f16::from_f32(-0.5)));
    }

    #[test]
    fn ethic_axes_emit_empty_list_when_all_zero() {
        let facet = AuthoringEthicAxes {
            axes: vec![AxisValueEntry {
                axis: EthicAxis::War,
                value: 0.0,
            }],
        };
        let output = bake_facet(&facet, "Crew");
        assert_eq!(output.records, vec![RuntimeRecord::EthicAxisValues(Vec::new())]);
    }

    #[test]
    fn ethic_axis_weight_is_clamped() {
        let facet = AuthoringEthicAxes {
            axes: vec![AxisValueEntry {
                axis: EthicAxis::Xenophobia,
                value: -4.0,
            }],
        };
        let output = bake_facet(&facet, "Crew");
        assert_eq!(
            output.records,
            vec![RuntimeRecord::EthicAxisValues(vec![EthicAxisValue {
                axis: EthicAxis::Xenophobia,
                value: f16::from_f32(-1.0),
            }])]
        );
    }

    #[test]
    fn doctrine_orders_window_bounds() {
        let facet = AuthoringDoctrine {
            alignment_window: AuthoringAlignmentWindow {
                law_min: 0.75,
                law_max: 0.25,
                ..AuthoringAlignmentWindow::default()
            },
            axis_expectations: vec![AxisExpectationEntry {
                axis: EthicAxis::War,
                min: 0.5,
                max: -0.5,
            }],
            outlook_expectations: vec![
                OutlookExpectationEntry {
                    outlook: OutlookId::Loyalist,
                    minimum_weight: 0.0,
                },
                OutlookExpectationEntry {
                    outlook: OutlookId::Fanatic,
                    minimum_weight: 0.5,
                },
            ],
            ..AuthoringDoctrine::default()
        };
        let output = bake_facet(&facet, "Order");
        let window = AlignmentWindow {
            law_min: f16::from_f32(0.25),
            law_max: f16::from_f32(0.25),
            good_min: f16::from_f32(-1.0),
            good_max: f16::from_f32(1.0),
            integrity_min: f16::from_f32(-1.0),
            integrity_max: f16::from_f32(1.0),
        };
        assert_eq!(
            output.records,
            vec![
                RuntimeRecord::DoctrineProfile(DoctrineProfile {
                    window,
                    axis_tolerance: f16::from_f32(0.25),
                    outlook_tolerance: f16::from_f32(0.25),
                    chaos_mutiny_threshold: f16::from_f32(0.6),
                    lawful_contract_floor: f16::from_f32(0.3),
                    suspicion_gain: f16::from_f32(0.1),
                }),
                RuntimeRecord::DoctrineAxisExpectations(vec![DoctrineAxisExpectation {
                    axis: EthicAxis::War,
                    min: f16::from_f32(-0.5),
                    max: f16::from_f32(-0.5),
                }]),
                RuntimeRecord::DoctrineOutlookExpectations(vec![DoctrineOutlookExpectation {
                    outlook: OutlookId::Fanatic,
                    minimum_weight: f16::from_f32(0.5),
                }]),
            ]
        );
    }

    #[test]
    fn spy_role_only_when_spy() {
        let civilian = bake_facet(&AuthoringSpyRole::default(), "Clerk");
        assert!(civilian.is_empty());

        let spy = bake_facet(
            &AuthoringSpyRole {
                is_spy: true,
                initial_suspicion: 2.0,
            },
            "Clerk",
        );
        assert_eq!(spy.flags, vec![MarkerFlag::SpyRole]);
        assert_eq!(
            spy.records,
            vec![RuntimeRecord::SuspicionScore(SuspicionScore(f16::from_f32(1.0)))]
        );
    }
}
