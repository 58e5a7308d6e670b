//! Vessel facets, including the capital ship and carrier role bundles.
//!
//! A role bundle emits several records plus a marker flag in one bake.
//! Sub-resources the simulation fills at runtime (order queue, hangar
//! roster) are emitted as empty lists.

use half::f16;
use serde::{Deserialize, Serialize};
use shipwright_types::records::{
    CaptainOrder, CaptainReadiness, CaptainState, HangarCapacity, HangarSlot, ManeuverProfile,
    ShipPowerBudget, VesselQuality, VesselStance,
};
use shipwright_types::{
    CaptainAutonomy, ManeuverMode, MarkerFlag, ReadinessPreset, VesselStanceMode,
};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_scalar, to_half};

const QUALITY: ScalarRange = ScalarRange::UNIT.with_default(0.5);

/// Overall build quality of a vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringVesselQuality {
    /// Quality in `[0, 1]`.
    pub quality: f32,
}

impl Default for AuthoringVesselQuality {
    fn default() -> Self {
        Self {
            quality: QUALITY.default,
        }
    }
}

impl Facet for AuthoringVesselQuality {
    const NAME: &'static str = "vessel_quality";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(VesselQuality(to_half(self.quality, QUALITY)));
    }
}

/// Starting combat stance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringStance {
    /// Stance the vessel starts in.
    pub stance: VesselStanceMode,
}

impl Facet for AuthoringStance {
    const NAME: &'static str = "stance";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(VesselStance {
            current: self.stance,
            desired: self.stance,
            change_tick: 0,
        });
    }
}

// ---------------------------------------------------------------------------
// Captain readiness
// ---------------------------------------------------------------------------

const MORALE: ScalarRange = ScalarRange::SIGNED_UNIT;

/// Readiness thresholds for one preset, before overrides.
struct ReadinessThresholds {
    min_hull: f32,
    min_morale: f32,
    min_fuel: f32,
    min_ammo: f32,
    max_threat: f32,
}

const fn preset_thresholds(preset: ReadinessPreset) -> ReadinessThresholds {
    match preset {
        ReadinessPreset::Strict => ReadinessThresholds {
            min_hull: 0.8,
            min_morale: 0.3,
            min_fuel: 0.7,
            min_ammo: 0.6,
            max_threat: 0.3,
        },
        ReadinessPreset::Standard => ReadinessThresholds {
            min_hull: 0.5,
            min_morale: 0.0,
            min_fuel: 0.4,
            min_ammo: 0.3,
            max_threat: 0.5,
        },
        ReadinessPreset::Relaxed => ReadinessThresholds {
            min_hull: 0.3,
            min_morale: -0.5,
            min_fuel: 0.2,
            min_ammo: 0.1,
            max_threat: 0.8,
        },
    }
}

/// When a captain considers the ship ready to take orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringCaptainReadiness {
    /// Base thresholds.
    pub preset: ReadinessPreset,
    /// Minimum hull fraction in `[0, 1]`.
    pub min_hull: Option<f32>,
    /// Minimum crew morale in `[-1, 1]`.
    pub min_morale: Option<f32>,
    /// Minimum fuel fraction in `[0, 1]`.
    pub min_fuel: Option<f32>,
    /// Minimum ammunition fraction in `[0, 1]`.
    pub min_ammo: Option<f32>,
    /// Highest tolerated threat in `[0, 1]`.
    pub max_threat: Option<f32>,
}

impl AuthoringCaptainReadiness {
    /// A preset with no overrides.
    pub const fn preset(preset: ReadinessPreset) -> Self {
        Self {
            preset,
            min_hull: None,
            min_morale: None,
            min_fuel: None,
            min_ammo: None,
            max_threat: None,
        }
    }

    /// The readiness record with overrides applied.
    pub fn record(&self) -> CaptainReadiness {
        let base = preset_thresholds(self.preset);
        let unit = |value: Option<f32>, fallback: f32| {
            to_half(value.unwrap_or(fallback), ScalarRange::UNIT.with_default(fallback))
        };
        CaptainReadiness {
            min_hull: unit(self.min_hull, base.min_hull),
            min_morale: to_half(
                self.min_morale.unwrap_or(base.min_morale),
                MORALE.with_default(base.min_morale),
            ),
            min_fuel: unit(self.min_fuel, base.min_fuel),
            min_ammo: unit(self.min_ammo, base.min_ammo),
            max_threat: unit(self.max_threat, base.max_threat),
            current_readiness: f16::ZERO,
        }
    }
}

impl Facet for AuthoringCaptainReadiness {
    const NAME: &'static str = "captain_readiness";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(self.record());
    }
}

// ---------------------------------------------------------------------------
// Capital ship
// ---------------------------------------------------------------------------

const POWER_BUDGET: ScalarRange = ScalarRange::new(0.0, 1_000_000.0, 3000.0);
const RESERVE_FRACTION: ScalarRange = ScalarRange::UNIT.with_default(0.1);
const RISK_TOLERANCE: ScalarRange = ScalarRange::UNIT.with_default(0.5);
const INITIAL_CONFIDENCE: f32 = 0.5;

/// Capital ship role bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringCapitalShip {
    /// Power budget in MW, `[0, 1e6]`.
    pub power_budget_mw: f32,
    /// Fraction of the budget held in reserve, `[0, 1]`.
    pub reserve_fraction: f32,
    /// Maneuver mode the ship starts in.
    pub default_mode: ManeuverMode,
    /// Stance the ship falls back to.
    pub default_stance: VesselStanceMode,
    /// How much latitude the captain has.
    pub autonomy: CaptainAutonomy,
    /// Captain risk tolerance in `[0, 1]`.
    pub risk_tolerance: f32,
}

impl Default for AuthoringCapitalShip {
    fn default() -> Self {
        Self {
            power_budget_mw: POWER_BUDGET.default,
            reserve_fraction: RESERVE_FRACTION.default,
            default_mode: ManeuverMode::default(),
            default_stance: VesselStanceMode::default(),
            autonomy: CaptainAutonomy::default(),
            risk_tolerance: RISK_TOLERANCE.default,
        }
    }
}

impl Facet for AuthoringCapitalShip {
    const NAME: &'static str = "capital_ship";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.flag(MarkerFlag::CapitalShip);
        ctx.emit(ShipPowerBudget {
            budget_mw: clamp_scalar(self.power_budget_mw, POWER_BUDGET),
            reserve_fraction: clamp_scalar(self.reserve_fraction, RESERVE_FRACTION),
        });
        ctx.emit(ManeuverProfile {
            default_mode: self.default_mode,
            default_stance: self.default_stance,
        });
        ctx.emit(CaptainState {
            autonomy: self.autonomy,
            confidence: f16::from_f32(INITIAL_CONFIDENCE),
            risk_tolerance: to_half(self.risk_tolerance, RISK_TOLERANCE),
            ready: false,
            orders_completed: 0,
            orders_failed: 0,
        });
        ctx.emit_default(AuthoringCaptainReadiness::preset(ReadinessPreset::Standard).record());
        ctx.emit(Vec::<CaptainOrder>::new());
    }
}

// ---------------------------------------------------------------------------
// Carrier
// ---------------------------------------------------------------------------

const HANGAR_CAPACITY: ScalarRange = ScalarRange::new(0.0, 10_000.0, 12.0);

/// Carrier role bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringCarrier {
    /// Strike craft the hangar holds, `[0, 1e4]`.
    pub hangar_capacity: f32,
}

impl Default for AuthoringCarrier {
    fn default() -> Self {
        Self {
            hangar_capacity: HANGAR_CAPACITY.default,
        }
    }
}

impl Facet for AuthoringCarrier {
    const NAME: &'static str = "carrier";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.flag(MarkerFlag::Carrier);
        ctx.emit(HangarCapacity(clamp_scalar(
            self.hangar_capacity,
            HANGAR_CAPACITY,
        )));
        ctx.emit(Vec::<HangarSlot>::new());
    }
}
