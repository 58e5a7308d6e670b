//! Strike craft tuning: dogfight, pilot profile, and wing decisions.

use serde::{Deserialize, Serialize};
use shipwright_types::records::{
    StrikeCraftDogfightConfig, StrikeCraftPilotProfileConfig, StrikeCraftWingDecisionConfig,
};
use shipwright_types::{MarkerFlag, OutlookId};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_scalar, clamp_u8, clamp_u32, ordered_bounds};

// ---------------------------------------------------------------------------
// Dogfight
// ---------------------------------------------------------------------------

const FIRE_CONE: ScalarRange = ScalarRange::new(1.0, 180.0, 30.0);
const BREAK_OFF_MAX: u32 = 6000;
const RANGE: ScalarRange = ScalarRange::new(0.0, 100_000.0, 900.0);

/// Dogfight engagement envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringStrikeCraftDogfight {
    /// Whether craft dogfight at all.
    pub enabled: bool,
    /// Half-angle of the firing cone in degrees.
    pub fire_cone_degrees: f32,
    /// Ticks before a pursuit is broken off.
    pub break_off_ticks: i64,
    /// Range at which craft engage.
    pub engage_range: f32,
    /// Range at which craft disengage. Never below `engage_range`.
    pub disengage_range: f32,
}

impl Default for AuthoringStrikeCraftDogfight {
    fn default() -> Self {
        Self {
            enabled: true,
            fire_cone_degrees: FIRE_CONE.default,
            break_off_ticks: 45,
            engage_range: RANGE.default,
            disengage_range: 1400.0,
        }
    }
}

impl AuthoringStrikeCraftDogfight {
    /// Clamped dogfight configuration.
    pub fn config(&self) -> StrikeCraftDogfightConfig {
        let engage_range = clamp_scalar(self.engage_range, RANGE);
        let disengage = ScalarRange::new(engage_range, RANGE.max, engage_range);
        StrikeCraftDogfightConfig {
            enabled: self.enabled,
            fire_cone_degrees: clamp_scalar(self.fire_cone_degrees, FIRE_CONE),
            break_off_ticks: clamp_u32(self.break_off_ticks, 0, BREAK_OFF_MAX),
            engage_range,
            disengage_range: disengage.clamp(self.disengage_range),
        }
    }
}

impl Facet for AuthoringStrikeCraftDogfight {
    const NAME: &'static str = "strike_craft_dogfight";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(self.config());
        ctx.flag(MarkerFlag::StrikeCraft);
    }
}

// ---------------------------------------------------------------------------
// Pilot profile
// ---------------------------------------------------------------------------

const LOYALIST_LAW: ScalarRange = ScalarRange::SIGNED_UNIT.with_default(0.55);
const MUTINOUS_LAW: ScalarRange = ScalarRange::SIGNED_UNIT.with_default(-0.55);

/// How pilot alignment maps onto outlooks toward friends and foes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringStrikeCraftPilot {
    /// Outlook toward friendly craft.
    pub friendly_outlook: OutlookId,
    /// Outlook toward hostile craft.
    pub hostile_outlook: OutlookId,
    /// Outlook toward neutral craft.
    pub neutral_outlook: OutlookId,
    /// Law at or above which a pilot counts as loyalist.
    pub loyalist_law_threshold: f32,
    /// Law at or below which a pilot counts as mutinous.
    pub mutinous_law_threshold: f32,
}

impl Default for AuthoringStrikeCraftPilot {
    fn default() -> Self {
        Self {
            friendly_outlook: OutlookId::Loyalist,
            hostile_outlook: OutlookId::Mutinous,
            neutral_outlook: OutlookId::Neutral,
            loyalist_law_threshold: LOYALIST_LAW.default,
            mutinous_law_threshold: MUTINOUS_LAW.default,
        }
    }
}

impl AuthoringStrikeCraftPilot {
    /// Clamped pilot profile.
    pub fn config(&self) -> StrikeCraftPilotProfileConfig {
        let (mutinous, loyalist) = ordered_bounds(
            clamp_scalar(self.mutinous_law_threshold, MUTINOUS_LAW),
            clamp_scalar(self.loyalist_law_threshold, LOYALIST_LAW),
        );
        StrikeCraftPilotProfileConfig {
            friendly_outlook: self.friendly_outlook,
            hostile_outlook: self.hostile_outlook,
            neutral_outlook: self.neutral_outlook,
            loyalist_law_threshold: loyalist,
            mutinous_law_threshold: mutinous,
        }
    }
}

impl Facet for AuthoringStrikeCraftPilot {
    const NAME: &'static str = "strike_craft_pilot";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(self.config());
    }
}

// ---------------------------------------------------------------------------
// Wing decisions
// ---------------------------------------------------------------------------

const COOLDOWN_MAX: u32 = 1_000_000;
const WING_SIZE_MIN: u8 = 1;
const WING_SIZE_MAX: u8 = 32;
const CHAOS_BREAK: ScalarRange = ScalarRange::UNIT.with_default(0.55);
const CHAOS_BREAK_AGGRESSIVE: ScalarRange = ScalarRange::UNIT.with_default(0.45);
const LAWFULNESS_FORM: ScalarRange = ScalarRange::UNIT.with_default(0.55);

/// When wings form, hold, and break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringStrikeCraftWing {
    /// Ticks between wing decisions.
    pub decision_cooldown_ticks: i64,
    /// Largest wing.
    pub max_wing_size: i64,
    /// Chaos above which a wing breaks.
    pub chaos_break_threshold: f32,
    /// Chaos above which an aggressive wing breaks.
    pub chaos_break_aggressive_threshold: f32,
    /// Lawfulness above which craft form up.
    pub lawfulness_form_threshold: f32,
}

impl Default for AuthoringStrikeCraftWing {
    fn default() -> Self {
        Self {
            decision_cooldown_ticks: 60,
            max_wing_size: 6,
            chaos_break_threshold: CHAOS_BREAK.default,
            chaos_break_aggressive_threshold: CHAOS_BREAK_AGGRESSIVE.default,
            lawfulness_form_threshold: LAWFULNESS_FORM.default,
        }
    }
}

impl Facet for AuthoringStrikeCraftWing {
    const NAME: &'static str = "strike_craft_wing";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(StrikeCraftWingDecisionConfig {
            decision_cooldown_ticks: clamp_u32(self.decision_cooldown_ticks, 0, COOLDOWN_MAX),
            max_wing_size: clamp_u8(self.max_wing_size, WING_SIZE_MIN, WING_SIZE_MAX),
            chaos_break_threshold: clamp_scalar(self.chaos_break_threshold, CHAOS_BREAK),
            chaos_break_aggressive_threshold: clamp_scalar(
                self.chaos_break_aggressive_threshold,
                CHAOS_BREAK_AGGRESSIVE,
            ),
            lawfulness_form_threshold: clamp_scalar(
                self.lawfulness_form_threshold,
                LAWFULNESS_FORM,
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::bake_facet;
    use shipwright_types::{RecordKind, RuntimeRecord};

    #[test]
    fn dogfight_flags_strike_craft() {
        let output = bake_facet(&AuthoringStrikeCraftDogfight::default(), "Interceptor");
        assert_eq!(output.flags, vec![MarkerFlag::StrikeCraft]);
        assert_eq!(output.kinds(), vec![RecordKind::StrikeCraftDogfightConfig]);
    }

    #[test]
    fn disengage_never_below_engage() {
        let facet = AuthoringStrikeCraftDogfight {
            engage_range: 2000.0,
            disengage_range: 500.0,
            fire_cone_degrees: 0.0,
            break_off_ticks: 99_999,
            ..AuthoringStrikeCraftDogfight::default()
        };
        let config = facet.config();
        assert!((config.disengage_range - 2000.0).abs() < f32::EPSILON);
        assert!((config.fire_cone_degrees - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.break_off_ticks, 6000);
    }

    #[test]
    fn pilot_defaults() {
        let config = AuthoringStrikeCraftPilot::default().config();
        assert_eq!(config.friendly_outlook, OutlookId::Loyalist);
        assert_eq!(config.hostile_outlook, OutlookId::Mutinous);
        assert!((config.loyalist_law_threshold - 0.55).abs() < f32::EPSILON);
        assert!((config.mutinous_law_threshold + 0.55).abs() < f32::EPSILON);
    }

    #[test]
    fn mutinous_threshold_pulled_below_loyalist() {
        let facet = AuthoringStrikeCraftPilot {
            loyalist_law_threshold: 0.2,
            mutinous_law_threshold: 0.9,
            ..AuthoringStrikeCraftPilot::default()
        };
        let config = facet.config();
        assert!((config.mutinous_law_threshold - 0.2).abs() < f32::EPSILON);
        assert!((config.loyalist_law_threshold - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn wing_size_saturates() {
        let facet = AuthoringStrikeCraftWing {
            max_wing_size: 0,
            decision_cooldown_ticks: -1,
            chaos_break_threshold: f32::NAN,
            ..AuthoringStrikeCraftWing::default()
        };
        let output = bake_facet(&facet, "Wing");
        assert_eq!(
            output.records,
            vec![RuntimeRecord::StrikeCraftWingDecisionConfig(
                StrikeCraftWingDecisionConfig {
                    decision_cooldown_ticks: 0,
                    max_wing_size: 1,
                    chaos_break_threshold: 0.55,
                    chaos_break_aggressive_threshold: 0.45,
                    lawfulness_form_threshold: 0.55,
                }
            )]
        );
    }
}
