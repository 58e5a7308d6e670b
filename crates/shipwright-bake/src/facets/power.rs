//! Ship power facet: reactor, grid, battery, special energy, and consumers.
//!
//! With `use_reactor_defaults` set, the reactor figures come from the
//! table for the chosen [`ReactorType`] and the authored reactor fields are
//! ignored. The special energy pool starts sized from the effective reactor
//! output, so it follows whichever figures were used.

use serde::{Deserialize, Serialize};
use shipwright_types::records::{
    PowerBattery, PowerDistribution, PowerGenerator, RestartState, ShipPowerConsumer,
    ShipPowerFocus, ShipReactorSpec, ShipSpecialEnergyConfig, ShipSpecialEnergyState,
    SpecialEnergyModifier, SpecialEnergySpendRequest,
};
use shipwright_types::{ReactorType, RestartMode, ShipPowerConsumerType, ShipPowerFocusMode};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_scalar, clamp_u8, clamp_u32};

const MEGAWATTS: ScalarRange = ScalarRange::new(0.0, 1_000_000.0, 0.0);
const RESTART_SECONDS: ScalarRange = ScalarRange::new(0.0, 3600.0, 0.0);
const BATTERY_CAPACITY: ScalarRange = ScalarRange::new(0.0, 1_000_000_000.0, 12_000.0);
const HEAT: ScalarRange = ScalarRange::new(0.0, 1_000_000.0, 0.0);
const OUTPUT_PERCENT: ScalarRange = ScalarRange::new(0.0, 2.5, 1.0);
const DEFAULT_TECH_LEVEL: i64 = 8;

// ---------------------------------------------------------------------------
// Reactor
// ---------------------------------------------------------------------------

/// Output and restart figures of a reactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactorFigures {
    /// Rated output in MW.
    pub output_mw: f32,
    /// Conversion efficiency in `[0, 1]`.
    pub efficiency: f32,
    /// Draw while idling, in MW.
    pub idle_draw_mw: f32,
    /// Restart time from a warm core.
    pub hot_restart_seconds: f32,
    /// Restart time from a cold core.
    pub cold_restart_seconds: f32,
}

impl ReactorFigures {
    /// Catalog figures for `reactor`.
    pub const fn for_reactor(reactor: ReactorType) -> Self {
        let (output_mw, efficiency, idle_draw_mw, hot_restart_seconds, cold_restart_seconds) =
            match reactor {
                ReactorType::FusionMicro => (1200.0, 0.82, 150.0, 0.5, 30.0),
                ReactorType::FusionStandard => (3000.0, 0.88, 300.0, 1.0, 60.0),
                ReactorType::FusionHeavy => (7000.0, 0.92, 600.0, 2.0, 90.0),
                ReactorType::AntimatterCapital => (20_000.0, 0.98, 2000.0, 5.0, 180.0),
            };
        Self {
            output_mw,
            efficiency,
            idle_draw_mw,
            hot_restart_seconds,
            cold_restart_seconds,
        }
    }

    fn clamped(self) -> Self {
        Self {
            output_mw: MEGAWATTS.clamp(self.output_mw),
            efficiency: ScalarRange::UNIT.clamp(self.efficiency),
            idle_draw_mw: MEGAWATTS.clamp(self.idle_draw_mw),
            hot_restart_seconds: RESTART_SECONDS.clamp(self.hot_restart_seconds),
            cold_restart_seconds: RESTART_SECONDS.clamp(self.cold_restart_seconds),
        }
    }
}

impl Default for ReactorFigures {
    fn default() -> Self {
        Self::for_reactor(ReactorType::default())
    }
}

// ---------------------------------------------------------------------------
// Battery
// ---------------------------------------------------------------------------

/// Battery bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryDraft {
    /// Capacity in MW·s.
    pub capacity_mws: f32,
    /// Charge at spawn, clamped to `[0, capacity]`.
    pub stored_mws: f32,
    /// Charge rate limit in MW.
    pub max_charge_rate_mw: f32,
    /// Discharge rate limit in MW.
    pub max_discharge_rate_mw: f32,
    /// Fraction lost per second.
    pub self_discharge_rate: f32,
    /// Charging efficiency.
    pub charge_efficiency: f32,
    /// Discharging efficiency.
    pub discharge_efficiency: f32,
    /// Rated cycles before wear.
    pub max_cycles: i64,
}

impl Default for BatteryDraft {
    fn default() -> Self {
        Self {
            capacity_mws: BATTERY_CAPACITY.default,
            stored_mws: 6000.0,
            max_charge_rate_mw: 800.0,
            max_discharge_rate_mw: 600.0,
            self_discharge_rate: 0.0002,
            charge_efficiency: 0.95,
            discharge_efficiency: 0.95,
            max_cycles: 5000,
        }
    }
}

impl BatteryDraft {
    fn record(&self, tech_level: u8) -> PowerBattery {
        let capacity_mws = clamp_scalar(self.capacity_mws, BATTERY_CAPACITY);
        let stored = ScalarRange::new(0.0, capacity_mws, 0.0);
        PowerBattery {
            capacity_mws,
            stored_mws: stored.clamp(self.stored_mws),
            max_charge_rate_mw: MEGAWATTS.clamp(self.max_charge_rate_mw),
            max_discharge_rate_mw: MEGAWATTS.clamp(self.max_discharge_rate_mw),
            self_discharge_rate: ScalarRange::UNIT.clamp(self.self_discharge_rate),
            charge_efficiency: ScalarRange::UNIT.clamp(self.charge_efficiency),
            discharge_efficiency: ScalarRange::UNIT.clamp(self.discharge_efficiency),
            max_cycles: clamp_u32(self.max_cycles, 0, u32::MAX),
            tech_level,
        }
    }
}

// ---------------------------------------------------------------------------
// Special energy
// ---------------------------------------------------------------------------

const ENERGY_BASE_MAX: ScalarRange = ScalarRange::new(0.0, 1_000_000.0, 40.0);
const ENERGY_BASE_REGEN: ScalarRange = ScalarRange::new(0.0, 1_000_000.0, 3.0);
const ENERGY_OUTPUT_TO_MAX: ScalarRange = ScalarRange::new(0.0, 100.0, 0.02);
const ENERGY_OUTPUT_TO_REGEN: ScalarRange = ScalarRange::new(0.0, 100.0, 0.0015);
const ENERGY_EFFICIENCY_REGEN: ScalarRange = ScalarRange::new(0.0, 2.0, 1.0);
const ENERGY_RESTART_PENALTY: ScalarRange = ScalarRange::UNIT.with_default(0.2);
const ENERGY_ACTIVATION_COST: ScalarRange = ScalarRange::new(0.05, 3.0, 1.0);
const ENERGY_START_FILL: ScalarRange = ScalarRange::UNIT.with_default(1.0);

/// Special energy pool driven by the reactor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialEnergyDraft {
    /// Whether the ship has a special energy pool.
    pub enabled: bool,
    /// Pool size before reactor scaling.
    pub base_max: f32,
    /// Regeneration per second before reactor scaling.
    pub base_regen_per_second: f32,
    /// Pool size added per MW of reactor output.
    pub reactor_output_to_max: f32,
    /// Regeneration added per MW of reactor output.
    pub reactor_output_to_regen: f32,
    /// Weight of reactor efficiency on regeneration, `[0, 2]`.
    pub reactor_efficiency_regen_multiplier: f32,
    /// Regeneration kept while restarting, `[0, 1]`.
    pub restart_regen_penalty_multiplier: f32,
    /// Scale on activation costs, `[0.05, 3]`.
    pub activation_cost_multiplier: f32,
    /// Share of the pool filled at spawn, `[0, 1]`.
    pub start_fill: f32,
}

impl Default for SpecialEnergyDraft {
    fn default() -> Self {
        Self {
            enabled: true,
            base_max: ENERGY_BASE_MAX.default,
            base_regen_per_second: ENERGY_BASE_REGEN.default,
            reactor_output_to_max: ENERGY_OUTPUT_TO_MAX.default,
            reactor_output_to_regen: ENERGY_OUTPUT_TO_REGEN.default,
            reactor_efficiency_regen_multiplier: ENERGY_EFFICIENCY_REGEN.default,
            restart_regen_penalty_multiplier: ENERGY_RESTART_PENALTY.default,
            activation_cost_multiplier: ENERGY_ACTIVATION_COST.default,
            start_fill: ENERGY_START_FILL.default,
        }
    }
}

impl SpecialEnergyDraft {
    fn config(&self) -> ShipSpecialEnergyConfig {
        ShipSpecialEnergyConfig {
            base_max: ENERGY_BASE_MAX.clamp(self.base_max),
            base_regen_per_second: ENERGY_BASE_REGEN.clamp(self.base_regen_per_second),
            reactor_output_to_max: ENERGY_OUTPUT_TO_MAX.clamp(self.reactor_output_to_max),
            reactor_output_to_regen: ENERGY_OUTPUT_TO_REGEN.clamp(self.reactor_output_to_regen),
            reactor_efficiency_regen_multiplier: ENERGY_EFFICIENCY_REGEN
                .clamp(self.reactor_efficiency_regen_multiplier),
            restart_regen_penalty_multiplier: ENERGY_RESTART_PENALTY
                .clamp(self.restart_regen_penalty_multiplier),
            activation_cost_multiplier: ENERGY_ACTIVATION_COST
                .clamp(self.activation_cost_multiplier),
        }
    }

    /// Initial pool for a clamped config and clamped reactor figures.
    fn initial_state(
        &self,
        config: &ShipSpecialEnergyConfig,
        reactor: &ReactorFigures,
    ) -> ShipSpecialEnergyState {
        let effective_max = reactor
            .output_mw
            .mul_add(config.reactor_output_to_max, config.base_max);
        let effective_regen_per_second = reactor
            .output_mw
            .mul_add(config.reactor_output_to_regen, config.base_regen_per_second)
            * reactor.efficiency
            * config.reactor_efficiency_regen_multiplier;
        ShipSpecialEnergyState {
            current: effective_max * ENERGY_START_FILL.clamp(self.start_fill),
            effective_max,
            effective_regen_per_second,
            last_spent: 0.0,
            last_spend_tick: 0,
            failed_spend_attempts: 0,
            last_updated_tick: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Consumers
// ---------------------------------------------------------------------------

/// One power consumer slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerDraft {
    /// Whether the ship has this consumer.
    pub enabled: bool,
    /// Draw at full operation, in MW.
    pub baseline_draw_mw: f32,
    /// Lowest fraction the consumer still works at.
    pub min_operating_fraction: f32,
    /// Shedding priority, lower sheds first.
    pub priority: i64,
    /// Heat the consumer absorbs before throttling.
    pub heat_capacity: f32,
    /// Heat shed per second.
    pub heat_dissipation: f32,
}

impl Default for ConsumerDraft {
    fn default() -> Self {
        Self::preset(ShipPowerConsumerType::default())
    }
}

impl ConsumerDraft {
    /// Default slot for `consumer`.
    pub const fn preset(consumer: ShipPowerConsumerType) -> Self {
        let (baseline_draw_mw, min_operating_fraction, priority, heat_capacity, heat_dissipation) =
            match consumer {
                ShipPowerConsumerType::Mobility => (300.0, 0.2, 10, 8000.0, 2500.0),
                ShipPowerConsumerType::Weapons => (800.0, 0.25, 30, 8000.0, 2500.0),
                ShipPowerConsumerType::Shields => (600.0, 0.3, 20, 12_000.0, 3500.0),
                ShipPowerConsumerType::Sensors => (120.0, 0.1, 40, 4000.0, 1500.0),
                ShipPowerConsumerType::Stealth => (400.0, 0.1, 50, 6000.0, 2000.0),
                ShipPowerConsumerType::LifeSupport => (80.0, 0.5, 0, 3000.0, 1200.0),
            };
        Self {
            enabled: true,
            baseline_draw_mw,
            min_operating_fraction,
            priority,
            heat_capacity,
            heat_dissipation,
        }
    }

    fn record(&self, consumer: ShipPowerConsumerType) -> Option<ShipPowerConsumer> {
        self.enabled.then(|| ShipPowerConsumer {
            consumer,
            baseline_draw_mw: MEGAWATTS.clamp(self.baseline_draw_mw),
            min_operating_fraction: ScalarRange::UNIT.clamp(self.min_operating_fraction),
            priority: clamp_u8(self.priority, 0, u8::MAX),
            heat_capacity: HEAT.clamp(self.heat_capacity),
            heat_dissipation: HEAT.clamp(self.heat_dissipation),
        })
    }
}

/// The six consumer slots, baked in this field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerSlots {
    /// Engines and thrusters.
    pub mobility: ConsumerDraft,
    /// Weapon batteries.
    pub weapons: ConsumerDraft,
    /// Shield emitters.
    pub shields: ConsumerDraft,
    /// Sensor suite.
    pub sensors: ConsumerDraft,
    /// Stealth systems.
    pub stealth: ConsumerDraft,
    /// Life support.
    pub life_support: ConsumerDraft,
}

impl Default for ConsumerSlots {
    fn default() -> Self {
        Self {
            mobility: ConsumerDraft::preset(ShipPowerConsumerType::Mobility),
            weapons: ConsumerDraft::preset(ShipPowerConsumerType::Weapons),
            shields: ConsumerDraft::preset(ShipPowerConsumerType::Shields),
            sensors: ConsumerDraft::preset(ShipPowerConsumerType::Sensors),
            stealth: ConsumerDraft::preset(ShipPowerConsumerType::Stealth),
            life_support: ConsumerDraft::preset(ShipPowerConsumerType::LifeSupport),
        }
    }
}

impl ConsumerSlots {
    fn records(&self) -> Vec<ShipPowerConsumer> {
        [
            (ShipPowerConsumerType::Mobility, &self.mobility),
            (ShipPowerConsumerType::Weapons, &self.weapons),
            (ShipPowerConsumerType::Shields, &self.shields),
            (ShipPowerConsumerType::Sensors, &self.sensors),
            (ShipPowerConsumerType::Stealth, &self.stealth),
            (ShipPowerConsumerType::LifeSupport, &self.life_support),
        ]
        .into_iter()
        .filter_map(|(consumer, draft)| draft.record(consumer))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Facet
// ---------------------------------------------------------------------------

/// Full ship power setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringShipPower {
    /// Reactor type.
    pub reactor: ReactorType,
    /// Take the reactor figures from the catalog table.
    pub use_reactor_defaults: bool,
    /// Reactor figures used when `use_reactor_defaults` is off.
    pub reactor_figures: ReactorFigures,
    /// Requested share of rated output, authored in `[0, 2.5]` and stored
    /// saturated to `[0, 1]`.
    pub output_percent: f32,
    /// Reactor tech level, `[0, 255]`.
    pub reactor_tech_level: i64,
    /// Grid efficiency in `[0, 1]`.
    pub distribution_efficiency: f32,
    /// Grid damage in `[0, 1]`.
    pub conduit_damage: f32,
    /// Grid tech level, `[0, 255]`.
    pub distribution_tech_level: i64,
    /// Battery bank.
    pub battery: BatteryDraft,
    /// Battery tech level, `[0, 255]`.
    pub battery_tech_level: i64,
    /// Special energy pool.
    pub special_energy: SpecialEnergyDraft,
    /// Initial power focus.
    pub focus: ShipPowerFocusMode,
    /// Consumer slots.
    pub consumers: ConsumerSlots,
}

impl Default for AuthoringShipPower {
    fn default() -> Self {
        Self {
            reactor: ReactorType::default(),
            use_reactor_defaults: true,
            reactor_figures: ReactorFigures::default(),
            output_percent: OUTPUT_PERCENT.default,
            reactor_tech_level: DEFAULT_TECH_LEVEL,
            distribution_efficiency: 0.93,
            conduit_damage: 0.0,
            distribution_tech_level: DEFAULT_TECH_LEVEL,
            battery: BatteryDraft::default(),
            battery_tech_level: DEFAULT_TECH_LEVEL,
            special_energy: SpecialEnergyDraft::default(),
            focus: ShipPowerFocusMode::default(),
            consumers: ConsumerSlots::default(),
        }
    }
}

impl AuthoringShipPower {
    /// Reactor figures after applying `use_reactor_defaults` and clamping.
    pub fn effective_reactor(&self) -> ReactorFigures {
        if self.use_reactor_defaults {
            ReactorFigures::for_reactor(self.reactor)
        } else {
            self.reactor_figures.clamped()
        }
    }
}

impl Facet for AuthoringShipPower {
    const NAME: &'static str = "ship_power";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let reactor = self.effective_reactor();

        ctx.emit(PowerGenerator {
            max_output_mw: reactor.output_mw,
            output_percent: ScalarRange::UNIT.clamp(OUTPUT_PERCENT.clamp(self.output_percent)),
            efficiency: reactor.efficiency,
            tech_level: clamp_u8(self.reactor_tech_level, 0, u8::MAX),
        });
        ctx.emit(PowerDistribution {
            distribution_efficiency: ScalarRange::UNIT.clamp(self.distribution_efficiency),
            conduit_damage: ScalarRange::UNIT.clamp(self.conduit_damage),
            tech_level: clamp_u8(self.distribution_tech_level, 0, u8::MAX),
        });
        ctx.emit(self.battery.record(clamp_u8(self.battery_tech_level, 0, u8::MAX)));
        ctx.emit(ShipReactorSpec {
            reactor: self.reactor,
            output_mw: reactor.output_mw,
            efficiency: reactor.efficiency,
            idle_draw_mw: reactor.idle_draw_mw,
            hot_restart_seconds: reactor.hot_restart_seconds,
            cold_restart_seconds: reactor.cold_restart_seconds,
        });
        ctx.emit(ShipPowerFocus { mode: self.focus });
        ctx.emit(RestartState {
            warmth: 0.0,
            timer_seconds: 0.0,
            mode: RestartMode::Cold,
        });
        if self.special_energy.enabled {
            let config = self.special_energy.config();
            let state = self.special_energy.initial_state(&config, &reactor);
            ctx.emit(config);
            ctx.emit(state);
            ctx.emit(Vec::<SpecialEnergyModifier>::new());
            ctx.emit(Vec::<SpecialEnergySpendRequest>::new());
        }
        ctx.emit(self.consumers.records());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::bake_facet;
    use shipwright_types::{RecordKind, RuntimeRecord};

    fn consumers(output: &crate::output::BakeOutput) -> Vec<ShipPowerConsumerType> {
        match output.record(RecordKind::ShipPowerConsumers) {
            Some(RuntimeRecord::ShipPowerConsumers(list)) => {
                list.iter().map(|c| c.consumer).collect()
            }
            _ => Vec::new(),
        }
    }

    #[test]
    fn default_bundle_order() {
        let output = bake_facet(&AuthoringShipPower::default(), "Cruiser");
        assert_eq!(
            output.kinds(),
            vec![
                RecordKind::PowerGenerator,
                RecordKind::PowerDistribution,
                RecordKind::PowerBattery,
                RecordKind::ShipReactorSpec,
                RecordKind::ShipPowerFocus,
                RecordKind::RestartState,
                RecordKind::ShipSpecialEnergyConfig,
                RecordKind::ShipSpecialEnergyState,
                RecordKind::SpecialEnergyModifiers,
                RecordKind::SpecialEnergySpendRequests,
                RecordKind::ShipPowerConsumers,
            ]
        );
        assert_eq!(consumers(&output).len(), 6);
        assert_eq!(
            output
                .record(RecordKind::SpecialEnergySpendRequests)
                .and_then(RuntimeRecord::list_len),
            Some(0)
        );
    }

    #[test]
    fn reactor_defaults_override_authored_figures() {
        let facet = AuthoringShipPower {
            reactor: ReactorType::AntimatterCapital,
            reactor_figures: ReactorFigures {
                output_mw: 1.0,
                ..ReactorFigures::default()
            },
            ..AuthoringShipPower::default()
        };
        let reactor = facet.effective_reactor();
        assert!((reactor.output_mw - 20_000.0).abs() < f32::EPSILON);
        assert!((reactor.cold_restart_seconds - 180.0).abs() < f32::EPSILON);
    }

    #[test]
    fn authored_figures_are_clamped() {
        let facet = AuthoringShipPower {
            use_reactor_defaults: false,
            reactor_figures: ReactorFigures {
                output_mw: -10.0,
                efficiency: 1.4,
                ..ReactorFigures::default()
            },
            ..AuthoringShipPower::default()
        };
        let reactor = facet.effective_reactor();
        assert!(reactor.output_mw.abs() < f32::EPSILON);
        assert!((reactor.efficiency - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn battery_charge_is_bounded_by_capacity() {
        let facet = AuthoringShipPower {
            battery: BatteryDraft {
                capacity_mws: 1000.0,
                stored_mws: 5000.0,
                ..BatteryDraft::default()
            },
            battery_tech_level: 300,
            ..AuthoringShipPower::default()
        };
        let output = bake_facet(&facet, "Cruiser");
        assert_eq!(
            output.record(RecordKind::PowerBattery),
            Some(&RuntimeRecord::PowerBattery(PowerBattery {
                capacity_mws: 1000.0,
                stored_mws: 1000.0,
                max_charge_rate_mw: 800.0,
                max_discharge_rate_mw: 600.0,
                self_discharge_rate: 0.0002,
                charge_efficiency: 0.95,
                discharge_efficiency: 0.95,
                max_cycles: 5000,
                tech_level: 255,
            }))
        );
    }

    #[test]
    fn output_percent_saturates_and_tech_levels_stay_separate() {
        let facet = AuthoringShipPower {
            output_percent: 2.2,
            reactor_tech_level: 3,
            distribution_tech_level: 5,
            conduit_damage: 0.25,
            ..AuthoringShipPower::default()
        };
        let output = bake_facet(&facet, "Cruiser");
        assert_eq!(
            output.record(RecordKind::PowerGenerator),
            Some(&RuntimeRecord::PowerGenerator(PowerGenerator {
                max_output_mw: 3000.0,
                output_percent: 1.0,
                efficiency: 0.88,
                tech_level: 3,
            }))
        );
        assert_eq!(
            output.record(RecordKind::PowerDistribution),
            Some(&RuntimeRecord::PowerDistribution(PowerDistribution {
                distribution_efficiency: 0.93,
                conduit_damage: 0.25,
                tech_level: 5,
            }))
        );
    }

    #[test]
    fn output_percent_nan_and_negative() {
        let generator = |output_percent: f32| {
            let facet = AuthoringShipPower {
                output_percent,
                ..AuthoringShipPower::default()
            };
            match bake_facet(&facet, "Cruiser").record(RecordKind::PowerGenerator) {
                Some(RuntimeRecord::PowerGenerator(g)) => Some(g.output_percent),
                _ => None,
            }
        };
        assert_eq!(generator(f32::NAN), Some(1.0));
        assert_eq!(generator(-0.5), Some(0.0));
        assert_eq!(generator(0.4), Some(0.4));
    }

    #[test]
    fn special_energy_scales_with_reactor() {
        let facet = AuthoringShipPower {
            special_energy: SpecialEnergyDraft {
                start_fill: 0.5,
                activation_cost_multiplier: 0.0,
                ..SpecialEnergyDraft::default()
            },
            ..AuthoringShipPower::default()
        };
        let output = bake_facet(&facet, "Cruiser");

        let config = match output.record(RecordKind::ShipSpecialEnergyConfig) {
            Some(RuntimeRecord::ShipSpecialEnergyConfig(config)) => Some(*config),
            _ => None,
        };
        assert!(
            config.is_some_and(|c| (c.activation_cost_multiplier - 0.05).abs() < f32::EPSILON)
        );

        let state = match output.record(RecordKind::ShipSpecialEnergyState) {
            Some(RuntimeRecord::ShipSpecialEnergyState(state)) => Some(*state),
            _ => None,
        };
        // max: 40 + 3000 * 0.02, regen: (3 + 3000 * 0.0015) * 0.88
        assert!(state.is_some_and(|s| {
            (s.effective_max - 100.0).abs() < 1e-3
                && (s.current - 50.0).abs() < 1e-3
                && (s.effective_regen_per_second - 6.6).abs() < 1e-3
                && s.failed_spend_attempts == 0
                && s.last_updated_tick == 0
        }));
    }

    #[test]
    fn special_energy_follows_authored_reactor() {
        let facet = AuthoringShipPower {
            use_reactor_defaults: false,
            reactor_figures: ReactorFigures {
                output_mw: 0.0,
                ..ReactorFigures::default()
            },
            ..AuthoringShipPower::default()
        };
        let output = bake_facet(&facet, "Tender");
        let max = match output.record(RecordKind::ShipSpecialEnergyState) {
            Some(RuntimeRecord::ShipSpecialEnergyState(state)) => Some(state.effective_max),
            _ => None,
        };
        assert!(max.is_some_and(|m| (m - 40.0).abs() < 1e-3));
    }

    #[test]
    fn disabled_special_energy_emits_nothing() {
        let facet = AuthoringShipPower {
            special_energy: SpecialEnergyDraft {
                enabled: false,
                ..SpecialEnergyDraft::default()
            },
            ..AuthoringShipPower::default()
        };
        let output = bake_facet(&facet, "Freighter");
        assert!(output.record(RecordKind::ShipSpecialEnergyConfig).is_none());
        assert!(output.record(RecordKind::ShipSpecialEnergyState).is_none());
        assert!(output.record(RecordKind::SpecialEnergyModifiers).is_none());
        assert!(output.record(RecordKind::SpecialEnergySpendRequests).is_none());
        assert_eq!(output.records.len(), 7);
    }

    #[test]
    fn disabled_consumers_are_skipped_in_fixed_order() {
        let mut facet = AuthoringShipPower::default();
        facet.consumers.weapons.enabled = false;
        facet.consumers.stealth.enabled = false;
        let output = bake_facet(&facet, "Freighter");
        assert_eq!(
            consumers(&output),
            vec![
                ShipPowerConsumerType::Mobility,
                ShipPowerConsumerType::Shields,
                ShipPowerConsumerType::Sensors,
                ShipPowerConsumerType::LifeSupport,
            ]
        );
    }

    #[test]
    fn restart_starts_cold() {
        let output = bake_facet(&AuthoringShipPower::default(), "Cruiser");
        assert_eq!(
            output.record(RecordKind::RestartState),
            Some(&RuntimeRecord::RestartState(RestartState {
                warmth: 0.0,
                timer_seconds: 0.0,
                mode: RestartMode::Cold,
            }))
        );
    }
}
