//! Records describing modules, vessels, command, power, logistics, and
//! strike craft.

use half::f16;
use serde::{Deserialize, Serialize};

use crate::enums::{
    CaptainAutonomy, FacilityArchetype, FacilityTier, HullVariant, ManeuverMode, ModuleFunction,
    ModuleRarity, OutlookId, ReactorType, RestartMode, ShipPowerConsumerType, ShipPowerFocusMode,
    VesselStanceMode,
};
use crate::fixed::LongId;

// ---------------------------------------------------------------------------
// Modules and hulls
// ---------------------------------------------------------------------------

/// Build quality of a module, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleQuality(pub f32);

/// Tier of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleTier(pub u8);

/// Rarity of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRarityRecord(pub ModuleRarity);

/// Variant of a hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HullVariantRecord(pub HullVariant);

/// Facility archetype. Never the `None` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityArchetypeRecord(pub FacilityArchetype);

/// Facility size tier. Only present alongside [`FacilityArchetypeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityTierRecord(pub FacilityTier);

/// What a module does and how much of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleFunctionData {
    /// Function. Never the `None` sentinel.
    pub function: ModuleFunction,
    /// Capacity contributed, in function-specific units.
    pub capacity: f32,
    /// Short description.
    pub description: LongId,
}

// ---------------------------------------------------------------------------
// Vessels and captains
// ---------------------------------------------------------------------------

/// Overall build quality of a vessel, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselQuality(pub f16);

/// Current and desired combat stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VesselStance {
    /// Stance in effect.
    pub current: VesselStanceMode,
    /// Stance the captain is moving towards.
    pub desired: VesselStanceMode,
    /// Tick of the last stance change.
    pub change_tick: u32,
}

/// Default movement behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManeuverProfile {
    /// Movement regime used when no order overrides it.
    pub default_mode: ManeuverMode,
    /// Stance used when no order overrides it.
    pub default_stance: VesselStanceMode,
}

/// Thresholds a captain checks before accepting an order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptainReadiness {
    /// Minimum hull integrity, in `[0, 1]`.
    pub min_hull: f16,
    /// Minimum crew morale, in `[-1, 1]`.
    pub min_morale: f16,
    /// Minimum fuel fraction, in `[0, 1]`.
    pub min_fuel: f16,
    /// Minimum ammunition fraction, in `[0, 1]`.
    pub min_ammo: f16,
    /// Maximum acceptable threat, in `[0, 1]`.
    pub max_threat: f16,
    /// Last computed readiness. Starts at zero.
    pub current_readiness: f16,
}

/// Captain personality and order bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptainState {
    /// Allowed deviation from orders.
    pub autonomy: CaptainAutonomy,
    /// Self-confidence, in `[0, 1]`.
    pub confidence: f16,
    /// Willingness to take risks, in `[0, 1]`.
    pub risk_tolerance: f16,
    /// Whether the captain has reported ready.
    pub ready: bool,
    /// Orders completed.
    pub orders_completed: u32,
    /// Orders failed.
    pub orders_failed: u32,
}

/// One queued order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptainOrder {
    /// Entity the order is about.
    pub target_id: LongId,
    /// Priority, lower is more urgent.
    pub priority: u8,
    /// Threat the captain will accept for this order, in `[0, 1]`.
    pub threat_tolerance: f16,
}

/// Ship power allowance for a capital ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipPowerBudget {
    /// Budget in megawatts.
    pub budget_mw: f32,
    /// Share held in reserve, in `[0, 1]`.
    pub reserve_fraction: f32,
}

/// Strike craft hangar size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HangarCapacity(pub f32);

/// One craft docked in a hangar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HangarSlot {
    /// Docked craft id.
    pub craft_id: LongId,
}

// ---------------------------------------------------------------------------
// Ship power
// ---------------------------------------------------------------------------

/// Reactor output state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerGenerator {
    /// Theoretical maximum output in megawatts.
    pub max_output_mw: f32,
    /// Share of maximum currently requested, in `[0, 1]`.
    pub output_percent: f32,
    /// Conversion efficiency, in `[0, 1]`.
    pub efficiency: f32,
    /// Reactor tech level.
    pub tech_level: u8,
}

/// Power grid state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerDistribution {
    /// Transmission efficiency, in `[0, 1]`.
    pub distribution_efficiency: f32,
    /// Conduit damage, in `[0, 1]`.
    pub conduit_damage: f32,
    /// Distribution tech level.
    pub tech_level: u8,
}

/// Energy storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerBattery {
    /// Capacity in megawatt-seconds.
    pub capacity_mws: f32,
    /// Stored energy, never above `capacity_mws`.
    pub stored_mws: f32,
    /// Maximum charge rate in megawatts.
    pub max_charge_rate_mw: f32,
    /// Maximum discharge rate in megawatts.
    pub max_discharge_rate_mw: f32,
    /// Fraction lost per second.
    pub self_discharge_rate: f32,
    /// Charge efficiency, in `[0, 1]`.
    pub charge_efficiency: f32,
    /// Discharge efficiency, in `[0, 1]`.
    pub discharge_efficiency: f32,
    /// Rated charge cycles.
    pub max_cycles: u32,
    /// Battery tech level.
    pub tech_level: u8,
}

/// Static reactor characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipReactorSpec {
    /// Reactor family.
    pub reactor: ReactorType,
    /// Rated output in megawatts.
    pub output_mw: f32,
    /// Efficiency, in `[0, 1]`.
    pub efficiency: f32,
    /// Draw while idling, in megawatts.
    pub idle_draw_mw: f32,
    /// Restart time when warm, in seconds.
    pub hot_restart_seconds: f32,
    /// Restart time from cold, in seconds.
    pub cold_restart_seconds: f32,
}

/// Power priority mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipPowerFocus {
    /// Active mode.
    pub mode: ShipPowerFocusMode,
}

/// Reactor restart progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestartState {
    /// Residual reactor heat, in `[0, 1]`.
    pub warmth: f32,
    /// Seconds remaining until restart completes.
    pub timer_seconds: f32,
    /// Restart regime.
    pub mode: RestartMode,
}

/// One subsystem drawing ship power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipPowerConsumer {
    /// Subsystem.
    pub consumer: ShipPowerConsumerType,
    /// Baseline draw in megawatts.
    pub baseline_draw_mw: f32,
    /// Minimum share of baseline needed to stay online, in `[0, 1]`.
    pub min_operating_fraction: f32,
    /// Allocation priority, lower is served first.
    pub priority: u8,
    /// Heat the subsystem can absorb.
    pub heat_capacity: f32,
    /// Heat shed per second.
    pub heat_dissipation: f32,
}

// ---------------------------------------------------------------------------
// Special energy
// ---------------------------------------------------------------------------

/// How the special energy pool scales with the reactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipSpecialEnergyConfig {
    /// Pool size before reactor scaling.
    pub base_max: f32,
    /// Regeneration per second before reactor scaling.
    pub base_regen_per_second: f32,
    /// Pool size added per megawatt of reactor output.
    pub reactor_output_to_max: f32,
    /// Regeneration added per megawatt of reactor output.
    pub reactor_output_to_regen: f32,
    /// Weight of reactor efficiency on regeneration, in `[0, 2]`.
    pub reactor_efficiency_regen_multiplier: f32,
    /// Regeneration kept while the reactor restarts, in `[0, 1]`.
    pub restart_regen_penalty_multiplier: f32,
    /// Scale on ability activation costs, in `[0.05, 3]`.
    pub activation_cost_multiplier: f32,
}

/// Live special energy pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipSpecialEnergyState {
    /// Energy available now, never above `effective_max`.
    pub current: f32,
    /// Pool size after reactor scaling.
    pub effective_max: f32,
    /// Regeneration per second after reactor scaling.
    pub effective_regen_per_second: f32,
    /// Energy spent by the last successful spend.
    pub last_spent: f32,
    /// Tick of the last successful spend.
    pub last_spend_tick: u32,
    /// Spends refused for lack of energy.
    pub failed_spend_attempts: u32,
    /// Tick the pool was last updated.
    pub last_updated_tick: u32,
}

/// A passive bonus to the special energy pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialEnergyModifier {
    /// What grants the bonus.
    pub source_id: LongId,
    /// Added pool size.
    pub max_bonus: f32,
    /// Added regeneration per second.
    pub regen_bonus: f32,
}

/// A pending spend against the special energy pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialEnergySpendRequest {
    /// Ability asking for energy.
    pub ability_id: LongId,
    /// Energy requested.
    pub amount: f32,
    /// Tick the request was made.
    pub requested_tick: u32,
}

// ---------------------------------------------------------------------------
// Logistics
// ---------------------------------------------------------------------------

/// Bounds for a logistics board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticsBoardConfig {
    /// Smallest batch dispatched, never above `max_batch`.
    pub min_batch: u32,
    /// Largest batch dispatched.
    pub max_batch: u32,
    /// Maximum open reservations.
    pub max_reservations: u16,
    /// Ticks a claim stays valid.
    pub claim_ttl_ticks: u32,
    /// Share of stock that may be reserved, in `[0, 1]`.
    pub reservation_fraction: f16,
}

/// Outstanding demand for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandEntry {
    /// Resource requested.
    pub resource_id: LongId,
    /// Quantity still needed.
    pub quantity: f32,
}

/// Stock held back for one requester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Resource reserved.
    pub resource_id: LongId,
    /// Requester holding the reservation.
    pub holder_id: LongId,
    /// Quantity reserved.
    pub quantity: f32,
}

/// Pending claim against a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// Resource claimed.
    pub resource_id: LongId,
    /// Quantity claimed.
    pub quantity: f32,
    /// Tick after which the claim lapses.
    pub expires_tick: u32,
}

// ---------------------------------------------------------------------------
// Strike craft
// ---------------------------------------------------------------------------

/// Dogfight engagement rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeCraftDogfightConfig {
    /// Whether dogfighting is enabled.
    pub enabled: bool,
    /// Half-angle of the firing cone in degrees.
    pub fire_cone_degrees: f32,
    /// Ticks before breaking off an attack run.
    pub break_off_ticks: u32,
    /// Range at which craft engage.
    pub engage_range: f32,
    /// Range at which craft disengage, never below `engage_range`.
    pub disengage_range: f32,
}

/// How pilots read allegiance from alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeCraftPilotProfileConfig {
    /// Outlook assigned to friendly pilots.
    pub friendly_outlook: OutlookId,
    /// Outlook assigned to hostile pilots.
    pub hostile_outlook: OutlookId,
    /// Outlook assigned to neutral pilots.
    pub neutral_outlook: OutlookId,
    /// Law at or above which a pilot counts as loyalist.
    pub loyalist_law_threshold: f32,
    /// Law at or below which a pilot counts as mutinous, never above the
    /// loyalist threshold.
    pub mutinous_law_threshold: f32,
}

/// Wing formation and break-up rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeCraftWingDecisionConfig {
    /// Ticks between wing decisions.
    pub decision_cooldown_ticks: u32,
    /// Largest wing.
    pub max_wing_size: u8,
    /// Chaos above which a wing breaks.
    pub chaos_break_threshold: f32,
    /// Chaos above which an aggressive wing breaks.
    pub chaos_break_aggressive_threshold: f32,
    /// Lawfulness above which craft form up.
    pub lawfulness_form_threshold: f32,
}
