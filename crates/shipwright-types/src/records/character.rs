//! Records describing individuals and organizations: alignment, doctrine,
//! stats, expertise, titles, and relationships.
//!
//! Low-fidelity scalars are stored as [`f16`]. Values that feed economic or
//! progression math stay `f32`.

use half::f16;
use serde::{Deserialize, Serialize};

use crate::enums::{
    AffiliationType, AggregateType, ContractType, EthicAxis, ExpertiseType, LoyaltyTargetType,
    OutlookId, PreordainTrack, ServiceTraitId, SuccessorType, TitleLevel, TitleState, TitleTier,
    TitleType,
};
use crate::fixed::{LongId, ShortId};

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Law, good, and integrity alignment, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentTriplet {
    /// Lawful (positive) versus chaotic (negative).
    pub law: f16,
    /// Good versus evil.
    pub good: f16,
    /// Integrity versus corruption.
    pub integrity: f16,
}

/// Conviction on one ethic axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EthicAxisValue {
    /// The axis.
    pub axis: EthicAxis,
    /// Conviction in `[-1, 1]`.
    pub value: f16,
}

/// Weight of one outlook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlookEntry {
    /// The outlook.
    pub outlook: OutlookId,
    /// Weight in `[-1, 1]`.
    pub weight: f16,
}

/// Inclusive alignment bounds an organization expects of its members.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentWindow {
    /// Lower law bound.
    pub law_min: f16,
    /// Upper law bound.
    pub law_max: f16,
    /// Lower good bound.
    pub good_min: f16,
    /// Upper good bound.
    pub good_max: f16,
    /// Lower integrity bound.
    pub integrity_min: f16,
    /// Upper integrity bound.
    pub integrity_max: f16,
}

/// Organizational doctrine used for compliance evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoctrineProfile {
    /// Expected alignment bounds.
    pub window: AlignmentWindow,
    /// Allowed deviation on ethic axes.
    pub axis_tolerance: f16,
    /// Allowed deviation on outlooks.
    pub outlook_tolerance: f16,
    /// Chaos level at which mutiny becomes possible.
    pub chaos_mutiny_threshold: f16,
    /// Minimum lawfulness for accepting contracts.
    pub lawful_contract_floor: f16,
    /// Suspicion gained per breach.
    pub suspicion_gain: f16,
}

/// Expected range on one ethic axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoctrineAxisExpectation {
    /// The axis.
    pub axis: EthicAxis,
    /// Lower bound, never above `max`.
    pub min: f16,
    /// Upper bound.
    pub max: f16,
}

/// Minimum weight required on one outlook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoctrineOutlookExpectation {
    /// The outlook.
    pub outlook: OutlookId,
    /// Required weight.
    pub minimum_weight: f16,
}

/// Starting suspicion of a covert operative, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuspicionScore(pub f16);

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Six officer stats, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndividualStats {
    /// Command.
    pub command: f16,
    /// Tactics.
    pub tactics: f16,
    /// Logistics.
    pub logistics: f16,
    /// Diplomacy.
    pub diplomacy: f16,
    /// Engineering.
    pub engineering: f16,
    /// Resolve.
    pub resolve: f16,
}

/// Physical, dexterity, and willpower attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysiqueFinesseWill {
    /// Physique in `[0, 100]`.
    pub physique: f16,
    /// Finesse in `[0, 100]`.
    pub finesse: f16,
    /// Will in `[0, 100]`.
    pub will: f16,
    /// Physique growth inclination in `[1, 10]`.
    pub physique_inclination: u8,
    /// Finesse growth inclination in `[1, 10]`.
    pub finesse_inclination: u8,
    /// Will growth inclination in `[1, 10]`.
    pub will_inclination: u8,
    /// Unallocated experience.
    pub general_xp: f32,
}

/// Aggregate effect of installed augmentations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AugmentationStats {
    /// Physique modifier.
    pub physique_modifier: f32,
    /// Finesse modifier.
    pub finesse_modifier: f32,
    /// Will modifier.
    pub will_modifier: f32,
    /// General modifier.
    pub general_modifier: f32,
    /// Total upkeep cost per cycle.
    pub total_upkeep_cost: f32,
    /// Combined failure risk in `[0, 1]`.
    pub aggregated_risk: f32,
}

/// Tier reached in one field of expertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpertiseEntry {
    /// Field of expertise.
    pub expertise: ExpertiseType,
    /// Tier, at least 1.
    pub tier: u8,
}

/// One earned service trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceTrait {
    /// The trait. Never the `None` sentinel.
    pub id: ServiceTraitId,
}

/// Preordained career track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreordainProfile {
    /// The track. Never the `None` sentinel.
    pub track: PreordainTrack,
}

// ---------------------------------------------------------------------------
// Titles
// ---------------------------------------------------------------------------

/// One title held now or in the past.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleEntry {
    /// Rank tier. Never the `None` sentinel.
    pub tier: TitleTier,
    /// How the title was earned.
    pub title_type: TitleType,
    /// Prestige level, inferred when left unset.
    pub level: TitleLevel,
    /// Current standing.
    pub state: TitleState,
    /// Display name.
    pub display_name: LongId,
    /// Colony the title refers to, if any.
    pub colony_id: LongId,
    /// Faction the title refers to, if any.
    pub faction_id: LongId,
    /// Empire the title refers to, if any.
    pub empire_id: LongId,
    /// Why the title was granted.
    pub acquisition_reason: LongId,
    /// Why the title was lost.
    pub loss_reason: LongId,
}

/// Condensed view of a single title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleSummary {
    /// Rank tier.
    pub tier: TitleTier,
    /// How the title was earned.
    pub title_type: TitleType,
    /// Prestige level.
    pub level: TitleLevel,
    /// Display name.
    pub display_name: LongId,
}

/// Highest-level active title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighestTitle(pub TitleSummary);

/// Highest-level title no longer active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighestFormerTitle {
    /// The title itself.
    pub title: TitleSummary,
    /// How it was lost. Never `Active`.
    pub state: TitleState,
    /// Why it was lost.
    pub loss_reason: LongId,
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

/// Loyalty held towards one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyScore {
    /// Kind of entity.
    pub target_type: LoyaltyTargetType,
    /// Entity id, never empty.
    pub target_id: LongId,
    /// Loyalty in `[0, 1]`.
    pub loyalty: f16,
}

/// Membership in one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffiliationTag {
    /// Kind of group.
    pub affiliation: AffiliationType,
    /// Group id, never empty.
    pub target_id: LongId,
    /// Loyalty in `[0, 1]`.
    pub loyalty: f16,
}

/// Fractional ownership of one asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwnershipStake {
    /// Free-form asset category such as `Facility`.
    pub asset_type: ShortId,
    /// Asset id, never empty.
    pub asset_id: LongId,
    /// Owned share in `[0, 1]`.
    pub percentage: f32,
}

/// Membership of a patron in one aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatronageMembership {
    /// Kind of aggregate.
    pub aggregate_type: AggregateType,
    /// Aggregate id, never empty.
    pub aggregate_id: LongId,
    /// Role held.
    pub role: ShortId,
}

/// The individual mentoring this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mentor {
    /// Mentor id, never empty.
    pub mentor_id: LongId,
}

/// One individual mentored by this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mentee {
    /// Mentee id, never empty.
    pub mentee_id: LongId,
}

/// One designated successor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuccessorEntry {
    /// Successor id, never empty.
    pub successor_id: LongId,
    /// Share of expertise inherited, in `[0, 1]`.
    pub inheritance: f32,
    /// Kind of successor.
    pub successor_type: SuccessorType,
}

/// Active service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    /// Kind of contract.
    pub contract_type: ContractType,
    /// Employer id, never empty.
    pub employer_id: LongId,
    /// Tick at which the contract lapses. Zero means open-ended.
    pub expiration_tick: u32,
}

/// Public standing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    /// Reputation in `[0, 1]`.
    pub reputation: f16,
    /// Prestige in `[0, 1]`.
    pub prestige: f16,
}
