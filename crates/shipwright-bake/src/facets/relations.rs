//! Relationship facets.
//!
//! Every list here is filtered on its reference id: an entry with an empty
//! id is dropped silently. Loyalty additionally drops entries whose weight
//! does not pass the sparse threshold. Relationships are one-sided; baking
//! never writes anything onto the other party.

use serde::{Deserialize, Serialize};
use shipwright_types::records::{
    AffiliationTag, Contract, LoyaltyScore, Mentee, Mentor, OwnershipStake, PatronageMembership,
    Reputation, SuccessorEntry,
};
use shipwright_types::{
    AffiliationType, AggregateType, ContractType, LoyaltyTargetType, SuccessorType,
};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_scalar, clamp_u32, passes_sparse, to_half, trim_in_place};

// ---------------------------------------------------------------------------
// Loyalty and affiliation
// ---------------------------------------------------------------------------

/// Loyalty toward one target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoyaltyEntry {
    /// Kind of target.
    pub target_type: LoyaltyTargetType,
    /// Target entity id.
    pub target_id: String,
    /// Loyalty in `[0, 1]`.
    pub loyalty: f32,
}

/// Loyalty scores toward empires, lineages, and guilds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringLoyalty {
    /// Entries in authoring order.
    pub entries: Vec<LoyaltyEntry>,
}

impl Facet for AuthoringLoyalty {
    const NAME: &'static str = "loyalty";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let mut scores = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let loyalty = clamp_scalar(entry.loyalty, ScalarRange::UNIT);
            if !passes_sparse(loyalty) {
                continue;
            }
            let Some(target_id) = ctx.reference("target_id", &entry.target_id) else {
                continue;
            };
            scores.push(LoyaltyScore {
                target_type: entry.target_type,
                target_id,
                loyalty: to_half(loyalty, ScalarRange::UNIT),
            });
        }
        ctx.emit(scores);
    }

    fn normalize_in_place(&mut self) {
        for entry in &mut self.entries {
            trim_in_place(&mut entry.target_id);
        }
    }
}

/// Membership in one faction, guild, or other affiliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffiliationEntry {
    /// Kind of affiliation.
    pub affiliation: AffiliationType,
    /// Affiliated entity id.
    pub target_id: String,
    /// Loyalty in `[0, 1]`.
    pub loyalty: f32,
}

/// Affiliation tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringAffiliations {
    /// Entries in authoring order.
    pub entries: Vec<AffiliationEntry>,
}

impl Facet for AuthoringAffiliations {
    const NAME: &'static str = "affiliations";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let mut tags = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let Some(target_id) = ctx.reference("target_id", &entry.target_id) else {
                continue;
            };
            tags.push(AffiliationTag {
                affiliation: entry.affiliation,
                target_id,
                loyalty: to_half(entry.loyalty, ScalarRange::UNIT),
            });
        }
        ctx.emit(tags);
    }

    fn normalize_in_place(&mut self) {
        for entry in &mut self.entries {
            trim_in_place(&mut entry.target_id);
        }
    }
}

// ---------------------------------------------------------------------------
// Ownership and patronage
// ---------------------------------------------------------------------------

/// A share of one asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnershipEntry {
    /// Asset category, e.g. `"vessel"` or `"facility"`.
    pub asset_type: String,
    /// Asset entity id.
    pub asset_id: String,
    /// Owned share in `[0, 1]`.
    pub percentage: f32,
}

/// Ownership stakes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringOwnership {
    /// Stakes in authoring order.
    pub stakes: Vec<OwnershipEntry>,
}

impl Facet for AuthoringOwnership {
    const NAME: &'static str = "ownership";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let mut stakes = Vec::with_capacity(self.stakes.len());
        for entry in &self.stakes {
            let Some(asset_id) = ctx.reference("asset_id", &entry.asset_id) else {
                continue;
            };
            let asset_type = ctx.optional_short("asset_type", &entry.asset_type);
            stakes.push(OwnershipStake {
                asset_type,
                asset_id,
                percentage: clamp_scalar(entry.percentage, ScalarRange::UNIT),
            });
        }
        ctx.emit(stakes);
    }

    fn normalize_in_place(&mut self) {
        for entry in &mut self.stakes {
            trim_in_place(&mut entry.asset_type);
            trim_in_place(&mut entry.asset_id);
        }
    }
}

/// Membership in a patron aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatronageEntry {
    /// Kind of aggregate.
    pub aggregate_type: AggregateType,
    /// Aggregate entity id.
    pub aggregate_id: String,
    /// Role held inside the aggregate.
    pub role: String,
}

/// Patronage memberships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringPatronage {
    /// Memberships in authoring order.
    pub memberships: Vec<PatronageEntry>,
}

impl Facet for AuthoringPatronage {
    const NAME: &'static str = "patronage";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let mut memberships = Vec::with_capacity(self.memberships.len());
        for entry in &self.memberships {
            let Some(aggregate_id) = ctx.reference("aggregate_id", &entry.aggregate_id) else {
                continue;
            };
            let role = ctx.optional_short("role", &entry.role);
            memberships.push(PatronageMembership {
                aggregate_type: entry.aggregate_type,
                aggregate_id,
                role,
            });
        }
        ctx.emit(memberships);
    }

    fn normalize_in_place(&mut self) {
        for entry in &mut self.memberships {
            trim_in_place(&mut entry.aggregate_id);
            trim_in_place(&mut entry.role);
        }
    }
}

// ---------------------------------------------------------------------------
// Mentorship and succession
// ---------------------------------------------------------------------------

/// One mentor and any number of mentees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringMentorship {
    /// Mentor id. Empty means no mentor.
    pub mentor_id: String,
    /// Mentee ids in authoring order.
    pub mentee_ids: Vec<String>,
}

impl Facet for AuthoringMentorship {
    const NAME: &'static str = "mentorship";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let mentor = ctx
            .reference("mentor_id", &self.mentor_id)
            .map(|mentor_id| Mentor { mentor_id });
        ctx.emit_optional(mentor);

        let mentees: Vec<Mentee> = self
            .mentee_ids
            .iter()
            .filter_map(|raw| ctx.reference("mentee_ids", raw))
            .map(|mentee_id| Mentee { mentee_id })
            .collect();
        if !mentees.is_empty() {
            ctx.emit(mentees);
        }
    }

    fn normalize_in_place(&mut self) {
        trim_in_place(&mut self.mentor_id);
        for id in &mut self.mentee_ids {
            trim_in_place(id);
        }
    }
}

/// A designated successor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessorDraft {
    /// Successor entity id.
    pub successor_id: String,
    /// Inherited share in `[0, 1]`.
    pub inheritance: f32,
    /// Heir or protege.
    pub successor_type: SuccessorType,
}

/// Designated successors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringSuccessors {
    /// Successors in authoring order.
    pub successors: Vec<SuccessorDraft>,
}

impl Facet for AuthoringSuccessors {
    const NAME: &'static str = "successors";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let mut successors = Vec::with_capacity(self.successors.len());
        for draft in &self.successors {
            let Some(successor_id) = ctx.reference("successor_id", &draft.successor_id) else {
                continue;
            };
            successors.push(SuccessorEntry {
                successor_id,
                inheritance: clamp_scalar(draft.inheritance, ScalarRange::UNIT),
                successor_type: draft.successor_type,
            });
        }
        ctx.emit(successors);
    }

    fn normalize_in_place(&mut self) {
        for draft in &mut self.successors {
            trim_in_place(&mut draft.successor_id);
        }
    }
}

// ---------------------------------------------------------------------------
// Contract and reputation
// ---------------------------------------------------------------------------

/// Employment contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringContract {
    /// Kind of employer.
    pub contract_type: ContractType,
    /// Employer entity id. Required.
    pub employer_id: String,
    /// Tick the contract expires on.
    pub expiration_tick: i64,
}

impl Facet for AuthoringContract {
    const NAME: &'static str = "contract";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let Some(employer_id) = ctx.require_long("employer_id", &self.employer_id) else {
            return;
        };
        ctx.emit(Contract {
            contract_type: self.contract_type,
            employer_id,
            expiration_tick: clamp_u32(self.expiration_tick, 0, u32::MAX),
        });
    }

    fn normalize_in_place(&mut self) {
        trim_in_place(&mut self.employer_id);
    }
}

/// Public standing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringReputation {
    /// Reputation in `[0, 1]`.
    pub reputation: f32,
    /// Prestige in `[0, 1]`.
    pub prestige: f32,
}

impl Facet for AuthoringReputation {
    const NAME: &'static str = "reputation";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(Reputation {
            reputation: to_half(self.reputation, ScalarRange::UNIT),
            prestige: to_half(self.prestige, ScalarRange::UNIT),
        });
    }
}
