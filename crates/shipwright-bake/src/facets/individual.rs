//! Facets describing a single individual: stats, physique, augmentation,
//! expertise, service traits, preordained track, and titles.

use serde::{Deserialize, Serialize};
use shipwright_types::records::{
    AugmentationStats, ExpertiseEntry, HighestFormerTitle, HighestTitle, IndividualStats,
    PhysiqueFinesseWill, PreordainProfile, ServiceTrait, TitleEntry, TitleSummary,
};
use shipwright_types::{
    ExpertiseType, PreordainTrack, ServiceTraitId, TitleLevel, TitleState, TitleTier, TitleType,
};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_scalar, clamp_u8, to_half, trim_in_place};

// ---------------------------------------------------------------------------
// Officer stats
// ---------------------------------------------------------------------------

const COMMAND: ScalarRange = ScalarRange::PERCENT_SCORE.with_default(65.0);
const TACTICS: ScalarRange = ScalarRange::PERCENT_SCORE.with_default(60.0);
const LOGISTICS: ScalarRange = ScalarRange::PERCENT_SCORE.with_default(60.0);
const DIPLOMACY: ScalarRange = ScalarRange::PERCENT_SCORE.with_default(55.0);
const ENGINEERING: ScalarRange = ScalarRange::PERCENT_SCORE.with_default(50.0);
const RESOLVE: ScalarRange = ScalarRange::PERCENT_SCORE.with_default(60.0);

/// Six independent officer scores, each in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringIndividualStats {
    /// Command.
    pub command: f32,
    /// Tactics.
    pub tactics: f32,
    /// Logistics.
    pub logistics: f32,
    /// Diplomacy.
    pub diplomacy: f32,
    /// Engineering.
    pub engineering: f32,
    /// Resolve.
    pub resolve: f32,
}

impl Default for AuthoringIndividualStats {
    fn default() -> Self {
        Self {
            command: COMMAND.default,
            tactics: TACTICS.default,
            logistics: LOGISTICS.default,
            diplomacy: DIPLOMACY.default,
            engineering: ENGINEERING.default,
            resolve: RESOLVE.default,
        }
    }
}

impl Facet for AuthoringIndividualStats {
    const NAME: &'static str = "individual_stats";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(IndividualStats {
            command: to_half(self.command, COMMAND),
            tactics: to_half(self.tactics, TACTICS),
            logistics: to_half(self.logistics, LOGISTICS),
            diplomacy: to_half(self.diplomacy, DIPLOMACY),
            engineering: to_half(self.engineering, ENGINEERING),
            resolve: to_half(self.resolve, RESOLVE),
        });
    }
}

// ---------------------------------------------------------------------------
// Physique
// ---------------------------------------------------------------------------

const ATTRIBUTE: ScalarRange = ScalarRange::PERCENT_SCORE;
const INCLINATION_MIN: u8 = 1;
const INCLINATION_MAX: u8 = 10;
const INCLINATION_DEFAULT: i64 = 5;
const GENERAL_XP: ScalarRange = ScalarRange::new(0.0, 1_000_000_000.0, 0.0);

/// Physique, finesse, and will with growth inclinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringPhysique {
    /// Physique in `[0, 100]`.
    pub physique: f32,
    /// Finesse in `[0, 100]`.
    pub finesse: f32,
    /// Will in `[0, 100]`.
    pub will: f32,
    /// Physique inclination in `[1, 10]`.
    pub physique_inclination: i64,
    /// Finesse inclination in `[1, 10]`.
    pub finesse_inclination: i64,
    /// Will inclination in `[1, 10]`.
    pub will_inclination: i64,
    /// Unallocated experience.
    pub general_xp: f32,
}

impl Default for AuthoringPhysique {
    fn default() -> Self {
        Self {
            physique: ATTRIBUTE.default,
            finesse: ATTRIBUTE.default,
            will: ATTRIBUTE.default,
            physique_inclination: INCLINATION_DEFAULT,
            finesse_inclination: INCLINATION_DEFAULT,
            will_inclination: INCLINATION_DEFAULT,
            general_xp: 0.0,
        }
    }
}

fn inclination(value: i64) -> u8 {
    clamp_u8(value, INCLINATION_MIN, INCLINATION_MAX)
}

impl Facet for AuthoringPhysique {
    const NAME: &'static str = "physique";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(PhysiqueFinesseWill {
            physique: to_half(self.physique, ATTRIBUTE),
            finesse: to_half(self.finesse, ATTRIBUTE),
            will: to_half(self.will, ATTRIBUTE),
            physique_inclination: inclination(self.physique_inclination),
            finesse_inclination: inclination(self.finesse_inclination),
            will_inclination: inclination(self.will_inclination),
            general_xp: clamp_scalar(self.general_xp, GENERAL_XP),
        });
    }
}

// ---------------------------------------------------------------------------
// Augmentation
// ---------------------------------------------------------------------------

const MODIFIER: ScalarRange = ScalarRange::new(-10.0, 10.0, 0.0);
const UPKEEP: ScalarRange = ScalarRange::new(0.0, 1_000_000.0, 0.0);

/// Totals of installed augmentations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringAugmentationStats {
    /// Physique modifier in `[-10, 10]`.
    pub physique_modifier: f32,
    /// Finesse modifier in `[-10, 10]`.
    pub finesse_modifier: f32,
    /// Will modifier in `[-10, 10]`.
    pub will_modifier: f32,
    /// General modifier in `[-10, 10]`.
    pub general_modifier: f32,
    /// Upkeep in `[0, 1e6]`.
    pub total_upkeep_cost: f32,
    /// Failure risk in `[0, 1]`.
    pub aggregated_risk: f32,
}

impl Facet for AuthoringAugmentationStats {
    const NAME: &'static str = "augmentation_stats";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit(AugmentationStats {
            physique_modifier: MODIFIER.clamp(self.physique_modifier),
            finesse_modifier: MODIFIER.clamp(self.finesse_modifier),
            will_modifier: MODIFIER.clamp(self.will_modifier),
            general_modifier: MODIFIER.clamp(self.general_modifier),
            total_upkeep_cost: UPKEEP.clamp(self.total_upkeep_cost),
            aggregated_risk: ScalarRange::UNIT.clamp(self.aggregated_risk),
        });
    }
}

// ---------------------------------------------------------------------------
// Expertise, traits, track
// ---------------------------------------------------------------------------

/// One authored expertise tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertiseTierEntry {
    /// Field of expertise.
    pub expertise: ExpertiseType,
    /// Tier, saturated into `[0, 255]`. Tier zero entries are dropped.
    pub tier: i64,
}

/// Expertise tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringExpertise {
    /// Entries in authoring order.
    pub entries: Vec<ExpertiseTierEntry>,
}

impl Facet for AuthoringExpertise {
    const NAME: &'static str = "expertise";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let entries: Vec<ExpertiseEntry> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let tier = clamp_u8(entry.tier, 0, u8::MAX);
                (tier > 0).then_some(ExpertiseEntry {
                    expertise: entry.expertise,
                    tier,
                })
            })
            .collect();
        ctx.emit(entries);
    }
}

/// Earned service traits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringServiceTraits {
    /// Traits in authoring order. `None` slots are dropped.
    pub traits: Vec<ServiceTraitId>,
}

impl Facet for AuthoringServiceTraits {
    const NAME: &'static str = "service_traits";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let traits: Vec<ServiceTrait> = self
            .traits
            .iter()
            .filter(|id| **id != ServiceTraitId::None)
            .map(|&id| ServiceTrait { id })
            .collect();
        ctx.emit(traits);
    }
}

/// Preordained career track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringPreordain {
    /// Track. `None` suppresses the record.
    pub track: PreordainTrack,
}

impl AuthoringPreordain {
    /// The profile record, absent for the `None` track.
    pub const fn record(&self) -> Option<PreordainProfile> {
        match self.track {
            PreordainTrack::None => None,
            track => Some(PreordainProfile { track }),
        }
    }
}

impl Facet for AuthoringPreordain {
    const NAME: &'static str = "preordain";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.emit_optional(self.record());
    }
}

// ---------------------------------------------------------------------------
// Titles
// ---------------------------------------------------------------------------

/// One authored title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoredTitle {
    /// Rank tier. `None` entries are dropped.
    pub tier: TitleTier,
    /// How the title was earned.
    pub title_type: TitleType,
    /// Prestige level. Inferred from tier and type when `None`.
    pub level: TitleLevel,
    /// Current standing.
    pub state: TitleState,
    /// Display name.
    pub display_name: String,
    /// Colony id.
    pub colony_id: String,
    /// Faction id.
    pub faction_id: String,
    /// Empire id.
    pub empire_id: String,
    /// Why the title was granted.
    pub acquisition_reason: String,
    /// Why the title was lost.
    pub loss_reason: String,
}

/// Titles held now or in the past.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringTitles {
    /// Titles in authoring order.
    pub titles: Vec<AuthoredTitle>,
}

const fn summary(entry: &TitleEntry) -> TitleSummary {
    TitleSummary {
        tier: entry.tier,
        title_type: entry.title_type,
        level: entry.level,
        display_name: entry.display_name,
    }
}

/// Highest-level entry matching `filter`. Ties keep the earliest entry.
fn highest<'a>(
    entries: &'a [TitleEntry],
    filter: impl Fn(&TitleEntry) -> bool,
) -> Option<&'a TitleEntry> {
    entries.iter().filter(|e| filter(e)).fold(None, |best, entry| match best {
        Some(current) if entry.level <= current.level => Some(current),
        _ => Some(entry),
    })
}

impl Facet for AuthoringTitles {
    const NAME: &'static str = "titles";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        let mut entries = Vec::with_capacity(self.titles.len());
        for title in self.titles.iter().filter(|t| t.tier != TitleTier::None) {
            entries.push(TitleEntry {
                tier: title.tier,
                title_type: title.title_type,
                level: title.level.or_infer(title.tier, title.title_type),
                state: title.state,
                display_name: ctx.optional_long("display_name", &title.display_name),
                colony_id: ctx.optional_long("colony_id", &title.colony_id),
                faction_id: ctx.optional_long("faction_id", &title.faction_id),
                empire_id: ctx.optional_long("empire_id", &title.empire_id),
                acquisition_reason: ctx
                    .optional_long("acquisition_reason", &title.acquisition_reason),
                loss_reason: ctx.optional_long("loss_reason", &title.loss_reason),
            });
        }

        let active = highest(&entries, |e| e.state == TitleState::Active).map(summary);
        let former = highest(&entries, |e| e.state != TitleState::Active).map(|e| {
            HighestFormerTitle {
                title: summary(e),
                state: e.state,
                loss_reason: e.loss_reason,
            }
        });

        ctx.emit(entries);
        ctx.emit_optional(active.map(HighestTitle));
        ctx.emit_optional(former);
    }

    fn normalize_in_place(&mut self) {
        for title in &mut self.titles {
            trim_in_place(&mut title.display_name);
            trim_in_place(&mut title.colony_id);
            trim_in_place(&mut title.faction_id);
            trim_in_place(&mut title.empire_id);
            trim_in_place(&mut title.acquisition_reason);
            trim_in_place(&mut title.loss_reason);
        }
    }
}
