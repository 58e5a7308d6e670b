//! Closed enumerations shared by authoring records and runtime records.
//!
//! Enumerated tokens pass through the bake unchanged. A few of them carry a
//! `None` sentinel meaning "this facet does not apply"; the bake suppresses
//! records for those values instead of storing a zero-like token.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Alignment and outlooks
// ---------------------------------------------------------------------------

/// An ethic axis along which an individual or organization holds conviction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EthicAxis {
    /// Militarist (positive) versus pacifist (negative).
    #[default]
    War,
    /// Materialist versus spiritualist.
    Materialist,
    /// Authoritarian versus egalitarian.
    Authoritarian,
    /// Xenophobe versus xenophile.
    Xenophobia,
    /// Expansionist versus isolationist.
    Expansionist,
}

/// A behavioral outlook (stance) an individual may weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OutlookId {
    /// No strong leaning.
    #[default]
    Neutral,
    /// Follows the chain of command.
    Loyalist,
    /// Acts on personal gain.
    Opportunist,
    /// Acts on conviction regardless of cost.
    Fanatic,
    /// Inclined to defy command.
    Mutinous,
}

/// Kind of group an affiliation tag points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AffiliationType {
    /// A star empire.
    #[default]
    Empire,
    /// A political faction.
    Faction,
    /// A ground army.
    Army,
    /// A space fleet.
    Fleet,
    /// An upstart band.
    Band,
    /// A squad or small unit.
    Squad,
    /// A company-sized unit.
    Company,
    /// A trade or craft guild.
    Guild,
    /// A colony.
    Colony,
    /// A corporation.
    Corporation,
    /// A worker cooperative.
    Cooperative,
}

/// Kind of entity a loyalty score is held towards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoyaltyTargetType {
    /// A star empire.
    #[default]
    Empire,
    /// A family lineage.
    Lineage,
    /// A guild.
    Guild,
}

/// Kind of aggregate organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AggregateType {
    /// A ruling family.
    #[default]
    Dynasty,
    /// A guild.
    Guild,
    /// A corporation.
    Corporation,
    /// An army.
    Army,
    /// A band.
    Band,
}

// ---------------------------------------------------------------------------
// Modules, hulls, facilities
// ---------------------------------------------------------------------------

/// Archetype of a facility module. `None` marks a module that is not a
/// facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacilityArchetype {
    /// Not a facility.
    #[default]
    None,
    /// Ore and gas refining.
    Refinery,
    /// Component fabrication.
    Fabricator,
    /// Heavy metal casting.
    Foundry,
    /// Organic processing.
    Bioprocessor,
    /// Research laboratory.
    ResearchLab,
    /// Cargo routing hub.
    LogisticsHub,
    /// Crew habitat.
    HabitatModule,
    /// Capital-scale forge.
    TitanForge,
    /// Mobile fabrication bay.
    MobileFabricationBay,
    /// Field research lab.
    ExpeditionLab,
    /// Orbital drydock.
    OrbitalDrydock,
    /// Trade nexus.
    TradeNexus,
    /// Defence grid control centre.
    DefenceGridControl,
    /// Terraforming plant.
    TerraformingPlant,
    /// Civic works.
    CivicWorks,
    /// Cultural archive.
    CulturalArchive,
    /// Stellar manipulator.
    StellarManipulator,
    /// Supercarrier hangar.
    SupercarrierHangar,
}

/// Size tier of a facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacilityTier {
    /// Small.
    #[default]
    Small,
    /// Medium.
    Medium,
    /// Large.
    Large,
    /// Massive.
    Massive,
    /// Titanic.
    Titanic,
}

/// Rarity of a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModuleRarity {
    /// Common.
    #[default]
    Common,
    /// Uncommon.
    Uncommon,
    /// Heroic.
    Heroic,
    /// Prototype.
    Prototype,
}

/// Variant of a hull.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HullVariant {
    /// Common.
    #[default]
    Common,
    /// Uncommon.
    Uncommon,
    /// Heroic.
    Heroic,
    /// Prototype.
    Prototype,
}

/// Primary function of a module. `None` marks a module with no function
/// data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModuleFunction {
    /// No function data.
    #[default]
    None,
    /// Adds hangar capacity.
    HangarCapacity,
    /// Adds cargo capacity.
    CargoCapacity,
    /// Manufacturing.
    Manufacturing,
    /// Research.
    Research,
    /// Refit facility.
    RefitFacility,
    /// Repair facility.
    RepairFacility,
    /// Resource processing.
    ResourceProcessing,
    /// Habitat.
    Habitat,
    /// Command and control.
    Command,
    /// Anything else.
    Other,
}

// ---------------------------------------------------------------------------
// Individuals
// ---------------------------------------------------------------------------

/// Career track an individual is destined for. `None` suppresses the
/// profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PreordainTrack {
    /// No preordained track.
    #[default]
    None,
    /// Combat ace.
    CombatAce,
    /// Logistics maven.
    LogisticsMaven,
    /// Diplomatic envoy.
    DiplomaticEnvoy,
    /// Engineering savant.
    EngineeringSavant,
}

/// Field of expertise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpertiseType {
    /// Carrier command.
    #[default]
    CarrierCommand,
    /// Espionage.
    Espionage,
    /// Logistics.
    Logistics,
    /// Psionics.
    Psionic,
    /// Beastmastery.
    Beastmastery,
}

/// Service trait earned by an individual. `None` entries are dropped at
/// bake time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceTraitId {
    /// Empty slot.
    #[default]
    None,
    /// Reactor whisperer.
    ReactorWhisperer,
    /// Strike wing mentor.
    StrikeWingMentor,
    /// Tactical savant.
    TacticalSavant,
    /// Logistics maestro.
    LogisticsMaestro,
    /// Pirate bane.
    PirateBane,
}

/// Kind of service contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContractType {
    /// Fleet service.
    #[default]
    Fleet,
    /// Manufacturer service.
    Manufacturer,
    /// Mercenary guild service.
    MercenaryGuild,
    /// Corporate service.
    Corporation,
}

/// Kind of successor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuccessorType {
    /// Blood or legal heir.
    #[default]
    Heir,
    /// Trained protege.
    Protege,
}

/// Rank tier of a title. `None` entries are dropped at bake time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TitleTier {
    /// Empty slot.
    #[default]
    None,
    /// Captain.
    Captain,
    /// Admiral.
    Admiral,
    /// Governor.
    Governor,
    /// High marshal.
    HighMarshal,
    /// Stellar lord.
    StellarLord,
    /// Interstellar lord.
    InterstellarLord,
    /// Stellarch.
    Stellarch,
    /// Grand stellarch.
    GrandStellarch,
}

/// How a title was earned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TitleType {
    /// Hero of a colony, faction, or empire.
    #[default]
    Hero,
    /// Renowned elite.
    Elite,
    /// Ruler.
    Ruler,
}

/// Prestige level of a title. Ordering is significant: a later variant
/// outranks an earlier one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TitleLevel {
    /// Not set; inferred from tier and type at bake time.
    #[default]
    None,
    /// Leader of an upstart band.
    BandLeader,
    /// Leader of a squad.
    SquadLeader,
    /// Leader of a company.
    CompanyLeader,
    /// Hero of a single colony.
    ColonyHero,
    /// Elite of a single colony.
    ColonyElite,
    /// Ruler of a single colony.
    ColonyRuler,
    /// Hero across a faction.
    FactionHero,
    /// Elite of a faction.
    FactionElite,
    /// Ruler of a faction.
    FactionRuler,
    /// Ruler of a world or system.
    WorldRuler,
    /// Ruler of several worlds.
    MultiWorldRuler,
    /// Hero across an empire.
    EmpireHero,
    /// Elite of an empire.
    EmpireElite,
    /// Ruler of an empire.
    EmpireRuler,
    /// Ruler of several empires.
    MultiEmpireRuler,
}

impl TitleLevel {
    /// Infer a level for a title whose level was left unset.
    pub const fn infer(tier: TitleTier, kind: TitleType) -> Self {
        match kind {
            TitleType::Hero => match tier {
                TitleTier::Captain => Self::BandLeader,
                TitleTier::Admiral => Self::FactionHero,
                _ => Self::ColonyHero,
            },
            TitleType::Elite => match tier {
                TitleTier::Captain => Self::SquadLeader,
                TitleTier::Admiral => Self::FactionElite,
                TitleTier::StellarLord => Self::EmpireElite,
                _ => Self::ColonyElite,
            },
            TitleType::Ruler => match tier {
                TitleTier::Captain => Self::BandLeader,
                TitleTier::HighMarshal => Self::FactionRuler,
                TitleTier::StellarLord => Self::WorldRuler,
                TitleTier::InterstellarLord => Self::MultiWorldRuler,
                TitleTier::Stellarch => Self::EmpireRuler,
                TitleTier::GrandStellarch => Self::MultiEmpireRuler,
                _ => Self::ColonyRuler,
            },
        }
    }

    /// This level, or the inferred one when unset.
    pub const fn or_infer(self, tier: TitleTier, kind: TitleType) -> Self {
        match self {
            Self::None => Self::infer(tier, kind),
            level => level,
        }
    }
}

/// Current standing of a title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TitleState {
    /// Currently held.
    #[default]
    Active,
    /// Lost.
    Lost,
    /// Taken by force.
    Usurped,
    /// Removed through an inheritance dispute.
    Disinherited,
    /// Officially revoked.
    Revoked,
    /// Former title that still carries prestige.
    Former,
}

// ---------------------------------------------------------------------------
// Vessels and command
// ---------------------------------------------------------------------------

/// Combat stance of a vessel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VesselStanceMode {
    /// Balanced (also used as neutral).
    #[default]
    Balanced,
    /// Defensive.
    Defensive,
    /// Aggressive.
    Aggressive,
    /// Evasive.
    Evasive,
}

/// Movement regime of a vessel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ManeuverMode {
    /// Long-range transit.
    #[default]
    Transit,
    /// Close maneuvering.
    Maneuver,
    /// Holding station.
    Anchor,
}

/// How far a captain may deviate from orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CaptainAutonomy {
    /// Strict adherence to orders.
    Strict,
    /// May adjust tactics within an order.
    #[default]
    Tactical,
    /// May reroute, delay, or request help.
    Operational,
    /// May abort, divert, or start new objectives.
    Strategic,
}

/// Named readiness threshold preset for a captain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadinessPreset {
    /// High thresholds, low threat tolerance.
    Strict,
    /// Middle-of-the-road thresholds.
    #[default]
    Standard,
    /// Low thresholds, high threat tolerance.
    Relaxed,
}

// ---------------------------------------------------------------------------
// Ship power
// ---------------------------------------------------------------------------

/// Reactor family fitted to a ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReactorType {
    /// Small fusion reactor.
    FusionMicro,
    /// Standard fusion reactor.
    #[default]
    FusionStandard,
    /// Heavy fusion reactor.
    FusionHeavy,
    /// Capital-scale antimatter reactor.
    AntimatterCapital,
}

/// Which subsystem receives priority power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShipPowerFocusMode {
    /// Even split.
    #[default]
    Balanced,
    /// Weapons first.
    Attack,
    /// Shields first.
    Defense,
    /// Engines first.
    Mobility,
    /// Stealth systems first.
    Stealth,
    /// Life support and shields only.
    Emergency,
}

/// Subsystem drawing ship power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShipPowerConsumerType {
    /// Engines and thrusters.
    #[default]
    Mobility,
    /// Weapons.
    Weapons,
    /// Shields.
    Shields,
    /// Sensors.
    Sensors,
    /// Stealth systems.
    Stealth,
    /// Life support.
    LifeSupport,
}

/// Reactor restart regime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RestartMode {
    /// Reactor is still warm.
    Hot,
    /// Reactor starts from cold.
    #[default]
    Cold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_defaults() {
        assert_eq!(FacilityArchetype::default(), FacilityArchetype::None);
        assert_eq!(ModuleFunction::default(), ModuleFunction::None);
        assert_eq!(PreordainTrack::default(), PreordainTrack::None);
        assert_eq!(ServiceTraitId::default(), ServiceTraitId::None);
        assert_eq!(TitleTier::default(), TitleTier::None);
    }

    #[test]
    fn title_level_inference() {
        assert_eq!(
            TitleLevel::infer(TitleTier::Captain, TitleType::Hero),
            TitleLevel::BandLeader
        );
        assert_eq!(
            TitleLevel::infer(TitleTier::StellarLord, TitleType::Elite),
            TitleLevel::EmpireElite
        );
        assert_eq!(
            TitleLevel::infer(TitleTier::GrandStellarch, TitleType::Ruler),
            TitleLevel::MultiEmpireRuler
        );
        assert_eq!(
            TitleLevel::infer(TitleTier::Governor, TitleType::Ruler),
            TitleLevel::ColonyRuler
        );
    }

    #[test]
    fn explicit_title_level_wins() {
        let level = TitleLevel::FactionRuler.or_infer(TitleTier::Captain, TitleType::Hero);
        assert_eq!(level, TitleLevel::FactionRuler);
    }

    #[test]
    fn title_levels_are_ordered() {
        assert!(TitleLevel::MultiEmpireRuler > TitleLevel::EmpireRuler);
        assert!(TitleLevel::BandLeader > TitleLevel::None);
    }

    #[test]
    fn enum_serializes_as_variant_name() {
        let json = serde_json::to_string(&OutlookId::Loyalist).unwrap_or_default();
        assert_eq!(json, "\"Loyalist\"");
    }
}
