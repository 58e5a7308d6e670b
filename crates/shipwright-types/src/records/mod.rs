//! Runtime records and marker flags.
//!
//! A [`RuntimeRecord`] is the validated, fixed-layout output of a bake. It
//! is a closed enum so that hosts can store any record uniformly and
//! enforce "at most one record of each kind per target" through
//! [`RecordKind`]. Ordered collections are list variants holding a `Vec`
//! of elements in authoring order.
//!
//! [`MarkerFlag`] covers payload-free tags such as "this is a capital
//! ship".

pub mod character;
pub mod identity;
pub mod vessel;

use serde::{Deserialize, Serialize};

pub use character::*;
pub use identity::*;
pub use vessel::*;

/// Generates [`RuntimeRecord`], [`RecordKind`], and one `From` impl per
/// payload. Every payload type must be unique.
macro_rules! define_records {
    ( $( $(#[$meta:meta])* $variant:ident($payload:ty), )+ ) => {
        /// A validated runtime record ready to attach to a target identity.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind", content = "value")]
        pub enum RuntimeRecord {
            $( $(#[$meta])* $variant($payload), )+
        }

        /// Discriminant of a [`RuntimeRecord`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum RecordKind {
            $( $(#[$meta])* $variant, )+
        }

        impl RuntimeRecord {
            /// The kind of this record.
            pub const fn kind(&self) -> RecordKind {
                match self {
                    $( Self::$variant(_) => RecordKind::$variant, )+
                }
            }
        }

        $(
            impl From<$payload> for RuntimeRecord {
                fn from(record: $payload) -> Self {
                    Self::$variant(record)
                }
            }
        )+
    };
}

define_records! {
    // --- Identity ---
    /// Hull catalog id.
    HullId(HullId),
    /// Module type catalog id.
    ModuleTypeId(ModuleTypeId),
    /// Tech tier needed to fit a module.
    RequiredTechTier(RequiredTechTier),
    /// Resource catalog id.
    ResourceId(ResourceId),
    /// Product catalog id.
    ProductId(ProductId),
    /// Effect catalog id.
    EffectId(EffectId),
    /// Aggregate id.
    AggregateId(AggregateId),
    /// Lineage id.
    LineageId(LineageId),
    /// Module manufacturer id.
    ModuleManufacturer(ModuleManufacturer),
    /// Species id.
    SentientAnatomy(SentientAnatomy),
    /// Culture id.
    CultureId(CultureId),
    /// Race id.
    RaceId(RaceId),
    /// Tech tier.
    TechTier(TechTier),
    /// Aggregate kind.
    AggregateType(AggregateTypeRecord),
    /// Aggregate profile composition.
    ComposedAggregateProfile(ComposedAggregateProfile),

    // --- Alignment and doctrine ---
    /// Alignment triplet.
    AlignmentTriplet(AlignmentTriplet),
    /// Non-zero ethic axis convictions.
    EthicAxisValues(Vec<EthicAxisValue>),
    /// Non-zero outlook weights.
    OutlookEntries(Vec<OutlookEntry>),
    /// Doctrine profile.
    DoctrineProfile(DoctrineProfile),
    /// Doctrine axis ranges.
    DoctrineAxisExpectations(Vec<DoctrineAxisExpectation>),
    /// Doctrine outlook minimums.
    DoctrineOutlookExpectations(Vec<DoctrineOutlookExpectation>),
    /// Covert operative suspicion.
    SuspicionScore(SuspicionScore),

    // --- Individuals ---
    /// Officer stats.
    IndividualStats(IndividualStats),
    /// Physique, finesse, and will.
    PhysiqueFinesseWill(PhysiqueFinesseWill),
    /// Augmentation totals.
    AugmentationStats(AugmentationStats),
    /// Expertise tiers.
    ExpertiseEntries(Vec<ExpertiseEntry>),
    /// Service traits.
    ServiceTraits(Vec<ServiceTrait>),
    /// Preordained track.
    PreordainProfile(PreordainProfile),
    /// Titles.
    TitleEntries(Vec<TitleEntry>),
    /// Highest active title.
    HighestTitle(HighestTitle),
    /// Highest former title.
    HighestFormerTitle(HighestFormerTitle),

    // --- Relationships ---
    /// Loyalty scores.
    LoyaltyScores(Vec<LoyaltyScore>),
    /// Affiliation tags.
    AffiliationTags(Vec<AffiliationTag>),
    /// Ownership stakes.
    OwnershipStakes(Vec<OwnershipStake>),
    /// Patronage memberships.
    PatronageMemberships(Vec<PatronageMembership>),
    /// Mentor.
    Mentor(Mentor),
    /// Mentees.
    Mentees(Vec<Mentee>),
    /// Successors.
    Successors(Vec<SuccessorEntry>),
    /// Service contract.
    Contract(Contract),
    /// Reputation and prestige.
    Reputation(Reputation),

    // --- Modules ---
    /// Module quality.
    ModuleQuality(ModuleQuality),
    /// Module tier.
    ModuleTier(ModuleTier),
    /// Module rarity.
    ModuleRarity(ModuleRarityRecord),
    /// Hull variant.
    HullVariant(HullVariantRecord),
    /// Facility archetype.
    FacilityArchetype(FacilityArchetypeRecord),
    /// Facility tier.
    FacilityTier(FacilityTierRecord),
    /// Module function.
    ModuleFunctionData(ModuleFunctionData),

    // --- Vessels ---
    /// Vessel quality.
    VesselQuality(VesselQuality),
    /// Vessel stance.
    VesselStance(VesselStance),
    /// Maneuver defaults.
    ManeuverProfile(ManeuverProfile),
    /// Captain readiness thresholds.
    CaptainReadiness(CaptainReadiness),
    /// Captain state.
    CaptainState(CaptainState),
    /// Captain order queue.
    CaptainOrderQueue(Vec<CaptainOrder>),
    /// Ship power budget.
    ShipPowerBudget(ShipPowerBudget),
    /// Hangar capacity.
    HangarCapacity(HangarCapacity),
    /// Hangar roster.
    HangarRoster(Vec<HangarSlot>),

    // --- Power ---
    /// Reactor output state.
    PowerGenerator(PowerGenerator),
    /// Power grid state.
    PowerDistribution(PowerDistribution),
    /// Battery.
    PowerBattery(PowerBattery),
    /// Reactor spec.
    ShipReactorSpec(ShipReactorSpec),
    /// Power focus.
    ShipPowerFocus(ShipPowerFocus),
    /// Restart state.
    RestartState(RestartState),
    /// Enabled power consumers.
    ShipPowerConsumers(Vec<ShipPowerConsumer>),
    /// Special energy scaling.
    ShipSpecialEnergyConfig(ShipSpecialEnergyConfig),
    /// Special energy pool.
    ShipSpecialEnergyState(ShipSpecialEnergyState),
    /// Passive special energy bonuses.
    SpecialEnergyModifiers(Vec<SpecialEnergyModifier>),
    /// Pending special energy spends.
    SpecialEnergySpendRequests(Vec<SpecialEnergySpendRequest>),

    // --- Logistics ---
    /// Logistics board bounds.
    LogisticsBoardConfig(LogisticsBoardConfig),
    /// Demand ledger.
    DemandLedger(Vec<DemandEntry>),
    /// Reservations.
    ReservationList(Vec<Reservation>),
    /// Claim requests.
    ClaimRequestList(Vec<ClaimRequest>),

    // --- Strike craft ---
    /// Dogfight rules.
    StrikeCraftDogfightConfig(StrikeCraftDogfightConfig),
    /// Pilot allegiance rules.
    StrikeCraftPilotProfileConfig(StrikeCraftPilotProfileConfig),
    /// Wing decision rules.
    StrikeCraftWingDecisionConfig(StrikeCraftWingDecisionConfig),
}

impl RuntimeRecord {
    /// Number of elements for list records, `None` for single records.
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Self::EthicAxisValues(v) => Some(v.len()),
            Self::OutlookEntries(v) => Some(v.len()),
            Self::DoctrineAxisExpectations(v) => Some(v.len()),
            Self::DoctrineOutlookExpectations(v) => Some(v.len()),
            Self::ExpertiseEntries(v) => Some(v.len()),
            Self::ServiceTraits(v) => Some(v.len()),
            Self::TitleEntries(v) => Some(v.len()),
            Self::LoyaltyScores(v) => Some(v.len()),
            Self::AffiliationTags(v) => Some(v.len()),
            Self::OwnershipStakes(v) => Some(v.len()),
            Self::PatronageMemberships(v) => Some(v.len()),
            Self::Mentees(v) => Some(v.len()),
            Self::Successors(v) => Some(v.len()),
            Self::CaptainOrderQueue(v) => Some(v.len()),
            Self::HangarRoster(v) => Some(v.len()),
            Self::ShipPowerConsumers(v) => Some(v.len()),
            Self::SpecialEnergyModifiers(v) => Some(v.len()),
            Self::SpecialEnergySpendRequests(v) => Some(v.len()),
            Self::DemandLedger(v) => Some(v.len()),
            Self::ReservationList(v) => Some(v.len()),
            Self::ClaimRequestList(v) => Some(v.len()),
            _ => None,
        }
    }
}

/// Payload-free tag attached to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarkerFlag {
    /// The target is a capital ship.
    CapitalShip,
    /// The target carries strike craft.
    Carrier,
    /// The target is a covert operative.
    SpyRole,
    /// The target runs a logistics board.
    LogisticsBoard,
    /// The target is a strike craft.
    StrikeCraft,
}
