//! Identity records: catalog references, numeric ids, and tier tags.
//!
//! Catalog ids are opaque here. Resolving a hull id to hull stats is left
//! to whatever consumes the record.

use serde::{Deserialize, Serialize};

use crate::enums::AggregateType;
use crate::fixed::{LongId, ShortId};

/// Generates a single-field record wrapping a bounded or numeric id.
macro_rules! id_record {
    ( $( $(#[$meta:meta])* $name:ident($inner:ty); )+ ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name(pub $inner);
        )+
    };
}

id_record! {
    /// Catalog id of a hull.
    HullId(LongId);
    /// Catalog id of a module type.
    ModuleTypeId(LongId);
    /// Catalog id of a resource.
    ResourceId(LongId);
    /// Catalog id of a manufactured product.
    ProductId(LongId);
    /// Catalog id of an effect.
    EffectId(LongId);
    /// Id of an aggregate organization.
    AggregateId(LongId);
    /// Id of a family lineage.
    LineageId(LongId);
    /// Id of the manufacturer that built a module.
    ModuleManufacturer(LongId);
    /// Species id of a sentient individual.
    SentientAnatomy(LongId);
    /// Minimum tech tier needed to fit a module. Only present when above zero.
    RequiredTechTier(u8);
    /// Technology tier of an entity.
    TechTier(u8);
    /// Numeric culture id.
    CultureId(u16);
    /// Numeric race id.
    RaceId(u16);
    /// Kind of aggregate organization.
    AggregateTypeRecord(AggregateType);
}

/// Profile ids an aggregate was composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComposedAggregateProfile {
    /// Aggregate template id.
    pub template_id: ShortId,
    /// Outlook profile id.
    pub outlook_id: ShortId,
    /// Alignment profile id.
    pub alignment_id: ShortId,
    /// Personality profile id.
    pub personality_id: ShortId,
    /// Theme profile id.
    pub theme_id: ShortId,
}
