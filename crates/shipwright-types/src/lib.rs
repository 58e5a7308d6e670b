//! Shared runtime vocabulary for the Shipwright bake pipeline.
//!
//! This crate defines the data that flows out of a bake and into the
//! simulation: target identities, bounded identifier strings, closed
//! enumerations, runtime records, and marker flags. It holds no bake
//! logic; normalization lives in `shipwright-bake`.

pub mod enums;
pub mod fixed;
pub mod ids;
pub mod records;

pub use enums::*;
pub use fixed::{FixedId, FixedIdError, LONG_ID_BYTES, LongId, SHORT_ID_BYTES, ShortId};
pub use half::f16;
pub use ids::{BakeRunId, EntityId};
pub use records::{MarkerFlag, RecordKind, RuntimeRecord};
