//! Authoring-to-runtime bake pipeline.
//!
//! Designers edit loosely-typed authoring facets; this crate turns each one
//! into compact runtime records under one shared rule set. Baking is pure:
//! no I/O, no global state, and the same input always yields the same
//! output.
//!
//! # Modules
//!
//! - [`normalize`] -- Clamp, half-precision, saturation, sparse filter, and
//!   identifier trimming rules.
//! - [`context`] -- [`BakeContext`], the emitter a facet writes into.
//! - [`facet`] -- The [`Facet`] trait, [`AuthoredFacet`], and whole-object
//!   baking.
//! - [`facets`] -- Authoring records and bake rules per domain.
//! - [`output`] -- [`BakeOutput`], the records, flags, and warnings of one
//!   bake.
//! - [`error`] -- [`BakeWarning`] diagnostics.

pub mod context;
pub mod error;
pub mod facet;
pub mod facets;
pub mod normalize;
pub mod output;

pub use context::BakeContext;
pub use error::BakeWarning;
pub use facet::{AuthoredFacet, AuthoringObject, Facet, bake_facet, bake_object};
pub use normalize::{SPARSE_EPSILON, ScalarRange};
pub use output::BakeOutput;
