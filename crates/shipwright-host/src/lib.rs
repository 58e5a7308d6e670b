//! Host adapter for the Shipwright bake pipeline.
//!
//! The bake itself is pure. This crate is the thin layer around it that
//! reads scene documents, fans baking out across threads, and applies the
//! results to an entity store.
//!
//! # Modules
//!
//! - [`scene`] -- Scene documents, sequential and parallel scene baking.
//! - [`store`] -- The [`EntityStore`] seam and [`InMemoryWorld`].
//! - [`apply`] -- [`apply_output`], attaching one bake to one entity.
//! - [`error`] -- [`HostError`].

pub mod apply;
pub mod error;
pub mod scene;
pub mod store;

pub use apply::{ApplyReport, apply_output};
pub use error::HostError;
pub use scene::{Scene, SceneSummary, TargetBake, apply_scene, bake_scene, bake_scene_parallel};
pub use store::{EntityRecords, EntityStore, InMemoryWorld};
