//! Per-facet authoring records and bake rules, grouped by domain.
//!
//! - [`identity`] -- catalog ids, numeric ids, tech tier, aggregate profile.
//! - [`alignment`] -- alignment triplet, ethic axes, outlooks, doctrine,
//!   covert role.
//! - [`individual`] -- stats, physique, augmentation, expertise, traits,
//!   preordained track, titles.
//! - [`relations`] -- loyalty, affiliations, ownership, patronage,
//!   mentorship, successors, contract, reputation.
//! - [`module`] -- module quality, rarity, function, facility, hull variant.
//! - [`vessel`] -- vessel quality, stance, captain readiness, capital ship
//!   and carrier bootstraps.
//! - [`power`] -- reactor, grid, battery, and consumers.
//! - [`logistics`] -- logistics board bootstrap.
//! - [`strike_craft`] -- dogfight, pilot, and wing configs.

pub mod alignment;
pub mod identity;
pub mod individual;
pub mod logistics;
pub mod module;
pub mod power;
pub mod relations;
pub mod strike_craft;
pub mod vessel;
