//! Logistics board bootstrap.

use serde::{Deserialize, Serialize};
use shipwright_types::MarkerFlag;
use shipwright_types::records::{ClaimRequest, DemandEntry, LogisticsBoardConfig, Reservation};

use crate::context::BakeContext;
use crate::facet::Facet;
use crate::normalize::{ScalarRange, clamp_u16, clamp_u32, ordered_bounds_u32, to_half};

const BATCH_MIN: u32 = 1;
const BATCH_MAX: u32 = 10_000;
const RESERVATIONS_MAX: u16 = 4096;
const TTL_MIN: u32 = 1;
const TTL_MAX: u32 = 1_000_000;
const RESERVATION_FRACTION: ScalarRange = ScalarRange::UNIT.with_default(0.5);

/// Capacity bounds of a logistics board. The demand ledger, reservation
/// list, and claim queue start empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringLogisticsBoard {
    /// Smallest batch a hauler takes.
    pub min_batch: i64,
    /// Largest batch a hauler takes.
    pub max_batch: i64,
    /// Open reservations allowed at once.
    pub max_reservations: i64,
    /// Ticks a claim stays valid.
    pub claim_ttl_ticks: i64,
    /// Share of stock that may be reserved.
    pub reservation_fraction: f32,
}

impl Default for AuthoringLogisticsBoard {
    fn default() -> Self {
        Self {
            min_batch: 10,
            max_batch: 500,
            max_reservations: 64,
            claim_ttl_ticks: 600,
            reservation_fraction: RESERVATION_FRACTION.default,
        }
    }
}

impl AuthoringLogisticsBoard {
    /// Clamped board configuration.
    pub fn config(&self) -> LogisticsBoardConfig {
        let (min_batch, max_batch) = ordered_bounds_u32(
            clamp_u32(self.min_batch, BATCH_MIN, BATCH_MAX),
            clamp_u32(self.max_batch, BATCH_MIN, BATCH_MAX),
        );
        LogisticsBoardConfig {
            min_batch,
            max_batch,
            max_reservations: clamp_u16(self.max_reservations, 0, RESERVATIONS_MAX),
            claim_ttl_ticks: clamp_u32(self.claim_ttl_ticks, TTL_MIN, TTL_MAX),
            reservation_fraction: to_half(self.reservation_fraction, RESERVATION_FRACTION),
        }
    }
}

impl Facet for AuthoringLogisticsBoard {
    const NAME: &'static str = "logistics_board";

    fn bake(&self, ctx: &mut BakeContext<'_>) {
        ctx.flag(MarkerFlag::LogisticsBoard);
        ctx.emit(self.config());
        ctx.emit(Vec::<DemandEntry>::new());
        ctx.emit(Vec::<Reservation>::new());
        ctx.emit(Vec::<ClaimRequest>::new());
    }
}
