//! Scoring module - points for removed tiles
//!
//! Every cascade pass is one scoring event: the deduplicated match set of that
//! pass is worth `points_per_tile` per tile. A tile sitting on both a row run
//! and a column run is removed once and scored once.

/// Points for one cascade pass that removed `removed` tiles
pub fn pass_score(removed: usize, points_per_tile: u32) -> u32 {
    u32::try_from(removed)
        .unwrap_or(u32::MAX)
        .saturating_mul(points_per_tile)
}
