#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic player automaton that turns published views into moves.
//!
//! The bot is a pure system: it consumes the vision-limited [`ViewData`]
//! published for its player and responds with a single direction per turn.
//! It greedily steps toward the most attractive visible coin, falling back to
//! a seeded random walk when no coin is in sight, so matches replay
//! identically for a given seed.

use coin_clash_core::{CellCoord, CoinTier, Direction, ViewData};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pure system that decides one move per published view.
#[derive(Debug)]
pub struct Bot {
    rng: ChaCha8Rng,
}

impl Bot {
    /// Creates a bot whose random fallback walk derives from the seed.
    #[must_use]
    pub fn new(rng_seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
        }
    }

    /// Picks the direction to submit for the current turn.
    ///
    /// Preference order: close the distance to the best visible coin through
    /// a cell not blocked by a wall or another player; otherwise wander
    /// randomly. A random step may leave the grid or hit an obstacle, which
    /// the simulation treats as a wasted turn.
    pub fn decide(&mut self, view: &ViewData) -> Direction {
        if let Some(target) = best_coin(view) {
            if let Some(direction) = step_toward(view, target) {
                return direction;
            }
        }
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Selects the most attractive visible coin: nearest first, richer tier as
/// the tie-break, then row/column order so the choice is deterministic.
fn best_coin(view: &ViewData) -> Option<CellCoord> {
    let position = view.current_position;
    let mut best: Option<(u32, u32, u32, u32, CellCoord)> = None;

    for tier in CoinTier::ALL {
        for &cell in view.coin_positions(tier) {
            let rank = (
                position.manhattan_distance(cell),
                CoinTier::Three.value() - tier.value(),
                cell.row(),
                cell.column(),
                cell,
            );
            best = Some(match best {
                None => rank,
                Some(current) if rank < current => rank,
                Some(current) => current,
            });
        }
    }

    best.map(|(_, _, _, _, cell)| cell)
}

/// Picks a direction that closes the distance to `target` through an
/// unblocked cell, if one exists.
fn step_toward(view: &ViewData, target: CellCoord) -> Option<Direction> {
    let position = view.current_position;
    let current_distance = position.manhattan_distance(target);
    let mut best: Option<(u32, usize)> = None;

    for (index, direction) in Direction::ALL.into_iter().enumerate() {
        // The bot never learns the grid bounds; candidates that close the
        // distance to an in-bounds coin are in-bounds themselves, so only
        // underflow needs guarding here.
        let Some(cell) = direction.offset(position, u32::MAX, u32::MAX) else {
            continue;
        };
        if is_blocked(view, cell) {
            continue;
        }

        let distance = cell.manhattan_distance(target);
        if distance >= current_distance {
            continue;
        }

        let rank = (distance, index);
        best = Some(match best {
            None => rank,
            Some(current) if rank < current => rank,
            Some(current) => current,
        });
    }

    best.map(|(_, index)| Direction::ALL[index])
}

fn is_blocked(view: &ViewData, cell: CellCoord) -> bool {
    view.walls.contains(&cell)
        || view.enemy_positions.contains(&cell)
        || view
            .teammates
            .iter()
            .any(|teammate| teammate.position == cell)
}
