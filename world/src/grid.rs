//! Grid storage and procedural map generation.

use coin_clash_core::{CellCoord, CoinTier};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::simulation::PlayerId;

const DEFAULT_HEIGHT: u32 = 10;
const DEFAULT_WIDTH: u32 = 10;
const DEFAULT_WALL_RATIO: RatioBand = RatioBand::new(0.1, 0.3);
const DEFAULT_COIN_RATIO: RatioBand = RatioBand::new(0.1, 0.2);

/// Contents of a single grid cell. Cells hold at most one occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    /// Impassable wall.
    Wall,
    /// Collectible coin of the carried tier.
    Coin(CoinTier),
    /// A player, referenced by simulation player identifier.
    Player(PlayerId),
}

/// Inclusive lower and upper bounds on a randomized share of cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioBand {
    min: f64,
    max: f64,
}

impl RatioBand {
    /// Creates a new ratio band. Callers supply `0.0 <= min <= max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound of the band.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the band.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Draws a uniform count from the band applied to `base` items.
    fn sample_count<R: Rng>(&self, rng: &mut R, base: usize) -> usize {
        let lower = (self.min * base as f64) as usize;
        let upper = (self.max * base as f64) as usize;
        rng.gen_range(lower..=upper.max(lower))
    }
}

/// Configuration for procedural map generation.
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Number of rows in the grid.
    pub height: u32,
    /// Number of columns in the grid.
    pub width: u32,
    /// Bounds on the share of grid cells converted into walls.
    pub wall_ratio: RatioBand,
    /// Bounds on the share of empty-after-walls-and-players cells converted
    /// into coins.
    pub coin_ratio: RatioBand,
    /// Fixed wall layout sampled without replacement instead of free random
    /// placement. Duplicate and out-of-range coordinates are ignored.
    pub wall_layout: Option<Vec<CellCoord>>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            wall_ratio: DEFAULT_WALL_RATIO,
            coin_ratio: DEFAULT_COIN_RATIO,
            wall_layout: None,
        }
    }
}

/// Reasons map generation may fail.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// More players were supplied than the grid had empty cells left for.
    #[error("cannot place {players} players on a {height}x{width} grid after walls")]
    NotEnoughSpace {
        /// Number of players requested.
        players: u32,
        /// Grid height the generation ran against.
        height: u32,
        /// Grid width the generation ran against.
        width: u32,
    },
}

/// Dense height×width matrix of optional occupants.
///
/// `get` and `set` are O(1) and perform no occupancy-exclusivity checks; the
/// simulation owns that invariant. Cells outside the grid read as empty and
/// writes to them are ignored.
#[derive(Clone, Debug)]
pub struct Grid {
    height: u32,
    width: u32,
    cells: Vec<Option<Occupant>>,
}

impl Grid {
    /// Creates an empty grid with the provided dimensions.
    #[must_use]
    pub fn new(height: u32, width: u32) -> Self {
        let capacity_u64 = u64::from(height) * u64::from(width);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            height,
            width,
            cells: vec![None; capacity],
        }
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Reports whether the cell lies inside the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.row() < self.height && cell.column() < self.width
    }

    /// Returns the occupant of the provided cell, if any.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<Occupant> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Places an occupant into the provided cell.
    pub fn set(&mut self, cell: CellCoord, occupant: Occupant) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = Some(occupant);
            }
        }
    }

    /// Empties the provided cell.
    pub fn clear(&mut self, cell: CellCoord) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = None;
            }
        }
    }

    /// Iterates every cell together with its occupant in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (CellCoord, Option<Occupant>)> + '_ {
        self.cells.iter().enumerate().map(|(index, occupant)| {
            let index = index as u32;
            let cell = CellCoord::new(index / self.width, index % self.width);
            (cell, *occupant)
        })
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.in_bounds(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Result of a successful map generation pass.
#[derive(Debug)]
pub struct Generation {
    /// The populated grid.
    pub grid: Grid,
    /// Cell assigned to each player, indexed by player identifier.
    pub player_cells: Vec<CellCoord>,
    /// Number of coins placed; the simulation's live counter starts here.
    pub coins_placed: u32,
}

/// Procedurally fills a grid with walls, players and coins.
///
/// Walls land first (from the fixed layout when one is configured, at
/// uniformly random empty cells otherwise), players second at uniformly
/// random empty cells in identifier order, coins last with tier weights 6:3:1.
pub fn generate<R: Rng>(
    rng: &mut R,
    config: &GridConfig,
    player_count: u32,
) -> Result<Generation, GenerateError> {
    let mut grid = Grid::new(config.height, config.width);
    let cell_count = grid.cells.len();

    match &config.wall_layout {
        Some(layout) => {
            let mut pool: Vec<CellCoord> = layout
                .iter()
                .copied()
                .filter(|cell| grid.in_bounds(*cell))
                .collect();
            pool.sort_unstable();
            pool.dedup();
            pool.shuffle(rng);

            let implied_minimum = (config.wall_ratio.min() * cell_count as f64) as usize;
            let lower = implied_minimum.min(pool.len());
            let count = rng.gen_range(lower..=pool.len());
            for cell in pool.into_iter().take(count) {
                grid.set(cell, Occupant::Wall);
            }
        }
        None => {
            let mut empties: Vec<CellCoord> = grid
                .occupants()
                .filter_map(|(cell, occupant)| occupant.is_none().then_some(cell))
                .collect();
            let count = config
                .wall_ratio
                .sample_count(rng, cell_count)
                .min(empties.len());
            for _ in 0..count {
                let cell = take_random(rng, &mut empties);
                grid.set(cell, Occupant::Wall);
            }
        }
    }

    let mut empties: Vec<CellCoord> = grid
        .occupants()
        .filter_map(|(cell, occupant)| occupant.is_none().then_some(cell))
        .collect();

    let mut player_cells = Vec::with_capacity(player_count as usize);
    for id in 0..player_count {
        if empties.is_empty() {
            return Err(GenerateError::NotEnoughSpace {
                players: player_count,
                height: config.height,
                width: config.width,
            });
        }
        let cell = take_random(rng, &mut empties);
        grid.set(cell, Occupant::Player(PlayerId::new(id)));
        player_cells.push(cell);
    }

    let coin_count = config.coin_ratio.sample_count(rng, empties.len());
    for _ in 0..coin_count {
        let cell = take_random(rng, &mut empties);
        grid.set(cell, Occupant::Coin(roll_tier(rng)));
    }

    Ok(Generation {
        grid,
        player_cells,
        coins_placed: coin_count as u32,
    })
}

fn take_random<R: Rng>(rng: &mut R, empties: &mut Vec<CellCoord>) -> CellCoord {
    let index = rng.gen_range(0..empties.len());
    empties.swap_remove(index)
}

fn roll_tier<R: Rng>(rng: &mut R) -> CoinTier {
    let wheel: u32 = CoinTier::ALL.iter().map(|tier| tier.spawn_weight()).sum();
    let mut roll = rng.gen_range(0..wheel);
    for tier in CoinTier::ALL {
        if roll < tier.spawn_weight() {
            return tier;
        }
        roll -= tier.spawn_weight();
    }
    CoinTier::One
}
