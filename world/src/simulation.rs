//! Authoritative per-match state: the grid plus the team and player snapshot
//! taken when a lobby starts.

use coin_clash_core::{CellCoord, Direction, ScoreBoard};
use rand::Rng;

use crate::grid::{self, GenerateError, Grid, GridConfig, Occupant};

/// Identifier of a player within one simulation, assigned in join order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a new player identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Ordered roster of one team's player names.
///
/// Rosters accumulate while a lobby is forming; match start snapshots them
/// into a [`Simulation`] without aliasing the live registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRoster {
    name: String,
    members: Vec<String>,
}

impl TeamRoster {
    /// Creates a roster for the named team with the provided members.
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Name of the team.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Player names on the team, in join order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub(crate) fn push_member(&mut self, player_name: String) {
        self.members.push(player_name);
    }
}

#[derive(Debug)]
struct Team {
    name: String,
    score: u32,
}

#[derive(Debug)]
struct Player {
    name: String,
    team: usize,
    cell: CellCoord,
}

/// Owns the grid and the team/player snapshot for one started lobby.
#[derive(Debug)]
pub(crate) struct Simulation {
    grid: Grid,
    teams: Vec<Team>,
    players: Vec<Player>,
    coins_remaining: u32,
}

impl Simulation {
    /// Builds a simulation from a roster snapshot over a freshly generated
    /// grid. Players receive identifiers in roster order: team by team, each
    /// team's members in join order.
    pub(crate) fn new<R: Rng>(
        rng: &mut R,
        config: &GridConfig,
        rosters: &[TeamRoster],
    ) -> Result<Self, GenerateError> {
        let mut teams = Vec::with_capacity(rosters.len());
        let mut players = Vec::new();
        for (team_index, roster) in rosters.iter().enumerate() {
            teams.push(Team {
                name: roster.name().to_owned(),
                score: 0,
            });
            for member in roster.members() {
                players.push(Player {
                    name: member.clone(),
                    team: team_index,
                    cell: CellCoord::new(0, 0),
                });
            }
        }

        let generation = grid::generate(rng, config, players.len() as u32)?;
        for (player, cell) in players.iter_mut().zip(&generation.player_cells) {
            player.cell = *cell;
        }

        Ok(Self {
            grid: generation.grid,
            teams,
            players,
            coins_remaining: generation.coins_placed,
        })
    }

    /// Applies a single player's move.
    ///
    /// Illegal targets (off-grid, wall, occupied by another player) are silent
    /// no-ops: a wasted turn is valid gameplay. Stepping onto a coin awards
    /// its tier value to the mover's team and decrements the live counter.
    ///
    /// # Panics
    ///
    /// Panics when `player_name` is not part of this simulation. The
    /// coordinator only records moves for known players, so reaching this is
    /// a programming error.
    pub(crate) fn apply_move(&mut self, player_name: &str, direction: Direction) {
        let Some(index) = self.player_index(player_name) else {
            panic!("apply_move called for unknown player {player_name}");
        };

        let source = self.players[index].cell;
        let Some(target) = direction.offset(source, self.grid.height(), self.grid.width()) else {
            return;
        };

        match self.grid.get(target) {
            Some(Occupant::Wall | Occupant::Player(_)) => return,
            Some(Occupant::Coin(tier)) => {
                let team = self.players[index].team;
                self.teams[team].score += tier.value();
                self.coins_remaining = self.coins_remaining.saturating_sub(1);
            }
            None => {}
        }

        self.grid.clear(source);
        self.grid.set(target, Occupant::Player(PlayerId::new(index as u32)));
        self.players[index].cell = target;
    }

    /// True once the last coin has been collected.
    pub(crate) fn game_over(&self) -> bool {
        self.coins_remaining == 0
    }

    /// Snapshot of the current team scores, independent of later mutation.
    pub(crate) fn scores(&self) -> ScoreBoard {
        self.teams
            .iter()
            .map(|team| (team.name.clone(), team.score))
            .collect()
    }

    pub(crate) fn coins_remaining(&self) -> u32 {
        self.coins_remaining
    }

    pub(crate) fn player_count(&self) -> usize {
        self.players.len()
    }

    pub(crate) fn contains_player(&self, player_name: &str) -> bool {
        self.player_index(player_name).is_some()
    }

    pub(crate) fn player_index(&self, player_name: &str) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.name == player_name)
    }

    pub(crate) fn player_name(&self, index: usize) -> &str {
        &self.players[index].name
    }

    pub(crate) fn player_cell(&self, index: usize) -> CellCoord {
        self.players[index].cell
    }

    pub(crate) fn player_team(&self, index: usize) -> usize {
        self.players[index].team
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Test constructor over a hand-built grid. Players are written into the
    /// grid at the provided cells; `rosters` and `player_cells` must flatten
    /// to the same length.
    #[cfg(test)]
    pub(crate) fn from_parts(
        mut grid: Grid,
        rosters: &[TeamRoster],
        player_cells: &[CellCoord],
        coins_remaining: u32,
    ) -> Self {
        let mut teams = Vec::with_capacity(rosters.len());
        let mut players = Vec::new();
        for (team_index, roster) in rosters.iter().enumerate() {
            teams.push(Team {
                name: roster.name().to_owned(),
                score: 0,
            });
            for member in roster.members() {
                players.push(Player {
                    name: member.clone(),
                    team: team_index,
                    cell: CellCoord::new(0, 0),
                });
            }
        }
        assert_eq!(players.len(), player_cells.len());
        for (index, (player, cell)) in players.iter_mut().zip(player_cells).enumerate() {
            player.cell = *cell;
            grid.set(*cell, Occupant::Player(PlayerId::new(index as u32)));
        }

        Self {
            grid,
            teams,
            players,
            coins_remaining,
        }
    }
}
