#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Coin Clash engine.
//!
//! This crate defines the message surface that connects the transport
//! adapters, the authoritative world, and pure systems. Adapters translate
//! inbound broker messages into [`Command`] values, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that adapters render back onto outbound topics. Systems consume published
//! views and respond exclusively with new command batches.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on lobby, team and player name lengths accepted over the wire.
pub const MAX_NAME_LENGTH: usize = 20;

/// Location of a single grid cell expressed as row and column coordinates.
///
/// Serializes as a `[row, column]` pair so published views match the wire
/// format consumed by player clients.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Computes the Chebyshev distance between two cell coordinates.
    #[must_use]
    pub fn chebyshev_distance(self, other: CellCoord) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.column.abs_diff(other.column))
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }
}

impl From<(u32, u32)> for CellCoord {
    fn from(value: (u32, u32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<CellCoord> for (u32, u32) {
    fn from(value: CellCoord) -> Self {
        (value.row, value.column)
    }
}

/// Cardinal movement directions available to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// All directions in wire-token order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column delta applied when stepping in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Applies the direction to `cell`, returning the target cell if it lies
    /// inside a `height`×`width` grid.
    #[must_use]
    pub fn offset(self, cell: CellCoord, height: u32, width: u32) -> Option<CellCoord> {
        let (row_delta, column_delta) = self.delta();
        let row = checked_offset(cell.row(), row_delta)?;
        let column = checked_offset(cell.column(), column_delta)?;
        if row < height && column < width {
            Some(CellCoord::new(row, column))
        } else {
            None
        }
    }

    /// Wire token published on move topics for this direction.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Parses a wire token into a direction, if it names one.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "UP" => Some(Direction::Up),
            "DOWN" => Some(Direction::Down),
            "LEFT" => Some(Direction::Left),
            "RIGHT" => Some(Direction::Right),
            _ => None,
        }
    }
}

fn checked_offset(value: u32, delta: i32) -> Option<u32> {
    if delta.is_negative() {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta.unsigned_abs())
    }
}

/// Score tier of a coin, doubling as its relative spawn rarity class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoinTier {
    /// Common coin worth one point.
    One,
    /// Uncommon coin worth two points.
    Two,
    /// Rare coin worth three points.
    Three,
}

impl CoinTier {
    /// All tiers ordered from most to least common.
    pub const ALL: [CoinTier; 3] = [CoinTier::One, CoinTier::Two, CoinTier::Three];

    /// Score awarded to the collecting player's team.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            CoinTier::One => 1,
            CoinTier::Two => 2,
            CoinTier::Three => 3,
        }
    }

    /// Relative spawn weight used during map generation (6:3:1).
    #[must_use]
    pub const fn spawn_weight(self) -> u32 {
        match self {
            CoinTier::One => 6,
            CoinTier::Two => 3,
            CoinTier::Three => 1,
        }
    }
}

/// Join payload published on the `new_game` topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    /// Name of the lobby the player wants to join, created on first use.
    pub lobby_name: String,
    /// Name of the team inside the lobby, created on first use.
    pub team_name: String,
    /// Name of the joining player, unique within the lobby.
    pub player_name: String,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Adds a player to a lobby's team registry, creating lobby and team as
    /// needed.
    Join {
        /// Lobby the player joins.
        lobby_name: String,
        /// Team the player joins within the lobby.
        team_name: String,
        /// Name of the joining player.
        player_name: String,
    },
    /// Starts the named lobby's match from a snapshot of its team registry.
    Start {
        /// Lobby to start.
        lobby_name: String,
    },
    /// Force-terminates the named lobby, purging all of its state.
    Stop {
        /// Lobby to terminate.
        lobby_name: String,
    },
    /// Records a player's move for the current turn of a started lobby.
    Move {
        /// Lobby the move belongs to.
        lobby_name: String,
        /// Player submitting the move.
        player_name: String,
        /// Direction the player wants to step in.
        direction: Direction,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A fresh vision-limited view was computed for one player.
    ViewUpdated {
        /// Lobby the view belongs to.
        lobby_name: String,
        /// Player the view was computed for.
        player_name: String,
        /// The clipped, classified view of the grid around the player.
        view: ViewData,
    },
    /// The lobby's team scores were snapshotted after a resolved turn.
    ScoresUpdated {
        /// Lobby the scores belong to.
        lobby_name: String,
        /// Team name to cumulative score mapping.
        scores: ScoreBoard,
    },
    /// A human-readable status or error notice was posted to the lobby.
    NoticePosted {
        /// Lobby the notice addresses.
        lobby_name: String,
        /// The notice being posted.
        notice: Notice,
    },
}

/// Team name to cumulative score mapping published on the scores topic.
pub type ScoreBoard = BTreeMap<String, u32>;

/// Status and error notices published on a lobby's broadcast channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The match ended because the last coin was collected.
    AllCoinsCollected,
    /// The match was force-terminated by a stop signal.
    Stopped,
    /// A join arrived for a lobby whose match already started.
    AlreadyStarted,
    /// A move arrived for a lobby that is unknown or not yet started.
    LobbyNotFound,
    /// A join reused a player name already present in the lobby.
    AlreadyJoined {
        /// The duplicated player name.
        player_name: String,
    },
    /// A move arrived from a name outside the started match.
    NotInGame {
        /// The unrecognized player name.
        player_name: String,
    },
    /// Map generation could not place every player on the grid.
    GridTooSmall,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AllCoinsCollected => f.write_str("Game Over: All coins have been collected"),
            Notice::Stopped => f.write_str("Game Over: Game has been stopped"),
            Notice::AlreadyStarted => {
                f.write_str("Error: Game has already started, please make a new lobby")
            }
            Notice::LobbyNotFound => f.write_str("Error: Lobby name not found."),
            Notice::AlreadyJoined { player_name } => {
                write!(f, "Error: {player_name} has already joined this lobby")
            }
            Notice::NotInGame { player_name } => {
                write!(f, "Error: {player_name} is not part of this game")
            }
            Notice::GridTooSmall => {
                f.write_str("Error: the grid is too small for this many players")
            }
        }
    }
}

/// Vision-limited projection of the grid published to a single player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewData {
    /// The player's own location on the grid.
    pub current_position: CellCoord,
    /// Teammates visible inside the window, with names.
    pub teammates: Vec<TeammateSighting>,
    /// Positions of visible players from other teams.
    pub enemy_positions: Vec<CellCoord>,
    /// Positions of visible tier-1 coins.
    pub coin1: Vec<CellCoord>,
    /// Positions of visible tier-2 coins.
    pub coin2: Vec<CellCoord>,
    /// Positions of visible tier-3 coins.
    pub coin3: Vec<CellCoord>,
    /// Positions of visible walls.
    pub walls: Vec<CellCoord>,
}

impl ViewData {
    /// Visible coin positions for the requested tier.
    #[must_use]
    pub fn coin_positions(&self, tier: CoinTier) -> &[CellCoord] {
        match tier {
            CoinTier::One => &self.coin1,
            CoinTier::Two => &self.coin2,
            CoinTier::Three => &self.coin3,
        }
    }
}

/// A teammate visible inside a player's vision window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateSighting {
    /// The teammate's player name.
    pub name: String,
    /// The teammate's location on the grid.
    pub position: CellCoord,
}
