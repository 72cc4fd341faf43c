#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative lobby registry and turn coordination for Coin Clash.
//!
//! The [`World`] owns every lobby's state: the forming team registry, the
//! started match's simulation, and the pending moves for the current turn.
//! Adapters submit [`Command`] values describing desired mutations, the world
//! executes them via [`apply`], and the resulting [`Event`] values are
//! drained into a caller-supplied buffer for publishing.

pub mod grid;
mod simulation;
mod vision;

use std::collections::HashMap;

use coin_clash_core::{Command, Direction, Event, Notice};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::grid::GridConfig;
use crate::simulation::Simulation;

pub use crate::simulation::{PlayerId, TeamRoster};

const DEFAULT_RNG_SEED: u64 = 0x1ce5_c0a1_9b7d_2f43;
const DEFAULT_VISION_RADIUS: u32 = 2;

/// Configuration applied to every match a [`World`] starts.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Map generation settings used when a lobby starts.
    pub grid: GridConfig,
    /// Chebyshev radius of the vision window published to players.
    pub vision_radius: u32,
    /// Seed for the deterministic map generation stream.
    pub rng_seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            vision_radius: DEFAULT_VISION_RADIUS,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

/// Represents the authoritative Coin Clash lobby registry.
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    rng: ChaCha8Rng,
    lobbies: HashMap<String, Lobby>,
}

impl World {
    /// Creates an empty world with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Creates an empty world using the provided configuration.
    #[must_use]
    pub fn with_config(config: WorldConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
        Self {
            config,
            rng,
            lobbies: HashMap::new(),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Lobby {
    rosters: Vec<TeamRoster>,
    game: Option<ActiveGame>,
}

impl Lobby {
    fn forming() -> Self {
        Self {
            rosters: Vec::new(),
            game: None,
        }
    }

    fn started(&self) -> bool {
        self.game.is_some()
    }

    fn contains_player(&self, player_name: &str) -> bool {
        self.rosters
            .iter()
            .any(|roster| roster.members().iter().any(|member| member == player_name))
    }

    fn add_member(&mut self, team_name: String, player_name: String) {
        match self
            .rosters
            .iter()
            .position(|roster| roster.name() == team_name)
        {
            Some(index) => self.rosters[index].push_member(player_name),
            None => self
                .rosters
                .push(TeamRoster::new(team_name, vec![player_name])),
        }
    }
}

#[derive(Debug)]
struct ActiveGame {
    simulation: Simulation,
    pending: PendingMoveSet,
}

/// Insertion-ordered accumulator of submitted-but-unresolved moves.
///
/// Overwriting a player's entry keeps its original position so contested
/// cells resolve by first-submission order.
#[derive(Debug, Default)]
struct PendingMoveSet {
    entries: Vec<(String, Direction)>,
}

impl PendingMoveSet {
    fn record(&mut self, player_name: String, direction: Direction) {
        match self.entries.iter().position(|(name, _)| *name == player_name) {
            Some(index) => self.entries[index].1 = direction,
            None => self.entries.push((player_name, direction)),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> &[(String, Direction)] {
        &self.entries
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Applies the provided command to the world, mutating state and pushing the
/// resulting events into `out_events`.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Join {
            lobby_name,
            team_name,
            player_name,
        } => join(world, lobby_name, team_name, player_name, out_events),
        Command::Start { lobby_name } => start(world, lobby_name, out_events),
        Command::Stop { lobby_name } => stop(world, lobby_name, out_events),
        Command::Move {
            lobby_name,
            player_name,
            direction,
        } => record_move(world, lobby_name, player_name, direction, out_events),
    }
}

fn join(
    world: &mut World,
    lobby_name: String,
    team_name: String,
    player_name: String,
    out_events: &mut Vec<Event>,
) {
    let lobby = world
        .lobbies
        .entry(lobby_name.clone())
        .or_insert_with(Lobby::forming);

    if lobby.started() {
        out_events.push(Event::NoticePosted {
            lobby_name,
            notice: Notice::AlreadyStarted,
        });
        return;
    }

    if lobby.contains_player(&player_name) {
        out_events.push(Event::NoticePosted {
            lobby_name,
            notice: Notice::AlreadyJoined { player_name },
        });
        return;
    }

    lobby.add_member(team_name, player_name);
}

fn start(world: &mut World, lobby_name: String, out_events: &mut Vec<Event>) {
    let Some(lobby) = world.lobbies.get_mut(&lobby_name) else {
        return;
    };
    if lobby.started() {
        return;
    }

    match Simulation::new(&mut world.rng, &world.config.grid, &lobby.rosters) {
        Ok(simulation) => {
            publish_views(
                &simulation,
                &lobby_name,
                world.config.vision_radius,
                out_events,
            );
            lobby.game = Some(ActiveGame {
                simulation,
                pending: PendingMoveSet::default(),
            });
        }
        Err(_) => out_events.push(Event::NoticePosted {
            lobby_name,
            notice: Notice::GridTooSmall,
        }),
    }
}

fn stop(world: &mut World, lobby_name: String, out_events: &mut Vec<Event>) {
    if world.lobbies.remove(&lobby_name).is_some() {
        out_events.push(Event::NoticePosted {
            lobby_name,
            notice: Notice::Stopped,
        });
    }
}

fn record_move(
    world: &mut World,
    lobby_name: String,
    player_name: String,
    direction: Direction,
    out_events: &mut Vec<Event>,
) {
    let radius = world.config.vision_radius;
    let game = match world.lobbies.get_mut(&lobby_name) {
        Some(lobby) => match lobby.game.as_mut() {
            Some(game) => game,
            None => {
                out_events.push(Event::NoticePosted {
                    lobby_name,
                    notice: Notice::LobbyNotFound,
                });
                return;
            }
        },
        None => {
            out_events.push(Event::NoticePosted {
                lobby_name,
                notice: Notice::LobbyNotFound,
            });
            return;
        }
    };

    if !game.simulation.contains_player(&player_name) {
        out_events.push(Event::NoticePosted {
            lobby_name,
            notice: Notice::NotInGame { player_name },
        });
        return;
    }

    game.pending.record(player_name, direction);
    if game.pending.len() < game.simulation.player_count() {
        return;
    }

    // Atomic turn resolution: every player has exactly one pending move.
    let moves = game.pending.entries().to_vec();
    for (name, recorded) in &moves {
        game.simulation.apply_move(name, *recorded);
    }

    publish_views(&game.simulation, &lobby_name, radius, out_events);
    out_events.push(Event::ScoresUpdated {
        lobby_name: lobby_name.clone(),
        scores: game.simulation.scores(),
    });
    game.pending.clear();

    if game.simulation.game_over() {
        out_events.push(Event::NoticePosted {
            lobby_name: lobby_name.clone(),
            notice: Notice::AllCoinsCollected,
        });
        let _ = world.lobbies.remove(&lobby_name);
    }
}

fn publish_views(
    simulation: &Simulation,
    lobby_name: &str,
    radius: u32,
    out_events: &mut Vec<Event>,
) {
    for index in 0..simulation.player_count() {
        out_events.push(Event::ViewUpdated {
            lobby_name: lobby_name.to_owned(),
            player_name: simulation.player_name(index).to_owned(),
            view: vision::project(simulation, index, radius),
        });
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use coin_clash_core::{ScoreBoard, ViewData};

    use super::{vision, TeamRoster, World};

    /// Reports whether the named lobby currently exists.
    #[must_use]
    pub fn contains_lobby(world: &World, lobby_name: &str) -> bool {
        world.lobbies.contains_key(lobby_name)
    }

    /// Reports whether the named lobby has a started match.
    #[must_use]
    pub fn is_started(world: &World, lobby_name: &str) -> bool {
        world
            .lobbies
            .get(lobby_name)
            .is_some_and(super::Lobby::started)
    }

    /// Snapshot of the team rosters registered in the lobby, in join order.
    #[must_use]
    pub fn rosters(world: &World, lobby_name: &str) -> Option<Vec<TeamRoster>> {
        world
            .lobbies
            .get(lobby_name)
            .map(|lobby| lobby.rosters.clone())
    }

    /// Current team scores of the lobby's started match.
    #[must_use]
    pub fn scores(world: &World, lobby_name: &str) -> Option<ScoreBoard> {
        active(world, lobby_name).map(|game| game.simulation.scores())
    }

    /// Number of coins still uncollected in the lobby's started match.
    #[must_use]
    pub fn coins_remaining(world: &World, lobby_name: &str) -> Option<u32> {
        active(world, lobby_name).map(|game| game.simulation.coins_remaining())
    }

    /// Number of players with a recorded move for the current turn.
    #[must_use]
    pub fn pending_moves(world: &World, lobby_name: &str) -> Option<usize> {
        active(world, lobby_name).map(|game| game.pending.len())
    }

    /// Names of the players in the started match, in join order.
    #[must_use]
    pub fn player_names(world: &World, lobby_name: &str) -> Option<Vec<String>> {
        active(world, lobby_name).map(|game| {
            (0..game.simulation.player_count())
                .map(|index| game.simulation.player_name(index).to_owned())
                .collect()
        })
    }

    /// Fresh vision projection for one player of a started match.
    #[must_use]
    pub fn player_view(world: &World, lobby_name: &str, player_name: &str) -> Option<ViewData> {
        let game = active(world, lobby_name)?;
        let index = game.simulation.player_index(player_name)?;
        Some(vision::project(
            &game.simulation,
            index,
            world.config.vision_radius,
        ))
    }

    fn active<'world>(world: &'world World, lobby_name: &str) -> Option<&'world super::ActiveGame> {
        world.lobbies.get(lobby_name)?.game.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Occupant};
    use coin_clash_core::{CellCoord, CoinTier, Event, ScoreBoard};

    fn join_command(lobby: &str, team: &str, player: &str) -> Command {
        Command::Join {
            lobby_name: lobby.to_owned(),
            team_name: team.to_owned(),
            player_name: player.to_owned(),
        }
    }

    fn move_command(lobby: &str, player: &str, direction: Direction) -> Command {
        Command::Move {
            lobby_name: lobby.to_owned(),
            player_name: player.to_owned(),
            direction,
        }
    }

    /// Installs a started lobby over a hand-built grid so tests control every
    /// occupant deterministically.
    fn install_match(
        world: &mut World,
        lobby_name: &str,
        grid: Grid,
        rosters: &[TeamRoster],
        player_cells: &[CellCoord],
        coins_remaining: u32,
    ) {
        let simulation = Simulation::from_parts(grid, rosters, player_cells, coins_remaining);
        let previous = world.lobbies.insert(
            lobby_name.to_owned(),
            Lobby {
                rosters: rosters.to_vec(),
                game: Some(ActiveGame {
                    simulation,
                    pending: PendingMoveSet::default(),
                }),
            },
        );
        assert!(previous.is_none());
    }

    #[test]
    fn pending_moves_overwrite_in_place() {
        let mut pending = PendingMoveSet::default();
        pending.record("ada".to_owned(), Direction::Up);
        pending.record("bob".to_owned(), Direction::Left);
        pending.record("ada".to_owned(), Direction::Down);

        assert_eq!(pending.len(), 2);
        assert_eq!(
            pending.entries(),
            &[
                ("ada".to_owned(), Direction::Down),
                ("bob".to_owned(), Direction::Left),
            ]
        );
    }

    #[test]
    fn join_creates_lobbies_and_teams_in_order() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(&mut world, join_command("alpha", "TeamB", "bob"), &mut events);
        apply(&mut world, join_command("alpha", "TeamA", "ada"), &mut events);
        apply(&mut world, join_command("alpha", "TeamB", "bea"), &mut events);

        assert!(events.is_empty());
        assert!(query::contains_lobby(&world, "alpha"));
        assert!(!query::is_started(&world, "alpha"));

        let rosters = query::rosters(&world, "alpha").expect("lobby exists");
        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].name(), "TeamB");
        assert_eq!(rosters[0].members(), ["bob".to_owned(), "bea".to_owned()]);
        assert_eq!(rosters[1].name(), "TeamA");
        assert_eq!(rosters[1].members(), ["ada".to_owned()]);
    }

    #[test]
    fn duplicate_joins_are_rejected_with_a_notice() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(&mut world, join_command("alpha", "TeamA", "ada"), &mut events);
        apply(&mut world, join_command("alpha", "TeamB", "ada"), &mut events);

        assert_eq!(
            events,
            vec![Event::NoticePosted {
                lobby_name: "alpha".to_owned(),
                notice: Notice::AlreadyJoined {
                    player_name: "ada".to_owned()
                },
            }]
        );
        let rosters = query::rosters(&world, "alpha").expect("lobby exists");
        assert_eq!(rosters.len(), 1);
        assert_eq!(rosters[0].members(), ["ada".to_owned()]);
    }

    #[test]
    fn joins_after_start_are_rejected_and_leave_the_registry_untouched() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, join_command("alpha", "TeamA", "ada"), &mut events);
        apply(
            &mut world,
            Command::Start {
                lobby_name: "alpha".to_owned(),
            },
            &mut events,
        );
        events.clear();

        apply(&mut world, join_command("alpha", "TeamA", "late"), &mut events);

        assert_eq!(
            events,
            vec![Event::NoticePosted {
                lobby_name: "alpha".to_owned(),
                notice: Notice::AlreadyStarted,
            }]
        );
        let rosters = query::rosters(&world, "alpha").expect("lobby exists");
        assert_eq!(rosters[0].members(), ["ada".to_owned()]);
    }

    #[test]
    fn start_publishes_an_initial_view_to_every_player() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, join_command("alpha", "TeamA", "ada"), &mut events);
        apply(&mut world, join_command("alpha", "TeamA", "alan"), &mut events);
        apply(&mut world, join_command("alpha", "TeamB", "bob"), &mut events);

        apply(
            &mut world,
            Command::Start {
                lobby_name: "alpha".to_owned(),
            },
            &mut events,
        );

        let recipients: Vec<&str> = events
            .iter()
            .map(|event| match event {
                Event::ViewUpdated { player_name, .. } => player_name.as_str(),
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(recipients, ["ada", "alan", "bob"]);
        assert!(query::is_started(&world, "alpha"));
        assert_eq!(query::pending_moves(&world, "alpha"), Some(0));
    }

    #[test]
    fn start_is_a_no_op_for_unknown_or_already_started_lobbies() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::Start {
                lobby_name: "ghost".to_owned(),
            },
            &mut events,
        );
        assert!(events.is_empty());
        assert!(!query::contains_lobby(&world, "ghost"));

        apply(&mut world, join_command("alpha", "TeamA", "ada"), &mut events);
        apply(
            &mut world,
            Command::Start {
                lobby_name: "alpha".to_owned(),
            },
            &mut events,
        );
        events.clear();
        apply(
            &mut world,
            Command::Start {
                lobby_name: "alpha".to_owned(),
            },
            &mut events,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn start_reports_failure_when_players_cannot_fit() {
        let config = WorldConfig {
            grid: crate::grid::GridConfig {
                height: 1,
                width: 2,
                wall_ratio: crate::grid::RatioBand::new(0.0, 0.0),
                ..crate::grid::GridConfig::default()
            },
            ..WorldConfig::default()
        };
        let mut world = World::with_config(config);
        let mut events = Vec::new();
        for player in ["ada", "bob", "cyd"] {
            apply(&mut world, join_command("alpha", "TeamA", player), &mut events);
        }

        apply(
            &mut world,
            Command::Start {
                lobby_name: "alpha".to_owned(),
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::NoticePosted {
                lobby_name: "alpha".to_owned(),
                notice: Notice::GridTooSmall,
            }]
        );
        assert!(!query::is_started(&world, "alpha"));
    }

    #[test]
    fn stop_purges_the_lobby_and_ignores_unknown_names() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, join_command("alpha", "TeamA", "ada"), &mut events);

        apply(
            &mut world,
            Command::Stop {
                lobby_name: "alpha".to_owned(),
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![Event::NoticePosted {
                lobby_name: "alpha".to_owned(),
                notice: Notice::Stopped,
            }]
        );
        assert!(!query::contains_lobby(&world, "alpha"));

        events.clear();
        apply(
            &mut world,
            Command::Stop {
                lobby_name: "alpha".to_owned(),
            },
            &mut events,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn moves_for_unknown_or_unstarted_lobbies_report_lobby_not_found() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            move_command("ghost", "ada", Direction::Up),
            &mut events,
        );
        apply(&mut world, join_command("alpha", "TeamA", "ada"), &mut events);
        apply(
            &mut world,
            move_command("alpha", "ada", Direction::Up),
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::NoticePosted {
                    lobby_name: "ghost".to_owned(),
                    notice: Notice::LobbyNotFound,
                },
                Event::NoticePosted {
                    lobby_name: "alpha".to_owned(),
                    notice: Notice::LobbyNotFound,
                },
            ]
        );
    }

    #[test]
    fn moves_from_outsiders_are_rejected_without_blocking_the_turn() {
        let mut world = World::new();
        let rosters = [TeamRoster::new("TeamA", vec!["ada".to_owned()])];
        install_match(
            &mut world,
            "alpha",
            Grid::new(3, 3),
            &rosters,
            &[CellCoord::new(1, 1)],
            1,
        );

        let mut events = Vec::new();
        apply(
            &mut world,
            move_command("alpha", "ghost", Direction::Up),
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::NoticePosted {
                lobby_name: "alpha".to_owned(),
                notice: Notice::NotInGame {
                    player_name: "ghost".to_owned()
                },
            }]
        );
        assert_eq!(query::pending_moves(&world, "alpha"), Some(0));
    }

    #[test]
    fn resolution_waits_for_every_player_and_fires_exactly_once() {
        let mut world = World::new();
        let rosters = [
            TeamRoster::new("TeamA", vec!["ada".to_owned(), "alan".to_owned()]),
            TeamRoster::new("TeamB", vec!["bob".to_owned()]),
        ];
        let mut grid = Grid::new(5, 5);
        grid.set(CellCoord::new(0, 4), Occupant::Coin(CoinTier::One));
        install_match(
            &mut world,
            "alpha",
            grid,
            &rosters,
            &[
                CellCoord::new(0, 0),
                CellCoord::new(2, 2),
                CellCoord::new(4, 4),
            ],
            1,
        );

        let mut events = Vec::new();
        apply(
            &mut world,
            move_command("alpha", "ada", Direction::Down),
            &mut events,
        );
        apply(
            &mut world,
            move_command("alpha", "alan", Direction::Down),
            &mut events,
        );

        // Two of three players have moved: nothing resolves, nothing mutates.
        assert!(events.is_empty());
        assert_eq!(query::pending_moves(&world, "alpha"), Some(2));
        let before = query::player_view(&world, "alpha", "ada").expect("view");
        assert_eq!(before.current_position, CellCoord::new(0, 0));

        apply(
            &mut world,
            move_command("alpha", "bob", Direction::Up),
            &mut events,
        );

        let views: Vec<&str> = events
            .iter()
            .filter_map(|event| match event {
                Event::ViewUpdated { player_name, .. } => Some(player_name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(views, ["ada", "alan", "bob"]);
        let scores: Vec<&ScoreBoard> = events
            .iter()
            .filter_map(|event| match event {
                Event::ScoresUpdated { scores, .. } => Some(scores),
                _ => None,
            })
            .collect();
        assert_eq!(scores.len(), 1);
        assert_eq!(query::pending_moves(&world, "alpha"), Some(0));

        let after = query::player_view(&world, "alpha", "ada").expect("view");
        assert_eq!(after.current_position, CellCoord::new(1, 0));
    }

    #[test]
    fn contested_cells_resolve_by_submission_order() {
        // ada vacates (1,1); alan tries to enter it in the same turn. When
        // ada's move is recorded first the cell frees up in time for alan;
        // when alan's is first the cell is still occupied and he stays put.
        let rosters = [TeamRoster::new(
            "TeamA",
            vec!["ada".to_owned(), "alan".to_owned()],
        )];
        let cells = [CellCoord::new(1, 1), CellCoord::new(2, 1)];

        let mut world = World::new();
        install_match(&mut world, "alpha", Grid::new(4, 4), &rosters, &cells, 1);
        let mut events = Vec::new();
        apply(
            &mut world,
            move_command("alpha", "ada", Direction::Right),
            &mut events,
        );
        apply(
            &mut world,
            move_command("alpha", "alan", Direction::Up),
            &mut events,
        );
        let view = query::player_view(&world, "alpha", "alan").expect("view");
        assert_eq!(view.current_position, CellCoord::new(1, 1));

        let mut world = World::new();
        install_match(&mut world, "alpha", Grid::new(4, 4), &rosters, &cells, 1);
        let mut events = Vec::new();
        apply(
            &mut world,
            move_command("alpha", "alan", Direction::Up),
            &mut events,
        );
        apply(
            &mut world,
            move_command("alpha", "ada", Direction::Right),
            &mut events,
        );
        let view = query::player_view(&world, "alpha", "alan").expect("view");
        assert_eq!(view.current_position, CellCoord::new(2, 1));
    }

    #[test]
    fn collecting_the_last_coin_ends_and_purges_the_match() {
        let mut world = World::new();
        let rosters = [
            TeamRoster::new("TeamA", vec!["ada".to_owned()]),
            TeamRoster::new("TeamB", vec!["bob".to_owned()]),
        ];
        let mut grid = Grid::new(10, 10);
        grid.set(CellCoord::new(5, 6), Occupant::Coin(CoinTier::Two));
        install_match(
            &mut world,
            "alpha",
            grid,
            &rosters,
            &[CellCoord::new(5, 5), CellCoord::new(0, 0)],
            1,
        );

        let mut events = Vec::new();
        apply(
            &mut world,
            move_command("alpha", "ada", Direction::Right),
            &mut events,
        );
        apply(
            &mut world,
            move_command("alpha", "bob", Direction::Down),
            &mut events,
        );

        let ada_view = events
            .iter()
            .find_map(|event| match event {
                Event::ViewUpdated {
                    player_name, view, ..
                } if player_name == "ada" => Some(view.clone()),
                _ => None,
            })
            .expect("view for ada");
        assert_eq!(ada_view.current_position, CellCoord::new(5, 6));

        let scores = events
            .iter()
            .find_map(|event| match event {
                Event::ScoresUpdated { scores, .. } => Some(scores.clone()),
                _ => None,
            })
            .expect("scores event");
        assert_eq!(scores["TeamA"], 2);
        assert_eq!(scores["TeamB"], 0);

        assert_eq!(
            events.last(),
            Some(&Event::NoticePosted {
                lobby_name: "alpha".to_owned(),
                notice: Notice::AllCoinsCollected,
            })
        );
        assert!(!query::contains_lobby(&world, "alpha"));
    }
}
