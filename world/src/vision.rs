//! Windowed vision projection published to individual players.

use coin_clash_core::{CellCoord, CoinTier, TeammateSighting, ViewData};

use crate::grid::Occupant;
use crate::simulation::Simulation;

/// Computes the clipped, classified view of the grid around one player.
///
/// The window spans `radius` cells in every direction (Chebyshev distance),
/// clipped to the grid bounds without wraparound. Every windowed cell is
/// classified exactly once; empty cells are omitted and the player's own cell
/// is reported only through `current_position`.
pub(crate) fn project(simulation: &Simulation, player_index: usize, radius: u32) -> ViewData {
    let grid = simulation.grid();
    let center = simulation.player_cell(player_index);
    let team = simulation.player_team(player_index);

    let min_row = center.row().saturating_sub(radius);
    let max_row = (center.row() + radius).min(grid.height().saturating_sub(1));
    let min_column = center.column().saturating_sub(radius);
    let max_column = (center.column() + radius).min(grid.width().saturating_sub(1));

    let mut view = ViewData {
        current_position: center,
        ..ViewData::default()
    };

    for row in min_row..=max_row {
        for column in min_column..=max_column {
            let cell = CellCoord::new(row, column);
            match grid.get(cell) {
                Some(Occupant::Player(id)) => {
                    let other = id.get() as usize;
                    if other == player_index {
                        continue;
                    }
                    if simulation.player_team(other) == team {
                        view.teammates.push(TeammateSighting {
                            name: simulation.player_name(other).to_owned(),
                            position: cell,
                        });
                    } else {
                        view.enemy_positions.push(cell);
                    }
                }
                Some(Occupant::Coin(CoinTier::One)) => view.coin1.push(cell),
                Some(Occupant::Coin(CoinTier::Two)) => view.coin2.push(cell),
                Some(Occupant::Coin(CoinTier::Three)) => view.coin3.push(cell),
                Some(Occupant::Wall) => view.walls.push(cell),
                None => {}
            }
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::simulation::TeamRoster;
    use coin_clash_core::Direction;

    fn two_team_rosters() -> Vec<TeamRoster> {
        vec![
            TeamRoster::new("TeamA", vec!["ada".to_owned(), "alan".to_owned()]),
            TeamRoster::new("TeamB", vec!["bob".to_owned()]),
        ]
    }

    #[test]
    fn window_is_clipped_at_every_corner() {
        let corners = [
            CellCoord::new(0, 0),
            CellCoord::new(0, 9),
            CellCoord::new(9, 0),
            CellCoord::new(9, 9),
        ];

        for corner in corners {
            let simulation = Simulation::from_parts(
                Grid::new(10, 10),
                &[TeamRoster::new("TeamA", vec!["ada".to_owned()])],
                &[corner],
                1,
            );
            let view = project(&simulation, 0, 2);
            assert_eq!(view.current_position, corner);
            assert!(view.teammates.is_empty());
            assert!(view.walls.is_empty());
        }
    }

    #[test]
    fn window_never_reports_out_of_bounds_coordinates() {
        let mut grid = Grid::new(4, 4);
        for row in 0..4 {
            for column in 0..4 {
                let cell = CellCoord::new(row, column);
                if (row + column) % 2 == 0 {
                    grid.set(cell, Occupant::Wall);
                }
            }
        }
        // Leave the player's own cell empty for placement.
        grid.clear(CellCoord::new(0, 0));

        let simulation = Simulation::from_parts(
            grid,
            &[TeamRoster::new("TeamA", vec!["ada".to_owned()])],
            &[CellCoord::new(0, 0)],
            1,
        );

        let view = project(&simulation, 0, 3);
        for wall in &view.walls {
            assert!(wall.row() < 4 && wall.column() < 4, "wall {wall:?} out of bounds");
            assert!(view.current_position.chebyshev_distance(*wall) <= 3);
        }
    }

    #[test]
    fn occupants_are_classified_exactly_once() {
        let mut grid = Grid::new(10, 10);
        grid.set(CellCoord::new(4, 4), Occupant::Wall);
        grid.set(CellCoord::new(5, 7), Occupant::Coin(CoinTier::One));
        grid.set(CellCoord::new(6, 6), Occupant::Coin(CoinTier::Two));
        grid.set(CellCoord::new(3, 5), Occupant::Coin(CoinTier::Three));

        let simulation = Simulation::from_parts(
            grid,
            &two_team_rosters(),
            &[
                CellCoord::new(5, 5),
                CellCoord::new(5, 6),
                CellCoord::new(7, 5),
            ],
            3,
        );

        let view = project(&simulation, 0, 2);

        assert_eq!(view.current_position, CellCoord::new(5, 5));
        assert_eq!(
            view.teammates,
            vec![TeammateSighting {
                name: "alan".to_owned(),
                position: CellCoord::new(5, 6),
            }]
        );
        assert_eq!(view.enemy_positions, vec![CellCoord::new(7, 5)]);
        assert_eq!(view.coin1, vec![CellCoord::new(5, 7)]);
        assert_eq!(view.coin2, vec![CellCoord::new(6, 6)]);
        assert_eq!(view.coin3, vec![CellCoord::new(3, 5)]);
        assert_eq!(view.walls, vec![CellCoord::new(4, 4)]);
    }

    #[test]
    fn cells_beyond_the_radius_are_invisible() {
        let mut grid = Grid::new(10, 10);
        grid.set(CellCoord::new(5, 8), Occupant::Coin(CoinTier::One));
        grid.set(CellCoord::new(2, 5), Occupant::Wall);

        let simulation = Simulation::from_parts(
            grid,
            &[TeamRoster::new("TeamA", vec!["ada".to_owned()])],
            &[CellCoord::new(5, 5)],
            1,
        );

        let view = project(&simulation, 0, 2);
        assert!(view.coin1.is_empty());
        assert!(view.walls.is_empty());
    }

    #[test]
    fn coin_pickup_scenario_reports_the_new_position() {
        // 10x10 grid, two one-player teams, tier-2 coin directly to the right.
        let mut grid = Grid::new(10, 10);
        grid.set(CellCoord::new(5, 6), Occupant::Coin(CoinTier::Two));
        let rosters = [
            TeamRoster::new("TeamA", vec!["ada".to_owned()]),
            TeamRoster::new("TeamB", vec!["bob".to_owned()]),
        ];
        let mut simulation = Simulation::from_parts(
            grid,
            &rosters,
            &[CellCoord::new(5, 5), CellCoord::new(0, 0)],
            4,
        );

        simulation.apply_move("ada", Direction::Right);

        assert_eq!(simulation.scores()["TeamA"], 2);
        assert_eq!(simulation.scores()["TeamB"], 0);
        assert_eq!(simulation.coins_remaining(), 3);

        let view = project(&simulation, 0, 2);
        assert_eq!(view.current_position, CellCoord::new(5, 6));
        assert!(view.coin2.is_empty());
    }
}
