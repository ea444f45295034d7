use game_of_life::{Automaton, Cell, Grid, GridSize, presets};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn step_preserves_dimensions(width in 0usize..24, height in 0usize..24, seed in any::<u64>()) {
        let mut automaton = Automaton::with_seed(GridSize::new(width, height), 0.5, seed);
        automaton.step();
        prop_assert_eq!(automaton.grid().dimensions(), (width, height));
    }

    #[test]
    fn reset_preserves_dimensions(width in 0usize..24, height in 0usize..24, seed in any::<u64>()) {
        let mut automaton = Automaton::with_seed(GridSize::new(width, height), 0.5, seed);
        automaton.reset();
        prop_assert_eq!(automaton.grid().dimensions(), (width, height));
    }

    #[test]
    fn neighbor_counts_respect_edges(width in 1usize..12, height in 1usize..12, seed in any::<u64>()) {
        let grid = Grid::random(GridSize::new(width, height), 0.5, &mut StdRng::seed_from_u64(seed));
        for (x, y, _) in grid.iter_cells() {
            let in_bounds = (x.saturating_sub(1)..=(x + 1).min(width - 1))
                .flat_map(|nx| (y.saturating_sub(1)..=(y + 1).min(height - 1)).map(move |ny| (nx, ny)))
                .filter(|&pos| pos != (x, y))
                .count();
            let alive = grid.count_live_neighbors(x, y) as usize;
            prop_assert!(alive <= in_bounds);
        }
    }

    #[test]
    fn full_grid_corners_see_three(width in 2usize..12, height in 2usize..12) {
        let grid = Grid::random(GridSize::new(width, height), 1.0, &mut StdRng::seed_from_u64(0));
        for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
            prop_assert_eq!(grid.count_live_neighbors(x, y), 3);
        }
    }
}

#[test]
fn dead_three_by_three_stays_dead() {
    let mut automaton = Automaton::from_grid(Grid::new(3, 3), 0.5);
    automaton.step();
    assert_eq!(automaton.grid().population(), 0);
}

#[test]
fn isolated_cell_dies() {
    let mut grid = Grid::new(3, 3);
    grid.set(1, 1, Cell::Alive);
    let mut automaton = Automaton::from_grid(grid, 0.5);
    automaton.step();
    assert_eq!(automaton.grid().population(), 0);
}

#[test]
fn block_is_still() {
    let block = presets::block().on_empty(6, 6, 2, 2);
    let mut automaton = Automaton::from_grid(block.clone(), 0.5);
    for _ in 0..5 {
        automaton.step();
        assert_eq!(automaton.grid(), &block);
    }
}

#[test]
fn blinker_has_period_two() {
    let start = presets::blinker().on_empty(5, 5, 1, 2);
    let mut automaton = Automaton::from_grid(start.clone(), 0.5);

    automaton.step();
    assert_ne!(automaton.grid(), &start);
    automaton.step();
    assert_eq!(automaton.grid(), &start);
}

#[test]
fn blinker_on_top_edge_dies_out() {
    // Horizontal phase on the top row; the vertical phase would need row -1
    let start = presets::blinker().on_empty(5, 5, 1, 0);
    let mut automaton = Automaton::from_grid(start, 0.5);
    automaton.step();
    assert_eq!(automaton.grid().population(), 2);
    automaton.step();
    assert_eq!(automaton.grid().population(), 0);
}
