use super::*;
use crate::count_neighbors;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

/// Updates cells one by one, letting later cells see earlier results.
fn advance_in_place(grid: &mut Grid, policy: EdgePolicy) {
    let (w, h) = grid.size();
    for y in 0..h {
        for x in 0..w {
            let neibs = count_neighbors(grid, x, y, policy);
            let state = next_state(grid.get(x, y), neibs);
            grid.set(x, y, state);
        }
    }
}

/// Reference implementation with explicit torus arithmetic.
fn advance_reference(grid: &Grid) -> Grid {
    let (w, h) = grid.size();
    let mut next = Grid::blank(w, h);
    for y in 0..h {
        for x in 0..w {
            let x1 = if x == 0 { w - 1 } else { x - 1 };
            let x2 = if x == w - 1 { 0 } else { x + 1 };
            let y1 = if y == 0 { h - 1 } else { y - 1 };
            let y2 = if y == h - 1 { 0 } else { y + 1 };
            let neibs = [
                (x1, y1),
                (x, y1),
                (x2, y1),
                (x1, y),
                (x2, y),
                (x1, y2),
                (x, y2),
                (x2, y2),
            ]
            .iter()
            .filter(|&&(nx, ny)| grid.is_alive(nx, ny))
            .count();
            let alive = if grid.is_alive(x, y) {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
            next.set(x, y, alive.into());
        }
    }
    next
}

#[test]
fn test_rule_table() {
    for neibs in 0..=8 {
        let survives = next_state(Cell::Alive, neibs).is_alive();
        let born = next_state(Cell::Dead, neibs).is_alive();
        assert_eq!(survives, neibs == 2 || neibs == 3, "neibs={}", neibs);
        assert_eq!(born, neibs == 3, "neibs={}", neibs);
    }
}

#[test]
fn test_block_is_fixed_point() {
    let block = Grid::from_alive(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    for policy in [EdgePolicy::Clamped, EdgePolicy::Torus] {
        let t = advance(&block, policy);
        assert_eq!(t.grid, block);
        assert_eq!(t.changed, 0);
    }
}

#[test]
fn test_blinker_has_period_two() {
    let horizontal = Grid::from_alive(9, 9, &[(3, 4), (4, 4), (5, 4)]);
    let vertical = Grid::from_alive(9, 9, &[(4, 3), (4, 4), (4, 5)]);

    let first = advance(&horizontal, EdgePolicy::Clamped);
    assert_eq!(first.grid, vertical);
    assert_eq!(first.changed, 4);
    assert_ne!(first.grid, horizontal);

    let second = advance(&first.grid, EdgePolicy::Clamped);
    assert_eq!(second.grid, horizontal);
}

#[test]
fn test_lonely_and_crowded_cells_die() {
    let lonely = Grid::from_alive(5, 5, &[(2, 2), (3, 2)]);
    assert_eq!(advance(&lonely, EdgePolicy::Clamped).grid.population(), 0);

    // plus sign: the center has 4 neighbors
    let plus = Grid::from_alive(5, 5, &[(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    let next = advance(&plus, EdgePolicy::Clamped).grid;
    assert!(!next.is_alive(2, 2));
}

#[test]
fn test_update_is_synchronous() {
    // a vertical blinker: in-place updates kill the middle cell's support early
    let grid = Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    let double_buffered = advance(&grid, EdgePolicy::Clamped).grid;
    let mut in_place = grid.clone();
    advance_in_place(&mut in_place, EdgePolicy::Clamped);

    assert_eq!(
        double_buffered,
        Grid::from_alive(5, 5, &[(1, 2), (2, 2), (3, 2)])
    );
    assert_ne!(double_buffered, in_place);
}

#[test]
fn test_glider_travels_on_torus() {
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut grid = Grid::from_alive(8, 8, &glider);
    // a glider moves by (1, 1) every 4 generations; 32 generations bring it home
    for _ in 0..32 {
        grid = advance(&grid, EdgePolicy::Torus).grid;
        assert_eq!(grid.population(), 5);
    }
    assert_eq!(grid, Grid::from_alive(8, 8, &glider));
}

#[test]
fn test_consistency_with_reference() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    for (w, h) in [(3, 3), (16, 9), (64, 64)] {
        let mut grid = Grid::blank(w, h);
        grid.randomize(&mut rng, FILL_RATE);
        for _ in 0..rng.gen_range(8..16) {
            let expected = advance_reference(&grid);
            grid = advance(&grid, EdgePolicy::Torus).grid;
            assert_eq!(grid, expected, "w={} h={}", w, h);
        }
    }
}

#[test]
fn test_changed_counts_flips() {
    let grid = Grid::random(32, 32, Some(SEED), FILL_RATE);
    let t = advance(&grid, EdgePolicy::Clamped);
    let flips = grid
        .cells()
        .iter()
        .zip(t.grid.cells())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(t.changed, flips);
}
