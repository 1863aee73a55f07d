use crate::{count_board, Cell, EdgePolicy, Grid, NeighborCounts};

#[cfg(test)]
mod tests;

/// Result of a single generation step.
#[derive(Clone, Debug)]
pub struct Transition {
    pub grid: Grid,
    /// Number of cells that flipped their state.
    pub changed: usize,
}

/// B3/S23.
#[inline]
pub fn next_state(cell: Cell, neibs: u8) -> Cell {
    let alive = if cell.is_alive() {
        neibs == 2 || neibs == 3
    } else {
        neibs == 3
    };
    alive.into()
}

/// Applies the rule to every cell using counts of the same generation.
///
/// The result is written into a fresh buffer, so no cell sees a neighbor's new state.
pub fn apply_rule(grid: &Grid, counts: &NeighborCounts) -> Transition {
    assert_eq!(grid.size(), counts.size(), "counts belong to a different grid");
    let mut next = grid.clone();
    let mut changed = 0;
    for ((dst, &curr), &neibs) in next
        .cells_mut()
        .iter_mut()
        .zip(grid.cells())
        .zip(counts.as_slice())
    {
        *dst = next_state(curr, neibs);
        if *dst != curr {
            changed += 1;
        }
    }
    Transition {
        grid: next,
        changed,
    }
}

/// Computes the next generation.
pub fn advance(grid: &Grid, policy: EdgePolicy) -> Transition {
    apply_rule(grid, &count_board(grid, policy))
}
