use crate::{EdgePolicy, Grid};

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Number of alive cells among the 8 neighbors of `(x, y)`, in `[0, 8]`.
pub fn count_neighbors(grid: &Grid, x: usize, y: usize, policy: EdgePolicy) -> u8 {
    let (w, h) = grid.size();
    OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| Some((policy.resolve(x, dx, w)?, policy.resolve(y, dy, h)?)))
        .filter(|&(nx, ny)| grid.is_alive(nx, ny))
        .count() as u8
}

/// Neighbor counts of every cell of a single generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    counts: Vec<u8>,
    width: usize,
    height: usize,
}

impl NeighborCounts {
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height);
        self.counts[x + y * self.width]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}

/// Counts neighbors for the whole field.
pub fn count_board(grid: &Grid, policy: EdgePolicy) -> NeighborCounts {
    let (width, height) = grid.size();
    let mut counts = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            counts.push(count_neighbors(grid, x, y, policy));
        }
    }
    NeighborCounts {
        counts,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_range_on_full_field() {
        let mut grid = Grid::blank(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                grid.set(x, y, Cell::Alive);
            }
        }
        let torus = count_board(&grid, EdgePolicy::Torus);
        assert!(torus.as_slice().iter().all(|&c| c == 8));

        let clamped = count_board(&grid, EdgePolicy::Clamped);
        assert_eq!(clamped.get(0, 0), 3);
        assert_eq!(clamped.get(1, 0), 5);
        assert_eq!(clamped.get(1, 1), 8);
        assert_eq!(clamped.get(3, 2), 3);
    }

    #[test]
    fn test_corner_wraps_only_on_torus() {
        let grid = Grid::from_alive(5, 5, &[(4, 4)]);
        assert_eq!(count_neighbors(&grid, 0, 0, EdgePolicy::Clamped), 0);
        assert_eq!(count_neighbors(&grid, 0, 0, EdgePolicy::Torus), 1);
        assert_eq!(count_neighbors(&grid, 3, 3, EdgePolicy::Clamped), 1);
    }

    #[test]
    fn test_cell_itself_is_not_counted() {
        let grid = Grid::from_alive(3, 3, &[(1, 1)]);
        let counts = count_board(&grid, EdgePolicy::Clamped);
        assert_eq!(counts.get(1, 1), 0);
        assert_eq!(counts.as_slice().iter().map(|&c| c as usize).sum::<usize>(), 8);
    }
}
