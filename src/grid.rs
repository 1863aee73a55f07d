use rand::Rng;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Fixed-size field of cells stored row-major.
///
/// Dimensions are chosen at construction and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a field filled with dead cells.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "grid must be at least 1x1");
        Self {
            cells: vec![Cell::Dead; width * height],
            width,
            height,
        }
    }

    /// Creates a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    /// `density` - probability of a cell being alive
    pub fn random(width: usize, height: usize, seed: Option<u64>, density: f64) -> Self {
        use rand::SeedableRng;

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut grid = Self::blank(width, height);
        grid.randomize(&mut rng, density);
        grid
    }

    /// Builds a field from `(x, y)` coordinates of alive cells.
    pub fn from_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::blank(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    /// Refills every cell, each one alive with probability `density`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(density).into();
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// [`(width, height)`] of the field
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Bounds-checked access; `None` outside the field.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[x + y * self.width])
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(self.contains(x, y), "({x}, {y}) is outside of the grid");
        self.cells[x + y * self.width]
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_alive()
    }

    pub fn set(&mut self, x: usize, y: usize, state: Cell) {
        assert!(self.contains(x, y), "({x}, {y}) is outside of the grid");
        self.cells[x + y * self.width] = state;
    }

    /// Total number of alive cells.
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u64
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_dead() {
        let grid = Grid::blank(5, 3);
        assert_eq!(grid.size(), (5, 3));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_bounds_checked_access() {
        let mut grid = Grid::blank(4, 2);
        grid.set(3, 1, Cell::Alive);
        assert_eq!(grid.cell(3, 1), Some(Cell::Alive));
        assert_eq!(grid.cell(4, 1), None);
        assert_eq!(grid.cell(0, 2), None);
        assert!(grid.is_alive(3, 1));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    #[should_panic]
    fn test_zero_sized_grid() {
        Grid::blank(0, 10);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Grid::random(60, 40, Some(42), 0.3);
        let b = Grid::random(60, 40, Some(42), 0.3);
        assert_eq!(a, b);
        let p = a.population() as f64 / (60. * 40.);
        assert!((0.2..0.4).contains(&p), "p={}", p);
    }
}
