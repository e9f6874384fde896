use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed-size field of cells with toroidal coordinate wrapping.
///
/// Coordinates are taken modulo the grid dimensions, so any `(x, y)` pair,
/// including negative values, names exactly one in-bounds cell and lookups
/// never fail.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LifeGrid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl LifeGrid {
    /// Creates a zero-initialized grid. Dimensions must be at least 1x1.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Maps a logical coordinate to the linear index of its canonical cell.
    ///
    /// Uses true mathematical modulo, so e.g. `x = -1` wraps to the last
    /// column and `x = width` wraps back to the first.
    pub fn index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        x + y * self.width
    }

    pub fn get(&self, x: i64, y: i64) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: i64, y: i64, state: bool) {
        let i = self.index(x, y);
        self.cells[i] = state;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fills the grid with random cells, each alive with probability
    /// `fill_rate`. A fixed seed gives a reproducible field.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<bool> {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::LifeGrid;

    #[test]
    fn index_wraps_negative_and_oversized() {
        let grid = LifeGrid::blank(7, 3);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(-1, 0), 6);
        assert_eq!(grid.index(7, 0), 0);
        assert_eq!(grid.index(0, -1), 2 * 7);
        assert_eq!(grid.index(3, 5), 2 * 7 + 3);
        assert_eq!(grid.index(-8, -4), grid.index(6, 2));
    }

    #[test]
    fn set_through_wrap_lands_in_bounds() {
        let mut grid = LifeGrid::blank(5, 4);
        grid.set(-1, -1, true);
        assert!(grid.get(4, 3));
        grid.set(5, 4, true);
        assert!(grid.get(0, 0));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn randomize_is_reproducible() {
        let mut a = LifeGrid::blank(16, 16);
        let mut b = LifeGrid::blank(16, 16);
        a.randomize(Some(42), 0.3);
        b.randomize(Some(42), 0.3);
        assert_eq!(a, b);
        assert!(a.population() > 0);
    }
}
