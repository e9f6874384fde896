use crate::grid::LifeGrid;

/// Counts the live cells among the 8 toroidally wrapped neighbors of (x, y),
/// excluding the cell itself.
///
/// ```text
///     nw  n  ne
///      w  C  e
///     sw  s  se
/// ```
pub fn count_alive_neighbors(grid: &LifeGrid, x: i64, y: i64) -> u8 {
    grid.get(x - 1, y - 1) as u8
        + grid.get(x, y - 1) as u8
        + grid.get(x + 1, y - 1) as u8
        + grid.get(x - 1, y) as u8
        + grid.get(x + 1, y) as u8
        + grid.get(x - 1, y + 1) as u8
        + grid.get(x, y + 1) as u8
        + grid.get(x + 1, y + 1) as u8
}

/// Computes successive generations of the standard Life rule.
///
/// The engine owns a scratch buffer so that every cell of the next generation
/// is decided against a consistent snapshot of the previous one: all reads go
/// to the grid, all writes go to the scratch, and the scratch is swapped in
/// only after the whole field is decided. The buffer is reused across calls
/// instead of reallocating every tick; it carries no state that affects
/// results, so `advance` behaves as a pure `Grid_N -> Grid_{N+1}` function.
#[derive(Default)]
pub struct GenerationEngine {
    scratch: Vec<bool>,
}

impl GenerationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the grid by exactly one generation.
    ///
    /// Rule table, per cell:
    /// - alive with fewer than 2 live neighbors dies (underpopulation)
    /// - alive with 2 or 3 live neighbors survives
    /// - alive with more than 3 live neighbors dies (overpopulation)
    /// - dead with exactly 3 live neighbors becomes alive (reproduction)
    pub fn advance(&mut self, grid: &mut LifeGrid) {
        let (width, height) = grid.size();
        self.scratch.clear();
        self.scratch.reserve(width * height);
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let neibs = count_alive_neighbors(grid, x, y);
                let next = if grid.get(x, y) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                self.scratch.push(next);
            }
        }
        std::mem::swap(grid.cells_mut(), &mut self.scratch);
    }
}
