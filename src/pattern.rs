use crate::grid::LifeGrid;
use anyhow::{bail, ensure, Context, Result};
use std::path::Path;

/// A set of live-cell coordinates used to seed a grid.
///
/// Coordinates are logical: when applied they go through the grid's wrapping
/// accessors, so a pattern larger than the grid folds onto the torus instead
/// of failing.
#[derive(Clone, Debug)]
pub struct Pattern {
    cells: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn from_cells(cells: Vec<(i64, i64)>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[(i64, i64)] {
        &self.cells
    }

    /// Reads a pattern from a file in run-length-encoded format.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read pattern file {}", path.display()))?;
        Self::parse_rle(&data)
            .with_context(|| format!("failed to parse pattern file {}", path.display()))
    }

    /// Parses the common RLE pattern format: `#`-comment lines, an
    /// `x = <w>, y = <h>` header, then run-length data where `b` is a dead
    /// cell, `o` a live cell, `$` ends a row and `!` ends the pattern.
    pub fn parse_rle(data: &str) -> Result<Self> {
        let mut lines = data.lines().filter(|l| !l.trim_start().starts_with('#'));
        let header = lines.next().context("missing header line")?;
        let (width, height) = parse_rle_header(header)?;

        let mut cells = Vec::new();
        let (mut x, mut y) = (0i64, 0i64);
        // a pending run count of 0 means "no count seen", i.e. a run of 1
        let mut run = 0i64;
        'body: for line in lines {
            for c in line.chars() {
                match c {
                    '0'..='9' => run = run * 10 + (c as u8 - b'0') as i64,
                    'o' => {
                        for i in 0..run.max(1) {
                            cells.push((x + i, y));
                        }
                        x += run.max(1);
                        run = 0;
                        ensure!(
                            x <= width && y < height,
                            "RLE data exceeds declared size {width}x{height}"
                        );
                    }
                    'b' => {
                        x += run.max(1);
                        run = 0;
                        ensure!(x <= width, "RLE data exceeds declared width {width}");
                    }
                    '$' => {
                        y += run.max(1);
                        x = 0;
                        run = 0;
                        // a trailing '$' on the last row is legal, so the
                        // row bound is only strict once cells are written
                        ensure!(y <= height, "RLE data exceeds declared height {height}");
                    }
                    '!' => break 'body,
                    c if c.is_whitespace() => {}
                    _ => bail!("unexpected symbol {c:?} in RLE data"),
                }
            }
        }
        Ok(Self { cells })
    }

    /// Seeds the grid with this pattern, translated so that the pattern's
    /// bounding box is centered on the grid. Existing live cells are kept.
    pub fn apply_centered(&self, grid: &mut LifeGrid) {
        let Some(((min_x, min_y), (max_x, max_y))) = self.bounds() else {
            return;
        };
        let (w, h) = grid.size();
        let dx = (w as i64 - (max_x - min_x + 1)) / 2 - min_x;
        let dy = (h as i64 - (max_y - min_y + 1)) / 2 - min_y;
        for &(x, y) in &self.cells {
            grid.set(x + dx, y + dy, true);
        }
    }

    fn bounds(&self) -> Option<((i64, i64), (i64, i64))> {
        let (first, rest) = self.cells.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for &(x, y) in rest {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        Some((min, max))
    }
}

fn parse_rle_header(line: &str) -> Result<(i64, i64)> {
    ensure!(
        line.trim_start().starts_with('x'),
        "header line must start with 'x', got {line:?}"
    );
    let mut nums = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>());
    let width = nums.next().context("header missing width")??;
    let height = nums.next().context("header missing height")??;
    ensure!(width >= 1 && height >= 1, "degenerate size {width}x{height}");
    Ok((width, height))
}

pub struct BuiltinPattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

/// Looks up a built-in pattern by name (case-insensitive).
pub fn builtin_pattern(name: &str) -> Option<Pattern> {
    BUILTIN_PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(|p| Pattern::from_cells(p.cells.to_vec()))
}

pub const DEFAULT_PATTERN: &str = "119p4h1v0";

pub const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    BuiltinPattern {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    BuiltinPattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    // 119P4H1V0 spaceship, period 4, travels one cell per period
    BuiltinPattern {
        name: "119p4h1v0",
        cells: &[
            (20, 15),
            (21, 13), (21, 14), (21, 16), (21, 17),
            (24, 12), (24, 13), (24, 14), (24, 16), (24, 17), (24, 18),
            (25, 12), (25, 13), (25, 17), (25, 18),
            (26, 8), (26, 9), (26, 10), (26, 20), (26, 21), (26, 22),
            (28, 8), (28, 10), (28, 20), (28, 22),
            (29, 10), (29, 11), (29, 19), (29, 20),
            (30, 10), (30, 20),
            (31, 9), (31, 10), (31, 20), (31, 21),
            (32, 10), (32, 20),
            (33, 10), (33, 13), (33, 17), (33, 20),
            (34, 10), (34, 13), (34, 17), (34, 20),
            (35, 8), (35, 10), (35, 11), (35, 19), (35, 20), (35, 22),
            (36, 7), (36, 9), (36, 21), (36, 23),
            (38, 9), (38, 21),
            (39, 9), (39, 21),
            (40, 9), (40, 21),
            (41, 8), (41, 9), (41, 21), (41, 22),
            (42, 8), (42, 9), (42, 21), (42, 22),
            (43, 9), (43, 11), (43, 12), (43, 13), (43, 17), (43, 18), (43, 19), (43, 21),
            (44, 11), (44, 12), (44, 13), (44, 17), (44, 18), (44, 19),
            (45, 11), (45, 12), (45, 18), (45, 19),
            (46, 10), (46, 11), (46, 19), (46, 20),
            (47, 12), (47, 18),
            (48, 9), (48, 21),
            (49, 9), (49, 10), (49, 20), (49, 21),
            (51, 8), (51, 10), (51, 11), (51, 19), (51, 20), (51, 22),
            (52, 7), (52, 10), (52, 11), (52, 19), (52, 20), (52, 23),
            (53, 6), (53, 10), (53, 11), (53, 19), (53, 20), (53, 24),
            (54, 7), (54, 23),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rle_glider() {
        let pattern = Pattern::parse_rle(
            "#N Glider\n#C the smallest spaceship\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n",
        )
        .unwrap();
        let mut cells = pattern.cells().to_vec();
        cells.sort();
        assert_eq!(
            cells,
            vec![(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn parse_rle_multi_digit_runs() {
        let pattern = Pattern::parse_rle("x = 12, y = 2\n12o$10b2o!\n").unwrap();
        assert_eq!(pattern.cells().len(), 14);
        assert!(pattern.cells().contains(&(11, 0)));
        assert!(pattern.cells().contains(&(10, 1)));
        assert!(pattern.cells().contains(&(11, 1)));
    }

    #[test]
    fn parse_rle_accepts_trailing_row_terminator() {
        let pattern = Pattern::parse_rle("x = 3, y = 1\n3o$!\n").unwrap();
        assert_eq!(pattern.cells().len(), 3);

        let pattern = Pattern::parse_rle("x = 2, y = 2\n2o$2o$!\n").unwrap();
        assert_eq!(pattern.cells().len(), 4);
    }

    #[test]
    fn parse_rle_rejects_garbage() {
        assert!(Pattern::parse_rle("").is_err());
        assert!(Pattern::parse_rle("y = 3, x = 3\n3o!\n").is_err());
        assert!(Pattern::parse_rle("x = 3, y = 3\n3z!\n").is_err());
        // more cells than the header declares
        assert!(Pattern::parse_rle("x = 2, y = 1\n3o!\n").is_err());
        assert!(Pattern::parse_rle("x = 3, y = 1\n3o$3o!\n").is_err());
        assert!(Pattern::parse_rle("x = 2, y = 2\n2o$2o$2o$!\n").is_err());
    }

    #[test]
    fn apply_centered_wraps_oversized_pattern() {
        let mut grid = LifeGrid::blank(5, 5);
        let pattern = Pattern::from_cells(vec![(0, 0), (6, 0)]);
        pattern.apply_centered(&mut grid);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn builtin_lookup() {
        assert!(builtin_pattern("Blinker").is_some());
        assert!(builtin_pattern(DEFAULT_PATTERN).is_some());
        assert!(builtin_pattern("no-such-pattern").is_none());
        assert_eq!(builtin_pattern("119p4h1v0").unwrap().cells().len(), 119);
    }
}
