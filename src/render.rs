use crate::grid::LifeGrid;
use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

const ALIVE: &str = "■ ";
const DEAD: &str = "  ";

/// Render sink that draws the grid to the terminal, one row per line.
///
/// Switches to the alternate screen in raw mode on construction and restores
/// the terminal on drop, including when the app exits through an error.
pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        Ok(Self { out })
    }

    pub fn draw(&mut self, grid: &LifeGrid, generation: u64, paused: bool) -> Result<()> {
        let (width, height) = grid.size();
        let mut row = String::with_capacity(width * ALIVE.len());
        for y in 0..height {
            row.clear();
            for x in 0..width {
                row.push_str(if grid.get(x as i64, y as i64) {
                    ALIVE
                } else {
                    DEAD
                });
            }
            queue!(self.out, cursor::MoveTo(0, y as u16), Print(&row))?;
        }
        let status = format!(
            "gen {}  pop {}  {}  [space] pause  [q] quit",
            generation,
            grid.population(),
            if paused { "paused " } else { "running" },
        );
        queue!(
            self.out,
            cursor::MoveTo(0, height as u16),
            Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
