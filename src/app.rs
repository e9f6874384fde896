use crate::engine::GenerationEngine;
use crate::grid::LifeGrid;
use crate::render::TerminalRenderer;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

/// How the driver paces generations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickMode {
    /// Advance every fixed interval.
    Auto(Duration),
    /// Advance once per key press.
    Manual,
}

/// Tick driver: owns the grid and calls the engine exactly once per tick,
/// then renders. Ticks never overlap (the loop is single-threaded and each
/// advance completes before the next is considered).
pub struct App {
    grid: LifeGrid,
    engine: GenerationEngine,
    mode: TickMode,
    generation: u64,
    paused: bool,
}

impl App {
    pub fn new(grid: LifeGrid, mode: TickMode) -> Self {
        Self {
            grid,
            engine: GenerationEngine::new(),
            mode,
            generation: 0,
            paused: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut renderer = TerminalRenderer::new()?;
        renderer.draw(&self.grid, self.generation, self.paused)?;
        loop {
            match self.mode {
                TickMode::Auto(interval) => {
                    if let Some(key) = poll_key(interval)? {
                        match key {
                            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                            KeyCode::Char(' ') => {
                                self.paused = !self.paused;
                                renderer.draw(&self.grid, self.generation, self.paused)?;
                            }
                            _ => {}
                        }
                    } else if !self.paused {
                        self.step();
                        renderer.draw(&self.grid, self.generation, self.paused)?;
                    }
                }
                TickMode::Manual => {
                    if let Some(key) = wait_key()? {
                        match key {
                            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                            KeyCode::Enter | KeyCode::Char(' ') => {
                                self.step();
                                renderer.draw(&self.grid, self.generation, self.paused)?;
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    fn step(&mut self) {
        self.engine.advance(&mut self.grid);
        self.generation += 1;
    }
}

fn poll_key(timeout: Duration) -> Result<Option<KeyCode>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code)),
        _ => Ok(None),
    }
}

fn wait_key() -> Result<Option<KeyCode>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code)),
        _ => Ok(None),
    }
}
