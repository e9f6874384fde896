use anyhow::{Context, Result};
use clap::Parser;
use gol_torus::{builtin_pattern, App, LifeGrid, Pattern, TickMode, BUILTIN_PATTERNS, DEFAULT_PATTERN};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gol_torus")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal grid, rendered in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 70, value_parser = parse_dimension)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 30, value_parser = parse_dimension)]
    height: usize,

    /// Milliseconds between generations
    #[arg(short, long, default_value_t = 30)]
    interval: u64,

    /// Advance one generation per key press instead of ticking automatically
    #[arg(long)]
    step: bool,

    /// RLE pattern file to seed the grid with
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Built-in pattern name (see --list-patterns)
    #[arg(short, long, conflicts_with = "pattern")]
    builtin: Option<String>,

    /// Seed the grid randomly instead of with a pattern
    #[arg(long, conflicts_with_all = ["pattern", "builtin"])]
    random: bool,

    /// Random seed; omit for a different field every run
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Probability of each cell starting alive with --random
    #[arg(long, default_value_t = 0.3, requires = "random", value_parser = parse_fill_rate)]
    fill_rate: f64,

    /// List built-in patterns and exit
    #[arg(long)]
    list_patterns: bool,
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    let v: usize = s.parse().map_err(|e| format!("{e}"))?;
    if v >= 1 {
        Ok(v)
    } else {
        Err("must be at least 1".into())
    }
}

fn parse_fill_rate(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("must be within [0.0, 1.0], got {v}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.list_patterns {
        for p in BUILTIN_PATTERNS {
            println!("{}", p.name);
        }
        return Ok(());
    }

    let mut grid = LifeGrid::blank(cli.width, cli.height);
    if cli.random {
        grid.randomize(cli.seed, cli.fill_rate);
    } else if let Some(path) = &cli.pattern {
        Pattern::load(path)?.apply_centered(&mut grid);
    } else {
        let name = cli.builtin.as_deref().unwrap_or(DEFAULT_PATTERN);
        builtin_pattern(name)
            .with_context(|| format!("unknown built-in pattern {name:?}"))?
            .apply_centered(&mut grid);
    }

    let mode = if cli.step {
        TickMode::Manual
    } else {
        TickMode::Auto(Duration::from_millis(cli.interval))
    };
    App::new(grid, mode).run()
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn rejects_out_of_range_fill_rate() {
        assert!(Cli::try_parse_from(["gol_torus", "--random", "--fill-rate", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["gol_torus", "--random", "--fill-rate=-0.1"]).is_err());
        assert!(Cli::try_parse_from(["gol_torus", "--random", "--fill-rate", "0.5"]).is_ok());
        assert!(Cli::try_parse_from(["gol_torus", "--random", "--fill-rate", "1.0"]).is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Cli::try_parse_from(["gol_torus", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["gol_torus", "--height", "0"]).is_err());
        assert!(Cli::try_parse_from(["gol_torus", "--width", "1", "--height", "1"]).is_ok());
    }
}
