//! maze: drive one agent through a level and report the outcome.
//!
//! ```text
//! maze [LEVEL_FILE] [--config EPISODE_JSON] [--seed N]
//! ```
//!
//! With no level file the built-in map is used; `--seed` generates a random
//! level instead.  Log verbosity follows `RUST_LOG` (default `info`; use
//! `RUST_LOG=debug` to see every selection and replan).

mod levels;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use gn_core::{CellCoord, EpisodeConfig, GridConfig, Tick};
use gn_grid::{ParsedLevel, parse_level, render_level};
use gn_nav::Objective;
use gn_path::AStarPathfinder;
use gn_sim::{EpisodeBuilder, EpisodeObserver, EpisodeOutcome, StepReport};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct Args {
    level:  Option<PathBuf>,
    config: Option<PathBuf>,
    seed:   Option<u64>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let raw = it.next().context("--seed needs a number")?;
                args.seed = Some(raw.parse().with_context(|| format!("bad seed {raw:?}"))?);
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => {
                if args.level.replace(PathBuf::from(path)).is_some() {
                    bail!("more than one level file given");
                }
            }
        }
    }
    Ok(args)
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs progress and keeps the agent's trail.
#[derive(Default)]
struct LoggingObserver {
    trail:      Vec<CellCoord>,
    idle_ticks: u64,
    arrivals:   usize,
}

impl EpisodeObserver for LoggingObserver {
    fn on_arrival(&mut self, tick: Tick, objective: Objective) {
        self.arrivals += 1;
        info!(%tick, %objective, "reached");
    }

    fn on_step(&mut self, report: &StepReport) {
        match report.to {
            Some(cell) => {
                self.trail.push(cell);
                debug!(tick = %report.tick, from = %report.from, to = %cell, "moved");
            }
            None => {
                self.idle_ticks += 1;
                debug!(tick = %report.tick, objective = ?report.objective, "no route this tick");
            }
        }
    }

    fn on_episode_end(&mut self, outcome: &EpisodeOutcome) {
        info!(%outcome, moves = self.trail.len(), idle = self.idle_ticks, "episode over");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_level(args: &Args) -> Result<ParsedLevel> {
    if let Some(seed) = args.seed {
        info!(seed, "generating level");
        return levels::generate(seed).context("generating level");
    }
    match &args.level {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_level(&text, GridConfig::default())
                .with_context(|| format!("parsing {}", path.display()))
        }
        None => parse_level(levels::BUILTIN, GridConfig::default()).context("parsing built-in level"),
    }
}

fn load_config(args: &Args) -> Result<EpisodeConfig> {
    let Some(path) = &args.config else {
        return Ok(EpisodeConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: EpisodeConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = parse_args()?;

    let parsed = load_level(&args)?;
    let config = load_config(&args)?;
    let start = parsed.agent_start;
    println!("{}", render_level(&parsed.level, start));

    let mut episode = EpisodeBuilder::from_parsed(parsed, AStarPathfinder)?
        .config(config)
        .build()?;

    let mut observer = LoggingObserver::default();
    let t0 = Instant::now();
    let outcome = episode.run(&mut observer)?;
    let elapsed = t0.elapsed();

    println!("{}", render_level(&episode.level, Some(episode.agent())));
    println!("Outcome       : {outcome}");
    println!("Objectives hit: {}", observer.arrivals);
    println!("Moves / idle  : {} / {}", observer.trail.len(), observer.idle_ticks);
    println!("Wall time     : {:.3} ms", elapsed.as_secs_f64() * 1e3);

    if !matches!(outcome, EpisodeOutcome::Completed { .. }) {
        warn!(remaining = episode.level.remaining_objectives(), "episode did not complete");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gn_core::EpisodeConfig;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: EpisodeConfig = serde_json::from_str(r#"{ "max_ticks": 50 }"#).unwrap();
        assert_eq!(config.max_ticks, 50);
        assert_eq!(config.max_idle_ticks, EpisodeConfig::default().max_idle_ticks);
        assert!(config.validate().is_ok());
    }
}
