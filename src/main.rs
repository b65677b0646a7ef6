use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use conway_life::{Color, LifeEngine, Simulation, StepStrategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, info};

/// Command-line arguments for a headless run.
#[derive(Debug, Parser)]
#[command(author, version, about = "Conway's Game of Life with color-aged cells", long_about = None)]
struct CliArgs {
    /// Board dimensions expressed as WIDTHxHEIGHT (for example 64x48).
    #[arg(short = 's', long = "size", value_name = "WIDTHxHEIGHT", default_value = "64x48")]
    size: BoardSizeArg,
    /// Maximum number of generations to advance.
    #[arg(short = 'g', long, value_name = "COUNT", default_value_t = 100)]
    generations: u64,
    /// Seed for the random source. Runs with the same seed are identical.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Generations per second while auto-running (1 to 60).
    #[arg(long, value_name = "RATE", default_value_t = 1.0, value_parser = parse_rate)]
    ups: f32,
    /// Sleep between generations instead of running flat out.
    #[arg(long)]
    realtime: bool,
    /// How the step's mark phase is evaluated: serial or parallel.
    #[arg(long, value_name = "STRATEGY", default_value = "serial")]
    strategy: StepStrategy,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Board dimensions parsed from a WIDTHxHEIGHT command-line argument.
#[derive(Clone, Copy, Debug)]
struct BoardSizeArg {
    width: usize,
    height: usize,
}

impl FromStr for BoardSizeArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| "expected format WIDTHxHEIGHT".to_string())?;

        let width = width
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid width: {error}"))?;
        let height = height
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid height: {error}"))?;

        if width == 0 || height == 0 {
            return Err("board dimensions must be positive".to_string());
        }

        Ok(Self { width, height })
    }
}

/// Parse an auto-run rate, rejecting NaN, infinities and rates outside 1 to 60.
fn parse_rate(value: &str) -> Result<f32, String> {
    let rate = value
        .trim()
        .parse::<f32>()
        .map_err(|error| format!("invalid rate: {error}"))?;
    if !rate.is_finite() || !(1.0..=60.0).contains(&rate) {
        return Err(format!("rate must be between 1 and 60, got {value}"));
    }
    Ok(rate)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let engine = LifeEngine::new(args.size.width, args.size.height, &mut rng)
        .context("failed to seed the board")?
        .with_strategy(args.strategy);
    info!(
        width = args.size.width,
        height = args.size.height,
        living = engine.living_count(),
        strategy = engine.strategy().name(),
        "starting simulation"
    );

    println!("{:>10} {:>10}", "Generation", "Living");
    println!("{:>10} {:>10}", engine.generation(), engine.living_count());

    let mut sim = Simulation::new(engine).with_speed(args.ups);
    let frame = 1.0 / sim.updates_per_second;
    let last_generation = args.generations.saturating_add(1);

    if args.generations > 0 {
        // Starting auto-run advances one generation right away
        sim = sim.toggle_running();
        loop {
            let generation = sim.engine.generation();
            println!("{:>10} {:>10}", generation, sim.engine.living_count());
            if !sim.is_running || generation >= last_generation {
                break;
            }
            if args.realtime {
                std::thread::sleep(Duration::from_secs_f32(frame));
            }
            while sim.is_running && sim.engine.generation() == generation {
                sim = sim.tick(frame);
            }
        }
    }

    let colors = sim.engine.colors();
    let saturated = colors.iter().filter(|c| c.is_saturated()).count();
    let newborn = colors.iter().filter(|&&c| c == Color::NEWLY_BORN).count();
    info!(
        generation = sim.engine.generation(),
        living = sim.engine.living_count(),
        newborn,
        saturated,
        "simulation finished"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate_rejects_non_finite() {
        assert!(parse_rate("NaN").is_err());
        assert!(parse_rate("inf").is_err());
        assert!(parse_rate("0.5").is_err());
        assert!(parse_rate("61").is_err());
        assert_eq!(parse_rate("24"), Ok(24.0));
    }

    #[test]
    fn test_board_size_arg() {
        let size: BoardSizeArg = "12x7".parse().unwrap();
        assert_eq!((size.width, size.height), (12, 7));
        assert!("0x7".parse::<BoardSizeArg>().is_err());
        assert!("12".parse::<BoardSizeArg>().is_err());
    }

    #[test]
    fn test_cli_rejects_nan_rate() {
        assert!(CliArgs::try_parse_from(["conway_life", "--ups", "NaN"]).is_err());
        let args = CliArgs::try_parse_from(["conway_life", "--ups", "30"]).unwrap();
        assert_eq!(args.ups, 30.0);
    }
}
