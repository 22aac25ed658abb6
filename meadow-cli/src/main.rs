use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meadow_core::Simulation;
use meadow_types::{WorldConfig, WorldSnapshot};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meadow-cli")]
#[command(about = "Meadow predator-prey field simulation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the simulation for a number of steps and report a summary.
    Run {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 100)]
        steps: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Advance a few steps and optionally print the full world state.
    Step {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        steps: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = false)]
        print_state: bool,
    },
    /// Export a per-step snapshot trace.
    Export {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 50)]
        steps: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = ExportFormat::Jsonl)]
        format: ExportFormat,
        #[arg(long)]
        out: PathBuf,
    },
    /// Summarize a previously exported trace.
    Replay {
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    steps: u32,
    seed: u64,
    final_step: u64,
    animals: u32,
    rabbits: u32,
    foxes: u32,
    snakes: u32,
    births_last_step: u32,
    deaths_last_step: u32,
}

#[derive(Debug, Serialize)]
struct StepSummary {
    steps: u32,
    final_step: u64,
    births_last_step: u32,
    deaths_last_step: u32,
    predations_last_step: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            steps,
            seed,
            format,
            out,
        } => run_command(config, steps, seed, format, out),
        Commands::Step {
            config,
            steps,
            seed,
            print_state,
        } => step_command(config, steps, seed, print_state),
        Commands::Export {
            config,
            steps,
            seed,
            format,
            out,
        } => export_command(config, steps, seed, format, out),
        Commands::Replay { input } => replay_command(input),
    }
}

fn run_command(
    config_path: Option<PathBuf>,
    steps: u32,
    seed: u64,
    format: OutputFormat,
    out: Option<PathBuf>,
) -> Result<()> {
    let cfg = load_config(config_path)?;
    let mut sim = Simulation::new(cfg, seed)?;
    sim.step_n(steps);
    let snapshot = sim.snapshot();

    let summary = summarize(steps, seed, &snapshot);
    match format {
        OutputFormat::Pretty => {
            let text = format!(
                "steps={} seed={} final_step={} animals={} rabbits={} foxes={} snakes={} births_last_step={} deaths_last_step={}",
                summary.steps,
                summary.seed,
                summary.final_step,
                summary.animals,
                summary.rabbits,
                summary.foxes,
                summary.snakes,
                summary.births_last_step,
                summary.deaths_last_step
            );
            write_output(text, out)?;
        }
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(&summary)?;
            write_output(text, out)?;
        }
    }

    Ok(())
}

fn step_command(
    config_path: Option<PathBuf>,
    steps: u32,
    seed: u64,
    print_state: bool,
) -> Result<()> {
    let cfg = load_config(config_path)?;
    let mut sim = Simulation::new(cfg, seed)?;
    sim.step_n(steps.max(1));
    let snapshot = sim.snapshot();

    let summary = StepSummary {
        steps: steps.max(1),
        final_step: snapshot.step,
        births_last_step: snapshot.metrics.births_last_step,
        deaths_last_step: snapshot.metrics.deaths_last_step,
        predations_last_step: snapshot.metrics.predations_last_step,
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    if print_state {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

fn export_command(
    config_path: Option<PathBuf>,
    steps: u32,
    seed: u64,
    format: ExportFormat,
    out: PathBuf,
) -> Result<()> {
    let cfg = load_config(config_path)?;
    let mut sim = Simulation::new(cfg, seed)?;
    let lines = sim.export_trace_jsonl(steps);

    let payload = match format {
        ExportFormat::Jsonl => lines.join("\n"),
        ExportFormat::Json => {
            let snapshots: Vec<WorldSnapshot> = lines
                .iter()
                .map(|line| serde_json::from_str::<WorldSnapshot>(line))
                .collect::<std::result::Result<_, _>>()?;
            serde_json::to_string_pretty(&snapshots)?
        }
    };

    fs::write(&out, payload)
        .with_context(|| format!("failed writing export to {}", out.display()))?;
    println!("exported trace to {}", out.display());
    Ok(())
}

fn replay_command(input: PathBuf) -> Result<()> {
    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read replay input {}", input.display()))?;

    let snapshots: Vec<WorldSnapshot> = if input
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
    {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str::<WorldSnapshot>)
            .collect::<std::result::Result<_, _>>()?
    } else {
        serde_json::from_str::<Vec<WorldSnapshot>>(&content)
            .or_else(|_| {
                content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(serde_json::from_str::<WorldSnapshot>)
                    .collect::<std::result::Result<Vec<_>, _>>()
            })
            .context("input is neither valid JSON array nor JSONL snapshots")?
    };

    let last = snapshots.last().context("replay input is empty")?;
    let summary = summarize(last.step as u32, last.rng_seed, last);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn summarize(steps: u32, seed: u64, snapshot: &WorldSnapshot) -> RunSummary {
    RunSummary {
        steps,
        seed,
        final_step: snapshot.step,
        animals: snapshot.metrics.animals,
        rabbits: snapshot.metrics.rabbits,
        foxes: snapshot.metrics.foxes,
        snakes: snapshot.metrics.snakes,
        births_last_step: snapshot.metrics.births_last_step,
        deaths_last_step: snapshot.metrics.deaths_last_step,
    }
}

fn load_config(path: Option<PathBuf>) -> Result<WorldConfig> {
    if let Some(path) = path {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let cfg: WorldConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse TOML config {}", path.display()))?;
        Ok(cfg)
    } else {
        Ok(WorldConfig::default())
    }
}

fn write_output(text: String, out: Option<PathBuf>) -> Result<()> {
    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed creating output directory {}", parent.display()))?;
        }
        fs::write(&path, text).with_context(|| format!("failed writing {}", path.display()))?;
        println!("wrote output to {}", path.display());
    } else {
        println!("{text}");
    }
    Ok(())
}
