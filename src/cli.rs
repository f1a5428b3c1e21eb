//! CLI interface for launchpad.
//!
//! Each subcommand reads one mission description, runs one decision
//! flow, and writes the result as JSON:
//!
//! - `launchpad run`: the full pipeline, with optional execution.
//! - `launchpad simulate`: a quick go/no-go, gated or risk-scored.
//!
//! The mission comes from `--mission-file` or `--mission-json`.
//! The process exits 0 when the mission is cleared, 1 when it is not
//! (or something went wrong), and 2 when the mission could not be read.

mod format;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use launchpad::{
    execute::ExecutionKind,
    model::{MissionDescription, MissionError},
    pipeline::MissionPipeline,
    planner::PlannerKind,
};

use crate::config::Config;

use format::{describe_run, describe_simulation};

/// launchpad: go/no-go decisions for orbital missions.
#[derive(Debug, Parser)]
#[command(name = "launchpad", after_long_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Config file (default: `~/.launchpad/config.toml`, if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

const EXAMPLES_HELP: &str = r#"Examples:
  launchpad run -j '{"orbit": "LEO", "duration_days": 30}'
  launchpad run -f mission.json --planner summary --execution orchestrated
  launchpad simulate -f mission.json --mode risk --out decision.json

Exit codes:
  0  mission approved (or PROCEED)
  1  mission not approved, or a runtime error
  2  mission description missing, unreadable, or malformed"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full pipeline: safety, plan, (execute), validate.
    ///
    /// Prints the run result as JSON.
    Run {
        #[command(flatten)]
        mission: MissionSource,

        /// Planner strategy (overrides config).
        #[arg(long, value_enum)]
        planner: Option<PlannerArg>,

        /// Execution stage before validation (overrides config).
        #[arg(long, value_enum)]
        execution: Option<ExecutionArg>,

        /// Write the result JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Quick decision without executing anything.
    ///
    /// `gated` screens, plans, and validates. `risk` scores the orbit class only.
    Simulate {
        #[command(flatten)]
        mission: MissionSource,

        /// Which decision flow to use.
        #[arg(long, value_enum, default_value = "gated")]
        mode: SimulationMode,

        /// Planner strategy for the gated flow (overrides config).
        #[arg(long, value_enum)]
        planner: Option<PlannerArg>,

        /// Write the outcome JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Where to read the mission description from. Exactly one is required.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct MissionSource {
    /// Path to a mission JSON file.
    #[arg(long, short = 'f')]
    mission_file: Option<PathBuf>,

    /// Mission as a JSON string (escape it for your shell).
    #[arg(long, short = 'j')]
    mission_json: Option<String>,
}

impl MissionSource {
    fn load(&self) -> Result<MissionDescription, MissionError> {
        match (&self.mission_file, &self.mission_json) {
            (Some(path), _) => {
                let json = fs::read_to_string(path).map_err(|source| MissionError::Io {
                    path: path.clone(),
                    source,
                })?;
                MissionDescription::from_json_str(&json)
            }
            (None, Some(json)) => MissionDescription::from_json_str(json),
            (None, None) => Err(MissionError::Malformed(
                "no mission given; use --mission-file or --mission-json".to_string(),
            )),
        }
    }
}

/// CLI-facing planner choice, mapped to the domain `PlannerKind`.
#[derive(Debug, Clone, ValueEnum)]
pub enum PlannerArg {
    /// Orbit, duration, and payload status only.
    Summary,
    /// Summary fields plus initialize, maneuver, and deploy steps.
    Stepwise,
}

impl PlannerArg {
    fn to_domain(&self) -> PlannerKind {
        match self {
            Self::Summary => PlannerKind::Summary,
            Self::Stepwise => PlannerKind::Stepwise,
        }
    }
}

/// CLI-facing execution choice, mapped to the domain `ExecutionKind`.
#[derive(Debug, Clone, ValueEnum)]
pub enum ExecutionArg {
    /// Validate the plan without executing it.
    None,
    /// Dry-run the whole plan in one go.
    Direct,
    /// Dry-run the plan one step at a time.
    Orchestrated,
}

impl ExecutionArg {
    fn to_domain(&self) -> ExecutionKind {
        match self {
            Self::None => ExecutionKind::None,
            Self::Direct => ExecutionKind::Direct,
            Self::Orchestrated => ExecutionKind::Orchestrated,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum SimulationMode {
    /// Safety screen, plan, feasibility check.
    Gated,
    /// Risk tier from orbit class alone.
    Risk,
}

/// Errors that stop the CLI before it can report a decision.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Mission(#[from] MissionError),

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Mission(_) => 2,
            Self::Serialize(_) | Self::Write { .. } => 1,
        }
    }
}

/// Run the parsed command. Returns whether the mission was cleared.
pub fn run(cli: Cli, config: &Config) -> Result<bool, CliError> {
    match cli.command {
        Command::Run {
            mission,
            planner,
            execution,
            out,
        } => {
            let mission = mission.load()?;
            let planner = planner.as_ref().map_or(config.planner, PlannerArg::to_domain);
            let execution = execution
                .as_ref()
                .map_or(config.execution, ExecutionArg::to_domain);
            cmd_run(&mission, planner, execution, out.as_deref())
        }
        Command::Simulate {
            mission,
            mode,
            planner,
            out,
        } => {
            let mission = mission.load()?;
            let planner = planner.as_ref().map_or(config.planner, PlannerArg::to_domain);
            cmd_simulate(&mission, &mode, planner, out.as_deref())
        }
    }
}

fn cmd_run(
    mission: &MissionDescription,
    planner: PlannerKind,
    execution: ExecutionKind,
    out: Option<&Path>,
) -> Result<bool, CliError> {
    let mut pipeline = MissionPipeline::new(planner.build());
    if let Some(strategy) = execution.build() {
        pipeline = pipeline.with_execution(strategy);
    }

    let result = pipeline.run_mission(mission);
    emit(&result, out, || describe_run(&result))?;
    Ok(result.success)
}

fn cmd_simulate(
    mission: &MissionDescription,
    mode: &SimulationMode,
    planner: PlannerKind,
    out: Option<&Path>,
) -> Result<bool, CliError> {
    let pipeline = MissionPipeline::new(planner.build());
    let outcome = match mode {
        SimulationMode::Gated => pipeline.simulate_mission(mission),
        SimulationMode::Risk => pipeline.simulate_risk(mission),
    };
    emit(&outcome, out, || describe_simulation(mission, &outcome))?;
    Ok(outcome.is_go())
}

/// Write `value` as pretty JSON to `out`, or to stdout.
///
/// When writing to a file, a one-line summary goes to stderr.
fn emit<T: Serialize>(
    value: &T,
    out: Option<&Path>,
    summary: impl FnOnce() -> String,
) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;

    match out {
        Some(path) => {
            fs::write(path, &json).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!("{} → {}", summary(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
