use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use store::{IdCounter, LabelGenerator, Lcg, Script, StoreLimits, BUTTONS};
use tools::{format_state_pretty, replay, RowChange, StateDump};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rowbench-tools",
    version,
    about = "rowbench replay and inspection tools"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a script and print the final state.
    Replay {
        /// Comma-separated steps, e.g. `run,select:5,remove:5`.
        #[arg(long, default_value = "run")]
        script: String,
        /// RNG seed for deterministic labels.
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
        /// Maximum number of rows printed in pretty format.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Replay a script and explain each step as a keyed change.
    Explain {
        /// Comma-separated steps, e.g. `run,update,swaprows`.
        #[arg(long)]
        script: Option<String>,
        /// RNG seed for deterministic labels.
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// List the benchmark toolbar buttons.
    Buttons,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Serialize)]
struct ExplainLine {
    step: String,
    rows: usize,
    #[serde(flatten)]
    change: RowChange,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Replay {
            script,
            seed,
            format,
            limit,
        } => {
            let script: Script = script.parse().context("parse script")?;
            let mut rows = LabelGenerator::new(IdCounter::global(), Lcg::new(seed));
            let steps =
                replay(&script, &mut rows, &StoreLimits::default()).context("replay script")?;
            let state = steps.last().map(|step| step.state.clone()).unwrap_or_default();
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&StateDump::new(&state))
                        .context("serialize state")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_state_pretty(&state, limit));
                }
            }
        }
        Command::Explain {
            script,
            seed,
            format,
        } => {
            let script = match script {
                Some(text) => text.parse::<Script>().context("parse script")?,
                None => Script::standard(),
            };
            let mut rows = LabelGenerator::new(IdCounter::global(), Lcg::new(seed));
            let steps =
                replay(&script, &mut rows, &StoreLimits::default()).context("replay script")?;
            let lines: Vec<ExplainLine> = steps
                .iter()
                .map(|step| ExplainLine {
                    step: step.step.to_string(),
                    rows: step.state.len(),
                    change: step.change,
                })
                .collect();
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&lines).context("serialize steps")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => print_explain(&lines),
            }
        }
        Command::Buttons => {
            for button in BUTTONS {
                println!("{:<10} {}", button.id, button.caption);
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_explain(lines: &[ExplainLine]) {
    println!(
        "{:<12} {:>6} {:>7} {:>7} {:>10} {:>6} {:>7}  selection",
        "step", "rows", "created", "removed", "relabelled", "moved", "shared"
    );
    for line in lines {
        let change = &line.change;
        println!(
            "{:<12} {:>6} {:>7} {:>7} {:>10} {:>6} {:>7}  {}",
            line.step,
            line.rows,
            change.created,
            change.removed,
            change.relabelled,
            change.moved,
            change.shared,
            if change.selection_changed { "changed" } else { "-" }
        );
    }
}
