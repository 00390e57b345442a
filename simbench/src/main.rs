use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use simbench::{run_script, Summary};
use store::{IdCounter, LabelGenerator, Lcg, Script, State, StoreLimits};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "simbench",
    version,
    about = "rowbench row store benchmark harness"
)]
struct Cli {
    /// Measured iterations of the script.
    #[arg(long, default_value_t = 10)]
    iterations: u32,
    /// Unmeasured iterations run first.
    #[arg(long, default_value_t = 1)]
    warmup: u32,
    /// RNG seed for deterministic results.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Comma-separated steps; defaults to the standard benchmark sequence.
    #[arg(long)]
    script: Option<String>,
    /// Output directory for summary.json.
    #[arg(long, default_value = "target/simbench")]
    out_dir: PathBuf,
    /// Fail if any action's p95 time exceeds this many microseconds.
    #[arg(long)]
    max_p95_us: Option<u64>,
    /// Fail if any action's average time exceeds this many microseconds.
    #[arg(long)]
    max_avg_us: Option<u64>,
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let script = match &cli.script {
        Some(text) => text.parse::<Script>().context("parse script")?,
        None => Script::standard(),
    };
    if script.is_empty() {
        anyhow::bail!("script has no steps");
    }
    let limits = StoreLimits::default();

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir {}", cli.out_dir.display()))?;

    let mut rows = LabelGenerator::new(IdCounter::global(), Lcg::new(cli.seed));
    let mut summary = Summary::new(cli.seed, cli.iterations, &script);

    for iteration in 0..total_iterations(&cli) {
        let (state, reports) = run_script(&script, State::initial(), &mut rows, &limits)
            .with_context(|| format!("run script, iteration {iteration}"))?;
        if iteration < cli.warmup {
            tracing::debug!(iteration, "warmup done");
            continue;
        }
        tracing::info!(iteration, final_rows = state.len(), "iteration done");
        summary.push(&reports);
    }

    summary.finalize();
    write_summary_json(&cli.out_dir, &summary)?;
    summary.assert_budgets(cli.max_p95_us, cli.max_avg_us)?;

    Ok(())
}

fn total_iterations(cli: &Cli) -> u32 {
    cli.warmup.saturating_add(cli.iterations)
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_summary_json(out_dir: &Path, summary: &Summary) -> Result<()> {
    let path = out_dir.join("summary.json");
    let contents = serde_json::to_string_pretty(summary).context("serialize summary")?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "summary written");
    Ok(())
}
