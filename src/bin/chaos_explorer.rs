//! Chaos Explorer: Command-Line Front End
//!
//! Runs one of the three systems with slider-equivalent parameters and
//! prints what an interactive front end would draw.
//!
//! ## Protocol
//!
//! 1. Start from the default slider positions of the chosen system
//! 2. Apply `--param name=value` overrides
//! 3. Recompute the trajectory
//! 4. Print title, per-column ranges and endpoints
//! 5. Optionally dump the trajectory as CSV and render the sonification
//!
//! With `--csv`, stdout carries nothing but the CSV; everything else is
//! logged to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use chaos_dynamics::explorer::{parse_override, slider_values_with_overrides};
use chaos_dynamics::{
    Error, Explorer, ExplorerConfig, PlotKind, Result, SimulationOutput, SystemKind,
};
use clap::Parser;
use ndarray::Axis;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "chaos_explorer")]
#[command(about = "Simulate the logistic map, the Lorenz system or the bifurcation diagram")]
struct Cli {
    /// System to run: logistic, lorenz or bifurcation
    system: SystemKind,

    /// Slider override, e.g. --param rho=14.5 (repeatable)
    #[arg(short, long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,

    /// Trajectory length for the logistic map and Lorenz views
    #[arg(long)]
    iterations: Option<usize>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full trajectory as CSV
    #[arg(long)]
    csv: bool,

    /// Render the logistic map to a PCM buffer and report its layout
    #[arg(long)]
    sonify: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chaos_explorer=info,chaos_dynamics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = explore(&cli, &mut io::stdout().lock()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn explore(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if cli.sonify && !cli.system.supports_sonification() {
        return Err(Error::UnsupportedSonification(cli.system));
    }

    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::from_path(path)?,
        None => ExplorerConfig::default(),
    };
    if let Some(n) = cli.iterations {
        config.num_iterations = n;
    }

    let overrides = cli
        .params
        .iter()
        .map(|arg| parse_override(arg))
        .collect::<Result<Vec<_>>>()?;
    let values = slider_values_with_overrides(cli.system, &overrides)?;

    let explorer = Explorer::new(config)?;
    let params = explorer.parameters(cli.system, &values)?;

    if cli.csv {
        info!(title = %params.title(), "simulating");
    } else {
        writeln!(out, "═══════════════════════════════════════════════════════════════")?;
        writeln!(out, "  Chaos Explorer: {}", cli.system)?;
        writeln!(out, "═══════════════════════════════════════════════════════════════\n")?;
        writeln!(out, "{}\n", params.title())?;
        info!(system = %cli.system, "simulating");
    }

    let output = chaos_dynamics::run(&params);

    if cli.csv {
        write_csv(out, &output)?;
    } else {
        write_summary(out, &output)?;
    }

    if cli.sonify {
        let buffer = explorer.sonify(&params)?;
        let sonifier = explorer.sonifier();
        let duration = sonifier.duration_secs(buffer.len());
        let frequencies = output
            .as_logistic()
            .map(|trajectory| min_max(sonifier.frequencies(trajectory).into_iter()));

        if cli.csv {
            info!(
                tones = output.len(),
                sample_rate = sonifier.config().sample_rate,
                samples = buffer.len(),
                seconds = duration,
                "sonified"
            );
        } else {
            writeln!(out, "\nSonification:")?;
            writeln!(out, "  Tones:        {}", output.len())?;
            writeln!(out, "  Sample rate:  {} Hz", sonifier.config().sample_rate)?;
            writeln!(out, "  Samples:      {}", buffer.len())?;
            writeln!(out, "  Duration:     {:.3} s", duration)?;
            if let Some((lo, hi)) = frequencies {
                writeln!(out, "  Frequencies:  {:.1} Hz → {:.1} Hz", lo, hi)?;
            }
        }
    }

    Ok(())
}

fn write_summary(out: &mut impl Write, output: &SimulationOutput) -> io::Result<()> {
    let points = output.to_array();
    let names = output.column_names();

    let plot = match output.plot_kind() {
        PlotKind::Scatter2D => "2D scatter",
        PlotKind::Curve3D => "3D curve",
    };
    writeln!(out, "Plot:    {}", plot)?;
    writeln!(out, "Samples: {}", output.len())?;

    if output.is_empty() {
        writeln!(out, "\n  (empty trajectory)")?;
        return Ok(());
    }

    writeln!(out, "\nColumn ranges:")?;
    writeln!(out, "─────────────────────────────────────────────────────────────")?;
    for (name, column) in names.iter().zip(points.axis_iter(Axis(1))) {
        let (lo, hi) = min_max(column.iter().copied());
        writeln!(out, "  {:>3}: [{:>12.6}, {:>12.6}]", name, lo, hi)?;
    }

    let first = points.row(0);
    let last = points.row(points.nrows() - 1);
    writeln!(out, "\nEndpoints:")?;
    writeln!(out, "  first: {}", format_row(first.iter().copied()))?;
    writeln!(out, "  last:  {}", format_row(last.iter().copied()))
}

fn write_csv(out: &mut impl Write, output: &SimulationOutput) -> io::Result<()> {
    writeln!(out, "{}", output.column_names().join(","))?;
    for row in output.to_array().rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

fn format_row(values: impl Iterator<Item = f64>) -> String {
    let cells: Vec<String> = values.map(|v| format!("{:.6}", v)).collect();
    format!("({})", cells.join(", "))
}

/// NaNs are ignored; an all-NaN column reports (inf, -inf)
fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
