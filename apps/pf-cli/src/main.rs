use clap::{Parser, Subcommand};
use pf_app::{AppResult, StudyConfig, StudyOutcome, persist_outputs, run_configured_study};
use pf_results::export;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "Power-flow result viewer - compile, solve and report an OpenDSS circuit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct StudyArgs {
    /// Study config YAML (circuit, engine, outputs)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Circuit to compile, overrides the config
    #[arg(long)]
    circuit: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the circuit, print the reference-phase voltages and write configured outputs
    Run {
        #[command(flatten)]
        study: StudyArgs,
        /// Directory for report.json and the CSV tables
        #[arg(long)]
        csv_dir: Option<PathBuf>,
        /// HTML file with the voltage and current charts
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Export the node voltage table as CSV
    Voltages {
        #[command(flatten)]
        study: StudyArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the line current table as CSV
    Currents {
        #[command(flatten)]
        study: StudyArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            study,
            csv_dir,
            html,
        } => cmd_run(&study, csv_dir, html),
        Commands::Voltages { study, output } => cmd_voltages(&study, output.as_deref()),
        Commands::Currents { study, output } => cmd_currents(&study, output.as_deref()),
    }
}

fn load_config(args: &StudyArgs) -> AppResult<StudyConfig> {
    let mut config = StudyConfig::load_or_default(args.config.as_deref())?;
    if let Some(circuit) = &args.circuit {
        config.circuit = circuit.clone();
    }
    Ok(config)
}

fn cmd_run(args: &StudyArgs, csv_dir: Option<PathBuf>, html: Option<PathBuf>) -> AppResult<()> {
    let mut config = load_config(args)?;
    if csv_dir.is_some() {
        config.output.csv_dir = csv_dir;
    }
    if html.is_some() {
        config.output.html = html;
    }

    let outcome = run_configured_study(&config)?;
    print!("{}", outcome.console_report());

    let StudyOutcome::Converged(results) = outcome else {
        return Ok(());
    };

    println!(
        "\n{} node voltages, {} line currents",
        results.voltages.len(),
        results.currents.len()
    );

    let written = persist_outputs(&results, &config.output)?;
    if let Some(dir) = written.report_dir {
        tracing::info!(dir = %dir.display(), "report written");
    }
    if let Some(path) = written.html {
        tracing::info!(path = %path.display(), "charts written");
    }

    Ok(())
}

fn cmd_voltages(args: &StudyArgs, output: Option<&Path>) -> AppResult<()> {
    let config = load_config(args)?;
    let results = run_configured_study(&config)?.into_results()?;

    if let Some(path) = output {
        export::write_voltage_csv(path, &results.voltages)?;
        tracing::info!(
            records = results.voltages.len(),
            path = %path.display(),
            "node voltages exported"
        );
    } else {
        print!("{}", export::voltage_csv(&results.voltages));
    }

    Ok(())
}

fn cmd_currents(args: &StudyArgs, output: Option<&Path>) -> AppResult<()> {
    let config = load_config(args)?;
    let results = run_configured_study(&config)?.into_results()?;

    if let Some(path) = output {
        export::write_current_csv(path, &results.currents)?;
        tracing::info!(
            records = results.currents.len(),
            path = %path.display(),
            "line currents exported"
        );
    } else {
        print!("{}", export::current_csv(&results.currents));
    }

    Ok(())
}
