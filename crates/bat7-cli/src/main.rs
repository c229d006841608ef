use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use bat7_cli::commands;
use bat7_cli::config;

/// BAT-7 results analytics.
#[derive(Debug, Parser)]
#[command(name = "bat7", version, about)]
struct Cli {
    /// Override the configured data directory.
    #[arg(long, global = true, env = "BAT7_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true, env = "BAT7_LOG_JSON")]
    log_json: bool,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build reports for stored patients.
    Report {
        #[arg(required = true)]
        patient_ids: Vec<Uuid>,
    },
    /// Build a report from a JSON file of result records.
    Analyze { file: PathBuf },
    /// List patients with stored results.
    Patients,
    /// Print the aptitude catalog.
    Aptitudes,
    /// Inspect or write the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective config.
    Show,
    /// Write the effective config to the default location.
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = config::load_config()?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    match cli.command {
        Command::Report { patient_ids } => {
            let repo = commands::build_repository(&config);
            let reports = commands::report_patients(&repo, &patient_ids).await?;
            print_json(&reports, cli.pretty)?;
        }
        Command::Analyze { file } => {
            let report = commands::analyze_file(&file)?;
            print_json(&report, cli.pretty)?;
        }
        Command::Patients => {
            let repo = commands::build_repository(&config);
            for id in commands::list_patients(&repo).await? {
                println!("{id}");
            }
        }
        Command::Aptitudes => print_json(&commands::catalog(), cli.pretty)?,
        Command::Config { action } => match action {
            ConfigAction::Show => print_json(&config, true)?,
            ConfigAction::Init => {
                let path = config::save_config(&config)?;
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

fn init_tracing(json: bool) {
    // Logs go to stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
