use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod models;
mod utils;

use commands::{generate, GenerateOptions};
use config::{load_env_file, Config};
use utils::DEFAULT_OUTPUT;

#[derive(Parser)]
#[command(author, version, about = "Genera casos de prueba a partir de un ticket de Jira", long_about = None)]
struct Cli {
    /// Clave del ticket de Jira (por defecto TICKET_ID)
    ticket_id: Option<String>,

    /// Archivo de salida (.xlsx o .csv)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Archivo .env a cargar en lugar del .env del directorio actual
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Guarda también el texto generado sin procesar
    #[arg(long)]
    raw_output: Option<PathBuf>,

    /// Muestra los casos de prueba sin escribir la hoja de cálculo
    #[arg(long)]
    dry_run: bool,

    /// Activa los logs de depuración
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    load_env_file(cli.env_file.as_deref())?;
    let config = Config::from_env(cli.ticket_id)?;
    tracing::debug!(?config, "configuración cargada");

    let options = GenerateOptions {
        output: cli.output,
        raw_output: cli.raw_output,
        dry_run: cli.dry_run,
    };

    let outcome = generate(&config, &options)?;
    tracing::info!(
        test_cases = outcome.test_cases.len(),
        output = ?outcome.written_to,
        "ejecución completada"
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("test_case_generator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
