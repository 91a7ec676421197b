use std::path::{Path, PathBuf};

use colored::*;

use crate::config::Config;
use crate::error::Result;
use crate::models::TestCaseRecord;
use crate::utils::{
    export_test_cases, fetch_ticket, generate_test_cases, save_raw_text, BestEffortParser,
    TestCaseParser,
};

/// Opciones del comando de generación
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub raw_output: Option<PathBuf>,
    pub dry_run: bool,
}

/// Resultado de una ejecución completa
#[derive(Debug)]
pub struct GenerateOutcome {
    pub test_cases: Vec<TestCaseRecord>,
    pub written_to: Option<PathBuf>,
}

/// Obtiene el ticket, genera los casos de prueba y los guarda en la hoja de cálculo
pub fn generate(config: &Config, options: &GenerateOptions) -> Result<GenerateOutcome> {
    println!(
        "{}",
        format!("Obteniendo ticket {} de Jira...", config.ticket_id).blue()
    );
    let ticket = fetch_ticket(config, &config.ticket_id)?;
    tracing::info!(ticket = %ticket.id, title = %ticket.title, "ticket obtenido");
    println!("{} {}", "Ticket:".green(), ticket.title);

    println!("{}", "Generando casos de prueba...".blue());
    let generated = generate_test_cases(config, &ticket.title, &ticket.description)?;

    process_generated_text(&BestEffortParser, &generated, options)
}

/// Procesa el texto generado según las opciones
///
/// En modo simulación solo muestra los casos; no escribe ningún archivo.
/// El texto sin procesar se guarda después de la hoja de cálculo.
pub fn process_generated_text(
    parser: &dyn TestCaseParser,
    generated: &str,
    options: &GenerateOptions,
) -> Result<GenerateOutcome> {
    if options.dry_run {
        let test_cases = parser.parse(generated);
        print_test_cases(&test_cases);
        return Ok(GenerateOutcome {
            test_cases,
            written_to: None,
        });
    }

    let test_cases = export_generated_text(parser, generated, &options.output)?;

    if let Some(raw_path) = &options.raw_output {
        save_raw_text(raw_path, generated)?;
        println!(
            "{}",
            format!("Texto generado guardado en {}", raw_path.display()).green()
        );
    }

    println!(
        "{}",
        format!("Test cases saved to {}", options.output.display()).green()
    );

    Ok(GenerateOutcome {
        test_cases,
        written_to: Some(options.output.clone()),
    })
}

/// Extrae los casos de prueba del texto generado y los escribe en `output`
pub fn export_generated_text(
    parser: &dyn TestCaseParser,
    generated: &str,
    output: &Path,
) -> Result<Vec<TestCaseRecord>> {
    let test_cases = parser.parse(generated);
    if test_cases.is_empty() {
        tracing::warn!("no se reconoció ningún caso de prueba en el texto generado");
    }

    export_test_cases(output, &test_cases)?;
    Ok(test_cases)
}

/// Muestra los casos de prueba en la terminal
fn print_test_cases(test_cases: &[TestCaseRecord]) {
    if test_cases.is_empty() {
        println!("{}", "No se reconocieron casos de prueba.".yellow());
        return;
    }

    for test_case in test_cases {
        println!("{}", format!("[{}]", test_case.id).cyan());
        println!("  Scenario: {}", test_case.scenario);
        println!("  Steps: {}", test_case.steps);
        println!("  Expected Result: {}", test_case.expected_result);
    }
    println!(
        "{}",
        format!("{} caso(s) de prueba (simulación, no se escribió ningún archivo)", test_cases.len())
            .yellow()
    );
}
