use crate::models::TestCaseRecord;

/// Delimitador que precede a cada caso de prueba en el texto generado
pub const CASE_DELIMITER: &str = "- Test Case ID: ";

const SCENARIO_MARKER: &str = "Scenario:";
const FIRST_STEP_MARKER: &str = "    1.";
const EXPECTED_MARKER: &str = "Expected Result:";

/// Convierte el texto libre generado en casos de prueba
pub trait TestCaseParser {
    fn parse(&self, text: &str) -> Vec<TestCaseRecord>;
}

/// Parser línea a línea de mejor esfuerzo
///
/// Nunca falla: los campos que no coinciden quedan vacíos. De los pasos solo
/// se conserva la línea `    1.`; los pasos siguientes se descartan.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestEffortParser;

impl TestCaseParser for BestEffortParser {
    fn parse(&self, text: &str) -> Vec<TestCaseRecord> {
        // El primer segmento es el texto previo al primer delimitador
        text.split(CASE_DELIMITER)
            .skip(1)
            .filter(|segment| !segment.trim().is_empty())
            .map(parse_segment)
            .collect()
    }
}

fn parse_segment(segment: &str) -> TestCaseRecord {
    let mut lines = segment.lines();
    let mut record = TestCaseRecord {
        id: lines.next().unwrap_or_default().trim().to_string(),
        ..Default::default()
    };

    for line in lines {
        if line.contains(SCENARIO_MARKER) {
            record.scenario = after_first_colon(line);
        } else if line.starts_with(FIRST_STEP_MARKER) {
            record.steps = line.trim().to_string();
        } else if line.starts_with(EXPECTED_MARKER) {
            record.expected_result = after_first_colon(line);
        }
    }

    record
}

fn after_first_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}
