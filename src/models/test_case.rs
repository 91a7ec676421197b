use serde::Serialize;

/// Encabezados fijos de la hoja de cálculo, en orden de columna
pub const HEADERS: [&str; 4] = ["Test Case ID", "Scenario", "Steps", "Expected Result"];

/// Caso de prueba extraído del texto generado
///
/// Los campos que el parser no reconoce quedan como cadena vacía.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct TestCaseRecord {
    #[serde(rename = "Test Case ID")]
    pub id: String,
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Steps")]
    pub steps: String,
    #[serde(rename = "Expected Result")]
    pub expected_result: String,
}

impl TestCaseRecord {
    /// Valores de la fila en el mismo orden que `HEADERS`
    pub fn columns(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.scenario.as_str(),
            self.steps.as_str(),
            self.expected_result.as_str(),
        ]
    }
}
