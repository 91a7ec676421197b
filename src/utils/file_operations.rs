use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};

use crate::error::Result;
use crate::models::{TestCaseRecord, HEADERS};

pub const DEFAULT_OUTPUT: &str = "test_cases.xlsx";
pub const SHEET_NAME: &str = "Test Cases";

/// Guarda los casos de prueba en el formato que indique la extensión
///
/// `.csv` escribe CSV; cualquier otra extensión escribe XLSX.
pub fn export_test_cases(file_path: &Path, test_cases: &[TestCaseRecord]) -> Result<()> {
    let is_csv = file_path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        save_to_csv(file_path, test_cases)
    } else {
        save_to_xlsx(file_path, test_cases)
    }
}

/// Guarda los casos de prueba en una hoja de cálculo XLSX
///
/// Sobrescribe el archivo existente. El encabezado se escribe siempre.
pub fn save_to_xlsx(file_path: &Path, test_cases: &[TestCaseRecord]) -> Result<()> {
    let mut workbook = Workbook::new();

    // Fecha fija para que la misma entrada produzca el mismo archivo
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, test_case) in test_cases.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in test_case.columns().iter().enumerate() {
            worksheet.write_string(row, col as u16, *value)?;
        }
    }

    workbook.save(file_path)?;
    tracing::debug!(path = %file_path.display(), rows = test_cases.len(), "hoja de cálculo escrita");
    Ok(())
}

/// Guarda los casos de prueba en un archivo CSV con el mismo encabezado
pub fn save_to_csv(file_path: &Path, test_cases: &[TestCaseRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(file_path)?;

    writer.write_record(HEADERS)?;
    for test_case in test_cases {
        writer.serialize(test_case)?;
    }

    writer.flush()?;
    tracing::debug!(path = %file_path.display(), rows = test_cases.len(), "CSV escrito");
    Ok(())
}

/// Guarda el texto generado tal cual, sin procesar
pub fn save_raw_text(file_path: &Path, text: &str) -> Result<()> {
    fs::write(file_path, text)?;
    Ok(())
}
