use thiserror::Error;

/// Errores que abortan la ejecución completa
#[derive(Error, Debug)]
pub enum Error {
    #[error("Falta la variable de configuración requerida: {0}")]
    MissingConfig(String),

    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Jira rechazó las credenciales (HTTP {0})")]
    JiraAuth(u16),

    #[error("Ticket no encontrado en Jira: {0}")]
    TicketNotFound(String),

    #[error("Error de Jira: {0}")]
    Jira(String),

    #[error("La API de generación respondió HTTP {status}: {body}")]
    GenerationStatus { status: u16, body: String },

    #[error("Respuesta inválida de la API de generación: {0}")]
    MalformedResponse(String),

    #[error("Error HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error al escribir la hoja de cálculo: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Error de CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
