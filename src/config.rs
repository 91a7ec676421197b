use std::path::Path;

use crate::error::{Error, Result};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Parámetros fijos de la petición a la API de generación
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Configuración de la ejecución, cargada una sola vez al arrancar
#[derive(Clone)]
pub struct Config {
    pub jira_url: String,
    pub jira_username: String,
    pub jira_api_token: String,
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub ticket_id: String,
    pub generation: GenerationSettings,
}

// Las credenciales no deben aparecer en los logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jira_url", &self.jira_url)
            .field("jira_username", &self.jira_username)
            .field("jira_api_token", &"***")
            .field("openai_api_key", &"***")
            .field("openai_api_url", &self.openai_api_url)
            .field("ticket_id", &self.ticket_id)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Config {
    /// Carga la configuración desde el entorno del proceso
    ///
    /// `ticket_override` tiene prioridad sobre `TICKET_ID` / `ticketId`.
    pub fn from_env(ticket_override: Option<String>) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), ticket_override)
    }

    /// Construye la configuración a partir de una función de búsqueda clave/valor
    pub fn from_lookup<F>(lookup: F, ticket_override: Option<String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| -> Option<String> {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &str| get(key).ok_or_else(|| Error::MissingConfig(key.to_string()));

        let ticket_id = match ticket_override.filter(|t| !t.trim().is_empty()) {
            Some(ticket) => ticket.trim().to_string(),
            None => get("TICKET_ID")
                .or_else(|| get("ticketId"))
                .ok_or_else(|| Error::MissingConfig("TICKET_ID".to_string()))?,
        };

        let mut generation = GenerationSettings::default();
        if let Some(model) = get("OPENAI_MODEL") {
            generation.model = model;
        }

        Ok(Config {
            jira_url: require("JIRA_URL")?,
            jira_username: require("JIRA_USERNAME")?,
            jira_api_token: require("JIRA_API_TOKEN")?,
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_api_url: require("OPENAI_API_URL")?,
            ticket_id,
            generation,
        })
    }
}

/// Carga variables desde un archivo `.env`
///
/// Sin ruta explícita se usa `.env` del directorio actual y su ausencia no es un error.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                Error::Config(format!("no se pudo leer {}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "archivo de entorno cargado");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "archivo de entorno cargado"),
            Err(e) if e.not_found() => tracing::debug!("no se encontró archivo .env"),
            Err(e) => return Err(Error::Config(format!("archivo .env inválido: {}", e))),
        },
    }
    Ok(())
}
