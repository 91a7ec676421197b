use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::Ticket;

/// Cliente de Jira con vida limitada a una consulta
///
/// La conexión se libera al soltar el valor, en cualquier camino de salida.
pub struct JiraClient {
    client: Client,
    base_url: String,
    username: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.jira_url.clone(),
            username: config.jira_username.clone(),
            api_token: config.jira_api_token.clone(),
        }
    }

    /// Obtiene un ticket por su clave (p. ej. `PROJ-123`)
    pub fn get_issue(&self, ticket_id: &str) -> Result<Ticket> {
        let url = issue_url(&self.base_url, ticket_id)?;
        tracing::debug!(%url, "consultando ticket en Jira");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, ticket_id));
        }

        let json: Value = response
            .json()
            .map_err(|e| Error::Jira(format!("respuesta no es JSON válido: {}", e)))?;
        parse_issue(ticket_id, &json)
    }
}

/// Obtiene el título y la descripción de un ticket
pub fn fetch_ticket(config: &Config, ticket_id: &str) -> Result<Ticket> {
    let client = JiraClient::new(config);
    client.get_issue(ticket_id)
}

/// La clave del ticket se escapa como un único segmento de ruta
fn issue_url(base_url: &str, ticket_id: &str) -> Result<Url> {
    let invalid = || Error::Config(format!("JIRA_URL no es una URL base válida: {}", base_url));

    let mut url = Url::parse(base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(["rest", "api", "2", "issue", ticket_id]);
    url.set_query(Some("fields=summary,description"));
    Ok(url)
}

fn status_error(status: StatusCode, ticket_id: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::JiraAuth(status.as_u16()),
        StatusCode::NOT_FOUND => Error::TicketNotFound(ticket_id.to_string()),
        other => Error::Jira(format!("HTTP {} al consultar {}", other, ticket_id)),
    }
}

/// Extrae `summary` y `description` sin transformarlos
fn parse_issue(ticket_id: &str, json: &Value) -> Result<Ticket> {
    let fields = json
        .get("fields")
        .ok_or_else(|| Error::Jira("la respuesta no contiene 'fields'".to_string()))?;

    let title = fields
        .get("summary")
        .and_then(|s| s.as_str())
        .ok_or_else(|| Error::Jira("la respuesta no contiene 'fields.summary'".to_string()))?
        .to_string();

    let description = match fields.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            return Err(Error::Jira(
                "'fields.description' no es texto".to_string(),
            ))
        }
    };

    let id = json
        .get("key")
        .and_then(|k| k.as_str())
        .unwrap_or(ticket_id)
        .to_string();

    Ok(Ticket {
        id,
        title,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_url_strips_trailing_slash() {
        let expected =
            "https://example.atlassian.net/rest/api/2/issue/PROJ-7?fields=summary,description";
        assert_eq!(
            issue_url("https://example.atlassian.net/", "PROJ-7").unwrap().as_str(),
            expected
        );
        assert_eq!(
            issue_url("https://example.atlassian.net", "PROJ-7").unwrap().as_str(),
            expected
        );
    }

    #[test]
    fn test_issue_url_keeps_base_path() {
        assert_eq!(
            issue_url("https://tracker.example.com/jira/", "PROJ-7")
                .unwrap()
                .as_str(),
            "https://tracker.example.com/jira/rest/api/2/issue/PROJ-7?fields=summary,description"
        );
    }

    #[test]
    fn test_issue_url_escapes_ticket_key() {
        let url = issue_url("https://example.atlassian.net", "PROJ-7/../x?y z").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.atlassian.net/rest/api/2/issue/PROJ-7%2F..%2Fx%3Fy%20z?fields=summary,description"
        );
        assert_eq!(url.query(), Some("fields=summary,description"));
    }

    #[test]
    fn test_issue_url_rejects_invalid_base() {
        assert!(matches!(issue_url("not a url", "PROJ-7"), Err(Error::Config(_))));
        assert!(matches!(
            issue_url("mailto:qa@example.com", "PROJ-7"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_parse_issue_returns_fields_verbatim() {
        let body = json!({
            "key": "PROJ-7",
            "fields": {
                "summary": "  Login page  ",
                "description": "Users must log in.\n\nWith SSO too."
            }
        });
        let ticket = parse_issue("PROJ-7", &body).unwrap();
        assert_eq!(ticket.id, "PROJ-7");
        assert_eq!(ticket.title, "  Login page  ");
        assert_eq!(ticket.description, "Users must log in.\n\nWith SSO too.");
    }

    #[test]
    fn test_parse_issue_null_description_is_empty() {
        let body = json!({ "fields": { "summary": "Title", "description": null } });
        let ticket = parse_issue("PROJ-8", &body).unwrap();
        assert_eq!(ticket.id, "PROJ-8");
        assert_eq!(ticket.description, "");
    }

    #[test]
    fn test_parse_issue_missing_description_is_empty() {
        let body = json!({ "fields": { "summary": "Title" } });
        assert_eq!(parse_issue("PROJ-8", &body).unwrap().description, "");
    }

    #[test]
    fn test_parse_issue_without_summary_is_malformed() {
        let body = json!({ "fields": { "description": "x" } });
        assert!(matches!(parse_issue("PROJ-8", &body), Err(Error::Jira(_))));
    }

    #[test]
    fn test_status_errors() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "P-1"),
            Error::JiraAuth(401)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, "P-1"),
            Error::JiraAuth(403)
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "P-1"),
            Error::TicketNotFound(id) if id == "P-1"
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "P-1"),
            Error::Jira(_)
        ));
    }
}
