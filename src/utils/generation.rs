use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config::{Config, GenerationSettings};
use crate::error::{Error, Result};

pub const SYSTEM_PROMPT: &str = "You are a QA engineer.";

#[derive(Debug, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Cuerpo de la petición de chat completions
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Mensaje de usuario con el ticket y la plantilla de formato esperada
pub fn build_user_prompt(title: &str, description: &str) -> String {
    format!(
        "Based on the following Jira ticket, generate detailed test cases.\n\n\
         Title: {}\nDescription: {}\n\n\
         Provide test cases in this format:\n\
         - Test Case ID: TC001\n\
         - Scenario: [Test scenario here]\n\
         - Steps: \n    1. [Step 1]\n    2. [Step 2]\n\
         - Expected Result: [Expected result here]",
        title, description
    )
}

pub fn build_request(settings: &GenerationSettings, title: &str, description: &str) -> ChatRequest {
    ChatRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: build_user_prompt(title, description),
            },
        ],
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    }
}

/// Extrae `choices[0].message.content` de la respuesta
pub fn extract_content(json: &Value) -> Result<String> {
    json.pointer("/choices/0/message/content")
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::MalformedResponse("falta 'choices[0].message.content'".to_string())
        })
}

fn status_error(status: StatusCode, body: String) -> Error {
    Error::GenerationStatus {
        status: status.as_u16(),
        body: body.trim().to_string(),
    }
}

/// Genera casos de prueba a partir del título y la descripción de un ticket
///
/// Una sola petición POST, sin reintentos.
pub fn generate_test_cases(config: &Config, title: &str, description: &str) -> Result<String> {
    let request_body = build_request(&config.generation, title, description);
    tracing::debug!(
        url = %config.openai_api_url,
        model = %request_body.model,
        max_tokens = request_body.max_tokens,
        "enviando petición de generación"
    );

    let client = Client::new();
    let response = client
        .post(&config.openai_api_url)
        .bearer_auth(&config.openai_api_key)
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status, response.text().unwrap_or_default()));
    }

    let json: Value = response
        .json()
        .map_err(|e| Error::MalformedResponse(format!("el cuerpo no es JSON: {}", e)))?;
    let content = extract_content(&json)?;
    tracing::debug!(chars = content.len(), "texto generado recibido");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_prompt_embeds_ticket_and_template() {
        let prompt = build_user_prompt("Login", "Users log in");
        assert!(prompt.starts_with("Based on the following Jira ticket, generate detailed test cases.\n\n"));
        assert!(prompt.contains("Title: Login\nDescription: Users log in\n\n"));
        assert!(prompt.contains("- Test Case ID: TC001\n"));
        assert!(prompt.contains("- Steps: \n    1. [Step 1]\n    2. [Step 2]\n"));
        assert!(prompt.ends_with("- Expected Result: [Expected result here]"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = build_request(&GenerationSettings::default(), "T", "D");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are a QA engineer.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_extract_content() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "- Test Case ID: TC001" } }
            ]
        });
        assert_eq!(extract_content(&body).unwrap(), "- Test Case ID: TC001");
    }

    #[test]
    fn test_status_error_keeps_status_and_body() {
        let error = status_error(
            StatusCode::UNAUTHORIZED,
            "{\"error\": {\"message\": \"Incorrect API key\"}}\n".to_string(),
        );
        match &error {
            Error::GenerationStatus { status, body } => {
                assert_eq!(*status, 401);
                assert_eq!(body, "{\"error\": {\"message\": \"Incorrect API key\"}}");
            }
            other => panic!("expected GenerationStatus, got {:?}", other),
        }
        assert!(error.to_string().contains("HTTP 401"));
        assert!(error.to_string().contains("Incorrect API key"));
    }

    #[test]
    fn test_status_error_with_empty_body() {
        let error = status_error(StatusCode::TOO_MANY_REQUESTS, String::new());
        assert!(matches!(error, Error::GenerationStatus { status: 429, ref body } if body.is_empty()));
    }

    #[test]
    fn test_extract_content_missing_fields() {
        assert!(matches!(
            extract_content(&json!({ "choices": [] })),
            Err(Error::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_content(&json!({ "error": { "message": "bad key" } })),
            Err(Error::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_content(&json!({ "choices": [{ "message": { "content": 42 } }] })),
            Err(Error::MalformedResponse(_))
        ));
    }
}
