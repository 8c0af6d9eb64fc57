//! Нормализация ошибок HTTP в одну строку для показа пользователю

use serde_json::Value;

pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the server. Check your network connection.";
pub const NOT_FOUND_MESSAGE: &str = "Service not found. Check the API address.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Maps a failed response (or a transport failure, `status == 0`) to a
/// human-readable message.
///
/// Bodies are inspected in this order: JSON string, JSON object `message`,
/// JSON object `title` (ASP.NET problem details), raw text.
pub fn normalize_error(status: u16, body: &str) -> String {
    match status {
        0 => return NETWORK_ERROR_MESSAGE.to_string(),
        404 => return NOT_FOUND_MESSAGE.to_string(),
        s if s >= 500 => return SERVER_ERROR_MESSAGE.to_string(),
        _ => {}
    }

    let trimmed = body.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(text)) if !text.trim().is_empty() => return text,
        Ok(Value::Object(map)) => {
            for key in ["message", "title"] {
                if let Some(Value::String(text)) = map.get(key) {
                    if !text.trim().is_empty() {
                        return text.clone();
                    }
                }
            }
        }
        Ok(_) => {}
        Err(_) if !trimmed.is_empty() => return trimmed.to_string(),
        Err(_) => {}
    }

    format!("Request failed with status {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure() {
        assert_eq!(normalize_error(0, ""), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_not_found_ignores_body() {
        assert_eq!(
            normalize_error(404, r#"{"message": "no route"}"#),
            NOT_FOUND_MESSAGE
        );
    }

    #[test]
    fn test_server_errors_are_generic() {
        assert_eq!(normalize_error(500, "stack trace..."), SERVER_ERROR_MESSAGE);
        assert_eq!(normalize_error(503, ""), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_body_shapes() {
        assert_eq!(
            normalize_error(400, r#""Invalid port""#),
            "Invalid port"
        );
        assert_eq!(
            normalize_error(400, r#"{"message": "Login failed"}"#),
            "Login failed"
        );
        assert_eq!(
            normalize_error(
                400,
                r#"{"title": "One or more validation errors occurred.", "status": 400}"#
            ),
            "One or more validation errors occurred."
        );
        assert_eq!(normalize_error(401, "Unauthorized"), "Unauthorized");
    }

    #[test]
    fn test_message_preferred_over_title() {
        assert_eq!(
            normalize_error(409, r#"{"title": "Conflict", "message": "Table is locked"}"#),
            "Table is locked"
        );
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        assert_eq!(normalize_error(400, ""), "Request failed with status 400");
        assert_eq!(normalize_error(422, "{}"), "Request failed with status 422");
        assert_eq!(normalize_error(400, "[1, 2]"), "Request failed with status 400");
    }
}
