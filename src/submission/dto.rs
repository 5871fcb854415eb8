use serde::Deserialize;

use crate::error::SubmitError;
use crate::models::Receipt;

/// Error body returned by the intake service on 4xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// An empty 2xx body is a plain acknowledgment without a ticket.
pub fn parse_receipt(body: &str) -> Result<Receipt, SubmitError> {
    if body.trim().is_empty() {
        return Ok(Receipt::default());
    }
    serde_json::from_str::<Receipt>(body).map_err(|e| {
        tracing::error!("Failed to parse submission response: {}", e);
        SubmitError::InvalidResponse(e.to_string())
    })
}

pub fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            message: Some(message),
            ..
        }) => message,
        Ok(ErrorResponse {
            error: Some(error), ..
        }) => error,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => "request rejected".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_receipt_with_ticket() {
        let receipt = parse_receipt(r#"{"ticketId":"REQ-1042"}"#).expect("valid body");
        assert_eq!(receipt.ticket_id.as_deref(), Some("REQ-1042"));
    }

    #[test]
    fn test_parse_receipt_empty_body() {
        assert_eq!(parse_receipt("  "), Ok(Receipt::default()));
        assert_eq!(parse_receipt("{}"), Ok(Receipt::default()));
    }

    #[test]
    fn test_parse_receipt_garbage() {
        assert!(matches!(
            parse_receipt("<html>"),
            Err(SubmitError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_rejection_message_prefers_message_field() {
        let body = r#"{"error":"422 Unprocessable Entity","message":"CRN 40211 is full"}"#;
        assert_eq!(rejection_message(body), "CRN 40211 is full");
        assert_eq!(rejection_message(r#"{"error":"bad"}"#), "bad");
        assert_eq!(rejection_message("plain text"), "plain text");
        assert_eq!(rejection_message(""), "request rejected");
    }
}
