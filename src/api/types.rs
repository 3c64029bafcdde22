// Request/response types for the /bfhl endpoint

use serde::{Deserialize, Serialize};

/// A single `data` item: either a JSON string or a JSON integer.
///
/// Anything else (floats, booleans, nested values) fails deserialization
/// and surfaces as a structured failure response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Token {
    Int(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct BfhlRequest {
    pub data: Vec<Token>,
    #[serde(default)]
    pub file_b64: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    /// Zero or one element: the lexicographic maximum of the lowercase tokens.
    pub highest_lowercase_alphabet: Vec<String>,
    pub file_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_kb: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub is_success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_mixed_tokens() {
        let req: BfhlRequest =
            serde_json::from_str(r#"{"data": ["M", 1, "a", 334]}"#).unwrap();
        assert_eq!(
            req.data,
            vec![
                Token::Text("M".to_string()),
                Token::Int(1),
                Token::Text("a".to_string()),
                Token::Int(334),
            ]
        );
        assert!(req.file_b64.is_none());
    }

    #[test]
    fn test_request_rejects_floats() {
        assert!(serde_json::from_str::<BfhlRequest>(r#"{"data": [1.5]}"#).is_err());
    }

    #[test]
    fn test_request_requires_data() {
        assert!(serde_json::from_str::<BfhlRequest>(r#"{"file_b64": "aGk="}"#).is_err());
    }

    #[test]
    fn test_response_omits_absent_file_fields() {
        let resp = BfhlResponse {
            is_success: true,
            user_id: "john_doe_17091999".to_string(),
            email: "john@xyz.com".to_string(),
            roll_number: "ABCD123".to_string(),
            numbers: vec!["1".to_string()],
            alphabets: vec![],
            highest_lowercase_alphabet: vec![],
            file_valid: false,
            file_mime_type: None,
            file_size_kb: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("file_mime_type").is_none());
        assert!(json.get("file_size_kb").is_none());
        assert_eq!(json["file_valid"], false);
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("bad input")).unwrap();
        assert_eq!(json["is_success"], false);
        assert_eq!(json["error"], "bad input");
    }
}
