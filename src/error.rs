#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Missing activation code")]
    MissingCode,

    #[error("Router authentication failed: {0}")]
    Auth(String),

    #[error("WiFi activation failed: {reason}")]
    Activation { reason: String, details: String },

    #[error("Router request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, RelayError>;

impl From<RelayError> for axum::response::Response {
    fn from(err: RelayError) -> Self {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let (status, body) = match &err {
            RelayError::MissingCode => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": err.to_string() }),
            ),
            RelayError::Activation { reason, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": reason, "details": details }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": err.to_string() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
