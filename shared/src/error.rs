#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("malformed_token: expected 3 segments, found {segments}")]
    Malformed { segments: usize },
    #[error("invalid_encoding: {0}")]
    Encoding(String),
    #[error("invalid_claims")]
    Claims(#[from] serde_json::Error),
}
