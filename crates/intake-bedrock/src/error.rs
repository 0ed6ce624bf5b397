use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("generation endpoint rejected the request: {0}")]
    Rejected(String),

    #[error("generation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("AWS config error: {0}")]
    Config(String),
}
