use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unrecognized option token: {0}")]
    UnknownOption(String),

    #[error("missing label for '{key}' in language '{language}'")]
    MissingLabel { language: String, key: String },
}

/// Why a draft failed the submission gate.
///
/// Validation errors are shown inline next to the form; none of them
/// reaches the generation endpoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("client name is required")]
    MissingName,

    #[error("at least one pain area must be selected")]
    MissingPainArea,

    #[error("at most {max} pain areas may be selected (got {got})")]
    TooManyPainAreas { max: usize, got: usize },

    #[error("consent must be given before submission")]
    ConsentRequired,
}
