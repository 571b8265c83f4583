use thiserror::Error;

/// The model reply could not be turned into a list of selections. Callers
/// recover by falling back to directory-only results.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model reply is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("model reply JSON is {found}, expected a list of selections")]
    NotASelectionList { found: &'static str },
}

/// Why a single model selection was discarded. Only the offending entry is
/// dropped; the rest of the batch is still used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejection {
    #[error("selection #{position} is not a JSON object")]
    NotAnObject { position: usize },

    #[error("selection #{position} has no candidate number")]
    MissingOrdinal { position: usize },

    #[error("selection #{position} has a non-numeric candidate number '{raw}'")]
    NonNumericOrdinal { position: usize, raw: String },

    #[error("selection #{position} refers to candidate {ordinal}, but only {candidates} were offered")]
    OutOfRange {
        position: usize,
        ordinal: i64,
        candidates: usize,
    },

    #[error("selection #{position} repeats candidate {ordinal}")]
    Duplicate { position: usize, ordinal: i64 },
}

#[derive(Debug, Error)]
pub enum FollowUpError {
    #[error("question must be non-empty")]
    EmptyQuestion,

    #[error("model request failed: {0}")]
    Model(#[from] dinerec_llm::ModelError),
}
