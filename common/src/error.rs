use std::fmt::Display;

/// The JSON body returned for a handled error, e.g. `{"error": "Hero not found"}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorInformation {
    /// A human-readable error message
    pub error: String,
}

impl ErrorInformation {
    pub fn new(error: impl Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// The JSON body returned for a rejected write, e.g. `{"errors": ["validation errors"]}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new(errors: impl IntoIterator<Item = impl Display>) -> Self {
        Self {
            errors: errors.into_iter().map(|e| e.to_string()).collect(),
        }
    }
}
