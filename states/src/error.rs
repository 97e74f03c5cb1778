use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Row data must be a JSON array, got {found}")]
    NotAnArray { found: &'static str },
    #[error("Row at index {index} is not a JSON object")]
    RowNotObject { index: usize },
    #[error("Invalid row JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_an_array(value: &serde_json::Value) -> Self {
        Self::NotAnArray {
            found: json_kind(value),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
