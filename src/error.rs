use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required field `{field}` on {record}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
