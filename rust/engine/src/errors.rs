use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Malformed hand history document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Hand {hand}: event type {code} is missing required field `{field}`")]
    MissingField {
        hand: String,
        code: i64,
        field: &'static str,
    },
    #[error("Hand {hand}: start time {millis} is out of range")]
    InvalidTimestamp { hand: String, millis: i64 },
}
