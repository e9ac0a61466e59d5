use crate::model::PlayerId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorecardError {
    #[error("no hole numbered {0} on this course")]
    UnknownHole(u8),
    #[error("no player {0} in the roster")]
    UnknownPlayer(PlayerId),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
