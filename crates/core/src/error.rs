use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown deck: {0}")]
    Deck(String),
    #[error("unknown stake: {0}")]
    Stake(String),
    #[error("invalid version: {0}")]
    Version(String),
    #[error("unknown item category: {0}")]
    Category(String),
}
