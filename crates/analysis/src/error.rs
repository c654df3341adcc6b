use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("unknown booster pack: {0}")]
    UnknownPack(String),
    #[error("unknown item category: {0}")]
    UnknownCategory(String),
    #[error("malformed playing card: {0}")]
    MalformedCard(String),
    #[error("malformed ledger key: {0}")]
    MalformedKey(String),
}
