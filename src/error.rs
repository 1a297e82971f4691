use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("unknown case convention: {0}")]
    UnknownCase(String),

    #[error("unknown word transform: {0} (expected lower, upper, title or keep)")]
    UnknownTransform(String),
}
