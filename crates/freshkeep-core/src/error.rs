// ── Error Types ──

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreshkeepError {
    #[error("unknown food category: {0}")]
    UnknownCategory(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, FreshkeepError>;
