// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BracketError {
    #[error("unterminated bracket at position {position}")]
    Unterminated { position: usize },
    #[error("no opening bracket at position {position}")]
    NotABracket { position: usize },
}
