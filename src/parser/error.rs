// Thu Oct 15 2026 - Alex

use crate::text::BracketError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No class header found")]
    MissingClassHeader,

    #[error("Unsupported inheritance list: {0}")]
    UnsupportedInheritance(String),

    #[error("Unrecognized statement: {0}")]
    Unrecognized(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid initializer list: {0}")]
    InvalidInitializer(String),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    #[error("Invalid member: {0}")]
    InvalidMember(String),

    #[error("Invalid enum: {0}")]
    InvalidEnum(String),

    #[error(transparent)]
    Bracket(#[from] BracketError),
}
