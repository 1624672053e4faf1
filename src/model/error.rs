// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Default value given for unknown parameter '{parameter}'")]
    UnknownDefault { parameter: String },
    #[error("Accessor '{accessor}' of member '{member}' collides with member '{existing}'")]
    AccessorCollision {
        accessor: String,
        member: String,
        existing: String,
    },
}
