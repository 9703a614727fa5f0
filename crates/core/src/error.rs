//! Error types for boardscribe-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed frame: expected 8 bytes, got {0}")]
    MalformedFrame(usize),

    #[error("internal inconsistency: recognized move {0} rejected by the rules oracle")]
    InconsistentMove(String),
}

pub type Result<T> = std::result::Result<T, Error>;
