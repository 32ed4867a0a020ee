use thiserror::Error;

#[derive(Error, Debug)]
pub enum BytestackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty object: a record must carry at least one byte")]
    EmptyObject,
}

pub type Result<T> = std::result::Result<T, BytestackError>;
