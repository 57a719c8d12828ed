use thiserror::Error;

/// The single failure kind: rendering is pure string work, so the only
/// thing that can actually go wrong is writing to the terminal.
#[derive(Error, Debug)]
pub enum VitaeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VitaeError>;
