use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcordanceError {
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConcordanceError {
    fn from(err: std::io::Error) -> Self {
        ConcordanceError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConcordanceError>;
