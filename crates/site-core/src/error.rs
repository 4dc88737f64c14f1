use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("carousel has no slides")]
    EmptyCarousel,
    #[error("{0} carousel is not initialized")]
    NotInitialized(&'static str),
    #[error("submission failed: {0}")]
    Submission(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
