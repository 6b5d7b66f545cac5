use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown media type: {0}")]
    UnknownMediaType(String),

    #[error("no project with slug `{0}`")]
    UnknownProject(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
