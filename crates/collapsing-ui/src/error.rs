use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CollapseError {
    /// Layout was requested before a content view was configured.
    #[error("collapsing layout must have a content view before it is laid out")]
    MissingContent,
}

pub type Result<T> = std::result::Result<T, CollapseError>;
