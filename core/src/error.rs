use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion api returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("completion response carried no message content")]
    MissingContent,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("unexpected completion format: {0}")]
    ResponseFormat(String),
}

impl Error {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Completion(CompletionError::Transport(_)) => "transport",
            Error::Completion(CompletionError::Api { .. }) => "api",
            Error::Completion(CompletionError::MissingContent) => "missing_content",
            Error::ResponseFormat(_) => "response_format",
        }
    }
}
