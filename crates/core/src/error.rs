use thiserror::Error;

/// Fallback shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch video summary";

pub const EMPTY_URL_MESSAGE: &str = "Please enter a YouTube URL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Please enter a YouTube URL")]
    Validation,

    #[error("Request failed with status: {status}")]
    RequestFailed { status: u16 },

    #[error("No data received from server")]
    EmptyResponse,

    #[error("{0}")]
    Network(String),

    #[error("A summary request is already in progress")]
    Busy,
}

impl PanelError {
    /// Text the panel shows in its error slot.
    ///
    /// Validation errors are shown verbatim; every other failure is wrapped as
    /// `Error: <message>. Please try again.`
    pub fn display_message(&self) -> String {
        match self {
            PanelError::Validation => EMPTY_URL_MESSAGE.to_string(),
            other => {
                let message = other.to_string();
                let message = if message.trim().is_empty() {
                    FALLBACK_MESSAGE
                } else {
                    message.as_str()
                };
                format!("Error: {message}. Please try again.")
            }
        }
    }
}

impl From<reqwest::Error> for PanelError {
    fn from(err: reqwest::Error) -> Self {
        PanelError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Network(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing auth configuration: {env_var} environment variable is not set")]
    MissingConfig { env_var: String },

    #[error("Auth request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Auth service rejected the request with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    #[error("Auth service returned no session")]
    NoSession,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid webhook URL {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PanelError>;
