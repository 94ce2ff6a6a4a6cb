use thiserror::Error;

/// Errors surfaced by backend round-trips.
///
/// The `Display` output of each variant is the user-visible message the
/// controller hands to the toast tray, so messages are phrased for end users
/// rather than for logs.
#[derive(Error, Debug)]
pub enum ViewError {
    /// The request never produced a usable response (connection refused,
    /// DNS failure, body read error, unparseable JSON).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status. The body is kept for
    /// diagnostics only and is logged, never shown to the user.
    #[error("Server error: {status}")]
    Status { status: u16, body: String },

    /// A well-formed JSON response carried `success: false` (or omitted the
    /// flag). The message is the server-supplied `error`, or a generic
    /// fallback chosen by the caller.
    #[error("{0}")]
    Rejected(String),

    /// A response claimed success but was missing a required field.
    #[error("Malformed server response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ViewError {
    fn from(err: reqwest::Error) -> Self {
        ViewError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
