use crudkit_core::ValidationErrorResponse;

/// Errors returned by [`ResourceClient`](crate::ResourceClient) calls.
#[derive(Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout...).
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Status { status: u16, message: String },
    /// The request body could not be serialized.
    Encode(String),
    /// The response body did not match the expected shape.
    Decode(String),
    /// Client-side validation rejected the payload before sending.
    Invalid(ValidationErrorResponse),
}

impl ClientError {
    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Status { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "Request failed: {err}"),
            ClientError::Status { status, message } => write!(f, "{message} ({status})"),
            ClientError::Encode(msg) => write!(f, "Invalid request body: {msg}"),
            ClientError::Decode(msg) => write!(f, "Invalid response: {msg}"),
            ClientError::Invalid(report) => {
                let fields: Vec<_> = report.errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Please fill in all required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
