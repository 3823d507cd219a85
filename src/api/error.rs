use std::fmt;

/// Errors returned by the catalog and detail endpoints.
///
/// `Network` and `Status` are both network-class failures: the first never got
/// a response, the second got one that wasn't a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (DNS, refused connection, invalid URL, truncated body).
    Network(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, url: String },
    /// The body was not JSON of the expected shape.
    Decode(String),
}

impl ApiError {
    /// Short error class shown in front of the description.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) | ApiError::Status { .. } => "network error",
            ApiError::Decode(_) => "decode error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, url } => {
                write!(f, "network error: status code {status} from {url}")
            }
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
