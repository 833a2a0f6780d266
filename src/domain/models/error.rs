use std::fmt;

/// Every failure surfaced to the user falls in exactly one of these buckets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local precondition failure. Never reaches the network.
    Validation,
    /// The request went out but no response came back.
    Network,
    /// The service answered with a non-2xx status.
    ServerError,
    /// Anything else, including malformed 2xx responses.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Validation => return write!(f, "Validation"),
            ErrorKind::Network => return write!(f, "Network"),
            ErrorKind::ServerError => return write!(f, "Server"),
            ErrorKind::Unknown => return write!(f, "Unknown"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: &str) -> ErrorInfo {
        return ErrorInfo {
            kind,
            message: message.to_string(),
        };
    }

    pub fn validation(message: &str) -> ErrorInfo {
        return ErrorInfo::new(ErrorKind::Validation, message);
    }

    pub fn network(message: &str) -> ErrorInfo {
        return ErrorInfo::new(ErrorKind::Network, message);
    }

    pub fn server(message: &str) -> ErrorInfo {
        return ErrorInfo::new(ErrorKind::ServerError, message);
    }

    pub fn unknown(message: &str) -> ErrorInfo {
        return ErrorInfo::new(ErrorKind::Unknown, message);
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{} error: {}", self.kind, self.message);
    }
}
