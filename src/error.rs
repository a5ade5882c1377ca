use std::fmt;

pub type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Debug)]
pub enum ProbeError {
    InvalidUrl(String),
    UnsupportedScheme(String),
    Runtime(String),
}

/* Display + Error for nicer to_string() */
impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidUrl(u) => write!(f, "invalid url: {u}"),
            ProbeError::UnsupportedScheme(s) => {
                write!(f, "unsupported scheme: {s} (expected http or https)")
            }
            ProbeError::Runtime(s) => write!(f, "runtime error: {s}"),
        }
    }
}
impl std::error::Error for ProbeError {}

/* Conversions so `?` works smoothly */
impl From<std::io::Error> for ProbeError {
    fn from(e: std::io::Error) -> Self {
        ProbeError::Runtime(e.to_string())
    }
}
impl From<url::ParseError> for ProbeError {
    fn from(e: url::ParseError) -> Self {
        ProbeError::InvalidUrl(e.to_string())
    }
}
