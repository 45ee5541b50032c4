use std::fmt;

#[derive(Debug)]
pub enum VizError {
    MalformedConfig(String),
    NoText,
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::MalformedConfig(msg) => write!(f, "malformed term config: {msg}"),
            VizError::NoText => write!(f, "no source text submitted yet"),
        }
    }
}

impl std::error::Error for VizError {}

pub type Result<T> = std::result::Result<T, VizError>;
