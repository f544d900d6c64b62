//! Error types
use std::{error, fmt, io, result};

#[derive(Debug)]
pub enum Error {
    IO(io::Error),
    Serde(serde_json::Error),
    Device(tapo::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IO(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Could not format the device data: {}", err),
            Error::Device(err) => write!(f, "{}", err),
            Error::Other(err) => f.write_str(err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IO(err) => Some(err),
            Error::Serde(err) => Some(err),
            Error::Device(err) => Some(err),
            Error::Other(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IO(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error)
    }
}

impl From<tapo::Error> for Error {
    fn from(error: tapo::Error) -> Self {
        Error::Device(error)
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Other(error)
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_error_displays_its_message() {
        let err = Error::from(String::from("Invalid credentials"));

        assert_eq!("Invalid credentials", err.to_string());
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));

        assert!(err.to_string().contains("pipe closed"));
        assert!(error::Error::source(&err).is_some());
    }
}
