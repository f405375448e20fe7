use std::fmt;

#[derive(Debug)]
pub enum ErrorKind {
    InvalidArgument,
    Store,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn store(context: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::Store,
            context: context.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
