use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if this error reports an index or state outside the valid range
    /// of an indexed operation.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` if this error reports an invalid constructor or method argument.
    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn out_of_range(operation: &'static str, index: usize, len: usize) -> Error {
        Error(
            ErrorKind::OutOfRange {
                operation,
                index,
                len,
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{operation}: index {index} out of range {len}")]
    OutOfRange {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("at", 87, 4);
        assert!(err.is_out_of_range());
        assert!(!err.is_invalid_arg());
        assert_eq!(err.to_string(), "at: index 87 out of range 4");
    }

    #[test]
    fn test_invalid_arg_message() {
        let err = Error::invalid_arg("elements", "4 elements exceed capacity 3");
        assert!(err.is_invalid_arg());
        assert_eq!(
            err.to_string(),
            "invalid argument elements: 4 elements exceed capacity 3"
        );
        match err.into_kind() {
            ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "elements"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err.kind(), ErrorKind::Io { .. }));
    }
}
