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

    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Configuration {
                field: field.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn allocation(size: usize, alignment: usize) -> Error {
        Error(ErrorKind::Allocation { size, alignment }.into())
    }

    pub fn out_of_bounds(what: impl Into<String>, index: usize, len: usize) -> Error {
        Error(
            ErrorKind::OutOfBounds {
                what: what.into(),
                index,
                len,
            }
            .into(),
        )
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

    pub fn invalid_config(context: impl Into<String>, source: serde_json::Error) -> Error {
        Error(
            ErrorKind::InvalidConfig {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Whether this is a bounds violation on an array field or a struct sequence.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfBounds { .. })
    }

    /// Whether this is an invalid field specification detected at layout-build time.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration { .. })
    }

    /// Whether this is a failed or rejected owned allocation.
    pub fn is_allocation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Allocation { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid field specification for '{field}': {message}")]
    Configuration { field: String, message: String },

    #[error("failed to allocate {size} bytes with alignment {alignment}")]
    Allocation { size: usize, alignment: usize },

    #[error("{what} index {index} out of bounds (length {len})")]
    OutOfBounds {
        what: String,
        index: usize,
        len: usize,
    },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("failed to parse configuration '{context}': {source}")]
    InvalidConfig {
        context: String,
        source: serde_json::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
