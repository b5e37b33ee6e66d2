use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type RenResult<T> = Result<T, RenError>;

#[derive(Debug, Error, Diagnostic)]
pub enum RenError {
    #[error("invalid identifier '{0}': only letters, digits and underscores, not starting with a digit")]
    #[diagnostic(code("ren.invalid_identifier"))]
    InvalidIdentifier(String),
    #[error("character '{0}' already exists")]
    #[diagnostic(code("ren.duplicate_identifier"))]
    DuplicateIdentifier(String),
    #[error("{0} must not be empty")]
    #[diagnostic(code("ren.empty_field"))]
    EmptyField(&'static str),
    #[error("serialization error: {message}")]
    #[diagnostic(code("ren.serialization"))]
    Serialization {
        message: String,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },
    #[error("io error: {0}")]
    #[diagnostic(code("ren.io"))]
    Io(#[from] std::io::Error),
}
