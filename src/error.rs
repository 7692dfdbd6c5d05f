use miette::Diagnostic;
use thiserror::Error;

/// Main error type for img2json operations
#[derive(Error, Diagnostic, Debug)]
pub enum Img2JsonError {
    #[error("Decode error with {path}: {message}")]
    #[diagnostic(code(img2json::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error: {message}")]
    #[diagnostic(code(img2json::decode))]
    Document {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(img2json::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(img2json::argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(img2json::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, Img2JsonError>;
