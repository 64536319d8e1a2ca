use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushError {
    #[error("Invalid syntax on pushfile line {line}")]
    Syntax { line: usize },
    #[error("Cannot execute target `{name}`; does not exist")]
    TargetNotFound { name: String },
    #[error("Error on line {line}: input file `{path}` could not be read")]
    InputFile {
        line: usize,
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Cyclic target reference: {chain}")]
    CyclicReference { chain: String },
    #[error("Malformed command on line {line}: {message}")]
    Internal { line: usize, message: String },
}

impl PushError {
    /// Pushfile line the error originated from, when it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            PushError::Syntax { line }
            | PushError::InputFile { line, .. }
            | PushError::Internal { line, .. } => Some(*line),
            PushError::TargetNotFound { .. } | PushError::CyclicReference { .. } => None,
        }
    }
}

/// An output of a file operation that could not be written.
///
/// Unlike input failures these never abort a run; they are logged and
/// collected into the [`RunReport`](crate::model::RunReport).
#[derive(Error, Debug)]
#[error("Error on line {line}: output file `{path}` could not be written")]
pub struct OutputFileError {
    pub line: usize,
    pub path: String,
    #[source]
    pub source: io::Error,
}
