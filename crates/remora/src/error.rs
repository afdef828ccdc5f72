use std::num::ParseIntError;

use crate::graph::GraphError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed graph file at line {line}: {source}")]
    MalformedFile {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("malformed settings at line {line}: expected `key = 'path'`")]
    MalformedSettings { line: usize },

    #[error("missing configuration: no {key} file specified")]
    MissingConfiguration { key: &'static str },
}
