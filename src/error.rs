use std::fmt;

/// Result alias for `edmot`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the motif pipeline and its partitioners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input graph was empty.
    EmptyInput,

    /// A node index was not present in the graph.
    NodeNotFound {
        /// Index of the missing node.
        index: usize,
    },

    /// More motif components were requested than the motif graph contains.
    InvalidComponentCount {
        /// Requested component count.
        requested: usize,
        /// Number of connected components found.
        available: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::NodeNotFound { index } => {
                write!(f, "node {index} is not in the graph")
            }
            Error::InvalidComponentCount {
                requested,
                available,
            } => {
                write!(
                    f,
                    "cannot select {requested} components from a motif graph with {available}"
                )
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
