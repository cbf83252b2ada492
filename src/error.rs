use thiserror::Error;

use crate::cfg::Error as ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    /// No `source` line was found, or the first one does not
    /// define both horizontal coordinates.
    #[error("missing source: no 'source' line with x= and y= keys")]
    MissingSource,

    /// A coordinate key was found but its value is not a number.
    #[error("malformed numeric value \"{value}\" for key '{key}'")]
    MalformedNumeric { key: &'static str, value: String },

    /// Configuration preconditions are not met: no attempt.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Failure of the input or output collaborator.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
