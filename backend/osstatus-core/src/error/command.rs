use crate::error::lookup::LookupError;

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CommandError {
    /// The command line could not be tokenized or did not match the grammar.
    ///
    /// `message` is the parser's rendered usage/error text, ready to print.
    #[error("Syntax Error: {message} {location}")]
    Syntax {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
