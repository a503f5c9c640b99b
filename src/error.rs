// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// Every variant except [Error::HandlerError] and [Error::Io] is produced by
/// the parser itself. All of them end the current parse pass.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// Only the program name was given and arguments are not optional.
    #[error("no arguments given")]
    NoArgs,

    /// User asked for help (`-h`, `--help` or `/?`).
    #[error("help requested")]
    HelpRequested,

    /// User specified an option that is not in the catalog.
    #[error("'{0}' not found")]
    UnknownOpt(String),

    /// One or more characters of a concatenated short option cluster
    /// did not match any short name.
    #[error("'{0}' not found")]
    UnknownShortOpts(String),

    /// The option was already specified earlier in the same pass.
    #[error("'{0}' already parsed")]
    AlreadyParsed(String),

    /// A required option value was not specified.
    #[error("'{0}' requires 1 argument")]
    MissingOptArg(String),

    /// The token following a required option looks like an option itself.
    #[error("'{0}' requires 1 argument, got option '{1}'")]
    OptArgIsOption(String, String),

    /// A multi-value option was given more values than it accepts.
    #[error("'{name}' only supports {max} arguments")]
    TooManyValues {
        /// Long name of the option.
        name: String,
        /// Declared upper bound.
        max: usize,
    },

    /// An option that needs a value cannot appear in a concatenated
    /// short option cluster.
    #[error("'{0}' unsupported in concatenated short arguments")]
    NotBundleable(char),

    /// Token is not an option and all positional slots are filled.
    #[error("'{0}' unrecognized")]
    Unrecognized(String),

    //------------------------------
    // Callback errors
    //------------------------------
    /// A callback rejected the value it was given.
    #[error("'{token}' problem parsing argument: {cause}")]
    HandlerFailed {
        /// Command-line token being handled when the callback failed.
        token: String,
        /// Error returned by the callback.
        #[source]
        cause: Box<Error>,
    },

    /// Free-form error for callbacks to return.
    #[error("{0}")]
    HandlerError(String),

    //------------------------------
    // Output errors
    //------------------------------
    /// Writing help or diagnostics failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Returns `true` if a diagnostic line should be shown for the error.
    ///
    /// Explicit help requests and an empty command-line only display help.
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, Error::HelpRequested | Error::NoArgs)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
