//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for API calls and command handlers.
///
/// The cache never produces errors; everything here originates from the
/// network, payload decoding or the command layer.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure (connection refused, timeout, bad URL)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },

    /// Response body was not the JSON shape we expected
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Paging backward past the first page
    #[error("you're on the first page")]
    FirstPage,

    /// Paging forward past the last page
    #[error("you're on the last page")]
    LastPage,

    /// A command that needs an argument was called without one
    #[error("usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Inspecting a creature that is not in the pokedex
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Console read/write failure
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
