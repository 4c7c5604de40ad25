//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! [`get_env_opt`] treats blank values the same as unset ones, so `FOO=` in a
//! `.env` file falls back to the default. Settings where a blank value must be
//! rejected rather than defaulted read through [`get_env_raw`].

use std::env;
use std::str::FromStr;

/// Get an environment variable as set, `None` only when unset.
///
/// A present-but-blank value stays `Some`, so callers can tell it apart from
/// a missing one.
pub fn get_env_raw(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Get an environment variable, `None` when unset or blank.
pub fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable or fall back to `default`.
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

/// Parse the value of variable `name`, using `default` when it is `None`.
///
/// A value that is present but unparsable is an error, never silently replaced.
pub fn parse_or<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, Error> {
    match raw {
        Some(val) => val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name)),
        None => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
