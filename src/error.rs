//! # Error Types
//!
//! This module defines the error type shared by the whole crate. Startup problems
//! (bad configuration, a target outside the alphabet) and runtime conditions the
//! engine reports instead of panicking (empty or unscored populations, a thread
//! pool that cannot be built) all end up as a [`GeneticError`].
//!
//! Broken internal invariants, such as parents with different chromosome
//! lengths, are not represented here. Those are programming faults and panic.
//!
//! ## Examples
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use genmatch::error::{Result, ResultExt};
//! use std::fs;
//!
//! fn read_config_file(path: &str) -> Result<String> {
//!     fs::read_to_string(path).context(format!("cannot open config file '{}'", path))
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genmatch::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[usize]) -> genmatch::error::Result<usize> {
//!     scores.iter().max().cloned().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// A configuration value is missing, malformed or out of range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The target does not fit the selected alphabet.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// An operation needed at least one candidate.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Selection was asked to read a fitness that was never computed or went stale.
    #[error("Candidate #{0} has no up-to-date fitness score")]
    UnscoredCandidate(usize),

    /// Selection met a population whose total fitness is zero and the policy
    /// forbids a fallback.
    #[error("Degenerate selection: {0}")]
    DegenerateSelection(String),

    /// The evaluation worker pool could not be created.
    #[error("Scheduler error: {0}")]
    Scheduler(String),

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use genmatch::error::ResultExt;
/// use std::fs::File;
///
/// fn open(path: &str) -> genmatch::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

impl GeneticError {
    /// Returns true for errors that stop a run before any population work starts.
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            GeneticError::Configuration(_)
                | GeneticError::InvalidTarget(_)
                | GeneticError::ConfigParse(_)
                | GeneticError::Io(_)
                | GeneticError::Other(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_prefixes_message() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.context("reading settings").unwrap_err();
        assert_eq!(err.to_string(), "reading settings: missing");
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let empty: Option<usize> = None;
        assert!(matches!(
            empty.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 3);
    }

    #[test]
    fn test_startup_classification() {
        assert!(GeneticError::Configuration("x".into()).is_startup_error());
        assert!(GeneticError::InvalidTarget("x".into()).is_startup_error());
        assert!(!GeneticError::EmptyPopulation.is_startup_error());
        assert!(!GeneticError::UnscoredCandidate(0).is_startup_error());
        assert!(!GeneticError::DegenerateSelection("x".into()).is_startup_error());
        assert!(!GeneticError::Scheduler("x".into()).is_startup_error());
    }
}
