//! # Alphabets and Targets
//!
//! A run searches either for a digit sequence or for an alphanumeric string.
//! The [`Alphabet`] decides how symbols are encoded, which raw values a random
//! draw may produce, and how far apart two symbols can be. The [`Target`] is the
//! validated, encoded sequence every fitness computation compares against.
//!
//! ```rust
//! use genmatch::alphabet::{Alphabet, Target};
//!
//! let target = Target::parse("42", Alphabet::Digits).unwrap();
//! assert_eq!(target.len(), 2);
//! assert_eq!(target.max_fitness(), 18);
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};

/// The set of symbols candidates and targets are made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Symbols are the values `0..=9`.
    Digits,
    /// Symbols are the ASCII codes of `[0-9A-Za-z]`.
    #[default]
    Alphanumeric,
}

impl Alphabet {
    /// Exclusive upper bound of the raw values a random draw produces.
    ///
    /// Both bounds are powers of two so a draw is a plain bit pattern; values
    /// outside the alphabet are rejected and redrawn.
    pub fn raw_bound(self) -> u8 {
        match self {
            Alphabet::Digits => 16,
            Alphabet::Alphanumeric => 128,
        }
    }

    /// Returns true if `symbol` is a valid encoded symbol of this alphabet.
    pub fn contains(self, symbol: u8) -> bool {
        match self {
            Alphabet::Digits => symbol <= 9,
            Alphabet::Alphanumeric => symbol.is_ascii_alphanumeric(),
        }
    }

    /// Greatest absolute difference between two symbol codes of this alphabet.
    pub fn max_symbol_distance(self) -> usize {
        match self {
            Alphabet::Digits => 9,
            Alphabet::Alphanumeric => usize::from(b'z' - b'0'),
        }
    }

    /// Encodes a display character, or `None` if it is not part of the alphabet.
    pub fn encode(self, c: char) -> Option<u8> {
        match self {
            Alphabet::Digits => c.to_digit(10).map(|d| d as u8),
            Alphabet::Alphanumeric if c.is_ascii_alphanumeric() => Some(c as u8),
            Alphabet::Alphanumeric => None,
        }
    }

    /// Renders an encoded symbol back to its display character.
    pub fn decode(self, symbol: u8) -> char {
        match self {
            Alphabet::Digits => char::from(b'0' + symbol),
            Alphabet::Alphanumeric => char::from(symbol),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Digits => write!(f, "digits"),
            Alphabet::Alphanumeric => write!(f, "alphanumeric"),
        }
    }
}

/// The immutable, encoded sequence the population evolves toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    alphabet: Alphabet,
    symbols: Vec<u8>,
}

impl Target {
    /// Validates and encodes `text`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidTarget`] if `text` is empty or contains a
    /// character outside `alphabet`.
    pub fn parse(text: &str, alphabet: Alphabet) -> Result<Self> {
        if text.is_empty() {
            return Err(GeneticError::InvalidTarget(
                "target must not be empty".to_string(),
            ));
        }

        let symbols = text
            .chars()
            .map(|c| alphabet.encode(c))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                GeneticError::InvalidTarget(format!(
                    "expected {} string, but found '{}'",
                    alphabet, text
                ))
            })?;

        Ok(Self { alphabet, symbols })
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Fitness of an exact match: `len * max_symbol_distance`.
    pub fn max_fitness(&self) -> usize {
        self.symbols.len() * self.alphabet.max_symbol_distance()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols
            .iter()
            .try_for_each(|&s| write!(f, "{}", self.alphabet.decode(s)))
    }
}
