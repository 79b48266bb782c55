//! Travel records and the identifiers they carry.
//!
//! A raw travel record is a sequence of numeric fields: the current
//! location, the destination (both 1-based) and then every motion word
//! that moves the player from one to the other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// ID Types
// ============================================================================

/// 0-based identifier for locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub i32);

impl LocationId {
    /// Convert a 1-based id from raw game data.
    ///
    /// `i32::MIN` has no 0-based counterpart and stays at `i32::MIN`.
    pub fn from_one_based(raw: i32) -> Self {
        Self(raw.checked_sub(1).unwrap_or(i32::MIN))
    }

    /// Position in a list of locations, or `None` for a negative id.
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a motion word ("north", "go up", ...) known to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(pub i32);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// Error type for travel record parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TravelError {
    #[error("Travel record needs at least 2 fields, found {found}")]
    MissingFields { found: usize },
    #[error("Invalid number in field {index}: {value:?}")]
    InvalidNumber { index: usize, value: String },
}

/// One parsed travel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRecord {
    /// Location the record belongs to.
    pub current: LocationId,
    /// Where the words lead, already converted to 0-based.
    pub destination: LocationId,
    /// Motion words in input order.
    pub words: Vec<WordId>,
}

impl TravelRecord {
    /// Parse a record from its raw fields.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, TravelError> {
        let current = parse_field(fields, 0)?;
        let (destination, words) = parse_link(fields)?;
        Ok(Self {
            current: LocationId::from_one_based(current),
            destination,
            words,
        })
    }
}

impl FromStr for TravelRecord {
    type Err = TravelError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        Self::from_fields(&fields)
    }
}

/// Parse fields 1.. of a record, leaving field 0 untouched.
pub(crate) fn parse_link<S: AsRef<str>>(
    fields: &[S],
) -> Result<(LocationId, Vec<WordId>), TravelError> {
    if fields.len() < 2 {
        return Err(TravelError::MissingFields {
            found: fields.len(),
        });
    }

    let raw = parse_field(fields, 1)?;
    let words = (2..fields.len())
        .map(|index| parse_field(fields, index).map(WordId))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((LocationId::from_one_based(raw), words))
}

fn parse_field<S: AsRef<str>>(fields: &[S], index: usize) -> Result<i32, TravelError> {
    let value = fields
        .get(index)
        .ok_or(TravelError::MissingFields {
            found: fields.len(),
        })?
        .as_ref();
    value.trim().parse().map_err(|_| TravelError::InvalidNumber {
        index,
        value: value.to_string(),
    })
}
