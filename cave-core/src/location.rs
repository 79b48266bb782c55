//! A single room and its travel table.

use crate::config::DEFAULT_SPECIAL_DESTINATION_THRESHOLD;
use crate::travel::{parse_link, LocationId, TravelError, TravelRecord, WordId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors from restoring a location whose travel table is inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Special destination {0} in travel table")]
    SpecialDestination(LocationId),

    #[error("Destination {0} listed more than once")]
    DuplicateDestination(LocationId),
}

/// The motion words leading to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelEntry {
    pub destination: LocationId,
    pub words: Vec<WordId>,
}

/// A location accessible by the player.
///
/// Each word is expected to lead to at most one destination from a given
/// location. Nothing enforces this; when it is violated,
/// [`find_destination`](Location::find_destination) returns the destination
/// that was added first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocationData")]
pub struct Location {
    short_description: String,
    long_description: String,
    /// Kept in first-insertion order of destinations.
    travel_table: Vec<TravelEntry>,
}

/// Serialized form of a [`Location`], checked before it becomes one.
#[derive(Deserialize)]
struct LocationData {
    short_description: String,
    long_description: String,
    travel_table: Vec<TravelEntry>,
}

impl TryFrom<LocationData> for Location {
    type Error = LocationError;

    fn try_from(data: LocationData) -> Result<Self, Self::Error> {
        for (index, entry) in data.travel_table.iter().enumerate() {
            if entry.destination.0 >= DEFAULT_SPECIAL_DESTINATION_THRESHOLD {
                return Err(LocationError::SpecialDestination(entry.destination));
            }
            if data.travel_table[..index]
                .iter()
                .any(|earlier| earlier.destination == entry.destination)
            {
                return Err(LocationError::DuplicateDestination(entry.destination));
            }
        }

        Ok(Self {
            short_description: data.short_description,
            long_description: data.long_description,
            travel_table: data.travel_table,
        })
    }
}

impl Location {
    /// Create a location with blank descriptions and no exits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location with a long description and an optional short one.
    pub fn with_descriptions(
        long_description: impl Into<String>,
        short_description: Option<impl Into<String>>,
    ) -> Self {
        Self {
            long_description: long_description.into(),
            short_description: short_description.map(Into::into).unwrap_or_default(),
            travel_table: Vec::new(),
        }
    }

    /// Create a location with only a long description.
    pub fn described(long_description: impl Into<String>) -> Self {
        Self::with_descriptions(long_description, None::<String>)
    }

    /// Set the short description, builder style.
    pub fn with_short_description(mut self, short_description: impl Into<String>) -> Self {
        self.short_description = short_description.into();
        self
    }

    /// Brief text shown on repeat visits.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Replace the short description.
    pub fn set_short_description(&mut self, short_description: impl Into<String>) {
        self.short_description = short_description.into();
    }

    /// Full text shown on the first visit.
    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    /// Replace the long description.
    pub fn set_long_description(&mut self, long_description: impl Into<String>) {
        self.long_description = long_description.into();
    }

    /// Text to show the player: the short description on repeat visits
    /// when there is one, the long description otherwise.
    pub fn description(&self, visited: bool) -> &str {
        if visited && !self.short_description.is_empty() {
            &self.short_description
        } else {
            &self.long_description
        }
    }

    /// Add travel information from a raw record.
    ///
    /// Field 0 is the current location and is ignored here. Field 1 is the
    /// 1-based destination, followed by the motion words that lead there.
    /// Destinations at or above 300 have special meanings in the original
    /// game and are skipped without error. The table is left untouched when
    /// any field fails to parse.
    pub fn add_travel_info<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<(), TravelError> {
        let (destination, words) = parse_link(fields)?;
        self.insert_travel(destination, words, DEFAULT_SPECIAL_DESTINATION_THRESHOLD);
        Ok(())
    }

    /// Add an already parsed record, skipping destinations at or above `threshold`.
    ///
    /// `threshold` is capped at [`DEFAULT_SPECIAL_DESTINATION_THRESHOLD`].
    /// Returns whether the record was stored.
    pub fn add_travel_record(&mut self, record: TravelRecord, threshold: i32) -> bool {
        self.insert_travel(record.destination, record.words, threshold)
    }

    fn insert_travel(&mut self, destination: LocationId, words: Vec<WordId>, threshold: i32) -> bool {
        if destination.0 >= threshold.min(DEFAULT_SPECIAL_DESTINATION_THRESHOLD) {
            debug!(%destination, "Skipping special destination");
            return false;
        }

        match self
            .travel_table
            .iter_mut()
            .find(|entry| entry.destination == destination)
        {
            Some(entry) => {
                debug!(%destination, "Replacing travel words");
                entry.words = words;
            }
            None => self.travel_table.push(TravelEntry { destination, words }),
        }
        true
    }

    /// Find the destination reached with `word`, if any.
    pub fn find_destination(&self, word: WordId) -> Option<LocationId> {
        let found = self
            .travel_table
            .iter()
            .find(|entry| entry.words.contains(&word))
            .map(|entry| entry.destination);
        trace!(%word, ?found, "Destination lookup");
        found
    }

    /// Every travel entry, in table order.
    pub fn travel_table(&self) -> &[TravelEntry] {
        &self.travel_table
    }

    /// Motion words leading to `destination`, if it is in the table.
    pub fn words_for(&self, destination: LocationId) -> Option<&[WordId]> {
        self.travel_table
            .iter()
            .find(|entry| entry.destination == destination)
            .map(|entry| entry.words.as_slice())
    }

    /// Destinations reachable from here, in table order.
    pub fn destinations(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.travel_table.iter().map(|entry| entry.destination)
    }

    /// Whether any destination is reachable from here.
    pub fn has_exits(&self) -> bool {
        !self.travel_table.is_empty()
    }
}
