//! The cave: every location in the game, indexed by id.
//!
//! Travel data arrives as flat records naming the room they belong to, so
//! the cave routes each one to its location before the location stores it.

use crate::config::CaveConfig;
use crate::location::Location;
use crate::travel::{LocationId, TravelError, TravelRecord, WordId};
use thiserror::Error;
use tracing::debug;

/// Errors from cave operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaveError {
    #[error("Travel error: {0}")]
    Travel(#[from] TravelError),

    #[error("Unknown location: {0}")]
    UnknownLocation(LocationId),

    #[error("Too many locations")]
    TooManyLocations,

    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<CaveError>,
    },
}

/// Marks the end of a section in the original data files.
const END_OF_SECTION: &str = "-1";

/// All locations of one game.
#[derive(Debug, Clone, Default)]
pub struct Cave {
    config: CaveConfig,
    locations: Vec<Location>,
}

/// Id of the location stored at `index`.
///
/// Only called with indices below `locations.len()`, which `add_location`
/// keeps within `i32`.
fn id_at(index: usize) -> LocationId {
    LocationId(index as i32)
}

impl Cave {
    /// Create an empty cave.
    pub fn new(config: CaveConfig) -> Self {
        Self {
            config,
            locations: Vec::new(),
        }
    }

    /// The configuration this cave was built with.
    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Add a location, returning its id.
    ///
    /// Fails once every `i32` id has been handed out.
    pub fn add_location(&mut self, location: Location) -> Result<LocationId, CaveError> {
        let id = i32::try_from(self.locations.len())
            .map(LocationId)
            .map_err(|_| CaveError::TooManyLocations)?;
        self.locations.push(location);
        Ok(id)
    }

    /// Location with the given id.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        id.index().and_then(|index| self.locations.get(index))
    }

    /// Mutable access to the location with the given id.
    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        id.index().and_then(|index| self.locations.get_mut(index))
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the cave has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Every location with its id, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, location)| (id_at(index), location))
    }

    /// Add a raw travel record to the location named in field 0.
    ///
    /// Returns whether the record was stored; special destinations are not.
    pub fn add_travel_info<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<bool, CaveError> {
        let record = TravelRecord::from_fields(fields)?;
        self.add_travel_record(record)
    }

    /// Add a parsed record to the location it names.
    pub fn add_travel_record(&mut self, record: TravelRecord) -> Result<bool, CaveError> {
        let threshold = self.config.special_destination_threshold();
        let location = self
            .location_mut(record.current)
            .ok_or(CaveError::UnknownLocation(record.current))?;
        Ok(location.add_travel_record(record, threshold))
    }

    /// Load a travel section, one whitespace-separated record per line.
    ///
    /// Blank lines are skipped and a line holding `-1` ends the section.
    /// Stops at the first bad line. Returns the number of records stored.
    pub fn load_travel_table(&mut self, text: &str) -> Result<usize, CaveError> {
        let mut stored = 0;
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == END_OF_SECTION {
                break;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let added = self
                .add_travel_info(&fields)
                .map_err(|source| CaveError::Line {
                    line: index + 1,
                    source: Box::new(source),
                })?;
            if added {
                stored += 1;
            }
        }

        debug!(stored, locations = self.locations.len(), "Loaded travel table");
        Ok(stored)
    }

    /// Where `word` leads from location `from`.
    pub fn travel(&self, from: LocationId, word: WordId) -> Result<Option<LocationId>, CaveError> {
        let location = self
            .location(from)
            .ok_or(CaveError::UnknownLocation(from))?;
        Ok(location.find_destination(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> Cave {
        let mut cave = Cave::default();
        cave.add_location(Location::described("End of road.")).unwrap();
        cave.add_location(Location::described("Hill in road.")).unwrap();
        cave
    }

    #[test]
    fn test_add_location_ids() {
        let cave = two_rooms();
        assert_eq!(cave.len(), 2);
        assert_eq!(
            cave.location(LocationId(1)).map(Location::long_description),
            Some("Hill in road.")
        );
        assert!(cave.location(LocationId(2)).is_none());
        assert!(cave.location(LocationId(-1)).is_none());
    }

    #[test]
    fn test_iter_ids_match_add_location() {
        let mut cave = two_rooms();
        let id = cave.add_location(Location::described("Valley.")).unwrap();
        assert_eq!(id, LocationId(2));

        let ids: Vec<_> = cave.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![LocationId(0), LocationId(1), LocationId(2)]);
    }

    #[test]
    fn test_threshold_above_default_is_clamped() {
        let mut cave = Cave::new(CaveConfig::new().with_special_destination_threshold(1000));
        cave.add_location(Location::new()).unwrap();

        assert!(!cave.add_travel_info(&["1", "501", "7"]).unwrap());
        assert_eq!(cave.travel(LocationId(0), WordId(7)), Ok(None));
    }

    #[test]
    fn test_routes_by_current_location() {
        let mut cave = two_rooms();
        assert!(cave.add_travel_info(&["2", "1", "12"]).unwrap());

        assert_eq!(cave.travel(LocationId(1), WordId(12)), Ok(Some(LocationId(0))));
        assert_eq!(cave.travel(LocationId(0), WordId(12)), Ok(None));
    }

    #[test]
    fn test_unknown_location() {
        let mut cave = two_rooms();
        assert_eq!(
            cave.add_travel_info(&["9", "1", "12"]),
            Err(CaveError::UnknownLocation(LocationId(8)))
        );
        assert_eq!(
            cave.travel(LocationId(5), WordId(1)),
            Err(CaveError::UnknownLocation(LocationId(5)))
        );
    }

    #[test]
    fn test_custom_threshold() {
        let mut cave = Cave::new(CaveConfig::new().with_special_destination_threshold(1));
        cave.add_location(Location::new()).unwrap();
        cave.add_location(Location::new()).unwrap();

        assert!(cave.add_travel_info(&["1", "1", "3"]).unwrap());
        assert!(!cave.add_travel_info(&["1", "2", "4"]).unwrap());
        assert_eq!(cave.travel(LocationId(0), WordId(4)), Ok(None));
    }

    #[test]
    fn test_load_reports_line() {
        let mut cave = two_rooms();
        let result = cave.load_travel_table("1 2 2\n\n2 1 x\n");
        match result {
            Err(CaveError::Line { line, source }) => {
                assert_eq!(line, 3);
                assert!(matches!(
                    *source,
                    CaveError::Travel(TravelError::InvalidNumber { index: 2, .. })
                ));
            }
            other => panic!("expected line error, got {other:?}"),
        }
        // Lines before the failure are kept
        assert_eq!(cave.travel(LocationId(0), WordId(2)), Ok(Some(LocationId(1))));
    }

    #[test]
    fn test_load_stops_at_end_marker() {
        let mut cave = two_rooms();
        let stored = cave.load_travel_table("1 2 2\n-1\n2 1 3\n").unwrap();
        assert_eq!(stored, 1);
        assert_eq!(cave.travel(LocationId(1), WordId(3)), Ok(None));
    }
}
