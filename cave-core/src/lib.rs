//! Room model for a Colossal Cave style text adventure.
//!
//! This crate provides:
//! - [`Location`]: one room, its descriptions and its travel table
//! - [`TravelRecord`]: parsing of raw travel records
//! - [`Cave`]: every location of a game, with travel routed by room
//!
//! # Quick Start
//!
//! ```
//! use cave_core::{Location, LocationId, WordId};
//!
//! let mut road = Location::described("You are standing at the end of a road.");
//! road.add_travel_info(&["1", "2", "2", "44"]).unwrap();
//!
//! assert_eq!(road.find_destination(WordId(44)), Some(LocationId(1)));
//! assert_eq!(road.find_destination(WordId(99)), None);
//! ```

pub mod cave;
pub mod config;
pub mod location;
pub mod testing;
pub mod travel;

pub use cave::{Cave, CaveError};
pub use config::{CaveConfig, DEFAULT_SPECIAL_DESTINATION_THRESHOLD};
pub use location::{Location, LocationError, TravelEntry};
pub use travel::{LocationId, TravelError, TravelRecord, WordId};
