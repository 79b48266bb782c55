//! Cave configuration.

/// Destinations at or above this (0-based) id have special meanings in the
/// original game data and are never stored as travel targets.
pub const DEFAULT_SPECIAL_DESTINATION_THRESHOLD: i32 = 300;

/// Configuration for a [`Cave`](crate::Cave).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaveConfig {
    /// First destination id treated as special rather than a room.
    /// Never above [`DEFAULT_SPECIAL_DESTINATION_THRESHOLD`].
    special_destination_threshold: i32,
}

impl CaveConfig {
    /// Create a config using the original game's threshold.
    pub fn new() -> Self {
        Self {
            special_destination_threshold: DEFAULT_SPECIAL_DESTINATION_THRESHOLD,
        }
    }

    /// Lower the special-destination threshold.
    ///
    /// Values above [`DEFAULT_SPECIAL_DESTINATION_THRESHOLD`] are clamped to it.
    pub fn with_special_destination_threshold(mut self, threshold: i32) -> Self {
        self.special_destination_threshold = threshold.min(DEFAULT_SPECIAL_DESTINATION_THRESHOLD);
        self
    }

    /// First destination id treated as special.
    pub fn special_destination_threshold(&self) -> i32 {
        self.special_destination_threshold
    }
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self::new()
    }
}
