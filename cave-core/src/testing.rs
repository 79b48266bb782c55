//! Fixtures for tests: a few rooms from the start of the original cave.

use crate::cave::{Cave, CaveError};
use crate::config::CaveConfig;
use crate::location::Location;
use crate::travel::WordId;

pub const ROAD: WordId = WordId(2);
pub const ENTER: WordId = WordId(3);
pub const FOREST: WordId = WordId(6);
pub const WEST: WordId = WordId(44);
pub const SOUTH: WordId = WordId(46);
pub const OUT: WordId = WordId(11);

/// Travel section for [`sample_cave`], in the original data layout.
pub const SAMPLE_TRAVEL: &str = "\
1\t2\t2\t44\t29
1\t3\t3\t12\t19\t43
1\t4\t5\t13\t14\t46\t30
1\t5\t6\t45\t43
2\t1\t2\t12\t7\t43\t45\t30
2\t5\t6\t45\t46
3\t1\t11\t32\t44
4\t1\t4\t12\t45
4\t5\t6\t43\t44\t29
5\t4\t9
5\t301\t1
-1
";

/// Build a five room cave with [`SAMPLE_TRAVEL`] loaded.
pub fn sample_cave() -> Cave {
    match try_sample_cave() {
        Ok(cave) => cave,
        Err(e) => panic!("sample cave is malformed: {e}"),
    }
}

fn try_sample_cave() -> Result<Cave, CaveError> {
    let mut cave = Cave::new(CaveConfig::default());
    let rooms = [
        Location::described(
            "You are standing at the end of a road before a small brick building.",
        )
        .with_short_description("You're at end of road again."),
        Location::described("You have walked up a hill, still in the forest.")
            .with_short_description("You're at hill in road."),
        Location::described("You are inside a building, a well house for a large spring.")
            .with_short_description("You're inside building."),
        Location::described("You are in a valley in the forest beside a stream.")
            .with_short_description("You're in valley."),
        Location::described("You are in open forest."),
    ];
    for room in rooms {
        cave.add_location(room)?;
    }

    cave.load_travel_table(SAMPLE_TRAVEL)?;
    Ok(cave)
}
