#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! World construction for Soulweaver.
//!
//! The factories here return fully populated [`World`] values: a
//! deterministic built-in starting world, and a loader for hand-authored
//! TOML world files. Every world handed out contains the `(0, 0)` starting
//! coordinate and no duplicate coordinates; sessions rely on that without
//! re-checking it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use soulweaver_core::GridPosition;
use soulweaver_world::{Location, World};

/// Failures raised while constructing a world.
#[derive(Debug, Error)]
pub enum WorldGenError {
    /// The world file could not be read.
    #[error("failed to read world file: {0}")]
    Io(#[from] std::io::Error),
    /// The world file was not valid TOML in the expected shape.
    #[error("failed to parse world file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Two locations claimed the same coordinate.
    #[error("duplicate location at ({}, {})", .0.x(), .0.y())]
    DuplicateLocation(GridPosition),
    /// No location was declared at the starting coordinate.
    #[error("world does not contain the starting location (0, 0)")]
    MissingStart,
}

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    location: Vec<LocationConfig>, // [[location]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct LocationConfig {
    #[serde(flatten)]
    position: GridPosition,
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    items: Vec<String>,
}

/// Loads a world from TOML text.
pub fn load_world_from_str(text: &str) -> Result<World, WorldGenError> {
    let file: WorldFile = toml::from_str(text)?;
    build_world(file)
}

/// Loads a world from a TOML file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldGenError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

fn build_world(file: WorldFile) -> Result<World, WorldGenError> {
    let mut seen: HashSet<GridPosition> = HashSet::with_capacity(file.location.len());
    let mut locations = Vec::with_capacity(file.location.len());

    for config in file.location {
        if !seen.insert(config.position) {
            return Err(WorldGenError::DuplicateLocation(config.position));
        }
        locations.push(Location::new(
            config.position,
            config.name,
            config.desc,
            config.items,
        ));
    }

    if !seen.contains(&GridPosition::START) {
        return Err(WorldGenError::MissingStart);
    }

    Ok(World::from_locations(
        file.world.name,
        file.world.desc,
        locations,
    ))
}

/// Builds the deterministic starting world used when no world file is
/// supplied.
#[must_use]
pub fn builtin_world() -> World {
    let locations = vec![
        Location::new(
            GridPosition::new(0, 0),
            "Ashen Crossroads",
            "Four packed-dirt paths meet beneath a leaning signpost. The \
             letters burned into its arms have long since blurred.",
            vec!["weathered_signpost".to_string()],
        ),
        Location::new(
            GridPosition::new(0, 1),
            "Threadbare Chapel",
            "Prayer-threads hang from the rafters in faded loops. A draft \
             keeps them swaying even with the doors shut.",
            vec!["prayer_thread".to_string()],
        ),
        Location::new(
            GridPosition::new(0, 2),
            "Bell Tower Ruin",
            "The tower's upper half lies in the nave below. What remains of \
             the bell hums when the wind leans on it.",
            Vec::new(),
        ),
        Location::new(
            GridPosition::new(1, 0),
            "Ember Market",
            "Stalls lean against one another under a soot-stained awning. \
             Nobody is selling, but the braziers are still warm.",
            vec!["copper_scale".to_string(), "cold_brazier".to_string()],
        ),
        Location::new(
            GridPosition::new(-1, 0),
            "Weaver's Rest",
            "A low-beamed common room with one lit lamp and many empty \
             chairs. The floorboards remember footsteps.",
            vec!["unfinished_tapestry".to_string()],
        ),
        Location::new(
            GridPosition::new(0, -1),
            "Hollow Gate",
            "The southern gate stands open onto mist. Its hinges are rusted \
             in place, neither shut nor welcoming.",
            Vec::new(),
        ),
        Location::new(
            GridPosition::new(1, 1),
            "Collapsed Archive",
            "Shelves have spilled their ledgers into drifts of paper. Ink \
             has run until every account agrees on nothing.",
            vec!["sodden_ledger".to_string()],
        ),
    ];

    World::from_locations(
        "The Emberfell Reaches",
        "A settlement gone quiet, its streets laid out on an old weaving \
         grid. Whatever unpicked the place left the roads intact.",
        locations,
    )
}
