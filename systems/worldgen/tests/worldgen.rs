use std::env;
use std::fs;

use soulweaver_core::{Direction, GridPosition};
use soulweaver_system_worldgen::{
    builtin_world, load_world_from_file, load_world_from_str, WorldGenError,
};
use soulweaver_world::{query, GameSession, Player};

const HAMLET: &str = r#"
[world]
name = "Mistfen Hamlet"
desc = "Three houses and a disagreement about fog."

[[location]]
x = 0
y = 0
name = "Duckboard Square"
desc = "Planks over mud, arranged with misplaced civic pride."
items = ["loose_plank"]

[[location]]
x = 0
y = 1
name = "Eel Smokehouse"
desc = "The smoke left years ago. The smell stayed."

[[location]]
x = -1
y = 0
name = "Ferry Landing"
desc = "A bell on a post summons a ferry that no longer comes."
items = ["mooring_bell", "frayed_rope"]
"#;

#[test]
fn loads_header_and_locations_from_toml() {
    let world = load_world_from_str(HAMLET).expect("hamlet world should load");

    assert_eq!(world.name(), "Mistfen Hamlet");
    assert!(world.description().starts_with("Three houses"));
    assert_eq!(world.location_count(), 3);

    for (x, y, name) in [
        (0, 0, "Duckboard Square"),
        (0, 1, "Eel Smokehouse"),
        (-1, 0, "Ferry Landing"),
    ] {
        let position = GridPosition::new(x, y);
        let location = world.get_location(position).expect("declared location");
        assert_eq!(location.position(), position);
        assert_eq!(location.name(), name);
    }

    let landing = world
        .get_location(GridPosition::new(-1, 0))
        .expect("ferry landing");
    assert_eq!(
        landing.items(),
        ["mooring_bell".to_string(), "frayed_rope".to_string()]
    );
}

#[test]
fn undeclared_coordinates_stay_unpopulated() {
    let world = load_world_from_str(HAMLET).expect("hamlet world should load");
    assert!(world.get_location(GridPosition::new(1, 0)).is_none());
    assert!(world.get_location(GridPosition::new(-1, 1)).is_none());
}

#[test]
fn duplicate_coordinates_are_rejected() {
    let text = r#"
[world]
name = "Twice Town"

[[location]]
x = 0
y = 0
name = "First"

[[location]]
x = 0
y = 0
name = "Second"
"#;

    match load_world_from_str(text) {
        Err(WorldGenError::DuplicateLocation(position)) => {
            assert_eq!(position, GridPosition::new(0, 0));
        }
        other => panic!("expected duplicate rejection, got {other:?}"),
    }
}

#[test]
fn missing_starting_coordinate_is_rejected() {
    let text = r#"
[world]
name = "Offset Town"

[[location]]
x = 1
y = 1
name = "Elsewhere"
"#;

    assert!(matches!(
        load_world_from_str(text),
        Err(WorldGenError::MissingStart)
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        load_world_from_str("[world"),
        Err(WorldGenError::Parse(_))
    ));
}

#[test]
fn builtin_world_populates_the_start() {
    let world = builtin_world();
    let start = world
        .get_location(GridPosition::START)
        .expect("builtin world must populate (0, 0)");
    assert_eq!(start.position(), GridPosition::START);
    assert!(world.location_count() >= 2);
}

#[test]
fn session_starts_inside_a_generated_world() {
    let mut events = Vec::new();
    let session = GameSession::new(Player::default(), builtin_world(), &mut events);

    let current = query::current_location(&session).expect("session starts populated");
    assert_eq!(current.position(), GridPosition::START);
    assert!(query::has_location_to(&session, Direction::North));
    assert_eq!(events.len(), 5);
}

#[test]
fn worlds_load_from_disk() {
    let path = env::temp_dir().join("soulweaver_worldgen_hamlet.toml");
    fs::write(&path, HAMLET).expect("write temp world file");

    let world = load_world_from_file(&path).expect("world file should load");
    assert_eq!(world.name(), "Mistfen Hamlet");

    fs::remove_file(&path).ok();
}

#[test]
fn unreadable_world_files_surface_io_errors() {
    let path = env::temp_dir().join("soulweaver_worldgen_absent.toml");
    assert!(matches!(
        load_world_from_file(&path),
        Err(WorldGenError::Io(_))
    ));
}
