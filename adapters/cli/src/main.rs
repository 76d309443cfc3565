#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Soulweaver session in the terminal.
//!
//! The loop submits [`Command`] values to the session and consumes the
//! drained [`Event`] stream to keep its exit view current and decide when
//! to re-render, mirroring how a bound UI would react to the session's
//! change announcements.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use soulweaver_core::{Command, Direction, Event};
use soulweaver_system_worldgen as worldgen;
use soulweaver_world::{apply, query, GameSession, Player};

/// Arguments accepted by the Soulweaver terminal front end.
#[derive(Debug, Parser)]
#[command(name = "soulweaver", about = "Grid-walking text adventure session")]
struct Args {
    /// TOML world file to explore instead of the built-in world.
    #[arg(long)]
    world: Option<PathBuf>,

    /// Player name to use instead of the placeholder.
    #[arg(long)]
    name: Option<String>,
}

/// Exit availability as last announced by the session.
#[derive(Clone, Copy, Debug, Default)]
struct ExitView {
    north: bool,
    east: bool,
    south: bool,
    west: bool,
}

impl ExitView {
    fn record(&mut self, direction: Direction, available: bool) {
        match direction {
            Direction::North => self.north = available,
            Direction::East => self.east = available,
            Direction::South => self.south = available,
            Direction::West => self.west = available,
        }
    }

    fn describe(&self) -> String {
        let mut open = Vec::new();
        if self.north {
            open.push("north");
        }
        if self.east {
            open.push("east");
        }
        if self.south {
            open.push("south");
        }
        if self.west {
            open.push("west");
        }

        if open.is_empty() {
            "You see no way onward.".to_string()
        } else {
            format!("Exits: {}.", open.join(", "))
        }
    }
}

fn parse_direction(input: &str) -> Option<Direction> {
    match input {
        "north" | "n" => Some(Direction::North),
        "east" | "e" => Some(Direction::East),
        "south" | "s" => Some(Direction::South),
        "west" | "w" => Some(Direction::West),
        _ => None,
    }
}

/// Folds a drained event batch into the exit view and re-renders if the
/// current location was announced.
fn consume_events(events: &[Event], exits: &mut ExitView, session: &GameSession) {
    let mut location_changed = false;
    for event in events {
        match *event {
            Event::CurrentLocationChanged { .. } => location_changed = true,
            Event::ExitAvailabilityChanged {
                direction,
                available,
            } => exits.record(direction, available),
        }
    }

    if location_changed {
        render_location(session, exits);
    }
}

fn render_location(session: &GameSession, exits: &ExitView) {
    match query::current_location(session) {
        Some(location) => {
            println!("\n{}", location.name());
            println!("{}", location.description());
            if !location.items().is_empty() {
                println!("You notice: {}.", location.items().join(", "));
            }
            println!("{}", exits.describe());
        }
        None => {
            println!("\nThe road ends and so does the ground. Grey nothing stretches away.");
            println!("{}", exits.describe());
        }
    }
}

fn render_player(player: &Player) {
    println!(
        "{}, {} (level {})",
        player.name, player.character_class, player.level
    );
    println!(
        "Hit points {}   Coin {}   Experience {}",
        player.hit_points, player.coin, player.experience_points
    );
}

fn print_help() {
    println!("Commands: north/n, east/e, south/s, west/w (or 'go <direction>'),");
    println!("          look/l, player, help, quit.");
}

/// Entry point for the Soulweaver command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let world = match &args.world {
        Some(path) => worldgen::load_world_from_file(path)
            .with_context(|| format!("failed to load world '{}'", path.display()))?,
        None => worldgen::builtin_world(),
    };

    let mut player = Player::default();
    if let Some(name) = args.name {
        player.name = name;
    }

    println!("Welcome to {}.", world.name());
    if !world.description().is_empty() {
        println!("{}", world.description());
    }
    println!("Type 'help' for commands.");

    let mut events = Vec::new();
    let mut exits = ExitView::default();
    let mut session = GameSession::new(player, world, &mut events);
    consume_events(&events, &mut exits, &session);
    events.clear();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let lower = line.trim().to_lowercase();
        if lower.is_empty() {
            continue;
        }
        let input = lower.strip_prefix("go ").unwrap_or(&lower).trim();

        match input {
            "quit" | "exit" => {
                println!("Goodbye.");
                break;
            }
            "help" => print_help(),
            "look" | "l" => render_location(&session, &exits),
            "player" | "stats" => render_player(query::player(&session)),
            other => match parse_direction(other) {
                Some(direction) => {
                    apply(&mut session, Command::Move { direction }, &mut events);
                    consume_events(&events, &mut exits, &session);
                    events.clear();
                }
                None => println!("I don't understand that command."),
            },
        }
    }

    Ok(())
}
