//! Every bundled position file parses, validates and paints.

use std::fs;
use std::path::Path;

use gammon_core::{Board, Player, RecordingSurface, paint};

fn load(name: &str) -> Board {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../positions").join(name);
    let text = fs::read_to_string(&path).unwrap();
    Board::from_json(&text).unwrap()
}

#[test]
fn opening_file_matches_starting_position() {
    assert_eq!(load("opening.json"), Board::starting_position());
}

#[test]
fn late_race_paints_every_kind_of_furniture() {
    let board = load("late-race.json");
    assert_eq!(board.active_player, Player::Black);
    assert_eq!(board.checker_total(Player::White), 15);
    assert_eq!(board.checker_total(Player::Black), 15);

    let mut s = RecordingSurface::new();
    paint(&mut s, 800.0, &board).unwrap();
    assert_eq!((s.width, s.height), (800.0, 600.0));
    assert_eq!(s.triangles().len(), 24);
    // Cube face plus the six-checker overflow label.
    let labels = s.labels();
    assert!(labels.contains(&"4".to_string()));
    assert!(labels.contains(&"6".to_string()));
}
