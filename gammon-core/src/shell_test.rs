use super::*;
use crate::error::Error;
use crate::model::{Owner, Point};
use crate::surface::RecordingSurface;

fn mounted() -> BoardView<RecordingSurface> {
    BoardView::mount(RecordingSurface::new(), 640.0).unwrap()
}

#[test]
fn mount_paints_once_with_an_empty_board() {
    let view = mounted();
    assert_eq!(view.surface().resizes, 1);
    assert_eq!(*view.board(), Board::new());
    assert_eq!(view.height(), 480.0);
    assert_eq!(view.surface().height, 480.0);
}

#[test]
fn mount_rejects_zero_width() {
    let err = BoardView::mount(RecordingSurface::new(), 0.0).err();
    assert!(matches!(err, Some(Error::InvalidWidth(_))));
}

#[test]
fn each_change_repaints_exactly_once() {
    let mut view = mounted();
    view.replace_board(Board::starting_position()).unwrap();
    assert_eq!(view.surface().resizes, 2);
    view.set_active_player(Player::Black).unwrap();
    assert_eq!(view.surface().resizes, 3);
    view.set_width(800.0).unwrap();
    assert_eq!(view.surface().resizes, 4);
    view.set_palette(Palette::default()).unwrap();
    assert_eq!(view.surface().resizes, 5);
}

#[test]
fn rejected_board_keeps_previous_state_and_frame() {
    let mut view = mounted();
    view.replace_board(Board::starting_position()).unwrap();
    let frame = view.surface().ops.clone();

    let mut bad = Board::new();
    bad.points[0] = Point {
        owner: Owner::White,
        checkers: 0,
    };
    assert!(view.replace_board(bad).is_err());
    assert_eq!(*view.board(), Board::starting_position());
    assert_eq!(view.surface().ops, frame);
    assert_eq!(view.surface().resizes, 2);
}

#[test]
fn rejected_width_keeps_previous_width() {
    let mut view = mounted();
    assert!(view.set_width(-5.0).is_err());
    assert_eq!(view.width(), 640.0);
    assert_eq!(view.surface().resizes, 1);
}

#[test]
fn resize_updates_surface_dimensions() {
    let mut view = mounted();
    view.set_width(800.0).unwrap();
    assert_eq!(view.surface().width, 800.0);
    assert_eq!(view.surface().height, 600.0);
}

#[test]
fn active_player_change_is_kept() {
    let mut view = mounted();
    view.set_active_player(Player::Black).unwrap();
    assert_eq!(view.board().active_player, Player::Black);
    let surface = view.into_surface();
    assert_eq!(surface.triangles().len(), 24);
}
