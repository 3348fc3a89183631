//! Presentation state for a backgammon board.
//!
//! Nothing here knows about rules. A [`Board`] says which points are occupied,
//! by whom and how deeply, plus the furniture around them (bar, borne-off
//! trays, cube, dice) and whose perspective the board is drawn from.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of points on a board.
pub const POINT_COUNT: usize = 24;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    White,
    Black,
    #[default]
    Empty,
}

impl From<Player> for Owner {
    fn from(p: Player) -> Self {
        match p {
            Player::White => Owner::White,
            Player::Black => Owner::Black,
        }
    }
}

impl Owner {
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::White => Some(Player::White),
            Owner::Black => Some(Player::Black),
            Owner::Empty => None,
        }
    }
}

/// One of the 24 points. A plain value: every board slot owns its own copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub checkers: u32,
}

impl Point {
    pub const EMPTY: Point = Point {
        owner: Owner::Empty,
        checkers: 0,
    };

    /// A stack of `checkers` belonging to `player`; zero checkers is an empty point.
    pub fn occupied(player: Player, checkers: u32) -> Point {
        if checkers == 0 {
            Point::EMPTY
        } else {
            Point {
                owner: player.into(),
                checkers,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.checkers == 0
    }

    pub fn is_consistent(&self) -> bool {
        (self.owner == Owner::Empty) == (self.checkers == 0)
    }
}

/// A value kept separately for each side. A side missing from JSON takes
/// `T::default()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerPlayer<T> {
    pub white: T,
    pub black: T,
}

impl<T: Copy> PerPlayer<T> {
    pub fn get(&self, player: Player) -> T {
        match player {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }

    pub fn set(&mut self, player: Player, value: T) {
        match player {
            Player::White => self.white = value,
            Player::Black => self.black = value,
        }
    }
}

/// The doubling cube; `owner == None` means it sits in the middle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    pub value: u32,
    #[serde(default)]
    pub owner: Option<Player>,
}

impl Default for Cube {
    fn default() -> Self {
        Cube {
            value: 1,
            owner: None,
        }
    }
}

impl Cube {
    pub fn is_valid(&self) -> bool {
        self.value.is_power_of_two() && self.value <= 64
    }
}

/// Dice showing for `player`. Only displayed, never rolled here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub player: Player,
    pub values: [u8; 2],
}

/// Full presentation state of one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Position", into = "Position")]
pub struct Board {
    pub points: [Point; POINT_COUNT],
    pub active_player: Player,
    pub bar: PerPlayer<u32>,
    pub off: PerPlayer<u32>,
    pub cube: Cube,
    pub dice: Option<Dice>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Empty board, White to view.
    pub fn new() -> Board {
        Board {
            points: [Point::EMPTY; POINT_COUNT],
            active_player: Player::White,
            bar: PerPlayer::default(),
            off: PerPlayer::default(),
            cube: Cube::default(),
            dice: None,
        }
    }

    /// The usual opening layout, 15 checkers a side.
    pub fn starting_position() -> Board {
        let mut board = Board::new();
        let layout = [
            (0, Player::White, 5),
            (10, Player::White, 3),
            (17, Player::White, 2),
            (18, Player::White, 5),
            (4, Player::Black, 3),
            (6, Player::Black, 5),
            (12, Player::Black, 5),
            (23, Player::Black, 2),
        ];
        for (index, player, checkers) in layout {
            board.points[index] = Point::occupied(player, checkers);
        }
        board
    }

    pub fn from_json(text: &str) -> Result<Board> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn point(&self, index: usize) -> Result<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or(Error::PointIndex { index })
    }

    pub fn set_point(&mut self, index: usize, point: Point) -> Result<()> {
        check_point(index, &point)?;
        let slot = self
            .points
            .get_mut(index)
            .ok_or(Error::PointIndex { index })?;
        *slot = point;
        Ok(())
    }

    /// Check every invariant a painter relies on.
    pub fn validate(&self) -> Result<()> {
        for (index, point) in self.points.iter().enumerate() {
            check_point(index, point)?;
        }
        if !self.cube.is_valid() {
            return Err(Error::CubeValue(self.cube.value));
        }
        if let Some(dice) = &self.dice {
            for v in dice.values {
                if !(1..=6).contains(&v) {
                    return Err(Error::DieValue(v));
                }
            }
        }
        Ok(())
    }

    /// Checkers of `player` on points, the bar and the tray.
    ///
    /// Counts are uncapped, so the total is widened to `u64`.
    pub fn checker_total(&self, player: Player) -> u64 {
        let owner = Owner::from(player);
        let on_points: u64 = self
            .points
            .iter()
            .filter(|p| p.owner == owner)
            .map(|p| u64::from(p.checkers))
            .sum();
        on_points + u64::from(self.bar.get(player)) + u64::from(self.off.get(player))
    }
}

fn check_point(index: usize, point: &Point) -> Result<()> {
    if index >= POINT_COUNT {
        return Err(Error::PointIndex { index });
    }
    if !point.is_consistent() {
        return Err(Error::InconsistentPoint {
            index,
            owner: point.owner,
            checkers: point.checkers,
        });
    }
    Ok(())
}

/// Wire form of a [`Board`]: points as a list so the length can be checked.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct Position {
    #[serde(default)]
    active_player: Player,
    points: Vec<Point>,
    #[serde(default)]
    bar: PerPlayer<u32>,
    #[serde(default)]
    off: PerPlayer<u32>,
    #[serde(default)]
    cube: Cube,
    #[serde(default)]
    dice: Option<Dice>,
}

impl TryFrom<Position> for Board {
    type Error = Error;

    fn try_from(raw: Position) -> Result<Board> {
        let found = raw.points.len();
        let points: [Point; POINT_COUNT] = raw
            .points
            .try_into()
            .map_err(|_| Error::PointCount { found })?;
        let board = Board {
            points,
            active_player: raw.active_player,
            bar: raw.bar,
            off: raw.off,
            cube: raw.cube,
            dice: raw.dice,
        };
        board.validate()?;
        Ok(board)
    }
}

impl From<Board> for Position {
    fn from(b: Board) -> Self {
        Position {
            active_player: b.active_player,
            points: b.points.to_vec(),
            bar: b.bar,
            off: b.off,
            cube: b.cube,
            dice: b.dice,
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
