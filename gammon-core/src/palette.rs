use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Shade;
use crate::model::Player;

/// Board colours. Any field missing from a JSON override keeps its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub board_border: String,
    pub board_inner: String,
    pub white_triangle: String,
    pub black_triangle: String,
    pub triangle_border: String,
    pub black_checker: String,
    pub white_checker: String,
    pub checker_border: String,
    pub cube_body: String,
    pub cube_number: String,
    pub black_dice_body: String,
    pub black_dice_dot: String,
    pub white_dice_body: String,
    pub white_dice_dot: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            board_border: "#663300".into(),
            board_inner: "#B88A00".into(),
            white_triangle: "#ADAD85".into(),
            black_triangle: "#FF471A".into(),
            triangle_border: "#444".into(),
            black_checker: "#333".into(),
            white_checker: "#DDD".into(),
            checker_border: "#444".into(),
            cube_body: "#DDD".into(),
            cube_number: "#333".into(),
            black_dice_body: "#333".into(),
            black_dice_dot: "#DDD".into(),
            white_dice_body: "#DDD".into(),
            white_dice_dot: "#333".into(),
        }
    }
}

impl Palette {
    pub fn from_json(text: &str) -> Result<Palette> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn triangle(&self, shade: Shade) -> &str {
        match shade {
            Shade::Black => &self.black_triangle,
            Shade::White => &self.white_triangle,
        }
    }

    pub fn checker(&self, player: Player) -> &str {
        match player {
            Player::White => &self.white_checker,
            Player::Black => &self.black_checker,
        }
    }

    /// Label colour drawn on top of a checker of `player`.
    pub fn checker_label(&self, player: Player) -> &str {
        self.checker(player.opponent())
    }

    pub fn dice_body(&self, player: Player) -> &str {
        match player {
            Player::White => &self.white_dice_body,
            Player::Black => &self.black_dice_body,
        }
    }

    pub fn dice_dot(&self, player: Player) -> &str {
        match player {
            Player::White => &self.white_dice_dot,
            Player::Black => &self.black_dice_dot,
        }
    }
}
