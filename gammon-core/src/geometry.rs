//! Geometry engine: the normalized board grid and its mapping to pixels.
//!
//! Every shape is laid out on a 50×50 step grid. A step is `PITCH` of the
//! surface width horizontally and `PITCH` of the surface height vertically,
//! and the height is always `ASPECT` of the width, so the grid scales
//! anisotropically while the board keeps its 4:3 proportions.
//!
//! Layout is computed in the White player's view. When Black is active the
//! [`Orientation`] rotates the result by 180°.

use crate::error::{Error, Result};
use crate::model::{Cube, Player, POINT_COUNT};

/// One grid step as a fraction of the surface extent.
pub const PITCH: f64 = 0.02;
/// Height / width of every board surface.
pub const ASPECT: f64 = 0.75;
/// Grid steps across either axis.
pub const GRID: f64 = 50.0;
/// Width of a point triangle in grid steps.
pub const POINT_WIDTH: f64 = 3.0;
/// Height of a point triangle in grid steps.
pub const POINT_HEIGHT: f64 = 20.0;
/// Rows above this line point downward.
pub const MID_LINE: f64 = 25.0;
/// Checkers drawn per stack before the count label takes over.
pub const MAX_STACK: u32 = 5;
/// Checker radius in horizontal grid steps.
pub const CHECKER_RADIUS: f64 = POINT_WIDTH / 2.0;
/// Vertical grid steps covered by one checker (its diameter in pixels equals
/// `POINT_WIDTH` horizontal steps).
pub const CHECKER_STEP: f64 = POINT_WIDTH / ASPECT;
/// Slabs a borne-off tray can show.
pub const TRAY_SLOTS: u32 = 15;

const POINTS_PER_QUADRANT: usize = 6;
const TOP_ROW_Y: f64 = 2.0;
const BOTTOM_ROW_Y: f64 = 48.0;
const LEFT_HALF_X: f64 = 5.0;
const RIGHT_HALF_X: f64 = 27.0;
const BAR_X: f64 = 25.0;
const TRAY_SLAB_GAP: f64 = 0.2;

/// Corner holders: top-left, bottom-left, top-right, bottom-right.
pub const HOLDERS: [GridRect; 4] = [
    GridRect::new(1.0, 2.0, 3.0, 20.0),
    GridRect::new(1.0, 28.0, 3.0, 20.0),
    GridRect::new(46.0, 2.0, 3.0, 20.0),
    GridRect::new(46.0, 28.0, 3.0, 20.0),
];

/// The two playing halves under the triangles.
pub const BOARD_HALVES: [GridRect; 2] = [
    GridRect::new(LEFT_HALF_X, 2.0, 18.0, 46.0),
    GridRect::new(RIGHT_HALF_X, 2.0, 18.0, 46.0),
];

/// A pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Px {
    pub x: f64,
    pub y: f64,
}

impl Px {
    pub const fn new(x: f64, y: f64) -> Self {
        Px { x, y }
    }
}

impl From<(f64, f64)> for Px {
    fn from(v: (f64, f64)) -> Self {
        Px { x: v.0, y: v.1 }
    }
}

/// A pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A coordinate in grid steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridPt {
    pub x: f64,
    pub y: f64,
}

impl GridPt {
    pub const fn new(x: f64, y: f64) -> Self {
        GridPt { x, y }
    }

    /// Half-turn about the board centre.
    pub fn rotated(self) -> Self {
        GridPt {
            x: GRID - self.x,
            y: GRID - self.y,
        }
    }
}

/// A rectangle in grid steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl GridRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        GridRect { x, y, w, h }
    }

    /// Half-turn about the board centre.
    pub fn rotated(self) -> Self {
        GridRect {
            x: GRID - self.x - self.w,
            y: GRID - self.y - self.h,
            w: self.w,
            h: self.h,
        }
    }

    pub fn center(&self) -> GridPt {
        GridPt::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Grid-to-pixel mapping for one surface width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    width: f64,
    height: f64,
}

impl Scale {
    pub fn new(width: f64) -> Result<Scale> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidWidth(width));
        }
        Ok(Scale {
            width,
            height: width * ASPECT,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn x(&self, units: f64) -> f64 {
        self.width * PITCH * units
    }

    pub fn y(&self, units: f64) -> f64 {
        self.height * PITCH * units
    }

    pub fn px(&self, p: GridPt) -> Px {
        Px::new(self.x(p.x), self.y(p.y))
    }

    pub fn rect(&self, r: GridRect) -> Rect {
        Rect {
            x: self.x(r.x),
            y: self.y(r.y),
            w: self.x(r.w),
            h: self.y(r.h),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    /// Triangles hang from the top edge and point down.
    Upper,
    /// Triangles stand on the bottom edge and point up.
    Lower,
}

impl Half {
    pub fn of(start_y: f64) -> Half {
        if start_y < MID_LINE {
            Half::Upper
        } else {
            Half::Lower
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Quadrant {
    /// Traversal order of the 24 points.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
    ];

    fn origin(self) -> (f64, f64) {
        match self {
            Quadrant::TopLeft => (LEFT_HALF_X, TOP_ROW_Y),
            Quadrant::BottomLeft => (LEFT_HALF_X, BOTTOM_ROW_Y),
            Quadrant::TopRight => (RIGHT_HALF_X, TOP_ROW_Y),
            Quadrant::BottomRight => (RIGHT_HALF_X, BOTTOM_ROW_Y),
        }
    }
}

/// Where one point's triangle sits on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSlot {
    pub quadrant: Quadrant,
    /// 0..6, left to right within the quadrant.
    pub column: usize,
    pub start_x: f64,
    pub start_y: f64,
    pub half: Half,
}

/// Layout slot for a traversal index.
///
/// `index` must be below 24; anything larger fails the quadrant lookup in
/// every build profile. Use [`try_slot`] for unchecked input.
pub fn slot(index: usize) -> PointSlot {
    debug_assert!(index < POINT_COUNT, "point index {index} out of range");
    let quadrant = Quadrant::ALL[index / POINTS_PER_QUADRANT];
    let column = index % POINTS_PER_QUADRANT;
    let (x0, start_y) = quadrant.origin();
    PointSlot {
        quadrant,
        column,
        start_x: x0 + POINT_WIDTH * column as f64,
        start_y,
        half: Half::of(start_y),
    }
}

pub fn try_slot(index: usize) -> Result<PointSlot> {
    if index >= POINT_COUNT {
        return Err(Error::PointIndex { index });
    }
    Ok(slot(index))
}

/// Triangle vertices in paint order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub base_left: Px,
    pub apex: Px,
    pub base_right: Px,
}

impl Triangle {
    pub fn vertices(&self) -> [Px; 3] {
        [self.base_left, self.apex, self.base_right]
    }
}

/// Isosceles triangle for a point whose base starts at `(start_x, start_y)`.
pub fn triangle(
    scale: Scale,
    start_x: f64,
    start_y: f64,
    unit_w: f64,
    unit_h: f64,
    half: Half,
) -> Triangle {
    let peak_y = match half {
        Half::Upper => start_y + unit_h,
        Half::Lower => start_y - unit_h,
    };
    Triangle {
        base_left: scale.px(GridPt::new(start_x, start_y)),
        apex: scale.px(GridPt::new(start_x + unit_w / 2.0, peak_y)),
        base_right: scale.px(GridPt::new(start_x + unit_w, start_y)),
    }
}

pub fn slot_triangle(scale: Scale, s: &PointSlot) -> Triangle {
    triangle(scale, s.start_x, s.start_y, POINT_WIDTH, POINT_HEIGHT, s.half)
}

/// Triangle fill, named after the palette entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Black,
    White,
}

/// Alternating fill so that no two neighbouring triangles match and each
/// triangle faces one of the other shade across the board.
pub fn point_shade(index: usize) -> Shade {
    let s = slot(index);
    let odd = s.column % 2 == 1;
    let light = match s.half {
        Half::Upper => odd,
        Half::Lower => !odd,
    };
    if light { Shade::White } else { Shade::Black }
}

/// Which way up the board is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Upright,
    /// Half-turn, used when Black is the active player.
    Rotated,
}

impl Orientation {
    pub fn for_player(active: Player) -> Orientation {
        match active {
            Player::White => Orientation::Upright,
            Player::Black => Orientation::Rotated,
        }
    }

    /// Layout slot index that board point `index` occupies.
    pub fn slot_for(self, index: usize) -> usize {
        match self {
            Orientation::Upright => index,
            Orientation::Rotated => POINT_COUNT - 1 - index,
        }
    }

    pub fn point(self, p: GridPt) -> GridPt {
        match self {
            Orientation::Upright => p,
            Orientation::Rotated => p.rotated(),
        }
    }

    pub fn rect(self, r: GridRect) -> GridRect {
        match self {
            Orientation::Upright => r,
            Orientation::Rotated => r.rotated(),
        }
    }
}

/// Checker circles for one stack, edge first.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    pub centers: Vec<Px>,
    pub radius: f64,
    /// Full count, set when more checkers exist than are drawn.
    pub overflow: Option<u32>,
}

impl Stack {
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// The checker that carries the overflow label.
    pub fn innermost(&self) -> Option<Px> {
        self.centers.last().copied()
    }
}

fn stack(
    scale: Scale,
    orientation: Orientation,
    x: f64,
    first_y: f64,
    step: f64,
    checkers: u32,
) -> Stack {
    let drawn = checkers.min(MAX_STACK);
    let centers = (0..drawn)
        .map(|k| {
            let p = GridPt::new(x, first_y + step * f64::from(k));
            scale.px(orientation.point(p))
        })
        .collect();
    Stack {
        centers,
        radius: scale.x(CHECKER_RADIUS),
        overflow: (checkers > MAX_STACK).then_some(checkers),
    }
}

/// Checkers on a point slot, from the board edge toward the middle.
pub fn checker_stack(scale: Scale, s: &PointSlot, checkers: u32) -> Stack {
    let x = s.start_x + POINT_WIDTH / 2.0;
    let half_step = CHECKER_STEP / 2.0;
    match s.half {
        Half::Upper => stack(
            scale,
            Orientation::Upright,
            x,
            s.start_y + half_step,
            CHECKER_STEP,
            checkers,
        ),
        Half::Lower => stack(
            scale,
            Orientation::Upright,
            x,
            s.start_y - half_step,
            -CHECKER_STEP,
            checkers,
        ),
    }
}

/// Checkers waiting on the bar, growing away from the middle of the board.
pub fn bar_stack(scale: Scale, orientation: Orientation, player: Player, checkers: u32) -> Stack {
    let half_step = CHECKER_STEP / 2.0;
    match player {
        Player::White => stack(
            scale,
            orientation,
            BAR_X,
            MID_LINE + 2.0 + half_step,
            CHECKER_STEP,
            checkers,
        ),
        Player::Black => stack(
            scale,
            orientation,
            BAR_X,
            MID_LINE - 2.0 - half_step,
            -CHECKER_STEP,
            checkers,
        ),
    }
}

/// Slabs for borne-off checkers, from the board edge inward.
pub fn tray_slabs(orientation: Orientation, player: Player, checkers: u32) -> Vec<GridRect> {
    let holder = match player {
        Player::White => HOLDERS[3],
        Player::Black => HOLDERS[2],
    };
    let slab_h = holder.h / f64::from(TRAY_SLOTS);
    (0..checkers.min(TRAY_SLOTS))
        .map(|k| {
            let offset = slab_h * f64::from(k);
            let y = match player {
                Player::White => holder.y + holder.h - offset - slab_h,
                Player::Black => holder.y + offset,
            };
            let slab = GridRect::new(
                holder.x,
                y + TRAY_SLAB_GAP / 2.0,
                holder.w,
                slab_h - TRAY_SLAB_GAP,
            );
            orientation.rect(slab)
        })
        .collect()
}

/// Square (in pixels) cube in the left holder column.
pub fn cube_rect(orientation: Orientation, cube: &Cube) -> GridRect {
    let side_x = POINT_WIDTH;
    let side_y = CHECKER_STEP;
    let y = match cube.owner {
        None => MID_LINE - side_y / 2.0,
        Some(Player::Black) => HOLDERS[0].y,
        Some(Player::White) => HOLDERS[1].y + HOLDERS[1].h - side_y,
    };
    orientation.rect(GridRect::new(HOLDERS[0].x, y, side_x, side_y))
}

/// The two dice of `player`: right half for White, left half for Black.
pub fn dice_rects(orientation: Orientation, player: Player) -> [GridRect; 2] {
    let half = match player {
        Player::White => BOARD_HALVES[1],
        Player::Black => BOARD_HALVES[0],
    };
    let side_x = POINT_WIDTH;
    let side_y = CHECKER_STEP;
    let gap = 1.0;
    let cx = half.center().x;
    let y = MID_LINE - side_y / 2.0;
    [
        orientation.rect(GridRect::new(cx - gap / 2.0 - side_x, y, side_x, side_y)),
        orientation.rect(GridRect::new(cx + gap / 2.0, y, side_x, side_y)),
    ]
}

/// Pip centres as fractions of the die face.
pub fn pips(value: u8) -> &'static [(f64, f64)] {
    const L: f64 = 0.25;
    const M: f64 = 0.5;
    const H: f64 = 0.75;
    match value {
        1 => &[(M, M)],
        2 => &[(L, L), (H, H)],
        3 => &[(L, L), (M, M), (H, H)],
        4 => &[(L, L), (H, L), (L, H), (H, H)],
        5 => &[(L, L), (H, L), (M, M), (L, H), (H, H)],
        6 => &[(L, L), (H, L), (L, M), (H, M), (L, H), (H, H)],
        _ => &[],
    }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
