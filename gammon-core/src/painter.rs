//! Board painter: one full, destructive repaint per call.
//!
//! Paint order, bottom first: frame (border, holders, playing halves), the
//! 24 point triangles, checker stacks, bar, borne-off trays, cube, dice.
//! Inputs are validated before the surface is touched, so a rejected board
//! leaves the previous frame in place.

use crate::error::Result;
use crate::geometry::{
    self, BOARD_HALVES, HOLDERS, Orientation, Px, Rect, Scale, Stack, Triangle,
};
use crate::model::{Board, POINT_COUNT, Player};
use crate::palette::Palette;
use crate::surface::Surface;

/// Outline width for triangles, checkers, cube and dice, in pixels.
const LINE_WIDTH: f64 = 1.0;
/// Label height relative to the checker radius.
const LABEL_SCALE: f64 = 1.1;
/// Pip radius relative to the die width.
const PIP_SCALE: f64 = 0.09;

/// Paint `board` at `width` pixels with the default palette.
///
/// # Errors
///
/// Fails on a non-positive width, an invalid board, or a surface failure.
pub fn paint<S: Surface>(surface: &mut S, width: f64, board: &Board) -> Result<()> {
    paint_with(surface, width, board, &Palette::default())
}

/// Paint `board` at `width` pixels.
///
/// # Errors
///
/// Fails on a non-positive width, an invalid board, or a surface failure.
pub fn paint_with<S: Surface>(
    surface: &mut S,
    width: f64,
    board: &Board,
    palette: &Palette,
) -> Result<()> {
    let scale = Scale::new(width)?;
    board.validate()?;
    let orientation = Orientation::for_player(board.active_player);

    draw_frame(surface, scale, palette)?;
    draw_points(surface, scale, orientation, palette)?;
    let stacks = draw_checkers(surface, scale, orientation, board, palette)?;
    draw_bar(surface, scale, orientation, board, palette)?;
    draw_trays(surface, scale, orientation, board, palette)?;
    draw_cube(surface, scale, orientation, board, palette)?;
    if let Some(dice) = &board.dice {
        draw_dice(surface, scale, orientation, dice.player, dice.values, palette)?;
    }

    tracing::debug!(
        width = scale.width(),
        height = scale.height(),
        active = ?board.active_player,
        stacks,
        "board painted"
    );
    Ok(())
}

// =============================================================
// Frame and points
// =============================================================

fn draw_frame<S: Surface>(surface: &mut S, scale: Scale, palette: &Palette) -> Result<()> {
    surface.resize(scale.width(), scale.height())?;
    let whole = Rect {
        x: 0.0,
        y: 0.0,
        w: scale.width(),
        h: scale.height(),
    };
    surface.fill_rect(whole, &palette.board_border)?;
    for holder in HOLDERS {
        surface.fill_rect(scale.rect(holder), &palette.board_inner)?;
    }
    for half in BOARD_HALVES {
        surface.fill_rect(scale.rect(half), &palette.board_inner)?;
    }
    Ok(())
}

fn draw_points<S: Surface>(
    surface: &mut S,
    scale: Scale,
    orientation: Orientation,
    palette: &Palette,
) -> Result<()> {
    for index in 0..POINT_COUNT {
        let at = orientation.slot_for(index);
        let tri = geometry::slot_triangle(scale, &geometry::try_slot(at)?);
        let fill = palette.triangle(geometry::point_shade(at));
        draw_triangle(surface, &tri, fill, &palette.triangle_border)?;
    }
    Ok(())
}

fn draw_triangle<S: Surface>(
    surface: &mut S,
    tri: &Triangle,
    fill: &str,
    border: &str,
) -> Result<()> {
    draw_polygon(surface, &tri.vertices(), fill, border)
}

fn draw_polygon<S: Surface>(surface: &mut S, pts: &[Px], fill: &str, border: &str) -> Result<()> {
    let Some((first, rest)) = pts.split_first() else {
        return Ok(());
    };
    surface.begin_path();
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.close_path();
    surface.fill(fill)?;
    surface.stroke(border, LINE_WIDTH)?;
    Ok(())
}

fn rect_corners(r: Rect) -> [Px; 4] {
    [
        Px::new(r.x, r.y),
        Px::new(r.x + r.w, r.y),
        Px::new(r.x + r.w, r.y + r.h),
        Px::new(r.x, r.y + r.h),
    ]
}

// =============================================================
// Checkers
// =============================================================

/// Returns the number of stacks drawn.
fn draw_checkers<S: Surface>(
    surface: &mut S,
    scale: Scale,
    orientation: Orientation,
    board: &Board,
    palette: &Palette,
) -> Result<usize> {
    let mut drawn = 0;
    for (index, point) in board.points.iter().enumerate() {
        let Some(player) = point.owner.player() else {
            continue;
        };
        let s = geometry::try_slot(orientation.slot_for(index))?;
        let stack = geometry::checker_stack(scale, &s, point.checkers);
        if stack.is_empty() {
            continue;
        }
        draw_stack(surface, &stack, player, palette)?;
        drawn += 1;
    }
    Ok(drawn)
}

fn draw_bar<S: Surface>(
    surface: &mut S,
    scale: Scale,
    orientation: Orientation,
    board: &Board,
    palette: &Palette,
) -> Result<()> {
    for player in [Player::White, Player::Black] {
        let stack = geometry::bar_stack(scale, orientation, player, board.bar.get(player));
        draw_stack(surface, &stack, player, palette)?;
    }
    Ok(())
}

fn draw_stack<S: Surface>(
    surface: &mut S,
    stack: &Stack,
    player: Player,
    palette: &Palette,
) -> Result<()> {
    for center in &stack.centers {
        surface.begin_path();
        surface.arc(*center, stack.radius)?;
        surface.fill(palette.checker(player))?;
        surface.stroke(&palette.checker_border, LINE_WIDTH)?;
    }
    if let (Some(total), Some(at)) = (stack.overflow, stack.innermost()) {
        surface.fill_text(
            &total.to_string(),
            at,
            stack.radius * LABEL_SCALE,
            palette.checker_label(player),
        )?;
    }
    Ok(())
}

fn draw_trays<S: Surface>(
    surface: &mut S,
    scale: Scale,
    orientation: Orientation,
    board: &Board,
    palette: &Palette,
) -> Result<()> {
    for player in [Player::White, Player::Black] {
        for slab in geometry::tray_slabs(orientation, player, board.off.get(player)) {
            surface.fill_rect(scale.rect(slab), palette.checker(player))?;
        }
    }
    Ok(())
}

// =============================================================
// Cube and dice
// =============================================================

fn draw_cube<S: Surface>(
    surface: &mut S,
    scale: Scale,
    orientation: Orientation,
    board: &Board,
    palette: &Palette,
) -> Result<()> {
    let area = geometry::cube_rect(orientation, &board.cube);
    let rect = scale.rect(area);
    draw_polygon(surface, &rect_corners(rect), &palette.cube_body, &palette.triangle_border)?;
    // A cube nobody has turned shows its top face.
    let face = if board.cube.value == 1 { 64 } else { board.cube.value };
    surface.fill_text(
        &face.to_string(),
        scale.px(area.center()),
        rect.h * 0.5,
        &palette.cube_number,
    )?;
    Ok(())
}

fn draw_dice<S: Surface>(
    surface: &mut S,
    scale: Scale,
    orientation: Orientation,
    player: Player,
    values: [u8; 2],
    palette: &Palette,
) -> Result<()> {
    let rects = geometry::dice_rects(orientation, player);
    for (area, value) in rects.into_iter().zip(values) {
        let rect = scale.rect(area);
        draw_polygon(
            surface,
            &rect_corners(rect),
            palette.dice_body(player),
            &palette.triangle_border,
        )?;
        let radius = rect.w * PIP_SCALE;
        for (fx, fy) in geometry::pips(value) {
            surface.begin_path();
            surface.arc(Px::new(rect.x + rect.w * fx, rect.y + rect.h * fy), radius)?;
            surface.fill(palette.dice_dot(player))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "painter_test.rs"]
mod tests;
