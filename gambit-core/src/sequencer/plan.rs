//! Waypoint path planning
//!
//! Computes the full physical action sequence for one move before anything
//! touches the hardware, so error conditions (a full graveyard) surface
//! with the board untouched and the gripper disengaged.

use heapless::Vec;

use super::{MoveCommand, SequenceError};
use crate::board::{BoardState, Square};
use crate::motion::{square_position, PointMm, EDGE_OFFSET_MM};

/// Upper bound on actions per move: a capture relocation (8) plus a knight
/// move (7)
pub const MAX_ACTIONS: usize = 16;

/// One step of a physical move sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Drive the gantry to a board-plane waypoint
    Goto(PointMm),
    /// Engage (true) or release (false) the gripper
    Grip(bool),
    /// Transcribe the move in the board model
    Commit { from: Square, to: Square },
}

/// A planned action sequence
pub type Plan = Vec<Action, MAX_ACTIONS>;

/// Edge-lane x offset for a graveyard column: biased toward the outer
/// board edge so the carried piece stays clear of the travel lanes.
fn grave_lane_bias(col: u8) -> i32 {
    if col < 2 {
        -EDGE_OFFSET_MM
    } else {
        EDGE_OFFSET_MM
    }
}

/// Plan the full action sequence for one move
///
/// The returned plan relocates any captured piece to the first free
/// graveyard slot (row-major over rows 0-7, columns 0, 1, 10, 11), then
/// picks up the moving piece and carries it to the destination. Knights
/// take one of four L-shaped routes so the gripper never crosses the
/// direct diagonal, which may be occupied.
pub fn plan(board: &BoardState, mv: MoveCommand) -> Result<Plan, SequenceError> {
    let from = Square::from_playing(mv.from_row, mv.from_col);
    let to = Square::from_playing(mv.to_row, mv.to_col);
    let src = square_position(from);
    let dst = square_position(to);

    let mut actions = Plan::new();

    if !board.cell(to).is_empty() {
        // Occupied destination: stow the occupant first. Slot selection is
        // part of planning so a full graveyard aborts before any motion.
        let grave = board.first_free_grave().ok_or(SequenceError::GraveyardFull)?;
        let slot = square_position(grave);
        let lane_x = slot.x + grave_lane_bias(grave.col);

        push(&mut actions, Action::Goto(dst));
        push(&mut actions, Action::Grip(true));
        // Lift into the lane between rows before travelling
        push(&mut actions, Action::Goto(dst.offset_y(EDGE_OFFSET_MM)));
        push(
            &mut actions,
            Action::Goto(PointMm::new(lane_x, dst.y + EDGE_OFFSET_MM)),
        );
        push(&mut actions, Action::Goto(PointMm::new(lane_x, slot.y)));
        push(&mut actions, Action::Goto(slot));
        push(&mut actions, Action::Grip(false));
        push(&mut actions, Action::Commit { from: to, to: grave });
    }

    // Pick up the moving piece
    push(&mut actions, Action::Goto(src));
    push(&mut actions, Action::Grip(true));

    if board.cell(from).is_knight() {
        plan_knight_route(&mut actions, mv, src, dst);
    } else {
        push(&mut actions, Action::Goto(dst));
    }

    push(&mut actions, Action::Grip(false));
    push(&mut actions, Action::Commit { from, to });

    Ok(actions)
}

/// One of four L-shaped knight routes, selected solely by the sign of the
/// row/column delta
///
/// The route jogs half a square toward the destination along the short
/// axis, traverses the long axis in that lane, then descends onto the
/// destination square.
fn plan_knight_route(actions: &mut Plan, mv: MoveCommand, src: PointMm, dst: PointMm) {
    let row_delta = mv.from_row as i32 - mv.to_row as i32;
    let col_delta = mv.from_col as i32 - mv.to_col as i32;

    if row_delta == -1 {
        // One row down the board: lane sits between the two rows (y shrinks
        // with increasing row index)
        let lane_y = src.y - EDGE_OFFSET_MM;
        push(actions, Action::Goto(PointMm::new(src.x, lane_y)));
        push(actions, Action::Goto(PointMm::new(dst.x, lane_y)));
    } else if row_delta == 1 {
        let lane_y = src.y + EDGE_OFFSET_MM;
        push(actions, Action::Goto(PointMm::new(src.x, lane_y)));
        push(actions, Action::Goto(PointMm::new(dst.x, lane_y)));
    } else if col_delta == 1 {
        let lane_x = src.x - EDGE_OFFSET_MM;
        push(actions, Action::Goto(PointMm::new(lane_x, src.y)));
        push(actions, Action::Goto(PointMm::new(lane_x, dst.y)));
    } else {
        // col_delta == -1
        let lane_x = src.x + EDGE_OFFSET_MM;
        push(actions, Action::Goto(PointMm::new(lane_x, src.y)));
        push(actions, Action::Goto(PointMm::new(lane_x, dst.y)));
    }
    push(actions, Action::Goto(dst));
}

/// Infallible push: MAX_ACTIONS bounds the longest possible plan
fn push(actions: &mut Plan, action: Action) {
    let _ = actions.push(action);
}
