//! Move sequencing
//!
//! Turns a logical 4-coordinate move into the physical waypoint path the
//! gantry must drive (capture relocation to the graveyard, knight routing
//! around occupied squares), then commits the result to the board.
//!
//! Planning is pure and produces a bounded list of [`Action`]s; execution
//! drives the gantry and gripper through them.

pub mod executor;
pub mod plan;

pub use executor::{execute, run_move};
pub use plan::{plan, Action, Plan, MAX_ACTIONS};

// Move commands arrive pre-validated from the protocol layer
pub use gambit_protocol::MoveCommand;

use crate::motion::MotionError;

/// Errors from move sequencing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// A capture was requested but every graveyard slot is occupied.
    /// The piece cannot be physically stowed; the move is halted before
    /// any motion starts.
    GraveyardFull,
    /// The gantry rejected a waypoint
    Motion(MotionError),
}

impl From<MotionError> for SequenceError {
    fn from(e: MotionError) -> Self {
        SequenceError::Motion(e)
    }
}
