//! Human intervention reconciliation
//!
//! Consumes confirmed presence transitions from the scanner, infers
//! lift/drop events, keeps the board model in sync with physical reality,
//! and decides which completed moves are forwarded upstream.

use crate::board::{BoardState, Square, Turn};
use crate::scanner::Transition;

/// Reconciler states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// No piece in the air
    Idle,
    /// A confirmed lift is awaiting its matching drop
    PieceLifted { origin: Square },
}

/// Unmodeled sensor inputs
///
/// Diagnostics only: the reconciler keeps its current state and the board
/// untouched when these occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReconcileError {
    /// A second lift arrived before the pending one was dropped.
    /// The first origin is retained; the model tracks a single hand.
    DoubleLift { pending: Square, second: Square },
    /// A drop arrived with no lift pending
    SpuriousDrop { square: Square },
}

/// A completed human move to report upstream, in raw grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveNotice {
    pub from: Square,
    pub to: Square,
}

/// The lift/drop state machine
#[derive(Debug, Clone)]
pub struct Reconciler {
    state: State,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Forget any pending lift (board reset)
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    /// Whether a lift is currently pending
    pub fn lift_pending(&self) -> bool {
        matches!(self.state, State::PieceLifted { .. })
    }

    /// Process one confirmed presence transition
    ///
    /// A lift records the origin; the matching drop commits the move to
    /// the board. The move is reported upstream only when the relocated
    /// piece belongs to the human side and the human's move was being
    /// awaited; anything else (the system's own secondary relocations,
    /// out-of-turn fiddling) is committed silently.
    pub fn on_transition(
        &mut self,
        board: &mut BoardState,
        transition: Transition,
    ) -> Result<Option<MoveNotice>, ReconcileError> {
        match (self.state, transition.present) {
            (State::Idle, false) => {
                self.state = State::PieceLifted {
                    origin: transition.square,
                };
                board.set_lifted(Some(transition.square));
                Ok(None)
            }
            (State::Idle, true) => Err(ReconcileError::SpuriousDrop {
                square: transition.square,
            }),
            (State::PieceLifted { origin }, true) => {
                board.move_piece(origin, transition.square);
                board.set_lifted(None);
                self.state = State::Idle;

                let piece = board.cell(transition.square);
                let human_move = board.turn() == Turn::Human
                    && piece.side() == Some(board.human_side());
                if human_move {
                    board.set_turn(Turn::Remote);
                    Ok(Some(MoveNotice {
                        from: origin,
                        to: transition.square,
                    }))
                } else {
                    Ok(None)
                }
            }
            (State::PieceLifted { origin }, false) => Err(ReconcileError::DoubleLift {
                pending: origin,
                second: transition.square,
            }),
        }
    }
}
