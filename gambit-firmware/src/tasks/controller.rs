//! Controller task
//!
//! Owns all board, motion, and reconciliation state. Runs one command to
//! completion, then one sensor scan cycle, in strict alternation - a move
//! sequence (including any capture relocation) is never interleaved with
//! sensor events, so the board model can't pick up partial updates.

use defmt::*;
use embassy_time::{Delay, Timer};
use heapless::Vec;

use gambit_core::board::BoardState;
use gambit_core::motion::PointMm;
use gambit_core::reconciler::Reconciler;
use gambit_core::scanner::{scan_cycle, Transition};
use gambit_core::sequencer::{run_move, SequenceError};
use gambit_protocol::{Command, MoveNotification};

use crate::channels::{COMMAND_CHANNEL, NOTIFY_CHANNEL};
use crate::hw::{BoardGantry, BoardGripper, BoardMatrix};

/// Pause between scan cycles
const SCAN_PERIOD_MS: u64 = 50;

/// Most transitions one cycle can plausibly confirm
const MAX_TRANSITIONS: usize = 16;

/// Controller task - executes commands and reconciles sensor events
#[embassy_executor::task]
pub async fn controller_task(
    mut gantry: BoardGantry,
    mut gripper: BoardGripper,
    mut matrix: BoardMatrix,
) {
    info!("Controller task started");

    let mut board = BoardState::new();
    let mut reconciler = Reconciler::new();
    let mut delay = Delay;

    loop {
        if let Ok(command) = COMMAND_CHANNEL.try_receive() {
            handle_command(
                command,
                &mut board,
                &mut reconciler,
                &mut gantry,
                &mut gripper,
                &mut delay,
            );
        }

        let mut transitions: Vec<Transition, MAX_TRANSITIONS> = Vec::new();
        scan_cycle(&mut board, &mut matrix, &mut delay, |t| {
            // Presence is already committed; a dropped event desyncs the
            // reconciler until the next transition on that square
            if transitions.push(t).is_err() {
                warn!(
                    "Transition queue full, dropping event at ({}, {})",
                    t.square.row, t.square.col
                );
            }
        });

        for transition in transitions {
            match reconciler.on_transition(&mut board, transition) {
                Ok(Some(notice)) => {
                    info!(
                        "Human move detected: ({}, {}) -> ({}, {})",
                        notice.from.row, notice.from.col, notice.to.row, notice.to.col
                    );
                    NOTIFY_CHANNEL
                        .send(MoveNotification {
                            from_row: notice.from.row,
                            from_col: notice.from.col,
                            to_row: notice.to.row,
                            to_col: notice.to.col,
                        })
                        .await;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Unmodeled sensor input: {:?}", e);
                }
            }
        }

        Timer::after_millis(SCAN_PERIOD_MS).await;
    }
}

/// Execute one command to completion
///
/// Blocking by design: the physical sequence must finish before anything
/// else touches the board model.
fn handle_command(
    command: Command,
    board: &mut BoardState,
    reconciler: &mut Reconciler,
    gantry: &mut BoardGantry,
    gripper: &mut BoardGripper,
    delay: &mut Delay,
) {
    match command {
        Command::Calibrate { x, y } => {
            info!("Calibrate: moving to ({} mm, {} mm)", x, y);
            if gantry.move_to(PointMm::new(x, y), delay).is_err() {
                warn!("Calibrate rejected: gantry busy");
            }
        }
        Command::ReturnToStart => {
            info!("Returning to origin and resetting board");
            gantry.return_to_origin();
            gantry.run_to_completion(delay);
            board.reset();
            reconciler.reset();
        }
        Command::Move(mv) => {
            info!(
                "App move: ({}, {}) -> ({}, {})",
                mv.from_row, mv.from_col, mv.to_row, mv.to_col
            );
            match run_move(board, gantry, gripper, delay, mv) {
                Ok(()) => {
                    info!("Move complete\n{=str}", board.render().as_str());
                }
                Err(SequenceError::GraveyardFull) => {
                    error!("Graveyard full: capture aborted, manual intervention required");
                }
                Err(SequenceError::Motion(_)) => {
                    error!("Gantry rejected move; sequence aborted");
                }
            }
        }
    }
}
