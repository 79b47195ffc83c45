//! Board-agnostic core logic for the Gambit robotic chessboard
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (stepper, gripper, sensor matrix)
//! - Board model (piece grid, presence grid, turn tracking)
//! - CoreXY kinematics and the gantry motion state machine
//! - Move sequencing (capture relocation, knight routing)
//! - Sensor matrix scanning with per-cell debounce
//! - Human intervention reconciliation

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod motion;
pub mod reconciler;
pub mod scanner;
pub mod sequencer;
pub mod traits;
