//! App Communication Protocol
//!
//! This crate defines the newline-delimited text protocol between the
//! board controller and the remote move source (companion app or engine).
//!
//! # Protocol Overview
//!
//! Commands, one per line:
//! ```text
//! c<x>,<y>   calibrate: drive the gripper to (x, y) in mm
//! s          return to origin and reset the board model
//! RCRC       move command: four digits 0-7, source rank/file then
//!            destination rank/file in playing-square coordinates
//! ```
//!
//! Upstream, a detected human move is reported as a single line of four
//! space-separated raw grid coordinates: `"fromRow fromCol toRow toCol"`.
//!
//! The transport itself (UART, Bluetooth bridge) is external; this crate
//! only accumulates bytes into lines and parses them.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod notify;

pub use command::{parse_line, Command, CommandError, MoveCommand};
pub use line::{LineError, LineReader, MAX_LINE_LEN};
pub use notify::MoveNotification;
