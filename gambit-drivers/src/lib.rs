//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in gambit-core for the board's hardware:
//!
//! - 4-wire unipolar stepper drive (28BYJ-48 class gear motors)
//! - Electromagnet gripper switched through a transistor
//! - Multiplexed hall-sensor matrix (16 addresses x 6 sense lines)

#![no_std]
#![deny(unsafe_code)]

pub mod gripper;
pub mod pin;
pub mod sensor;
pub mod stepper;

pub use gripper::ElectromagnetGripper;
pub use pin::{InputPin, OutputPin};
pub use sensor::MuxMatrix;
pub use stepper::FourWireStepper;
