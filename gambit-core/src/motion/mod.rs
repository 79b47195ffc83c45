//! Gantry motion
//!
//! Board-plane geometry and the CoreXY kinematic drive.

pub mod gantry;
pub mod geometry;

pub use gantry::{axis_targets, Gantry, MotionError, MotionState};
pub use geometry::{square_position, PointMm, EDGE_OFFSET_MM, SQUARE_PITCH_MM};
