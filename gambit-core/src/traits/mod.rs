//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod gripper;
pub mod sensor;
pub mod stepper;

pub use gripper::Gripper;
pub use sensor::{SensorMatrix, MUX_ADDRESSES, SENSE_LINES};
pub use stepper::StepDriver;
