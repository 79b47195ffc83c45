//! Stepper motor driver trait
//!
//! Abstracts over position-controlled stepper implementations
//! (4-wire unipolar GPIO drive, step/dir drivers, mocks for testing).

/// Trait for position-controlled stepper drivers
///
/// Positions are absolute step counts relative to the power-on zero.
/// Implementations own their own step pacing; callers advance them by
/// polling [`StepDriver::run`] with a monotonic timestamp.
pub trait StepDriver {
    /// Set the absolute target position in steps
    ///
    /// The driver steps toward the target on subsequent `run` calls.
    /// Retargeting while moving is allowed at this level; the gantry
    /// layer above enforces its own re-entrancy guard.
    fn move_to(&mut self, target: i32);

    /// Advance the driver by one poll
    ///
    /// Emits at most one step if the driver's step interval has elapsed
    /// since the previous step. Returns `true` if a step was emitted.
    fn run(&mut self, now_us: u64) -> bool;

    /// Steps remaining to the target (signed)
    fn distance_to_go(&self) -> i32;

    /// Current absolute position in steps
    fn position(&self) -> i32;

    /// Overwrite the current position without moving
    ///
    /// Used once at bring-up to declare the power-on pose as step zero.
    fn set_current_position(&mut self, position: i32);

    /// De-energize the coils and clear any pending target
    fn stop(&mut self);
}
