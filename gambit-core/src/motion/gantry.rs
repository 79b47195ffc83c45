//! CoreXY gantry drive
//!
//! Converts a board-plane target into the two coupled actuator targets and
//! drives both to completion. Motion is modeled as an explicit Idle/Driving
//! state machine advanced by [`Gantry::tick`]; no inline spin loops.

use embedded_hal::delay::DelayNs;

use super::geometry::PointMm;
use crate::traits::StepDriver;

/// Steps per complete motor rotation (28BYJ-48 with gearbox)
pub const STEPS_PER_REV: i32 = 2038;

/// Belt travel per motor rotation in mm
pub const MM_PER_REV: i32 = 32;

/// Poll interval used by the blocking drive helper, in microseconds
const TICK_INTERVAL_US: u32 = 500;

/// Gantry drive state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// No move in progress
    Idle,
    /// Both actuators stepping toward their targets
    Driving,
}

/// Errors from the gantry drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// A move is already in progress; this controller does not retarget
    Busy,
}

/// CoreXY actuator targets for a board-plane position
///
/// Neither motor maps to an axis: both must move for any single-axis
/// displacement. Integer division loses sub-step fractions for non-integer
/// combinations, but the origin always maps to step 0 on both motors, so a
/// return to (0, 0) restores the exact physical origin.
pub const fn axis_targets(target: PointMm) -> (i32, i32) {
    let a = (target.x + target.y) * STEPS_PER_REV / MM_PER_REV;
    let b = (target.x - target.y) * STEPS_PER_REV / MM_PER_REV;
    (a, b)
}

/// The two-motor CoreXY gantry
///
/// Owns both step drivers. Position responsibility only; the gripper is
/// switched by the move sequencer, not here.
pub struct Gantry<A, B> {
    motor_a: A,
    motor_b: B,
    state: MotionState,
    /// Monotonic clock base for the blocking helper
    clock_us: u64,
}

impl<A: StepDriver, B: StepDriver> Gantry<A, B> {
    /// Create a gantry and declare the current pose as the origin
    pub fn new(mut motor_a: A, mut motor_b: B) -> Self {
        motor_a.set_current_position(0);
        motor_b.set_current_position(0);
        Self {
            motor_a,
            motor_b,
            state: MotionState::Idle,
            clock_us: 0,
        }
    }

    /// Current drive state
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Begin a move to a board-plane target
    ///
    /// Fails with [`MotionError::Busy`] while a previous move is still
    /// driving; this controller is drive-to-completion, not streaming.
    pub fn start_move(&mut self, target: PointMm) -> Result<(), MotionError> {
        if self.state == MotionState::Driving {
            return Err(MotionError::Busy);
        }
        let (a, b) = axis_targets(target);
        self.motor_a.move_to(a);
        self.motor_b.move_to(b);
        self.state = MotionState::Driving;
        Ok(())
    }

    /// Drive both axes back to the stored zero target
    ///
    /// Does not consult the Driving guard: an in-flight move is overridden,
    /// so this is always safely invocable.
    pub fn return_to_origin(&mut self) {
        self.motor_a.move_to(0);
        self.motor_b.move_to(0);
        self.state = MotionState::Driving;
    }

    /// Advance the drive by one scheduler tick
    ///
    /// Runs both motors once and transitions to Idle when neither has any
    /// distance left to go.
    pub fn tick(&mut self, now_us: u64) -> MotionState {
        self.clock_us = now_us;
        if self.state == MotionState::Driving {
            self.motor_a.run(now_us);
            self.motor_b.run(now_us);
            if self.motor_a.distance_to_go() == 0 && self.motor_b.distance_to_go() == 0 {
                self.motor_a.stop();
                self.motor_b.stop();
                self.state = MotionState::Idle;
            }
        }
        self.state
    }

    /// Drive the current move to completion, blocking between ticks
    pub fn run_to_completion<D: DelayNs>(&mut self, delay: &mut D) {
        while self.state == MotionState::Driving {
            delay.delay_us(TICK_INTERVAL_US);
            let now = self.clock_us + TICK_INTERVAL_US as u64;
            self.tick(now);
        }
    }

    /// Blocking move: start and drive to completion
    pub fn move_to<D: DelayNs>(
        &mut self,
        target: PointMm,
        delay: &mut D,
    ) -> Result<(), MotionError> {
        self.start_move(target)?;
        self.run_to_completion(delay);
        Ok(())
    }

    /// Current actuator positions in steps (a, b)
    pub fn positions(&self) -> (i32, i32) {
        (self.motor_a.position(), self.motor_b.position())
    }
}
