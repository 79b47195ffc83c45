//! 4-wire unipolar stepper drive
//!
//! Direct GPIO drive for 28BYJ-48 class geared steppers (ULN2003 style
//! darlington board). Full-step sequence, two coils energized per phase,
//! constant step rate paced against the caller-supplied clock.

use gambit_core::traits::StepDriver;

use crate::pin::OutputPin;

/// Full-step coil sequence for pin order IN1, IN3, IN2, IN4
const STEP_SEQUENCE: [[bool; 4]; 4] = [
    [true, true, false, false],
    [false, true, true, false],
    [false, false, true, true],
    [true, false, false, true],
];

/// Default step interval: 625 steps/s, the motor's reliable ceiling
pub const DEFAULT_STEP_INTERVAL_US: u32 = 1600;

/// A position-tracked 4-wire stepper
pub struct FourWireStepper<P> {
    coils: [P; 4],
    step_interval_us: u32,
    position: i32,
    target: i32,
    phase: u8,
    last_step_us: u64,
}

impl<P: OutputPin> FourWireStepper<P> {
    /// Create a stepper over four coil pins at the default step rate
    ///
    /// Pins must be given in IN1, IN3, IN2, IN4 order for a proper step
    /// sequence. Coils start de-energized.
    pub fn new(coils: [P; 4]) -> Self {
        Self::with_step_interval(coils, DEFAULT_STEP_INTERVAL_US)
    }

    /// Create a stepper with a custom step interval
    pub fn with_step_interval(mut coils: [P; 4], step_interval_us: u32) -> Self {
        for coil in coils.iter_mut() {
            coil.set_low();
        }
        Self {
            coils,
            step_interval_us,
            position: 0,
            target: 0,
            phase: 0,
            last_step_us: 0,
        }
    }

    fn energize_phase(&mut self) {
        let pattern = STEP_SEQUENCE[self.phase as usize];
        for (coil, &on) in self.coils.iter_mut().zip(pattern.iter()) {
            if on {
                coil.set_high();
            } else {
                coil.set_low();
            }
        }
    }

    fn release_coils(&mut self) {
        for coil in self.coils.iter_mut() {
            coil.set_low();
        }
    }
}

impl<P: OutputPin> StepDriver for FourWireStepper<P> {
    fn move_to(&mut self, target: i32) {
        self.target = target;
    }

    fn run(&mut self, now_us: u64) -> bool {
        if self.position == self.target {
            return false;
        }
        if now_us.saturating_sub(self.last_step_us) < self.step_interval_us as u64 {
            return false;
        }
        self.last_step_us = now_us;
        if self.position < self.target {
            self.position += 1;
            self.phase = (self.phase + 1) % 4;
        } else {
            self.position -= 1;
            self.phase = (self.phase + 3) % 4;
        }
        self.energize_phase();
        true
    }

    fn distance_to_go(&self) -> i32 {
        self.target - self.position
    }

    fn position(&self) -> i32 {
        self.position
    }

    fn set_current_position(&mut self, position: i32) {
        self.position = position;
        self.target = position;
    }

    fn stop(&mut self) {
        self.target = self.position;
        self.release_coils();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    #[derive(Clone, Copy)]
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    fn stepper() -> FourWireStepper<MockPin> {
        FourWireStepper::new([MockPin::new(); 4])
    }

    fn coil_state(s: &FourWireStepper<MockPin>) -> [bool; 4] {
        [
            s.coils[0].high,
            s.coils[1].high,
            s.coils[2].high,
            s.coils[3].high,
        ]
    }

    #[test]
    fn test_starts_idle_and_released() {
        let s = stepper();
        assert_eq!(s.distance_to_go(), 0);
        assert_eq!(coil_state(&s), [false; 4]);
    }

    #[test]
    fn test_run_paces_steps_by_interval() {
        let mut s = stepper();
        s.move_to(3);
        assert!(s.run(2000));
        assert_eq!(s.position(), 1);
        // Too soon: no step
        assert!(!s.run(2000 + 100));
        assert_eq!(s.position(), 1);
        assert!(s.run(2000 + DEFAULT_STEP_INTERVAL_US as u64));
        assert_eq!(s.position(), 2);
    }

    #[test]
    fn test_steps_walk_the_full_sequence() {
        let mut s = stepper();
        s.move_to(4);
        let mut now = 0u64;
        let mut seen = [[false; 4]; 4];
        for i in 0..4 {
            now += DEFAULT_STEP_INTERVAL_US as u64;
            assert!(s.run(now));
            seen[i] = coil_state(&s);
            // Exactly two coils energized per full-step phase
            assert_eq!(seen[i].iter().filter(|&&c| c).count(), 2);
        }
        // All four phases distinct
        for i in 0..4 {
            for j in i + 1..4 {
                assert_ne!(seen[i], seen[j]);
            }
        }
    }

    #[test]
    fn test_reverse_steps_toward_negative_target() {
        let mut s = stepper();
        s.move_to(-2);
        let mut now = 0u64;
        while s.distance_to_go() != 0 {
            now += DEFAULT_STEP_INTERVAL_US as u64;
            s.run(now);
        }
        assert_eq!(s.position(), -2);
    }

    #[test]
    fn test_stop_releases_coils_and_clears_target() {
        let mut s = stepper();
        s.move_to(10);
        s.run(DEFAULT_STEP_INTERVAL_US as u64);
        s.stop();
        assert_eq!(s.distance_to_go(), 0);
        assert_eq!(coil_state(&s), [false; 4]);
    }

    #[test]
    fn test_set_current_position_rebases() {
        let mut s = stepper();
        s.move_to(5);
        s.set_current_position(0);
        assert_eq!(s.distance_to_go(), 0);
        assert!(!s.run(1_000_000));
    }
}
