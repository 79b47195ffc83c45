//! Electromagnet gripper
//!
//! The magnet hangs under the gantry head and is switched through a
//! transistor on a single GPIO.

use gambit_core::traits::Gripper;

use crate::pin::OutputPin;

/// Transistor-switched electromagnet
pub struct ElectromagnetGripper<P> {
    pin: P,
    engaged: bool,
}

impl<P: OutputPin> ElectromagnetGripper<P> {
    /// Create a gripper; starts released
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self {
            pin,
            engaged: false,
        }
    }
}

impl<P: OutputPin> Gripper for ElectromagnetGripper<P> {
    fn set_engaged(&mut self, engaged: bool) {
        self.engaged = engaged;
        if engaged {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_engaged(&self) -> bool {
        self.engaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    #[test]
    fn test_engage_release() {
        let mut gripper = ElectromagnetGripper::new(MockPin { high: true });
        // Construction forces the magnet off
        assert!(!gripper.is_engaged());
        assert!(!gripper.pin.high);

        gripper.set_engaged(true);
        assert!(gripper.is_engaged());
        assert!(gripper.pin.high);

        gripper.set_engaged(false);
        assert!(!gripper.is_engaged());
        assert!(!gripper.pin.high);
    }
}
