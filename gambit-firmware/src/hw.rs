//! GPIO adapters
//!
//! Newtype wrappers implementing the gambit-drivers pin traits over the
//! embassy-rp GPIO types, plus the concrete device type aliases the tasks
//! use.

use embassy_rp::gpio::{Input, Output};

use gambit_core::motion::Gantry;
use gambit_drivers::{ElectromagnetGripper, FourWireStepper, MuxMatrix};

/// Output pin adapter
pub struct OutPin(pub Output<'static>);

impl gambit_drivers::OutputPin for OutPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Input pin adapter
pub struct InPin(pub Input<'static>);

impl gambit_drivers::InputPin for InPin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

pub type BoardGantry = Gantry<FourWireStepper<OutPin>, FourWireStepper<OutPin>>;
pub type BoardGripper = ElectromagnetGripper<OutPin>;
pub type BoardMatrix = MuxMatrix<OutPin, InPin>;
