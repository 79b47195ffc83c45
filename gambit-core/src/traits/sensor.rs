//! Presence sensor matrix trait
//!
//! The 96 hall sensors under the board are read through multiplexers:
//! 16 selectable addresses, each exposing 6 parallel sense lines.

/// Number of selectable multiplexer addresses
pub const MUX_ADDRESSES: usize = 16;

/// Number of parallel sense lines per address
pub const SENSE_LINES: usize = 6;

/// Trait for the multiplexed presence sensor matrix
pub trait SensorMatrix {
    /// Drive the select pins to the 4-bit encoding of `address`
    ///
    /// Callers observe the hardware settle delay before sampling.
    fn select(&mut self, address: u8);

    /// Sample all sense lines for the currently selected address
    ///
    /// `true` means a piece is present over the corresponding sensor.
    fn sample(&mut self) -> [bool; SENSE_LINES];
}
