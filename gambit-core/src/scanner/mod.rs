//! Sensor matrix scanning
//!
//! Cyclically polls the multiplexed hall-sensor matrix, converts readings
//! into the presence grid, and debounces transitions so transient noise
//! never reaches the reconciler.

pub mod mux;

use embedded_hal::delay::DelayNs;

use crate::board::{BoardState, Square};
use crate::traits::{SensorMatrix, MUX_ADDRESSES, SENSE_LINES};

/// Hardware settle delay after driving the select pins, in microseconds
pub const SETTLE_DELAY_US: u32 = 100;

/// Interval between debounce resamples, in microseconds
pub const RESAMPLE_INTERVAL_US: u32 = 10_000;

/// Number of unanimous resamples required to commit a transition
pub const DEBOUNCE_SAMPLES: u8 = 5;

/// A confirmed presence transition for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub square: Square,
    /// New presence value (true = piece placed, false = piece lifted)
    pub present: bool,
}

/// Run one full scan cycle over all 16 multiplexer addresses
///
/// A raw reading that disagrees with the held presence value is resampled
/// [`DEBOUNCE_SAMPLES`] times at a fixed interval, inline, before the scan
/// moves on. Only a unanimous confirmation commits the new value to the
/// presence grid and reaches the sink; a single disagreeing resample
/// discards the transition as noise.
pub fn scan_cycle<M, D, F>(board: &mut BoardState, matrix: &mut M, delay: &mut D, mut sink: F)
where
    M: SensorMatrix,
    D: DelayNs,
    F: FnMut(Transition),
{
    for address in 0..MUX_ADDRESSES as u8 {
        matrix.select(address);
        delay.delay_us(SETTLE_DELAY_US);
        let samples = matrix.sample();

        for line in 0..SENSE_LINES as u8 {
            let square = mux::cell_for(address, line);
            let candidate = samples[line as usize];
            if candidate == board.presence(square) {
                continue;
            }
            if confirm(matrix, delay, line, candidate) {
                board.set_presence(square, candidate);
                sink(Transition {
                    square,
                    present: candidate,
                });
            }
        }
    }
}

/// Debounce one candidate transition; the address stays selected
fn confirm<M, D>(matrix: &mut M, delay: &mut D, line: u8, candidate: bool) -> bool
where
    M: SensorMatrix,
    D: DelayNs,
{
    for _ in 0..DEBOUNCE_SAMPLES {
        delay.delay_us(RESAMPLE_INTERVAL_US);
        if matrix.sample()[line as usize] != candidate {
            return false;
        }
    }
    true
}
