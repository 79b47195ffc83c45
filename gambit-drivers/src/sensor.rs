//! Multiplexed hall-sensor matrix
//!
//! Four shared select pins address one of 16 multiplexer channels; six
//! sense lines (one per multiplexer) are sampled in parallel. The
//! address-to-cell wiring map lives in `gambit_core::scanner::mux`.

use gambit_core::traits::{SensorMatrix, SENSE_LINES};

use crate::pin::{InputPin, OutputPin};

/// Number of select pins (4-bit address)
pub const SELECT_PINS: usize = 4;

/// The multiplexed sensor matrix
pub struct MuxMatrix<S, I> {
    select: [S; SELECT_PINS],
    lines: [I; SENSE_LINES],
}

impl<S: OutputPin, I: InputPin> MuxMatrix<S, I> {
    /// Create a matrix over the select pins (LSB first) and sense lines
    pub fn new(select: [S; SELECT_PINS], lines: [I; SENSE_LINES]) -> Self {
        Self { select, lines }
    }
}

impl<S: OutputPin, I: InputPin> SensorMatrix for MuxMatrix<S, I> {
    fn select(&mut self, address: u8) {
        for (bit, pin) in self.select.iter_mut().enumerate() {
            if address & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }

    fn sample(&mut self) -> [bool; SENSE_LINES] {
        let mut out = [false; SENSE_LINES];
        for (value, line) in out.iter_mut().zip(self.lines.iter()) {
            *value = line.is_high();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct MockOutput {
        high: bool,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    #[derive(Clone, Copy)]
    struct MockInput {
        high: bool,
    }

    impl InputPin for MockInput {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_select_drives_binary_encoding() {
        let mut matrix = MuxMatrix::new(
            [MockOutput { high: false }; SELECT_PINS],
            [MockInput { high: false }; SENSE_LINES],
        );
        matrix.select(0b1010);
        let bits: [bool; SELECT_PINS] = [
            matrix.select[0].high,
            matrix.select[1].high,
            matrix.select[2].high,
            matrix.select[3].high,
        ];
        assert_eq!(bits, [false, true, false, true]);
    }

    #[test]
    fn test_sample_reads_all_lines() {
        let mut lines = [MockInput { high: false }; SENSE_LINES];
        lines[2].high = true;
        lines[5].high = true;
        let mut matrix = MuxMatrix::new([MockOutput { high: false }; SELECT_PINS], lines);
        assert_eq!(
            matrix.sample(),
            [false, false, true, false, false, true]
        );
    }
}
