//! Multiplexer wiring map
//!
//! The 96 sensors are wired as 16 multiplexer addresses by 6 parallel
//! sense lines. The address-to-cell mapping below reproduces the physical
//! harness exactly; address bit 3 selects the left or right half of the
//! grid, and rows run opposite to the address within each half.

use crate::board::Square;

/// Board cell sampled by (address, line)
///
/// Address `i` reads row `(i/8 + 1)*7 + i/8 - i`; sense line `j` reads
/// column `2j + 1 - i/8` (odd columns for the low address bank, even for
/// the high bank).
pub const fn cell_for(address: u8, line: u8) -> Square {
    let half = address / 8;
    let row = (half + 1) * 7 + half - address;
    let col = 2 * line + 1 - half;
    Square::new(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COLS, ROWS};
    use crate::traits::{MUX_ADDRESSES, SENSE_LINES};

    #[test]
    fn test_low_bank_reads_odd_columns() {
        assert_eq!(cell_for(0, 0), Square::new(7, 1));
        assert_eq!(cell_for(0, 5), Square::new(7, 11));
        assert_eq!(cell_for(7, 0), Square::new(0, 1));
    }

    #[test]
    fn test_high_bank_reads_even_columns() {
        assert_eq!(cell_for(8, 0), Square::new(7, 0));
        assert_eq!(cell_for(8, 5), Square::new(7, 10));
        assert_eq!(cell_for(15, 3), Square::new(0, 6));
    }

    #[test]
    fn test_mapping_covers_every_cell_once() {
        let mut seen = [[false; COLS]; ROWS];
        for address in 0..MUX_ADDRESSES as u8 {
            for line in 0..SENSE_LINES as u8 {
                let sq = cell_for(address, line);
                assert!(
                    !seen[sq.row as usize][sq.col as usize],
                    "cell ({}, {}) wired twice",
                    sq.row,
                    sq.col
                );
                seen[sq.row as usize][sq.col as usize] = true;
            }
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }
}
