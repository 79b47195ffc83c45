//! Board-plane geometry
//!
//! Maps grid squares to millimeter positions on the gantry plane. The
//! machine origin sits past the high-rank edge, so y runs opposite to the
//! row index.

use crate::board::Square;

/// Center-to-center square pitch in mm
pub const SQUARE_PITCH_MM: i32 = 40;

/// X of grid column 0 in mm
pub const X_ORIGIN_MM: i32 = 8;

/// Y of grid row 0 in mm
pub const Y_ORIGIN_MM: i32 = 296;

/// Safety offset used for travel lanes between squares (half a square)
pub const EDGE_OFFSET_MM: i32 = 20;

/// A position on the board plane in mm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointMm {
    pub x: i32,
    pub y: i32,
}

impl PointMm {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The machine origin
    pub const ORIGIN: PointMm = PointMm { x: 0, y: 0 };

    /// This point shifted along x
    pub const fn offset_x(self, dx: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
        }
    }

    /// This point shifted along y
    pub const fn offset_y(self, dy: i32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }
}

/// Center of a grid square on the board plane
pub const fn square_position(sq: Square) -> PointMm {
    PointMm {
        x: X_ORIGIN_MM + SQUARE_PITCH_MM * sq.col as i32,
        y: Y_ORIGIN_MM - SQUARE_PITCH_MM * sq.row as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_square_positions() {
        // Playing file 0 is grid column 2
        let sq = Square::from_playing(0, 0);
        assert_eq!(square_position(sq), PointMm::new(88, 296));

        let sq = Square::from_playing(7, 7);
        assert_eq!(square_position(sq), PointMm::new(368, 16));
    }

    #[test]
    fn test_graveyard_positions() {
        assert_eq!(square_position(Square::new(0, 0)), PointMm::new(8, 296));
        assert_eq!(square_position(Square::new(7, 1)), PointMm::new(48, 16));
        assert_eq!(square_position(Square::new(0, 11)), PointMm::new(448, 296));
    }
}
