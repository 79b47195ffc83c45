//! Upstream move notifications
//!
//! A confirmed human move is reported to the remote source as one line of
//! four space-separated raw grid coordinates (graveyard column offset
//! included), matching what the app feeds back into its engine.

use core::fmt::Write;

use heapless::String;

/// Maximum encoded length: "7 11 7 11" plus slack
const MAX_NOTIFICATION_LEN: usize = 16;

/// A detected human move in raw grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveNotification {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl MoveNotification {
    /// Encode as the upstream line (without the trailing newline)
    pub fn encode(&self) -> String<MAX_NOTIFICATION_LEN> {
        let mut out = String::new();
        // Cannot overflow: four coordinates of at most two digits
        let _ = write!(
            out,
            "{} {} {} {}",
            self.from_row, self.from_col, self.to_row, self.to_col
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let notice = MoveNotification {
            from_row: 6,
            from_col: 4,
            to_row: 4,
            to_col: 4,
        };
        assert_eq!(notice.encode().as_str(), "6 4 4 4");
    }

    #[test]
    fn test_encode_graveyard_coordinates() {
        let notice = MoveNotification {
            from_row: 0,
            from_col: 11,
            to_row: 7,
            to_col: 10,
        };
        assert_eq!(notice.encode().as_str(), "0 11 7 10");
    }
}
