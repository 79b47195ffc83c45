//! Command parsing
//!
//! Parses one complete line into a [`Command`]. Malformed input is
//! rejected with a [`CommandError`] and never indexed blindly; move
//! coordinates are validated to 0-7 here, before anything reaches the
//! board model or the motion controller.

/// A move command in playing-square coordinates, each validated to 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveCommand {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

/// A parsed command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `c<x>,<y>`: drive the gripper to an absolute position in mm,
    /// typically to physically align the gantry before play
    Calibrate { x: i32, y: i32 },
    /// `s`: return to origin and reset the board model
    ReturnToStart,
    /// Four digits: execute a move
    Move(MoveCommand),
}

/// Errors from command parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Empty line
    Empty,
    /// Calibration command without a comma separator
    MissingComma,
    /// Calibration coordinate is not a valid integer
    BadNumber,
    /// Move command is not exactly four characters
    BadLength,
    /// Move command contains a non-digit character
    BadDigit,
    /// Move coordinate outside the playing area (0-7)
    OutOfRange,
}

/// Parse one complete line (newline already stripped)
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches('\r');
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    if let Some(rest) = line.strip_prefix('c') {
        let (x, y) = rest.split_once(',').ok_or(CommandError::MissingComma)?;
        let x = x.trim().parse().map_err(|_| CommandError::BadNumber)?;
        let y = y.trim().parse().map_err(|_| CommandError::BadNumber)?;
        return Ok(Command::Calibrate { x, y });
    }

    if line == "s" {
        return Ok(Command::ReturnToStart);
    }

    if line.len() != 4 {
        return Err(CommandError::BadLength);
    }
    let mut coords = [0u8; 4];
    for (slot, c) in coords.iter_mut().zip(line.chars()) {
        let digit = c.to_digit(10).ok_or(CommandError::BadDigit)?;
        if digit > 7 {
            return Err(CommandError::OutOfRange);
        }
        *slot = digit as u8;
    }
    Ok(Command::Move(MoveCommand {
        from_row: coords[0],
        from_col: coords[1],
        to_row: coords[2],
        to_col: coords[3],
    }))
}
