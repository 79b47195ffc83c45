//! Inter-task communication channels
//!
//! Static embassy-sync channels connecting the UART tasks to the
//! controller. The controller drains one command at a time, so a full
//! move sequence always runs to completion before the next command is
//! looked at.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use gambit_protocol::{Command, MoveNotification};

/// Channel capacity for parsed commands from the app
const COMMAND_CHANNEL_SIZE: usize = 8;

/// Channel capacity for upstream move notifications
const NOTIFY_CHANNEL_SIZE: usize = 8;

/// Parsed commands awaiting the controller
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Detected human moves awaiting transmission upstream
pub static NOTIFY_CHANNEL: Channel<CriticalSectionRawMutex, MoveNotification, NOTIFY_CHANNEL_SIZE> =
    Channel::new();
