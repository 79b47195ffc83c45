//! Command intake task
//!
//! Receives bytes from the app UART, accumulates them into lines, parses
//! commands, and queues them for the controller. Malformed lines are
//! logged and dropped here; nothing invalid reaches the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use gambit_protocol::{parse_line, LineReader};

use crate::channels::COMMAND_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Command RX task - receives and parses app commands
#[embassy_executor::task]
pub async fn command_task(mut rx: BufferedUartRx) {
    info!("Command task started");

    let mut reader = LineReader::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    match reader.feed(byte) {
                        Ok(Some(line)) => match parse_line(line) {
                            Ok(command) => {
                                debug!("Command: {:?}", command);
                                COMMAND_CHANNEL.send(command).await;
                            }
                            Err(e) => {
                                warn!("Rejected command line: {:?}", e);
                            }
                        },
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Discarded input line: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
