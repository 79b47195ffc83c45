//! Upstream notification task
//!
//! Sends detected human moves to the app as newline-terminated lines.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::NOTIFY_CHANNEL;

/// Notification TX task
#[embassy_executor::task]
pub async fn notify_task(mut tx: BufferedUartTx) {
    info!("Notify task started");

    loop {
        let notice = NOTIFY_CHANNEL.receive().await;
        let line = notice.encode();
        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("UART write error: {:?}", e);
            continue;
        }
        if let Err(e) = tx.write_all(b"\n").await {
            warn!("UART write error: {:?}", e);
        }
    }
}
