//! Gambit - Robotic Chessboard Firmware
//!
//! Main firmware binary for RP2040-based boards. Drives the CoreXY gantry
//! and electromagnet gripper from moves received over UART (Bluetooth
//! bridge to the companion app), scans the hall-sensor matrix for moves
//! made by the human player, and reports them back upstream.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use gambit_core::motion::Gantry;
use gambit_drivers::{ElectromagnetGripper, FourWireStepper, MuxMatrix};

use crate::hw::{InPin, OutPin};

mod channels;
mod hw;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Gambit firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // UART to the Bluetooth bridge (115200 baud default)
    let uart_config = UartConfig::default();
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for app communication");

    // Gantry motors: coil pins in IN1, IN3, IN2, IN4 order
    let motor_a = FourWireStepper::new([
        OutPin(Output::new(p.PIN_2, Level::Low)),
        OutPin(Output::new(p.PIN_3, Level::Low)),
        OutPin(Output::new(p.PIN_4, Level::Low)),
        OutPin(Output::new(p.PIN_5, Level::Low)),
    ]);
    let motor_b = FourWireStepper::new([
        OutPin(Output::new(p.PIN_6, Level::Low)),
        OutPin(Output::new(p.PIN_7, Level::Low)),
        OutPin(Output::new(p.PIN_8, Level::Low)),
        OutPin(Output::new(p.PIN_9, Level::Low)),
    ]);
    // Power-on pose is the machine origin
    let gantry = Gantry::new(motor_a, motor_b);

    // Electromagnet behind a transistor
    let gripper = ElectromagnetGripper::new(OutPin(Output::new(p.PIN_10, Level::Low)));
    info!("Gantry and gripper initialized");

    // Sensor matrix: 4 shared select pins, 6 sense lines
    let matrix = MuxMatrix::new(
        [
            OutPin(Output::new(p.PIN_11, Level::Low)),
            OutPin(Output::new(p.PIN_12, Level::Low)),
            OutPin(Output::new(p.PIN_13, Level::Low)),
            OutPin(Output::new(p.PIN_14, Level::Low)),
        ],
        [
            InPin(Input::new(p.PIN_16, Pull::Down)),
            InPin(Input::new(p.PIN_17, Pull::Down)),
            InPin(Input::new(p.PIN_18, Pull::Down)),
            InPin(Input::new(p.PIN_19, Pull::Down)),
            InPin(Input::new(p.PIN_20, Pull::Down)),
            InPin(Input::new(p.PIN_21, Pull::Down)),
        ],
    );
    info!("Sensor matrix initialized");

    spawner.spawn(tasks::command_task(rx)).unwrap();
    spawner.spawn(tasks::notify_task(tx)).unwrap();
    spawner
        .spawn(tasks::controller_task(gantry, gripper, matrix))
        .unwrap();
    info!("All tasks spawned");
}
