//! Lumagrid - Serial palette firmware for WS2812B LED panels
//!
//! Main firmware binary for RP2040-based controllers driving an 8x32
//! WS2812B matrix. The host sends ASCII command lines over UART; the
//! firmware drains all pending input before each strip push so the slow
//! DMA write never costs incoming bytes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod config;
mod strip;
mod tasks;

use strip::PanelStrip;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumagrid firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for host communication
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config::SERIAL_BAUD;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized for host communication");

    // Setup PIO0 for WS2812 output on the panel data pin
    let strip = PanelStrip::new(p.PIO0, p.DMA_CH0, p.PIN_6);
    info!("PIO WS2812 driver initialized");

    // Activity LED mirrors command dispatch
    let activity_led = Output::new(p.PIN_13, Level::Low);

    spawner.spawn(tasks::panel_task(rx, strip, activity_led)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in panel_task.
    // We could use this for watchdog or other system monitoring.
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
