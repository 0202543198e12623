//! Panel task: serial drain + render loop
//!
//! One task owns the whole pipeline - UART RX, interpreter, frame buffer
//! and strip driver - and alternates between two phases:
//!
//! 1. Drain: consume every currently available input byte, bounded per
//!    read by a short timeout.
//! 2. Commit: if the drain left the color state dirty, render it into the
//!    frame buffer and push to the strip.
//!
//! The strip push stalls input reception for its duration, so it must
//! only run once the host has gone quiet. Reordering these phases loses
//! serial bytes under bursty input.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::Read;

use lumagrid_core::{render, ChannelCalibration, Feed, Interpreter, Rgb};

use crate::config::{NUM_LEDS, READ_TIMEOUT_MS};
use crate::strip::PanelStrip;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Panel task - interprets host commands and drives the WS2812 panel
#[embassy_executor::task]
pub async fn panel_task(
    mut rx: BufferedUartRx,
    mut strip: PanelStrip,
    mut activity_led: Output<'static>,
) {
    info!("Panel task started");

    let mut interp = Interpreter::new(ChannelCalibration::PANEL);
    let mut frame = [Rgb::BLACK; NUM_LEDS];

    // Blank the panel at boot
    strip.write(&frame).await;

    let read_timeout = Duration::from_millis(READ_TIMEOUT_MS);
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        // Drain phase
        loop {
            match with_timeout(read_timeout, rx.read(&mut buf)).await {
                Ok(Ok(n)) if n > 0 => {
                    trace!("RX: {} bytes", n);

                    for &byte in &buf[..n] {
                        match interp.feed(byte) {
                            Feed::Pending => {}
                            Feed::Dispatched => activity_led.set_high(),
                            Feed::Ignored(e) => {
                                // Dropped on the floor; the wire stays silent
                                activity_led.set_high();
                                warn!("Command rejected: {:?}", e);
                            }
                        }
                    }
                }
                Ok(Ok(_)) => {
                    // No bytes read, keep draining
                }
                Ok(Err(e)) => {
                    warn!("UART read error: {:?}", e);
                }
                Err(_) => {
                    // Input has gone quiet
                    break;
                }
            }
        }
        activity_led.set_low();

        // Commit phase
        if interp.state().is_dirty() {
            render(interp.state().mode(), &mut frame);
            strip.write(&frame).await;
            interp.state_mut().clear_dirty();
        }
    }
}
