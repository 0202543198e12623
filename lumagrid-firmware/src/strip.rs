//! WS2812B panel output driver
//!
//! Wraps the embassy-rp PIO WS2812 program with the panel's fixed output
//! parameters: global brightness and per-channel color correction. Both
//! are applied on every push; the committed color state upstream stays in
//! raw calibrated channel values.
//!
//! The PIO state machine clocks out the GRB bit stream via DMA, so a push
//! occupies the bus for the full frame (roughly 8 ms for 256 pixels).
//! The render loop sequences pushes strictly after input drain for this
//! reason.

use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{DMA_CH0, PIN_6, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::Peri;
use smart_leds::{brightness, RGB8};

use lumagrid_core::Rgb;

use crate::config::{BRIGHTNESS, COLOR_CORRECTION, NUM_LEDS};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// PIO-driven WS2812 panel with fixed brightness and color correction
pub struct PanelStrip {
    ws: PioWs2812<'static, PIO0, 0, NUM_LEDS>,
    // Keeps the loaded PIO program alive for the state machine's lifetime
    _program: PioWs2812Program<'static, PIO0>,
}

impl PanelStrip {
    /// Claim PIO0 state machine 0 and the panel data pin
    pub fn new(
        pio: Peri<'static, PIO0>,
        dma: Peri<'static, DMA_CH0>,
        pin: Peri<'static, PIN_6>,
    ) -> Self {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, Irqs);

        let program = PioWs2812Program::new(&mut common);
        let ws = PioWs2812::new(&mut common, sm0, dma, pin, &program);

        Self {
            ws,
            _program: program,
        }
    }

    /// Push a full frame to the panel
    ///
    /// Applies color correction and the global brightness ceiling, then
    /// blocks until the DMA transfer completes.
    pub async fn write(&mut self, frame: &[Rgb; NUM_LEDS]) {
        let corrected = frame.iter().map(|c| {
            RGB8::new(
                correct(c.r, COLOR_CORRECTION.0),
                correct(c.g, COLOR_CORRECTION.1),
                correct(c.b, COLOR_CORRECTION.2),
            )
        });

        let mut data = [RGB8::default(); NUM_LEDS];
        for (out, scaled) in data.iter_mut().zip(brightness(corrected, BRIGHTNESS)) {
            *out = scaled;
        }

        self.ws.write(&data).await;
    }
}

/// `channel * correction / 255`
fn correct(channel: u8, correction: u8) -> u8 {
    (channel as u16 * correction as u16 / 255) as u8
}
