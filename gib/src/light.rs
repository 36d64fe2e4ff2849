//! Status LEDs that show the active layer.

use embedded_hal::digital::{OutputPin, PinState};

use crate::state::LayerState;
use crate::types::status_led::{StatusLedType, StatusLeds};

/// Pins of the status LEDs, any of them can be absent
pub struct StatusLedConfig<P: OutputPin> {
    pub board: Option<P>,
    pub right_1: Option<P>,
    pub right_2: Option<P>,
    pub right_3: Option<P>,
    /// Pin state that turns a LED on
    pub on_state: PinState,
}

impl<P: OutputPin> Default for StatusLedConfig<P> {
    fn default() -> Self {
        Self {
            board: None,
            right_1: None,
            right_2: None,
            right_3: None,
            on_state: PinState::High,
        }
    }
}

/// A single LED
struct SingleLed<P: OutputPin> {
    /// Pin state when turning LED on
    on_state: PinState,

    /// GPIO for controlling the LED
    pin: P,
}

impl<P: OutputPin> SingleLed<P> {
    fn new(pin: P, on_state: PinState) -> Self {
        Self { on_state, pin }
    }

    /// Turn LED on
    fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.on_state)
    }

    /// Turn LED off
    fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(!self.on_state)
    }
}

pub struct StatusLedService<P: OutputPin> {
    board: Option<SingleLed<P>>,
    right_1: Option<SingleLed<P>>,
    right_2: Option<SingleLed<P>>,
    right_3: Option<SingleLed<P>>,
}

// Implement on/off function for StatusLedService
macro_rules! impl_led_on_off {
    ($n:ident, $fn_name:ident) => {
        pub fn $fn_name(&mut self, state: bool) -> Result<(), P::Error> {
            if let Some(led) = &mut self.$n {
                if state { led.on()? } else { led.off()? }
            }
            Ok(())
        }
    };
}

impl<P: OutputPin> StatusLedService<P> {
    pub fn new(config: StatusLedConfig<P>) -> Self {
        let on_state = config.on_state;
        Self {
            board: config.board.map(|p| SingleLed::new(p, on_state)),
            right_1: config.right_1.map(|p| SingleLed::new(p, on_state)),
            right_2: config.right_2.map(|p| SingleLed::new(p, on_state)),
            right_3: config.right_3.map(|p| SingleLed::new(p, on_state)),
        }
    }

    impl_led_on_off!(board, set_board_led);
    impl_led_on_off!(right_1, set_right_led_1);
    impl_led_on_off!(right_2, set_right_led_2);
    impl_led_on_off!(right_3, set_right_led_3);

    /// Switch a single LED
    pub fn set_led(&mut self, led: StatusLedType, state: bool) -> Result<(), P::Error> {
        match led {
            StatusLedType::Board => self.set_board_led(state),
            StatusLedType::Right1 => self.set_right_led_1(state),
            StatusLedType::Right2 => self.set_right_led_2(state),
            StatusLedType::Right3 => self.set_right_led_3(state),
        }
    }

    /// Turn every LED off, then turn on the ones set in `leds`
    pub fn set_leds(&mut self, leds: StatusLeds) -> Result<(), P::Error> {
        for led in StatusLedType::ALL {
            self.set_led(led, false)?;
        }
        for led in StatusLedType::ALL {
            if leds.is_on(led) {
                self.set_led(led, true)?;
            }
        }
        Ok(())
    }

    /// Runs every scan of the firmware's main loop.
    ///
    /// Shows the highest active layer of `layer_state` on the LEDs. Nothing is
    /// remembered between calls, the LEDs are rewritten every time.
    pub fn matrix_scan_user(&mut self, layer_state: LayerState) -> Result<StatusLeds, P::Error> {
        let layer = layer_state.highest_layer();
        let leds = StatusLeds::for_layer(layer);
        trace!("Layer {}, status leds: {:?}, {} lit", layer, leds, leds.lit());
        self.set_leds(leds)?;
        Ok(leds)
    }
}
