//! RP2040 implementations of the traffic-light hardware traits.
//!
//! - Lamps: GPIO13 red, GPIO14 yellow, GPIO15 green, active high
//! - Button: GPIO16 to ground, internal pull-up, falling-edge interrupt
//! - Ticks: TIMER alarm 0 (1 MHz timebase)

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use fugit::MicrosDurationU32;
use rp_pico::hal::gpio::bank0::{Gpio13, Gpio14, Gpio15, Gpio16};
use rp_pico::hal::gpio::{FunctionSioInput, FunctionSioOutput, Interrupt, Pin, PullDown, PullUp};
use rp_pico::hal::timer::{Alarm, Alarm0};
use traffic_light::{ClockConfig, EdgeInput, PinLights, TickTimer};

/// The RP2040 system timer counts microseconds.
pub const TIMER_CLOCK_HZ: u32 = 1_000_000;

/// One tick per second on the microsecond timer.
pub const TICK_CLOCK: ClockConfig = ClockConfig::new(TIMER_CLOCK_HZ, 1_000);

pub type RedPin = Pin<Gpio13, FunctionSioOutput, PullDown>;
pub type YellowPin = Pin<Gpio14, FunctionSioOutput, PullDown>;
pub type GreenPin = Pin<Gpio15, FunctionSioOutput, PullDown>;
pub type ButtonPin = Pin<Gpio16, FunctionSioInput, PullUp>;

/// Three lamps on GPIO13-15.
pub type Lamps = PinLights<RedPin, YellowPin, GreenPin>;

/// Periodic tick source built on a one-shot RP2040 alarm.
///
/// The alarm is re-armed each time its event is cleared, so the period is
/// measured from the end of the previous handler.
pub struct AlarmTicker {
    alarm: Alarm0,
    period: MicrosDurationU32,
}

impl AlarmTicker {
    pub fn new(alarm: Alarm0) -> Self {
        Self {
            alarm,
            period: MicrosDurationU32::from_ticks(0),
        }
    }
}

impl TickTimer for AlarmTicker {
    fn start_periodic(&mut self, match_value: u32) {
        self.period = MicrosDurationU32::from_ticks(match_value);
        self.alarm.enable_interrupt();
        let _ = self.alarm.schedule(self.period);
    }

    fn event_pending(&mut self) -> bool {
        self.alarm.finished()
    }

    fn clear_event(&mut self) {
        self.alarm.clear_interrupt();
        let _ = self.alarm.schedule(self.period);
    }
}

/// Active-low push button with its falling-edge interrupt enabled.
pub struct EdgeButton {
    pin: ButtonPin,
}

impl EdgeButton {
    pub fn new(pin: ButtonPin) -> Self {
        pin.set_interrupt_enabled(Interrupt::EdgeLow, true);
        Self { pin }
    }
}

impl ErrorType for EdgeButton {
    type Error = Infallible;
}

impl InputPin for EdgeButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        InputPin::is_high(&mut self.pin)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        InputPin::is_low(&mut self.pin)
    }
}

impl EdgeInput for EdgeButton {
    fn falling_edge_pending(&mut self) -> bool {
        self.pin.interrupt_status(Interrupt::EdgeLow)
    }

    fn clear_falling_edge(&mut self) {
        self.pin.clear_interrupt(Interrupt::EdgeLow);
    }
}
