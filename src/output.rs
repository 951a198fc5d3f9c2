//! Light output drivers.
//!
//! Defines the [`LightOutput`] trait the controller renders through, plus two
//! implementations: [`PinLights`] for three discrete lamps on GPIO pins and
//! [`RgbLamp`] for a single RGB LED.

use crate::types::LightState;
use embedded_hal::digital::OutputPin;
use palette::Srgb;

/// Trait for abstracting the traffic light lamps.
///
/// Implementations must leave exactly one lamp lit after every call. Handle
/// any hardware errors internally - rendering cannot fail.
pub trait LightOutput {
    /// Shows `state` on the lamps.
    fn render(&mut self, state: LightState);

    /// Shows a raw state value, lighting red for anything unknown.
    fn render_raw(&mut self, raw: u8) {
        self.render(LightState::from_raw(raw));
    }
}

/// Electrical level that lights a lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Driving the pin high lights the lamp.
    #[default]
    High,

    /// Driving the pin low lights the lamp (common anode wiring).
    Low,
}

/// Three discrete lamps on independent output pins.
pub struct PinLights<R, Y, G>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
{
    red: R,
    yellow: Y,
    green: G,
    active_level: ActiveLevel,
}

impl<R, Y, G> PinLights<R, Y, G>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
{
    /// Creates a lamp driver with all lamps switched off.
    ///
    /// # Arguments
    /// * `red` - Pin driving the red lamp
    /// * `yellow` - Pin driving the yellow lamp
    /// * `green` - Pin driving the green lamp
    /// * `active_level` - Level that lights a lamp
    pub fn new(red: R, yellow: Y, green: G, active_level: ActiveLevel) -> Self {
        let mut lights = Self {
            red,
            yellow,
            green,
            active_level,
        };
        lights.all_off();
        lights
    }

    /// Switches every lamp off.
    pub fn all_off(&mut self) {
        let level = self.active_level;
        drive(&mut self.red, level, false);
        drive(&mut self.yellow, level, false);
        drive(&mut self.green, level, false);
    }

    /// Returns the configured active level.
    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Gives the pins back.
    pub fn release(self) -> (R, Y, G) {
        (self.red, self.yellow, self.green)
    }
}

impl<R, Y, G> LightOutput for PinLights<R, Y, G>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
{
    fn render(&mut self, state: LightState) {
        self.all_off();

        let level = self.active_level;
        match state {
            LightState::Red => drive(&mut self.red, level, true),
            LightState::Green => drive(&mut self.green, level, true),
            LightState::Yellow => drive(&mut self.yellow, level, true),
        }
    }
}

fn drive<P: OutputPin>(pin: &mut P, active_level: ActiveLevel, lit: bool) {
    let high = match active_level {
        ActiveLevel::High => lit,
        ActiveLevel::Low => !lit,
    };

    let _ = if high { pin.set_high() } else { pin.set_low() };
}

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) to show the
/// traffic light on a single RGB LED through [`RgbLamp`].
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Color components are in the range 0.0-1.0. Implementations should
    /// convert these to their hardware's native format.
    fn set_color(&mut self, color: Srgb);
}

/// Traffic light shown on one RGB LED.
pub struct RgbLamp<L: RgbLed> {
    led: L,
}

impl<L: RgbLed> RgbLamp<L> {
    /// Wraps an RGB LED, switching it off.
    pub fn new(mut led: L) -> Self {
        led.set_color(crate::colors::OFF);
        Self { led }
    }

    /// Gives the LED back.
    pub fn release(self) -> L {
        self.led
    }
}

impl<L: RgbLed> LightOutput for RgbLamp<L> {
    fn render(&mut self, state: LightState) {
        self.led.set_color(state.color());
    }
}
