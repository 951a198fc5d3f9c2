//! Push-button input and edge latch.
//!
//! The button is active-low and wired to a falling-edge interrupt. Contact
//! bounce is handled by [`EdgeLatch`]: the first qualifying edge latches and
//! advances the light, the next delivered edge (normally the release bounce)
//! unlatches without advancing.
//!
//! The latch toggles on every delivery. If interrupts arrive an odd number of
//! times per physical press it is left set, and the next press only clears it.
//! That behavior is kept as-is; see `DESIGN.md`.

use embedded_hal::digital::InputPin;

/// Trait for abstracting an edge-interrupt capable button input.
///
/// The current pin level comes from the [`InputPin`] supertrait. The pending
/// flag is cleared by the caller once the edge has been fully handled,
/// including the debounce delay, so edges raised during that window are
/// absorbed.
pub trait EdgeInput: InputPin {
    /// Returns true if a falling edge has been captured since the last clear.
    fn falling_edge_pending(&mut self) -> bool;

    /// Acknowledges the captured falling edge.
    fn clear_falling_edge(&mut self);
}

/// What an edge delivery means to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeAction {
    /// Accepted press. Advance the light and debounce.
    Press,

    /// Latch cleared. No state change.
    Unlatch,
}

/// Toggle latch that suppresses re-triggering while the contact bounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeLatch {
    latched: bool,
}

impl EdgeLatch {
    /// Creates a cleared latch.
    pub const fn new() -> Self {
        Self { latched: false }
    }

    /// Processes one edge delivery.
    ///
    /// # Arguments
    /// * `pin_is_low` - Button level read inside the handler; a genuine press
    ///   still reads low
    pub fn on_edge(&mut self, pin_is_low: bool) -> EdgeAction {
        if !self.latched && pin_is_low {
            self.latched = true;
            EdgeAction::Press
        } else {
            self.latched = false;
            EdgeAction::Unlatch
        }
    }

    /// Returns true while a press is being debounced.
    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
