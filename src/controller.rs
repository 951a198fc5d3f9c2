//! Traffic light state controller.
//!
//! Provides [`TrafficLight`], which owns the lamp output, the current
//! [`LightState`] and the count of ticks since the last advance. Both the
//! timer and the button funnel into [`TrafficLight::advance`], which changes
//! the state, resets the counter and renders in one step.

use crate::config::{ConfigError, ControllerConfig};
use crate::output::LightOutput;
use crate::types::LightState;

/// What caused an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvanceCause {
    /// Tick counter reached the auto-change threshold.
    Timer,
    /// Accepted button press.
    Button,
    /// Direct call to [`TrafficLight::advance`].
    Manual,
}

/// Cycles a three-lamp traffic light on ticks and button presses.
///
/// The light starts on red. Every advance moves to the next color, resets the
/// tick counter to zero and renders the new state, so the counter is always in
/// `0..auto_change_ticks`.
///
/// # Type Parameters
/// * `O` - Lamp output implementation
pub struct TrafficLight<O: LightOutput> {
    output: O,
    state: LightState,
    elapsed_ticks: u32,
    auto_change_ticks: u32,
    last_cause: Option<AdvanceCause>,
}

impl<O: LightOutput> TrafficLight<O> {
    /// Creates a controller on red and renders that state.
    ///
    /// # Returns
    /// * `Ok(TrafficLight)` - Controller showing red with zero elapsed ticks
    /// * `Err` - Configuration failed validation
    pub fn new(mut output: O, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = LightState::Red;
        output.render(state);

        Ok(Self {
            output,
            state,
            elapsed_ticks: 0,
            auto_change_ticks: config.auto_change_ticks(),
            last_cause: None,
        })
    }

    /// Moves to the next color, resets the tick counter and renders.
    pub fn advance(&mut self) -> LightState {
        self.advance_with(AdvanceCause::Manual)
    }

    /// Counts one tick, advancing once the threshold is reached.
    ///
    /// # Returns
    /// * `Some(state)` - The light advanced to `state`
    /// * `None` - Threshold not yet reached
    pub fn on_tick(&mut self) -> Option<LightState> {
        self.elapsed_ticks += 1;
        trace!("tick {}/{}", self.elapsed_ticks, self.auto_change_ticks);

        if self.elapsed_ticks >= self.auto_change_ticks {
            Some(self.advance_with(AdvanceCause::Timer))
        } else {
            None
        }
    }

    /// Advances immediately, regardless of the tick count.
    pub fn on_button_edge(&mut self) -> LightState {
        self.advance_with(AdvanceCause::Button)
    }

    fn advance_with(&mut self, cause: AdvanceCause) -> LightState {
        let previous = self.state;
        self.state = previous.next();
        self.elapsed_ticks = 0;
        self.last_cause = Some(cause);
        self.output.render(self.state);

        debug!("{} -> {} ({})", previous, self.state, cause);

        self.state
    }

    /// Returns the color currently shown.
    pub fn state(&self) -> LightState {
        self.state
    }

    /// Returns the number of ticks counted since the last advance.
    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Returns the number of ticks after which the light advances on its own.
    pub fn auto_change_ticks(&self) -> u32 {
        self.auto_change_ticks
    }

    /// Returns what caused the most recent advance, if any.
    pub fn last_cause(&self) -> Option<AdvanceCause> {
        self.last_cause
    }

    /// Returns a reference to the lamp output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the controller and gives the output back.
    pub fn release(self) -> O {
        self.output
    }
}
