//! Interrupt glue binding the controller to its timer, button and delay.
//!
//! [`TrafficLightSystem`] owns everything both interrupt handlers touch and
//! exposes one entry point per interrupt source. [`SharedSystem`] puts it in a
//! `static` behind a critical section so the two handlers never interleave:
//!
//! ```ignore
//! static SYSTEM: SharedSystem<System> = SharedSystem::new();
//!
//! #[interrupt]
//! fn TIMER_IRQ_0() {
//!     SYSTEM.on_timer_interrupt();
//! }
//!
//! #[interrupt]
//! fn IO_IRQ_BANK0() {
//!     SYSTEM.on_button_interrupt();
//! }
//! ```

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::delay::DelayNs;

use crate::button::{EdgeAction, EdgeInput, EdgeLatch};
use crate::clock::TickTimer;
use crate::config::{ConfigError, ControllerConfig};
use crate::controller::TrafficLight;
use crate::output::LightOutput;
use crate::types::LightState;

/// Result of servicing a button interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Interrupt was not caused by a falling edge on the button.
    NoEdge,

    /// Press accepted; the light advanced to this state.
    Advanced(LightState),

    /// Latch cleared without changing the light.
    Unlatched,
}

/// Traffic light controller together with its interrupt sources.
///
/// # Type Parameters
/// * `O` - Lamp output implementation
/// * `T` - Tick timer implementation
/// * `B` - Button input implementation
/// * `D` - Blocking delay used for the debounce window
pub struct TrafficLightSystem<O, T, B, D>
where
    O: LightOutput,
    T: TickTimer,
    B: EdgeInput,
    D: DelayNs,
{
    light: TrafficLight<O>,
    timer: T,
    button: B,
    delay: D,
    latch: EdgeLatch,
    debounce_ms: u32,
}

impl<O, T, B, D> TrafficLightSystem<O, T, B, D>
where
    O: LightOutput,
    T: TickTimer,
    B: EdgeInput,
    D: DelayNs,
{
    /// Validates `config`, shows red and starts the tick timer.
    ///
    /// # Returns
    /// * `Ok(TrafficLightSystem)` - Ready for interrupts
    /// * `Err` - Configuration failed validation; the timer was not started
    pub fn new(
        output: O,
        mut timer: T,
        button: B,
        delay: D,
        config: ControllerConfig,
    ) -> Result<Self, ConfigError> {
        let match_value = match config.clock().match_value() {
            Ok(counts) => counts,
            Err(e) => {
                warn!("clock configuration rejected: {}", e);
                return Err(e);
            }
        };
        let light = TrafficLight::new(output, config)?;

        timer.start_periodic(match_value);
        debug!("tick timer started, match value {}", match_value);

        Ok(Self {
            light,
            timer,
            button,
            delay,
            latch: EdgeLatch::new(),
            debounce_ms: config.debounce_ms(),
        })
    }

    /// Services the tick timer interrupt.
    ///
    /// The match event is cleared after the tick has been counted.
    ///
    /// # Returns
    /// * `Some(state)` - The tick advanced the light to `state`
    /// * `None` - No pending event, or the threshold was not reached
    pub fn on_timer_interrupt(&mut self) -> Option<LightState> {
        if !self.timer.event_pending() {
            return None;
        }

        let advanced = self.light.on_tick();
        self.timer.clear_event();
        advanced
    }

    /// Services the button edge interrupt.
    ///
    /// An accepted press advances the light and then busy-waits for the
    /// debounce window before the edge flag is cleared. The wait runs inside
    /// the handler and holds off every other interrupt for its duration.
    ///
    /// # Returns
    /// * `Ok(ButtonEvent)` - How the edge was handled
    /// * `Err` - The button level could not be read; the edge is still
    ///   cleared and the latch is unchanged
    pub fn on_button_interrupt(&mut self) -> Result<ButtonEvent, B::Error> {
        if !self.button.falling_edge_pending() {
            return Ok(ButtonEvent::NoEdge);
        }

        let event = self
            .button
            .is_low()
            .map(|pin_is_low| self.handle_edge(pin_is_low));
        self.button.clear_falling_edge();
        event
    }

    fn handle_edge(&mut self, pin_is_low: bool) -> ButtonEvent {
        match self.latch.on_edge(pin_is_low) {
            EdgeAction::Press => {
                let state = self.light.on_button_edge();
                self.delay.delay_ms(self.debounce_ms);
                ButtonEvent::Advanced(state)
            }
            EdgeAction::Unlatch => {
                trace!("button latch cleared (pin low: {})", pin_is_low);
                ButtonEvent::Unlatched
            }
        }
    }

    /// Returns the controller.
    pub fn light(&self) -> &TrafficLight<O> {
        &self.light
    }

    /// Returns true while a button press is latched.
    pub fn button_latched(&self) -> bool {
        self.latch.is_latched()
    }

    /// Returns the tick timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Returns the button input.
    pub fn button(&self) -> &B {
        &self.button
    }

    /// Returns the debounce delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }
}

/// Critical-section protected slot for a system reached from interrupts.
///
/// Starts empty so it can live in a `static`; call [`init`](SharedSystem::init)
/// once during start-up before unmasking the interrupts.
pub struct SharedSystem<S> {
    inner: Mutex<RefCell<Option<S>>>,
}

impl<S> SharedSystem<S> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores the system, replacing any previous one.
    pub fn init(&self, system: S) {
        critical_section::with(|cs| {
            *self.inner.borrow(cs).borrow_mut() = Some(system);
        });
    }

    /// Returns true once [`init`](SharedSystem::init) has been called.
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_some())
    }

    /// Runs `f` on the system with interrupts masked.
    ///
    /// Returns `None` without calling `f` if the slot is still empty.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().as_mut().map(f))
    }
}

impl<S> Default for SharedSystem<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, T, B, D> SharedSystem<TrafficLightSystem<O, T, B, D>>
where
    O: LightOutput,
    T: TickTimer,
    B: EdgeInput,
    D: DelayNs,
{
    /// Timer interrupt entry point. See [`TrafficLightSystem::on_timer_interrupt`].
    pub fn on_timer_interrupt(&self) -> Option<LightState> {
        self.with_lock(|system| system.on_timer_interrupt()).flatten()
    }

    /// Button interrupt entry point. See [`TrafficLightSystem::on_button_interrupt`].
    ///
    /// Returns `None` before initialization.
    pub fn on_button_interrupt(&self) -> Option<Result<ButtonEvent, B::Error>> {
        self.with_lock(|system| system.on_button_interrupt())
    }

    /// Returns the color currently shown, if initialized.
    pub fn state(&self) -> Option<LightState> {
        self.with_lock(|system| system.light().state())
    }
}
