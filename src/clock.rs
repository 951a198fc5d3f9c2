//! Periodic tick source abstraction.

use crate::config::ConfigError;

/// Trait for abstracting the hardware timer that produces ticks.
///
/// Implement this for a timer peripheral configured to raise an interrupt each
/// time its counter reaches the match value, then restart from zero. The
/// interrupt handler checks [`event_pending`](TickTimer::event_pending) and
/// clears the flag with [`clear_event`](TickTimer::clear_event) once the tick
/// has been handled.
pub trait TickTimer {
    /// Starts the timer so it fires every `match_value` counts.
    fn start_periodic(&mut self, match_value: u32);

    /// Returns true if the match event that raised the interrupt is pending.
    fn event_pending(&mut self) -> bool;

    /// Acknowledges the match event.
    fn clear_event(&mut self);
}

/// Tick timer timing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    base_clock_hz: u32,
    tick_period_ms: u32,
}

impl ClockConfig {
    /// Creates a clock configuration for a timer counting at `base_clock_hz`
    /// that should tick every `tick_period_ms`.
    pub const fn new(base_clock_hz: u32, tick_period_ms: u32) -> Self {
        Self {
            base_clock_hz,
            tick_period_ms,
        }
    }

    /// Frequency the timer counts at.
    pub const fn base_clock_hz(&self) -> u32 {
        self.base_clock_hz
    }

    /// Tick period in milliseconds.
    pub const fn tick_period_ms(&self) -> u32 {
        self.tick_period_ms
    }

    /// Computes the timer match value for one tick period.
    ///
    /// # Returns
    /// * `Ok(counts)` - Number of base clock counts per tick
    /// * `Err` - Zero period, period below one count, or overflow of 32 bits
    pub fn match_value(&self) -> Result<u32, ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        let counts = (self.base_clock_hz as u64) * (self.tick_period_ms as u64) / 1_000;
        match counts {
            0 => Err(ConfigError::TickPeriodTooShort),
            c if c > u32::MAX as u64 => Err(ConfigError::TickPeriodTooLong),
            c => Ok(c as u32),
        }
    }
}
