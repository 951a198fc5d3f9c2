//! Controller and clock configuration.

use crate::clock::ClockConfig;

/// Ticks without a button press before the light advances on its own.
pub const DEFAULT_AUTO_CHANGE_TICKS: u32 = 5;

/// Blocking debounce window after an accepted button press.
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Base frequency the tick timer counts at.
pub const DEFAULT_BASE_CLOCK_HZ: u32 = 25_000_000;

/// Nominal tick period.
pub const DEFAULT_TICK_PERIOD_MS: u32 = 1_000;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Auto-change threshold of zero ticks.
    ZeroAutoChangeInterval,

    /// Tick period of zero milliseconds.
    ZeroTickPeriod,

    /// Tick period shorter than one timer count at the base clock.
    TickPeriodTooShort,

    /// Timer match value does not fit in 32 bits.
    TickPeriodTooLong,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroAutoChangeInterval => {
                write!(f, "auto-change interval must be at least one tick")
            }
            ConfigError::ZeroTickPeriod => {
                write!(f, "tick period must be non-zero")
            }
            ConfigError::TickPeriodTooShort => {
                write!(f, "tick period is shorter than one base clock count")
            }
            ConfigError::TickPeriodTooLong => {
                write!(f, "tick period overflows the 32-bit timer match register")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Runtime configuration for a traffic light system.
///
/// Defaults reproduce the classic board setup: advance every 5 ticks of a
/// 1 second timer clocked at 25 MHz, with a 50 ms button debounce window.
///
/// ```
/// use traffic_light::{ClockConfig, ControllerConfig};
///
/// let config = ControllerConfig::new()
///     .with_auto_change_ticks(10)
///     .with_clock(ClockConfig::new(1_000_000, 500));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    auto_change_ticks: u32,
    debounce_ms: u32,
    clock: ClockConfig,
}

impl ControllerConfig {
    /// Creates a configuration with default values.
    pub const fn new() -> Self {
        Self {
            auto_change_ticks: DEFAULT_AUTO_CHANGE_TICKS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            clock: ClockConfig::new(DEFAULT_BASE_CLOCK_HZ, DEFAULT_TICK_PERIOD_MS),
        }
    }

    /// Sets the number of ticks after which the light advances automatically.
    pub const fn with_auto_change_ticks(mut self, ticks: u32) -> Self {
        self.auto_change_ticks = ticks;
        self
    }

    /// Sets the blocking debounce window applied after an accepted press.
    pub const fn with_debounce_ms(mut self, millis: u32) -> Self {
        self.debounce_ms = millis;
        self
    }

    /// Sets the tick timer configuration.
    pub const fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the auto-change threshold in ticks.
    pub const fn auto_change_ticks(&self) -> u32 {
        self.auto_change_ticks
    }

    /// Returns the debounce window in milliseconds.
    pub const fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Returns the tick timer configuration.
    pub const fn clock(&self) -> ClockConfig {
        self.clock
    }

    /// Checks that the threshold is non-zero and the timer match value is
    /// representable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_change_ticks == 0 {
            return Err(ConfigError::ZeroAutoChangeInterval);
        }

        self.clock.match_value()?;
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
