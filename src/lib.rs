#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LightState`**: The color shown, cycling `Red -> Green -> Yellow -> Red`
//! - **`TrafficLight`**: State controller counting ticks and advancing on threshold or button
//! - **`LightOutput`**: Trait to implement for your lamp hardware (`PinLights`, `RgbLamp` provided)
//! - **`TickTimer`**: Trait to implement for the periodic hardware timer
//! - **`EdgeInput`**: Trait to implement for the falling-edge button input
//! - **`EdgeLatch`**: Toggle latch suppressing contact bounce
//! - **`TrafficLightSystem`**: Controller plus timer, button and delay, one entry point per interrupt
//! - **`SharedSystem`**: Critical-section guarded `static` slot shared by both interrupt handlers
//! - **`ControllerConfig`**: Threshold, debounce window and tick timer settings

#[macro_use]
mod fmt;

pub mod button;
pub mod clock;
pub mod colors;
pub mod config;
pub mod controller;
pub mod output;
pub mod system;
pub mod types;

pub use button::{EdgeAction, EdgeInput, EdgeLatch};
pub use clock::{ClockConfig, TickTimer};
pub use config::{
    ConfigError, ControllerConfig, DEFAULT_AUTO_CHANGE_TICKS, DEFAULT_BASE_CLOCK_HZ,
    DEFAULT_DEBOUNCE_MS, DEFAULT_TICK_PERIOD_MS,
};
pub use controller::{AdvanceCause, TrafficLight};
pub use output::{ActiveLevel, LightOutput, PinLights, RgbLamp, RgbLed};
pub use system::{ButtonEvent, SharedSystem, TrafficLightSystem};
pub use types::{InvalidLightState, LightState};

// Re-export Srgb from palette for RgbLed implementors
pub use palette::Srgb;
