//! Core light state type.

use crate::colors::{GREEN, RED, YELLOW};
use palette::Srgb;

/// Color currently shown by the traffic light.
///
/// States advance cyclically `Red -> Green -> Yellow -> Red`. The discriminants
/// are the raw encoding used by [`LightState::from_raw`] and `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LightState {
    /// Stop. Initial state after reset.
    #[default]
    Red = 0,

    /// Go.
    Green = 1,

    /// Prepare to stop.
    Yellow = 2,
}

impl LightState {
    /// Number of states in one full cycle.
    pub const COUNT: u8 = 3;

    /// Returns the state that follows this one in the cycle.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
        }
    }

    /// Decodes a raw state value, falling back to `Red` for anything unknown.
    #[inline]
    pub fn from_raw(raw: u8) -> Self {
        LightState::try_from(raw).unwrap_or(LightState::Red)
    }

    /// Returns the raw encoding of this state.
    #[inline]
    pub fn as_raw(self) -> u8 {
        self as u8
    }

    /// Returns the display color for this state.
    #[inline]
    pub fn color(self) -> Srgb {
        match self {
            LightState::Red => RED,
            LightState::Green => GREEN,
            LightState::Yellow => YELLOW,
        }
    }
}

/// Raw state value outside the known encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidLightState(pub u8);

impl core::fmt::Display for InvalidLightState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "invalid light state {} (expected 0..{})",
            self.0,
            LightState::COUNT
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidLightState {}

impl TryFrom<u8> for LightState {
    type Error = InvalidLightState;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(LightState::Red),
            1 => Ok(LightState::Green),
            2 => Ok(LightState::Yellow),
            other => Err(InvalidLightState(other)),
        }
    }
}

impl From<LightState> for u8 {
    fn from(state: LightState) -> Self {
        state.as_raw()
    }
}
