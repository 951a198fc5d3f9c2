//! Display colors for RGB lamp outputs.
//!
//! All constants are `palette::Srgb` (0.0-1.0 range) so they can be handed
//! straight to an [`RgbLed`](crate::output::RgbLed) implementation.

use palette::Srgb;

/// Lamp off.
pub const OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Stop.
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);

/// Go.
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Amber rather than pure yellow, which reads greenish on most RGB LEDs.
pub const YELLOW: Srgb = Srgb::new(1.0, 0.75, 0.0);
