//! Shared test infrastructure for traffic-light integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use traffic_light::{
    ClockConfig, ControllerConfig, EdgeInput, LightOutput, LightState, TickTimer, TrafficLight,
    TrafficLightSystem,
};

// ============================================================================
// Hardware Journal
// ============================================================================

/// Ordered record of hardware interactions shared between mocks
#[derive(Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<heapless::Vec<&'static str, 64>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: &'static str) {
        let _ = self.entries.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.borrow().iter().copied().collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

// ============================================================================
// Mock Lamp Output
// ============================================================================

/// Mock lamp output that records every rendered state
pub struct MockLamps {
    history: heapless::Vec<LightState, 64>,
}

impl MockLamps {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last(&self) -> Option<LightState> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[LightState] {
        &self.history
    }
}

impl LightOutput for MockLamps {
    fn render(&mut self, state: LightState) {
        let _ = self.history.push(state);
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Output pin whose level can be observed through any clone
#[derive(Clone, Default)]
pub struct MockOutputPin {
    high: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MockOutputPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set_high(&self) -> bool {
        self.high.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ErrorType for MockOutputPin {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Output pin that rejects every write
pub struct BrokenOutputPin;

impl ErrorType for BrokenOutputPin {
    type Error = ErrorKind;
}

impl OutputPin for BrokenOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Returns which of (red, yellow, green) are driven high
pub fn levels(
    red: &MockOutputPin,
    yellow: &MockOutputPin,
    green: &MockOutputPin,
) -> (bool, bool, bool) {
    (red.is_set_high(), yellow.is_set_high(), green.is_set_high())
}

// ============================================================================
// Mock Tick Timer
// ============================================================================

#[derive(Default)]
struct TimerState {
    match_value: Cell<Option<u32>>,
    pending: Cell<bool>,
    clears: Cell<usize>,
}

/// Mock tick timer with controllable match events
#[derive(Clone, Default)]
pub struct MockTimer {
    state: Rc<TimerState>,
    journal: Option<Journal>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            state: Rc::default(),
            journal: Some(journal.clone()),
        }
    }

    /// Raise the match event as the hardware would after one period
    pub fn fire(&self) {
        self.state.pending.set(true);
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending.get()
    }

    pub fn match_value(&self) -> Option<u32> {
        self.state.match_value.get()
    }

    pub fn clears(&self) -> usize {
        self.state.clears.get()
    }
}

impl TickTimer for MockTimer {
    fn start_periodic(&mut self, match_value: u32) {
        self.state.match_value.set(Some(match_value));
    }

    fn event_pending(&mut self) -> bool {
        self.state.pending.get()
    }

    fn clear_event(&mut self) {
        self.state.pending.set(false);
        self.state.clears.set(self.state.clears.get() + 1);
        if let Some(journal) = &self.journal {
            journal.record("timer cleared");
        }
    }
}

// ============================================================================
// Mock Button
// ============================================================================

#[derive(Default)]
struct ButtonState {
    low: Cell<bool>,
    edge_pending: Cell<bool>,
    read_fails: Cell<bool>,
    clears: Cell<usize>,
}

/// Mock active-low button with a falling-edge flag
#[derive(Clone, Default)]
pub struct MockButton {
    state: Rc<ButtonState>,
    journal: Option<Journal>,
}

impl MockButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            state: Rc::default(),
            journal: Some(journal.clone()),
        }
    }

    /// Pin goes low and the falling edge is captured
    pub fn press(&self) {
        self.state.low.set(true);
        self.state.edge_pending.set(true);
    }

    /// Pin goes high again; a bounce still latches a falling edge
    pub fn release_with_bounce(&self) {
        self.state.low.set(false);
        self.state.edge_pending.set(true);
    }

    /// Falling edge captured but the pin already reads high (noise)
    pub fn glitch(&self) {
        self.state.low.set(false);
        self.state.edge_pending.set(true);
    }

    pub fn set_read_fails(&self, fails: bool) {
        self.state.read_fails.set(fails);
    }

    pub fn edge_pending(&self) -> bool {
        self.state.edge_pending.get()
    }

    pub fn clears(&self) -> usize {
        self.state.clears.get()
    }
}

impl ErrorType for MockButton {
    type Error = ErrorKind;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        if self.state.read_fails.get() {
            return Err(ErrorKind::Other);
        }
        Ok(self.state.low.get())
    }
}

impl EdgeInput for MockButton {
    fn falling_edge_pending(&mut self) -> bool {
        self.state.edge_pending.get()
    }

    fn clear_falling_edge(&mut self) {
        self.state.edge_pending.set(false);
        self.state.clears.set(self.state.clears.get() + 1);
        if let Some(journal) = &self.journal {
            journal.record("edge cleared");
        }
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that records requested waits instead of blocking
#[derive(Clone, Default)]
pub struct MockDelay {
    total_ms: Rc<Cell<u32>>,
    calls: Rc<Cell<usize>>,
    journal: Option<Journal>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            journal: Some(journal.clone()),
            ..Self::default()
        }
    }

    pub fn total_ms(&self) -> u32 {
        self.total_ms.get()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_us(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ms(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms.set(self.total_ms.get() + ms);
        self.calls.set(self.calls.get() + 1);
        if let Some(journal) = &self.journal {
            journal.record("delay");
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

pub type TestSystem = TrafficLightSystem<MockLamps, MockTimer, MockButton, MockDelay>;

/// Controller with default configuration on mock lamps
pub fn new_light() -> TrafficLight<MockLamps> {
    TrafficLight::new(MockLamps::new(), ControllerConfig::default()).unwrap()
}

/// Default configuration on a 1 MHz timer, as used on the demo board
pub fn test_config() -> ControllerConfig {
    ControllerConfig::new().with_clock(ClockConfig::new(1_000_000, 1_000))
}

/// System plus handles to its timer, button and delay
pub fn new_system() -> (TestSystem, MockTimer, MockButton, MockDelay) {
    let timer = MockTimer::new();
    let button = MockButton::new();
    let delay = MockDelay::new();

    let system = TrafficLightSystem::new(
        MockLamps::new(),
        timer.clone(),
        button.clone(),
        delay.clone(),
        test_config(),
    )
    .unwrap();

    (system, timer, button, delay)
}

/// Fire `count` timer interrupts, returning the last advance if any
pub fn tick(system: &mut TestSystem, timer: &MockTimer, count: usize) -> Option<LightState> {
    let mut last = None;
    for _ in 0..count {
        timer.fire();
        if let Some(state) = system.on_timer_interrupt() {
            last = Some(state);
        }
    }
    last
}
