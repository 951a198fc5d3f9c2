#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    self, Sio,
    clocks::init_clocks_and_plls,
    pac::{self, interrupt},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_demos::hardware::{AlarmTicker, EdgeButton, Lamps, TICK_CLOCK};
use traffic_light::{
    ActiveLevel, ButtonEvent, ControllerConfig, PinLights, SharedSystem, TrafficLightSystem,
};

type System = TrafficLightSystem<Lamps, AlarmTicker, EdgeButton, hal::Timer>;

static SYSTEM: SharedSystem<System> = SharedSystem::new();

/// Tick interrupt - fires once per second
#[interrupt]
fn TIMER_IRQ_0() {
    if let Some(state) = SYSTEM.on_timer_interrupt() {
        rprintln!("timer: {:?}", state);
    }
}

/// Button interrupt - falling edge on GPIO16
#[interrupt]
fn IO_IRQ_BANK0() {
    if let Some(Ok(ButtonEvent::Advanced(state))) = SYSTEM.on_button_interrupt() {
        rprintln!("button: {:?}", state);
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Traffic Light ===");

    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let alarm = timer.alarm_0().unwrap();

    let lamps = PinLights::new(
        pins.gpio13.into_push_pull_output(),
        pins.gpio14.into_push_pull_output(),
        pins.gpio15.into_push_pull_output(),
        ActiveLevel::High,
    );
    let button = EdgeButton::new(pins.gpio16.into_pull_up_input());

    let config = ControllerConfig::new().with_clock(TICK_CLOCK);
    let system = TrafficLightSystem::new(lamps, AlarmTicker::new(alarm), button, timer, config)
        .unwrap();
    SYSTEM.init(system);
    rprintln!("Red. Advancing every 5 s or on button press");

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    loop {
        cortex_m::asm::wfi();
    }
}
