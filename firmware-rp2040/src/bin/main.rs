#![no_std]
#![no_main]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use heading_monitor_rp2040::{
    DisplaySink, HeadingSnapshot, HeadingTracker, ResetButton, SentenceSource, SerialDisplay,
    UartSentenceSource,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART0_IRQ => embassy_rp::uart::InterruptHandler<UART0>;
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

/// NMEA-0183 line rate for the heading sensor.
const SENSOR_BAUDRATE: u32 = 4_800;

/// Line rate of the serial character display.
const DISPLAY_BAUDRATE: u32 = 9_600;

/// Signal for passing snapshots from the reader to the display task.
/// Using Signal instead of Channel provides "latest value wins" semantics,
/// which is appropriate here: only the most recent tracker state matters.
static SNAPSHOT_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, HeadingSnapshot>> =
    StaticCell::new();

/// Signal raised by the button task to request a heading reset.
static RESET_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, ()>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Heading monitor starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let snapshots: &'static Signal<CriticalSectionRawMutex, HeadingSnapshot> =
        SNAPSHOT_SIGNAL.init(Signal::new());
    let reset: &'static Signal<CriticalSectionRawMutex, ()> = RESET_SIGNAL.init(Signal::new());

    // --- Sensor UART ---
    let mut sensor_config = UartConfig::default();
    sensor_config.baudrate = SENSOR_BAUDRATE;

    let sensor_uart = Uart::new(
        p.UART0,
        p.PIN_0, // TX (unused)
        p.PIN_1, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        sensor_config,
    );
    let (_tx, sensor_rx) = sensor_uart.split();
    let source = UartSentenceSource::new(sensor_rx);

    // --- Display UART ---
    let mut display_config = UartConfig::default();
    display_config.baudrate = DISPLAY_BAUDRATE;

    let display_uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX (unused)
        Irqs,
        p.DMA_CH2,
        p.DMA_CH3,
        display_config,
    );
    let (display_tx, _rx) = display_uart.split();
    let display = SerialDisplay::new(display_tx);

    // --- Reset button ---
    let button = ResetButton::new(Input::new(p.PIN_16, Pull::Up));

    // On-board LED for error indication
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(reader_task(source, snapshots, reset, led)).unwrap();
    spawner.spawn(display_task(display, snapshots)).unwrap();
    spawner.spawn(button_task(button, reset)).unwrap();

    info!("Heading monitor initialized, waiting for sentences...");
}

/// Reader task - feeds sensor bytes through the parser, owns the heading
/// tracker, and handles reset requests.
///
/// The tracker is confined to this task; other tasks only ever see
/// immutable snapshots, so no locking is needed.
#[embassy_executor::task]
async fn reader_task(
    mut source: UartSentenceSource<'static>,
    snapshots: &'static Signal<CriticalSectionRawMutex, HeadingSnapshot>,
    reset: &'static Signal<CriticalSectionRawMutex, ()>,
    mut led: Output<'static>,
) {
    let mut tracker = HeadingTracker::new();

    // Paint the unset state before the first sentence arrives.
    snapshots.signal(tracker.snapshot());

    loop {
        match select(source.receive(), reset.wait()).await {
            Either::First(Ok(sentence)) => {
                if !sentence.checksum_valid() {
                    // Surfaced but not filtered: the tracker rejects
                    // corrupted numeric fields on its own.
                    warn!("checksum mismatch: {=str}", sentence.raw());
                }
                tracker.on_sentence(&sentence);
                snapshots.signal(tracker.snapshot());
            }
            Either::First(Err(e)) => {
                error!("sensor input error: {:?}", e);
                // Keep the last known good state; just flag the fault.
                led.toggle();
            }
            Either::Second(()) => {
                info!("headings reset");
                tracker.reset();
                snapshots.signal(tracker.snapshot());
            }
        }
    }
}

/// Display task - waits for snapshots and repaints the display.
#[embassy_executor::task]
async fn display_task(
    mut display: SerialDisplay<'static>,
    snapshots: &'static Signal<CriticalSectionRawMutex, HeadingSnapshot>,
) {
    loop {
        let snapshot = snapshots.wait().await;
        if let Err(e) = display.show(&snapshot).await {
            error!("display error: {:?}", e);
        }
    }
}

/// Button task - raises a reset request per debounced press.
#[embassy_executor::task]
async fn button_task(
    mut button: ResetButton<'static>,
    reset: &'static Signal<CriticalSectionRawMutex, ()>,
) {
    loop {
        button.wait_for_press().await;
        reset.signal(());
    }
}
