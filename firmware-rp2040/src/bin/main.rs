#![no_std]
#![no_main]

use defmt::{debug, error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use embassy_rp::watchdog::Watchdog;
use embassy_time::{Delay, Timer};
use mousebot_core::{
    Dispatcher, FrameBuffer, ImuConfig, ImuOpHandler, IoTransport, MadgwickFilter,
    OperationRegistry, Outcome,
};
use mousebot_rp2040::config::{
    BAUD_RATE, I2C_FREQUENCY, IMU_I2C_ADDRESS, LOOP_PERIOD, STATS_LOG_INTERVAL, UART_RX_BUFFER,
    UART_TX_BUFFER, WATCHDOG_TIMEOUT,
};
use mousebot_rp2040::{EmbassyClock, HardwareWatchdog, Lsm6dsox};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Request/response storage, shared by every loop iteration.
static FRAME_BUFFER: StaticCell<FrameBuffer> = StaticCell::new();

/// UART ring buffers.
static UART_TX_BUF: StaticCell<[u8; UART_TX_BUFFER]> = StaticCell::new();
static UART_RX_BUF: StaticCell<[u8; UART_RX_BUFFER]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Mousebot controller starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Watchdog Setup ---
    let mut watchdog = Watchdog::new(p.WATCHDOG);
    watchdog.start(WATCHDOG_TIMEOUT);

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let uart = BufferedUart::new(
        p.UART0,
        p.PIN_0, // TX
        p.PIN_1, // RX
        Irqs,
        UART_TX_BUF.init([0; UART_TX_BUFFER]),
        UART_RX_BUF.init([0; UART_RX_BUFFER]),
        uart_config,
    );

    // --- IMU Setup ---
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY;

    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_13, // SCL
        p.PIN_12, // SDA
        i2c_config,
    );
    let imu = ImuOpHandler::new(
        Lsm6dsox::new(i2c, IMU_I2C_ADDRESS),
        MadgwickFilter::new(),
        EmbassyClock,
        Delay,
        ImuConfig::default(),
    );

    // --- Dispatcher ---
    let mut dispatcher = Dispatcher::new(
        IoTransport::new(uart),
        HardwareWatchdog::new(watchdog),
        OperationRegistry::new(imu),
    );
    dispatcher.init();

    let buf = FRAME_BUFFER.init(FrameBuffer::new());

    info!("Mousebot controller initialized, waiting for requests...");

    let mut iterations: u32 = 0;
    loop {
        if let Outcome::Dropped(kind) = dispatcher.poll_once(buf) {
            error!("Response dropped: {}", kind);
        }

        iterations = iterations.wrapping_add(1);
        if iterations % STATS_LOG_INTERVAL == 0 {
            debug!("Dispatch stats: {}", dispatcher.stats());
        }

        Timer::after(LOOP_PERIOD).await;
    }
}
