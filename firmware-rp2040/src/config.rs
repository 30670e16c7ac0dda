//! Board configuration.
//!
//! | Function  | GPIO | Description                  |
//! |-----------|------|------------------------------|
//! | UART0 TX  | 0    | Serial transmit (responses)  |
//! | UART0 RX  | 1    | Serial receive (requests)    |
//! | I2C0 SDA  | 12   | IMU data                     |
//! | I2C0 SCL  | 13   | IMU clock                    |
//!
//! Pin numbers match the Arduino Nano RP2040 Connect, whose on-board
//! LSM6DSOX sits on I2C0.

use embassy_time::Duration;
use mousebot_proto::BUF_CAP;

/// Serial link speed, 8N1.
pub const BAUD_RATE: u32 = 115_200;

/// Hardware watchdog timeout. The loop feeds it every [`LOOP_PERIOD`].
pub const WATCHDOG_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause between dispatch iterations.
pub const LOOP_PERIOD: Duration = Duration::from_millis(50);

/// UART ring buffer sizes. One full frame fits in each.
pub const UART_TX_BUFFER: usize = BUF_CAP;
pub const UART_RX_BUFFER: usize = BUF_CAP;

/// IMU bus speed (fast mode).
pub const I2C_FREQUENCY: u32 = 400_000;

/// LSM6DSOX address with SA0 low.
pub const IMU_I2C_ADDRESS: u8 = 0x6A;

/// Iterations between two statistics log lines.
pub const STATS_LOG_INTERVAL: u32 = 200;
