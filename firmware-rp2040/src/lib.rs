//! Mousebot controller firmware for RP2040.
//!
//! This crate wires the platform-agnostic dispatcher from [`mousebot_core`]
//! to RP2040 peripherals.
//!
//! # Overview
//!
//! The firmware runs on an Arduino Nano RP2040 Connect and:
//! 1. Receives COBS-framed requests over UART0 (115200 baud, 8N1)
//! 2. Routes them to the operation handler for their op code
//! 3. Answers every frame with a telemetry or error response
//!
//! A hardware watchdog resets the board if the loop stalls for 5 seconds.
//!
//! # Modules
//!
//! - [`config`]: Baud rate, timing, and pin assignments
//! - [`board`]: Watchdog and clock adapters ([`HardwareWatchdog`], [`EmbassyClock`])
//! - [`lsm6dsox`]: On-board IMU driver ([`Lsm6dsox`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent reset)

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

pub mod board;
pub mod config;
pub mod lsm6dsox;

pub use board::{EmbassyClock, HardwareWatchdog};
pub use lsm6dsox::Lsm6dsox;
