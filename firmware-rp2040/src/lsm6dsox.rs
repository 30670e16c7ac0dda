//! Minimal blocking LSM6DSOX driver over `embedded-hal` I2C.
//!
//! Configures both channels at 104 Hz with the accelerometer at ±2 g and the
//! gyroscope at ±250 dps, then reads them back in g and degrees per second.

use embedded_hal::i2c::I2c;
use mousebot_core::{ImuSensor, SensorError};
use mousebot_proto::Vector3;

const WHO_AM_I: u8 = 0x0F;
const CTRL1_XL: u8 = 0x10;
const CTRL2_G: u8 = 0x11;
const CTRL3_C: u8 = 0x12;
const STATUS_REG: u8 = 0x1E;
const OUTX_L_G: u8 = 0x22;
const OUTX_L_A: u8 = 0x28;

const DEVICE_ID: u8 = 0x6C;

/// 104 Hz output rate, lowest full scale.
const ODR_104_HZ: u8 = 0x40;
/// Block data update plus register auto-increment.
const BDU_IF_INC: u8 = 0x44;

/// g per LSB at ±2 g.
const ACCEL_SCALE: f32 = 0.000_061;
/// dps per LSB at ±250 dps.
const GYRO_SCALE: f32 = 0.008_75;

pub struct Lsm6dsox<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Lsm6dsox<I> {
    #[must_use]
    pub fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus.
    pub fn release(self) -> I {
        self.i2c
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, SensorError> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut value)
            .map_err(|_| SensorError::Bus)?;
        Ok(value[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| SensorError::Bus)
    }

    fn read_axes(&mut self, first_reg: u8, scale: f32) -> Result<Vector3, SensorError> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[first_reg], &mut raw)
            .map_err(|_| SensorError::Bus)?;

        let axis = |lo: usize| f32::from(i16::from_le_bytes([raw[lo], raw[lo + 1]])) * scale;
        Ok(Vector3::new(axis(0), axis(2), axis(4)))
    }

    fn reachable(&mut self) -> bool {
        self.read_register(STATUS_REG).is_ok()
    }
}

impl<I: I2c> ImuSensor for Lsm6dsox<I> {
    fn begin(&mut self) -> Result<(), SensorError> {
        if self.read_register(WHO_AM_I)? != DEVICE_ID {
            return Err(SensorError::NotFound);
        }
        self.write_register(CTRL3_C, BDU_IF_INC)?;
        self.write_register(CTRL1_XL, ODR_104_HZ)?;
        self.write_register(CTRL2_G, ODR_104_HZ)
    }

    fn acceleration_available(&mut self) -> bool {
        self.reachable()
    }

    fn gyroscope_available(&mut self) -> bool {
        self.reachable()
    }

    fn read_acceleration(&mut self) -> Result<Vector3, SensorError> {
        self.read_axes(OUTX_L_A, ACCEL_SCALE)
    }

    fn read_gyroscope(&mut self) -> Result<Vector3, SensorError> {
        self.read_axes(OUTX_L_G, GYRO_SCALE)
    }
}
