use crate::{
    blink::{driver::{BlinkDriver, DriverState}, StatusSink},
    config::DeviceConfig,
    hardware::PinInterface,
};

impl<'a, P: PinInterface, S: StatusSink> BlinkDriver<'a, P, S> {
    pub fn new(pins: &'a mut P, status: &'a mut S, config: &DeviceConfig) -> Self {
        Self {
            pins,
            status,
            pin_config: config.pins,
            pwm_range: config.pwm_range,
            timing: config.timing,
            state: DriverState::Idle,
        }
    }
}
