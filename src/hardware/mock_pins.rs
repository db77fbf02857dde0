//! Mock pin implementation for testing

use std::collections::HashMap;

use crate::{
    error::{LadError, Result},
    hardware::{pwm_gated_level, Level, Pin, PinInterface, PinMode},
};

/// One recorded call against [`MockPins`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCall {
    SetMode(Pin, PinMode),
    WriteDigital(Pin, Level),
    CreatePwm(Pin, u32),
    WritePwm(Pin, u32),
}

/// Mock pins with a simulated millisecond clock
///
/// Every `elapsed_millis` poll advances the clock by `poll_step_ms`, so a
/// busy-polling caller always makes progress. `delay_millis` advances the
/// clock by the requested amount without sleeping.
#[derive(Debug)]
pub struct MockPins {
    calls: Vec<PinCall>,
    modes: HashMap<Pin, PinMode>,
    levels: HashMap<Pin, Level>,
    pwm: HashMap<Pin, (u32, u32)>,
    clock_ms: u64,
    poll_step_ms: u64,
    polls: u64,
}

impl MockPins {
    pub fn new() -> Self {
        Self::with_poll_step(1)
    }

    pub fn with_poll_step(poll_step_ms: u64) -> Self {
        Self {
            calls: Vec::new(),
            modes: HashMap::new(),
            levels: HashMap::new(),
            pwm: HashMap::new(),
            clock_ms: 0,
            poll_step_ms,
            polls: 0,
        }
    }

    /// Every mutating call, in order
    pub fn calls(&self) -> &[PinCall] {
        &self.calls
    }

    /// Mutating calls that touched `pin`
    pub fn calls_for(&self, pin: Pin) -> Vec<PinCall> {
        self.calls
            .iter()
            .copied()
            .filter(|call| match call {
                PinCall::SetMode(p, _)
                | PinCall::WriteDigital(p, _)
                | PinCall::CreatePwm(p, _)
                | PinCall::WritePwm(p, _) => *p == pin,
            })
            .collect()
    }

    pub fn mode(&self, pin: Pin) -> Option<PinMode> {
        self.modes.get(&pin).copied()
    }

    pub fn level(&self, pin: Pin) -> Option<Level> {
        self.levels.get(&pin).copied()
    }

    /// What the pin is really driving: a lit PWM channel reads as High,
    /// otherwise the last digital write as gated by the channel
    pub fn output_level(&self, pin: Pin) -> Option<Level> {
        match self.duty_cycle(pin) {
            Some(duty) if duty > 0 => Some(Level::High),
            duty => self.level(pin).and_then(|level| pwm_gated_level(duty, level)),
        }
    }

    pub fn duty_cycle(&self, pin: Pin) -> Option<u32> {
        self.pwm.get(&pin).map(|(_, duty)| *duty)
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Number of `elapsed_millis` calls so far
    pub fn polls(&self) -> u64 {
        self.polls
    }

    fn require_output(&self, pin: Pin) -> Result<()> {
        match self.modes.get(&pin) {
            Some(PinMode::Output) => Ok(()),
            _ => Err(LadError::Hardware(format!("pin {} is not an output", pin))),
        }
    }
}

impl Default for MockPins {
    fn default() -> Self {
        Self::new()
    }
}

impl PinInterface for MockPins {
    fn set_mode(&mut self, pin: Pin, mode: PinMode) -> Result<()> {
        self.calls.push(PinCall::SetMode(pin, mode));
        self.modes.insert(pin, mode);
        Ok(())
    }

    fn write_digital(&mut self, pin: Pin, level: Level) -> Result<()> {
        self.require_output(pin)?;
        self.calls.push(PinCall::WriteDigital(pin, level));
        self.levels.insert(pin, level);
        Ok(())
    }

    fn create_pwm_channel(&mut self, pin: Pin, range_max: u32) -> Result<()> {
        self.require_output(pin)?;
        self.calls.push(PinCall::CreatePwm(pin, range_max));
        self.pwm.insert(pin, (range_max, 0));
        Ok(())
    }

    fn write_pwm_duty_cycle(&mut self, pin: Pin, value: u32) -> Result<()> {
        let Some((range_max, duty)) = self.pwm.get_mut(&pin) else {
            return Err(LadError::Hardware(format!("pin {} has no PWM channel", pin)));
        };
        *duty = value.min(*range_max);
        self.calls.push(PinCall::WritePwm(pin, value));
        Ok(())
    }

    fn elapsed_millis(&mut self) -> u64 {
        self.polls += 1;
        self.clock_ms += self.poll_step_ms;
        self.clock_ms
    }

    fn delay_millis(&mut self, ms: u64) {
        self.clock_ms += ms;
    }
}
