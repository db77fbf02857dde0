//! Text console: the top-level menu, the Configuration Collector and the
//! Confirmation Gate.
//!
//! Every prompt retries in a loop until it gets an acceptable number. The only
//! way out of a prompt without a value is the input stream closing.

mod new;
mod read_number;
mod clear_screen;
mod say;
mod prompt_until;
mod select_menu;
mod select_led;
mod enter_frequency;
mod enter_brightness;
mod collect_blink_config;
mod confirm_blink_config;

use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    TurnOff,
    TurnOn,
    Blink,
    Exit,
}

impl MenuSelection {
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            0 => Some(MenuSelection::TurnOff),
            1 => Some(MenuSelection::TurnOn),
            2 => Some(MenuSelection::Blink),
            3 => Some(MenuSelection::Exit),
            _ => None,
        }
    }
}

/// Confirmation Gate outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn output(&self) -> &W {
        &self.output
    }
}
