//! GPIO driver for the NXP LPC43xx.
//!
//! Pins are named by their logical `GPIOn[m]` identity ([`LogicalPin`]).
//! [`mcu::gpio`] drives them through the port banks and pin word registers,
//! and [`drivers::pinmux`] routes them to their package pins through the SCU.
//!
//! The `log` feature (on by default) reports rejected arguments and pinmux
//! changes through the `log` facade. Multi-access register sequences take a
//! `critical-section`, so the final binary must link an implementation.

#![cfg_attr(not(test), no_std)]

// macros, keep first
mod fmt;

pub mod common;
pub mod drivers;
pub mod error;
pub mod mcu;

pub use drivers::pinmux::{gpio_configure_pinmux, gpio_configure_pinmux_and_resistors, gpio_configure_port_pinmuxes};
pub use error::{Error, Result};
pub use mcu::gpio::{gpio_pin, Direction, LogicalPin, PinWord, PortBank};
pub use mcu::scu::{PinMux, ResistorMode, Scu};
