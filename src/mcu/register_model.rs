//! Behavioural model of the LPC43xx GPIO and SCU register blocks for host tests.
//!
//! [`install`] points the `read_reg32`/`write_reg32` mocks at the model, so a
//! test that holds `#[mry::lock(read_reg32, write_reg32)]` can drive the real
//! driver code and then inspect what the hardware would have latched. Accesses
//! outside the modelled blocks panic, which turns address arithmetic mistakes
//! into test failures.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use mry::Any;
use once_cell::sync::Lazy;

use crate::common::bit::ONES_32;
use crate::mcu::register::*;

const MODELLED_PORTS: usize = GPIO_PIN_SLOTS_PER_PORT as usize;

#[derive(Default)]
struct GpioModel {
    dir: [u32; MODELLED_PORTS],
    mask: [u32; MODELLED_PORTS],
    out: [u32; MODELLED_PORTS],
    input: [u32; MODELLED_PORTS],
    sfs: HashMap<u32, u32>,
    reads: usize,
    writes: usize,
}

static MODEL: Lazy<Mutex<GpioModel>> = Lazy::new(|| Mutex::new(GpioModel::default()));

fn model() -> MutexGuard<'static, GpioModel> {
    MODEL.lock().unwrap_or_else(PoisonError::into_inner)
}

enum Target {
    Bank { field: u32, port: usize },
    Word { port: usize, pin: u32 },
    Sfs(u32),
}

fn decode(addr: u32) -> Target {
    let port_region = GPIO_BASE_ADDR + GPIO_PORT_REGION;
    let word_region = GPIO_BASE_ADDR + GPIO_PIN_WORD_REGION;
    let scu_end = SCU_BASE_ADDR + SCU_MAX_GROUPS as u32 * SCU_GROUP_SPAN;

    assert_eq!(addr % GPIO_WORD_SIZE, 0, "unaligned register access at {addr:#x}");

    if (port_region..port_region + GPIO_NOT + GPIO_PORT_WORD_SPAN).contains(&addr) {
        let off = addr - port_region;
        Target::Bank {
            field: off & !(GPIO_PORT_WORD_SPAN - 1),
            port: ((off & (GPIO_PORT_WORD_SPAN - 1)) / GPIO_WORD_SIZE) as usize,
        }
    } else if (word_region..port_region).contains(&addr) {
        let off = addr - word_region;
        Target::Word {
            port: (off / GPIO_PORT_WORD_SPAN) as usize,
            pin: (off % GPIO_PORT_WORD_SPAN) / GPIO_WORD_SIZE,
        }
    } else if (SCU_BASE_ADDR..scu_end).contains(&addr) {
        Target::Sfs(addr)
    } else {
        panic!("access to unmodelled register {addr:#x}");
    }
}

impl GpioModel {
    fn state(&self, port: usize) -> u32 {
        (self.out[port] & self.dir[port]) | (self.input[port] & !self.dir[port])
    }

    fn read(&mut self, addr: u32) -> u32 {
        self.reads += 1;

        match decode(addr) {
            Target::Bank { field, port } => match field {
                GPIO_DIR => self.dir[port],
                GPIO_MASK => self.mask[port],
                GPIO_PIN => self.state(port),
                GPIO_MPIN => self.state(port) & !self.mask[port],
                GPIO_SET => self.out[port],
                _ => panic!("read of write-only register {addr:#x}"),
            },
            Target::Word { port, pin } => {
                if self.state(port) & (1 << pin) != 0 {
                    ONES_32
                } else {
                    0
                }
            }
            Target::Sfs(addr) => self.sfs.get(&addr).copied().unwrap_or(0),
        }
    }

    fn write(&mut self, addr: u32, value: u32) {
        self.writes += 1;

        match decode(addr) {
            Target::Bank { field, port } => match field {
                GPIO_DIR => self.dir[port] = value,
                GPIO_MASK => self.mask[port] = value,
                GPIO_PIN => self.out[port] = value,
                GPIO_MPIN => {
                    let mask = self.mask[port];
                    self.out[port] = (self.out[port] & mask) | (value & !mask);
                }
                GPIO_SET => self.out[port] |= value,
                GPIO_CLR => self.out[port] &= !value,
                GPIO_NOT => self.out[port] ^= value,
                _ => unreachable!(),
            },
            Target::Word { port, pin } => {
                if value != 0 {
                    self.out[port] |= 1 << pin;
                } else {
                    self.out[port] &= !(1 << pin);
                }
            }
            Target::Sfs(addr) => {
                self.sfs.insert(addr, value);
            }
        }
    }
}

/// Resets the model and routes both register primitives into it.
pub fn install() {
    *model() = GpioModel::default();

    mock_read_reg32(Any).returns_with(|addr: u32| model().read(addr));
    mock_write_reg32(Any, Any).returns_with(|addr: u32, value: u32| model().write(addr, value));
}

/// Number of register reads and writes seen since [`install`].
pub fn accesses() -> (usize, usize) {
    let m = model();
    (m.reads, m.writes)
}

pub fn dir(port: u8) -> u32 {
    model().dir[port as usize]
}

pub fn out(port: u8) -> u32 {
    model().out[port as usize]
}

pub fn mask(port: u8) -> u32 {
    model().mask[port as usize]
}

pub fn sfs(group: u8, pin: u8) -> u32 {
    model().sfs.get(&scu_sfs_addr(group, pin)).copied().unwrap_or(0)
}

/// Presets a port's registers without counting as driver accesses.
pub fn preset(port: u8, dir: u32, out: u32) {
    let mut m = model();
    m.dir[port as usize] = dir;
    m.out[port as usize] = out;
}

/// Drives the external level seen on a port's input pins.
pub fn drive_inputs(port: u8, levels: u32) {
    model().input[port as usize] = levels;
}
