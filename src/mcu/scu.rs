//! System Control Unit pad configuration.
//!
//! Every package pin `Px_y` has one SFS register selecting its function and
//! setting up the pad: pull resistors, slew rate, input buffer and glitch
//! filter. The GPIO layer only ever needs [`PinMux::configure_pin_gpio`];
//! the rest is here so a board can set up the other pads it owns.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::error::{Error, Result};
use crate::mcu::register::{
    read_reg_scu_sfs, scu_sfs_offset, write_reg_scu_sfs, FLD_SFS, SCU_MAX_GROUPS, SCU_PINS_PER_GROUP,
};
use crate::{GET_FLD, MASK_VAL};

/// Pull resistor setting, as encoded in the EPD/EPUN pair.
///
/// EPUN is active-low, which is why the encoding reads backwards: `0b00`
/// enables the pull-up and `0b10` disables both resistors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum ResistorMode {
    PullUp = 0b00,
    Repeater = 0b01,
    NoPull = 0b10,
    PullDown = 0b11,
}

bitflags::bitflags! {
    /// Single-bit pad options of an SFS register.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PadFlags: u32 {
        const FAST_SLEW = FLD_SFS::EHS as u32;
        const INPUT_BUFFER = FLD_SFS::EZI as u32;
        const NO_GLITCH_FILTER = FLD_SFS::ZIF as u32;
    }
}

/// Decoded contents of one SFS register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScuPinConfig {
    /// Function select, 0..=7. Higher bits are dropped when packed.
    pub function: u8,
    pub resistors: ResistorMode,
    pub flags: PadFlags,
}

impl ScuPinConfig {
    /// Plain digital I/O: input buffer on, normal slew, glitch filter on.
    pub const fn gpio(function: u8, resistors: ResistorMode) -> Self {
        Self {
            function,
            resistors,
            flags: PadFlags::INPUT_BUFFER,
        }
    }

    /// High speed I/O: input buffer on, fast slew, glitch filter bypassed.
    pub const fn fast_io(function: u8, resistors: ResistorMode) -> Self {
        Self {
            function,
            resistors,
            flags: PadFlags::INPUT_BUFFER
                .union(PadFlags::FAST_SLEW)
                .union(PadFlags::NO_GLITCH_FILTER),
        }
    }

    /// UART pads are GPIO pads without pulls.
    pub const fn uart(function: u8) -> Self {
        Self::gpio(function, ResistorMode::NoPull)
    }

    pub fn pack(&self) -> u32 {
        MASK_VAL!(
            FLD_SFS::MODE as u32, self.function as u32,
            FLD_SFS::EPD_EPUN as u32, self.resistors as u32
        ) | self.flags.bits()
    }

    pub fn unpack(word: u32) -> Self {
        let resistors = GET_FLD!(word, FLD_SFS::EPD_EPUN as u32);

        Self {
            function: GET_FLD!(word, FLD_SFS::MODE as u32) as u8,
            // every 2-bit value is a valid mode
            resistors: ResistorMode::from_u32(resistors).unwrap_or(ResistorMode::PullUp),
            flags: PadFlags::from_bits_truncate(word),
        }
    }
}

/// The pad configuration hook the GPIO pinmux layer drives.
pub trait PinMux {
    /// Puts SCU pin `Px_y` (`group` = x, `pin` = y) into `function` as a GPIO
    /// pad with the given pull resistors.
    fn configure_pin_gpio(&mut self, group: u8, pin: u8, function: u8, resistors: ResistorMode) -> Result<()>;
}

/// Checks that `Px_y` names an SFS register inside the SCU block.
pub fn validate_scu_pin(group: u8, pin: u8) -> Result<()> {
    if group >= SCU_MAX_GROUPS || pin as u32 >= SCU_PINS_PER_GROUP {
        warn!("scu: requested a non-existent pin (P{}_{})", group, pin);
        return Err(Error::InvalidArgument);
    }

    Ok(())
}

/// Register-backed SCU.
#[derive(Debug, Default)]
pub struct Scu;

impl Scu {
    pub const fn new() -> Self {
        Scu
    }

    /// Writes `config` to the SFS register of `Px_y`.
    ///
    /// Out-of-range groups or pins are rejected before any register access.
    pub fn configure_pin(&mut self, group: u8, pin: u8, config: ScuPinConfig) -> Result<()> {
        validate_scu_pin(group, pin)?;

        let word = config.pack();

        debug!("scu: P{}_{} sfs <= {:#04x}", group, pin, word);
        write_reg_scu_sfs(word, scu_sfs_offset(group, pin));

        Ok(())
    }

    pub fn configure_pin_fast_io(&mut self, group: u8, pin: u8, function: u8, resistors: ResistorMode) -> Result<()> {
        self.configure_pin(group, pin, ScuPinConfig::fast_io(function, resistors))
    }

    pub fn configure_pin_uart(&mut self, group: u8, pin: u8, function: u8) -> Result<()> {
        self.configure_pin(group, pin, ScuPinConfig::uart(function))
    }

    /// Reads back the current configuration of `Px_y`.
    pub fn pin_config(&self, group: u8, pin: u8) -> Result<ScuPinConfig> {
        validate_scu_pin(group, pin)?;

        Ok(ScuPinConfig::unpack(read_reg_scu_sfs(scu_sfs_offset(group, pin))))
    }
}

impl PinMux for Scu {
    fn configure_pin_gpio(&mut self, group: u8, pin: u8, function: u8, resistors: ResistorMode) -> Result<()> {
        self.configure_pin(group, pin, ScuPinConfig::gpio(function, resistors))
    }
}
