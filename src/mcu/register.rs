//! LPC43xx register map for the GPIO and SCU blocks.
//!
//! All register traffic goes through [`read_reg32`] and [`write_reg32`]. The
//! `regrw_idx!` families below only add a fixed base address to a caller
//! supplied byte offset, so every address the driver touches is produced by
//! the offset helpers in this file.

use crate::{BIT, BIT_RNG};

/// Base of the GPIO block.
pub const GPIO_BASE_ADDR: u32 = 0x400f_4000;
/// Offset of the per-pin word access region within the GPIO block.
pub const GPIO_PIN_WORD_REGION: u32 = 0x1000;
/// Offset of the per-port register banks within the GPIO block.
pub const GPIO_PORT_REGION: u32 = 0x2000;
pub const GPIO_WORD_SIZE: u32 = 4;
/// Pin word slots reserved per port, regardless of how many pins are bonded out.
pub const GPIO_PIN_SLOTS_PER_PORT: u32 = 32;
pub const GPIO_PORT_WORD_SPAN: u32 = GPIO_PIN_SLOTS_PER_PORT * GPIO_WORD_SIZE;

/****************************************************
 gpio port bank fields, relative to the port base
 *****************************************************/
pub const GPIO_DIR: u32 = 0x000; // 1 = output, 0 = input
pub const GPIO_MASK: u32 = 0x080; // 1 = pin masked out of MPIN accesses
pub const GPIO_PIN: u32 = 0x100;
pub const GPIO_MPIN: u32 = 0x180;
pub const GPIO_SET: u32 = 0x200; // write-1-to-set
pub const GPIO_CLR: u32 = 0x280; // write-1-to-clear
pub const GPIO_NOT: u32 = 0x300; // write-1-to-toggle

/// Base of the System Control Unit (pin multiplexer / pad configuration).
pub const SCU_BASE_ADDR: u32 = 0x4008_6000;
pub const SCU_PINS_PER_GROUP: u32 = 32;
pub const SCU_GROUP_SPAN: u32 = SCU_PINS_PER_GROUP * GPIO_WORD_SIZE;
pub const SCU_MAX_GROUPS: u8 = 16;

#[inline(always)]
#[cfg_attr(test, mry::mry)]
pub fn read_reg32(addr: u32) -> u32 {
    unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
}

#[inline(always)]
#[cfg_attr(test, mry::mry)]
pub fn write_reg32(addr: u32, value: u32) {
    unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
}

macro_rules! regrw_idx {
    ( $x:ident, $a:expr ) => {
        paste::paste! {
            #[inline(always)]
            pub fn [<read_ $x>](i: u32) -> u32 {
                read_reg32(($a) + i)
            }

            #[inline(always)]
            pub fn [<write_ $x>](value: u32, i: u32) {
                write_reg32(($a) + i, value)
            }
        }
    };
}

macro_rules! regw_idx {
    ( $x:ident, $a:expr ) => {
        paste::paste! {
            #[inline(always)]
            pub fn [<write_ $x>](value: u32, i: u32) {
                write_reg32(($a) + i, value)
            }
        }
    };
}

/****************************************************
 gpio port banks: index with gpio_port_offset()
 *****************************************************/
regrw_idx!(reg_gpio_dir, GPIO_BASE_ADDR + GPIO_PORT_REGION + GPIO_DIR);
regrw_idx!(reg_gpio_mask, GPIO_BASE_ADDR + GPIO_PORT_REGION + GPIO_MASK);
regrw_idx!(reg_gpio_pin, GPIO_BASE_ADDR + GPIO_PORT_REGION + GPIO_PIN);
regrw_idx!(reg_gpio_mpin, GPIO_BASE_ADDR + GPIO_PORT_REGION + GPIO_MPIN);
regrw_idx!(reg_gpio_set, GPIO_BASE_ADDR + GPIO_PORT_REGION + GPIO_SET);
regw_idx!(reg_gpio_clr, GPIO_BASE_ADDR + GPIO_PORT_REGION + GPIO_CLR);
regw_idx!(reg_gpio_not, GPIO_BASE_ADDR + GPIO_PORT_REGION + GPIO_NOT);

/****************************************************
 gpio pin words: index with gpio_pin_word_offset()
 *****************************************************/
regrw_idx!(reg_gpio_w, GPIO_BASE_ADDR + GPIO_PIN_WORD_REGION);

/****************************************************
 scu pin configuration (SFSPx_y): index with scu_sfs_offset()
 *****************************************************/
regrw_idx!(reg_scu_sfs, SCU_BASE_ADDR);

#[allow(non_camel_case_types)]
#[derive(Clone, Copy)]
#[repr(u32)]
pub enum FLD_SFS {
    MODE =      BIT_RNG!(0, 2),
    EPD_EPUN =  BIT_RNG!(3, 4),     // read as a ResistorMode
    EHS =       BIT!(5),            // fast slew
    EZI =       BIT!(6),            // input buffer enable
    ZIF =       BIT!(7),            // 1 = glitch filter bypassed
}

/// Byte offset of a port's bank within each field of the port region.
///
/// The banks are interleaved: port `n` occupies word `n` of every field, so
/// this one offset selects the port for all seven fields.
#[inline(always)]
pub const fn gpio_port_offset(port: u8) -> u32 {
    port as u32 * GPIO_WORD_SIZE
}

/// Byte offset of a pin's word register within the pin word region.
#[inline(always)]
pub const fn gpio_pin_word_offset(port: u8, pin: u8) -> u32 {
    port as u32 * GPIO_PORT_WORD_SPAN + pin as u32 * GPIO_WORD_SIZE
}

/// Absolute base address of a port's bank (its direction field).
pub const fn gpio_port_bank_addr(port: u8) -> u32 {
    GPIO_BASE_ADDR + GPIO_PORT_REGION + gpio_port_offset(port)
}

/// Absolute address of a pin's word register.
pub const fn gpio_pin_word_addr(port: u8, pin: u8) -> u32 {
    GPIO_BASE_ADDR + GPIO_PIN_WORD_REGION + gpio_pin_word_offset(port, pin)
}

#[inline(always)]
pub const fn scu_sfs_offset(group: u8, pin: u8) -> u32 {
    group as u32 * SCU_GROUP_SPAN + pin as u32 * GPIO_WORD_SIZE
}

pub const fn scu_sfs_addr(group: u8, pin: u8) -> u32 {
    SCU_BASE_ADDR + scu_sfs_offset(group, pin)
}
