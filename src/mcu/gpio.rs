use crate::error::{Error, Result};
use crate::mcu::register::{
    gpio_pin_word_addr, gpio_pin_word_offset, gpio_port_bank_addr, gpio_port_offset,
    read_reg_gpio_dir, read_reg_gpio_mpin, read_reg_gpio_pin, read_reg_gpio_w,
    write_reg_gpio_clr, write_reg_gpio_dir, write_reg_gpio_mask, write_reg_gpio_mpin,
    write_reg_gpio_not, write_reg_gpio_set, write_reg_gpio_w,
};
use crate::{BIT, BM_CLR, BM_IS_SET, BM_SET};

/// Number of GPIO ports the part exposes.
pub const GPIO_MAX_PORTS: u8 = 6;
/// Highest number of pins any single port carries.
pub const GPIO_MAX_PORT_BITS: u8 = 20;

/// A logical GPIO line, named by port and bit within that port.
///
/// This is the `GPIOn[m]` numbering from the user manual, not the physical
/// `Px_y` package pin; see [`crate::mcu::gpio_map`] for the translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LogicalPin {
    pub port: u8,
    pub pin: u8,
}

impl LogicalPin {
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }

    /// One-bit mask selecting this pin within its port's registers.
    ///
    /// Only meaningful for a pin that passed [`validate_pin`]; a bit index
    /// past the register width gives an empty mask.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        match 1u32.checked_shl(self.pin as u32) {
            Some(mask) => mask,
            None => 0,
        }
    }
}

/// Convenience constructor mirroring the usual `gpio_pin(port, pin)` spelling.
#[inline(always)]
pub const fn gpio_pin(port: u8, pin: u8) -> LogicalPin {
    LogicalPin::new(port, pin)
}

/// GPIO pin direction.
///
/// Matches the direction register encoding:
/// * `Input`: bit clear (value 0)
/// * `Output`: bit set (value 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Input = 0,
    Output = 1,
}

/// Checks that `port` names a port the part actually has.
///
/// # Returns
///
/// * `Ok(())` for ports `0..GPIO_MAX_PORTS`
/// * `Err(Error::InvalidArgument)` otherwise, after logging a warning
pub fn validate_port(port: u8) -> Result<()> {
    if port >= GPIO_MAX_PORTS {
        warn!("gpio: requested a non-existent port (port {})", port);
        return Err(Error::InvalidArgument);
    }

    Ok(())
}

/// Checks that both the port and the bit index of `pin` exist.
pub fn validate_pin(pin: LogicalPin) -> Result<()> {
    validate_port(pin.port)?;

    if pin.pin >= GPIO_MAX_PORT_BITS {
        warn!(
            "gpio: requested a non-existent pin (port {}, pin {})",
            pin.port,
            pin.pin
        );
        return Err(Error::InvalidArgument);
    }

    Ok(())
}

/// Typed view of one port's register bank.
///
/// Holding a `PortBank` means the port index has been validated, so none of
/// the methods can fail. The bank lives at [`gpio_port_bank_addr`]; its
/// fields are fixed offsets from there.
///
/// # Notes
///
/// * The direction update and the masked value protocol each take more than
///   one register access. Both run inside a critical section so an interrupt
///   handler touching the same port cannot observe or clobber the
///   intermediate state.
/// * Set/clear/toggle are single write-1-to-affect accesses and need no lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortBank {
    port: u8,
}

impl PortBank {
    pub fn new(port: u8) -> Result<Self> {
        validate_port(port)?;
        Ok(Self { port })
    }

    pub fn port(&self) -> u8 {
        self.port
    }

    /// Absolute address of this bank (its direction field).
    pub fn addr(&self) -> u32 {
        gpio_port_bank_addr(self.port)
    }

    #[inline(always)]
    fn offset(&self) -> u32 {
        gpio_port_offset(self.port)
    }

    /// Current direction word: 1 = output, 0 = input.
    pub fn direction(&self) -> u32 {
        read_reg_gpio_dir(self.offset())
    }

    /// Updates the direction of the pins selected by `mask`.
    ///
    /// # Parameters
    ///
    /// * `mask` - Pins whose direction is being set
    /// * `output_mask` - Within `mask`, set bits become outputs and clear bits inputs
    ///
    /// # Algorithm
    ///
    /// 1. Read the direction register
    /// 2. Clear every bit selected by `mask`
    /// 3. Set the bits of `output_mask` that fall inside `mask`
    /// 4. Write the result back
    ///
    /// # Notes
    ///
    /// * Bits outside `mask` keep their direction even if `output_mask` has
    ///   them set
    pub fn set_direction(&self, mask: u32, output_mask: u32) {
        let offset = self.offset();

        critical_section::with(|_| {
            let mut val = read_reg_gpio_dir(offset);

            BM_CLR!(val, mask);
            BM_SET!(val, output_mask & mask);

            write_reg_gpio_dir(val, offset);
        });
    }

    /// Raw pin state of the whole port.
    pub fn pins(&self) -> u32 {
        read_reg_gpio_pin(self.offset())
    }

    /// Writes `value` to the pins selected by `mask`, leaving the others alone.
    ///
    /// # Algorithm
    ///
    /// 1. Load the hardware mask register
    /// 2. Write `value` through the masked pin register; the hardware only
    ///    latches the unmasked bits
    ///
    /// # Notes
    ///
    /// * The hardware mask register is active-low: a 1 blocks the pin. The
    ///   complement of `mask` is written so that set bits in `mask` are the
    ///   ones affected
    pub fn write_masked(&self, mask: u32, value: u32) {
        let offset = self.offset();

        critical_section::with(|_| {
            write_reg_gpio_mask(!mask, offset);
            write_reg_gpio_mpin(value, offset);
        });
    }

    /// Reads the pins selected by `mask`; all other bits read as 0.
    pub fn read_masked(&self, mask: u32) -> u32 {
        let offset = self.offset();

        critical_section::with(|_| {
            write_reg_gpio_mask(!mask, offset);
            read_reg_gpio_mpin(offset)
        })
    }

    #[inline(always)]
    pub fn set_bits(&self, mask: u32) {
        write_reg_gpio_set(mask, self.offset());
    }

    #[inline(always)]
    pub fn clear_bits(&self, mask: u32) {
        write_reg_gpio_clr(mask, self.offset());
    }

    #[inline(always)]
    pub fn toggle_bits(&self, mask: u32) {
        write_reg_gpio_not(mask, self.offset());
    }
}

/// Typed view of a single pin's word register.
///
/// The register reads as [`ONES_32`](crate::common::bit::ONES_32) while the
/// pin is high and zero while it is low; writing any nonzero value drives the
/// pin high.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinWord {
    pin: LogicalPin,
}

impl PinWord {
    pub fn new(pin: LogicalPin) -> Result<Self> {
        validate_pin(pin)?;
        Ok(Self { pin })
    }

    pub fn pin(&self) -> LogicalPin {
        self.pin
    }

    /// Absolute address of the word register.
    pub fn addr(&self) -> u32 {
        gpio_pin_word_addr(self.pin.port, self.pin.pin)
    }

    /// Raw register value: [`ONES_32`](crate::common::bit::ONES_32) for high, 0 for low.
    #[inline(always)]
    pub fn read(&self) -> u32 {
        read_reg_gpio_w(gpio_pin_word_offset(self.pin.port, self.pin.pin))
    }

    #[inline(always)]
    pub fn write(&self, high: bool) {
        write_reg_gpio_w(high as u32, gpio_pin_word_offset(self.pin.port, self.pin.pin));
    }
}

/// Configures a GPIO port's pins to be either inputs or outputs.
///
/// # Parameters
///
/// * `port` - The port to configure
/// * `mask` - Selects which port bits are being configured
/// * `output_mask` - Bits set for each output and clear for each input
pub fn gpio_set_port_direction(port: u8, mask: u32, output_mask: u32) -> Result<()> {
    PortBank::new(port)?.set_direction(mask, output_mask);
    Ok(())
}

/// Returns the direction word of a port, with a 1 for each output.
pub fn gpio_get_port_direction(port: u8) -> Result<u32> {
    Ok(PortBank::new(port)?.direction())
}

/// Makes a single pin an input or an output.
pub fn gpio_set_pin_direction(pin: LogicalPin, direction: Direction) -> Result<()> {
    validate_pin(pin)?;

    let mask = pin.mask();
    let output_mask = match direction {
        Direction::Output => mask,
        Direction::Input => 0,
    };

    gpio_set_port_direction(pin.port, mask, output_mask)
}

pub fn gpio_get_pin_direction(pin: LogicalPin) -> Result<Direction> {
    validate_pin(pin)?;

    let directions = gpio_get_port_direction(pin.port)?;
    if BM_IS_SET!(directions, pin.mask()) {
        Ok(Direction::Output)
    } else {
        Ok(Direction::Input)
    }
}

/// Sets the pins of a port selected by `mask` to the matching bits of `value`.
///
/// Uses the hardware masking feature, so pins outside `mask` are not
/// disturbed even if they change between the caller computing `value` and
/// the write landing.
pub fn gpio_set_port_value(port: u8, mask: u32, value: u32) -> Result<()> {
    PortBank::new(port)?.write_masked(mask, value);
    Ok(())
}

/// Reads the pins of a port selected by `mask`; other bits are returned as 0.
pub fn gpio_get_port_value(port: u8, mask: u32) -> Result<u32> {
    Ok(PortBank::new(port)?.read_masked(mask))
}

/// Drives every pin in `mask` high.
pub fn gpio_set_port_bits(port: u8, mask: u32) -> Result<()> {
    PortBank::new(port)?.set_bits(mask);
    Ok(())
}

/// Drives every pin in `mask` low.
pub fn gpio_clear_port_bits(port: u8, mask: u32) -> Result<()> {
    PortBank::new(port)?.clear_bits(mask);
    Ok(())
}

/// Inverts every pin in `mask`.
pub fn gpio_toggle_port_bits(port: u8, mask: u32) -> Result<()> {
    PortBank::new(port)?.toggle_bits(mask);
    Ok(())
}

/// Drives a single pin to `value` through its word register.
pub fn gpio_set_pin_value(pin: LogicalPin, value: bool) -> Result<()> {
    PinWord::new(pin)?.write(value);
    Ok(())
}

pub fn gpio_set_pin(pin: LogicalPin) -> Result<()> {
    validate_pin(pin)?;
    gpio_set_port_bits(pin.port, pin.mask())
}

pub fn gpio_clear_pin(pin: LogicalPin) -> Result<()> {
    validate_pin(pin)?;
    gpio_clear_port_bits(pin.port, pin.mask())
}

pub fn gpio_toggle_pin(pin: LogicalPin) -> Result<()> {
    validate_pin(pin)?;
    gpio_toggle_port_bits(pin.port, pin.mask())
}

/// Reads a single pin.
///
/// # Returns
///
/// * `Ok(0)` for a logic low, `Ok(1)` for a logic high
pub fn gpio_get_pin_value(pin: LogicalPin) -> Result<u8> {
    let word = PinWord::new(pin)?.read();
    Ok((word != 0) as u8)
}

/// Reads a single pin without normalising the result.
///
/// Returns [`ONES_32`](crate::common::bit::ONES_32) while the pin is high and 0 while it is low, which is
/// enough for a truthiness test. Loops that poll the same pin should hold a
/// [`PinWord`] from [`gpio_pin_register`] instead, which skips validation on
/// every read.
#[inline(always)]
pub fn gpio_fast_get_pin_value(pin: LogicalPin) -> Result<u32> {
    Ok(PinWord::new(pin)?.read())
}

/// Hands out the word register of a pin for tight polling loops.
pub fn gpio_pin_register(pin: LogicalPin) -> Result<PinWord> {
    PinWord::new(pin)
}
