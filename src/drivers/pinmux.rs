use heapless::Vec;

use crate::error::{Error, Result};
use crate::mcu::gpio::{gpio_pin, validate_port, LogicalPin, GPIO_MAX_PORT_BITS};
use crate::mcu::gpio_map::gpio_get_scu_route;
use crate::mcu::scu::{PinMux, ResistorMode};

/// Port whose pads come up in an analog-capable function and need function 4
/// to act as GPIO.
const GPIO_ANALOG_PORT: u8 = 5;

/// Pins routed by one [`gpio_configure_port_pinmuxes`] sweep.
pub type RoutedPins = Vec<LogicalPin, { GPIO_MAX_PORT_BITS as usize }>;

/// SCU function code that selects GPIO on the pads of `port`.
#[inline(always)]
pub const fn gpio_function_for_port(port: u8) -> u8 {
    if port == GPIO_ANALOG_PORT {
        4
    } else {
        0
    }
}

/// Routes a logical pin to its package pin as a GPIO and sets its pulls.
///
/// # Parameters
///
/// * `mux` - Pad configuration backend, usually [`crate::mcu::scu::Scu`]
/// * `pin` - The logical pin to route
/// * `resistors` - Pull resistor setting for the pad
///
/// # Algorithm
///
/// 1. Validate the pin and look up its SCU group and pin
/// 2. Give up if the pin is not bonded out
/// 3. Pick the GPIO function code for the port
/// 4. Hand everything to `mux` in one call
///
/// # Returns
///
/// * `Err(Error::InvalidArgument)` for an invalid or unrouted pin, in which
///   case `mux` is never called
/// * any error `mux` reports
pub fn gpio_configure_pinmux_and_resistors<M: PinMux + ?Sized>(
    mux: &mut M,
    pin: LogicalPin,
    resistors: ResistorMode,
) -> Result<()> {
    let Some(route) = gpio_get_scu_route(pin)? else {
        warn!("pinmux: GPIO{}[{}] has no package pin", pin.port, pin.pin);
        return Err(Error::InvalidArgument);
    };

    let function = gpio_function_for_port(pin.port);

    debug!(
        "pinmux: GPIO{}[{}] -> P{}_{} func {} {:?}",
        pin.port,
        pin.pin,
        route.group,
        route.pin,
        function,
        resistors
    );
    mux.configure_pin_gpio(route.group, route.pin, function, resistors)
}

/// Routes a logical pin as a GPIO with both pull resistors off.
pub fn gpio_configure_pinmux<M: PinMux + ?Sized>(mux: &mut M, pin: LogicalPin) -> Result<()> {
    gpio_configure_pinmux_and_resistors(mux, pin, ResistorMode::NoPull)
}

/// Routes every bonded-out pin of a port as a GPIO.
///
/// Pins without a package pin are skipped; only an invalid port is an error.
/// The returned list holds the pins that were routed, in bit order.
pub fn gpio_configure_port_pinmuxes<M: PinMux + ?Sized>(mux: &mut M, port: u8) -> Result<RoutedPins> {
    validate_port(port)?;

    let mut routed = RoutedPins::new();

    for bit in 0..GPIO_MAX_PORT_BITS {
        let pin = gpio_pin(port, bit);

        if gpio_configure_pinmux(mux, pin).is_ok() {
            // one slot per bit of the port
            let pushed = routed.push(pin);
            debug_assert!(pushed.is_ok());
        }
    }

    Ok(routed)
}
