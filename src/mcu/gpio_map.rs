//! Logical GPIO to SCU routing.
//!
//! Each `GPIOn[m]` line is bonded out on exactly one `Px_y` package pin, and
//! the SCU configures pads by that physical name. These tables hold the
//! wiring for every port and bit position; lines the package does not bond
//! out have no entry.

use crate::error::Result;
use crate::mcu::gpio::{validate_pin, LogicalPin, GPIO_MAX_PORTS, GPIO_MAX_PORT_BITS};

const NC: u8 = u8::MAX;

const PORTS: usize = GPIO_MAX_PORTS as usize;
const BITS: usize = GPIO_MAX_PORT_BITS as usize;

/// SCU group (the `x` of `Px_y`) carrying each logical pin.
#[rustfmt::skip]
static GPIO_GROUP_MAP: [[u8; BITS]; PORTS] = [
    /* GPIO0 */ [ 0,  0,  1,  1,  1,  6,  3,  2,  1,  1,  1,  1,  1,  1,  2,  1, NC, NC, NC, NC],
    /* GPIO1 */ [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  2,  2,  2,  2,  3,  3, NC, NC, NC, NC],
    /* GPIO2 */ [ 4, NC,  4,  4,  4,  4,  4,  5, NC,  5,  5,  5,  5,  5,  5,  5, NC, NC, NC, NC],
    /* GPIO3 */ [ 6,  6,  6,  6,  6,  6,  6, NC,  7,  7,  7, NC, NC, NC, NC,  7, NC, NC, NC, NC],
    /* GPIO4 */ [NC, NC, NC, NC, NC, NC, NC, NC, NC, NC, NC,  9, NC, NC, NC, NC, NC, NC, NC, NC],
    /* GPIO5 */ [ 2,  2,  2,  2,  2,  2,  2,  2,  3,  3,  3, NC,  4,  4,  4,  6,  6, NC,  9, NC],
];

/// SCU pin within the group (the `y` of `Px_y`) carrying each logical pin.
#[rustfmt::skip]
static GPIO_PIN_MAP: [[u8; BITS]; PORTS] = [
    /* GPIO0 */ [ 0,  1, 15, 16,  0,  6,  6,  7,  1,  2,  3,  4, 17, 18, 10, 20, NC, NC, NC, NC],
    /* GPIO1 */ [ 7,  8,  9, 10, 11, 12, 13, 14,  5,  6,  9, 11, 12, 13,  4,  5, NC, NC, NC, NC],
    /* GPIO2 */ [ 0, NC,  2,  3,  4,  5,  6,  7, NC,  0,  1,  2,  3,  4,  5,  6, NC, NC, NC, NC],
    /* GPIO3 */ [ 1,  2,  3,  4,  5,  9, 10, NC,  0,  1,  2, NC, NC, NC, NC,  7, NC, NC, NC, NC],
    /* GPIO4 */ [NC, NC, NC, NC, NC, NC, NC, NC, NC, NC, NC,  6, NC, NC, NC, NC, NC, NC, NC, NC],
    /* GPIO5 */ [ 0,  1,  2,  3,  4,  5,  6,  8,  1,  2,  7, NC,  8,  9, 10,  7,  8, NC,  5, NC],
];

/// Physical SCU location of a logical pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScuRoute {
    pub group: u8,
    pub pin: u8,
}

fn lookup(table: &[[u8; BITS]; PORTS], pin: LogicalPin) -> Result<Option<u8>> {
    validate_pin(pin)?;

    let entry = table[pin.port as usize][pin.pin as usize];
    Ok((entry != NC).then_some(entry))
}

/// Returns the SCU group a logical pin is routed through, or `None` when the
/// pin is not bonded out.
pub fn gpio_get_group_number(pin: LogicalPin) -> Result<Option<u8>> {
    lookup(&GPIO_GROUP_MAP, pin)
}

/// Returns the pin number within the SCU group, or `None` when the pin is not
/// bonded out.
pub fn gpio_get_pin_number(pin: LogicalPin) -> Result<Option<u8>> {
    lookup(&GPIO_PIN_MAP, pin)
}

/// Looks up both halves of the route at once.
///
/// A route exists only when both tables carry an entry for the pin.
pub fn gpio_get_scu_route(pin: LogicalPin) -> Result<Option<ScuRoute>> {
    let group = gpio_get_group_number(pin)?;
    let scu_pin = gpio_get_pin_number(pin)?;

    Ok(group
        .zip(scu_pin)
        .map(|(group, pin)| ScuRoute { group, pin }))
}
