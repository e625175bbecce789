pub mod register;
pub mod gpio;
pub mod gpio_map;
pub mod scu;

#[cfg(test)]
pub(crate) mod register_model;
