use core::fmt;

/// Errors reported by the GPIO and pinmux operations.
///
/// Every failure is detected before any register is touched, so an `Err`
/// always means the hardware was left exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The port or pin index is outside what the part provides, or the pin
    /// has no physical route through the SCU.
    InvalidArgument,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
