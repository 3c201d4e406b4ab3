use thiserror::Error;

/// Recoverable failures from the arithmetic engine.
///
/// Programmer errors (mutating an aliased destination in violation of a
/// function's contract, an invariant violated by `debug_check`) are not
/// represented here: they `panic!`/`debug_assert!` at the call site instead,
/// matching the source's distinction between assertion failures and returned
/// errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BignumError {
    /// An invariant check on a value's internal state failed.
    #[error("bignum failed invariant check")]
    InvalidBignum,
    /// An output string buffer was too small to hold the formatted result.
    #[error("output buffer too small")]
    BufferTooSmall,
    /// A destination value's declared capacity was too small for the result.
    #[error("destination capacity too small")]
    CapacityTooSmall,
    /// A string could not be parsed as a bignum.
    #[error("invalid bignum string")]
    InvalidString,
    /// Division or modulus by zero.
    #[error("division by zero")]
    DivideByZero,
    /// A modular inverse does not exist (gcd(a, m) != 1).
    #[error("no modular inverse exists")]
    NoInverse,
}

pub type Result<T> = core::result::Result<T, BignumError>;
