//! Fixed-capacity, arbitrary-precision signed integer arithmetic for
//! cryptographic primitives: modular exponentiation, modular inversion, and
//! the building blocks (add/sub/mul/div/gcd/shift) they're built from.
//!
//! Every value borrows its word storage from the caller (see [`Bignum`] and
//! [`Scratch`]) -- this crate never allocates. See the aliasing notes on
//! [`crate::addsub`] and [`crate::mul`] for the two operation families
//! (disjoint vs. aliasing-safe) every arithmetic module follows.

#![forbid(unsafe_code)]

mod addsub;
mod cmp;
mod div;
mod error;
mod gcd;
mod modexp;
mod modinv;
mod modmul;
mod montgomery;
mod mul;
mod shift;
mod sqr;
mod value;
mod word;

#[cfg(test)]
mod proptest_support;
#[cfg(test)]
mod proptest_properties;

pub use addsub::{add, sub};
pub use cmp::{cmp, cmp_mag, const_eq, eq, eq_i32, gt, gte, lt, lte};
pub use div::{div, divmod, modulo};
pub use error::{BignumError, Result};
pub use gcd::{extended_gcd, gcd};
pub use modexp::modexp;
pub use modinv::modinv;
pub use modmul::modmul;
pub use montgomery::MontyCtx;
pub use mul::{mul, mulw};
pub use sqr::sqr;
pub use value::{Bignum, Scratch, MAX_WORDS};
