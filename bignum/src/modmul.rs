//! Modular multiplication: the ordinary entry point for "`a*b mod m`" that
//! doesn't care which algorithm computed it. Naive multiply-then-reduce
//! when the modulus is even, Montgomery reduction when it's odd.

use crate::addsub::add;
use crate::div::modulo;
use crate::error::{BignumError, Result};
use crate::montgomery::MontyCtx;
use crate::mul::mul;
use crate::value::{Bignum, Scratch};

/// `r = a*b mod m`.
pub fn modmul(r: &mut Bignum, a: &Bignum, b: &Bignum, m: &Bignum) -> Result<()> {
    if m.is_zero() {
        return Err(BignumError::DivideByZero);
    }

    if let Some(ctx) = MontyCtx::new(m) {
        return ctx.modmul(r, a, b);
    }

    let mut scratch = Scratch::new();
    let mut product = scratch.as_bignum();
    mul(&mut product, a, b)?;

    let mut rem_scratch = Scratch::new();
    let mut rem = rem_scratch.as_bignum();
    modulo(&mut rem, &product, m)?;

    if rem.is_negative() {
        let mut adj_scratch = Scratch::new();
        let mut adjusted = adj_scratch.as_bignum();
        add(&mut adjusted, &rem, m)?;
        r.dup_from(&adjusted)
    } else {
        r.dup_from(&rem)
    }
}
