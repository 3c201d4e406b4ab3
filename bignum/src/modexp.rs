//! Fixed left-to-right, bit-at-a-time modular exponentiation, HAC 14.94.
//! Routed through Montgomery reduction when the modulus is odd; repeated
//! squaring with a per-step naive `mod` otherwise.

use crate::addsub::add;
use crate::div::modulo;
use crate::error::{BignumError, Result};
use crate::montgomery::MontyCtx;
use crate::mul::mul;
use crate::value::{Bignum, Scratch};

/// `r = base^exp mod m`. `exp`'s sign is ignored (only its bits are
/// read); `m` must be nonzero.
pub fn modexp(r: &mut Bignum, base: &Bignum, exp: &Bignum, m: &Bignum) -> Result<()> {
    if m.is_zero() {
        return Err(BignumError::DivideByZero);
    }

    match MontyCtx::new(m) {
        Some(ctx) => modexp_montgomery(r, base, exp, &ctx),
        None => modexp_fallback(r, base, exp, m),
    }
}

/// `1. x' <- Mont(x, R^2 mod m)`; `2. A <- R mod m`; `3. for i from
/// len_bits(e)-1 downto 0: A <- Mont(A,A); if bit(e,i): A <- Mont(A,x')`;
/// `4. A <- Mont(A,1)` to decode.
fn modexp_montgomery(r: &mut Bignum, base: &Bignum, exp: &Bignum, ctx: &MontyCtx) -> Result<()> {
    let mut sbase = Scratch::new();
    let mut base_reduced = sbase.as_bignum();
    ctx.reduce(&mut base_reduced, base)?;

    let mut sr2 = Scratch::new();
    let mut r_squared = sr2.as_bignum();
    ctx.r_squared(&mut r_squared)?;

    let mut sxt = Scratch::new();
    let mut x_tilde = sxt.as_bignum();
    ctx.mul(&mut x_tilde, &base_reduced, &r_squared)?;

    let mut sa = Scratch::new();
    let mut acc = sa.as_bignum();
    ctx.r_mod_m(&mut acc)?;

    for i in (0..exp.len_bits()).rev() {
        let mut ssq = Scratch::new();
        let mut squared = ssq.as_bignum();
        ctx.mul(&mut squared, &acc, &acc)?;
        acc.dup_from(&squared)?;

        if exp.get_bit(i) == 1 {
            let mut smul = Scratch::new();
            let mut multiplied = smul.as_bignum();
            ctx.mul(&mut multiplied, &acc, &x_tilde)?;
            acc.dup_from(&multiplied)?;
        }
    }

    let mut sone = Scratch::new();
    let mut one = sone.as_bignum();
    one.set_u32(1);
    let mut sdec = Scratch::new();
    let mut decoded = sdec.as_bignum();
    ctx.mul(&mut decoded, &acc, &one)?;
    r.dup_from(&decoded)
}

/// Repeated squaring with a naive `mod` after every multiply -- the path
/// for even moduli, where Montgomery's one-word inverse trick doesn't
/// apply.
fn modexp_fallback(r: &mut Bignum, base: &Bignum, exp: &Bignum, m: &Bignum) -> Result<()> {
    let mut sbase = Scratch::new();
    let mut base_reduced = sbase.as_bignum();
    modulo(&mut base_reduced, base, m)?;
    if base_reduced.is_negative() {
        let mut sadj = Scratch::new();
        let mut adjusted = sadj.as_bignum();
        add(&mut adjusted, &base_reduced, m)?;
        base_reduced.dup_from(&adjusted)?;
    }

    let mut sacc = Scratch::new();
    let mut acc = sacc.as_bignum();
    acc.set_u32(1);

    for i in (0..exp.len_bits()).rev() {
        let mut ssq = Scratch::new();
        let mut squared = ssq.as_bignum();
        mul(&mut squared, &acc, &acc)?;
        modulo(&mut acc, &squared, m)?;

        if exp.get_bit(i) == 1 {
            let mut smul = Scratch::new();
            let mut multiplied = smul.as_bignum();
            mul(&mut multiplied, &acc, &base_reduced)?;
            modulo(&mut acc, &multiplied, m)?;
        }
    }

    r.dup_from(&acc)
}
