//! Binary GCD and extended binary GCD, HAC 14.54 / 14.61.
//!
//! Both work purely on magnitudes internally (trailing-zero stripping and
//! halving don't care about sign), recovering the signed Bezout
//! coefficients for [`extended_gcd`] only at the very end.

use crate::cmp::cmp_mag;
use crate::error::Result;
use crate::value::{Bignum, Scratch};
use core::cmp::Ordering;

/// `r = gcd(|a|, |b|)`. HAC 14.54.
///
/// Zero operands are handled as an explicit boundary rather than let the
/// binary algorithm's "both even" loop spin forever on a perpetually-even
/// zero: `gcd(a, 0) == |a|` and `gcd(0, b) == |b|` by definition.
pub fn gcd(r: &mut Bignum, a: &Bignum, b: &Bignum) -> Result<()> {
    if a.is_zero() {
        r.dup_from(b)?;
        r.abs();
        return Ok(());
    }
    if b.is_zero() {
        r.dup_from(a)?;
        r.abs();
        return Ok(());
    }

    let mut sx = Scratch::new();
    let mut sy = Scratch::new();
    let mut x = sx.as_bignum();
    let mut y = sy.as_bignum();
    x.dup_from(a)?;
    x.abs();
    y.dup_from(b)?;
    y.abs();

    let mut g_shifts: usize = 0;
    while x.is_even() && y.is_even() {
        x.shr(1);
        y.shr(1);
        g_shifts += 1;
    }

    while !x.is_zero() {
        while x.is_even() {
            x.shr(1);
        }
        while !y.is_zero() && y.is_even() {
            y.shr(1);
        }

        if cmp_mag(&x, &y) != Ordering::Less {
            let mut sd = Scratch::new();
            let mut diff = sd.as_bignum();
            crate::addsub::sub(&mut diff, &x, &y)?;
            diff.shr(1);
            x.dup_from(&diff)?;
        } else {
            let mut sd = Scratch::new();
            let mut diff = sd.as_bignum();
            crate::addsub::sub(&mut diff, &y, &x)?;
            diff.shr(1);
            y.dup_from(&diff)?;
        }
    }

    y.shl(g_shifts)?;
    r.dup_from(&y)
}

/// Halve `(p, q)` together, HAC 14.61's even/odd adjustment: if both are
/// even, halve directly; otherwise add `y` to `p` and subtract `x` from
/// `q` first (restoring evenness) and halve both. `x`, `y` here are the
/// common-factor-of-two-reduced operands, not the caller's raw inputs.
fn halve_pair(p: &mut Bignum, q: &mut Bignum, x: &Bignum, y: &Bignum) -> Result<()> {
    if p.is_even() && q.is_even() {
        p.shr(1);
        q.shr(1);
    } else {
        p.add_assign(y)?;
        p.shr(1);
        q.sub_assign(x)?;
        q.shr(1);
    }
    Ok(())
}

/// Extended GCD: `a*a_coeff + b*b_coeff == v_out`, `v_out == gcd(a, b)`.
/// HAC 14.61, generalised to signed operands by running the binary
/// algorithm on magnitudes and folding each input's sign into its
/// coefficient at the end (`a == sign(a)*|a|`, so the coefficient found
/// for `|a|` needs the same sign folded back in).
///
/// Destination initialisation is explicit and internal: `u`/`v`/`A`/`B`/
/// `C`/`D` are all scratch values this function owns, not values the
/// caller is expected to have pre-zeroed.
pub fn extended_gcd(
    v_out: &mut Bignum,
    a_coeff: &mut Bignum,
    b_coeff: &mut Bignum,
    a: &Bignum,
    b: &Bignum,
) -> Result<()> {
    if a.is_zero() && b.is_zero() {
        v_out.set_u32(0);
        a_coeff.set_u32(0);
        b_coeff.set_u32(0);
        return Ok(());
    }
    if a.is_zero() {
        v_out.dup_from(b)?;
        v_out.abs();
        a_coeff.set_u32(0);
        b_coeff.set_i32(b.sign());
        return Ok(());
    }
    if b.is_zero() {
        v_out.dup_from(a)?;
        v_out.abs();
        a_coeff.set_i32(a.sign());
        b_coeff.set_u32(0);
        return Ok(());
    }

    let sa = a.sign();
    let sb = b.sign();

    let mut sx = Scratch::new();
    let mut sy = Scratch::new();
    let mut x = sx.as_bignum();
    let mut y = sy.as_bignum();
    x.dup_from(a)?;
    x.abs();
    y.dup_from(b)?;
    y.abs();

    let mut g_shifts: usize = 0;
    while x.is_even() && y.is_even() {
        x.shr(1);
        y.shr(1);
        g_shifts += 1;
    }

    let mut su = Scratch::new();
    let mut sv = Scratch::new();
    let mut saa = Scratch::new();
    let mut sbb = Scratch::new();
    let mut scc = Scratch::new();
    let mut sdd = Scratch::new();
    let mut u = su.as_bignum();
    let mut v = sv.as_bignum();
    let mut big_a = saa.as_bignum();
    let mut big_b = sbb.as_bignum();
    let mut big_c = scc.as_bignum();
    let mut big_d = sdd.as_bignum();

    u.dup_from(&x)?;
    v.dup_from(&y)?;
    big_a.set_u32(1);
    big_b.set_u32(0);
    big_c.set_u32(0);
    big_d.set_u32(1);

    while !u.is_zero() {
        while !u.is_zero() && u.is_even() {
            u.shr(1);
            halve_pair(&mut big_a, &mut big_b, &x, &y)?;
        }
        while !v.is_zero() && v.is_even() {
            v.shr(1);
            halve_pair(&mut big_c, &mut big_d, &x, &y)?;
        }

        if cmp_mag(&u, &v) != Ordering::Less {
            u.sub_assign(&v)?;
            big_a.sub_assign(&big_c)?;
            big_b.sub_assign(&big_d)?;
        } else {
            v.sub_assign(&u)?;
            big_c.sub_assign(&big_a)?;
            big_d.sub_assign(&big_b)?;
        }
    }

    v_out.dup_from(&v)?;
    v_out.shl(g_shifts)?;

    a_coeff.dup_from(&big_c)?;
    if sa < 0 {
        a_coeff.negate();
    }
    b_coeff.dup_from(&big_d)?;
    if sb < 0 {
        b_coeff.negate();
    }
    Ok(())
}
