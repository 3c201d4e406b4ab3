//! `divmod` via normalised schoolbook long division with a 64/32 initial
//! quotient-digit estimate and correction, following the normalisation
//! approach of Knuth's Algorithm D: shift the divisor so its top bit is set,
//! which bounds the estimate's error to at most a couple of corrections.

use crate::cmp::cmp_mag;
use crate::error::{BignumError, Result};
use crate::value::{Bignum, Scratch, MAX_WORDS};
use crate::word::{mul_accum, top_set_bit_index};
use core::cmp::Ordering;

fn trimmed_len(a: &[u32]) -> usize {
    let mut n = a.len();
    while n > 0 && a[n - 1] == 0 {
        n -= 1;
    }
    n
}

fn cmp_words(a: &[u32], b: &[u32]) -> Ordering {
    let la = trimmed_len(a);
    let lb = trimmed_len(b);
    if la != lb {
        return la.cmp(&lb);
    }
    for i in (0..la).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// `dst = src * k`, a single-word multiply into scratch, `dst` at least
/// `src.len() + 1` words.
fn mul_word(dst: &mut [u32], src: &[u32], k: u32) {
    for w in dst.iter_mut() {
        *w = 0;
    }
    mul_accum(dst, src, k);
}

/// Subtract `product` from the window `rem[t..=rem_top]` in place.
fn sub_product_from(rem: &mut [u32], t: usize, rem_top: usize, product: &[u32]) {
    let mut borrow: i64 = 0;
    let window = &mut rem[t..=rem_top];
    for (i, slot) in window.iter_mut().enumerate() {
        let p = if i < product.len() { product[i] as i64 } else { 0 };
        let diff = *slot as i64 - p - borrow;
        if diff < 0 {
            *slot = (diff + (1i64 << 32)) as u32;
            borrow = 1;
        } else {
            *slot = diff as u32;
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0, "quotient digit estimate too large");
}

/// `x = q*y + r`, with `0 <= |r| < |y|`. `q` and `r` must be distinct from
/// each other and from `x`, `y` -- the borrow checker already forbids
/// passing the same binding as two `&mut` parameters, so this is enforced
/// structurally rather than by assertion.
///
/// Sign convention follows truncating division (matching native integer
/// `/`/`%`): `sign(q) = sign(x) xor sign(y)` and `sign(r) = sign(x)`, both
/// forced non-negative when the respective result is zero.
pub fn divmod(q: &mut Bignum, rem: &mut Bignum, x: &Bignum, y: &Bignum) -> Result<()> {
    if y.is_zero() {
        return Err(BignumError::DivideByZero);
    }

    if cmp_mag(x, y) == Ordering::Less {
        q.set_u32(0);
        rem.dup_from(x)?;
        return Ok(());
    }

    let q_negative = x.is_negative() != y.is_negative();
    let r_negative = x.is_negative();

    rem.dup_from(x)?;
    rem.abs();

    let mut yn_scratch = Scratch::new();
    let mut yn = yn_scratch.as_bignum();
    yn.dup_from(y)?;
    yn.abs();

    let top_word = yn.words()[yn.top()];
    let s = 32 - top_set_bit_index(top_word) as usize;
    if s > 0 {
        rem.shl(s)?;
        yn.shl(s)?;
    }

    let yn_len = yn.len_words();
    let rem_top = rem.top();
    let n = (rem_top + 1).saturating_sub(yn_len);

    q.set_u32(0);
    q.cleartop(n + 1)?;

    let yn_words: [u32; MAX_WORDS] = {
        let mut buf = [0u32; MAX_WORDS];
        buf[..yn_len].copy_from_slice(yn.words());
        buf
    };
    let yn_top = yn_words[yn_len - 1] as u64;

    for t in (0..=n).rev() {
        if rem_top < t {
            continue;
        }
        let window_len = rem_top - t + 1;

        let is_ge = {
            let window = &rem.raw()[t..=rem_top];
            cmp_words(window, &yn_words[..yn_len]) != Ordering::Less
        };
        if !is_ge {
            continue;
        }

        let mut k: u32 = {
            let window = &rem.raw()[t..=rem_top];
            let top1 = window[window_len - 1] as u64;
            let top2 = if window_len >= 2 { window[window_len - 2] as u64 } else { 0 };
            let combined = (top1 << 32) | top2;
            (combined / yn_top).min(u32::MAX as u64) as u32
        };

        let mut prod = [0u32; MAX_WORDS + 1];
        loop {
            mul_word(&mut prod[..yn_len + 1], &yn_words[..yn_len], k);
            let window = &rem.raw()[t..=rem_top];
            if cmp_words(&prod[..yn_len + 1], window) != Ordering::Greater {
                break;
            }
            k -= 1;
        }

        q.raw_mut()[t] = k;
        sub_product_from(rem.raw_mut(), t, rem_top, &prod[..yn_len + 1]);
    }

    q.canon();
    rem.canon();

    if s > 0 {
        rem.shr(s);
    }

    q.set_sign(q_negative);
    rem.set_sign(r_negative);

    Ok(())
}

/// `x / y`, discarding the remainder into scratch storage.
pub fn div(q: &mut Bignum, x: &Bignum, y: &Bignum) -> Result<()> {
    let mut scratch = Scratch::new();
    let mut rem = scratch.as_bignum();
    divmod(q, &mut rem, x, y)
}

/// `x mod y`, discarding the quotient into scratch storage.
pub fn modulo(rem: &mut Bignum, x: &Bignum, y: &Bignum) -> Result<()> {
    let mut scratch = Scratch::new();
    let mut q = scratch.as_bignum();
    divmod(&mut q, rem, x, y)
}
