//! Schoolbook multiplication: the disjoint `mul`/`mulw` pair, and the
//! aliasing-safe `mul_assign`/`mulw_assign` convenience layer that computes
//! into scratch storage first.

use crate::error::{BignumError, Result};
use crate::value::{Bignum, Scratch};
use crate::word::mul_accum;

/// `r = a * b`. `r` must be disjoint from both `a` and `b` -- the borrow
/// checker makes that true by construction for any caller with distinct
/// bindings; this is the "no aliasing possible by construction" half of the
/// aliasing design note.
pub fn mul(r: &mut Bignum, a: &Bignum, b: &Bignum) -> Result<()> {
    if a.is_zero() || b.is_zero() {
        r.set_u32(0);
        return Ok(());
    }
    if a.len_words() == 1 && a.words()[0] == 1 {
        r.dup_from(b)?;
        r.set_sign(a.is_negative() != b.is_negative());
        return Ok(());
    }
    if b.len_words() == 1 && b.words()[0] == 1 {
        r.dup_from(a)?;
        r.set_sign(a.is_negative() != b.is_negative());
        return Ok(());
    }

    if r.capacity_bits() < a.len_bits() + b.len_bits() {
        return Err(BignumError::CapacityTooSmall);
    }

    let (small, big) = if a.len_words() <= b.len_words() { (a, b) } else { (b, a) };
    let word_count = a.len_words() + b.len_words();
    r.cleartop(word_count.min(r.capacity()))?;

    for (wa_idx, &word) in small.words().iter().enumerate() {
        if word == 0 {
            continue;
        }
        let dst = &mut r.raw_mut()[wa_idx..];
        mul_accum(dst, big.words(), word);
    }

    r.set_sign(a.is_negative() != b.is_negative());
    r.canon();
    Ok(())
}

/// `r = a * w`, single word multiplier.
pub fn mulw(r: &mut Bignum, a: &Bignum, w: u32) -> Result<()> {
    if w == 0 || a.is_zero() {
        r.set_u32(0);
        return Ok(());
    }
    if w == 1 {
        r.dup_from(a)?;
        return Ok(());
    }

    if r.capacity_bits() < a.len_bits() + 32 {
        return Err(BignumError::CapacityTooSmall);
    }

    let word_count = a.len_words() + 1;
    r.cleartop(word_count.min(r.capacity()))?;
    mul_accum(r.raw_mut(), a.words(), w);
    r.set_sign(a.is_negative());
    r.canon();
    Ok(())
}

impl<'a> Bignum<'a> {
    /// `self *= other`, aliasing-safe (mirrors the source's `bignum_mult`).
    pub fn mul_assign(&mut self, other: &Bignum) -> Result<()> {
        let mut scratch = Scratch::new();
        let mut tmp = scratch.as_bignum();
        mul(&mut tmp, self, other)?;
        self.dup_from(&tmp)
    }

    /// `self *= w`, aliasing-safe (mirrors the source's `bignum_multw`).
    pub fn mulw_assign(&mut self, w: u32) -> Result<()> {
        let mut scratch = Scratch::new();
        let mut tmp = scratch.as_bignum();
        mulw(&mut tmp, self, w)?;
        self.dup_from(&tmp)
    }
}
