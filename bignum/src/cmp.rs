//! Magnitude and signed comparison, plus a data-independent equality
//! predicate.

use crate::value::Bignum;
use core::cmp::Ordering;

/// Compare magnitudes only, ignoring sign.
pub fn cmp_mag(a: &Bignum, b: &Bignum) -> Ordering {
    let la = a.len_bits();
    let lb = b.len_bits();
    if la != lb {
        return la.cmp(&lb);
    }
    let wa = a.words();
    let wb = b.words();
    for i in (0..wa.len()).rev() {
        match wa[i].cmp(&wb[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Signed ordering: lexicographic on `(sign, len_bits, words from top down)`.
pub fn cmp(a: &Bignum, b: &Bignum) -> Ordering {
    match (a.is_negative(), b.is_negative()) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => cmp_mag(a, b),
        (true, true) => cmp_mag(a, b).reverse(),
    }
}

pub fn lt(a: &Bignum, b: &Bignum) -> bool {
    cmp(a, b) == Ordering::Less
}

pub fn lte(a: &Bignum, b: &Bignum) -> bool {
    cmp(a, b) != Ordering::Greater
}

pub fn gt(a: &Bignum, b: &Bignum) -> bool {
    cmp(a, b) == Ordering::Greater
}

pub fn gte(a: &Bignum, b: &Bignum) -> bool {
    cmp(a, b) != Ordering::Less
}

/// Signed equality: equal sign, equal bit-length, equal words.
pub fn eq(a: &Bignum, b: &Bignum) -> bool {
    a.is_negative() == b.is_negative() && cmp_mag(a, b) == Ordering::Equal
}

/// Data-independent equality: XOR signs, bit-lengths and every used word
/// (down to the shorter operand's length) into an accumulator and return
/// `!accumulator`. Branches only on loop bounds determined by `len_bits`, so
/// timing is data-independent when both operands share the same used
/// length -- the same caveat the source carries.
pub fn const_eq(a: &Bignum, b: &Bignum) -> bool {
    let mut neq: u32 = (a.is_negative() != b.is_negative()) as u32;
    neq |= (a.len_bits() != b.len_bits()) as u32;

    let wa = a.words();
    let wb = b.words();
    let n = wa.len().min(wb.len());
    for i in 0..n {
        neq |= wa[i] ^ wb[i];
    }

    neq == 0
}

/// `a` equals the given 32-bit signed literal exactly (single-word magnitude
/// and matching sign).
pub fn eq_i32(a: &Bignum, v: i32) -> bool {
    a.len_words() == 1 && a.words()[0] == v.unsigned_abs() && a.is_negative() == (v < 0)
}
