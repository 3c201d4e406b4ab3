//! Montgomery-form modular multiplication: setup (`R`, `m'`), a CIOS-style
//! word-serial reduction, and the normalise/denormalise round-trip it
//! needs. HAC 14.32-14.36.
//!
//! A [`MontyCtx`] owns a copy of the modulus's words rather than borrowing
//! them, so it can outlive the caller's view of `m` and be reused across
//! many multiplications (exactly how [`crate::modexp`] uses it: one setup,
//! many squarings).

use crate::addsub::add;
use crate::cmp::cmp_mag;
use crate::div::modulo;
use crate::error::{BignumError, Result};
use crate::value::{Bignum, Scratch, MAX_WORDS};
use core::cmp::Ordering;

/// `(-m0^-1) mod 2^32` via the four-step Newton iteration for inverting an
/// odd word modulo a power of two: `m0` is already its own inverse modulo
/// 8 (every odd square is `1 mod 8`), and each iteration doubles the
/// number of correct low bits, so four iterations comfortably clear 32.
fn mont_inverse_word(m0: u32) -> u32 {
    debug_assert!(m0 & 1 == 1, "montgomery setup requires an odd modulus");
    let mut x = m0;
    for _ in 0..4 {
        x = x.wrapping_mul(2u32.wrapping_sub(m0.wrapping_mul(x)));
    }
    0u32.wrapping_sub(x)
}

/// A prepared Montgomery context for a fixed odd modulus: its word count
/// `n` (so `R = 2^(32n)`), the modulus's own words (owned, not borrowed),
/// and the one-word reduction multiplier `m' = (-m^-1) mod 2^32`.
pub struct MontyCtx {
    modulus: [u32; MAX_WORDS],
    n: usize,
    m_prime: u32,
}

impl MontyCtx {
    /// Set up a context for `m`. Returns `None` if `m` is even or zero --
    /// callers fall back to the naive `mul`-then-`mod` path, since the
    /// one-word inverse trick this module relies on only exists for an
    /// odd modulus.
    pub fn new(m: &Bignum) -> Option<Self> {
        if m.is_zero() || m.is_even() {
            return None;
        }
        let n = m.len_words();
        if n > MAX_WORDS {
            return None;
        }
        let mut modulus = [0u32; MAX_WORDS];
        modulus[..n].copy_from_slice(m.words());
        let m_prime = mont_inverse_word(modulus[0]);
        Some(MontyCtx { modulus, n, m_prime })
    }

    /// `n`: the modulus's word count, so `R = 2^(32n)`.
    pub fn word_count(&self) -> usize {
        self.n
    }

    /// Build a transient immutable view of the cached modulus over caller
    /// storage (the "scratch bignum" pattern from the design notes, since
    /// this context holds only raw words, not a `Bignum` it could lend
    /// out directly).
    fn modulus_into<'b>(&self, buf: &'b mut [u32]) -> Bignum<'b> {
        debug_assert!(buf.len() >= self.n);
        buf[..self.n].copy_from_slice(&self.modulus[..self.n]);
        for w in buf[self.n..].iter_mut() {
            *w = 0;
        }
        Bignum::borrow(buf, self.n - 1, false)
    }

    /// Fully reduce `x` into the canonical `[0, m)` representative,
    /// regardless of `x`'s sign or magnitude.
    pub fn reduce(&self, r: &mut Bignum, x: &Bignum) -> Result<()> {
        let mut mbuf = [0u32; MAX_WORDS];
        let m = self.modulus_into(&mut mbuf);
        let mut scratch = Scratch::new();
        let mut rem = scratch.as_bignum();
        modulo(&mut rem, x, &m)?;
        if rem.is_negative() {
            let mut adj_scratch = Scratch::new();
            let mut adjusted = adj_scratch.as_bignum();
            add(&mut adjusted, &rem, &m)?;
            r.dup_from(&adjusted)
        } else {
            r.dup_from(&rem)
        }
    }

    /// `x*R mod m`: the Montgomery encoding of `x`. Requires `0 <= x`.
    pub fn normalise(&self, r: &mut Bignum, x: &Bignum) -> Result<()> {
        let mut scratch = Scratch::new();
        let mut shifted = scratch.as_bignum();
        shifted.dup_from(x)?;
        shifted.shl(32 * self.n)?;
        let mut mbuf = [0u32; MAX_WORDS];
        let m = self.modulus_into(&mut mbuf);
        modulo(r, &shifted, &m)
    }

    /// `R mod m`, the Montgomery encoding of 1.
    pub fn r_mod_m(&self, r: &mut Bignum) -> Result<()> {
        r.set_u32(1);
        r.shl(32 * self.n)?;
        let mut mbuf = [0u32; MAX_WORDS];
        let m = self.modulus_into(&mut mbuf);
        let mut scratch = Scratch::new();
        let mut rem = scratch.as_bignum();
        modulo(&mut rem, r, &m)?;
        r.dup_from(&rem)
    }

    /// `R^2 mod m`. Computed explicitly as a second normalisation of `R
    /// mod m` -- `((R mod m) shl 32n) mod m` -- rather than inferred from
    /// a single ambiguous call (see the design notes' resolution of the
    /// source's inconsistent early revision).
    pub fn r_squared(&self, r: &mut Bignum) -> Result<()> {
        self.r_mod_m(r)?;
        let mut scratch = Scratch::new();
        let mut snapshot = scratch.as_bignum();
        snapshot.dup_from(r)?;
        self.normalise(r, &snapshot)
    }

    /// Montgomery multiplication on already-reduced, already-encoded
    /// inputs: `r = x*y*R^-1 mod m`. Word-serial CIOS reduction: for each
    /// word of `x`, accumulate `x[i]*y` and a multiple of `m` chosen so
    /// the low word of the running total cancels to zero, then drop that
    /// word. The whole computation happens in a local accumulator before
    /// ever touching `r`, so `r` may freely alias `x` or `y`.
    pub fn mul(&self, r: &mut Bignum, x: &Bignum, y: &Bignum) -> Result<()> {
        let n = self.n;
        let mut acc = [0u32; MAX_WORDS + 2];

        let xw = |i: usize| -> u32 {
            if i <= x.top() {
                x.words()[i]
            } else {
                0
            }
        };
        let yw = |i: usize| -> u32 {
            if i <= y.top() {
                y.words()[i]
            } else {
                0
            }
        };

        for i in 0..n {
            let xi = xw(i) as u128;
            let mut carry: u128 = 0;
            for j in 0..n {
                let p = acc[j] as u128 + xi * (yw(j) as u128) + carry;
                acc[j] = p as u32;
                carry = p >> 32;
            }
            let mut k = n;
            while carry != 0 {
                let p = acc[k] as u128 + carry;
                acc[k] = p as u32;
                carry = p >> 32;
                k += 1;
            }

            let u = (acc[0] as u64).wrapping_mul(self.m_prime as u64) as u32;

            let mut carry2: u128 = 0;
            for j in 0..n {
                let p = acc[j] as u128 + (u as u128) * (self.modulus[j] as u128) + carry2;
                acc[j] = p as u32;
                carry2 = p >> 32;
            }
            let mut k = n;
            while carry2 != 0 {
                let p = acc[k] as u128 + carry2;
                acc[k] = p as u32;
                carry2 = p >> 32;
                k += 1;
            }

            debug_assert_eq!(acc[0], 0, "montgomery reduction step left a nonzero low word");
            for j in 0..acc.len() - 1 {
                acc[j] = acc[j + 1];
            }
            *acc.last_mut().unwrap() = 0;
        }

        load_words(r, &acc[..n + 1])?;

        let mut mbuf = [0u32; MAX_WORDS];
        let m = self.modulus_into(&mut mbuf);
        if cmp_mag(r, &m) != Ordering::Less {
            r.sub_assign(&m)?;
        }
        Ok(())
    }

    /// `r = x*x*R^-1 mod m`. Just a self-multiply through [`Self::mul`] --
    /// no separate squaring formula, matching the design notes' rejection
    /// of the source's dead optimised-square branches.
    pub fn square(&self, r: &mut Bignum, x: &Bignum) -> Result<()> {
        self.mul(r, x, x)
    }

    /// Generic entry point: `r = x*y mod m` for plain (non-Montgomery-
    /// encoded) `x`, `y` of any sign or magnitude. Normalises the smaller
    /// reduced operand into Montgomery form, then a single Montgomery
    /// multiplication against the other (still-plain) operand yields the
    /// plain product directly -- no decode step needed, since
    /// `Mont(x*R, y) = x*R*y*R^-1 mod m = x*y mod m`.
    pub fn modmul(&self, r: &mut Bignum, x: &Bignum, y: &Bignum) -> Result<()> {
        let mut sxr = Scratch::new();
        let mut syr = Scratch::new();
        let mut xr = sxr.as_bignum();
        let mut yr = syr.as_bignum();
        self.reduce(&mut xr, x)?;
        self.reduce(&mut yr, y)?;

        let mut senc = Scratch::new();
        let mut encoded = senc.as_bignum();
        if cmp_mag(&xr, &yr) == Ordering::Less {
            self.normalise(&mut encoded, &xr)?;
            self.mul(r, &encoded, &yr)
        } else {
            self.normalise(&mut encoded, &yr)?;
            self.mul(r, &encoded, &xr)
        }
    }
}

/// Load a little-endian word slice into `dst`, trimming trailing zero
/// words first so the result lands canonical.
fn load_words(dst: &mut Bignum, words: &[u32]) -> Result<()> {
    let mut used = words.len();
    while used > 1 && words[used - 1] == 0 {
        used -= 1;
    }
    if used > dst.capacity() {
        return Err(BignumError::CapacityTooSmall);
    }
    dst.clear();
    dst.cleartop(used)?;
    dst.raw_mut()[..used].copy_from_slice(&words[..used]);
    dst.canon();
    Ok(())
}
