//! Left/right shift by an arbitrary bit count, and truncation modulo 2^k.
//! All three operate in place on a single value -- there is no second
//! operand to alias, so there is only one API family here.

use crate::error::{BignumError, Result};
use crate::value::Bignum;

impl<'a> Bignum<'a> {
    /// Shift left by `bits`. Fails if the result would exceed capacity.
    pub fn shl(&mut self, bits: usize) -> Result<()> {
        if bits == 0 {
            return Ok(());
        }
        let word_shift = bits / 32;
        let bit_shift = bits % 32;

        let new_len = self.len_words() + word_shift + if bit_shift > 0 { 1 } else { 0 };
        if new_len > self.capacity() {
            return Err(BignumError::CapacityTooSmall);
        }

        self.shl_words(word_shift)?;
        if bit_shift > 0 {
            self.shl_bits(bit_shift)?;
        }
        self.canon();
        Ok(())
    }

    /// Whole-word left shift: move used words up by `n`, zero the vacated
    /// low words. Processes high-to-low to avoid overlap damage.
    fn shl_words(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Ok(());
        }
        let old_len = self.len_words();
        let new_len = old_len + n;
        if new_len > self.capacity() {
            return Err(BignumError::CapacityTooSmall);
        }
        self.cleartop(new_len)?;

        let rw = self.raw_mut();
        for i in (0..old_len).rev() {
            rw[i + n] = rw[i];
        }
        for w in rw[..n].iter_mut() {
            *w = 0;
        }
        Ok(())
    }

    /// In-word left shift by `r` bits (`0 < r < 32`), top-down two-word
    /// window: `dst[i] = (src[i] << r) | (src[i-1] >> (32-r))`. Reserves
    /// one extra word above the old top to catch the carry-out of the old
    /// top word's lane -- `canon()` in the caller trims it back off if it
    /// turns out to be zero.
    fn shl_bits(&mut self, r: usize) -> Result<()> {
        debug_assert!(r > 0 && r < 32);
        let old_top = self.top();
        self.cleartop(old_top + 2)?;
        let rw = self.raw_mut();
        for i in (0..=old_top + 1).rev() {
            let hi = if i <= old_top { rw[i] << r } else { 0 };
            let lo = if i == 0 { 0 } else { rw[i - 1] >> (32 - r) };
            rw[i] = hi | lo;
        }
        Ok(())
    }

    /// Shift right by `bits`. Never fails.
    pub fn shr(&mut self, bits: usize) {
        if bits == 0 {
            return;
        }
        let word_shift = bits / 32;
        let bit_shift = bits % 32;

        self.shr_words(word_shift);
        if bit_shift > 0 {
            self.shr_bits(bit_shift);
        }
        self.canon();
    }

    /// Whole-word right shift: move used words down by `n`, zero the
    /// vacated high words.
    fn shr_words(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let top = self.top();
        if n > top {
            self.clear();
            return;
        }
        let rw = self.raw_mut();
        for i in 0..=(top - n) {
            rw[i] = rw[i + n];
        }
        for w in rw[(top - n + 1)..=top].iter_mut() {
            *w = 0;
        }
        self.set_top_unchecked(top - n);
    }

    /// In-word right shift by `r` bits (`0 < r < 32`), bottom-up:
    /// `dst[i] = (src[i] >> r) | ((src[i+1] & mask) << (32-r))`.
    fn shr_bits(&mut self, r: usize) {
        debug_assert!(r > 0 && r < 32);
        let top = self.top();
        let mask = (1u32 << r) - 1;
        let rw = self.raw_mut();
        for i in 0..=top {
            let lo = rw[i] >> r;
            let hi = if i == top { 0 } else { (rw[i + 1] & mask) << (32 - r) };
            rw[i] = lo | hi;
        }
    }

    /// Truncate to `bits` bits: clear words above `bits/32`, mask the
    /// partial word, canonicalise. A no-op if `bits >= len_bits()`.
    pub fn trunc(&mut self, bits: usize) {
        if bits >= self.len_bits() {
            return;
        }
        let word_idx = bits / 32;
        let bit_idx = bits % 32;
        let top = self.top();
        let rw = self.raw_mut();
        for w in rw[word_idx + 1..=top].iter_mut() {
            *w = 0;
        }
        if bit_idx > 0 {
            rw[word_idx] &= (1u32 << bit_idx) - 1;
        } else if word_idx > 0 {
            rw[word_idx] = 0;
        }
        self.canon();
    }
}
