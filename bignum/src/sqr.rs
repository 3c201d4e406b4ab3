//! Square: `mul(r, a, a)`. Reusing the same shared borrow for both
//! multiplicands needs no special casing -- two `&Bignum` reads of the same
//! value are always fine; only a `&mut` destination distinct from both reads
//! requires the aliasing-safe wrapper.

use crate::error::Result;
use crate::mul::mul;
use crate::value::{Bignum, Scratch};

/// `r = a * a`. `r` must be disjoint from `a`.
pub fn sqr(r: &mut Bignum, a: &Bignum) -> Result<()> {
    mul(r, a, a)
}

impl<'a> Bignum<'a> {
    /// `self = self * self`, aliasing-safe.
    pub fn sqr_assign(&mut self) -> Result<()> {
        let mut scratch = Scratch::new();
        let mut tmp = scratch.as_bignum();
        sqr(&mut tmp, self)?;
        self.dup_from(&tmp)
    }
}
