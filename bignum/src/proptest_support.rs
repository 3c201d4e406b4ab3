//! Test-only support for property-based coverage: a bounded `Arbitrary`
//! generator for small bignums, built from a `Vec<u32>` of bounded length
//! so quickcheck's shrinker stays useful (shrinking a `Bignum` itself
//! isn't possible -- it borrows caller storage -- so this generates a
//! plain owned recipe and materialises it into caller-provided storage on
//! demand).

#![cfg(test)]

use crate::value::Bignum;
use quickcheck::{Arbitrary, Gen};

/// Upper bound on the number of words [`ArbBignum`] generates. Kept small
/// so test cases stay fast and shrinking converges quickly; large enough
/// that multi-word carries and borrows are exercised.
pub const ARB_WORDS_MAX: usize = 4;

#[derive(Clone, Debug)]
pub struct ArbBignum {
    pub words: Vec<u32>,
    pub neg: bool,
}

impl Arbitrary for ArbBignum {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + (usize::arbitrary(g) % ARB_WORDS_MAX);
        let words: Vec<u32> = (0..len).map(|_| u32::arbitrary(g)).collect();
        let neg = bool::arbitrary(g);
        ArbBignum { words, neg }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut out = Vec::new();
        if self.words.len() > 1 {
            out.push(ArbBignum { words: self.words[..self.words.len() - 1].to_vec(), neg: self.neg });
        }
        if self.neg {
            out.push(ArbBignum { words: self.words.clone(), neg: false });
        }
        for i in 0..self.words.len() {
            if self.words[i] != 0 {
                let mut w = self.words.clone();
                w[i] = 0;
                out.push(ArbBignum { words: w, neg: self.neg });
            }
        }
        Box::new(out.into_iter())
    }
}

impl ArbBignum {
    /// Materialise into `storage`, truncating to `storage`'s capacity if
    /// the generated length doesn't fit (callers size storage generously
    /// enough that this never matters for the properties under test).
    pub fn build<'a>(&self, storage: &'a mut [u32]) -> Bignum<'a> {
        let len = self.words.len().min(storage.len());
        let mut b = Bignum::zero(storage);
        b.cleartop(len).expect("storage sized to fit a bounded ArbBignum");
        b.raw_mut()[..len].copy_from_slice(&self.words[..len]);
        b.set_sign(self.neg);
        b.canon();
        b
    }

    pub fn is_zero_words(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}
