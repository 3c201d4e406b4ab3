//! Modular inverse: extended GCD, with the sign adjustment HAC leaves
//! implicit made explicit (add the modulus once if the witness came back
//! negative).

use crate::addsub::add;
use crate::cmp::eq_i32;
use crate::error::{BignumError, Result};
use crate::gcd::extended_gcd;
use crate::value::{Bignum, Scratch};

/// `r = a^-1 mod m`. Fails with `NoInverse` if `gcd(a, m) != 1`.
pub fn modinv(r: &mut Bignum, a: &Bignum, m: &Bignum) -> Result<()> {
    let mut sv = Scratch::new();
    let mut sca = Scratch::new();
    let mut scm = Scratch::new();
    let mut g = sv.as_bignum();
    let mut coeff_a = sca.as_bignum();
    let mut coeff_m = scm.as_bignum();

    extended_gcd(&mut g, &mut coeff_a, &mut coeff_m, a, m)?;

    if !eq_i32(&g, 1) {
        return Err(BignumError::NoInverse);
    }

    if coeff_a.is_negative() {
        let mut sadj = Scratch::new();
        let mut adjusted = sadj.as_bignum();
        add(&mut adjusted, &coeff_a, m)?;
        r.dup_from(&adjusted)
    } else {
        r.dup_from(&coeff_a)
    }
}
