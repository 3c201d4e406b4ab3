//! Property-based coverage for the quantified invariants: commutativity,
//! distributivity, the division identity, the shift round-trip, sign
//! laws, the GCD/Bezout identity, and equality agreement. Example-based
//! scenarios (the concrete RSA/Fermat/Bezout numbers) live alongside the
//! operations they exercise instead of here.

#![cfg(test)]

use crate::addsub::{add, sub};
use crate::cmp::{cmp_mag, const_eq, eq};
use crate::div::divmod;
use crate::gcd::{extended_gcd, gcd};
use crate::modmul::modmul;
use crate::mul::mul;
use crate::proptest_support::ArbBignum;
use crate::value::Bignum;
use core::cmp::Ordering;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const BUF: usize = 32;

#[quickcheck]
fn dup_is_identity(a: ArbBignum) -> bool {
    let mut sa = [0u32; BUF];
    let av = a.build(&mut sa);
    let mut sr = [0u32; BUF];
    let mut r = Bignum::zero(&mut sr);
    r.dup_from(&av).unwrap();
    eq(&r, &av)
}

#[quickcheck]
fn add_sub_inverse(a: ArbBignum, b: ArbBignum) -> TestResult {
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);

    let mut ssum = [0u32; BUF];
    let mut sum = Bignum::zero(&mut ssum);
    if add(&mut sum, &av, &bv).is_err() {
        return TestResult::discard();
    }
    let mut sback = [0u32; BUF];
    let mut back = Bignum::zero(&mut sback);
    if sub(&mut back, &sum, &bv).is_err() {
        return TestResult::discard();
    }
    TestResult::from_bool(eq(&back, &av))
}

#[quickcheck]
fn add_commutes(a: ArbBignum, b: ArbBignum) -> TestResult {
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);

    let mut s1 = [0u32; BUF];
    let mut s2 = [0u32; BUF];
    let mut r1 = Bignum::zero(&mut s1);
    let mut r2 = Bignum::zero(&mut s2);
    if add(&mut r1, &av, &bv).is_err() || add(&mut r2, &bv, &av).is_err() {
        return TestResult::discard();
    }
    TestResult::from_bool(eq(&r1, &r2))
}

#[quickcheck]
fn mul_commutes(a: ArbBignum, b: ArbBignum) -> TestResult {
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);

    let mut s1 = [0u32; BUF];
    let mut s2 = [0u32; BUF];
    let mut r1 = Bignum::zero(&mut s1);
    let mut r2 = Bignum::zero(&mut s2);
    if mul(&mut r1, &av, &bv).is_err() || mul(&mut r2, &bv, &av).is_err() {
        return TestResult::discard();
    }
    TestResult::from_bool(eq(&r1, &r2))
}

#[quickcheck]
fn mul_distributes_over_add(a: ArbBignum, b: ArbBignum, c: ArbBignum) -> TestResult {
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let mut sc = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);
    let cv = c.build(&mut sc);

    let mut sbc = [0u32; BUF];
    let mut bc = Bignum::zero(&mut sbc);
    if add(&mut bc, &bv, &cv).is_err() {
        return TestResult::discard();
    }
    let mut s_lhs = [0u32; BUF];
    let mut lhs = Bignum::zero(&mut s_lhs);
    if mul(&mut lhs, &av, &bc).is_err() {
        return TestResult::discard();
    }

    let mut sab = [0u32; BUF];
    let mut scac = [0u32; BUF];
    let mut ab = Bignum::zero(&mut sab);
    let mut ac = Bignum::zero(&mut scac);
    if mul(&mut ab, &av, &bv).is_err() || mul(&mut ac, &av, &cv).is_err() {
        return TestResult::discard();
    }
    let mut s_rhs = [0u32; BUF];
    let mut rhs = Bignum::zero(&mut s_rhs);
    if add(&mut rhs, &ab, &ac).is_err() {
        return TestResult::discard();
    }

    TestResult::from_bool(eq(&lhs, &rhs))
}

#[quickcheck]
fn division_identity(a: ArbBignum, b: ArbBignum) -> TestResult {
    if b.is_zero_words() {
        return TestResult::discard();
    }
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);

    let mut sq = [0u32; BUF];
    let mut sr = [0u32; BUF];
    let mut q = Bignum::zero(&mut sq);
    let mut r = Bignum::zero(&mut sr);
    if divmod(&mut q, &mut r, &av, &bv).is_err() {
        return TestResult::discard();
    }

    let mut sp = [0u32; BUF];
    let mut product = Bignum::zero(&mut sp);
    if mul(&mut product, &q, &bv).is_err() {
        return TestResult::discard();
    }
    let mut stot = [0u32; BUF];
    let mut total = Bignum::zero(&mut stot);
    if add(&mut total, &product, &r).is_err() {
        return TestResult::discard();
    }

    let identity_holds = eq(&total, &av);
    let remainder_bounded = cmp_mag(&r, &bv) == Ordering::Less;
    TestResult::from_bool(identity_holds && remainder_bounded)
}

#[quickcheck]
fn shift_round_trip(a: ArbBignum, bits: u8) -> TestResult {
    let k = (bits % 32) as usize;
    let mut sa = [0u32; BUF];
    let mut av = a.build(&mut sa);

    let mut s_orig = [0u32; BUF];
    let mut orig = Bignum::zero(&mut s_orig);
    orig.dup_from(&av).unwrap();

    if av.shl(k).is_err() {
        return TestResult::discard();
    }
    av.shr(k);
    TestResult::from_bool(eq(&av, &orig))
}

#[quickcheck]
fn trunc_matches_mod_power_of_two(a: ArbBignum, bits: u8) -> TestResult {
    let k = (bits % 64) as usize;
    let mut sa = [0u32; BUF];
    let mut av = a.build(&mut sa);
    av.abs();

    let mut s_trunc = [0u32; BUF];
    let mut truncated = Bignum::zero(&mut s_trunc);
    truncated.dup_from(&av).unwrap();
    truncated.trunc(k);

    let mut s_pow = [0u32; BUF];
    let mut pow = Bignum::zero(&mut s_pow);
    pow.set_u32(1);
    if pow.shl(k).is_err() {
        return TestResult::discard();
    }

    let mut sq = [0u32; BUF];
    let mut sr = [0u32; BUF];
    let mut q = Bignum::zero(&mut sq);
    let mut r = Bignum::zero(&mut sr);
    if divmod(&mut q, &mut r, &av, &pow).is_err() {
        return TestResult::discard();
    }

    TestResult::from_bool(eq(&truncated, &r))
}

#[quickcheck]
fn negate_twice_is_identity(a: ArbBignum) -> bool {
    let mut sa = [0u32; BUF];
    let mut av = a.build(&mut sa);
    let mut s_orig = [0u32; BUF];
    let mut orig = Bignum::zero(&mut s_orig);
    orig.dup_from(&av).unwrap();

    av.negate();
    av.negate();
    eq(&av, &orig)
}

#[quickcheck]
fn abs_of_negation_matches_abs(a: ArbBignum) -> bool {
    let mut sa = [0u32; BUF];
    let mut s_neg = [0u32; BUF];
    let av = a.build(&mut sa);
    let mut neg = Bignum::zero(&mut s_neg);
    neg.dup_from(&av).unwrap();
    neg.negate();
    neg.abs();

    let mut s_abs = [0u32; BUF];
    let mut abs_a = Bignum::zero(&mut s_abs);
    abs_a.dup_from(&av).unwrap();
    abs_a.abs();

    eq(&neg, &abs_a)
}

#[quickcheck]
fn gcd_divides_both_operands(a: ArbBignum, b: ArbBignum) -> TestResult {
    if a.is_zero_words() && b.is_zero_words() {
        return TestResult::discard();
    }
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);

    let mut sg = [0u32; BUF];
    let mut g = Bignum::zero(&mut sg);
    if gcd(&mut g, &av, &bv).is_err() {
        return TestResult::discard();
    }
    if g.is_zero() {
        return TestResult::discard();
    }

    let mut sq1 = [0u32; BUF];
    let mut sr1 = [0u32; BUF];
    let mut q1 = Bignum::zero(&mut sq1);
    let mut r1 = Bignum::zero(&mut sr1);
    if divmod(&mut q1, &mut r1, &av, &g).is_err() {
        return TestResult::discard();
    }

    let mut sq2 = [0u32; BUF];
    let mut sr2 = [0u32; BUF];
    let mut q2 = Bignum::zero(&mut sq2);
    let mut r2 = Bignum::zero(&mut sr2);
    if divmod(&mut q2, &mut r2, &bv, &g).is_err() {
        return TestResult::discard();
    }

    TestResult::from_bool(r1.is_zero() && r2.is_zero())
}

#[quickcheck]
fn extended_gcd_bezout_holds(a: ArbBignum, b: ArbBignum) -> TestResult {
    if a.is_zero_words() && b.is_zero_words() {
        return TestResult::discard();
    }
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);

    let mut sv = [0u32; BUF];
    let mut sca = [0u32; BUF];
    let mut scb = [0u32; BUF];
    let mut v = Bignum::zero(&mut sv);
    let mut ca = Bignum::zero(&mut sca);
    let mut cb = Bignum::zero(&mut scb);
    if extended_gcd(&mut v, &mut ca, &mut cb, &av, &bv).is_err() {
        return TestResult::discard();
    }

    let mut s1 = [0u32; BUF];
    let mut s2 = [0u32; BUF];
    let mut s3 = [0u32; BUF];
    let mut t1 = Bignum::zero(&mut s1);
    let mut t2 = Bignum::zero(&mut s2);
    let mut total = Bignum::zero(&mut s3);
    if mul(&mut t1, &av, &ca).is_err() || mul(&mut t2, &bv, &cb).is_err() || add(&mut total, &t1, &t2).is_err() {
        return TestResult::discard();
    }

    let mut sg = [0u32; BUF];
    let mut g = Bignum::zero(&mut sg);
    if gcd(&mut g, &av, &bv).is_err() {
        return TestResult::discard();
    }

    TestResult::from_bool(eq(&total, &v) && eq(&v, &g))
}

#[quickcheck]
fn eq_agrees_with_const_eq(a: ArbBignum, b: ArbBignum) -> bool {
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);
    eq(&av, &bv) == const_eq(&av, &bv)
}

#[quickcheck]
fn modmul_commutes(a: ArbBignum, b: ArbBignum, m: ArbBignum) -> TestResult {
    if m.is_zero_words() {
        return TestResult::discard();
    }
    let mut sa = [0u32; BUF];
    let mut sb = [0u32; BUF];
    let mut sm = [0u32; BUF];
    let av = a.build(&mut sa);
    let bv = b.build(&mut sb);
    let mv = m.build(&mut sm);

    let mut s1 = [0u32; BUF];
    let mut s2 = [0u32; BUF];
    let mut r1 = Bignum::zero(&mut s1);
    let mut r2 = Bignum::zero(&mut s2);
    if modmul(&mut r1, &av, &bv, &mv).is_err() || modmul(&mut r2, &bv, &av, &mv).is_err() {
        return TestResult::discard();
    }
    TestResult::from_bool(eq(&r1, &r2))
}
