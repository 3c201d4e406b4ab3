//! Parsing and evaluation for scripted regression lines of the form
//! `check("LHS OP RHS")`, plus the debug pretty-printer. Kept as a
//! library so the parser/evaluator are testable on their own, with the
//! binary reduced to argument handling and reporting.

use bignum::{Bignum, BignumError, MAX_WORDS};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("malformed check line: {0}")]
    MalformedLine(String),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("operation {0} expects {1} argument(s), got {2}")]
    ArityMismatch(String, usize, usize),
    #[error("unknown comparison operator: {0}")]
    UnknownComparator(String),
    #[error("invalid shift amount: {0}")]
    InvalidShiftAmount(String),
    #[error(transparent)]
    Bignum(#[from] BignumError),
}

pub type Result<T> = core::result::Result<T, HarnessError>;

/// One side of a check line: either a bare literal or a named function
/// application over bignum's public API. Arguments are always literals --
/// the scripted format does not nest function calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(String),
    Call(String, Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub lhs: Expr,
    pub op: Comparator,
    pub rhs: Expr,
}

/// Parse one `check("LHS OP RHS")` line. Leading/trailing whitespace and
/// a trailing `;` are tolerated.
pub fn parse_check_line(line: &str) -> Result<CheckLine> {
    let line = line.trim().trim_end_matches(';').trim();
    let inner = line
        .strip_prefix("check(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| HarnessError::MalformedLine(line.to_string()))?;
    let inner = inner.trim();
    let quoted = inner
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| HarnessError::MalformedLine(line.to_string()))?;

    let (lhs_str, op, rhs_str) = split_on_comparator(quoted)?;
    Ok(CheckLine { lhs: parse_expr(lhs_str.trim()), op, rhs: parse_expr(rhs_str.trim()) })
}

/// Longest-match-first so `<=`/`>=` aren't cut short by `<`/`>`.
const COMPARATORS: &[(&str, Comparator)] = &[
    ("==", Comparator::Eq),
    ("!=", Comparator::Ne),
    ("<=", Comparator::Le),
    (">=", Comparator::Ge),
    ("<", Comparator::Lt),
    (">", Comparator::Gt),
];

fn split_on_comparator(expr: &str) -> Result<(&str, Comparator, &str)> {
    for (token, op) in COMPARATORS {
        if let Some(idx) = expr.find(token) {
            return Ok((&expr[..idx], *op, &expr[idx + token.len()..]));
        }
    }
    Err(HarnessError::UnknownComparator(expr.to_string()))
}

fn parse_expr(s: &str) -> Expr {
    if let Some(open) = s.find('(') {
        if let Some(close) = s.rfind(')') {
            if close > open {
                let name = s[..open].trim().to_string();
                let args = s[open + 1..close]
                    .split(',')
                    .map(|a| a.trim().to_string())
                    .filter(|a| !a.is_empty())
                    .collect();
                return Expr::Call(name, args);
            }
        }
    }
    Expr::Literal(s.to_string())
}

fn literal_into<'s>(lit: &str, storage: &'s mut [u32]) -> Result<Bignum<'s>> {
    bignum_text::parse(lit, storage).map_err(HarnessError::from)
}

fn require_arity(name: &str, args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(HarnessError::ArityMismatch(name.to_string(), expected, args.len()));
    }
    Ok(())
}

fn parse_shift_amount(arg: &str) -> Result<usize> {
    arg.trim().parse::<usize>().map_err(|_| HarnessError::InvalidShiftAmount(arg.to_string()))
}

/// Evaluate `expr` into `out`'s storage. `out` must have enough capacity
/// for the widest operation result (the harness uses `MAX_WORDS` buffers
/// throughout, matching the engine's own cap).
pub fn evaluate<'s>(expr: &Expr, out: &'s mut [u32; MAX_WORDS]) -> Result<Bignum<'s>> {
    match expr {
        Expr::Literal(lit) => literal_into(lit, out),
        Expr::Call(name, args) => evaluate_call(name, args, out),
    }
}

fn evaluate_call<'s>(name: &str, args: &[String], out: &'s mut [u32; MAX_WORDS]) -> Result<Bignum<'s>> {
    match name {
        "add" => binary_op(name, args, out, bignum::add),
        "sub" => binary_op(name, args, out, bignum::sub),
        "mul" => binary_op(name, args, out, bignum::mul),
        "div" => binary_op(name, args, out, bignum::div),
        "mod" => binary_op(name, args, out, bignum::modulo),
        "gcd" => binary_op(name, args, out, bignum::gcd),

        "sqr" => {
            require_arity(name, args, 1)?;
            let mut sa = [0u32; MAX_WORDS];
            let a = literal_into(&args[0], &mut sa)?;
            let mut r = Bignum::zero(out);
            bignum::sqr(&mut r, &a)?;
            Ok(r)
        }

        "shl" | "shr" => {
            require_arity(name, args, 2)?;
            let k = parse_shift_amount(&args[1])?;
            let mut sa = [0u32; MAX_WORDS];
            let a = literal_into(&args[0], &mut sa)?;
            let mut r = Bignum::zero(out);
            r.dup_from(&a)?;
            if name == "shl" {
                r.shl(k)?;
            } else {
                r.shr(k);
            }
            Ok(r)
        }

        "modmul" => {
            require_arity(name, args, 3)?;
            let mut sa = [0u32; MAX_WORDS];
            let mut sb = [0u32; MAX_WORDS];
            let mut sm = [0u32; MAX_WORDS];
            let a = literal_into(&args[0], &mut sa)?;
            let b = literal_into(&args[1], &mut sb)?;
            let m = literal_into(&args[2], &mut sm)?;
            let mut r = Bignum::zero(out);
            bignum::modmul(&mut r, &a, &b, &m)?;
            Ok(r)
        }

        "modexp" => {
            require_arity(name, args, 3)?;
            let mut sbase = [0u32; MAX_WORDS];
            let mut sexp = [0u32; MAX_WORDS];
            let mut sm = [0u32; MAX_WORDS];
            let base = literal_into(&args[0], &mut sbase)?;
            let exp = literal_into(&args[1], &mut sexp)?;
            let m = literal_into(&args[2], &mut sm)?;
            let mut r = Bignum::zero(out);
            bignum::modexp(&mut r, &base, &exp, &m)?;
            Ok(r)
        }

        "egcd-v" | "egcd-a" | "egcd-b" => {
            require_arity(name, args, 2)?;
            let mut sa = [0u32; MAX_WORDS];
            let mut sb = [0u32; MAX_WORDS];
            let a = literal_into(&args[0], &mut sa)?;
            let b = literal_into(&args[1], &mut sb)?;

            let mut sv = [0u32; MAX_WORDS];
            let mut sca = [0u32; MAX_WORDS];
            let mut scb = [0u32; MAX_WORDS];
            let mut v = Bignum::zero(&mut sv);
            let mut ca = Bignum::zero(&mut sca);
            let mut cb = Bignum::zero(&mut scb);
            bignum::extended_gcd(&mut v, &mut ca, &mut cb, &a, &b)?;

            let mut r = Bignum::zero(out);
            match name {
                "egcd-v" => r.dup_from(&v)?,
                "egcd-a" => r.dup_from(&ca)?,
                _ => r.dup_from(&cb)?,
            }
            Ok(r)
        }

        other => Err(HarnessError::UnknownOperation(other.to_string())),
    }
}

fn binary_op<'s>(
    name: &str,
    args: &[String],
    out: &'s mut [u32; MAX_WORDS],
    op: impl FnOnce(&mut Bignum, &Bignum, &Bignum) -> bignum::Result<()>,
) -> Result<Bignum<'s>> {
    require_arity(name, args, 2)?;
    let mut sa = [0u32; MAX_WORDS];
    let mut sb = [0u32; MAX_WORDS];
    let a = literal_into(&args[0], &mut sa)?;
    let b = literal_into(&args[1], &mut sb)?;
    let mut r = Bignum::zero(out);
    op(&mut r, &a, &b)?;
    Ok(r)
}

/// Evaluate a whole check line and report whether it held.
pub fn run_check(line: &CheckLine) -> Result<bool> {
    let mut sl = [0u32; MAX_WORDS];
    let mut sr = [0u32; MAX_WORDS];
    let lhs = evaluate(&line.lhs, &mut sl)?;
    let rhs = evaluate(&line.rhs, &mut sr)?;
    let ordering = bignum::cmp(&lhs, &rhs);
    use core::cmp::Ordering::*;
    Ok(match line.op {
        Comparator::Eq => ordering == Equal,
        Comparator::Ne => ordering != Equal,
        Comparator::Lt => ordering == Less,
        Comparator::Le => ordering != Greater,
        Comparator::Gt => ordering == Greater,
        Comparator::Ge => ordering != Less,
    })
}

/// Render both sides of a failing check line as hex, for diagnostics.
pub fn render_sides(line: &CheckLine) -> Result<(String, String)> {
    let mut sl = [0u32; MAX_WORDS];
    let mut sr = [0u32; MAX_WORDS];
    let lhs = evaluate(&line.lhs, &mut sl)?;
    let rhs = evaluate(&line.rhs, &mut sr)?;
    Ok((bignum_text::fmt_hex(&lhs), bignum_text::fmt_hex(&rhs)))
}

/// Debug pretty-printer: hex rendering plus the value's declared word
/// capacity, standing in for the source's compile-time debug macro with
/// a feature flag instead.
#[cfg(feature = "debug-dump")]
pub fn dump(label: &str, b: &Bignum) {
    println!("{label}: {} (capacity {} words)", bignum_text::fmt_hex(b), b.capacity());
}

#[cfg(not(feature = "debug-dump"))]
pub fn dump(_label: &str, _b: &Bignum) {}
