//! This crate contains common word-level utilities for crates within the
//! `fwint` system: carry and borrow primitives, the widening multiply, the
//! reciprocal approximations that drive the division engine, and the string
//! parsing error type. Most users should never have to interact with this
//! crate directly; there is a reexport of the useful items in `fwint_core`.

#![no_std]

mod parse;
mod reciprocal;
mod words;

pub use parse::ParseError;
pub use reciprocal::{reciprocal_2by1, reciprocal_3by2, udivrem_2by1, udivrem_3by2};
pub use words::{
    add_with_carry, clz_nonzero, sub_with_borrow, widen_mul, widen_mul_add, widening_mul_add_u128,
};

/// Bitwidth of a word
pub const BITS: usize = 64;

/// Number of bytes in a word
pub const WORD_BYTES: usize = 8;

/// Maximum value of a word
pub const MAX: u64 = u64::MAX;
