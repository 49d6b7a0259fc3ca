//! Fixed width integers library
//!
//! This is the core library of the `fwint` system of crates. This crate is
//! strictly `no-std` and `no-alloc`, not even requiring an allocator to be
//! compiled. This crate supplies the `UInt` storage type, its `U256`/`U512`
//! width aliases, and the word-oriented arithmetic on them, including the
//! reciprocal-based long division engine.
//!
//! Addition, subtraction, and multiplication are modular over the bitwidth,
//! and shifts of the bitwidth or more produce zero. Fallible operations that
//! a caller can meaningfully handle return an `Option` or `Result`; the only
//! panicking paths are the `/` and `%` operators on a zero divisor and
//! out-of-range word indexing.

#![no_std]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![deny(unsafe_op_in_unsafe_fn)]

pub use fwint_internals::ParseError;

pub(crate) mod data;
pub use data::{UInt, U1024, U128, U256, U320, U512};

mod logic;

pub mod prelude {
    pub use crate::{UInt, U1024, U128, U256, U320, U512};
}
