//! This crate compiles all the interfaces of the `fwint` system of crates.
//!
//! The `UInt` storage type is a fixed width unsigned integer stored inline
//! on the stack, with `U256` and `U512` being the primary width aliases.
//! Arithmetic is modular over the bitwidth, division runs on a
//! reciprocal-based long division engine, and both little- and big-endian
//! byte serializations are bit-exact with the word layout.

#![no_std]

pub use fwint_core::{prelude::*, ParseError};

pub mod prelude {
    pub use crate::*;
}
