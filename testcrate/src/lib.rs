//! This crate exists only for the testing and benchmarking of the other
//! `fwint` crates, and is not intended for regular use.
