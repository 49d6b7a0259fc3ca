#[cfg(feature = "serde_support")]
mod serde;
mod uint;

pub use uint::{UInt, U1024, U128, U256, U320, U512};
