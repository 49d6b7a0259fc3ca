mod bitwise;
mod bytes;
mod cmp;
mod const_str;
mod div;
mod modular;
mod mul;
#[cfg(feature = "rand_support")]
mod rand;
mod shift;
mod sum;
#[cfg(feature = "zeroize_support")]
mod zeroize;
