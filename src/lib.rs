#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod vec;

pub use vec::*;
