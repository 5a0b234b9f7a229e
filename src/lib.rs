#![cfg_attr(not(test), no_std)]

mod peripherals;

pub use peripherals::*;
