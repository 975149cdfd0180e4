#![cfg_attr(not(feature = "std"), no_std)]

pub mod legacy;
pub mod protocol;

pub use legacy::*;
pub use protocol::*;
