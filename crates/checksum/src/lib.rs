//! Runtime-configurable CRC checksums.
//!
//! This crate provides a single table-driven CRC engine parameterized at
//! runtime by the five Rocksoft model values (polynomial, input reflection,
//! output reflection, initial value, final XOR) plus an explicit register
//! width, together with a catalog of named standard parameter sets.
//!
//! # Model
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | register width in bits (8..=64) |
//! | `poly`    | generator polynomial, normal form, implicit top bit |
//! | `init`    | initial register value (normal domain) |
//! | `refin`   | reflect each input byte before mixing |
//! | `refout`  | reflect the final register before the output XOR |
//! | `xorout`  | value XORed into the final register |
//!
//! # Example
//!
//! ```rust
//! use checksum::catalog;
//!
//! // Engines are plain const data; the lookup table is built in `const` context.
//! const CRC32: checksum::Crc = catalog::CRC_32.engine();
//! assert_eq!(CRC32.checksum(b"123456789"), 0xCBF4_3926);
//!
//! // Streaming computation
//! use traits::Checksum;
//! let mut digest = CRC32.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0xCBF4_3926);
//! ```
//!
//! # Custom parameter sets
//!
//! ```rust
//! use checksum::{Crc, CrcParams};
//!
//! let params = CrcParams::try_new(16, 0x1021, 0x0000, false, false, 0x0000)?;
//! let xmodem = Crc::new(params);
//! assert_eq!(xmodem.checksum(b"123456789"), 0x31C3);
//! # Ok::<(), checksum::ParamsError>(())
//! ```
//!
//! Every catalog entry is verified against its published `"123456789"` check
//! value; a handful of headline standards are additionally asserted at compile
//! time through the bitwise reference implementation in [`reference`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod catalog;
mod engine;
mod params;
pub mod reference;

#[cfg(test)]
mod proptests;

pub use engine::{Crc, CrcDigest};
pub use params::{CrcParams, ParamsError};
// Re-export the streaming trait for convenience
pub use traits::Checksum;
