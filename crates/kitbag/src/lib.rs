//! Small utility primitives around a runtime-configurable CRC engine.
//!
//! The centerpiece is [`Crc`]: one engine that computes any CRC of width 8
//! through 64 from a [`CrcParams`] description, with a [`catalog`] of named
//! standard variants verified against their published check values. Around it
//! sit small, self-contained helpers: bit reflection, ASCII string routines,
//! statistics, a pausable stopwatch, and ID allocation.
//!
//! # Quick Start
//!
//! ```
//! use kitbag::{Checksum, catalog};
//!
//! let crc32 = catalog::find("CRC-32").unwrap().engine();
//!
//! // One-shot computation
//! assert_eq!(crc32.checksum(b"123456789"), 0xCBF43926);
//!
//! // Streaming computation
//! let mut digest = crc32.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0xCBF43926);
//! ```
//!
//! Custom parameter sets work the same way:
//!
//! ```
//! use kitbag::{Crc, CrcParams};
//!
//! const XMODEM: Crc = Crc::new(CrcParams::new(16, 0x1021, 0, false, false, 0));
//! assert_eq!(XMODEM.checksum(b"123456789"), 0x31C3);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables [`timer`] and [`stats`] (monotonic clocks, `f64::sqrt`) |
//!
//! Without `std` the crate is `no_std`: the CRC engine, [`bits`],
//! [`strings`], and [`ident`] remain fully available.
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Checksums
// =============================================================================

pub use checksum::{Checksum, Crc, CrcDigest, CrcParams, ParamsError, catalog};

// =============================================================================
// Traits
// =============================================================================

pub use traits::{IdGenerator, IdHolder};

// =============================================================================
// Leaf utilities
// =============================================================================

pub mod bits {
  //! Bit-order reflection primitives.
  pub use ::bits::*;
}

pub mod strings {
  //! ASCII classification, search, parsing, and skipping.
  pub use ::strings::*;
}

pub mod ident {
  //! Sequential ID allocation and RAII tickets.
  pub use ::ident::*;
}

#[cfg(feature = "std")]
pub mod stats {
  //! Statistical aggregates over sample slices.
  pub use ::stats::*;
}

#[cfg(feature = "std")]
pub mod timer {
  //! Pausable stopwatch over monotonic time.
  pub use ::timer::*;
}

#[cfg(feature = "std")]
pub use ::timer::Stopwatch;
