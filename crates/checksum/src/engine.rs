//! Table-driven CRC engine.
//!
//! [`Crc`] owns the 256-entry lookup table for one parameter set. The table is
//! computed eagerly in the `const fn` constructor, so an engine is plain
//! immutable data: safe to put in a `static`, safe to share across threads,
//! and free of any lazy-initialization locking. The only mutable state in a
//! computation is the running register, scoped to the call (one-shot) or to a
//! [`CrcDigest`] (streaming).

// Table indices are masked to 0..256 and data is indexed by a bounded loop
// counter; const fn bodies cannot use iterators.
#![allow(clippy::indexing_slicing)]

use bits::{reflect_bits, reflect_u8};
use traits::Checksum;

use crate::params::CrcParams;

/// A configured CRC engine.
///
/// Construction is `const`; the catalog exposes ready-made parameter sets:
///
/// ```rust
/// use checksum::catalog;
///
/// const KERMIT: checksum::Crc = catalog::CRC_16_KERMIT.engine();
/// assert_eq!(KERMIT.checksum(b"123456789"), 0x2189);
/// ```
#[derive(Clone)]
pub struct Crc {
  params: CrcParams,
  table: [u64; 256],
}

impl Crc {
  /// Build an engine for a parameter set.
  ///
  /// Computes the full lookup table; for a fixed variant, do this once in a
  /// `const`/`static` and reuse the engine for every buffer.
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    Self { params, table: build_table(&params) }
  }

  /// The parameter set this engine was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    self.params
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.params.width()
  }

  /// Compute the checksum of `data` in one shot.
  ///
  /// Pure and total: any byte content and any length (including zero) is
  /// valid. A zero-length input yields the finalization of the initial
  /// register with no bytes mixed in.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize_register(self.process(self.initial_register(), data))
  }

  /// Start a streaming computation borrowing this engine.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> CrcDigest<'_> {
    CrcDigest { crc: self, register: self.initial_register() }
  }

  /// The register value before any byte is processed.
  ///
  /// Parameters record `init` in the normal domain; a reflected engine runs
  /// its register in the reflected domain, so `init` is reflected on entry.
  #[inline]
  const fn initial_register(&self) -> u64 {
    if self.params.refin() {
      reflect_bits(self.params.init(), self.params.width())
    } else {
      self.params.init()
    }
  }

  /// Mix `data` into a running register.
  const fn process(&self, mut register: u64, data: &[u8]) -> u64 {
    let width = self.params.width();
    let mask = self.params.mask();
    let mut i = 0;
    while i < data.len() {
      let d = data[i] as u64;
      register = if self.params.refin() {
        (register >> 8) ^ self.table[((register ^ d) & 0xFF) as usize]
      } else {
        ((register << 8) & mask) ^ self.table[(((register >> (width - 8)) ^ d) & 0xFF) as usize]
      };
      i += 1;
    }
    register
  }

  /// Apply output reflection and the final XOR to a register.
  ///
  /// A reflected engine's register already lives in the reflected domain, so
  /// the final bit reversal is needed only when `refout` and `refin` disagree.
  const fn finalize_register(&self, register: u64) -> u64 {
    let register = if self.params.refout() != self.params.refin() {
      reflect_bits(register, self.params.width())
    } else {
      register
    };
    (register ^ self.params.xorout()) & self.params.mask()
  }
}

impl core::fmt::Debug for Crc {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // The 256-entry table is derived data; printing it would drown the params.
    f.debug_struct("Crc").field("params", &self.params).finish_non_exhaustive()
  }
}

/// Derive the lookup table for a parameter set.
///
/// Entry `b` is the register contribution of one byte:
///
/// 1. bit-reverse `b` if `refin` is set;
/// 2. shift it into the top byte of a width-bit register;
/// 3. eight rounds of polynomial division on the top bit;
/// 4. bit-reverse the width-bit result if `refin` is set.
///
/// Both reflections are keyed on `refin`: the table lives in the same domain
/// as the input bytes. `refout` plays no part here; it only affects
/// finalization.
const fn build_table(params: &CrcParams) -> [u64; 256] {
  let width = params.width();
  let mask = params.mask();
  let top = 1u64 << (width - 1);

  let mut table = [0u64; 256];
  let mut i = 0usize;
  while i < 256 {
    let byte = if params.refin() { reflect_u8(i as u8) } else { i as u8 };
    let mut register = (byte as u64) << (width - 8);
    let mut bit = 0;
    while bit < 8 {
      register = if register & top != 0 {
        ((register << 1) ^ params.poly()) & mask
      } else {
        (register << 1) & mask
      };
      bit += 1;
    }
    if params.refin() {
      register = reflect_bits(register, width);
    }
    table[i] = register;
    i += 1;
  }
  table
}

/// Streaming CRC computation borrowing a [`Crc`] engine.
///
/// Any chunking of the input produces the same result as a one-shot
/// [`Crc::checksum`] over the concatenation.
#[derive(Clone, Debug)]
pub struct CrcDigest<'a> {
  crc: &'a Crc,
  register: u64,
}

impl Checksum for CrcDigest<'_> {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.register = self.crc.process(self.register, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.crc.finalize_register(self.register)
  }

  #[inline]
  fn reset(&mut self) {
    self.register = self.crc.initial_register();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  #[test]
  fn single_zero_byte_with_zero_parameters_is_zero() {
    // CRC-8, poly 0x07, init 0, xorout 0, no reflection: a zero byte never
    // sets the top bit, so the register stays zero end to end.
    let crc = Crc::new(CrcParams::new(8, 0x07, 0x00, false, false, 0x00));
    assert_eq!(crc.checksum(&[0x00]), 0x00);
  }

  #[test]
  fn empty_input_is_finalized_init() {
    // No bytes mixed in: result is finalization applied to init alone.
    let crc = catalog::CRC_32.engine();
    let p = crc.params();
    let expected = (bits::reflect_u32(p.init() as u32) as u64) ^ p.xorout();
    assert_eq!(crc.checksum(&[]), expected & p.mask());
    assert_eq!(crc.checksum(b""), 0x0000_0000, "CRC-32 of empty input is 0");

    // Non-reflected variant: init passes through unreflected.
    let ccitt = catalog::CRC_16_CCITT_FALSE.engine();
    assert_eq!(ccitt.checksum(&[]), 0xFFFF);
  }

  #[test]
  fn determinism() {
    let crc = catalog::CRC_64_XZ.engine();
    let data = b"determinism probe";
    assert_eq!(crc.checksum(data), crc.checksum(data));
  }

  #[test]
  fn tables_are_input_independent() {
    // Recomputing the table for the same parameters yields identical entries,
    // and processing data through one engine does not disturb another.
    let a = Crc::new(catalog::CRC_32.params);
    let b = Crc::new(catalog::CRC_32.params);
    assert_eq!(a.table, b.table);

    let _ = a.checksum(b"some traffic through engine a");
    assert_eq!(a.table, b.table);
  }

  #[test]
  fn table_entry_zero_is_zero() {
    // Entry 0 is always 0: polynomial division of an all-zero register.
    for spec in catalog::ALL {
      let crc = spec.engine();
      assert_eq!(crc.table[0], 0, "{}", spec.name);
    }
  }

  #[test]
  fn reflected_and_normal_paths_disagree_on_purpose() {
    // Same polynomial, opposite reflection: the variants must differ.
    let kermit = catalog::CRC_16_KERMIT.engine();
    let xmodem = catalog::CRC_16_XMODEM.engine();
    assert_ne!(kermit.checksum(b"123456789"), xmodem.checksum(b"123456789"));
  }

  #[test]
  fn digest_matches_oneshot_across_chunkings() {
    let crc = catalog::CRC_32_C.engine();
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = crc.checksum(data);

    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let mut digest = crc.digest();
      digest.update(a);
      digest.update(b);
      assert_eq!(digest.finalize(), oneshot, "split at {split}");
    }
  }

  #[test]
  fn digest_finalize_is_idempotent_and_reset_restores() {
    let crc = catalog::CRC_16_X_25.engine();
    let mut digest = crc.digest();
    digest.update(b"123456789");
    assert_eq!(digest.finalize(), digest.finalize());
    assert_eq!(digest.finalize(), 0x906E);

    digest.reset();
    digest.update(b"123456789");
    assert_eq!(digest.finalize(), 0x906E);
  }

  #[test]
  fn update_vectored_matches_contiguous() {
    let crc = catalog::CRC_24_OPENPGP.engine();
    let mut digest = crc.digest();
    digest.update_vectored(&[b"123", b"", b"456", b"789"]);
    assert_eq!(digest.finalize(), crc.checksum(b"123456789"));
  }

  #[test]
  fn engines_are_shareable_across_threads() {
    extern crate std;

    use std::{sync::Arc, thread, vec::Vec};

    let crc = Arc::new(catalog::CRC_64_XZ.engine());
    let expected = crc.checksum(b"123456789");

    let handles: Vec<_> = (0..4)
      .map(|_| {
        let crc = Arc::clone(&crc);
        thread::spawn(move || crc.checksum(b"123456789"))
      })
      .collect();
    for handle in handles {
      assert_eq!(handle.join().expect("worker panicked"), expected);
    }
  }
}
