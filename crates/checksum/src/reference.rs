//! Bitwise reference implementation.
//!
//! Processes one bit at a time directly from the mathematical definition, with
//! no lookup table and no reflected-register shortcut: the register always
//! runs MSB-first in the normal domain, input bytes are reflected on entry
//! when `refin` is set, and the result is reflected at the end when `refout`
//! is set.
//!
//! That structural difference from the production engine is the point — the
//! two implementations agree only if both are correct. Intentionally slow
//! (~8 operations per bit); use as a test oracle, never for throughput.

// Data is indexed by a bounded loop counter; const fn bodies cannot use
// iterators.
#![allow(clippy::indexing_slicing)]

use bits::{reflect_bits, reflect_u8};

use crate::params::CrcParams;

/// Bitwise CRC computation over any parameter set.
///
/// Const-evaluable; the catalog's headline check values are asserted against
/// this function at compile time below.
#[must_use]
pub const fn crc_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let width = params.width();
  let mask = params.mask();
  let top = 1u64 << (width - 1);

  let mut register = params.init();
  let mut i = 0;
  while i < data.len() {
    let byte = if params.refin() { reflect_u8(data[i]) } else { data[i] };
    register ^= (byte as u64) << (width - 8);
    let mut bit = 0;
    while bit < 8 {
      register = if register & top != 0 {
        ((register << 1) ^ params.poly()) & mask
      } else {
        (register << 1) & mask
      };
      bit += 1;
    }
    i += 1;
  }

  if params.refout() {
    register = reflect_bits(register, width);
  }
  (register ^ params.xorout()) & mask
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Headline standards asserted against their published "123456789" check
// values. If any of these fail, the build fails.

use crate::catalog;

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  assert!(crc_bitwise(&catalog::CRC_8.params, CHECK_INPUT) == 0xF4);
  assert!(crc_bitwise(&catalog::CRC_16_XMODEM.params, CHECK_INPUT) == 0x31C3);
  assert!(crc_bitwise(&catalog::CRC_16_X_25.params, CHECK_INPUT) == 0x906E);
  assert!(crc_bitwise(&catalog::CRC_24_OPENPGP.params, CHECK_INPUT) == 0x0021_CF02);
  assert!(crc_bitwise(&catalog::CRC_32.params, CHECK_INPUT) == 0xCBF4_3926);
  assert!(crc_bitwise(&catalog::CRC_32_C.params, CHECK_INPUT) == 0xE306_9283);
  assert!(crc_bitwise(&catalog::CRC_64_XZ.params, CHECK_INPUT) == 0x995D_C9BB_DF19_39FA);
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_is_finalized_init() {
    // CRC-16/CCITT-FALSE: init 0xFFFF, no reflection, xorout 0.
    assert_eq!(crc_bitwise(&catalog::CRC_16_CCITT_FALSE.params, &[]), 0xFFFF);
    // CRC-32: reflect(0xFFFFFFFF) ^ 0xFFFFFFFF == 0.
    assert_eq!(crc_bitwise(&catalog::CRC_32.params, &[]), 0);
  }

  #[test]
  fn resumable_for_non_finalized_variants() {
    // With init folded in and no output transform, bitwise computation can be
    // chained byte-by-byte through intermediate registers.
    let data = b"The quick brown fox jumps over the lazy dog";
    let p = catalog::CRC_16_XMODEM.params;
    let oneshot = crc_bitwise(&p, data);

    for split in 0..data.len() {
      let first = crc_bitwise(&p, &data[..split]);
      let resumed = CrcParams::new(16, p.poly(), first, false, false, 0);
      assert_eq!(crc_bitwise(&resumed, &data[split..]), oneshot, "split {split}");
    }
  }

  #[test]
  fn single_zero_byte_with_zero_parameters() {
    let p = CrcParams::new(8, 0x07, 0, false, false, 0);
    assert_eq!(crc_bitwise(&p, &[0x00]), 0x00);
    assert_eq!(crc_bitwise(&p, &[0x01]), 0x07, "one trailing set bit picks up the polynomial once");
  }
}
