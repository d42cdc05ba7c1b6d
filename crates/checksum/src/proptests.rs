//! Property tests for the CRC engine.
//!
//! Two oracles back these properties:
//!
//! 1. the bitwise reference implementation (mathematical definition, different
//!    register domain from the production engine), and
//! 2. the catalog check values (external published truth).
//!
//! The differential property over *arbitrary* parameter sets is the strongest:
//! it exercises widths and flag combinations no named standard covers,
//! including `refin != refout`.

#![cfg(not(miri))]

extern crate std;

use proptest::prelude::*;

use crate::{Checksum, Crc, CrcParams, catalog, reference::crc_bitwise};

/// Arbitrary valid parameter sets: any width in 8..=64, values masked to fit.
fn params_strategy() -> impl Strategy<Value = CrcParams> {
  (8u32..=64, any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>(), any::<u64>()).prop_map(
    |(width, poly, init, refin, refout, xorout)| {
      let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
      match CrcParams::try_new(width, poly & mask, init & mask, refin, refout, xorout & mask) {
        Ok(params) => params,
        // Masked values always satisfy the contract.
        Err(_) => unreachable!("masked parameters are always valid"),
      }
    },
  )
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  /// Table-driven engine == bitwise reference, for any parameters and data.
  #[test]
  fn engine_matches_bitwise_reference(
    params in params_strategy(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let crc = Crc::new(params);
    prop_assert_eq!(crc.checksum(&data), crc_bitwise(&params, &data));
  }

  /// Same configuration and data, same result.
  #[test]
  fn determinism(
    params in params_strategy(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let a = Crc::new(params);
    let b = Crc::new(params);
    prop_assert_eq!(a.checksum(&data), b.checksum(&data));
  }

  /// Any chunking through the streaming digest equals the one-shot result.
  #[test]
  fn chunking_equivalence(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    chunk_sizes in proptest::collection::vec(1usize..=64, 1..=32),
    which in 0usize..catalog::ALL.len(),
  ) {
    let spec = &catalog::ALL[which];
    let crc = spec.engine();
    let oneshot = crc.checksum(&data);

    let mut digest = crc.digest();
    let mut rest = data.as_slice();
    let mut i = 0;
    while !rest.is_empty() {
      let take = chunk_sizes[i % chunk_sizes.len()].min(rest.len());
      let (chunk, tail) = rest.split_at(take);
      digest.update(chunk);
      rest = tail;
      i += 1;
    }
    prop_assert_eq!(digest.finalize(), oneshot);
  }

  /// Appending one byte always changes at most `width` bits of state, but the
  /// register evolution through a digest must match re-running from scratch.
  #[test]
  fn incremental_extension(
    data in proptest::collection::vec(any::<u8>(), 0..=256),
    extra in any::<u8>(),
    which in 0usize..catalog::ALL.len(),
  ) {
    let spec = &catalog::ALL[which];
    let crc = spec.engine();

    let mut digest = crc.digest();
    digest.update(&data);
    digest.update(&[extra]);

    let mut extended = data.clone();
    extended.push(extra);
    prop_assert_eq!(digest.finalize(), crc.checksum(&extended));
  }
}
