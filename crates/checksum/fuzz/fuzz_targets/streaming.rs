//! Fuzzes streaming digests: any chunking must equal the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use checksum::catalog;
use libfuzzer_sys::fuzz_target;
use traits::Checksum;

#[derive(Arbitrary, Debug)]
struct Input {
  variant: usize,
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let spec = &catalog::ALL[input.variant % catalog::ALL.len()];
  let crc = spec.engine();
  let oneshot = crc.checksum(&input.data);

  // Normalize splits to valid positions and feed the pieces in order.
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (input.data.len() + 1)).collect();
  splits.sort_unstable();
  splits.dedup();

  let mut digest = crc.digest();
  let mut prev = 0;
  for &split in &splits {
    digest.update(&input.data[prev..split]);
    prev = split;
  }
  digest.update(&input.data[prev..]);
  assert_eq!(digest.finalize(), oneshot);

  // Finalize must be idempotent.
  assert_eq!(digest.finalize(), oneshot);
});
