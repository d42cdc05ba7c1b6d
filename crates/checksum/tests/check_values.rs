//! Catalog conformance against published check values.
//!
//! Every named variant must reproduce the published CRC of the ASCII string
//! `"123456789"` — through the table-driven engine, through the bitwise
//! reference, and through the streaming digest. A failure here means a
//! catalog parameter is wrong, not (only) an engine bug: the check values are
//! external truth.

use checksum::{Checksum, catalog, reference::crc_bitwise};

const CHECK_INPUT: &[u8] = b"123456789";

#[test]
fn every_catalog_entry_matches_its_check_value() {
  for spec in catalog::ALL {
    let crc = spec.engine();
    assert_eq!(
      crc.checksum(CHECK_INPUT),
      spec.check,
      "{}: table engine disagrees with published check value",
      spec.name
    );
  }
}

#[test]
fn bitwise_reference_matches_every_check_value() {
  for spec in catalog::ALL {
    assert_eq!(
      crc_bitwise(&spec.params, CHECK_INPUT),
      spec.check,
      "{}: bitwise reference disagrees with published check value",
      spec.name
    );
  }
}

#[test]
fn streaming_digest_matches_every_check_value() {
  for spec in catalog::ALL {
    let crc = spec.engine();
    let mut digest = crc.digest();
    digest.update(b"1234");
    digest.update(b"");
    digest.update(b"56789");
    assert_eq!(digest.finalize(), spec.check, "{}", spec.name);
  }
}

#[test]
fn engine_and_reference_agree_on_empty_input() {
  for spec in catalog::ALL {
    let crc = spec.engine();
    assert_eq!(crc.checksum(&[]), crc_bitwise(&spec.params, &[]), "{}", spec.name);
  }
}

#[test]
fn known_vectors_beyond_the_check_string() {
  // Independent published vectors, not derived from this codebase.
  let crc32 = catalog::CRC_32.engine();
  assert_eq!(crc32.checksum(b""), 0x0000_0000);
  assert_eq!(crc32.checksum(b"a"), 0xE8B7_BE43);
  assert_eq!(crc32.checksum(b"abc"), 0x3524_41C2);
  assert_eq!(crc32.checksum(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);

  let crc32c = catalog::CRC_32_C.engine();
  assert_eq!(crc32c.checksum(b"hello world"), 0xC994_65AA);

  let xmodem = catalog::CRC_16_XMODEM.engine();
  assert_eq!(xmodem.checksum(b""), 0x0000);
}
