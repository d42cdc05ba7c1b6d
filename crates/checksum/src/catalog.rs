//! Named standard CRC parameter sets.
//!
//! Parameters follow the public crcmod / CRC RevEng catalogs, re-derived from
//! those references rather than ported from any downstream table, and every
//! entry records its published `"123456789"` check value. The full catalog is
//! conformance-tested against those check values (both the table engine and
//! the bitwise reference); see `tests/check_values.rs`.
//!
//! `init` and `xorout` are in the normal domain. Reflected variants whose
//! initial value is asymmetric (CRC-16/RIELLO, init 0xB2AA) therefore show the
//! catalog value here, not the reflected register image.

use crate::{engine::Crc, params::CrcParams};

/// A named CRC variant: parameters plus its published check value.
#[derive(Clone, Copy, Debug)]
pub struct CrcSpec {
  /// Catalog name (CRC RevEng naming).
  pub name: &'static str,
  /// The parameter set.
  pub params: CrcParams,
  /// Published CRC of the ASCII string `"123456789"`.
  pub check: u64,
}

impl CrcSpec {
  /// Build an engine for this variant.
  #[inline]
  #[must_use]
  pub const fn engine(&self) -> Crc {
    Crc::new(self.params)
  }
}

/// Look up a catalog entry by name, ASCII case-insensitive.
#[must_use]
pub fn find(name: &str) -> Option<&'static CrcSpec> {
  ALL.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

macro_rules! spec {
  ($name:literal, $width:literal, $poly:literal, $init:literal, $refin:literal, $refout:literal, $xorout:literal, $check:literal) => {
    CrcSpec {
      name: $name,
      params: CrcParams::new($width, $poly, $init, $refin, $refout, $xorout),
      check: $check,
    }
  };
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-8 (SMBus PEC).
pub const CRC_8: CrcSpec = spec!("CRC-8", 8, 0x07, 0x00, false, false, 0x00, 0xF4);
/// CRC-8/DARC (Data Radio Channel).
pub const CRC_8_DARC: CrcSpec = spec!("CRC-8/DARC", 8, 0x39, 0x00, true, true, 0x00, 0x15);
/// CRC-8/I-CODE (Philips semiconductor).
pub const CRC_8_I_CODE: CrcSpec = spec!("CRC-8/I-CODE", 8, 0x1D, 0xFD, false, false, 0x00, 0x7E);
/// CRC-8/ITU (I-432-1 ATM HEC).
pub const CRC_8_ITU: CrcSpec = spec!("CRC-8/ITU", 8, 0x07, 0x00, false, false, 0x55, 0xA1);
/// CRC-8/MAXIM (1-Wire).
pub const CRC_8_MAXIM: CrcSpec = spec!("CRC-8/MAXIM", 8, 0x31, 0x00, true, true, 0x00, 0xA1);
/// CRC-8/ROHC (Robust Header Compression).
pub const CRC_8_ROHC: CrcSpec = spec!("CRC-8/ROHC", 8, 0x07, 0xFF, true, true, 0x00, 0xD0);
/// CRC-8/WCDMA.
pub const CRC_8_WCDMA: CrcSpec = spec!("CRC-8/WCDMA", 8, 0x9B, 0x00, true, true, 0x00, 0x25);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/ARC (IBM, LHA).
pub const CRC_16_ARC: CrcSpec = spec!("CRC-16/ARC", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D);
/// CRC-16/BUYPASS (UMTS).
pub const CRC_16_BUYPASS: CrcSpec = spec!("CRC-16/BUYPASS", 16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8);
/// CRC-16/DDS-110.
pub const CRC_16_DDS_110: CrcSpec = spec!("CRC-16/DDS-110", 16, 0x8005, 0x800D, false, false, 0x0000, 0x9ECF);
/// CRC-16/DECT-R (R-CRC).
pub const CRC_16_DECT_R: CrcSpec = spec!("CRC-16/DECT-R", 16, 0x0589, 0x0000, false, false, 0x0001, 0x007E);
/// CRC-16/DECT-X (X-CRC).
pub const CRC_16_DECT_X: CrcSpec = spec!("CRC-16/DECT-X", 16, 0x0589, 0x0000, false, false, 0x0000, 0x007F);
/// CRC-16/DNP (distributed network protocol).
pub const CRC_16_DNP: CrcSpec = spec!("CRC-16/DNP", 16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82);
/// CRC-16/EN-13757 (wireless M-Bus).
pub const CRC_16_EN_13757: CrcSpec = spec!("CRC-16/EN-13757", 16, 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7);
/// CRC-16/GENIBUS (DARC, EPC, I-CODE).
pub const CRC_16_GENIBUS: CrcSpec = spec!("CRC-16/GENIBUS", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E);
/// CRC-16/MAXIM.
pub const CRC_16_MAXIM: CrcSpec = spec!("CRC-16/MAXIM", 16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2);
/// CRC-16/MCRF4XX.
pub const CRC_16_MCRF4XX: CrcSpec = spec!("CRC-16/MCRF4XX", 16, 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91);
/// CRC-16/RIELLO.
pub const CRC_16_RIELLO: CrcSpec = spec!("CRC-16/RIELLO", 16, 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0);
/// CRC-16/T10-DIF (SCSI data integrity field).
pub const CRC_16_T10_DIF: CrcSpec = spec!("CRC-16/T10-DIF", 16, 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB);
/// CRC-16/TELEDISK.
pub const CRC_16_TELEDISK: CrcSpec = spec!("CRC-16/TELEDISK", 16, 0xA097, 0x0000, false, false, 0x0000, 0x0FB3);
/// CRC-16/USB.
pub const CRC_16_USB: CrcSpec = spec!("CRC-16/USB", 16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8);
/// CRC-16/X-25 (IBM-SDLC, ISO-HDLC).
pub const CRC_16_X_25: CrcSpec = spec!("CRC-16/X-25", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E);
/// CRC-16/XMODEM (ZMODEM, ACORN).
pub const CRC_16_XMODEM: CrcSpec = spec!("CRC-16/XMODEM", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3);
/// CRC-16/MODBUS.
pub const CRC_16_MODBUS: CrcSpec = spec!("CRC-16/MODBUS", 16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37);
/// CRC-16/KERMIT (CCITT true).
pub const CRC_16_KERMIT: CrcSpec = spec!("CRC-16/KERMIT", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189);
/// CRC-16/CCITT-FALSE (IBM-3740).
pub const CRC_16_CCITT_FALSE: CrcSpec =
  spec!("CRC-16/CCITT-FALSE", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1);
/// CRC-16/AUG-CCITT (SPI Fujitsu).
pub const CRC_16_AUG_CCITT: CrcSpec =
  spec!("CRC-16/AUG-CCITT", 16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-24
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-24/OPENPGP (RFC 4880).
pub const CRC_24_OPENPGP: CrcSpec =
  spec!("CRC-24/OPENPGP", 24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000, 0x21_CF02);
/// CRC-24/FLEXRAY-A.
pub const CRC_24_FLEXRAY_A: CrcSpec =
  spec!("CRC-24/FLEXRAY-A", 24, 0x5D_6DCB, 0xFE_DCBA, false, false, 0x00_0000, 0x79_79BD);
/// CRC-24/FLEXRAY-B.
pub const CRC_24_FLEXRAY_B: CrcSpec =
  spec!("CRC-24/FLEXRAY-B", 24, 0x5D_6DCB, 0xAB_CDEF, false, false, 0x00_0000, 0x1F_23B8);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 (IEEE 802.3, ISO-HDLC: Ethernet, gzip, zip, PNG).
pub const CRC_32: CrcSpec =
  spec!("CRC-32", 32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926);
/// CRC-32/BZIP2 (AAL5, DECT packets).
pub const CRC_32_BZIP2: CrcSpec =
  spec!("CRC-32/BZIP2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918);
/// CRC-32C (Castagnoli: iSCSI, SCTP, ext4, Btrfs).
pub const CRC_32_C: CrcSpec =
  spec!("CRC-32C", 32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xE306_9283);
/// CRC-32D.
pub const CRC_32_D: CrcSpec =
  spec!("CRC-32D", 32, 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x8731_5576);
/// CRC-32/MPEG-2.
pub const CRC_32_MPEG_2: CrcSpec =
  spec!("CRC-32/MPEG-2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000, 0x0376_E6E7);
/// CRC-32/POSIX (cksum).
pub const CRC_32_POSIX: CrcSpec =
  spec!("CRC-32/POSIX", 32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF, 0x765E_7680);
/// CRC-32Q (AIXM).
pub const CRC_32_Q: CrcSpec =
  spec!("CRC-32Q", 32, 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000, 0x3010_BF7F);
/// CRC-32/JAMCRC.
pub const CRC_32_JAMCRC: CrcSpec =
  spec!("CRC-32/JAMCRC", 32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000, 0x340B_C6D9);
/// CRC-32/XFER.
pub const CRC_32_XFER: CrcSpec =
  spec!("CRC-32/XFER", 32, 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000, 0xBD0B_E338);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-64 (ISO 3309 polynomial 0x1B).
pub const CRC_64: CrcSpec = spec!(
  "CRC-64",
  64,
  0x0000_0000_0000_001B,
  0x0000_0000_0000_0000,
  true,
  true,
  0x0000_0000_0000_0000,
  0x46A5_A938_8A5B_EFFE
);
/// CRC-64/WE.
pub const CRC_64_WE: CrcSpec = spec!(
  "CRC-64/WE",
  64,
  0x42F0_E1EB_A9EA_3693,
  0xFFFF_FFFF_FFFF_FFFF,
  false,
  false,
  0xFFFF_FFFF_FFFF_FFFF,
  0x62EC_59E3_F1A4_F00A
);
/// CRC-64/XZ (XZ Utils, 7-Zip).
pub const CRC_64_XZ: CrcSpec = spec!(
  "CRC-64/XZ",
  64,
  0x42F0_E1EB_A9EA_3693,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
  true,
  0xFFFF_FFFF_FFFF_FFFF,
  0x995D_C9BB_DF19_39FA
);
/// CRC-64/JONES (Redis, crcmod's jones variant).
pub const CRC_64_JONES: CrcSpec = spec!(
  "CRC-64/JONES",
  64,
  0xAD93_D235_94C9_35A9,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
  true,
  0x0000_0000_0000_0000,
  0xCAA7_1716_8609_F281
);
/// CRC-64/NVME.
pub const CRC_64_NVME: CrcSpec = spec!(
  "CRC-64/NVME",
  64,
  0xAD93_D235_94C9_3659,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
  true,
  0xFFFF_FFFF_FFFF_FFFF,
  0xAE8B_1486_0A79_9888
);

/// Every catalog entry, for mechanical conformance testing.
pub const ALL: &[CrcSpec] = &[
  CRC_8,
  CRC_8_DARC,
  CRC_8_I_CODE,
  CRC_8_ITU,
  CRC_8_MAXIM,
  CRC_8_ROHC,
  CRC_8_WCDMA,
  CRC_16_ARC,
  CRC_16_BUYPASS,
  CRC_16_DDS_110,
  CRC_16_DECT_R,
  CRC_16_DECT_X,
  CRC_16_DNP,
  CRC_16_EN_13757,
  CRC_16_GENIBUS,
  CRC_16_MAXIM,
  CRC_16_MCRF4XX,
  CRC_16_RIELLO,
  CRC_16_T10_DIF,
  CRC_16_TELEDISK,
  CRC_16_USB,
  CRC_16_X_25,
  CRC_16_XMODEM,
  CRC_16_MODBUS,
  CRC_16_KERMIT,
  CRC_16_CCITT_FALSE,
  CRC_16_AUG_CCITT,
  CRC_24_OPENPGP,
  CRC_24_FLEXRAY_A,
  CRC_24_FLEXRAY_B,
  CRC_32,
  CRC_32_BZIP2,
  CRC_32_C,
  CRC_32_D,
  CRC_32_MPEG_2,
  CRC_32_POSIX,
  CRC_32_Q,
  CRC_32_JAMCRC,
  CRC_32_XFER,
  CRC_64,
  CRC_64_WE,
  CRC_64_XZ,
  CRC_64_JONES,
  CRC_64_NVME,
];
