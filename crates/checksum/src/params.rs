//! CRC parameter records and their construction-time validation.

use core::fmt;

/// An immutable description of one CRC variant (Rocksoft model).
///
/// `init` and `xorout` are recorded in the normal (non-reflected) domain, as
/// published by the crcmod / CRC RevEng catalogs. Engines that run a reflected
/// register perform the domain conversion themselves.
///
/// Malformed parameters are a programmer error, not a runtime condition:
/// [`CrcParams::new`] panics (failing the build when used in `const` context)
/// and [`CrcParams::try_new`] returns [`ParamsError`] for parameters assembled
/// at runtime. A constructed `CrcParams` is always internally consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  width: u32,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
}

impl CrcParams {
  /// Create a parameter record, panicking on contract violations.
  ///
  /// Intended for `const` definitions, where a violation fails the build.
  /// Use [`try_new`](Self::try_new) for runtime-supplied parameters.
  ///
  /// # Panics
  ///
  /// Panics if `width` is outside `8..=64`, or if `poly`, `init`, or `xorout`
  /// do not fit in `width` bits.
  #[must_use]
  pub const fn new(width: u32, poly: u64, init: u64, refin: bool, refout: bool, xorout: u64) -> Self {
    match Self::try_new(width, poly, init, refin, refout, xorout) {
      Ok(params) => params,
      Err(ParamsError::WidthOutOfRange) => panic!("CRC width must be in 8..=64"),
      Err(ParamsError::PolyTooWide) => panic!("CRC polynomial does not fit in width bits"),
      Err(ParamsError::InitTooWide) => panic!("CRC initial value does not fit in width bits"),
      Err(ParamsError::XoroutTooWide) => panic!("CRC final XOR does not fit in width bits"),
    }
  }

  /// Create a parameter record, rejecting contract violations.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError`] if `width` is outside `8..=64` or any value
  /// exceeds `width` bits. Values are never silently truncated.
  pub const fn try_new(
    width: u32,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
  ) -> Result<Self, ParamsError> {
    if width < 8 || width > 64 {
      return Err(ParamsError::WidthOutOfRange);
    }
    let mask = width_mask(width);
    if poly & !mask != 0 {
      return Err(ParamsError::PolyTooWide);
    }
    if init & !mask != 0 {
      return Err(ParamsError::InitTooWide);
    }
    if xorout & !mask != 0 {
      return Err(ParamsError::XoroutTooWide);
    }
    Ok(Self { width, poly, init, refin, refout, xorout })
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Generator polynomial in normal (MSB-first) form.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.poly
  }

  /// Initial register value, normal domain.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  /// Whether input bytes are bit-reversed before mixing.
  #[inline]
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.refin
  }

  /// Whether the final register is bit-reversed before the output XOR.
  #[inline]
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.refout
  }

  /// Value XORed into the final register.
  #[inline]
  #[must_use]
  pub const fn xorout(&self) -> u64 {
    self.xorout
  }

  /// Mask selecting the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.width)
  }
}

/// Mask selecting the low `width` bits of a u64.
const fn width_mask(width: u32) -> u64 {
  if width == 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// A CRC parameter record violated its construction contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// `width` was outside `8..=64`.
  WidthOutOfRange,
  /// `poly` had bits above `width`.
  PolyTooWide,
  /// `init` had bits above `width`.
  InitTooWide,
  /// `xorout` had bits above `width`.
  XoroutTooWide,
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      Self::WidthOutOfRange => "CRC width must be in 8..=64",
      Self::PolyTooWide => "CRC polynomial does not fit in width bits",
      Self::InitTooWide => "CRC initial value does not fit in width bits",
      Self::XoroutTooWide => "CRC final XOR does not fit in width bits",
    };
    f.write_str(msg)
  }
}

impl core::error::Error for ParamsError {}
