//! Bit-reflection primitives.
//!
//! Reflection reverses the order of bits within a fixed-width value: bit 0
//! swaps with bit N-1, bit 1 with bit N-2, and so on. This is *not* a byte
//! swap — every bit moves.
//!
//! The 8-bit primitive uses a nibble lookup table; every wider power-of-two
//! width is built from it by reflecting each byte and reversing byte order,
//! which is the same permutation as a full bit reversal. [`reflect_bits`]
//! covers arbitrary widths up to 64 (needed for 24-bit CRC registers).
//!
//! All fixed-width functions are `const fn` and total.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

// Nibble-reversal lookup: entry i holds the 4-bit reversal of i.
#[rustfmt::skip]
const NIBBLE: [u8; 16] = [
  0x0, 0x8, 0x4, 0xC,
  0x2, 0xA, 0x6, 0xE,
  0x1, 0x9, 0x5, 0xD,
  0x3, 0xB, 0x7, 0xF,
];

/// Reverse the bit order of a byte.
#[inline]
#[must_use]
#[allow(clippy::indexing_slicing)] // indices are masked to 0..16
pub const fn reflect_u8(value: u8) -> u8 {
  (NIBBLE[(value & 0x0F) as usize] << 4) | NIBBLE[(value >> 4) as usize]
}

/// Reverse the bit order of a 16-bit value.
///
/// Equivalent to reflecting each byte and swapping byte order.
#[inline]
#[must_use]
pub const fn reflect_u16(value: u16) -> u16 {
  let v = value.swap_bytes();
  let lo = reflect_u8(v as u8) as u16;
  let hi = reflect_u8((v >> 8) as u8) as u16;
  (hi << 8) | lo
}

/// Reverse the bit order of a 32-bit value.
#[inline]
#[must_use]
pub const fn reflect_u32(value: u32) -> u32 {
  let v = value.swap_bytes();
  let mut out = 0u32;
  let mut i = 0;
  while i < 4 {
    out |= (reflect_u8((v >> (8 * i)) as u8) as u32) << (8 * i);
    i += 1;
  }
  out
}

/// Reverse the bit order of a 64-bit value.
#[inline]
#[must_use]
pub const fn reflect_u64(value: u64) -> u64 {
  let v = value.swap_bytes();
  let mut out = 0u64;
  let mut i = 0;
  while i < 8 {
    out |= (reflect_u8((v >> (8 * i)) as u8) as u64) << (8 * i);
    i += 1;
  }
  out
}

/// Reverse the bit order of a signed byte.
#[inline]
#[must_use]
pub const fn reflect_i8(value: i8) -> i8 {
  reflect_u8(value as u8) as i8
}

/// Reverse the bit order of a signed 16-bit value.
#[inline]
#[must_use]
pub const fn reflect_i16(value: i16) -> i16 {
  reflect_u16(value as u16) as i16
}

/// Reverse the bit order of a signed 32-bit value.
#[inline]
#[must_use]
pub const fn reflect_i32(value: i32) -> i32 {
  reflect_u32(value as u32) as i32
}

/// Reverse the bit order of a signed 64-bit value.
#[inline]
#[must_use]
pub const fn reflect_i64(value: i64) -> i64 {
  reflect_u64(value as u64) as i64
}

/// Reverse the low `bits` bits of `value`.
///
/// Bits at positions `bits..64` of the input are ignored; the result occupies
/// the low `bits` bits. This covers register widths with no native integer
/// type, such as the 24-bit CRC registers.
///
/// # Panics
///
/// Panics if `bits` is 0 or greater than 64 (construction-time contract; in
/// `const` context this fails the build).
#[must_use]
pub const fn reflect_bits(value: u64, bits: u32) -> u64 {
  assert!(bits >= 1 && bits <= 64, "reflect_bits: width out of range");
  let mut out = 0u64;
  let mut v = value;
  let mut i = 0;
  while i < bits {
    out |= (v & 1) << (bits - 1 - i);
    v >>= 1;
    i += 1;
  }
  out
}

/// Reverse the bit order across an entire byte span, in place.
///
/// The first bit of the first byte becomes the last bit of the last byte.
/// Implemented as byte-order reversal plus per-byte reflection.
pub fn reflect_bytes_in_place(buf: &mut [u8]) {
  buf.reverse();
  for b in buf.iter_mut() {
    *b = reflect_u8(*b);
  }
}
