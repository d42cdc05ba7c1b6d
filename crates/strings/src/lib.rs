//! ASCII string classification, search, parsing, and skipping.
//!
//! Everything here is byte-oriented and ASCII-only by design: classification
//! of non-ASCII bytes is simply `false`, and case mapping leaves them
//! untouched. Functions come in three families:
//!
//! - predicates on single bytes (`is_*`) and whole strings (`*_str`)
//! - searches returning byte offsets (`find_*`) or remainders (`skip_*`)
//! - numeric readers that consume a prefix and return the rest (`read_*`)
//!
//! All functions are total; absence is `None` or an unchanged remainder, never
//! a panic.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

use core::cmp::Ordering;

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Is the byte an ASCII upper case letter?
#[inline]
#[must_use]
pub const fn is_upper(b: u8) -> bool {
  b.is_ascii_uppercase()
}

/// Is the byte an ASCII lower case letter?
#[inline]
#[must_use]
pub const fn is_lower(b: u8) -> bool {
  b.is_ascii_lowercase()
}

/// Is the byte an ASCII letter?
#[inline]
#[must_use]
pub const fn is_letter(b: u8) -> bool {
  b.is_ascii_alphabetic()
}

/// Is the byte an ASCII decimal digit?
#[inline]
#[must_use]
pub const fn is_digit(b: u8) -> bool {
  b.is_ascii_digit()
}

/// Is the byte an ASCII vowel (either case)?
#[must_use]
pub const fn is_vowel(b: u8) -> bool {
  matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Is the byte an ASCII consonant (a letter that is not a vowel)?
#[must_use]
pub const fn is_consonant(b: u8) -> bool {
  is_letter(b) && !is_vowel(b)
}

/// Is the byte ASCII whitespace?
#[inline]
#[must_use]
pub const fn is_whitespace(b: u8) -> bool {
  b.is_ascii_whitespace()
}

/// Is every byte an upper case letter? Empty strings qualify.
#[must_use]
pub fn is_upper_str(s: &str) -> bool {
  s.bytes().all(is_upper)
}

/// Is every byte a lower case letter? Empty strings qualify.
#[must_use]
pub fn is_lower_str(s: &str) -> bool {
  s.bytes().all(is_lower)
}

/// Is every byte a letter? Empty strings qualify.
#[must_use]
pub fn is_letter_str(s: &str) -> bool {
  s.bytes().all(is_letter)
}

/// Is every byte a decimal digit? Empty strings qualify.
#[must_use]
pub fn is_digit_str(s: &str) -> bool {
  s.bytes().all(is_digit)
}

/// Is every byte a vowel? Empty strings qualify.
#[must_use]
pub fn is_vowel_str(s: &str) -> bool {
  s.bytes().all(is_vowel)
}

/// Is every byte a consonant? Empty strings qualify.
#[must_use]
pub fn is_consonant_str(s: &str) -> bool {
  s.bytes().all(is_consonant)
}

/// Is every byte whitespace? Empty strings qualify.
#[must_use]
pub fn is_whitespace_str(s: &str) -> bool {
  s.bytes().all(is_whitespace)
}

// ─────────────────────────────────────────────────────────────────────────────
// Case mapping
// ─────────────────────────────────────────────────────────────────────────────

/// Upper-case an ASCII letter; other bytes pass through.
#[inline]
#[must_use]
pub const fn to_upper(b: u8) -> u8 {
  b.to_ascii_uppercase()
}

/// Lower-case an ASCII letter; other bytes pass through.
#[inline]
#[must_use]
pub const fn to_lower(b: u8) -> u8 {
  b.to_ascii_lowercase()
}

/// Upper-case every ASCII letter in the buffer, in place.
pub fn make_upper(buf: &mut [u8]) {
  buf.make_ascii_uppercase();
}

/// Lower-case every ASCII letter in the buffer, in place.
pub fn make_lower(buf: &mut [u8]) {
  buf.make_ascii_lowercase();
}

/// Compare two strings ignoring ASCII case.
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
  let lhs = a.bytes().map(to_lower);
  let rhs = b.bytes().map(to_lower);
  lhs.cmp(rhs)
}

/// Are two strings equal ignoring ASCII case?
#[inline]
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
  a.eq_ignore_ascii_case(b)
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Byte offset of the first occurrence of `needle`.
#[must_use]
pub fn find_byte(s: &str, needle: u8) -> Option<usize> {
  s.bytes().position(|b| b == needle)
}

/// Byte offset of the first occurrence of `needle` as a substring.
///
/// An empty needle matches at offset 0.
#[must_use]
pub fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
  haystack.find(needle)
}

/// Byte offset of the first byte that appears in `set`.
#[must_use]
pub fn find_any_of(s: &str, set: &str) -> Option<usize> {
  s.bytes().position(|b| set.bytes().any(|c| c == b))
}

/// Byte offset of the first byte satisfying `pred`.
#[must_use]
pub fn find_where(s: &str, pred: impl Fn(u8) -> bool) -> Option<usize> {
  s.bytes().position(pred)
}

/// Byte offset of the first decimal digit.
#[must_use]
pub fn find_digit(s: &str) -> Option<usize> {
  find_where(s, is_digit)
}

/// Byte offset of the first letter.
#[must_use]
pub fn find_letter(s: &str) -> Option<usize> {
  find_where(s, is_letter)
}

/// Byte offset of the first lower case letter.
#[must_use]
pub fn find_lower(s: &str) -> Option<usize> {
  find_where(s, is_lower)
}

/// Byte offset of the first upper case letter.
#[must_use]
pub fn find_upper(s: &str) -> Option<usize> {
  find_where(s, is_upper)
}

/// Byte offset of the first vowel.
#[must_use]
pub fn find_vowel(s: &str) -> Option<usize> {
  find_where(s, is_vowel)
}

/// Byte offset of the first consonant.
#[must_use]
pub fn find_consonant(s: &str) -> Option<usize> {
  find_where(s, is_consonant)
}

// ─────────────────────────────────────────────────────────────────────────────
// Skipping
// ─────────────────────────────────────────────────────────────────────────────

/// Drop the longest prefix whose bytes satisfy `pred`; return the rest.
#[must_use]
pub fn skip_while(s: &str, pred: impl Fn(u8) -> bool) -> &str {
  let end = s.bytes().position(|b| !pred(b)).unwrap_or(s.len());
  let (_, rest) = s.split_at(end);
  rest
}

/// Drop leading whitespace.
#[must_use]
pub fn skip_whitespace(s: &str) -> &str {
  skip_while(s, is_whitespace)
}

/// Drop leading decimal digits.
#[must_use]
pub fn skip_digits(s: &str) -> &str {
  skip_while(s, is_digit)
}

/// Drop leading letters.
#[must_use]
pub fn skip_letters(s: &str) -> &str {
  skip_while(s, is_letter)
}

/// Drop leading lower case letters.
#[must_use]
pub fn skip_lower(s: &str) -> &str {
  skip_while(s, is_lower)
}

/// Drop leading upper case letters.
#[must_use]
pub fn skip_upper(s: &str) -> &str {
  skip_while(s, is_upper)
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric readers
// ─────────────────────────────────────────────────────────────────────────────

/// Read an unsigned decimal integer prefix; return the value and the rest.
///
/// `None` if the string does not start with a digit or the value overflows.
#[must_use]
pub fn read_u64(s: &str) -> Option<(u64, &str)> {
  let digits = s.len() - skip_digits(s).len();
  if digits == 0 {
    return None;
  }
  let (prefix, rest) = s.split_at(digits);
  let mut value: u64 = 0;
  for b in prefix.bytes() {
    value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
  }
  Some((value, rest))
}

/// Read a signed decimal integer prefix (optional `+`/`-`); return the value
/// and the rest.
#[must_use]
pub fn read_i64(s: &str) -> Option<(i64, &str)> {
  let (negative, digits_part) = match s.as_bytes().first() {
    Some(b'-') => {
      let (_, rest) = s.split_at(1);
      (true, rest)
    }
    Some(b'+') => {
      let (_, rest) = s.split_at(1);
      (false, rest)
    }
    _ => (false, s),
  };
  let (magnitude, rest) = read_u64(digits_part)?;
  let value = if negative {
    i64::try_from(magnitude).ok().map(|v| -v).or(
      // i64::MIN has no positive counterpart.
      if magnitude == i64::MIN.unsigned_abs() { Some(i64::MIN) } else { None },
    )?
  } else {
    i64::try_from(magnitude).ok()?
  };
  Some((value, rest))
}

/// Read a decimal floating point prefix (optional sign, digits, optional
/// fraction); return the value and the rest.
///
/// Exponent notation is not consumed; `"1e9"` reads as `1.0` with `"e9"`
/// remaining.
#[must_use]
pub fn read_f64(s: &str) -> Option<(f64, &str)> {
  let mut end = 0;
  let bytes = s.as_bytes();

  if matches!(bytes.first(), Some(b'-' | b'+')) {
    end += 1;
  }
  let int_digits = count_digits(bytes.get(end..)?);
  end += int_digits;

  let mut frac_digits = 0;
  if int_digits > 0 && bytes.get(end) == Some(&b'.') {
    frac_digits = count_digits(bytes.get(end + 1..)?);
    if frac_digits > 0 {
      end += 1 + frac_digits;
    }
  }

  if int_digits == 0 {
    return None;
  }
  let (prefix, rest) = s.split_at(end);
  prefix.parse::<f64>().ok().map(|value| (value, rest))
}

fn count_digits(bytes: &[u8]) -> usize {
  bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}


#[cfg(test)]
mod proptests {
  extern crate std;

  use std::format;
  use std::string::String;

  use proptest::prelude::*;

  use super::*;

  proptest! {
    #[test]
    fn read_u64_round_trips(v in any::<u64>(), tail in "[a-z ]{0,8}") {
      let s = format!("{v}{tail}");
      prop_assert_eq!(read_u64(&s), Some((v, tail.as_str())));
    }

    #[test]
    fn skip_while_returns_suffix(s in "[ a-z0-9]{0,32}") {
      let rest = skip_whitespace(&s);
      prop_assert!(s.ends_with(rest));
      prop_assert!(!rest.starts_with(' '));
    }

    #[test]
    fn cmp_ignore_case_matches_lowercased(a in "[A-Za-z0-9]{0,16}", b in "[A-Za-z0-9]{0,16}") {
      let expected = a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());
      prop_assert_eq!(cmp_ignore_case(&a, &b), expected);
    }

    #[test]
    fn find_substring_agrees_with_std(
      hay in "[ab]{0,16}",
      needle in "[ab]{0,4}",
    ) {
      let hay: String = hay;
      prop_assert_eq!(find_substring(&hay, &needle), hay.find(&needle));
    }
  }
}
