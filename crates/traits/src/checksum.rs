//! Non-cryptographic checksum traits.
//!
//! The trait is instance-oriented rather than constructor-oriented: a hasher is
//! obtained from whatever configured engine produced it, then fed data
//! incrementally. This keeps the trait usable for runtime-parameterized
//! algorithms where no meaningful `Default` exists.

use core::fmt::Debug;

/// Streaming non-cryptographic checksum computation.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::catalog;
/// use traits::Checksum;
///
/// let crc = catalog::CRC_32.engine();
/// let mut digest = crc.digest();
/// digest.update(b"hello ");
/// digest.update(b"world");
/// let value = digest.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns the same
///   value) and must not consume the hasher
/// - `reset()` must restore the hasher to its pre-`update` state
/// - any chunking of the input through `update` must produce the same result
///   as a single contiguous `update`
pub trait Checksum {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// Does not consume the hasher; further updates continue from the state
  /// already accumulated.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);
}
