//! ID allocation traits.
//!
//! [`IdGenerator`] abstracts over allocators that hand out unique IDs and keep
//! track of which ones are live. [`IdHolder`] marks values that are bound to an
//! allocated ID for their lifetime.

/// Allocates unique IDs and tracks their liveness.
///
/// # Implementor Requirements
///
/// - `generate()` must never return an ID for which `is_used` is already true
/// - after `release(id)` returns true, `is_used(id)` must be false
/// - `reserve` and `release` return false (and change nothing) when the ID is
///   already in the requested state
pub trait IdGenerator {
  /// The ID type being allocated.
  type Id: Copy + Eq;

  /// Allocate a fresh ID and mark it used.
  fn generate(&mut self) -> Self::Id;

  /// Mark an externally chosen ID as used.
  ///
  /// Returns false if the ID was already in use.
  fn reserve(&mut self, id: Self::Id) -> bool;

  /// Return an ID to the allocator.
  ///
  /// Returns false if the ID was not in use.
  fn release(&mut self, id: Self::Id) -> bool;

  /// Check whether an ID is currently allocated.
  fn is_used(&self, id: Self::Id) -> bool;
}

/// A value bound to an allocated ID.
pub trait IdHolder {
  /// The ID type held.
  type Id: Copy + Eq;

  /// The ID this value is bound to.
  fn id(&self) -> Self::Id;
}
