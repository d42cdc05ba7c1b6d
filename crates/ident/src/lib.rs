//! Sequential ID allocation.
//!
//! [`SequentialIds`] hands out `u64` IDs from a monotonic counter and tracks
//! liveness through the [`traits::IdGenerator`] seam. Released IDs are either
//! recycled (smallest first) or retired forever, chosen at construction.
//!
//! [`IdTicket`] is the RAII companion: it allocates on creation, exposes the
//! ID through [`traits::IdHolder`], and releases on drop, so an ID can never
//! outlive the value it names.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use core::cell::RefCell;

use traits::{IdGenerator, IdHolder};

/// Allocates `u64` IDs from a monotonic counter.
///
/// `reserve` can claim any ID, including ones far ahead of the counter; the
/// counter skips over live IDs when it reaches them. With reuse enabled,
/// released IDs below the counter are recycled smallest-first; without it,
/// they are retired and the counter alone drives allocation.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
  next: u64,
  reuse: bool,
  used: BTreeSet<u64>,
  /// Released IDs below `next`, eligible for recycling. Empty unless `reuse`.
  freed: BTreeSet<u64>,
}

impl SequentialIds {
  /// An empty allocator. `reuse` controls whether released IDs are recycled.
  #[must_use]
  pub fn new(reuse: bool) -> Self {
    Self { next: 0, reuse, used: BTreeSet::new(), freed: BTreeSet::new() }
  }

  /// Number of currently live IDs.
  #[must_use]
  pub fn live(&self) -> usize {
    self.used.len()
  }
}

impl IdGenerator for SequentialIds {
  type Id = u64;

  fn generate(&mut self) -> u64 {
    if let Some(&id) = self.freed.first() {
      self.freed.remove(&id);
      self.used.insert(id);
      return id;
    }
    while self.used.contains(&self.next) {
      self.next += 1;
    }
    let id = self.next;
    self.next += 1;
    self.used.insert(id);
    id
  }

  fn reserve(&mut self, id: u64) -> bool {
    if !self.used.insert(id) {
      return false;
    }
    self.freed.remove(&id);
    true
  }

  fn release(&mut self, id: u64) -> bool {
    if !self.used.remove(&id) {
      return false;
    }
    if self.reuse && id < self.next {
      self.freed.insert(id);
    }
    true
  }

  fn is_used(&self, id: u64) -> bool {
    self.used.contains(&id)
  }
}

/// An allocated ID that releases itself when dropped.
///
/// The generator lives in a [`RefCell`] so multiple tickets can share it;
/// creation and drop each borrow it briefly.
pub struct IdTicket<'a, G: IdGenerator> {
  generator: &'a RefCell<G>,
  id: G::Id,
}

impl<'a, G: IdGenerator> IdTicket<'a, G> {
  /// Allocate a fresh ID from the shared generator.
  #[must_use]
  pub fn new(generator: &'a RefCell<G>) -> Self {
    let id = generator.borrow_mut().generate();
    Self { generator, id }
  }
}

impl<G: IdGenerator> IdHolder for IdTicket<'_, G> {
  type Id = G::Id;

  fn id(&self) -> G::Id {
    self.id
  }
}

impl<G: IdGenerator> Drop for IdTicket<'_, G> {
  fn drop(&mut self) {
    self.generator.borrow_mut().release(self.id);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generates_sequential_ids() {
    let mut ids = SequentialIds::new(false);
    assert_eq!(ids.generate(), 0);
    assert_eq!(ids.generate(), 1);
    assert_eq!(ids.generate(), 2);
    assert_eq!(ids.live(), 3);
    assert!(ids.is_used(1));
    assert!(!ids.is_used(3));
  }

  #[test]
  fn release_without_reuse_retires_ids() {
    let mut ids = SequentialIds::new(false);
    let a = ids.generate();
    let b = ids.generate();
    assert!(ids.release(a));
    assert!(!ids.is_used(a));
    // The retired ID is never handed out again.
    assert_eq!(ids.generate(), b + 1);
  }

  #[test]
  fn release_with_reuse_recycles_smallest_first() {
    let mut ids = SequentialIds::new(true);
    let ids_out: [u64; 4] = core::array::from_fn(|_| ids.generate());
    assert!(ids.release(ids_out[2]));
    assert!(ids.release(ids_out[0]));
    assert_eq!(ids.generate(), ids_out[0]);
    assert_eq!(ids.generate(), ids_out[2]);
    assert_eq!(ids.generate(), 4);
  }

  #[test]
  fn release_is_idempotent_in_result() {
    let mut ids = SequentialIds::new(true);
    let id = ids.generate();
    assert!(ids.release(id));
    assert!(!ids.release(id), "double release reports failure");
    assert!(!ids.release(99), "never-allocated ID reports failure");
  }

  #[test]
  fn reserve_claims_and_counter_skips() {
    let mut ids = SequentialIds::new(false);
    assert!(ids.reserve(0));
    assert!(ids.reserve(2));
    assert!(!ids.reserve(2), "already reserved");
    assert_eq!(ids.generate(), 1);
    assert_eq!(ids.generate(), 3, "counter skips the reserved 2");
  }

  #[test]
  fn reserve_removes_from_free_pool() {
    let mut ids = SequentialIds::new(true);
    let id = ids.generate();
    let next = ids.generate();
    assert!(ids.release(id));
    assert!(ids.reserve(id), "released ID can be reserved back");
    assert_eq!(ids.generate(), next + 1, "reserved ID is not recycled");
  }

  #[test]
  fn ticket_allocates_and_releases_on_drop() {
    let generator = RefCell::new(SequentialIds::new(true));
    let first_id;
    {
      let ticket = IdTicket::new(&generator);
      first_id = ticket.id();
      assert!(generator.borrow().is_used(first_id));
    }
    assert!(!generator.borrow().is_used(first_id));
  }

  #[test]
  fn tickets_share_one_generator() {
    let generator = RefCell::new(SequentialIds::new(true));
    let a = IdTicket::new(&generator);
    let b = IdTicket::new(&generator);
    assert_ne!(a.id(), b.id());
    assert_eq!(generator.borrow().live(), 2);
    drop(a);
    assert_eq!(generator.borrow().live(), 1);
    let c = IdTicket::new(&generator);
    assert_eq!(c.id(), 0, "reuse hands the dropped ID to the next ticket");
    drop((b, c));
    assert_eq!(generator.borrow().live(), 0);
  }
}
