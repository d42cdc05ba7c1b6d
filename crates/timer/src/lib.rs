//! A pausable stopwatch over monotonic time.
//!
//! [`Stopwatch`] accumulates elapsed wall time across pause/resume cycles,
//! backed by [`std::time::Instant`] so it never goes backwards. Transitions
//! return `bool` rather than panicking: `true` when the transition happened,
//! `false` when the stopwatch was not in a state that allows it.
//!
//! | From \ To | `start` | `pause` | `resume` | `stop` |
//! |-----------|---------|---------|----------|--------|
//! | stopped   | yes     | no      | no       | no     |
//! | running   | no      | yes     | no       | yes    |
//! | paused    | no      | no      | yes      | yes    |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

use std::time::{Duration, Instant};

/// A stopwatch that can be paused and resumed.
///
/// `elapsed` reports the total time spent in the running state. Stopping
/// freezes that total until the next `start`, which resets it to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
  state: State,
  /// Time accumulated in completed running stretches.
  accumulated: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum State {
  #[default]
  Stopped,
  Running {
    since: Instant,
  },
  Paused,
}

impl Stopwatch {
  /// A stopped stopwatch with zero elapsed time.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Start measuring from zero. Only valid when stopped.
  pub fn start(&mut self) -> bool {
    if self.state != State::Stopped {
      return false;
    }
    self.accumulated = Duration::ZERO;
    self.state = State::Running { since: Instant::now() };
    true
  }

  /// Suspend measurement, keeping the time gathered so far. Only valid when
  /// running.
  pub fn pause(&mut self) -> bool {
    let State::Running { since } = self.state else {
      return false;
    };
    self.accumulated += since.elapsed();
    self.state = State::Paused;
    true
  }

  /// Continue a paused measurement. Only valid when paused.
  pub fn resume(&mut self) -> bool {
    if self.state != State::Paused {
      return false;
    }
    self.state = State::Running { since: Instant::now() };
    true
  }

  /// Finish measuring, freezing `elapsed` at its current value. Valid when
  /// running or paused.
  pub fn stop(&mut self) -> bool {
    match self.state {
      State::Stopped => false,
      State::Running { since } => {
        self.accumulated += since.elapsed();
        self.state = State::Stopped;
        true
      }
      State::Paused => {
        self.state = State::Stopped;
        true
      }
    }
  }

  /// Total time spent running: live while running, frozen while paused or
  /// stopped.
  #[must_use]
  pub fn elapsed(&self) -> Duration {
    match self.state {
      State::Running { since } => self.accumulated + since.elapsed(),
      State::Stopped | State::Paused => self.accumulated,
    }
  }

  #[must_use]
  pub fn is_running(&self) -> bool {
    matches!(self.state, State::Running { .. })
  }

  #[must_use]
  pub fn is_paused(&self) -> bool {
    self.state == State::Paused
  }

  #[must_use]
  pub fn is_stopped(&self) -> bool {
    self.state == State::Stopped
  }
}

#[cfg(test)]
mod tests {
  use std::thread::sleep;

  use super::*;

  #[test]
  fn starts_stopped_with_zero_elapsed() {
    let sw = Stopwatch::new();
    assert!(sw.is_stopped());
    assert!(!sw.is_running());
    assert!(!sw.is_paused());
    assert_eq!(sw.elapsed(), Duration::ZERO);
  }

  #[test]
  fn transition_guards() {
    let mut sw = Stopwatch::new();
    assert!(!sw.pause(), "cannot pause while stopped");
    assert!(!sw.resume(), "cannot resume while stopped");
    assert!(!sw.stop(), "cannot stop while stopped");

    assert!(sw.start());
    assert!(!sw.start(), "cannot start while running");
    assert!(!sw.resume(), "cannot resume while running");

    assert!(sw.pause());
    assert!(!sw.pause(), "cannot pause twice");
    assert!(!sw.start(), "cannot start while paused");

    assert!(sw.resume());
    assert!(sw.stop());
    assert!(sw.is_stopped());
  }

  #[test]
  fn elapsed_grows_while_running() {
    let mut sw = Stopwatch::new();
    assert!(sw.start());
    sleep(Duration::from_millis(10));
    let first = sw.elapsed();
    assert!(first >= Duration::from_millis(10));
    sleep(Duration::from_millis(5));
    assert!(sw.elapsed() > first);
  }

  #[test]
  fn elapsed_frozen_while_paused() {
    let mut sw = Stopwatch::new();
    assert!(sw.start());
    sleep(Duration::from_millis(5));
    assert!(sw.pause());
    let frozen = sw.elapsed();
    sleep(Duration::from_millis(10));
    assert_eq!(sw.elapsed(), frozen);
  }

  #[test]
  fn pause_resume_accumulates_both_stretches() {
    let mut sw = Stopwatch::new();
    assert!(sw.start());
    sleep(Duration::from_millis(5));
    assert!(sw.pause());
    let paused_at = sw.elapsed();
    assert!(sw.resume());
    sleep(Duration::from_millis(5));
    assert!(sw.stop());
    assert!(sw.elapsed() >= paused_at + Duration::from_millis(5));
  }

  #[test]
  fn stop_freezes_and_restart_resets() {
    let mut sw = Stopwatch::new();
    assert!(sw.start());
    sleep(Duration::from_millis(5));
    assert!(sw.stop());
    let frozen = sw.elapsed();
    sleep(Duration::from_millis(5));
    assert_eq!(sw.elapsed(), frozen);

    assert!(sw.start());
    assert!(sw.elapsed() < frozen, "restart begins from zero");
  }

  #[test]
  fn stop_from_paused() {
    let mut sw = Stopwatch::new();
    assert!(sw.start());
    sleep(Duration::from_millis(2));
    assert!(sw.pause());
    let frozen = sw.elapsed();
    assert!(sw.stop());
    assert_eq!(sw.elapsed(), frozen);
  }
}
