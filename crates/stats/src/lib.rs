//! Statistical aggregates over sample slices.
//!
//! Small, total functions: every edge case (empty input, single sample) is
//! expressed in the return type rather than panicking. Numeric aggregates
//! operate on `f64` samples; [`mode`] is generic because it only needs
//! equality.
//!
//! | Function | Empty input | Other preconditions |
//! |----------|-------------|---------------------|
//! | [`mean`] | `None` | - |
//! | [`median`] | `None` | - |
//! | [`mode`] | `None` | - |
//! | [`stddev_population`] | `None` | - |
//! | [`stddev_sample`] | `None` | `None` for a single sample |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

/// Arithmetic mean of the samples.
#[must_use]
pub fn mean(samples: &[f64]) -> Option<f64> {
  if samples.is_empty() {
    return None;
  }
  let sum: f64 = samples.iter().sum();
  Some(sum / samples.len() as f64)
}

/// Median of the samples.
///
/// Sorts a copy (total order via `f64::total_cmp`, so NaNs sort rather than
/// poison the result); an even number of samples averages the middle pair.
#[must_use]
pub fn median(samples: &[f64]) -> Option<f64> {
  if samples.is_empty() {
    return None;
  }
  let mut sorted = samples.to_vec();
  sorted.sort_by(f64::total_cmp);

  let mid = sorted.len() / 2;
  if sorted.len() % 2 == 0 {
    Some((sorted.get(mid - 1)? + sorted.get(mid)?) / 2.0)
  } else {
    sorted.get(mid).copied()
  }
}

/// Most frequent sample.
///
/// Ties resolve to the value that first reaches the winning count, i.e. the
/// earliest first occurrence. Quadratic in the number of samples; these are
/// sample buffers, not datasets.
#[must_use]
pub fn mode<T: PartialEq + Clone>(samples: &[T]) -> Option<T> {
  let mut best: Option<(&T, usize)> = None;
  for (i, candidate) in samples.iter().enumerate() {
    // Only count each distinct value at its first occurrence.
    if samples.iter().take(i).any(|earlier| earlier == candidate) {
      continue;
    }
    let count = samples.iter().filter(|s| *s == candidate).count();
    match best {
      Some((_, best_count)) if best_count >= count => {}
      _ => best = Some((candidate, count)),
    }
  }
  best.map(|(value, _)| value.clone())
}

/// Population standard deviation (divides the variance by `n`).
#[must_use]
pub fn stddev_population(samples: &[f64]) -> Option<f64> {
  variance(samples, samples.len()).map(f64::sqrt)
}

/// Sample standard deviation (Bessel's correction, divides by `n - 1`).
///
/// Returns `None` for fewer than two samples.
#[must_use]
pub fn stddev_sample(samples: &[f64]) -> Option<f64> {
  if samples.len() < 2 {
    return None;
  }
  variance(samples, samples.len() - 1).map(f64::sqrt)
}

/// Sum of squared deviations from the mean, divided by `divisor`.
fn variance(samples: &[f64], divisor: usize) -> Option<f64> {
  let mean = mean(samples)?;
  let sum_sq: f64 = samples
    .iter()
    .map(|s| {
      let diff = s - mean;
      diff * diff
    })
    .sum();
  Some(sum_sq / divisor as f64)
}
