//! Bounded numeric sequence source.

use crate::error::ComponentInfo;
use crate::source::{Source, SourceConfig};
use num_traits::Num;

/// A source that generates a bounded sequence of numbers.
///
/// Produces `count` values starting from `start`, each one greater than the
/// previous, lazily and strictly on demand. The cursor never decreases, and
/// once all `count` elements have been produced the source is exhausted for
/// good.
pub struct RangeSource<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + Num + Copy + PartialOrd + 'static,
{
  /// The first value of the sequence.
  pub start: T,
  /// The number of values to produce.
  pub count: usize,
  /// Configuration for the source, including its name.
  pub config: SourceConfig,
  cursor: T,
  emitted: usize,
}

impl<T> RangeSource<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + Num + Copy + PartialOrd + 'static,
{
  /// Creates a new `RangeSource` producing `count` values from `start`.
  ///
  /// # Arguments
  ///
  /// * `start` - The first value of the sequence.
  /// * `count` - How many values to produce.
  pub fn new(start: T, count: usize) -> Self {
    Self {
      start,
      count,
      config: SourceConfig::default(),
      cursor: start,
      emitted: 0,
    }
  }

  /// Sets the name for this source.
  ///
  /// # Arguments
  ///
  /// * `name` - The name to assign to this source.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }

  /// Returns the current configuration.
  pub fn config(&self) -> &SourceConfig {
    &self.config
  }
}

impl<T> Source for RangeSource<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + Num + Copy + PartialOrd + 'static,
{
  type Item = T;

  fn pull(&mut self) -> Option<T> {
    if self.emitted == self.count {
      return None;
    }
    let value = self.cursor;
    self.cursor = self.cursor + T::one();
    self.emitted += 1;
    Some(value)
  }

  fn is_exhausted(&self) -> bool {
    self.emitted == self.count
  }

  fn component_info(&self) -> ComponentInfo {
    ComponentInfo::new(
      self
        .config
        .name
        .clone()
        .unwrap_or_else(|| "range_source".to_string()),
      "RangeSource".to_string(),
    )
  }
}
