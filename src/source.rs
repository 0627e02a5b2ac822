//! # Source Trait
//!
//! The upstream end of a pipeline. A source is a cold, pull-only supplier of
//! elements: it performs no work and emits nothing until the subscription
//! driving it calls [`pull`](Source::pull), which it only does against
//! outstanding demand.
//!
//! The source exclusively owns its cursor; the subscription exclusively owns
//! demand bookkeeping and termination state. Completion is not the source's
//! signal to send - it reports exhaustion and the subscription dispatches the
//! terminal signal exactly once.

use crate::error::ComponentInfo;

/// Trait for components that supply the elements of a pipeline.
pub trait Source {
  /// The element type this source produces.
  type Item: std::fmt::Debug + Send + 'static;

  /// Produces the next element, advancing the source's cursor by exactly one.
  ///
  /// Returns `None` once the source is exhausted. After the first `None`,
  /// every subsequent call must also return `None`.
  fn pull(&mut self) -> Option<Self::Item>;

  /// Returns `true` once every element has been produced.
  ///
  /// Must be consistent with [`pull`](Source::pull): exhausted sources return
  /// `None` from `pull`, and `pull` returning `None` implies exhaustion.
  fn is_exhausted(&self) -> bool;

  /// Identification of this source for logs and error reporting.
  fn component_info(&self) -> ComponentInfo {
    ComponentInfo::new(
      "source".to_string(),
      std::any::type_name::<Self>().to_string(),
    )
  }
}

/// Configuration for a source component.
///
/// Holds the options common to all sources; currently an optional name used
/// in logs and error reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceConfig {
  /// Optional name for identifying this source.
  pub name: Option<String>,
}

impl SourceConfig {
  /// Sets the name for this source configuration.
  ///
  /// # Arguments
  ///
  /// * `name` - The name to assign to the source.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<String> {
    self.name.clone()
  }
}
