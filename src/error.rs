//! # Error Handling
//!
//! Two distinct failure surfaces exist in a pipeline:
//!
//! - **Demand violations** ([`DemandError`]): the caller of
//!   [`request`](crate::subscription::PullSubscription::request) passed an
//!   invalid argument. Reported synchronously to that caller, never as a
//!   stream signal.
//! - **In-stream failures** ([`StreamError`]): a transformation faulted while
//!   processing an element. Captured at the stage, wrapped with context and
//!   component information, and delivered downstream as a single
//!   [`Signal::Error`](crate::signal::Signal) terminal signal.
//!
//! There is no retry policy: an in-stream failure is always fatal to its
//! subscription.

use std::error::Error;
use std::fmt;
use thiserror::Error as ThisError;

/// Boxed error type carried by [`StreamError`] and returned by fallible
/// transformation functions.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Error returned synchronously by `request`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DemandError {
  /// `request` was called with a non-positive element count.
  #[error("demand must be positive, got {0}")]
  InvalidDemand(i64),
}

/// Identification of the pipeline component that encountered an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
  /// The configured name of the component.
  pub name: String,
  /// The type of the component.
  pub type_name: String,
}

impl ComponentInfo {
  /// Creates a new `ComponentInfo` with the given name and type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}

/// Context information about when and on what an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
  /// The timestamp when the error occurred.
  pub timestamp: chrono::DateTime<chrono::Utc>,
  /// A debug rendering of the element being processed, if any.
  pub item: Option<String>,
}

impl ErrorContext {
  /// Creates a context timestamped now, with no associated element.
  pub fn new() -> Self {
    Self {
      timestamp: chrono::Utc::now(),
      item: None,
    }
  }

  /// Creates a context timestamped now, recording the offending element.
  pub fn for_item(item: String) -> Self {
    Self {
      timestamp: chrono::Utc::now(),
      item: Some(item),
    }
  }
}

impl Default for ErrorContext {
  fn default() -> Self {
    Self::new()
  }
}

/// Error that occurred during stream processing.
///
/// Carries the original fault plus enough context to identify which component
/// failed and on which element. This is the payload of the `Error` terminal
/// signal.
#[derive(Debug)]
pub struct StreamError {
  /// The original error that occurred.
  pub source: BoxError,
  /// Context about when and on what the error occurred.
  pub context: ErrorContext,
  /// Information about the component that encountered the error.
  pub component: ComponentInfo,
}

impl StreamError {
  /// Creates a new `StreamError` from a source error, its context, and the
  /// component that caught it.
  pub fn new(source: BoxError, context: ErrorContext, component: ComponentInfo) -> Self {
    Self {
      source,
      context,
      component,
    }
  }
}

impl Clone for StreamError {
  fn clone(&self) -> Self {
    // The source is not required to be Clone; snapshot its message instead.
    Self {
      source: Box::new(StringError(self.source.to_string())),
      context: self.context.clone(),
      component: self.component.clone(),
    }
  }
}

impl fmt::Display for StreamError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Error in {} ({}): {}",
      self.component.name, self.component.type_name, self.source
    )
  }
}

impl Error for StreamError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(self.source.as_ref())
  }
}

/// A simple error type that wraps a string message.
///
/// Used when an error must be duplicated but the original source is not
/// `Clone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringError(pub String);

impl fmt::Display for StringError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Error for StringError {}
