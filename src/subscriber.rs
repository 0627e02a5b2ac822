//! # Subscriber Trait
//!
//! The downstream end of every hop in a pipeline. Each stage delivers
//! [`Signal`]s to the `Subscriber` below it and inspects the returned [`Ack`]
//! to learn whether anything further may be delivered.
//!
//! [`CallbackSubscriber`] is the terminal adapter an embedding application
//! usually attaches: three optional callback slots, one per signal variant.

use crate::error::StreamError;
use crate::signal::{Ack, Signal};

/// Trait for handlers that receive the signals of a pipeline.
///
/// Implementors must uphold the termination contract: after returning
/// [`Ack::Terminated`] once, every later call (should a misbehaving upstream
/// make one) must be ignored and acknowledged with `Terminated` again.
pub trait Subscriber<T> {
  /// Handles one signal from upstream.
  fn on_signal(&mut self, signal: Signal<T>) -> Ack;
}

type NextFn<T> = Box<dyn FnMut(T) + Send>;
type ErrorFn = Box<dyn FnMut(StreamError) + Send>;
type CompleteFn = Box<dyn FnMut() + Send>;

/// A terminal subscriber built from plain callbacks.
///
/// Each of the three slots is optional; an unset slot simply drops its
/// signal. Terminal signals acknowledge with [`Ack::Terminated`] so upstream
/// stages and the subscription observe the end of the lifecycle.
pub struct CallbackSubscriber<T> {
  on_next: Option<NextFn<T>>,
  on_error: Option<ErrorFn>,
  on_complete: Option<CompleteFn>,
}

impl<T> CallbackSubscriber<T> {
  /// Creates a subscriber with all callback slots unset.
  pub fn new() -> Self {
    Self {
      on_next: None,
      on_error: None,
      on_complete: None,
    }
  }

  /// Sets the callback invoked for each delivered element.
  ///
  /// # Arguments
  ///
  /// * `f` - The callback to invoke with each element.
  pub fn on_next<F>(mut self, f: F) -> Self
  where
    F: FnMut(T) + Send + 'static,
  {
    self.on_next = Some(Box::new(f));
    self
  }

  /// Sets the callback invoked when the stream fails.
  ///
  /// # Arguments
  ///
  /// * `f` - The callback to invoke with the stream error.
  pub fn on_error<F>(mut self, f: F) -> Self
  where
    F: FnMut(StreamError) + Send + 'static,
  {
    self.on_error = Some(Box::new(f));
    self
  }

  /// Sets the callback invoked when the stream completes normally.
  ///
  /// # Arguments
  ///
  /// * `f` - The callback to invoke on completion.
  pub fn on_complete<F>(mut self, f: F) -> Self
  where
    F: FnMut() + Send + 'static,
  {
    self.on_complete = Some(Box::new(f));
    self
  }
}

impl<T> Default for CallbackSubscriber<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Subscriber<T> for CallbackSubscriber<T> {
  fn on_signal(&mut self, signal: Signal<T>) -> Ack {
    match signal {
      Signal::Next(value) => {
        if let Some(f) = &mut self.on_next {
          f(value);
        }
        Ack::Continue
      }
      Signal::Error(error) => {
        if let Some(f) = &mut self.on_error {
          f(error);
        }
        Ack::Terminated
      }
      Signal::Complete => {
        if let Some(f) = &mut self.on_complete {
          f();
        }
        Ack::Terminated
      }
    }
  }
}
