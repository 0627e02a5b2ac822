//! Side-effect hook stage.

use crate::error::StreamError;
use crate::signal::{Ack, Signal};
use crate::subscriber::Subscriber;

type NextHook<T> = Box<dyn FnMut(&T) + Send>;
type ErrorHook = Box<dyn FnMut(&StreamError) + Send>;
type CompleteHook = Box<dyn FnMut() + Send>;

/// A stage that observes signals without changing them.
///
/// Each hook slot is optional and runs before the signal is forwarded
/// downstream. Like every stage, a tap goes inert after the first terminal
/// signal it forwards.
pub struct TapStage<T> {
  on_next: Option<NextHook<T>>,
  on_error: Option<ErrorHook>,
  on_complete: Option<CompleteHook>,
  downstream: Box<dyn Subscriber<T> + Send>,
  done: bool,
}

impl<T> TapStage<T> {
  /// Creates a tap with no hooks set, forwarding everything to `downstream`.
  ///
  /// # Arguments
  ///
  /// * `downstream` - The subscriber receiving the unchanged signals.
  pub fn new(downstream: Box<dyn Subscriber<T> + Send>) -> Self {
    Self {
      on_next: None,
      on_error: None,
      on_complete: None,
      downstream,
      done: false,
    }
  }

  /// Sets the hook observing each element.
  ///
  /// # Arguments
  ///
  /// * `f` - The hook to invoke with a reference to each element.
  pub fn with_next_hook<F>(mut self, f: F) -> Self
  where
    F: FnMut(&T) + Send + 'static,
  {
    self.on_next = Some(Box::new(f));
    self
  }

  /// Sets the hook observing a passing error signal.
  ///
  /// # Arguments
  ///
  /// * `f` - The hook to invoke with a reference to the stream error.
  pub fn with_error_hook<F>(mut self, f: F) -> Self
  where
    F: FnMut(&StreamError) + Send + 'static,
  {
    self.on_error = Some(Box::new(f));
    self
  }

  /// Sets the hook observing a passing completion signal.
  ///
  /// # Arguments
  ///
  /// * `f` - The hook to invoke on completion.
  pub fn with_complete_hook<F>(mut self, f: F) -> Self
  where
    F: FnMut() + Send + 'static,
  {
    self.on_complete = Some(Box::new(f));
    self
  }
}

impl<T> Subscriber<T> for TapStage<T> {
  fn on_signal(&mut self, signal: Signal<T>) -> Ack {
    if self.done {
      return Ack::Terminated;
    }
    match signal {
      Signal::Next(value) => {
        if let Some(f) = &mut self.on_next {
          f(&value);
        }
        let ack = self.downstream.on_signal(Signal::Next(value));
        if ack == Ack::Terminated {
          self.done = true;
        }
        ack
      }
      Signal::Error(error) => {
        self.done = true;
        if let Some(f) = &mut self.on_error {
          f(&error);
        }
        self.downstream.on_signal(Signal::Error(error));
        Ack::Terminated
      }
      Signal::Complete => {
        self.done = true;
        if let Some(f) = &mut self.on_complete {
          f();
        }
        self.downstream.on_signal(Signal::Complete);
        Ack::Terminated
      }
    }
  }
}
