//! Mapping stage.

use crate::error::{BoxError, ComponentInfo, ErrorContext, StreamError};
use crate::signal::{Ack, Signal};
use crate::subscriber::Subscriber;
use std::marker::PhantomData;

/// A stage that applies a fallible function to each element.
///
/// On success the transformed element is forwarded downstream. On failure the
/// stage captures the fault instead of letting it escape: it synthesizes a
/// single `Error` terminal signal carrying a [`StreamError`], delivers it
/// downstream, and suppresses all further signals. The faulting element is
/// discarded, never delivered.
///
/// `Complete` and `Error` signals from upstream pass through unchanged, at
/// most once.
pub struct MapStage<I, O, F>
where
  F: FnMut(I) -> Result<O, BoxError> + Send + 'static,
  I: std::fmt::Debug + Send + 'static,
  O: std::fmt::Debug + Send + 'static,
{
  f: F,
  downstream: Box<dyn Subscriber<O> + Send>,
  done: bool,
  component: ComponentInfo,
  _phantom: PhantomData<I>,
}

impl<I, O, F> MapStage<I, O, F>
where
  F: FnMut(I) -> Result<O, BoxError> + Send + 'static,
  I: std::fmt::Debug + Send + 'static,
  O: std::fmt::Debug + Send + 'static,
{
  /// Creates a new `MapStage` applying `f` to each element before forwarding
  /// to `downstream`.
  ///
  /// # Arguments
  ///
  /// * `f` - The fallible transformation to apply to each element.
  /// * `downstream` - The subscriber receiving the transformed signals.
  pub fn new(f: F, downstream: Box<dyn Subscriber<O> + Send>) -> Self {
    Self {
      f,
      downstream,
      done: false,
      component: ComponentInfo::new("map_stage".to_string(), "MapStage".to_string()),
      _phantom: PhantomData,
    }
  }

  /// Sets the name used in errors synthesized by this stage.
  ///
  /// # Arguments
  ///
  /// * `name` - The name to assign to this stage.
  pub fn with_name(mut self, name: String) -> Self {
    self.component.name = name;
    self
  }
}

impl<I, O, F> Subscriber<I> for MapStage<I, O, F>
where
  F: FnMut(I) -> Result<O, BoxError> + Send + 'static,
  I: std::fmt::Debug + Send + 'static,
  O: std::fmt::Debug + Send + 'static,
{
  fn on_signal(&mut self, signal: Signal<I>) -> Ack {
    if self.done {
      return Ack::Terminated;
    }
    match signal {
      Signal::Next(item) => {
        let rendered = format!("{item:?}");
        match (self.f)(item) {
          Ok(out) => {
            let ack = self.downstream.on_signal(Signal::Next(out));
            if ack == Ack::Terminated {
              self.done = true;
            }
            ack
          }
          Err(source) => {
            self.done = true;
            let error = StreamError::new(
              source,
              ErrorContext::for_item(rendered),
              self.component.clone(),
            );
            self.downstream.on_signal(Signal::Error(error));
            Ack::Terminated
          }
        }
      }
      Signal::Complete => {
        self.done = true;
        self.downstream.on_signal(Signal::Complete);
        Ack::Terminated
      }
      Signal::Error(error) => {
        self.done = true;
        self.downstream.on_signal(Signal::Error(error));
        Ack::Terminated
      }
    }
  }
}
