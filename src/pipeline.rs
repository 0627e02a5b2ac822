//! # Pipeline
//!
//! Fluent, type-safe composition of a source, intermediate stages, and a
//! terminal subscriber. A `Pipeline` is inert configuration: operators are
//! recorded as a stage-chain assembler and nothing runs until
//! [`subscribe`](Pipeline::subscribe) attaches a subscriber and the returned
//! [`PullSubscription`] receives demand.
//!
//! Operators compose in call order, first call closest to the source:
//!
//! ```rust
//! use demandflow::{CallbackSubscriber, Pipeline, RangeSource};
//!
//! # fn example() -> Result<(), demandflow::DemandError> {
//! let mut subscription = Pipeline::new(RangeSource::new(1i64, 6))
//!   .inspect(|v| println!("raw: {v}"))
//!   .map(|v| v * 2)
//!   .subscribe(CallbackSubscriber::new().on_next(|v| println!("mapped: {v}")));
//! subscription.request(6)?;
//! # Ok(())
//! # }
//! ```

use crate::context::{ExecutionContext, InlineContext};
use crate::error::{BoxError, StreamError};
use crate::operators::{MapStage, TapStage};
use crate::source::Source;
use crate::subscriber::Subscriber;
use crate::subscription::PullSubscription;

/// Builds the stage chain bottom-up from the terminal subscriber.
type Assembler<In, Out> =
  Box<dyn FnOnce(Box<dyn Subscriber<Out> + Send>) -> Box<dyn Subscriber<In> + Send> + Send>;

type RequestHook = Box<dyn FnMut(i64) + Send>;

/// A composable pipeline from a source of `S::Item` to elements of `Out`.
pub struct Pipeline<S, Out>
where
  S: Source,
  Out: std::fmt::Debug + Send + 'static,
{
  source: S,
  assemble: Assembler<S::Item, Out>,
  request_hooks: Vec<RequestHook>,
  ctx: Box<dyn ExecutionContext + Send>,
}

impl<S> Pipeline<S, S::Item>
where
  S: Source,
{
  /// Creates a pipeline rooted at `source`, with no operators and inline
  /// signal delivery.
  ///
  /// # Arguments
  ///
  /// * `source` - The source supplying the pipeline's elements.
  pub fn new(source: S) -> Self {
    Pipeline {
      source,
      assemble: Box::new(|downstream| downstream),
      request_hooks: Vec::new(),
      ctx: Box::new(InlineContext),
    }
  }
}

impl<S, Out> Pipeline<S, Out>
where
  S: Source,
  Out: std::fmt::Debug + Send + 'static,
{
  /// Appends an infallible mapping stage.
  ///
  /// # Arguments
  ///
  /// * `f` - The transformation applied to each element.
  pub fn map<O, F>(self, mut f: F) -> Pipeline<S, O>
  where
    O: std::fmt::Debug + Send + 'static,
    F: FnMut(Out) -> O + Send + 'static,
  {
    self.try_map(move |item| Ok::<O, BoxError>(f(item)))
  }

  /// Appends a fallible mapping stage.
  ///
  /// A returned `Err` terminates the subscription fail-fast: the stage
  /// delivers a single `Error` signal downstream and discards the faulting
  /// element; elements after it are never delivered.
  ///
  /// # Arguments
  ///
  /// * `f` - The fallible transformation applied to each element.
  pub fn try_map<O, E, F>(self, mut f: F) -> Pipeline<S, O>
  where
    O: std::fmt::Debug + Send + 'static,
    E: Into<BoxError>,
    F: FnMut(Out) -> Result<O, E> + Send + 'static,
  {
    let assemble = self.assemble;
    Pipeline {
      source: self.source,
      assemble: Box::new(move |downstream| {
        assemble(Box::new(MapStage::new(
          move |item| f(item).map_err(Into::into),
          downstream,
        )))
      }),
      request_hooks: self.request_hooks,
      ctx: self.ctx,
    }
  }

  /// Appends a hook observing each element at this point in the chain.
  ///
  /// # Arguments
  ///
  /// * `f` - The hook invoked with a reference to each passing element.
  pub fn inspect<F>(self, f: F) -> Self
  where
    F: FnMut(&Out) + Send + 'static,
  {
    let assemble = self.assemble;
    Pipeline {
      source: self.source,
      assemble: Box::new(move |downstream| {
        assemble(Box::new(TapStage::new(downstream).with_next_hook(f)))
      }),
      request_hooks: self.request_hooks,
      ctx: self.ctx,
    }
  }

  /// Appends a hook observing the completion signal passing this point.
  ///
  /// The hook does not fire when the subscription terminates with an error
  /// or is cancelled.
  ///
  /// # Arguments
  ///
  /// * `f` - The hook invoked on completion.
  pub fn inspect_complete<F>(self, f: F) -> Self
  where
    F: FnMut() + Send + 'static,
  {
    let assemble = self.assemble;
    Pipeline {
      source: self.source,
      assemble: Box::new(move |downstream| {
        assemble(Box::new(TapStage::new(downstream).with_complete_hook(f)))
      }),
      request_hooks: self.request_hooks,
      ctx: self.ctx,
    }
  }

  /// Appends a hook observing an error signal passing this point.
  ///
  /// # Arguments
  ///
  /// * `f` - The hook invoked with a reference to the stream error.
  pub fn inspect_error<F>(self, f: F) -> Self
  where
    F: FnMut(&StreamError) + Send + 'static,
  {
    let assemble = self.assemble;
    Pipeline {
      source: self.source,
      assemble: Box::new(move |downstream| {
        assemble(Box::new(TapStage::new(downstream).with_error_hook(f)))
      }),
      request_hooks: self.request_hooks,
      ctx: self.ctx,
    }
  }

  /// Adds a hook observing each valid `request(n)` on the subscription.
  ///
  /// Hooks fire in registration order, before any element is pulled, and not
  /// for requests ignored because the subscription already terminated.
  ///
  /// # Arguments
  ///
  /// * `f` - The hook invoked with the requested element count.
  pub fn inspect_request<F>(mut self, f: F) -> Self
  where
    F: FnMut(i64) + Send + 'static,
  {
    self.request_hooks.push(Box::new(f));
    self
  }

  /// Sets the execution context signals are delivered through.
  ///
  /// Defaults to [`InlineContext`].
  ///
  /// # Arguments
  ///
  /// * `ctx` - The execution context to deliver signals through.
  pub fn with_execution_context<C>(mut self, ctx: C) -> Self
  where
    C: ExecutionContext + Send + 'static,
  {
    self.ctx = Box::new(ctx);
    self
  }

  /// Attaches the terminal subscriber and returns the subscription handle.
  ///
  /// The pipeline stays cold until the handle receives its first valid
  /// `request`.
  ///
  /// # Arguments
  ///
  /// * `subscriber` - The terminal handler for the pipeline's signals.
  pub fn subscribe<D>(self, subscriber: D) -> PullSubscription<S>
  where
    D: Subscriber<Out> + Send + 'static,
  {
    let chain = (self.assemble)(Box::new(subscriber));
    PullSubscription::assembled(self.source, chain, self.ctx, self.request_hooks)
  }
}
