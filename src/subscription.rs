//! # Subscription
//!
//! The consumer-facing handle driving a pipeline. The subscription owns the
//! two pieces of mutable bookkeeping the protocol revolves around:
//!
//! - the **demand counter**, increased only by explicit [`request`] calls and
//!   decreased by exactly one per element delivered, and
//! - the **termination state**, which leaves `Active` at most once.
//!
//! `request` runs the pull/emit cycle: while demand is outstanding and the
//! subscription is active, it pulls one element from the source and dispatches
//! it down the stage chain through the configured
//! [`ExecutionContext`](crate::context::ExecutionContext). Exhaustion
//! dispatches the single `Complete` signal; a stage reporting termination
//! (completion, or an error it synthesized) stops the cycle for good.
//!
//! [`request`]: PullSubscription::request

use crate::context::{ExecutionContext, InlineContext};
use crate::error::DemandError;
use crate::signal::{Ack, Signal};
use crate::source::Source;
use crate::subscriber::Subscriber;
use std::sync::{Arc, Mutex};
use tracing::trace;

/// Lifecycle state of a subscription.
///
/// `Active` is the only non-terminal state; no transition ever leaves a
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
  /// Elements may still be requested and delivered.
  Active,
  /// The source was drained and `Complete` was delivered.
  Completed,
  /// A stage failed and `Error` was delivered.
  Failed,
  /// The consumer cancelled; no terminal signal was delivered.
  Cancelled,
}

impl SubscriptionState {
  /// Returns `true` for every state other than `Active`.
  pub fn is_terminated(&self) -> bool {
    !matches!(self, SubscriptionState::Active)
  }
}

type RequestHook = Box<dyn FnMut(i64) + Send>;
type Chain<T> = Arc<Mutex<Box<dyn Subscriber<T> + Send>>>;

/// A single-subscriber, pull-driven subscription to a source.
///
/// Created by [`Pipeline::subscribe`](crate::pipeline::Pipeline::subscribe),
/// or directly via [`PullSubscription::new`] when no operators are needed.
pub struct PullSubscription<S>
where
  S: Source,
{
  source: S,
  chain: Chain<S::Item>,
  ctx: Box<dyn ExecutionContext + Send>,
  state: Arc<Mutex<SubscriptionState>>,
  demand: u64,
  completion_dispatched: bool,
  request_hooks: Vec<RequestHook>,
}

impl<S> PullSubscription<S>
where
  S: Source,
{
  /// Subscribes `subscriber` directly to `source` with inline delivery.
  ///
  /// # Arguments
  ///
  /// * `source` - The source to drain.
  /// * `subscriber` - The handler receiving the source's signals.
  pub fn new<D>(source: S, subscriber: D) -> Self
  where
    D: Subscriber<S::Item> + Send + 'static,
  {
    Self::assembled(
      source,
      Box::new(subscriber),
      Box::new(InlineContext),
      Vec::new(),
    )
  }

  pub(crate) fn assembled(
    source: S,
    chain: Box<dyn Subscriber<S::Item> + Send>,
    ctx: Box<dyn ExecutionContext + Send>,
    request_hooks: Vec<RequestHook>,
  ) -> Self {
    Self {
      source,
      chain: Arc::new(Mutex::new(chain)),
      ctx,
      state: Arc::new(Mutex::new(SubscriptionState::Active)),
      demand: 0,
      completion_dispatched: false,
      request_hooks,
    }
  }

  /// Requests `n` more elements from the source.
  ///
  /// Fails with [`DemandError::InvalidDemand`] for `n <= 0` without advancing
  /// the source or emitting anything. After a terminal signal (or
  /// cancellation) valid requests are silent no-ops. Demand accumulates
  /// across calls; requesting more than the source holds is not an error.
  ///
  /// # Arguments
  ///
  /// * `n` - How many additional elements to authorize.
  pub fn request(&mut self, n: i64) -> Result<(), DemandError> {
    if n <= 0 {
      return Err(DemandError::InvalidDemand(n));
    }
    if self.state().is_terminated() || self.completion_dispatched {
      trace!(n, "request ignored, subscription is terminated");
      return Ok(());
    }
    for hook in &mut self.request_hooks {
      hook(n);
    }
    self.demand = self.demand.saturating_add(n as u64);
    trace!(demand = self.demand, "demand accumulated");
    self.drain();
    Ok(())
  }

  /// Cancels the subscription.
  ///
  /// Transitions to [`SubscriptionState::Cancelled`] without delivering a
  /// terminal signal. Idempotent, and a no-op after natural termination.
  pub fn cancel(&mut self) {
    {
      let mut state = self.state.lock().unwrap();
      if *state == SubscriptionState::Active {
        *state = SubscriptionState::Cancelled;
        trace!("subscription cancelled");
      }
    }
    self.demand = 0;
  }

  /// Returns the current lifecycle state.
  pub fn state(&self) -> SubscriptionState {
    *self.state.lock().unwrap()
  }

  /// Returns the currently unfulfilled demand.
  pub fn demand(&self) -> u64 {
    self.demand
  }

  fn drain(&mut self) {
    while self.demand > 0 && self.state() == SubscriptionState::Active {
      match self.source.pull() {
        Some(item) => {
          self.demand -= 1;
          self.dispatch(Signal::Next(item));
        }
        None => break,
      }
    }
    if self.state() == SubscriptionState::Active
      && !self.completion_dispatched
      && self.source.is_exhausted()
    {
      self.completion_dispatched = true;
      trace!(
        source = %self.source.component_info().name,
        "source exhausted, dispatching completion"
      );
      self.dispatch(Signal::Complete);
    }
  }

  fn dispatch(&mut self, signal: Signal<S::Item>) {
    let chain = Arc::clone(&self.chain);
    let state = Arc::clone(&self.state);
    let completing = matches!(signal, Signal::Complete);
    self.ctx.execute(Box::new(move || {
      let ack = chain.lock().unwrap().on_signal(signal);
      if ack == Ack::Terminated {
        let mut state = state.lock().unwrap();
        if *state == SubscriptionState::Active {
          *state = if completing {
            SubscriptionState::Completed
          } else {
            SubscriptionState::Failed
          };
        }
      }
    }));
  }
}
