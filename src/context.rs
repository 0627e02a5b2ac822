//! # Execution Contexts
//!
//! A pipeline delivers signals through an injectable [`ExecutionContext`].
//! The default, [`InlineContext`], runs every delivery synchronously on the
//! thread driving `request` - the base single-threaded model. [`TokioContext`]
//! introduces a scheduling boundary: deliveries are handed to a dedicated
//! worker task and the caller returns immediately.
//!
//! Any context must preserve, per subscription:
//!
//! 1. the order in which signals were dispatched,
//! 2. exactly-once terminal signal delivery,
//! 3. mutual exclusion - no two callbacks run concurrently.
//!
//! Both built-in contexts satisfy these: `InlineContext` trivially,
//! `TokioContext` by draining a FIFO queue from a single worker.

use tokio::sync::mpsc;

/// A unit of signal-delivery work.
pub type Task = Box<dyn FnOnce() + Send>;

/// Trait for the capability deciding where signal delivery runs.
pub trait ExecutionContext {
  /// Runs or enqueues one delivery task.
  fn execute(&mut self, task: Task);
}

/// Executes every task immediately on the calling thread.
///
/// With this context the whole pull/emit cycle is a plain synchronous
/// call/return chain with no suspension points.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineContext;

impl ExecutionContext for InlineContext {
  fn execute(&mut self, task: Task) {
    task();
  }
}

/// Executes tasks on a dedicated Tokio worker task, in dispatch order.
///
/// Must be created inside a Tokio runtime. If the runtime shuts down before
/// the subscription terminates, remaining deliveries are dropped.
pub struct TokioContext {
  sender: mpsc::UnboundedSender<Task>,
}

impl TokioContext {
  /// Spawns the worker task and returns a context feeding it.
  pub fn new() -> Self {
    let (sender, mut receiver) = mpsc::unbounded_channel::<Task>();
    tokio::spawn(async move {
      while let Some(task) = receiver.recv().await {
        task();
      }
    });
    Self { sender }
  }
}

impl Default for TokioContext {
  fn default() -> Self {
    Self::new()
  }
}

impl ExecutionContext for TokioContext {
  fn execute(&mut self, task: Task) {
    // A closed channel means the runtime is gone; nothing left to notify.
    let _ = self.sender.send(task);
  }
}
