//! # Demandflow
//!
//! A cold, pull-based reactive stream core with explicit demand.
//!
//! Demandflow models the smallest useful reactive pipeline: a finite source,
//! zero or more mapping stages, and a single subscriber, composed linearly.
//! Control flows upstream as demand (`request(n)`), data flows downstream as
//! signals, and only in response to outstanding demand.
//!
//! ## Key Properties
//!
//! - **Cold**: a source does no work until a subscriber attaches and requests
//!   elements.
//! - **Backpressured**: the subscription owns an explicit demand counter;
//!   elements are never pushed past it.
//! - **Exactly-once termination**: each subscription observes at most one
//!   terminal signal (completion or error), after which the pipeline is inert.
//! - **Fail-fast**: a fault inside a transformation becomes a terminal error
//!   signal instead of escaping the call stack.
//!
//! ## Quick Start
//!
//! ```rust
//! use demandflow::{CallbackSubscriber, Pipeline, RangeSource};
//!
//! # fn example() -> Result<(), demandflow::DemandError> {
//! let mut subscription = Pipeline::new(RangeSource::new(1i64, 6))
//!   .map(|i| i * 10)
//!   .subscribe(CallbackSubscriber::new().on_next(|v| println!("{v}")));
//!
//! subscription.request(6)?;
//! # Ok(())
//! # }
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Execution contexts that decide where signal delivery runs.
pub mod context;
/// Error types: demand violations and in-stream failures.
pub mod error;
/// Intermediate stages that sit between a source and a subscriber.
pub mod operators;
/// Fluent composition of sources, operators, and subscribers.
pub mod pipeline;
/// The signal variants flowing through a pipeline.
pub mod signal;
/// The pull contract implemented by element sources.
pub mod source;
/// Built-in sources.
pub mod sources;
/// The downstream signal handler contract and callback adapter.
pub mod subscriber;
/// Demand bookkeeping and the pull/emit cycle.
pub mod subscription;

#[cfg(test)]
mod subscriber_test;

pub use context::{ExecutionContext, InlineContext, TokioContext};
pub use error::{BoxError, ComponentInfo, DemandError, ErrorContext, StreamError, StringError};
pub use operators::{MapStage, TapStage};
pub use pipeline::Pipeline;
pub use signal::{Ack, Signal};
pub use source::{Source, SourceConfig};
pub use sources::RangeSource;
pub use subscriber::{CallbackSubscriber, Subscriber};
pub use subscription::{PullSubscription, SubscriptionState};
