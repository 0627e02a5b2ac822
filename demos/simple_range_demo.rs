//! Reference scenario: emit 1..=6, map each element through `10 / (i - 3)`,
//! and log the request/complete/error lifecycle. The division faults at
//! i = 3, so the subscriber sees -5, -10, then the error signal.
//!
//! Termination is awaited on an explicit channel rather than a fixed sleep.

use demandflow::{CallbackSubscriber, Pipeline, RangeSource, TokioContext};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("division by zero")]
struct DivideByZero;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .init();

  let (terminal_tx, mut terminal_rx) = mpsc::unbounded_channel();
  let error_tx = terminal_tx.clone();

  let mut subscription = Pipeline::new(RangeSource::new(1i64, 6).with_name("one-to-six".to_string()))
    .inspect_request(|n| info!(n, "requested elements"))
    .inspect_complete(|| info!("source sequence complete"))
    .try_map(|i| {
      info!(i, "transforming element");
      10i64.checked_div(i - 3).ok_or(DivideByZero)
    })
    .with_execution_context(TokioContext::new())
    .subscribe(
      CallbackSubscriber::new()
        .on_next(|v: i64| info!(v, "received element"))
        .on_error(move |e| {
          error!(error = %e, "stream failed");
          let _ = error_tx.send(());
        })
        .on_complete(move || {
          info!("subscriber complete");
          let _ = terminal_tx.send(());
        }),
    );

  subscription.request(6)?;
  terminal_rx.recv().await;

  info!(state = ?subscription.state(), "pipeline terminated");
  Ok(())
}
