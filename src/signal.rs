//! # Signals
//!
//! The signal vocabulary of a pipeline. Every interaction between adjacent
//! stages is one of the [`Signal`] variants delivered to a
//! [`Subscriber`](crate::subscriber::Subscriber), acknowledged with an [`Ack`].
//!
//! Termination is data, not control flow: a stage that fails synthesizes a
//! `Signal::Error` instead of panicking, and a downstream handler reports
//! termination through its `Ack` instead of unwinding.

use crate::error::StreamError;

/// A single event flowing downstream through a pipeline.
///
/// A well-behaved upstream delivers zero or more `Next` signals followed by at
/// most one terminal signal (`Complete` or `Error`), and nothing afterwards.
#[derive(Debug)]
pub enum Signal<T> {
  /// An element, delivered against one unit of outstanding demand.
  Next(T),
  /// Normal termination: the source is exhausted.
  Complete,
  /// Abnormal termination: a stage or source failed.
  Error(StreamError),
}

impl<T> Signal<T> {
  /// Returns `true` for `Complete` and `Error`, the signals that end a
  /// subscription's lifecycle.
  pub fn is_terminal(&self) -> bool {
    !matches!(self, Signal::Next(_))
  }
}

impl<T: Clone> Clone for Signal<T> {
  fn clone(&self) -> Self {
    match self {
      Signal::Next(v) => Signal::Next(v.clone()),
      Signal::Complete => Signal::Complete,
      Signal::Error(e) => Signal::Error(e.clone()),
    }
  }
}

/// A downstream handler's acknowledgment of a delivered signal.
///
/// `Terminated` tells the caller that the handler (or something below it) has
/// reached a terminal state and must not be sent further signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
  /// The handler accepted the signal and remains active.
  Continue,
  /// The handler is terminated; deliver nothing further.
  Terminated,
}
