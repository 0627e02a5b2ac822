//! Intermediate stages.
//!
//! An operator implements [`Subscriber`](crate::subscriber::Subscriber) for
//! its input type and forwards signals to a boxed downstream subscriber,
//! possibly transformed. Every operator enforces the termination contract
//! locally: once it has seen or synthesized a terminal signal, it goes inert
//! and suppresses everything further in both directions.

/// One-to-one element transformation with fail-fast error capture.
pub mod map;
/// Side-effect hooks that pass signals through unchanged.
pub mod tap;

#[cfg(test)]
mod map_test;

pub use map::MapStage;
pub use tap::TapStage;
