//! Built-in sources.

/// A source that lazily generates a bounded numeric sequence.
pub mod range;

#[cfg(test)]
mod range_test;

pub use range::RangeSource;
