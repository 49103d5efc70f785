//! Progress observation
//!
//! The sink is invoked synchronously on the thread performing the writes,
//! once per completed group. Implementations must not block.

/// Observer of split progress.
pub trait ProgressSink {
    /// A run of `total` groups is starting.
    fn begin(&mut self, total: usize);
    /// One group finished writing.
    fn advance(&mut self);
    /// The run ended, successfully or not; the indicator returns to zero.
    fn reset(&mut self);
}

/// Sink that ignores all progress events.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn begin(&mut self, _total: usize) {}
    fn advance(&mut self) {}
    fn reset(&mut self) {}
}
